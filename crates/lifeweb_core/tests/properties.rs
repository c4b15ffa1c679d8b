use lifeweb_core::debug::write_debug;
use lifeweb_core::stepper::advance;
use lifeweb_core::{FillStrategy, Grid};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_grid()(height in 1usize..16, width in 1usize..16)
        (cells in proptest::collection::vec(any::<bool>(), height * width),
         height in Just(height),
         width in Just(width)) -> Grid {
        let rows: Vec<Vec<bool>> = cells.chunks(width).map(<[bool]>::to_vec).collect();
        Grid::from_rows(&rows).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_neighbor_count_in_range(grid in arb_grid(), x in -20isize..40, y in -20isize..40) {
        let n = grid.neighbor_count(x, y);
        prop_assert!(n <= 8, "neighbor count {} above 8", n);
    }

    #[test]
    fn test_wrap_matches_opposite_edge(grid in arb_grid(), y in 0isize..16, x in 0isize..16) {
        let w = grid.width() as isize;
        let h = grid.height() as isize;
        prop_assert_eq!(grid.neighbor_value(-1, y), grid.neighbor_value(w - 1, y));
        prop_assert_eq!(grid.neighbor_value(x, -1), grid.neighbor_value(x, h - 1));
    }

    #[test]
    fn test_advance_leaves_source_untouched(grid in arb_grid()) {
        let snapshot = grid.clone();
        let (h, w) = grid.dimensions();
        let mut first = Grid::new(h, w).unwrap();
        let mut second = Grid::new(h, w).unwrap();
        advance(&grid, &mut first).unwrap();
        advance(&grid, &mut second).unwrap();
        prop_assert_eq!(&grid, &snapshot);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_debug_dump_counts_population(grid in arb_grid()) {
        let mut out = Vec::new();
        write_debug(&grid, &mut out).unwrap();
        let ones = out.iter().filter(|&&b| b == b'1').count();
        prop_assert_eq!(ones, grid.population());
        let lines = out.iter().filter(|&&b| b == b'\n').count();
        prop_assert_eq!(lines, grid.height());
    }

    #[test]
    fn test_uniform_fill_exact(seed in any::<u64>(), percentage in 0u8..=100) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::new(10, 13).unwrap();
        grid.random_fill(percentage, FillStrategy::Uniform, &mut rng).unwrap();
        prop_assert_eq!(grid.population(), usize::from(percentage) * 130 / 100);
    }
}
