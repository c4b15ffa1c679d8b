//! # Lifeweb Core
//!
//! Conway's Game of Life on a toroidal grid.
//!
//! This crate contains the simulation engine:
//! - A row-major boolean [`Grid`] with wrap-around neighbour counting
//! - The B3/S23 rule applied per cell
//! - A double-buffered [`Session`] that advances one generation per call
//! - Random seeding driven by a caller-supplied RNG
//! - Text dumps for offline inspection
//!
//! ## Example
//!
//! ```
//! use lifeweb_core::Session;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut session = Session::new(20, 30, 40, &mut rng).unwrap();
//! let next = session.advance_generation().unwrap();
//! assert_eq!(next.dimensions(), (20, 30));
//! ```

/// Text dumps and coloured rendering
pub mod debug;
/// Engine error types
pub mod error;
/// Grid storage, neighbour counting and the per-cell rule
pub mod grid;
/// Random initial population
pub mod seed;
/// Double-buffered session state
pub mod session;
/// Whole-grid generation step
pub mod stepper;

pub use error::{LifeError, Result};
pub use grid::Grid;
pub use seed::FillStrategy;
pub use session::Session;
