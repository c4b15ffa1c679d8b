//! Offline inspection: text dumps and terminal rendering.

use crate::error::Result;
use crate::grid::Grid;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LIVE_SQUARE: &str = "\u{1F7E9}";
const DEAD_SQUARE: &str = "\u{1F7EB}";

/// Writes one newline-terminated line of `'0'`/`'1'` per row.
pub fn write_debug<W: Write>(grid: &Grid, mut writer: W) -> Result<()> {
    for line in grid.serialize_debug() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and dumps the grid into it.
pub fn save_debug<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_debug(grid, BufWriter::new(file))?;
    tracing::info!(path = %path.as_ref().display(), "Saved grid dump");
    Ok(())
}

/// Green squares for live cells, brown for dead; no trailing newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &alive in row {
                f.write_str(if alive { LIVE_SQUARE } else { DEAD_SQUARE })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_debug_lines() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(1, 0, true);
        grid.set(2, 1, true);
        let mut out = Vec::new();
        write_debug(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "010\n001\n");
    }

    #[test]
    fn test_write_failure_surfaces() {
        let grid = Grid::new(2, 2).unwrap();
        let err = write_debug(&grid, FailingWriter).unwrap_err();
        assert!(matches!(err, LifeError::WriteFailure(ref e) if e.kind() == io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_save_debug_to_file() {
        let path = std::env::temp_dir().join(format!("lifeweb_dump_{}.txt", std::process::id()));
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true);
        save_debug(&grid, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(content, "000\n010\n000\n");
    }

    #[test]
    fn test_save_debug_bad_path() {
        let grid = Grid::new(1, 1).unwrap();
        let path = std::env::temp_dir().join("lifeweb_missing_dir").join("nested").join("dump.txt");
        assert!(matches!(save_debug(&grid, path), Err(LifeError::WriteFailure(_))));
    }

    #[test]
    fn test_display_squares() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, true);
        let rendered = grid.to_string();
        assert_eq!(
            rendered,
            format!("{LIVE_SQUARE}{DEAD_SQUARE}\n{DEAD_SQUARE}{DEAD_SQUARE}")
        );
    }
}
