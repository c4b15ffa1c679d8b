//! Graceful shutdown handling for the service.
//!
//! Runs cleanup once the server has stopped accepting requests.

use anyhow::{Context, Result};
use lifeweb_core::debug::save_debug;
use lifeweb_server::AppState;
use std::path::PathBuf;

/// Decides what happens to the session once serving ends.
#[derive(Debug, Default)]
pub struct ShutdownManager {
    dump_path: Option<PathBuf>,
}

impl ShutdownManager {
    pub fn new(dump_path: Option<PathBuf>) -> Self {
        Self { dump_path }
    }

    /// Returns whether the grid is dumped on exit.
    pub fn should_dump_on_exit(&self) -> bool {
        self.dump_path.is_some()
    }

    /// Performs cleanup operations before shutdown.
    pub fn cleanup(&self, state: &AppState) -> Result<()> {
        tracing::info!("Performing shutdown cleanup...");

        if let Some(path) = &self.dump_path {
            let session = state.lock_session();
            tracing::info!(
                generation = session.generation(),
                "Dumping current grid before exit..."
            );
            save_debug(session.current(), path)
                .with_context(|| format!("dumping grid to {}", path.display()))?;
        }

        tracing::info!("Cleanup complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeweb_core::{Grid, Session};

    #[test]
    fn test_no_dump_by_default() {
        let manager = ShutdownManager::default();
        assert!(!manager.should_dump_on_exit());
        let state = AppState::new(Session::from_grid(Grid::new(2, 2).unwrap()));
        manager.cleanup(&state).unwrap();
    }

    #[test]
    fn test_cleanup_writes_dump() {
        let path = std::env::temp_dir().join(format!("lifeweb_shutdown_{}.txt", std::process::id()));
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 1, true);
        let state = AppState::new(Session::from_grid(grid));

        let manager = ShutdownManager::new(Some(path.clone()));
        assert!(manager.should_dump_on_exit());
        manager.cleanup(&state).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(content, "000\n100\n");
    }
}
