pub mod shutdown;

pub use shutdown::ShutdownManager;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use lifeweb_core::Session;
use lifeweb_server::{AppState, SharedState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::future::Future;
use tokio::net::TcpListener;

/// The service: one seeded session plus the HTTP front end.
pub struct App {
    pub config: AppConfig,
    state: SharedState,
    shutdown: ShutdownManager,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let world = &config.world;
        let mut rng = if let Some(seed) = world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let session = Session::with_fill(
            world.height,
            world.width,
            world.seed_percentage,
            world.fill,
            &mut rng,
        )
        .context("creating session")?;

        let shutdown = ShutdownManager::new(config.debug.dump_path.clone());
        Ok(Self {
            state: AppState::new(session),
            shutdown,
            config,
        })
    }

    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.socket_addr();
        TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {}", addr))
    }

    /// Serves on `listener` until `signal` resolves, then runs cleanup.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        lifeweb_server::serve(listener, self.state.clone(), signal)
            .await
            .context("server error")?;
        self.shutdown.cleanup(&self.state)
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        self.run_until(listener, lifeweb_server::shutdown_signal())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_apps_start_identical() {
        let mut config = AppConfig::default();
        config.world.height = 12;
        config.world.width = 12;
        config.world.seed = Some(99);

        let a = App::new(config.clone()).unwrap();
        let b = App::new(config).unwrap();
        assert_eq!(
            a.state().lock_session().current(),
            b.state().lock_session().current()
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.world.height = 0;
        assert!(App::new(config).is_err());
    }
}
