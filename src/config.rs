use anyhow::{bail, Context, Result};
use lifeweb_core::FillStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub height: usize,
    pub width: usize,
    pub seed_percentage: u8,
    #[serde(default)]
    pub fill: FillStrategy,
    /// Fixed RNG seed; random from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DebugConfig {
    /// Where to dump the grid on shutdown
    #[serde(default)]
    pub dump_path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                height: 100,
                width: 100,
                seed_percentage: 40,
                fill: FillStrategy::Shuffle,
                seed: None,
            },
            server: ServerConfig {
                host: IpAddr::from([0, 0, 0, 0]),
                port: 8081,
            },
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `path`, or writes and returns the defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            return Self::from_toml(&content)
                .with_context(|| format!("parsing config {}", path.display()));
        }

        let default = Self::default();
        // Create default config file if missing
        match toml::to_string(&default) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    tracing::warn!("Could not write default config to {}: {}", path.display(), e);
                }
            }
            Err(e) => tracing::warn!("Could not serialize default config: {}", e),
        }
        Ok(default)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.world.height == 0 || self.world.width == 0 {
            bail!(
                "world dimensions must be positive, got {}x{}",
                self.world.height,
                self.world.width
            );
        }
        if self.world.seed_percentage > 100 {
            bail!(
                "seed_percentage must be within 0..=100, got {}",
                self.world.seed_percentage
            );
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}
