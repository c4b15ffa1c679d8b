use anyhow::Result;
use clap::Parser;
use lifeweb_lib::app::App;
use lifeweb_lib::config::AppConfig;
use lifeweb_lib::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Grid height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Grid width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Share of cells alive at start, 0-100
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    percentage: Option<u8>,

    /// Fixed RNG seed for a reproducible start
    #[arg(long)]
    seed: Option<u64>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Dump the final grid to this file on shutdown
    #[arg(long)]
    dump: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut AppConfig) {
        if let Some(height) = self.height {
            config.world.height = height;
        }
        if let Some(width) = self.width {
            config.world.width = width;
        }
        if let Some(percentage) = self.percentage {
            config.world.seed_percentage = percentage;
        }
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.dump.is_some() {
            config.debug.dump_path = self.dump;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);

    tracing::info!(
        height = config.world.height,
        width = config.world.width,
        seed_percentage = config.world.seed_percentage,
        fill = ?config.world.fill,
        "Starting Lifeweb"
    );

    let app = App::new(config)?;
    if let Err(e) = app.run().await {
        tracing::error!("Application error: {:#}", e);
        return Err(e);
    }
    tracing::info!("Exited clean.");
    Ok(())
}
