use clap::Parser;
use poolimage::{
    config::PoolImageConfig,
    render::{render_fragments, render_pool},
    PoolImageError,
};
use tracing::{debug, error, info, trace};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(version = "0.1", about = "Resolve VM image references for agent pools")]
pub struct PoolImageOpts {
    /// Config file path
    #[clap(short, long, default_value = "/etc/poolimage/config.yaml")]
    config: String,
    /// Only render this agent pool
    #[clap(short, long)]
    pool: Option<String>,
    /// Print single-line JSON
    #[clap(long)]
    compact: bool,
}

fn run(options: &PoolImageOpts) -> Result<String, PoolImageError> {
    debug!("loading config file at {}", options.config);
    let config = PoolImageConfig::load(options.config.as_str())?;
    trace!(
        "config file loaded successfully with content: {:#?}",
        config
    );

    let fragments = match &options.pool {
        Some(name) => render_pool(&config, name)
            .ok_or_else(|| PoolImageError::UnknownPool(name.clone()))?,
        None => render_fragments(&config.agent_pools),
    };

    fragments
        .to_json(!options.compact)
        .map_err(|e| PoolImageError::Other(e.into()))
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = PoolImageOpts::parse();

    match run(&options) {
        Ok(output) => {
            println!("{}", output);
            info!("done");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to render image fragments: {:#}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
