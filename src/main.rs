use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use s2y::{config, error, server};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address to listen on, overrides SERVER_ADDRESS
    #[clap(long)]
    address: Option<String>,

    /// Maximum concurrent video searches per playlist, overrides SEARCH_CONCURRENCY
    #[clap(long, value_parser = parse_concurrency)]
    concurrency: Option<usize>,
}

fn parse_concurrency(raw: &str) -> Result<usize, String> {
    config::parse_concurrency(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let mut cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => error!("{}", e),
    };
    if let Some(address) = cli.address {
        cfg.server_address = address;
    }
    if let Some(concurrency) = cli.concurrency {
        cfg.search_concurrency = concurrency;
    }

    if let Err(e) = server::start_api_server(cfg).await {
        error!("{}", e);
    }
}
