use std::sync::Arc;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use recify::{config, config::Config, error, server};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address and port to bind the server to (overrides SERVER_ADDRESS)
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    if let Some(address) = cli.address {
        config.server_address = address;
    }

    server::start_server(Arc::new(config)).await;
}
