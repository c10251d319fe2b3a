use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use spotsweep::{config, error, info, server};

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
    /// Address to bind instead of SERVER_ADDRESS
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    config::load_env();
    let cli = Cli::parse();

    // Missing credentials or a malformed authorize endpoint abort here
    // rather than on the first login.
    let _ = config::spotify_client_id();
    let _ = config::spotify_client_secret();
    if let Err(e) = reqwest::Url::parse(&config::spotify_apiauth_url()) {
        error!("Invalid SPOTIFY_AUTH_URL: {}", e);
    }

    let addr = cli.address.unwrap_or_else(config::server_addr);

    info!("Redirect URI: {}", config::spotify_redirect_uri());
    server::start_server(&addr).await;
}
