use clap::Parser;

use showcase_proxy::cli::{run, ProxyArgs};

#[tokio::main]
async fn main() {
    if let Err(e) = run(ProxyArgs::parse()).await {
        log::error!("{}", e);
        eprintln!("showcase-proxy: {}", e);
        std::process::exit(1);
    }
}
