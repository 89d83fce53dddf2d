use std::env;

use immo_roi::{api, logging};

#[tokio::main]
async fn main() {
    logging::init_logging("info");

    let raw_args: Vec<String> = env::args().collect();
    match raw_args.get(1).map(|s| s.as_str()) {
        Some("serve") => {
            let port = raw_args
                .get(2)
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(8080);
            if let Err(e) = api::run_http_server(port).await {
                tracing::error!(error = %e, "server error");
                std::process::exit(1);
            }
        }
        Some("simulate") => {
            let args = std::iter::once("immo-roi".to_string()).chain(raw_args.into_iter().skip(2));
            match api::run_cli(args) {
                Ok(json) => println!("{json}"),
                Err(api::ApiError::Cli(e)) => e.exit(),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(2);
                }
            }
        }
        _ => {
            eprintln!("Usage: immo-roi serve [port]");
            eprintln!("       immo-roi simulate [--help | options]");
            std::process::exit(1);
        }
    }
}
