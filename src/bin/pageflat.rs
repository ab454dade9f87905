use std::env;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rs_pageflat::{fetch_page, flatten_bytes, Error, Options, Result};

/// Environment variable holding the credential sent with the request.
const CREDENTIAL_ENV: &str = "PAGEFLAT_COOKIE";

#[derive(Debug, Parser)]
#[command(
    name = "pageflat",
    version,
    about = "Flatten an authenticated page's content region into tag-indexed lines"
)]
struct Cli {
    /// URL of the page to fetch
    url: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(listing) => println!("{listing}"),
        Err(err) => {
            eprintln!("pageflat: {err}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    // Resolve the credential before anything touches the network
    let credential = env::var(CREDENTIAL_ENV)
        .map_err(|_| Error::MissingCredential(CREDENTIAL_ENV.to_string()))?;

    let options = Options::default();
    let body = fetch_page(&cli.url, &credential, &options)?;
    flatten_bytes(&body, &options)
}
