//! Reads an article page from stdin and prints its media as JSON.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=rs_article_media=debug`).

use std::io;

use rs_article_media::{extract_reader, Options};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let result = match extract_reader(io::stdin().lock(), &Options::default()) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Failed to extract media: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize result: {err}");
            std::process::exit(1);
        }
    }
}
