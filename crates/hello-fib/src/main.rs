//! hello-fib CLI
//!
//! Takes no arguments beyond `--help` and `--version`. Diagnostics go to
//! stderr so stdout carries only the program output.

use clap::Parser as ClapParser;
use std::io;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "hello-fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print a greeting, a conditional result and offset Fibonacci values", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Set up logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hello_fib=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("starting hello-fib");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = hello_fib::run(&mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
