mod app;
mod ui;

use metadata_extractor::metadata::ConsoleSink;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    if env::args().len() > 1 {
        eprintln!(
            "El extractor es interactivo y no acepta argumentos. Ejecuta solo `cargo run` o el binario sin parámetros."
        );
        std::process::exit(1);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "iniciando extractor de metadata");

    let mut sink = ConsoleSink;
    if let Err(message) = app::run(&mut sink) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
