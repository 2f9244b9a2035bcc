//! # mocr - Entry Point
//! src/main.rs
//!
//! Levanta el servidor mock desde la línea de comandos. Se detiene al
//! cerrar stdin (Ctrl-D) o al escribir `q`.

use clap::Parser;
use mocr::logger::init_tracing;
use mocr::{MockServer, ServerConfig};
use std::io::BufRead;

fn main() {
    let config = ServerConfig::parse();
    init_tracing(config.debug);

    let server = MockServer::new(config);

    if let Err(e) = server.start() {
        tracing::error!("💥 {}", e);
        std::process::exit(1);
    }

    if let Some(url) = server.url("/") {
        tracing::info!("listening on {} (type `q` or press Ctrl-D to stop)", url);
    }

    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(line) if matches!(line.trim(), "q" | "quit") => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("failed to read stdin: {}", e);
                break;
            }
        }
    }

    if let Err(e) = server.stop() {
        tracing::error!("💥 {}", e);
        std::process::exit(1);
    }
}
