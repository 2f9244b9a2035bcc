//! # Logger inyectable
//! src/logger.rs
//!
//! Sink de líneas de texto que reciben el ciclo de vida y el dispatcher en
//! modo debug. Se inyecta en la construcción para que los tests puedan
//! capturar las líneas exactas con `MemoryLogger`.
//!
//! Los diagnósticos internos (errores de conexión, timeouts) no pasan por
//! aquí: van directo a `tracing`.

use std::sync::{Arc, Mutex};

/// Recibe líneas de log ya formateadas
pub trait Logger: Send + Sync {
    fn info(&self, line: &str);
}

/// Logger por defecto: reenvía cada línea a `tracing::info!`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, line: &str) {
        tracing::info!(target: "mocr", "{}", line);
    }
}

/// Logger que guarda las líneas en memoria
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Líneas registradas hasta ahora
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Vacía el buffer y retorna lo que había
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

impl Logger for MemoryLogger {
    fn info(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

/// Instala un subscriber `fmt` de `tracing-subscriber`
///
/// Respeta `RUST_LOG`; si no está definido usa `info`, o `debug` con `verbose`.
/// No hace nada si ya había un subscriber global.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
