//! # Configuración del Servidor Mock
//! src/config.rs
//!
//! Configuración inmutable de una instancia del servidor. Se construye en
//! código (tests) o desde argumentos CLI / variables de entorno (binario).
//!
//! ## Ejemplos de uso
//!
//! ### Código
//! ```rust
//! use mocr::ServerConfig;
//!
//! let config = ServerConfig { port: 7091, debug: true, ..Default::default() };
//! assert_eq!(config.address(), "127.0.0.1:7091");
//! ```
//!
//! ### CLI
//! ```bash
//! ./mocr --port 7091 --debug
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! MOCR_PORT=7091 MOCR_DEBUG=true ./mocr
//! ```

use crate::error::{MocrError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Puerto por defecto del servidor mock
pub const DEFAULT_PORT: u16 = 9091;

/// Host por defecto
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Tiempo máximo de espera por requests en curso al detener el servidor
pub const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 5_000;

/// Configuración del servidor mock
#[derive(Debug, Clone, PartialEq, Eq, Parser, Serialize, Deserialize)]
#[command(name = "mocr")]
#[command(about = "Servidor HTTP mock programable para tests")]
#[command(version)]
#[serde(default)]
pub struct ServerConfig {
    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "MOCR_PORT")]
    pub port: u16,

    /// Emite una línea de log al iniciar, por cada request y al detenerse
    #[arg(short, long, env = "MOCR_DEBUG")]
    pub debug: bool,

    /// Host/IP en el que escucha
    #[arg(long, default_value = DEFAULT_HOST, env = "MOCR_HOST")]
    pub host: String,

    /// Espera máxima (ms) por requests en curso al detener el servidor
    #[arg(long = "shutdown-grace-ms", default_value_t = DEFAULT_SHUTDOWN_GRACE_MS, env = "MOCR_SHUTDOWN_GRACE_MS")]
    pub shutdown_grace_ms: u64,
}

impl ServerConfig {
    /// Configuración por defecto escuchando en `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(MocrError::InvalidConfig("host must not be empty".to_string()));
        }
        if self.shutdown_grace_ms == 0 {
            return Err(MocrError::InvalidConfig(
                "shutdown grace period must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
            host: DEFAULT_HOST.to_string(),
            shutdown_grace_ms: DEFAULT_SHUTDOWN_GRACE_MS,
        }
    }
}
