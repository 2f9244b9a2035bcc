//! # Ciclo de vida del servidor
//! src/server/lifecycle.rs
//!
//! Máquina de estados de una instancia:
//!
//! ```text
//! Stopped ──start──▶ Starting ──bind ok──▶ Running ──stop──▶ Stopping ──▶ Stopped (final)
//!                        │
//!                        └──bind error──▶ Stopped (se puede reintentar)
//! ```
//!
//! Una instancia detenida no se puede volver a iniciar: hay que crear otra.

use super::tcp::ServerHandle;
use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;
use crate::error::{MocrError, Result};
use crate::logger::Logger;
use std::fmt;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

/// Línea de log al terminar de detener el servidor (modo debug)
pub const SERVER_STOPPED_LINE: &str = "✋ Mock server has stopped";

/// Línea de log al quedar escuchando (modo debug)
pub fn server_running_line(port: u16) -> String {
    format!("🚀 Server running at http://localhost:{}/.", port)
}

/// Estado de una instancia del servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Starting,
    Running,
    Stopping,
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServerState::Stopped => "stopped",
            ServerState::Starting => "starting",
            ServerState::Running => "running",
            ServerState::Stopping => "stopping",
        })
    }
}

/// Hace bind y deja el servidor aceptando conexiones
///
/// Retorna cuando el socket ya está escuchando.
pub fn start_server(
    config: &ServerConfig,
    dispatcher: Arc<Dispatcher>,
    logger: &dyn Logger,
) -> Result<ServerHandle> {
    config.validate()?;

    let handle = ServerHandle::bind(config, dispatcher)?;

    if config.debug {
        logger.info(&server_running_line(handle.port()));
    }

    Ok(handle)
}

/// Cierra el listener y espera los requests en curso (hasta `shutdown_grace_ms`)
pub fn stop_server(handle: ServerHandle, config: &ServerConfig, logger: &dyn Logger) {
    handle.shutdown(config.shutdown_grace());

    if config.debug {
        logger.info(SERVER_STOPPED_LINE);
    }
}

#[derive(Debug)]
struct LifecycleInner {
    state: ServerState,
    handle: Option<ServerHandle>,
    finished: bool,
}

/// Dueño exclusivo del `ServerHandle` de una instancia
#[derive(Debug)]
pub struct Lifecycle {
    inner: Mutex<LifecycleInner>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LifecycleInner {
                state: ServerState::Stopped,
                handle: None,
                finished: false,
            }),
        }
    }

    pub fn state(&self) -> ServerState {
        self.lock().state
    }

    /// Dirección real del listener mientras está corriendo
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.lock().handle.as_ref().map(ServerHandle::local_addr)
    }

    /// Stopped → Starting → Running
    ///
    /// El lock no se mantiene durante el bind, así que un segundo `start`
    /// concurrente ve `Starting` y falla.
    pub fn start(
        &self,
        config: &ServerConfig,
        dispatcher: Arc<Dispatcher>,
        logger: &dyn Logger,
    ) -> Result<SocketAddr> {
        {
            let mut inner = self.lock();
            if inner.state != ServerState::Stopped || inner.finished {
                return Err(MocrError::IllegalState {
                    operation: "start",
                    state: inner.state,
                });
            }
            inner.state = ServerState::Starting;
        }

        match start_server(config, dispatcher, logger) {
            Ok(handle) => {
                let addr = handle.local_addr();
                let mut inner = self.lock();
                inner.handle = Some(handle);
                inner.state = ServerState::Running;
                Ok(addr)
            }
            Err(e) => {
                self.lock().state = ServerState::Stopped;
                Err(e)
            }
        }
    }

    /// Running → Stopping → Stopped
    ///
    /// Retorna cuando el listener está cerrado y los requests en curso
    /// terminaron (o venció el período de gracia).
    pub fn stop(&self, config: &ServerConfig, logger: &dyn Logger) -> Result<()> {
        let handle = {
            let mut inner = self.lock();
            if inner.state != ServerState::Running {
                return Err(MocrError::IllegalState {
                    operation: "stop",
                    state: inner.state,
                });
            }
            inner.state = ServerState::Stopping;
            inner.handle.take()
        };

        if let Some(handle) = handle {
            stop_server(handle, config, logger);
        }

        let mut inner = self.lock();
        inner.state = ServerState::Stopped;
        inner.finished = true;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, LifecycleInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
