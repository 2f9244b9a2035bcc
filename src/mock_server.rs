//! # Servidor Mock
//! src/mock_server.rs
//!
//! Punto de entrada para los tests: arranca el servidor, encola respuestas
//! y expone el historial de requests.
//!
//! ```no_run
//! use mocr::{MockServer, ServerConfig};
//! use serde_json::json;
//!
//! let server = MockServer::new(ServerConfig::default());
//! server.start()?;
//!
//! server.mock_next_response(&json!({"username": "johndoe"}))?;
//! // ... el código bajo test hace GET http://localhost:9091/profile ...
//!
//! let calls = server.request_spy().calls();
//! assert_eq!(calls[0].request.url, "/profile");
//!
//! server.stop()?;
//! # Ok::<(), mocr::MocrError>(())
//! ```

use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::logger::{Logger, TracingLogger};
use crate::queue::ResponseQueue;
use crate::server::{Lifecycle, ServerState};
use crate::spy::{RequestRecorder, RequestSpy};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;

/// Servidor HTTP mock de una sola instancia
pub struct MockServer {
    config: ServerConfig,
    recorder: Arc<RequestRecorder>,
    queue: Arc<ResponseQueue>,
    logger: Arc<dyn Logger>,
    spy: Option<Arc<dyn RequestSpy>>,
    lifecycle: Lifecycle,
}

impl MockServer {
    /// Crea una instancia detenida con la configuración dada
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            recorder: Arc::new(RequestRecorder::new()),
            queue: Arc::new(ResponseQueue::new()),
            logger: Arc::new(TracingLogger),
            spy: None,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Reemplaza el logger por defecto (`TracingLogger`)
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Callback invocado por cada request antes de responder
    pub fn with_request_spy<S: RequestSpy + 'static>(mut self, spy: S) -> Self {
        self.spy = Some(Arc::new(spy));
        self
    }

    /// Empieza a escuchar; retorna cuando el socket ya acepta conexiones
    pub fn start(&self) -> Result<()> {
        let dispatcher = Dispatcher::new(
            Arc::clone(&self.recorder),
            Arc::clone(&self.queue),
            Arc::clone(&self.logger),
            self.config.debug,
        )
        .with_spy(self.spy.clone());

        self.lifecycle
            .start(&self.config, Arc::new(dispatcher), self.logger.as_ref())?;
        Ok(())
    }

    /// Cierra el listener; retorna cuando está cerrado y sin requests en curso
    pub fn stop(&self) -> Result<()> {
        self.lifecycle.stop(&self.config, self.logger.as_ref())
    }

    /// Encola la respuesta para el próximo request
    pub fn mock_next_response<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        self.queue.enqueue_serialized(value)?;
        Ok(())
    }

    /// Encola varias respuestas, en orden
    ///
    /// Si algún valor no se puede serializar no se encola ninguno.
    pub fn mock_next_responses<I, T>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        self.queue.enqueue_batch_serialized(values)?;
        Ok(())
    }

    /// Historial de requests recibidos
    pub fn request_spy(&self) -> &RequestRecorder {
        &self.recorder
    }

    /// Respuestas mock que todavía no se sirvieron
    pub fn pending_responses(&self) -> usize {
        self.queue.len()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> ServerState {
        self.lifecycle.state()
    }

    /// Dirección real del listener mientras está corriendo
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.lifecycle.local_addr()
    }

    /// Puerto real; distinto del configurado cuando se pidió el puerto 0
    pub fn port(&self) -> Option<u16> {
        self.local_addr().map(|addr| addr.port())
    }

    /// URL para `path` mientras el servidor está corriendo
    pub fn url(&self, path: &str) -> Option<String> {
        self.port()
            .map(|port| format!("http://localhost:{}{}", port, path))
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if self.state() == ServerState::Running {
            if let Err(e) = self.stop() {
                tracing::warn!("failed to stop mock server on drop: {}", e);
            }
        }
    }
}
