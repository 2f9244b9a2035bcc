//! # mocr
//! src/lib.rs
//!
//! Servidor HTTP mock programable para suites de tests. Reemplaza a una
//! dependencia de red real: registra cada request que llega, devuelve en
//! orden las respuestas encoladas y se detiene limpiamente entre tests.
//!
//! ## Arquitectura
//!
//! - `spy`: historial de requests (`RequestRecorder`) y callback `RequestSpy`
//! - `queue`: cola FIFO de respuestas mock, cada una se sirve una sola vez
//! - `dispatcher`: handler único de todos los requests
//! - `server`: listener TCP y máquina de estados start/stop
//! - `http`: parsing de requests y construcción de responses
//! - `config`, `logger`, `error`: configuración, sink de logs y errores
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mocr::{MockServer, ServerConfig};
//! use serde_json::json;
//!
//! let server = MockServer::new(ServerConfig { port: 7091, ..Default::default() });
//! server.start()?;
//! server.mock_next_responses([json!({"username": "johndoe"}), json!({"username": "martymcfly"})])?;
//! // GET /profile → {"username":"johndoe"}
//! // GET /profile → {"username":"martymcfly"}
//! // GET /profile → Hello World
//! server.stop()?;
//! # Ok::<(), mocr::MocrError>(())
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod logger;
pub mod mock_server;
pub mod queue;
pub mod server;
pub mod spy;

pub use config::ServerConfig;
pub use dispatcher::Dispatcher;
pub use error::{MocrError, Result};
pub use logger::{Logger, MemoryLogger, TracingLogger};
pub use mock_server::MockServer;
pub use queue::{MockResponse, ResponseQueue};
pub use server::{ServerHandle, ServerState};
pub use spy::{BodyParseError, ParsedBody, RecordedRequest, RequestRecord, RequestRecorder, RequestSpy};
