//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! - `tcp`: listener, thread de accept y un thread por conexión
//! - `lifecycle`: máquina de estados start/stop y líneas de log de debug

pub mod lifecycle;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use lifecycle::{start_server, stop_server, Lifecycle, ServerState};
pub use tcp::ServerHandle;
