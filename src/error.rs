//! # Errores del servidor mock
//! src/error.rs
//!
//! Errores que se reportan al test que controla el servidor. Ningún error
//! se escribe en el body HTTP: el servidor siempre contesta `200`.

use crate::server::ServerState;
use thiserror::Error;

/// Resultado de las operaciones del servidor mock
pub type Result<T, E = MocrError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum MocrError {
    /// El puerto configurado no está disponible
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Operación no válida en el estado actual del servidor
    #[error("cannot {operation} a mock server that is {state}")]
    IllegalState {
        operation: &'static str,
        state: ServerState,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// La respuesta mock no se pudo serializar a JSON
    #[error("failed to serialize mock response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MocrError {
    pub(crate) fn bind(addr: impl Into<String>, source: std::io::Error) -> Self {
        MocrError::Bind {
            addr: addr.into(),
            source,
        }
    }

    pub fn is_bind(&self) -> bool {
        matches!(self, MocrError::Bind { .. })
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self, MocrError::IllegalState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_message() {
        let err = MocrError::bind(
            "127.0.0.1:9091",
            std::io::Error::from(std::io::ErrorKind::AddrInUse),
        );

        assert!(err.is_bind());
        assert!(err.to_string().starts_with("failed to bind 127.0.0.1:9091"));
    }

    #[test]
    fn test_illegal_state_message() {
        let err = MocrError::IllegalState {
            operation: "stop",
            state: ServerState::Stopped,
        };

        assert!(err.is_illegal_state());
        assert_eq!(err.to_string(), "cannot stop a mock server that is stopped");
    }
}
