//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Transporte HTTP/1.x mínimo sobre el que corre el servidor mock:
//!
//! - Lectura y parsing de requests (headers + body completo)
//! - Construcción de responses
//! - Códigos de estado
//!
//! ### Formato de Request
//!
//! ```text
//! POST /profile HTTP/1.1\r\n
//! Content-Length: 6\r\n
//! \r\n
//! Hello!
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 11\r\n
//! \r\n
//! Hello World
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
