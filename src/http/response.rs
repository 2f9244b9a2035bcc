//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! API para construir respuestas HTTP y convertirlas a bytes para
//! enviarlas al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 22\r\n
//! Connection: close\r\n
//! \r\n
//! {"username":"johndoe"}
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use mocr::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Hello World");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"Hello World"));
//! ```

use super::StatusCode;
use std::collections::HashMap;

/// Content-Type de las respuestas mock
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content-Type de la respuesta por defecto
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers HTTP (Content-Type, Content-Length, etc.)
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta (si ya existe, se sobrescribe)
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo desde un string y calcula `Content-Length`
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo desde bytes y calcula `Content-Length`
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self.headers.insert(
            "Content-Length".to_string(),
            self.body.len().to_string(),
        );
        self
    }

    /// Respuesta `200 OK` con un body JSON ya serializado
    ///
    /// # Ejemplo
    /// ```
    /// use mocr::http::Response;
    ///
    /// let response = Response::json(r#"{"username":"johndoe"}"#);
    /// assert_eq!(response.header("Content-Type"), Some("application/json"));
    /// ```
    pub fn json(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", CONTENT_TYPE_JSON)
            .with_body(body)
    }

    /// Respuesta `200 OK` en texto plano
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", CONTENT_TYPE_TEXT)
            .with_body(body)
    }

    /// Respuesta `400 Bad Request` que usa el transporte ante HTTP malformado
    pub fn bad_request(message: &str) -> Self {
        Self::new(StatusCode::BadRequest)
            .with_header("Content-Type", CONTENT_TYPE_TEXT)
            .with_body(message)
    }

    /// Convierte la respuesta a bytes listos para el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = self.head_bytes();
        result.extend_from_slice(&self.body);
        result
    }

    /// Status line y headers, sin body (respuesta a `HEAD`)
    ///
    /// `Content-Length` se mantiene con el largo que tendría el body.
    pub fn head_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(128 + self.body.len());

        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_body() {
        let response = Response::new(StatusCode::Ok).with_body("Hello World");

        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.header("Content-Length"), Some("11"));
    }

    #[test]
    fn test_head_bytes_omit_body() {
        let response = Response::text("Hello World");
        let head = String::from_utf8(response.head_bytes()).unwrap();

        assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(head.contains("Content-Length: 11\r\n"));
        assert!(head.ends_with("\r\n\r\n"));
        assert!(!head.contains("Hello World"));
        assert_eq!(response.to_bytes().len(), head.len() + 11);
    }

    #[test]
    fn test_json_response() {
        let response = Response::json(r#"{"username":"johndoe"}"#);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.body(), br#"{"username":"johndoe"}"#);
    }

    #[test]
    fn test_text_response() {
        let response = Response::text("Hello World");

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.body(), b"Hello World");
    }

    #[test]
    fn test_bad_request_response() {
        let response = Response::bad_request("Invalid request line format");
        assert_eq!(response.status(), StatusCode::BadRequest);
        assert!(String::from_utf8_lossy(response.body()).contains("Invalid request line"));
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("Test");

        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_interim_continue_has_no_headers() {
        let bytes = Response::new(StatusCode::Continue).to_bytes();
        assert_eq!(bytes, b"HTTP/1.1 100 Continue\r\n\r\n");
    }
}
