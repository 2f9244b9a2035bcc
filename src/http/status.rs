//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! El servidor mock responde siempre `200 OK`. Los demás códigos solo los usa
//! la capa de transporte:
//!
//! - **1xx**: `100 Continue` para clientes que envían `Expect: 100-continue`
//! - **2xx**: `200 OK` para toda petición despachada
//! - **4xx**: `400 Bad Request` cuando el mensaje HTTP no se puede parsear

/// Códigos de estado que emite el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 100 Continue - El cliente puede enviar el body
    Continue = 100,

    /// 200 OK - La petición fue despachada
    Ok = 200,

    /// 400 Bad Request - HTTP malformado (error de transporte)
    BadRequest = 400,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use mocr::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Continue => "Continue",
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Continue.as_u16(), 100);
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    }

    #[test]
    fn test_classification() {
        assert!(StatusCode::Ok.is_success());
        assert!(!StatusCode::Continue.is_success());
        assert!(StatusCode::BadRequest.is_client_error());
        assert!(!StatusCode::Ok.is_client_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::Continue.to_string(), "100 Continue");
        assert_eq!(StatusCode::BadRequest.to_string(), "400 Bad Request");
    }
}
