//! # Body recibido
//! src/spy/body.rs
//!
//! Clasifica el body de cada request antes de registrarlo:
//!
//! | Body                                  | Resultado              |
//! |---------------------------------------|------------------------|
//! | vacío                                 | `None`                 |
//! | Content-Type JSON, parsea bien        | `ParsedBody::Json`     |
//! | Content-Type JSON, no parsea          | `ParsedBody::Invalid`  |
//! | otro Content-Type, UTF-8 válido       | `ParsedBody::Text`     |
//! | otro Content-Type, binario            | `ParsedBody::Binary`   |

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Body JSON que no se pudo parsear
///
/// No es fatal: el request se registra y se contesta igual.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("request body is not valid JSON: {message}")]
pub struct BodyParseError {
    /// Mensaje del parser
    pub message: String,
    /// Bytes tal cual llegaron
    #[serde(skip)]
    pub raw: Vec<u8>,
}

/// Body de un request ya interpretado
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParsedBody {
    Json(Value),
    Text(String),
    Binary(Vec<u8>),
    Invalid(BodyParseError),
}

impl ParsedBody {
    /// Interpreta `raw` según el `Content-Type` del request
    pub fn from_request(content_type: Option<&str>, raw: &[u8]) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        if content_type.is_some_and(is_json_content_type) {
            return Some(match serde_json::from_slice(raw) {
                Ok(value) => ParsedBody::Json(value),
                Err(e) => ParsedBody::Invalid(BodyParseError {
                    message: e.to_string(),
                    raw: raw.to_vec(),
                }),
            });
        }

        Some(match std::str::from_utf8(raw) {
            Ok(text) => ParsedBody::Text(text.to_string()),
            Err(_) => ParsedBody::Binary(raw.to_vec()),
        })
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ParsedBody::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParsedBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Error de parseo si el body decía ser JSON y no lo era
    pub fn parse_error(&self) -> Option<&BodyParseError> {
        match self {
            ParsedBody::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// `application/json`, o cualquier `*/*+json`, ignorando parámetros
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || mime.ends_with("+json")
}
