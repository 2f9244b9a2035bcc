//! # Historial de Requests
//! src/spy/recorder.rs
//!
//! Guarda cada request recibido, en orden de llegada, para que el test
//! pueda inspeccionarlo después. El historial solo crece y vive lo mismo
//! que la instancia del servidor.

use super::body::ParsedBody;
use crate::http::Request;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Request tal como llegó al servidor. Inmutable una vez registrado.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedRequest {
    /// Método HTTP (ej: "POST")
    pub method: String,

    /// Path + query, sin host (ej: "/profile?id=7")
    pub url: String,

    /// Headers con nombres en minúsculas
    pub headers: HashMap<String, String>,

    /// Body crudo; vacío si el request no traía body
    #[serde(skip)]
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Path sin query
    pub fn path(&self) -> &str {
        self.url.split_once('?').map_or(self.url.as_str(), |(path, _)| path)
    }

    /// Query parameter decodificado
    pub fn query_param(&self, name: &str) -> Option<String> {
        let (_, params) = crate::http::request::split_target(&self.url);
        params.get(name).cloned()
    }

    /// Header, sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    /// Body crudo, o `None` si no había
    pub fn body(&self) -> Option<&[u8]> {
        (!self.body.is_empty()).then_some(self.body.as_slice())
    }
}

impl From<Request> for RecordedRequest {
    fn from(request: Request) -> Self {
        let (method, url, headers, body) = request.into_parts();
        Self {
            method: method.as_str().to_string(),
            url,
            headers,
            body,
        }
    }
}

/// Entrada del historial: el request y su body interpretado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRecord {
    pub request: RecordedRequest,
    pub body: Option<ParsedBody>,
}

/// Historial thread-safe de requests
#[derive(Debug, Default)]
pub struct RequestRecorder {
    history: Mutex<Vec<RequestRecord>>,
}

impl RequestRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un request al final del historial
    pub fn record(&self, request: RecordedRequest, body: Option<ParsedBody>) {
        self.lock().push(RequestRecord { request, body });
    }

    /// Copia del historial en orden de llegada
    pub fn calls(&self) -> Vec<RequestRecord> {
        self.lock().clone()
    }

    /// Entrada `index` del historial
    pub fn call(&self, index: usize) -> Option<RequestRecord> {
        self.lock().get(index).cloned()
    }

    pub fn last_call(&self) -> Option<RequestRecord> {
        self.lock().last().cloned()
    }

    /// Número de requests registrados
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Historial serializado como JSON (útil para volcarlo en un test que falla)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RequestRecord>> {
        // push no deja el Vec en estado inconsistente
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
