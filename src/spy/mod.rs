//! # Espía de Requests
//! src/spy/mod.rs
//!
//! Todo lo que el test puede observar de los requests recibidos:
//!
//! - `recorder`: historial ordenado (`calls()`)
//! - `body`: interpretación del body (JSON, texto, binario)
//! - `RequestSpy`: callback opcional que se invoca antes de responder

pub mod body;
pub mod recorder;

pub use body::{BodyParseError, ParsedBody};
pub use recorder::{RecordedRequest, RequestRecord, RequestRecorder};

/// Callback invocado una vez por request, antes de enviar la respuesta
///
/// La respuesta no se envía hasta que `on_request` retorna, así que un spy
/// lento retrasa solo la respuesta de ese request.
///
/// Cualquier closure `Fn(&RecordedRequest, Option<&ParsedBody>)` sirve:
///
/// ```
/// use mocr::{MockServer, ServerConfig};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let server = MockServer::new(ServerConfig::with_port(0))
///     .with_request_spy(move |request: &mocr::RecordedRequest, _body: Option<&mocr::ParsedBody>| {
///         sink.lock().unwrap().push(request.method.clone());
///     });
/// # drop(server);
/// ```
pub trait RequestSpy: Send + Sync {
    fn on_request(&self, request: &RecordedRequest, body: Option<&ParsedBody>);
}

impl<F> RequestSpy for F
where
    F: Fn(&RecordedRequest, Option<&ParsedBody>) + Send + Sync,
{
    fn on_request(&self, request: &RecordedRequest, body: Option<&ParsedBody>) {
        self(request, body)
    }
}
