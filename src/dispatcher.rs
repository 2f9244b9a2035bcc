//! # Dispatcher de Requests
//! src/dispatcher.rs
//!
//! Único handler del servidor. Por cada request:
//!
//! ```text
//! Request → log (debug) → interpretar body → registrar → spy → dequeue → Response
//! ```
//!
//! Si la cola tiene una respuesta se sirve como JSON; si no, se contesta
//! `Hello World` en texto plano. Siempre `200 OK`, sin importar path ni método.

use crate::http::{Request, Response};
use crate::logger::Logger;
use crate::queue::ResponseQueue;
use crate::spy::{ParsedBody, RecordedRequest, RequestRecorder, RequestSpy};
use std::sync::Arc;

/// Body de la respuesta cuando no hay respuestas mock pendientes
pub const DEFAULT_BODY: &str = "Hello World";

/// Línea de log por request en modo debug
pub fn received_request_line(method: &str) -> String {
    format!("➡️ Received request ({})", method)
}

/// Handler ligado al listener de una instancia del servidor
pub struct Dispatcher {
    recorder: Arc<RequestRecorder>,
    queue: Arc<ResponseQueue>,
    spy: Option<Arc<dyn RequestSpy>>,
    logger: Arc<dyn Logger>,
    debug: bool,
}

impl Dispatcher {
    pub fn new(
        recorder: Arc<RequestRecorder>,
        queue: Arc<ResponseQueue>,
        logger: Arc<dyn Logger>,
        debug: bool,
    ) -> Self {
        Self {
            recorder,
            queue,
            spy: None,
            logger,
            debug,
        }
    }

    /// Callback externo invocado antes de cada respuesta
    pub fn with_spy(mut self, spy: Option<Arc<dyn RequestSpy>>) -> Self {
        self.spy = spy;
        self
    }

    /// Procesa un request completo y retorna la respuesta a enviar
    pub fn dispatch(&self, request: Request) -> Response {
        if self.debug {
            self.logger.info(&received_request_line(request.method().as_str()));
        }

        let request = RecordedRequest::from(request);
        let body = ParsedBody::from_request(request.header("content-type"), &request.body);

        if let Some(ParsedBody::Invalid(err)) = &body {
            tracing::debug!(url = %request.url, "{}", err);
        }

        self.recorder.record(request.clone(), body.clone());

        if let Some(spy) = &self.spy {
            spy.on_request(&request, body.as_ref());
        }

        match self.queue.dequeue() {
            Some(mock) => Response::json(&mock.to_string()),
            None => Response::text(DEFAULT_BODY),
        }
    }
}
