//! # Listener TCP
//! src/server/tcp.rs
//!
//! Transporte del servidor mock: un thread acepta conexiones y cada conexión
//! se procesa en su propio thread. Cada conexión lleva un solo request.
//!
//! El listener es non-blocking para que el thread de accept pueda revisar
//! el flag de shutdown entre conexiones.

use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;
use crate::error::{MocrError, Result};
use crate::http::{Method, ParseError, Request, Response};
use std::io::{self, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Intervalo entre intentos de accept cuando no hay conexiones pendientes
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Timeout de lectura por conexión
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Listener vivo de una instancia del servidor
///
/// Se crea con `bind` y se destruye con `shutdown`.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    accept_thread: Option<JoinHandle<()>>,
    connections: ConnectionTracker,
}

impl ServerHandle {
    /// Hace bind al puerto configurado y empieza a aceptar conexiones
    ///
    /// Al retornar, el socket ya está escuchando: el kernel encola las
    /// conexiones aunque el thread de accept todavía no haya arrancado.
    pub(crate) fn bind(config: &ServerConfig, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        let address = config.address();

        let listener =
            TcpListener::bind(&address).map_err(|e| MocrError::bind(address.as_str(), e))?;
        let local_addr = listener.local_addr()?;
        listener.set_nonblocking(true)?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let connections = ConnectionTracker::default();

        let accept_thread = thread::Builder::new()
            .name(format!("mocr-accept-{}", local_addr.port()))
            .spawn({
                let shutdown = Arc::clone(&shutdown);
                let connections = connections.clone();
                move || accept_loop(listener, dispatcher, shutdown, connections)
            })?;

        tracing::debug!(%local_addr, "listener bound");

        Ok(Self {
            local_addr,
            shutdown,
            accept_thread: Some(accept_thread),
            connections,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// URL para `path` en este servidor (ej: "http://localhost:9091/profile")
    pub fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.port(), path)
    }

    /// Requests en curso
    pub fn in_flight(&self) -> usize {
        self.connections.active()
    }

    /// Cierra el listener y espera a que terminen los requests en curso
    ///
    /// Retorna `false` si venció `grace` con requests todavía activos.
    pub(crate) fn shutdown(mut self, grace: Duration) -> bool {
        self.shutdown.store(true, Ordering::Release);

        if let Some(accept_thread) = self.accept_thread.take() {
            if accept_thread.join().is_err() {
                tracing::warn!(addr = %self.local_addr, "accept thread panicked");
            }
        }

        let drained = self.connections.wait_idle(grace);
        if !drained {
            tracing::warn!(
                addr = %self.local_addr,
                in_flight = self.connections.active(),
                "shutdown grace period of {:?} expired with requests still running",
                grace
            );
        }

        tracing::debug!(addr = %self.local_addr, "listener closed");
        drained
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        // Sin shutdown explícito: el thread de accept termina solo
        self.shutdown.store(true, Ordering::Release);
    }
}

fn accept_loop(
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
    shutdown: Arc<AtomicBool>,
    connections: ConnectionTracker,
) {
    while !shutdown.load(Ordering::Acquire) {
        match listener.accept() {
            Ok((stream, peer)) => {
                tracing::debug!(%peer, "new connection");

                let guard = connections.enter();
                let dispatcher = Arc::clone(&dispatcher);

                let spawned = thread::Builder::new()
                    .name("mocr-conn".to_string())
                    .spawn(move || {
                        let _guard = guard;
                        if let Err(e) = handle_connection(stream, &dispatcher) {
                            tracing::debug!(%peer, "connection error: {}", e);
                        }
                    });

                if let Err(e) = spawned {
                    tracing::warn!(%peer, "failed to spawn connection thread: {}", e);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                thread::sleep(ACCEPT_POLL_INTERVAL);
            }
            Err(e) => {
                tracing::warn!("failed to accept connection: {}", e);
                thread::sleep(ACCEPT_POLL_INTERVAL);
            }
        }
    }
    // `listener` se cierra aquí
}

/// Lee un request, lo despacha y escribe la respuesta
fn handle_connection(mut stream: TcpStream, dispatcher: &Dispatcher) -> io::Result<()> {
    // El socket aceptado puede heredar el modo non-blocking del listener
    stream.set_nonblocking(false)?;
    stream.set_read_timeout(Some(READ_TIMEOUT))?;

    let mut head_only = false;
    let mut response = match Request::read_from(&mut stream) {
        Ok(request) => {
            tracing::debug!(method = %request.method(), target = request.target(), "request");
            head_only = *request.method() == Method::HEAD;
            dispatcher.dispatch(request)
        }
        Err(ParseError::EmptyRequest) => {
            tracing::debug!("connection closed without a request");
            return Ok(());
        }
        Err(ParseError::Io(e)) => return Err(e),
        Err(e) => {
            tracing::debug!("malformed request: {}", e);
            Response::bad_request(&format!("Invalid: {}", e))
        }
    };

    response.add_header("Connection", "close");

    let bytes = if head_only {
        response.head_bytes()
    } else {
        response.to_bytes()
    };
    stream.write_all(&bytes)?;
    stream.flush()?;
    stream.shutdown(Shutdown::Write)?;

    Ok(())
}

/// Cuenta las conexiones en curso y permite esperar a que lleguen a cero
#[derive(Debug, Clone, Default)]
struct ConnectionTracker {
    inner: Arc<(Mutex<usize>, Condvar)>,
}

impl ConnectionTracker {
    fn enter(&self) -> ConnectionGuard {
        *self.lock() += 1;
        ConnectionGuard {
            tracker: self.clone(),
        }
    }

    fn active(&self) -> usize {
        *self.lock()
    }

    /// Espera hasta `timeout` a que no quede ninguna conexión activa
    fn wait_idle(&self, timeout: Duration) -> bool {
        let (_, condvar) = &*self.inner;
        let (active, _) = condvar
            .wait_timeout_while(self.lock(), timeout, |active| *active > 0)
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *active == 0
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        let (count, _) = &*self.inner;
        count.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Mantiene una conexión contada mientras vive
struct ConnectionGuard {
    tracker: ConnectionTracker,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        let mut active = self.tracker.lock();
        *active = active.saturating_sub(1);
        let (_, condvar) = &*self.tracker.inner;
        condvar.notify_all();
    }
}
