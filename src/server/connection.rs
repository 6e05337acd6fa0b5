// Connection handling module
// Serves a single TCP connection with hyper's HTTP/1.1 implementation

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// Each connection runs on its own task, so requests are handled independently and
/// in no particular order. No timeout is applied.
pub fn handle_connection(stream: tokio::net::TcpStream, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&config))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
