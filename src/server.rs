//! Minimal HTTP/1.1 server for the playground pages.
//!
//! One listener, one short-lived thread per connection, `Connection: close`
//! on every response. Handlers share only the immutable [`SiteConfig`].
//!
//! Request handling is split so the routing logic can be tested without a
//! socket: [`parse_request_line`] validates the first line, [`route`] turns a
//! method and target into a [`Response`], and [`Server::run`] does the I/O.

use crate::config::SiteConfig;
use crate::location::Location;
use crate::output;
use crate::render;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Upper bound on the request line plus headers.
const MAX_HEAD_BYTES: u64 = 16 * 1024;
const READ_TIMEOUT: Duration = Duration::from_secs(5);

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A complete response, ready to be written to the socket.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: HTML,
            body,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT,
            body: format!("{body}\n"),
        }
    }

    pub fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Unknown",
        }
    }

    /// Serialize status line, headers and (unless `head_only`) the body.
    pub fn to_bytes(&self, head_only: bool) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\n\
             Content-Type: {}\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len()
        );
        if self.status == 405 {
            head.push_str("Allow: GET, HEAD\r\n");
        }
        head.push_str("\r\n");

        let mut bytes = head.into_bytes();
        if !head_only {
            bytes.extend_from_slice(self.body.as_bytes());
        }
        bytes
    }
}

/// Split `METHOD TARGET HTTP/x.y` into method and target.
///
/// Returns `None` for anything that is not exactly three tokens with an
/// origin-form target and an HTTP version.
pub fn parse_request_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    let version = parts.next()?;
    if parts.next().is_some() || !version.starts_with("HTTP/") || !target.starts_with('/') {
        return None;
    }
    Some((method, target))
}

/// Produce the response for a parsed request.
pub fn route(config: &SiteConfig, method: &str, target: &str) -> Response {
    if method != "GET" && method != "HEAD" {
        return Response::text(405, "Method Not Allowed");
    }

    let location = Location::parse(target);
    match render::render_location(config, &location) {
        Some(markup) => Response::html(200, markup.into_string()),
        None => Response::html(
            404,
            render::render_not_found(config, location.path()).into_string(),
        ),
    }
}

/// A bound listener plus the config every request is rendered with.
pub struct Server {
    listener: TcpListener,
    config: Arc<SiteConfig>,
}

impl Server {
    /// Bind to `config.server`. Port `0` picks a free port.
    pub fn bind(config: SiteConfig) -> Result<Self, ServeError> {
        let address = config.server.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServeError::Bind {
            address: address.clone(),
            source,
        })?;
        Ok(Self {
            listener,
            config: Arc::new(config),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServeError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Accept connections until the listener fails. Never returns on success.
    pub fn run(self) -> Result<(), ServeError> {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let config = Arc::clone(&self.config);
                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, &config) {
                            eprintln!("connection error: {e}");
                        }
                    });
                }
                Err(e) => eprintln!("accept error: {e}"),
            }
        }
        Ok(())
    }
}

fn handle_connection(mut stream: TcpStream, config: &SiteConfig) -> Result<(), ServeError> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    let started = Instant::now();

    let mut reader = BufReader::new((&stream).take(MAX_HEAD_BYTES));
    let mut request_line = String::new();
    let read = match reader.read_line(&mut request_line) {
        Ok(n) => n,
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => 1,
        Err(e) => return Err(e.into()),
    };
    if read == 0 {
        return Ok(());
    }
    drain_headers(&mut reader)?;
    drop(reader);

    let (method, target, response) = match parse_request_line(&request_line) {
        Some((method, target)) => (method, target, route(config, method, target)),
        None => ("-", request_line.trim(), Response::text(400, "Bad Request")),
    };

    stream.write_all(&response.to_bytes(method == "HEAD"))?;
    stream.flush()?;
    output::print_request(method, target, response.status, started.elapsed());
    Ok(())
}

/// Consume header lines up to the blank separator. Bodies are never read.
fn drain_headers<R: BufRead>(reader: &mut R) -> Result<(), ServeError> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 || line == b"\r\n" || line == b"\n" {
            return Ok(());
        }
    }
}
