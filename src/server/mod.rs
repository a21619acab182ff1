//! Local static file server for manual PWA testing.
//!
//! Serves a document root with aggressive cache-busting headers, so edits
//! to the service worker and manifest are re-fetched on every reload. The
//! server exists for a developer's own browser and carries no TLS or
//! shutdown draining; traffic stays at manual-testing scale.

pub mod mime;

use std::fs;
use std::io::Cursor;
use std::net::{SocketAddr, TcpListener};
use std::path::{Component, Path, PathBuf};

use log::debug;
use tiny_http::{Header, Request, Response, Server};

use crate::error::{Error, Result};

/// Configuration for the dev server
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Directory served as the site root
    pub root: PathBuf,
    /// Page served for directory requests and linked in the banner
    pub page: String,
    /// Whether to open the landing page in the default browser on startup
    pub open_browser: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            root: PathBuf::from("."),
            page: "index.html".to_string(),
            open_browser: true,
        }
    }
}

/// A bound, not-yet-running dev server.
pub struct DevServer {
    inner: Server,
    addr: SocketAddr,
    root: PathBuf,
    page: String,
}

impl DevServer {
    /// Bind the listener, distinguishing a busy port from other failures.
    pub fn bind(config: &DevServerConfig) -> Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", config.port)).map_err(|e| {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                Error::PortInUse(config.port)
            } else {
                Error::Bind(e.to_string())
            }
        })?;
        let addr = listener.local_addr().map_err(|e| Error::Bind(e.to_string()))?;
        let inner = Server::from_listener(listener, None).map_err(|e| Error::Bind(e.to_string()))?;
        Ok(Self {
            inner,
            addr,
            root: config.root.clone(),
            page: config.page.clone(),
        })
    }

    /// Address the listener actually bound (resolves a port-0 request).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Landing page URL to hand to a browser.
    pub fn url(&self) -> String {
        format!("http://localhost:{}/{}", self.addr.port(), self.page)
    }

    /// Accept loop. Blocks the calling thread for the server's lifetime.
    pub fn run(&self) {
        for request in self.inner.incoming_requests() {
            self.handle(request);
        }
    }

    fn handle(&self, request: Request) {
        let url = request.url().to_string();
        let file = self
            .resolve(&url)
            .and_then(|path| fs::read(&path).ok().map(|bytes| (path, bytes)));
        match file {
            Some((path, bytes)) => {
                debug!("{} {} -> 200 ({} bytes)", request.method(), url, bytes.len());
                let response = decorate(Response::from_data(bytes), mime::content_type(&path));
                let _ = request.respond(response);
            }
            None => {
                debug!("{} {} -> 404", request.method(), url);
                let response = decorate(
                    Response::from_data(b"404 Not Found".to_vec()).with_status_code(404),
                    "text/plain",
                );
                let _ = request.respond(response);
            }
        }
    }

    /// Map a request URL onto a file under the document root.
    ///
    /// Strips query and fragment, refuses parent-directory components, and
    /// serves the landing page for directory paths.
    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let raw = url.split(['?', '#']).next().unwrap_or("");
        let mut path = self.root.clone();
        for component in Path::new(raw.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if path.is_dir() {
            path.push(&self.page);
        }
        Some(path)
    }
}

/// Attach the content type plus the cache-busting trio every response gets.
fn decorate(response: Response<Cursor<Vec<u8>>>, content_type: &str) -> Response<Cursor<Vec<u8>>> {
    response
        .with_header(format!("Content-Type: {content_type}").parse::<Header>().unwrap())
        .with_header(
            "Cache-Control: no-cache, no-store, must-revalidate"
                .parse::<Header>()
                .unwrap(),
        )
        .with_header("Pragma: no-cache".parse::<Header>().unwrap())
        .with_header("Expires: 0".parse::<Header>().unwrap())
}
