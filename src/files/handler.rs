//! Static file request handling
//!
//! Turns parsed GET requests into file responses: method gate, path
//! resolution, file read, MIME lookup, response build, access logging.

use crate::config::StaticFileConfig;
use crate::files::resolver::{PathResolver, ResolveError};
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Handles requests by serving files from the web root.
pub struct StaticHandler {
    resolver: PathResolver,
}

impl StaticHandler {
    /// Creates a handler for the configured web root.
    pub fn new(cfg: &StaticFileConfig) -> anyhow::Result<Self> {
        Ok(Self {
            resolver: PathResolver::new(cfg)?,
        })
    }

    /// Produces the response for one request.
    ///
    /// Status mapping:
    ///
    /// | Condition | Status |
    /// |---|---|
    /// | Method ≠ GET | 405 |
    /// | No such file, or path escapes the root | 404 |
    /// | File unreadable | 500 |
    /// | Success | 200 |
    pub async fn handle(&self, request: &Request) -> Response {
        let response = self.respond(request).await;
        log_request(&request.method, &request.path, response.status);
        response
    }

    async fn respond(&self, request: &Request) -> Response {
        if request.method != Method::GET {
            return Response::method_not_allowed();
        }

        let file_path = match self.resolver.resolve(&request.path) {
            Ok(path) => path,
            Err(ResolveError::NotFound) => return Response::not_found(),
            Err(ResolveError::OutsideRoot) => {
                // Indistinguishable from a missing file on the wire
                tracing::warn!(
                    path = %request.path,
                    "Rejected request path escaping the web root"
                );
                return Response::not_found();
            }
        };

        match tokio::fs::read(&file_path).await {
            Ok(content) => {
                let content_type = mime::from_path(&file_path);

                ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Type", content_type)
                    .body(content)
                    .build()
            }
            Err(e) => {
                tracing::error!(
                    file = %file_path.display(),
                    error = %e,
                    "Failed to read file"
                );
                Response::internal_error()
            }
        }
    }
}

/// Emits the per-request access log line.
///
/// Every request that reaches the handler is logged exactly once, whatever
/// its final status, 405s included.
fn log_request(method: &Method, path: &str, status: StatusCode) {
    tracing::info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        "Request handled"
    );
}
