//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every inbound request is first
//! classified (API prefix vs. everything else); API requests go through the
//! exact-match dispatch table, all other paths fall through to file serving.
//! CORS headers are attached to every outgoing response at the end.

use crate::api;
use crate::config::AppState;
use crate::http::{self, cors};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use super::static_files;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);

    let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path.clone());
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    let show_headers = state.config.logging.show_headers;
    logger::log_headers_count(req.headers().len(), show_headers);

    let content_length = req
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok());

    let response = respond(&method, &path, content_length, &state).await;

    if access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = declared_body_bytes(&response);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Produce the response for a request line
///
/// Split out from `handle_request` so the full classification -> dispatch ->
/// CORS pipeline is exercisable without a hyper connection.
pub async fn respond(
    method: &Method,
    path: &str,
    content_length: Option<u64>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let mut response = if let Some(resp) = check_http_method(method) {
        resp
    } else if content_length.is_some_and(|len| len > state.config.http.max_body_size) {
        logger::log_warning(&format!(
            "Request body too large (max: {})",
            state.config.http.max_body_size
        ));
        http::build_413_response()
    } else if api::is_api_path(path) {
        api::dispatch(method, path, state.provider.as_ref())
    } else {
        static_files::serve(path, *method == Method::HEAD, &state.config.files).await
    };

    // Every response carries the CORS header set, success or error
    cors::apply(&mut response);

    if let Ok(server_name) = hyper::header::HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert("Server", server_name);
    }

    response
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        _ => "1.1",
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Body size as declared by the Content-Length header (0 if absent)
fn declared_body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::leave::SampleLeaveProvider;

    fn test_state() -> AppState {
        let config = Config::load_from("definitely-missing-config").unwrap();
        AppState::new(config, Arc::new(SampleLeaveProvider))
    }

    fn assert_cors(response: &Response<Full<Bytes>>) {
        assert_eq!(
            response.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Methods")
                .unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Headers")
                .unwrap(),
            "Content-Type"
        );
    }

    #[tokio::test]
    async fn test_api_request_is_dispatched_with_cors() {
        let state = test_state();
        let resp = respond(&Method::GET, "/api/leaves", None, &state).await;
        assert_eq!(resp.status(), 200);
        assert_cors(&resp);
        assert_eq!(resp.headers().get("Server").unwrap(), "leavecal-server/0.1");
    }

    #[tokio::test]
    async fn test_unknown_api_path_keeps_cors_on_404() {
        let state = test_state();
        let resp = respond(&Method::GET, "/api/nope", None, &state).await;
        assert_eq!(resp.status(), 404);
        assert_cors(&resp);
    }

    #[tokio::test]
    async fn test_missing_static_file_keeps_cors_on_404() {
        let state = test_state();
        let resp = respond(&Method::GET, "/no-such-file.html", None, &state).await;
        assert_eq!(resp.status(), 404);
        assert_cors(&resp);
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let state = test_state();
        let resp = respond(&Method::OPTIONS, "/api/leaves", None, &state).await;
        assert_eq!(resp.status(), 204);
        assert_cors(&resp);
    }

    #[tokio::test]
    async fn test_disallowed_method_is_405_with_cors() {
        let state = test_state();
        let resp = respond(&Method::DELETE, "/api/leaves", None, &state).await;
        assert_eq!(resp.status(), 405);
        assert_cors(&resp);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let state = test_state();
        let too_big = state.config.http.max_body_size + 1;
        let resp = respond(&Method::GET, "/", Some(too_big), &state).await;
        assert_eq!(resp.status(), 413);
        assert_cors(&resp);
    }
}
