// API module entry
// Exact-match dispatch for the reserved /api/ path prefix

mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

use crate::leave::LeaveProvider;
use crate::logger;

/// Reserved path prefix; requests under it never reach the file responder
pub const API_PREFIX: &str = "/api/";

/// Whether a request path belongs to the API surface
pub fn is_api_path(path: &str) -> bool {
    path.starts_with(API_PREFIX)
}

/// API route handler
///
/// The route table is a literal path match; the single-endpoint scope does
/// not warrant a pattern-matching router.
pub fn dispatch(method: &Method, path: &str, provider: &dyn LeaveProvider) -> Response<Full<Bytes>> {
    let is_head = *method == Method::HEAD;

    let resp = match path {
        "/api/leaves" => handlers::handle_leaves(provider, is_head),
        _ => response::endpoint_not_found(path),
    };

    logger::log_api_request(method.as_str(), path, resp.status().as_u16());
    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leave::{LeaveRecord, ProviderError, SampleLeaveProvider};
    use http_body_util::BodyExt;

    struct FailingProvider;

    impl LeaveProvider for FailingProvider {
        fn approved_leaves(&self) -> Result<Vec<LeaveRecord>, ProviderError> {
            Err(ProviderError::Unavailable("backing store offline".into()))
        }
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api/leaves"));
        assert!(is_api_path("/api/anything/else"));
        assert!(!is_api_path("/index.html"));
        assert!(!is_api_path("/apileaves"));
    }

    #[tokio::test]
    async fn test_leaves_endpoint_returns_json_array() {
        let resp = dispatch(&Method::GET, "/api/leaves", &SampleLeaveProvider);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );

        let body = body_string(resp).await;
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0]["id"], 1);
        assert_eq!(parsed[0]["title"], "김철수 (연차)");
        assert_eq!(parsed[1]["leave_type"], "welfare");
        assert_eq!(parsed[2]["id"], 3);

        // Non-ASCII text must be raw UTF-8, not \u escapes
        assert!(body.contains("연차"));
        assert!(!body.contains("\\u"));
    }

    #[tokio::test]
    async fn test_head_on_leaves_has_empty_body() {
        let resp = dispatch(&Method::HEAD, "/api/leaves", &SampleLeaveProvider);
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_404() {
        let resp = dispatch(&Method::GET, "/api/employees", &SampleLeaveProvider);
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/plain");

        let body = body_string(resp).await;
        assert!(body.contains("/api/employees"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_500_with_fault_text() {
        let resp = dispatch(&Method::GET, "/api/leaves", &FailingProvider);
        assert_eq!(resp.status(), 500);

        let body = body_string(resp).await;
        assert!(body.contains("backing store offline"));
    }
}
