// API handlers module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::{internal_error, json_response};
use crate::leave::LeaveProvider;
use crate::logger;

/// GET /api/leaves
///
/// Returns the currently approved leave records as a JSON array. A provider
/// fault becomes a 500 whose body carries the fault description; that is
/// acceptable for a local dev tool.
pub fn handle_leaves(provider: &dyn LeaveProvider, is_head: bool) -> Response<Full<Bytes>> {
    match provider.approved_leaves() {
        Ok(records) => json_response(StatusCode::OK, &records, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to fetch leave records: {e}"));
            internal_error(&e.to_string())
        }
    }
}
