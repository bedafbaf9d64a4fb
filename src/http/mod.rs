//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the static file responder and the API
//! responder: MIME lookup, response builders and the CORS header set.

pub mod cors;
pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_file_response,
    build_options_response,
};
