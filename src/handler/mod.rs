// Request handling module entry
// Classifies inbound requests and serves static assets

pub mod router;
pub mod static_files;

pub use router::handle_request;
