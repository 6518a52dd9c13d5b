//! Services - application assembly and HTTP serving

pub mod http;

pub use http::{HttpService, OneshotResult, build_app, build_router};
