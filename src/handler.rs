//! Request handler module
//!
//! One handler, bound to every path and method: answers with the fixed
//! greeting. The request is never branched on; method, path, headers and
//! body are all ignored.

use crate::config::Config;
use crate::logger;
use crate::response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Handle a single request: produce the greeting, log it if access
/// logging is enabled.
///
/// Generic over the request body type; the body is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = response::build_greeting_response();

    if config.logging.access_log {
        let entry = logger::AccessLogEntry::from_request(
            &req,
            peer_addr,
            response.status().as_u16(),
            response::GREETING.len(),
        );
        logger::log_access(&entry);
    }

    Ok(response)
}
