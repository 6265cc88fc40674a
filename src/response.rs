//! Greeting response construction
//!
//! The entire response surface of this server: a fixed HTML body with
//! status 200, built fresh for every request.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// The one and only body this server ever sends.
pub const GREETING: &str = "<h1>Hello, World version3</h1>";

/// Build the greeting response.
///
/// Status is always 200. Content-Type is set explicitly; Content-Length
/// and Date are left to hyper.
pub fn build_greeting_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from_static(GREETING.as_bytes())))
        .expect("Failed to build greeting response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_status_and_body() {
        let resp = build_greeting_response();
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(GREETING.as_bytes()));
    }

    #[test]
    fn test_content_type() {
        let resp = build_greeting_response();
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_responses_are_independent() {
        let a = build_greeting_response();
        let b = build_greeting_response();
        assert_eq!(a.status(), b.status());
    }
}
