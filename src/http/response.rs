//! HTTP response building module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::boundary::Page;

/// Build the HTML response for a finished page
pub fn build_page_response(page: Page, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = page.body.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page.body)
    };

    Response::builder()
        .status(page.status)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(page.status, &e);
            build_500_response()
        })
}

/// Build plain 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from("500 Internal Server Error")));
    *response.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
    response
}

fn log_build_error(status: u16, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
