//! Turning rendered frames into HTTP responses.
//!
//! # Design Decisions
//! - Matched location → 200 with the shell document
//! - Unmatched location → 404 with the empty shell; no fallback page
//! - The selected view is exposed in `x-shell-view` for debugging

use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::navigation::Frame;

pub const X_SHELL_VIEW: &str = "x-shell-view";

pub fn status_for(frame: &Frame) -> StatusCode {
    if frame.is_matched() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

impl IntoResponse for Frame {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let view = self.view;
        let mut response = (status, Html(self.html)).into_response();
        if let Some(view) = view {
            response
                .headers_mut()
                .insert(X_SHELL_VIEW, HeaderValue::from_static(view.as_str()));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Location;
    use crate::views::ViewId;

    #[test]
    fn test_matched_frame_response() {
        let frame = Frame {
            location: Location::parse("/orders"),
            view: Some(ViewId::Orders),
            html: "<html></html>".into(),
        };
        let response = frame.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[X_SHELL_VIEW], "orders");
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[test]
    fn test_unmatched_frame_response() {
        let frame = Frame {
            location: Location::parse("/unknown"),
            view: None,
            html: "<html></html>".into(),
        };
        let response = frame.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(X_SHELL_VIEW).is_none());
    }
}
