//! Minimal admin page shells.
//!
//! The back-office UI is a thin client driven entirely by the JSON APIs;
//! these handlers only serve the HTML entry points that the edge gate in
//! [`super::auth::gate`] protects.

use axum::{http::StatusCode, response::Html};

pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html><head><title>Admin login</title></head>\
         <body><main id=\"admin-login\"></main></body></html>",
    )
}

pub async fn inquiries_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html><head><title>Inquiries</title></head>\
         <body><main id=\"admin-inquiries\"></main></body></html>",
    )
}

pub async fn events_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html><head><title>Events</title></head>\
         <body><main id=\"admin-events\"></main></body></html>",
    )
}

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html(
            "<!doctype html>\
             <html><head><title>Not found</title></head>\
             <body><main id=\"admin-not-found\"></main></body></html>",
        ),
    )
}
