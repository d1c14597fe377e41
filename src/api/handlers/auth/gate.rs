//! Edge gate for admin pages.
//!
//! A fast, stateless filter over everything under `/admin`: it only checks
//! whether the session cookie is present and never verifies the token, so a
//! stale or tampered cookie still reaches the page shell. That trade-off is
//! deliberate — the gate exists to bounce unauthenticated page loads at the
//! edge with no crypto cost, while every data route behind the pages runs the
//! authoritative guard in [`super::principal`]. Do not rely on the gate for
//! authorization.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::cookie::session_token;

const LOGIN_PAGE: &str = "/admin/login";
const DEFAULT_AUTHENTICATED_PAGE: &str = "/admin/inquiries";

/// Presence-only cookie check applied to every `/admin/*` page load.
pub async fn admin_gate(request: Request, next: Next) -> Response {
    let is_login_page = request.uri().path() == LOGIN_PAGE;
    let has_cookie = session_token(request.headers()).is_some();

    match (is_login_page, has_cookie) {
        // Unauthenticated visitor on the login page: let them log in.
        (true, false) => next.run(request).await,
        // Already carrying a cookie: skip the login page.
        (true, true) => Redirect::temporary(DEFAULT_AUTHENTICATED_PAGE).into_response(),
        (false, true) => next.run(request).await,
        (false, false) => Redirect::temporary(LOGIN_PAGE).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::COOKIE, header::LOCATION, Request as HttpRequest, StatusCode},
        middleware,
        response::Html,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn admin_pages() -> Router {
        Router::new()
            .route("/admin/login", get(|| async { Html("login") }))
            .route("/admin/inquiries", get(|| async { Html("inquiries") }))
            .route("/admin/events", get(|| async { Html("events") }))
            .layer(middleware::from_fn(admin_gate))
    }

    async fn get_page(path: &str, cookie: Option<&str>) -> (StatusCode, Option<String>) {
        let mut request = HttpRequest::builder().uri(path);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        let response = admin_pages()
            .oneshot(request.body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        (response.status(), location)
    }

    #[tokio::test]
    async fn login_page_without_cookie_passes() {
        let (status, location) = get_page("/admin/login", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(location, None);
    }

    #[tokio::test]
    async fn login_page_with_cookie_redirects_to_inquiries() {
        let (status, location) =
            get_page("/admin/login", Some("admin_auth_token=whatever")).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/inquiries"));
    }

    #[tokio::test]
    async fn invalid_cookie_still_redirects_away_from_login() {
        // The gate never verifies tokens, so even garbage redirects.
        let (status, location) =
            get_page("/admin/login", Some("admin_auth_token=not.a.token")).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/inquiries"));
    }

    #[tokio::test]
    async fn admin_page_with_cookie_passes() {
        let (status, location) =
            get_page("/admin/events", Some("admin_auth_token=whatever")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(location, None);
    }

    #[tokio::test]
    async fn admin_page_without_cookie_redirects_to_login() {
        let (status, location) = get_page("/admin/inquiries", None).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/login"));
    }

    #[tokio::test]
    async fn unrelated_cookie_does_not_count() {
        let (status, location) = get_page("/admin/inquiries", Some("theme=dark")).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/admin/login"));
    }
}
