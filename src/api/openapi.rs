use super::handlers::{auth, events, health, inquiries};
use utoipa::openapi::{InfoBuilder, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Reuse the same router wiring and only return the generated OpenAPI spec.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` spec. Routes added outside (like
/// `/` and the admin pages) are intentionally not documented.
pub(crate) fn api_router() -> OpenApiRouter {
    // `routes!` reads #[utoipa::path] to bind HTTP method + path and add the
    // route to OpenAPI.
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::login::login))
        .routes(routes!(auth::logout::logout))
        .routes(routes!(auth::session::me))
        .routes(routes!(auth::session::status))
        .routes(routes!(events::list_public))
        .routes(routes!(inquiries::submit))
        .routes(routes!(events::list, events::create))
        .routes(routes!(events::get, events::update, events::delete))
        .routes(routes!(inquiries::list))
        .routes(routes!(inquiries::get, inquiries::delete));

    let mut auth_tag = Tag::new("auth");
    auth_tag.description = Some("Admin login, logout, and session checks".to_string());

    let mut events_tag = Tag::new("events");
    events_tag.description = Some("Public listing and admin event management".to_string());

    let mut inquiries_tag = Tag::new("inquiries");
    inquiries_tag.description = Some("Contact intake and admin inquiry management".to_string());

    router.get_openapi_mut().tags = Some(vec![auth_tag, events_tag, inquiries_tag]);

    router
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    // Use Cargo.toml metadata instead of the utoipa-axum crate info defaults.
    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    OpenApiBuilder::new().info(info).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_info_from_cargo() {
        let spec = openapi();
        assert_eq!(spec.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(
            spec.info.description.as_deref(),
            Some(env!("CARGO_PKG_DESCRIPTION"))
        );
    }

    #[test]
    fn openapi_tags_and_paths() {
        let spec = openapi();
        let tags = spec.tags.clone().unwrap_or_default();
        assert!(tags.iter().any(|tag| tag.name == "auth"));
        assert!(tags.iter().any(|tag| tag.name == "events"));
        assert!(spec.paths.paths.contains_key("/api/admin/login"));
        assert!(spec.paths.paths.contains_key("/api/admin/events/{id}"));
        assert!(spec.paths.paths.contains_key("/api/contact"));
    }
}
