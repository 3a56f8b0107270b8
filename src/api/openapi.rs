use crate::api::handlers::{health, login, user_info};
use utoipa::openapi::{InfoBuilder, License, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

/// The document for every route in [`api_router`], without serving anything.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    api_router().split_for_parts().1
}

/// Routes and their `OpenAPI` entries, registered together from the
/// `#[utoipa::path]` attributes.
pub(crate) fn api_router() -> OpenApiRouter {
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(login::login))
        .routes(routes!(user_info::user_info));

    router.get_openapi_mut().tags = Some(vec![
        tag("auth", "Mock login, any non-empty credentials are accepted"),
        tag("user", "Synthesized user profiles"),
        tag("health", "Liveness probe"),
    ]);
    router
}

fn tag(name: &str, description: &str) -> Tag {
    let mut tag = Tag::new(name);
    tag.description = Some(description.to_string());
    tag
}

// title, version, description and license straight from Cargo.toml
fn cargo_openapi() -> utoipa::openapi::OpenApi {
    let mut license = License::new(env!("CARGO_PKG_LICENSE"));
    license.identifier = Some(env!("CARGO_PKG_LICENSE").to_string());

    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .license(Some(license))
        .build();

    OpenApiBuilder::new().info(info).build()
}
