use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origins allowed when neither the command line nor the settings file name any.
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Build the CORS layer for the given allow-list.
///
/// Origins are matched exactly. Pass "*" in the list to allow every origin.
/// Credentials are always allowed, so methods and headers are mirrored from
/// the preflight request instead of answered with a wildcard.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }

            origin.to_str().is_ok_and(|origin_str| {
                cors_origins.iter().any(|allowed| allowed == origin_str)
            })
        }))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Trim configured origins and drop empty entries.
#[must_use]
pub fn normalize_origins(origins: &[String]) -> Vec<String> {
    origins
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
