//! CORS middleware configuration.
//!
//! Built from the shared [`CorsConfig`]; a `*` origin entry switches to
//! allow-any, otherwise only the listed origins are accepted.

use actix_cors::Cors;

use sd_shared::config::server::CorsConfig;

/// Create a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(
            config
                .allowed_methods
                .iter()
                .filter(|m| *m != "*")
                .map(|m| m.as_str())
                .collect::<Vec<_>>(),
        )
        .max_age(config.max_age as usize);

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin().allow_any_method().allow_any_header();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        if config.allowed_headers.iter().any(|h| h == "*") {
            cors = cors.allow_any_header();
        } else {
            for name in &config.allowed_headers {
                cors = cors.allowed_header(name.as_str());
            }
        }
    }

    if config.allow_credentials && !config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.supports_credentials();
    }

    cors
}
