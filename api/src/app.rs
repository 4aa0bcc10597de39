//! Application factory.
//!
//! Wires the account routes, auth middleware and CORS into an actix-web
//! `App`, generic over the repository, mailer and storage implementations so
//! handler tests can run against mocks.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use sd_core::repositories::AccountRepository;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_core::services::token::SetupTokenService;
use sd_shared::config::server::CorsConfig;
use sd_shared::types::response::ApiResponse;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::users::{
    delete::delete, forgot_password::forgot_password, get::get, list::{list, list_by_role},
    me::me, multipart::UploadLimit, register::register, reset_password::reset_password,
    upload_requirements::upload_requirements, verify::verify, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<R, M, S>(
    app_state: web::Data<AppState<R, M, S>>,
    setup_tokens: Arc<SetupTokenService>,
    cors_config: CorsConfig,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    let cors = create_cors(&cors_config);

    App::new()
        .app_data(app_state)
        .app_data(web::Data::new(UploadLimit {
            max_bytes: max_payload_size,
        }))
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/users")
                .route("/register", web::post().to(register::<R, M, S>))
                .route("/forgot-password", web::post().to(forgot_password::<R, M, S>))
                .route("/reset-password", web::post().to(reset_password::<R, M, S>))
                .route(
                    "/upload-requirements",
                    web::post()
                        .to(upload_requirements::<R, M, S>)
                        .wrap(JwtAuth::new(Arc::clone(&setup_tokens))),
                )
                .route(
                    "/me",
                    web::get()
                        .to(me::<R, M, S>)
                        .wrap(JwtAuth::new(Arc::clone(&setup_tokens))),
                )
                .route("/role/{role}", web::get().to(list_by_role::<R, M, S>))
                .route("", web::get().to(list::<R, M, S>))
                .route("/{id}", web::get().to(get::<R, M, S>))
                .route("/{id}/verify", web::patch().to(verify::<R, M, S>))
                .route("/{id}", web::delete().to(delete::<R, M, S>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "staffdesk-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "The requested resource was not found.",
    ))
}
