//! StaffDesk API server entry point.
//!
//! Loads configuration from the environment, builds the infrastructure
//! implementations (falling back to mocks when credentials are absent) and
//! serves the account routes.

use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sd_api::app::create_app;
use sd_api::routes::users::AppState;
use sd_core::repositories::AccountRepository;
use sd_core::services::account::{AccountService, AccountServiceConfig};
use sd_core::services::credential::CredentialService;
use sd_core::services::mail::Mailer;
use sd_core::services::storage::ObjectStorage;
use sd_core::services::token::SetupTokenService;
use sd_infra::database::{DatabasePool, MySqlAccountRepository};
use sd_infra::mail::{MockMailer, SmtpMailer};
use sd_infra::storage::{MockObjectStorage, SupabaseStorage};
use sd_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    info!("starting StaffDesk API server");

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using an insecure development secret");
    }

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(to_io_error)?;
    let repository = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));

    match (config.mail.has_credentials(), !config.storage.api_key.is_empty()) {
        (true, true) => {
            let mailer = Arc::new(SmtpMailer::new(&config.mail).map_err(to_io_error)?);
            let storage = Arc::new(SupabaseStorage::new(config.storage.clone()).map_err(to_io_error)?);
            serve(config, repository, mailer, storage).await
        }
        (true, false) => {
            warn!("STORAGE_API_KEY is not set; uploads use the mock storage");
            let mailer = Arc::new(SmtpMailer::new(&config.mail).map_err(to_io_error)?);
            serve(config, repository, mailer, Arc::new(MockObjectStorage::new())).await
        }
        (false, true) => {
            warn!("SMTP credentials are not set; emails use the mock mailer");
            let storage = Arc::new(SupabaseStorage::new(config.storage.clone()).map_err(to_io_error)?);
            serve(config, repository, Arc::new(MockMailer::new()), storage).await
        }
        (false, false) => {
            warn!("SMTP and storage credentials are not set; using mock mailer and storage");
            serve(
                config,
                repository,
                Arc::new(MockMailer::new()),
                Arc::new(MockObjectStorage::new()),
            )
            .await
        }
    }
}

async fn serve<R, M, S>(
    config: AppConfig,
    repository: Arc<R>,
    mailer: Arc<M>,
    storage: Arc<S>,
) -> io::Result<()>
where
    R: AccountRepository + 'static,
    M: Mailer + 'static,
    S: ObjectStorage + 'static,
{
    let setup_tokens = Arc::new(SetupTokenService::new(
        &config.auth.jwt.secret,
        config.auth.jwt.setup_token_expiry,
        config.auth.jwt.issuer.clone(),
    ));

    let service_config = AccountServiceConfig::new(config.auth.frontend_url.clone())
        .with_reset_token_expiry(config.auth.reset_token_expiry);

    let account_service = Arc::new(AccountService::new(
        repository,
        mailer,
        storage,
        Arc::clone(&setup_tokens),
        CredentialService::new(),
        service_config,
    ));

    let bind_address = config.server.bind_address();
    info!(%bind_address, "binding HTTP server");

    let app_state = web::Data::new(AppState { account_service });
    let cors_config = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        create_app(
            app_state.clone(),
            Arc::clone(&setup_tokens),
            cors_config.clone(),
            max_payload_size,
        )
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}

fn to_io_error(e: sd_infra::InfrastructureError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}
