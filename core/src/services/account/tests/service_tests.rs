//! Behavioural tests for the account service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::account::{Account, Role};
use crate::domain::value_objects::document::{DocumentKind, DocumentUpload};
use crate::errors::{CredentialError, DomainError};
use crate::repositories::account::mock::MockAccountRepository;
use crate::repositories::account::repository::AccountRepository;
use crate::services::account::{AccountService, AccountServiceConfig, RegisterAccount};
use crate::services::credential::CredentialService;
use crate::services::token::SetupTokenService;

use super::mocks::{RecordingMailer, RecordingStorage};

type TestService = AccountService<MockAccountRepository, RecordingMailer, RecordingStorage>;

struct Harness {
    service: TestService,
    repository: MockAccountRepository,
    mailer: RecordingMailer,
    storage: RecordingStorage,
}

fn harness() -> Harness {
    harness_with(RecordingMailer::new(), RecordingStorage::new())
}

fn harness_with(mailer: RecordingMailer, storage: RecordingStorage) -> Harness {
    let repository = MockAccountRepository::new();
    let service = AccountService::new(
        Arc::new(repository.clone()),
        Arc::new(mailer.clone()),
        Arc::new(storage.clone()),
        Arc::new(SetupTokenService::new("test-secret", 2 * 86400, "staffdesk")),
        CredentialService::with_cost(4),
        AccountServiceConfig::new("http://localhost:5173"),
    );
    Harness {
        service,
        repository,
        mailer,
        storage,
    }
}

fn registration(email: &str) -> RegisterAccount {
    RegisterAccount {
        full_name: "Ana Santos".to_string(),
        email: email.to_string(),
        contact_number: "09171234567".to_string(),
        role: Role::Staff,
        documents: Vec::new(),
    }
}

fn valid_id_upload(file_name: &str) -> DocumentUpload {
    DocumentUpload {
        kind: DocumentKind::ValidId,
        file_name: file_name.to_string(),
        content_type: "application/pdf".to_string(),
        bytes: vec![1, 2, 3],
    }
}

fn resume_upload(file_name: &str) -> DocumentUpload {
    DocumentUpload {
        kind: DocumentKind::Resume,
        file_name: file_name.to_string(),
        content_type: "application/pdf".to_string(),
        bytes: vec![4, 5, 6],
    }
}

async fn seeded_account(h: &Harness, email: &str, role: Role) -> Account {
    let account = Account::new(
        "Jo Reyes".to_string(),
        email.to_string(),
        "09995556677".to_string(),
        role,
        "hash".to_string(),
    );
    h.repository.insert(account.clone()).await;
    account
}

#[tokio::test]
async fn test_register_persists_and_emails_temp_password() {
    let h = harness();

    let view = h.service.register(registration("ana@example.com")).await.unwrap();
    assert_eq!(view.email, "ana@example.com");
    assert_eq!(view.role, Role::Staff);
    assert_eq!(h.repository.len().await, 1);

    let sent = h.mailer.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ana@example.com");
    // First name token plus last four contact digits
    assert!(sent[0].text.contains("Ana4567"));
    assert!(sent[0].text.contains("/new-password?token="));

    let stored = h
        .repository
        .find_by_email("ana@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_temporary_password);
    assert!(!stored.is_verified);
    let credentials = CredentialService::with_cost(4);
    assert!(credentials.verify_password("Ana4567", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let h = harness();
    h.service.register(registration("ana@example.com")).await.unwrap();

    let result = h.service.register(registration("ana@example.com")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
    assert_eq!(h.repository.len().await, 1);
    assert_eq!(h.mailer.sent_messages().await.len(), 1);
}

#[tokio::test]
async fn test_register_rejects_missing_fields() {
    let h = harness();

    let mut blank_name = registration("ana@example.com");
    blank_name.full_name = "   ".to_string();
    assert!(matches!(
        h.service.register(blank_name).await,
        Err(DomainError::Validation { .. })
    ));

    let bad_email = registration("not-an-email");
    assert!(matches!(
        h.service.register(bad_email).await,
        Err(DomainError::Validation { .. })
    ));

    let mut overlong_name = registration("ana@example.com");
    overlong_name.full_name = "A".repeat(256);
    assert!(matches!(
        h.service.register(overlong_name).await,
        Err(DomainError::Validation { .. })
    ));

    assert!(h.repository.is_empty().await);
}

#[tokio::test]
async fn test_register_uploads_documents_under_sanitized_paths() {
    let h = harness();

    let mut input = registration("ana@example.com");
    input.documents = vec![
        valid_id_upload("café résumé.pdf"),
        resume_upload("my cv.pdf"),
    ];
    let view = h.service.register(input).await.unwrap();

    assert!(view.valid_id_url.is_some());
    assert!(view.resume_url.is_some());

    let uploads = h.storage.recorded().await;
    assert_eq!(uploads.len(), 2);
    assert!(uploads[0].path.starts_with("validIds/"));
    assert!(uploads[0].path.ends_with("_cafe_resume.pdf"));
    assert!(uploads[1].path.starts_with("resumes/"));
    assert!(uploads[1].path.ends_with("_my_cv.pdf"));
}

#[tokio::test]
async fn test_register_aborts_when_upload_fails() {
    let h = harness_with(RecordingMailer::new(), RecordingStorage::failing());

    let mut input = registration("ana@example.com");
    input.documents = vec![valid_id_upload("id.png")];
    let result = h.service.register(input).await;

    assert!(matches!(result, Err(DomainError::Upstream { .. })));
    assert!(h.repository.is_empty().await);
    assert!(h.mailer.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_forgot_password_sets_window_and_sends_link() {
    let h = harness();
    seeded_account(&h, "jo@example.com", Role::Admin).await;

    h.service.forgot_password("jo@example.com").await.unwrap();

    let stored = h
        .repository
        .find_by_email("jo@example.com")
        .await
        .unwrap()
        .unwrap();
    let token = stored.reset_token.clone().expect("token stored");
    assert_eq!(token.len(), 64);
    assert!(stored.has_open_reset_window(Utc::now()));

    let sent = h.mailer.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains(&format!("/reset-password-admin?token={}", token)));
    assert!(sent[0].html.as_deref().unwrap_or_default().contains(&token));
}

#[tokio::test]
async fn test_forgot_password_unknown_email() {
    let h = harness();
    let result = h.service.forgot_password("ghost@example.com").await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert!(h.mailer.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_reset_password_consumes_token() {
    let h = harness();
    seeded_account(&h, "jo@example.com", Role::Admin).await;
    h.service.forgot_password("jo@example.com").await.unwrap();

    let token = h
        .repository
        .find_by_email("jo@example.com")
        .await
        .unwrap()
        .unwrap()
        .reset_token
        .unwrap();

    h.service.reset_password(&token, "Newpass1!").await.unwrap();

    let stored = h
        .repository
        .find_by_email("jo@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.reset_token.is_none());
    assert!(stored.reset_token_expires.is_none());
    assert!(!stored.is_temporary_password);
    let credentials = CredentialService::with_cost(4);
    assert!(credentials.verify_password("Newpass1!", &stored.password_hash).unwrap());

    // Replaying the consumed token must fail
    let replay = h.service.reset_password(&token, "Another1!").await;
    assert!(matches!(
        replay,
        Err(DomainError::Credential(CredentialError::InvalidOrExpiredToken))
    ));
}

#[tokio::test]
async fn test_reset_password_rejects_expired_token() {
    let h = harness();
    let mut account = seeded_account(&h, "jo@example.com", Role::Admin).await;
    account.open_reset_window("stale-token".to_string(), Utc::now() - Duration::minutes(1));
    h.repository.insert(account).await;

    let result = h.service.reset_password("stale-token", "Newpass1!").await;
    assert!(matches!(
        result,
        Err(DomainError::Credential(CredentialError::InvalidOrExpiredToken))
    ));
}

#[tokio::test]
async fn test_reset_password_enforces_strength() {
    let h = harness();
    seeded_account(&h, "jo@example.com", Role::Admin).await;
    h.service.forgot_password("jo@example.com").await.unwrap();

    let token = h
        .repository
        .find_by_email("jo@example.com")
        .await
        .unwrap()
        .unwrap()
        .reset_token
        .unwrap();

    let result = h.service.reset_password(&token, "weakpass").await;
    assert!(matches!(
        result,
        Err(DomainError::Credential(CredentialError::WeakPassword { .. }))
    ));

    // A rejected password leaves the token usable
    h.service.reset_password(&token, "Strong1!").await.unwrap();
}

#[tokio::test]
async fn test_upload_requirements_preserves_existing_urls() {
    let h = harness();
    let mut account = seeded_account(&h, "jo@example.com", Role::Staff).await;
    account.attach_documents(Some("https://blobs.example/validIds/old_id.png".to_string()), None);
    h.repository.insert(account.clone()).await;

    let view = h
        .service
        .upload_requirements(account.id, vec![resume_upload("cv.pdf")])
        .await
        .unwrap();

    assert_eq!(
        view.valid_id_url.as_deref(),
        Some("https://blobs.example/validIds/old_id.png")
    );
    assert!(view.resume_url.as_deref().unwrap_or_default().contains("resumes/"));
}

#[tokio::test]
async fn test_upload_requirements_unknown_account() {
    let h = harness();
    let result = h
        .service
        .upload_requirements(uuid::Uuid::new_v4(), vec![resume_upload("cv.pdf")])
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_verify_is_idempotent() {
    let h = harness();
    let account = seeded_account(&h, "jo@example.com", Role::Staff).await;

    h.service.verify(account.id).await.unwrap();
    h.service.verify(account.id).await.unwrap();

    let stored = h.repository.find_by_id(account.id).await.unwrap().unwrap();
    assert!(stored.is_verified);
}

#[tokio::test]
async fn test_delete_refuses_superadmin() {
    let h = harness();
    let boss = seeded_account(&h, "root@example.com", Role::Superadmin).await;

    let result = h.service.delete(boss.id).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    assert_eq!(h.repository.len().await, 1);
}

#[tokio::test]
async fn test_delete_removes_regular_accounts() {
    let h = harness();
    let staff = seeded_account(&h, "jo@example.com", Role::Staff).await;

    h.service.delete(staff.id).await.unwrap();
    assert!(h.repository.is_empty().await);

    let again = h.service.delete(staff.id).await;
    assert!(matches!(again, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_list_views_never_carry_credentials() {
    let h = harness();
    seeded_account(&h, "jo@example.com", Role::Staff).await;
    seeded_account(&h, "ana@example.com", Role::Admin).await;

    let views = h.service.list().await.unwrap();
    assert_eq!(views.len(), 2);
    for view in &views {
        let json = serde_json::to_value(view).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("resetToken").is_none());
    }

    let staff_only = h.service.list_by_role(Role::Staff).await.unwrap();
    assert_eq!(staff_only.len(), 1);
    assert_eq!(staff_only[0].email, "jo@example.com");
}
