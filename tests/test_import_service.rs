// tests/test_import_service.rs
//! End-to-end pipeline tests: temp CSV files through the import service
//! against the in-memory vendor store.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use vowsync::application::error::ApplicationError;
use vowsync::application::services::{ImportService, ImportServiceImpl};
use vowsync::domain::error::DomainError;
use vowsync::domain::import::{ImportMode, ImportStats};
use vowsync::domain::repositories::vendor_repository::VendorRepository;
use vowsync::domain::vendor::{
    ExistingVendor, TenantId, VendorCandidateBuilder, VendorId,
};
use vowsync::infrastructure::parsers::FileImportSource;
use vowsync::infrastructure::repositories::in_memory_vendor_repository::InMemoryVendorRepository;
use vowsync::util::testing::setup_test_logging;

fn tenant() -> TenantId {
    TenantId::new("wedding-1").unwrap()
}

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn vendor(id: i64, name: &str, email: Option<&str>) -> ExistingVendor {
    let mut builder = VendorCandidateBuilder::default();
    builder.name(name).tenant_id(tenant());
    if let Some(email) = email {
        builder.email(email);
    }
    ExistingVendor::from_candidate(VendorId(id), &builder.build().unwrap())
}

fn service_with(
    existing: Vec<ExistingVendor>,
) -> (Arc<InMemoryVendorRepository>, ImportServiceImpl<InMemoryVendorRepository>) {
    setup_test_logging();
    let repository = Arc::new(InMemoryVendorRepository::new());
    repository.seed(existing);
    let service = ImportServiceImpl::new(repository.clone(), Arc::new(FileImportSource::new()));
    (repository, service)
}

#[test]
fn test_add_only_creates_and_skips() {
    let (_, service) = service_with(vec![
        vendor(1, "Alice Catering", None),
        vendor(2, "Bob Blooms", None),
    ]);
    let file = csv_file("Name\nAlice Catering\nNew Florist\n");

    let stats = service
        .run_import(file.path(), ImportMode::AddOnly, &tenant())
        .unwrap();

    assert_eq!(
        stats,
        ImportStats {
            added: 1,
            updated: 0,
            deleted: 0,
            skipped: 1
        }
    );
}

#[test]
fn test_sync_concrete_scenario() {
    let (repository, service) = service_with(vec![
        vendor(1, "Alice Catering", None),
        vendor(2, "Bob Blooms", None),
    ]);
    let file = csv_file("Name\nAlice Catering\nNew Florist\n");

    let stats = service
        .run_import(file.path(), ImportMode::Sync, &tenant())
        .unwrap();

    assert_eq!(
        stats,
        ImportStats {
            added: 1,
            updated: 1,
            deleted: 1,
            skipped: 0
        }
    );

    let remaining = repository.list_by_tenant(&tenant()).unwrap();
    let names: Vec<&str> = remaining.iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"Alice Catering"));
    assert!(names.contains(&"New Florist"));
    assert!(!names.contains(&"Bob Blooms"));
    // Alice keeps her original id
    assert!(remaining
        .iter()
        .any(|v| v.name == "Alice Catering" && v.id == VendorId(1)));
}

#[test]
fn test_sync_preserves_matched_vendor_fields() {
    let mut alice = vendor(1, "Alice Catering", Some("alice@example.com"));
    alice.notes = Some("long-standing favorite".to_string());
    let (repository, service) = service_with(vec![alice]);

    // same name, different email and notes in the file
    let file = csv_file("Name,Email,Notes\nALICE CATERING,new@example.com,changed\n");

    let stats = service
        .run_import(file.path(), ImportMode::Sync, &tenant())
        .unwrap();
    assert_eq!(stats.updated, 1);
    assert_eq!(stats.added, 0);

    let stored = repository.list_by_tenant(&tenant()).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email.as_deref(), Some("alice@example.com"));
    assert_eq!(stored[0].notes.as_deref(), Some("long-standing favorite"));
}

#[test]
fn test_email_fallback_matches_renamed_vendor() {
    let (_, service) = service_with(vec![vendor(1, "Acme Co", Some("a@x.com"))]);
    let file = csv_file("Name,Email\nCompletely New Name,A@X.COM\n");

    let stats = service
        .run_import(file.path(), ImportMode::Sync, &tenant())
        .unwrap();

    assert_eq!(stats.updated, 1);
    assert_eq!(stats.added, 0);
    assert_eq!(stats.deleted, 0);
}

#[test]
fn test_add_only_is_idempotent() {
    let (_, service) = service_with(vec![]);
    let file = csv_file("Name,Email\nAlice Catering,alice@example.com\nBob Blooms,\n");

    let first = service
        .run_import(file.path(), ImportMode::AddOnly, &tenant())
        .unwrap();
    assert_eq!(first.added, 2);
    assert_eq!(first.skipped, 0);

    let second = service
        .run_import(file.path(), ImportMode::AddOnly, &tenant())
        .unwrap();
    assert_eq!(second.added, 0);
    assert_eq!(second.skipped, 2);
}

#[test]
fn test_validation_failure_means_zero_repository_calls() {
    let (repository, service) = service_with(vec![vendor(1, "Alice Catering", None)]);
    let file = csv_file("Name,Cost\nGood Vendor,100\n,200\n");

    let err = service
        .run_import(file.path(), ImportMode::Sync, &tenant())
        .unwrap_err();
    let ApplicationError::Validation(report) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(report.errors.len(), 1);
    // bad row is the second data row: file row 3
    assert_eq!(report.errors[0].row, 3);

    assert_eq!(repository.list_calls(), 0);
    assert_eq!(repository.create_calls(), 0);
    assert_eq!(repository.delete_calls(), 0);
}

#[test]
fn test_create_failure_aborts_without_deletes() {
    let (repository, service) = service_with(vec![vendor(1, "Doomed Vendor", None)]);
    repository.fail_creates();
    let file = csv_file("Name\nBrand New\n");

    let err = service
        .run_import(file.path(), ImportMode::Sync, &tenant())
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::RepositoryError(_))
    ));
    // the delete step never ran
    assert_eq!(repository.delete_calls(), 0);
}

#[test]
fn test_delete_failures_are_aggregated_and_all_ids_attempted() {
    let (repository, service) = service_with(vec![
        vendor(1, "First", None),
        vendor(2, "Second", None),
        vendor(3, "Third", None),
    ]);
    repository.fail_deletes_for(&[VendorId(2)]);
    // empty candidate set in sync mode deletes everything
    let file = csv_file("Name\n");

    let err = service
        .run_import(file.path(), ImportMode::Sync, &tenant())
        .unwrap_err();
    let ApplicationError::DeleteBatch {
        attempted, failed, ..
    } = err
    else {
        panic!("expected an aggregated delete failure");
    };
    assert_eq!(attempted, 3);
    assert_eq!(failed, 1);
    // every delete was attempted despite the failure in the middle
    assert_eq!(repository.delete_calls(), 3);
}

#[test]
fn test_plan_import_is_read_only() {
    let (repository, service) = service_with(vec![vendor(1, "Alice Catering", None)]);
    let file = csv_file("Name\nNew Florist\n");

    let plan = service
        .plan_import(file.path(), ImportMode::Sync, &tenant())
        .unwrap();
    assert_eq!(plan.to_add.len(), 1);
    assert_eq!(plan.to_delete, vec![VendorId(1)]);

    assert_eq!(repository.create_calls(), 0);
    assert_eq!(repository.delete_calls(), 0);
    assert_eq!(repository.list_by_tenant(&tenant()).unwrap().len(), 1);
}

#[test]
fn test_tenants_are_isolated() {
    let (repository, service) = service_with(vec![vendor(1, "Alice Catering", None)]);
    let other_tenant = TenantId::new("wedding-2").unwrap();
    let file = csv_file("Name\nAlice Catering\n");

    // same vendor name under another tenant is a brand-new vendor there
    let stats = service
        .run_import(file.path(), ImportMode::Sync, &other_tenant)
        .unwrap();
    assert_eq!(stats.added, 1);
    assert_eq!(stats.deleted, 0);

    // the original tenant's vendor is untouched
    assert_eq!(repository.list_by_tenant(&tenant()).unwrap().len(), 1);
}

#[test]
fn test_unsupported_format_is_rejected() {
    let (_, service) = service_with(vec![]);
    let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();

    let err = service
        .run_import(file.path(), ImportMode::AddOnly, &tenant())
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::UnsupportedFormat(_))
    ));
}
