//! Integration tests for edition duplicate, export, and catalog operations.

mod common;

use std::sync::Arc;
use std::time::Duration;

use conspects_client::error::TransferError;
use conspects_client::{
    DirectorySink, DuplicateEditionForm, EditionCatalog, EditionTransferManager, MemorySink,
};
use conspects_core::traits::transport::{ApiResponse, HttpMethod};
use conspects_core::types::{EditionId, SubjectId};

use common::{RecordingTransport, Scripted, sample_edition};

fn zip_response(disposition: Option<&str>) -> ApiResponse {
    let response = ApiResponse::new(200, &b"PK\x03\x04archive"[..])
        .with_header("Content-Type", "application/zip");
    match disposition {
        Some(value) => response.with_header("Content-Disposition", value),
        None => response,
    }
}

#[tokio::test]
async fn test_duplicate_request_shape() {
    let transport = RecordingTransport::always(201);
    let manager = EditionTransferManager::new(transport.clone(), Arc::new(MemorySink::new()));

    manager
        .duplicate(EditionId(12), "Operating Systems copy", 2025)
        .await
        .expect("duplicate succeeds");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "/editions/duplicate/");
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({
            "base_edition_id": 12,
            "new_edition_name": "Operating Systems copy",
            "new_edition_year": 2025
        }))
    );
}

#[tokio::test]
async fn test_duplicate_failure() {
    let transport = RecordingTransport::always_with(Scripted::Respond(ApiResponse::new(
        403,
        "forbidden",
    )));
    let manager = EditionTransferManager::new(transport, Arc::new(MemorySink::new()));

    let err = manager
        .duplicate(EditionId(12), "copy", 2025)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransferError::DuplicateFailed {
            status: Some(403),
            ..
        }
    ));
}

#[tokio::test]
async fn test_non_numeric_year_is_caught_before_sending() {
    let transport = RecordingTransport::always(201);
    let manager = EditionTransferManager::new(transport.clone(), Arc::new(MemorySink::new()));

    let mut form = DuplicateEditionForm::for_edition(&sample_edition());
    form.set_year_input("");

    let err = manager.duplicate_from_form(&form).await.unwrap_err();
    assert!(matches!(err, TransferError::InvalidYear { .. }));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_duplicate_from_prefilled_form() {
    let transport = RecordingTransport::always(201);
    let manager = EditionTransferManager::new(transport.clone(), Arc::new(MemorySink::new()));

    let form = DuplicateEditionForm::for_edition(&sample_edition());
    manager.duplicate_from_form(&form).await.expect("duplicate");

    let body = transport.requests()[0].body.clone().expect("body");
    assert_eq!(body["new_edition_name"], "Operating Systems 2024 copy");
    assert_eq!(body["new_edition_year"], 2024);
}

#[tokio::test]
async fn test_export_uses_header_filename() {
    let transport = RecordingTransport::scripted(vec![Scripted::Respond(zip_response(Some(
        r#"attachment; filename="course.zip""#,
    )))]);
    let sink = Arc::new(MemorySink::new());
    let manager = EditionTransferManager::new(transport.clone(), sink.clone());

    let artifact = manager
        .export_zip(&sample_edition())
        .await
        .expect("export succeeds");

    assert_eq!(transport.requests()[0].path, "/export-edition/12");
    assert_eq!(artifact.filename, "course.zip");
    assert_eq!(artifact.media_type, "application/zip");
    assert_eq!(
        sink.delivered("course.zip").map(|a| a.data),
        Some(artifact.data.clone())
    );
    assert_eq!(sink.live_urls(), 0);
    assert_eq!(sink.revoked_count(), 1);
    assert!(!manager.is_exporting());
}

#[tokio::test]
async fn test_export_without_header_uses_edition_name() {
    let transport = RecordingTransport::scripted(vec![Scripted::Respond(zip_response(None))]);
    let sink = Arc::new(MemorySink::new());
    let manager = EditionTransferManager::new(transport, sink.clone());

    let artifact = manager.export_zip(&sample_edition()).await.expect("export");
    assert_eq!(artifact.filename, "Operating Systems 2024.zip");
    assert_eq!(sink.delivered_count(), 1);
}

#[tokio::test]
async fn test_export_with_malformed_header_uses_edition_name() {
    let transport = RecordingTransport::scripted(vec![Scripted::Respond(zip_response(Some(
        "attachment",
    )))]);
    let manager = EditionTransferManager::new(transport, Arc::new(MemorySink::new()));

    let artifact = manager.export_zip(&sample_edition()).await.expect("export");
    assert_eq!(artifact.filename, "Operating Systems 2024.zip");
}

#[tokio::test]
async fn test_export_failure_clears_progress_flag() {
    let transport = RecordingTransport::always_with(Scripted::NetworkDown);
    let sink = Arc::new(MemorySink::new());
    let manager = EditionTransferManager::new(transport, sink.clone());
    let mut progress = manager.subscribe_progress();

    let err = manager.export_zip(&sample_edition()).await.unwrap_err();
    assert!(matches!(err, TransferError::ExportFailed { status: None, .. }));

    assert!(progress.has_changed().expect("sender alive"));
    assert_eq!(*progress.borrow_and_update(), 0);
    assert!(!manager.is_exporting());
    // Nothing was staged, so nothing to revoke.
    assert_eq!(sink.revoked_count(), 0);
}

#[tokio::test]
async fn test_export_http_error_clears_progress_flag() {
    let transport = RecordingTransport::always_with(Scripted::Respond(ApiResponse::new(
        500,
        "export crashed",
    )));
    let manager = EditionTransferManager::new(transport, Arc::new(MemorySink::new()));

    let err = manager.export_zip(&sample_edition()).await.unwrap_err();
    match err {
        TransferError::ExportFailed { status, body } => {
            assert_eq!(status, Some(500));
            assert_eq!(body, "export crashed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!manager.is_exporting());
}

#[tokio::test]
async fn test_failed_trigger_still_revokes_url() {
    let transport = RecordingTransport::scripted(vec![Scripted::Respond(zip_response(None))]);
    let sink = Arc::new(MemorySink::failing_trigger());
    let manager = EditionTransferManager::new(transport, sink.clone());

    let err = manager.export_zip(&sample_edition()).await.unwrap_err();
    assert!(matches!(err, TransferError::DownloadFailed(_)));
    assert_eq!(sink.live_urls(), 0);
    assert_eq!(sink.revoked_count(), 1);
    assert!(!manager.is_exporting());
}

#[tokio::test]
async fn test_export_to_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let transport = RecordingTransport::scripted(vec![Scripted::Respond(zip_response(Some(
        "attachment; filename=os-2024.zip",
    )))]);
    let sink = Arc::new(DirectorySink::new(dir.path()));
    let manager = EditionTransferManager::new(transport, sink.clone());

    manager.export_zip(&sample_edition()).await.expect("export");

    let saved = std::fs::read(sink.destination("os-2024.zip")).expect("saved archive");
    assert!(saved.starts_with(b"PK"));
}

#[tokio::test]
async fn test_catalog_list_and_create() {
    let editions = serde_json::json!([
        {"id": 12, "name": "Operating Systems 2024", "year": 2024, "user_permission": "edit"},
        {"id": 13, "name": "Operating Systems 2025", "year": 2025, "user_permission": "view"}
    ]);
    let transport = RecordingTransport::scripted(vec![
        Scripted::Respond(ApiResponse::new(200, editions.to_string())),
        Scripted::Respond(ApiResponse::new(201, "")),
    ]);
    let catalog = EditionCatalog::new(transport.clone());

    let found = catalog
        .find(SubjectId(3), EditionId(13))
        .await
        .expect("list")
        .expect("edition 13 present");
    assert!(found.user_permission.is_view_only());

    catalog
        .create(SubjectId(3), "Operating Systems 2026", 2026)
        .await
        .expect("create");

    let requests = transport.requests();
    assert_eq!(requests[0].path, "/courses/3/editions/");
    assert_eq!(requests[1].method, HttpMethod::Post);
    assert_eq!(
        requests[1].body,
        Some(serde_json::json!({"name": "Operating Systems 2026", "year": 2026}))
    );
}

#[tokio::test]
async fn test_catalog_create_failure() {
    let transport = RecordingTransport::always(500);
    let catalog = EditionCatalog::new(transport);

    let err = catalog
        .create(SubjectId(3), "x", 2026)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransferError::CatalogFailed {
            status: Some(500),
            ..
        }
    ));
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_exports_stay_in_progress_until_the_last_returns() {
    let transport = RecordingTransport::scripted(vec![
        Scripted::Delayed(Duration::from_millis(200), zip_response(None)),
        Scripted::Delayed(Duration::from_millis(10), zip_response(None)),
    ]);
    let manager = EditionTransferManager::new(transport, Arc::new(MemorySink::new()));
    let progress = manager.subscribe_progress();

    let slow = sample_edition();
    let mut fast = sample_edition();
    fast.id = EditionId(13);
    fast.name = "Operating Systems 2025".to_string();

    let fast_then_check = async {
        let result = manager.export_zip(&fast).await;
        (result, manager.is_exporting(), *progress.borrow())
    };
    let (slow_result, (fast_result, busy_after_fast, in_flight_after_fast)) =
        tokio::join!(manager.export_zip(&slow), fast_then_check);

    assert_eq!(fast_result.expect("fast export").filename, "Operating Systems 2025.zip");
    assert!(busy_after_fast);
    assert_eq!(in_flight_after_fast, 1);

    assert_eq!(slow_result.expect("slow export").filename, "Operating Systems 2024.zip");
    assert!(!manager.is_exporting());
    assert_eq!(*progress.borrow(), 0);
}
