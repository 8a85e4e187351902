use crate::ApiError;

use sm_auth::AuthError;
use sm_core::ExportFileName;
use sm_export::ExportError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Export file not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Export file not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Invalid export type 'x'", "type")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "type");
}

#[tokio::test]
async fn test_unauthorized_and_forbidden_status_codes() {
    let unauthorized = ApiError::Unauthorized {
        message: "Authentication required".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let forbidden = ApiError::Forbidden {
        message: "nope".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(unauthorized).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");

    let (status, json) = body_json(forbidden).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Export operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn given_auth_errors_when_converted_then_mapped_by_kind() {
    let missing: ApiError = AuthError::MissingCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let denied: ApiError = AuthError::PermissionDenied {
        capability: "manage_options".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let nonce: ApiError = AuthError::InvalidNonce {
        action: "create_export".into(),
        message: "missing token".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(missing, ApiError::Unauthorized { .. }));
    assert!(matches!(denied, ApiError::Forbidden { .. }));
    assert!(matches!(nonce, ApiError::BadRequest { .. }));
}

#[test]
fn given_invalid_file_name_when_converted_then_validation_on_filename() {
    let core = ExportFileName::parse("../secrets.json").unwrap_err();
    let error: ApiError = ExportError::from(core).into();

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("filename")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_io_failure_hides_filesystem_details() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/var/secret/path");
    let error: ApiError = ExportError::io("writing export", io).into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("/var/secret/path"));
}
