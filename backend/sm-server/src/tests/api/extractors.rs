use crate::AuthorizedActor;
use crate::tests::{lazy_state, token_for};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use tempfile::TempDir;

#[tokio::test]
async fn test_extractor_without_auth_uses_local_admin() {
    let dir = TempDir::new().unwrap();
    let state = lazy_state(dir.path(), false);
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthorizedActor::from_request_parts(&mut parts, &state).await;

    let actor = result.unwrap().0;
    assert_eq!(actor.id, "1");
    assert_eq!(actor.display_name, "Local Admin");
}

#[tokio::test]
async fn test_extractor_with_admin_bearer_token() {
    let dir = TempDir::new().unwrap();
    let state = lazy_state(dir.path(), true);
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("7", &["administrator"])))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let actor = AuthorizedActor::from_request_parts(&mut parts, &state)
        .await
        .unwrap()
        .0;

    assert_eq!(actor.id, "7");
    assert_eq!(actor.display_name, "User 7");
}

#[tokio::test]
async fn test_extractor_rejects_editor_with_forbidden() {
    let dir = TempDir::new().unwrap();
    let state = lazy_state(dir.path(), true);
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("8", &["editor"])))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthorizedActor::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(crate::ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_missing_credentials_with_unauthorized() {
    let dir = TempDir::new().unwrap();
    let state = lazy_state(dir.path(), true);
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthorizedActor::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}
