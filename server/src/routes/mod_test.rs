use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

// =============================================================
// Probe routes
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let response = probe_routes::<()>()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn probe_routes_do_not_claim_other_paths() {
    let response = probe_routes::<()>()
        .oneshot(Request::builder().uri("/member").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
