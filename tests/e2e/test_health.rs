use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_configured_text_generation(ctx: &mut TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(
        body.get("text_generation").and_then(|v| v.as_str()),
        Some("configured")
    );
    assert_eq!(body.get("tts").and_then(|v| v.as_str()), Some("google"));
}

#[tokio::test]
async fn it_should_stay_ready_without_credential() {
    let ctx = TestContext::with_api_key(None).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("text_generation").and_then(|v| v.as_str()),
        Some("missing_credential")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/api/options").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_unique_request_ids(ctx: &mut TestContext) {
    let first = ctx.client.get("/health").await.unwrap();
    let second = ctx.client.get("/health").await.unwrap();

    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
}
