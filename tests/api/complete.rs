use crate::helpers::spawn_app;
use reqwest::Method;

#[tokio::test]
async fn complete_returns_501_for_a_json_post() {
    // Arrange
    let app = spawn_app().await;
    let body = serde_json::json!({
        "prompt_identifier": "greeting",
        "name": "world"
    });
    // Act
    let response = app.post_complete(&body).await;
    // Assert
    assert_eq!(response.status().as_u16(), 501);
    assert_eq!(response.text().await.unwrap(), "Not implemented yet");
}

#[tokio::test]
async fn complete_returns_501_for_every_non_preflight_method() {
    let app = spawn_app().await;

    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = app.request(method.clone(), "/v1/complete").await;

        assert_eq!(
            response.status().as_u16(),
            501,
            "{} /v1/complete did not return 501",
            method
        );
        assert_eq!(response.text().await.unwrap(), "Not implemented yet");
    }
}

#[tokio::test]
async fn complete_ignores_query_headers_and_malformed_bodies() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!(
            "{}/v1/complete?prompt_identifier=greeting",
            &app.address
        ))
        .header("Content-Type", "application/json")
        .header("Authorization", "Bearer nonsense")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 501);
    assert_eq!(response.text().await.unwrap(), "Not implemented yet");
}

#[tokio::test]
async fn complete_preflight_has_an_empty_body() {
    let app = spawn_app().await;

    let response = app.request(Method::OPTIONS, "/v1/complete").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(Some(0), response.content_length());
}
