mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = TestServer::spawn().await?;
    let health_url = server.base_url.replace("/api/users", "/health");

    let res = server.client.get(health_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn register_returns_identity_projection() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/register"))
        .json(&json!({ "name": "A", "email": "a@x.com", "password": "pw" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["isAdmin"], false);
    assert_eq!(body["isSeller"], false);
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());

    let claims = server.tokens.verify(body["token"].as_str().unwrap())?;
    assert_eq!(claims.id.to_string(), body["id"].as_str().unwrap());
    Ok(())
}

#[tokio::test]
async fn register_never_grants_admin() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/register"))
        .json(&json!({ "name": "Mallory", "email": "m@x.com", "password": "pw", "isAdmin": true, "isSeller": true }))
        .send()
        .await?;
    let body: Value = res.json().await?;

    assert_eq!(body["isAdmin"], false);
    assert_eq!(body["isSeller"], false);
    assert!(!server.tokens.verify(body["token"].as_str().unwrap())?.is_admin);
    Ok(())
}

#[tokio::test]
async fn register_duplicate_email_is_internal_error() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.register("A", "a@x.com", "pw").await?;

    let res = server
        .client
        .post(server.url("/register"))
        .json(&json!({ "name": "A again", "email": "a@x.com", "password": "pw" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await?;
    assert!(!body["message"].as_str().unwrap().contains("a@x.com"));
    Ok(())
}

#[tokio::test]
async fn signin_with_valid_credentials() -> Result<()> {
    let server = TestServer::spawn().await?;
    let registered = server.register("A", "a@x.com", "pw").await?;

    let res = server.signin("a@x.com", "pw").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["id"], registered["id"]);
    assert!(server.tokens.verify(body["token"].as_str().unwrap()).is_ok());
    Ok(())
}

#[tokio::test]
async fn signin_failures_are_indistinguishable() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.register("A", "a@x.com", "pw").await?;

    let wrong_password = server.signin("a@x.com", "nope").await?;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = wrong_password.json().await?;

    let unknown_email = server.signin("ghost@x.com", "pw").await?;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: Value = unknown_email.json().await?;

    assert_eq!(wrong_password["message"], "Invalid email or password");
    assert_eq!(wrong_password, unknown_email);
    Ok(())
}

#[tokio::test]
async fn protected_route_requires_token() -> Result<()> {
    let server = TestServer::spawn().await?;

    let missing = server.client.put(server.url("/profile")).json(&json!({})).send().await?;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let body: Value = missing.json().await?;
    assert_eq!(body["message"], "No Token");

    let garbage = server
        .client
        .put(server.url("/profile"))
        .bearer_auth("garbage")
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    let body: Value = garbage.json().await?;
    assert_eq!(body["message"], "Invalid Token");
    Ok(())
}

#[tokio::test]
async fn malformed_body_answers_json_error() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/signin"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let content_type = res.headers()["content-type"].to_str()?.to_string();
    assert!(content_type.starts_with("application/json"));

    let body: Value = res.json().await?;
    assert_eq!(
        body,
        json!({ "error": true, "message": "Invalid JSON body", "code": "BAD_REQUEST" })
    );

    // A body without a JSON content type is rejected the same way
    let res = server
        .client
        .post(server.url("/register"))
        .body(r#"{"name":"A","email":"a@x.com","password":"pw"}"#)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}
