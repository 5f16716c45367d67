#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Duration;
use reqwest::{Client, Response};
use serde_json::{json, Value};

use marketplace_users_api::auth::password::hash_password;
use marketplace_users_api::auth::TokenService;
use marketplace_users_api::database::models::user::NewUser;
use marketplace_users_api::database::{MemoryUserStore, UserStore};
use marketplace_users_api::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// One server per test, backed by its own memory store
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    pub store: Arc<MemoryUserStore>,
    pub tokens: TokenService,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;

        let store = Arc::new(MemoryUserStore::new());
        let tokens = TokenService::new(TEST_SECRET, Duration::days(30))?;
        let router = app(AppState::new(store.clone(), tokens.clone()));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}/api/users", port),
            client: Client::new(),
            store,
            tokens,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Insert a record straight into the store, bypassing the HTTP surface
    pub async fn insert_user(&self, name: &str, email: &str, password: &str, is_admin: bool) -> Result<Value> {
        let mut new_user = NewUser::new(name, email, hash_password(password)?);
        new_user.is_admin = is_admin;
        let user = self.store.insert(new_user).await?;
        Ok(serde_json::to_value(user)?)
    }

    /// Register through the API and return the identity projection
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Value> {
        let res = self
            .client
            .post(self.url("/register"))
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await?;
        anyhow::ensure!(res.status().is_success(), "register failed: {}", res.status());
        Ok(res.json().await?)
    }

    pub async fn signin(&self, email: &str, password: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url("/signin"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?)
    }

    /// Insert an administrator and sign it in, returning its token
    pub async fn admin_token(&self) -> Result<String> {
        self.insert_user("Root", "root@example.com", "rootpw", true).await?;
        let body: Value = self.signin("root@example.com", "rootpw").await?.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("signin response without token")
    }
}
