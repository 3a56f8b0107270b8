use anyhow::{Context, Result, bail};
use mockid::{
    api,
    client::{ApiClient, FileStore, FlowError, MemoryStore, Session, load_profile, login},
    identity::{OsEntropy, SeededEntropy, SharedEntropy},
};
use reqwest::StatusCode;
use secrecy::SecretString;
use serde_json::Value;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

struct TestServer {
    base: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<()>>,
}

impl TestServer {
    async fn start(entropy: SharedEntropy) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind ephemeral port")?;
        let base = format!("http://{}", listener.local_addr()?);

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(api::serve(listener, api::app(entropy), async move {
            let _ = rx.await;
        }));

        Ok(Self {
            base,
            shutdown: Some(tx),
            handle,
        })
    }

    fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(&self.base)?)
    }

    async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await?
    }
}

fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

#[tokio::test]
async fn login_profile_logout_flow() -> Result<()> {
    let server = TestServer::start(Arc::new(OsEntropy)).await?;
    let api = server.client()?;

    let health = api.health().await?;
    assert_eq!(health.status, "ok");

    let dir = tempfile::tempdir()?;
    let mut session = Session::new(FileStore::new(dir.path().join("session.json")));

    match login(&api, &mut session, "", &secret("x")).await {
        Err(FlowError::Rejected(message)) => {
            assert_eq!(message, "Username and password are required");
        }
        other => bail!("expected rejection, got {other:?}"),
    }
    assert!(!session.is_authenticated()?);

    let username = login(&api, &mut session, "alice", &secret("x")).await?;
    assert_eq!(username, "alice");
    assert!(session.is_authenticated()?);
    let token = session.token()?.context("token was not stored")?;
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    let before = chrono::Utc::now();
    let profile = load_profile(&api, &session).await?;
    assert_eq!(profile.username, "alice");
    assert!(profile.joined_date < profile.last_login);
    assert!(profile.last_login >= before - chrono::Duration::seconds(1));

    session.logout()?;
    assert!(!session.is_authenticated()?);
    assert_eq!(
        load_profile(&api, &session).await,
        Err(FlowError::NotAuthenticated)
    );

    server.stop().await
}

#[tokio::test]
async fn profiles_differ_between_calls() -> Result<()> {
    let server = TestServer::start(Arc::new(OsEntropy)).await?;
    let api = server.client()?;

    let first = api.user_info("alice").await?.context("missing profile")?;
    let second = api.user_info("alice").await?.context("missing profile")?;
    assert_eq!(first.username, second.username);
    assert_ne!(first.id, second.id);

    let default = api.user_info("").await?.context("missing profile")?;
    assert_eq!(default.username, "user");

    server.stop().await
}

#[tokio::test]
async fn seeded_servers_agree() -> Result<()> {
    let mut tokens = Vec::new();
    let mut ids = Vec::new();

    for _ in 0..2 {
        let server = TestServer::start(Arc::new(SeededEntropy::new(2024))).await?;
        let api = server.client()?;

        let response = api.login("alice", &secret("x")).await?;
        tokens.push(response.token.context("missing token")?);
        ids.push(api.user_info("alice").await?.context("missing profile")?.id);

        server.stop().await?;
    }

    assert_eq!(tokens[0], tokens[1]);
    assert_eq!(ids[0], ids[1]);
    Ok(())
}

#[tokio::test]
async fn raw_http_contract() -> Result<()> {
    let server = TestServer::start(Arc::new(OsEntropy)).await?;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/api/login", server.base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key("x-request-id"));
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username and password are required");

    let response = http
        .get(format!("{}/api/user/info?username=alice&extra=1", server.base))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["username"], "alice");
    assert!(body["joinedDate"].as_str().is_some_and(|s| s.ends_with('Z')));

    let response = http
        .request(reqwest::Method::OPTIONS, format!("{}/health", server.base))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await?.is_empty());

    server.stop().await
}

#[tokio::test]
async fn memory_session_round_trip() -> Result<()> {
    let server = TestServer::start(Arc::new(OsEntropy)).await?;
    let api = server.client()?;
    let mut session = Session::new(MemoryStore::new());

    login(&api, &mut session, " ", &secret(" ")).await?;
    assert_eq!(session.username()?.as_deref(), Some(" "));

    login(&api, &mut session, "bob", &secret("hunter2")).await?;
    assert_eq!(session.username()?.as_deref(), Some("bob"));

    server.stop().await
}
