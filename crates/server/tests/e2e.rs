use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::startup;

struct TestApp {
    base_url: String,
    data_dir: std::path::PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let data_dir = std::env::temp_dir().join(format!("catalog_e2e_{}", Uuid::new_v4()));
    let mut cfg = configs::AppConfig::default();
    cfg.storage.path = data_dir.join("db.json").to_string_lossy().into_owned();
    cfg.normalize_and_validate()?;

    let state = startup::build_state(&cfg).await?;
    let app = startup::build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_dir })
}

#[tokio::test]
async fn e2e_health_and_category_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/categories", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = c
        .post(format!("{}/categories", app.base_url))
        .header("Authorization", configs::DEFAULT_TOKEN)
        .json(&json!({"name": "Tools"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c
        .get(format!("{}/categories", app.base_url))
        .header("Authorization", configs::DEFAULT_TOKEN)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!([{"id": 1, "name": "Tools"}]));

    assert!(tokio::fs::metadata(app.data_dir.join("db.json")).await.is_ok());
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_document_refuses_to_start() -> anyhow::Result<()> {
    let data_dir = std::env::temp_dir().join(format!("catalog_e2e_bad_{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&data_dir).await?;
    let path = data_dir.join("db.json");
    tokio::fs::write(&path, b"not json").await?;

    let mut cfg = configs::AppConfig::default();
    cfg.storage.path = path.to_string_lossy().into_owned();
    assert!(startup::build_state(&cfg).await.is_err());

    let _ = tokio::fs::remove_dir_all(&data_dir).await;
    Ok(())
}
