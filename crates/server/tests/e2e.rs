//! Full stack against Postgres. Skipped when `SKIP_DB_TESTS` is set or
//! `DATABASE_URL` is absent.
use std::net::SocketAddr;

use configs::{AppConfig, StorageBackend};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{build_app, build_state};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Database;
    cfg.normalize_and_validate()?;

    let state = build_state(&cfg).await?;
    let app = build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn db_tests_disabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

#[tokio::test]
async fn e2e_create_and_list_projects() -> anyhow::Result<()> {
    if db_tests_disabled() { return Ok(()); }
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let name = format!("e2e_project_{}", std::process::id());
    let res = c.post(format!("{}/project-manage", app.base_url))
        .json(&json!({"name": name, "product": 1}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!(true));

    let res = c.get(format!("{}/project-manage", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<Value>>().await?;
    let mine: Vec<&Value> = list.iter().filter(|p| p["name"] == json!(name)).collect();
    assert_eq!(mine.len(), 1);
    assert!(mine[0]["id"].as_i64().is_some());
    Ok(())
}
