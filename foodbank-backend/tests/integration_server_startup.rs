use std::net::Ipv4Addr;

use foodbank_backend::build_router;
use foodbank_config::Config;
use serde_json::{json, Value};

#[tokio::test]
async fn serves_login_over_tcp() {
    let cfg = Config::default();
    let router = build_router(&cfg.http);

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local_addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}:{}/api", addr.ip(), addr.port());

    let res = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("health request");
    assert!(res.status().is_success());

    let res = client
        .post(format!("{base}/auth"))
        .json(&json!({"username": "alice", "password": "secret"}))
        .send()
        .await
        .expect("login request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body, json!({"message": "Login successful"}));

    let res = client
        .post(format!("{base}/auth"))
        .body("not-json")
        .send()
        .await
        .expect("login request");
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body, json!({"error": "Internal Server Error"}));

    handle.abort();
}
