#![allow(dead_code)]

use std::sync::Once;

use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("repair_bay=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    dotenvy::from_filename_override("tests/data/.test.env").unwrap();
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app = repair_bay::app().expect("Failed to build app from test env");
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// A client that keeps cookies between requests, like a browser would.
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build cookie-aware client")
}
