mod common;

use common::{session_client, spawn_app};
use reqwest::header;
use serde_json::Value;

#[tokio::test]
async fn status_reports_system_and_sets_cookie() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/status"))
        .query(&[("system", "engines")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Status should set a session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["damaged_system"],
        "engines idenfied, please wait for help."
    );
}

#[tokio::test]
async fn status_rejects_unknown_system() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for query in ["?system=warp_core", "?system=", ""] {
        let response = client
            .get(format!("{address}/status{query}"))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}

#[tokio::test]
async fn repair_bay_without_session_refers_to_status() {
    let address = spawn_app().await;

    let response = reqwest::Client::new()
        .get(format!("{address}/repair-bay"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = response.text().await.unwrap();
    assert_eq!(
        body,
        "Please refer to our Status service to assess your requirements."
    );
}

#[tokio::test]
async fn repair_bay_shows_code_of_reported_system() {
    let address = spawn_app().await;
    let client = session_client();

    let expected = [
        ("navigation", "NAV-01"),
        ("communications", "COM-02"),
        ("life_support", "LIFE-03"),
        ("engines", "ENG-04"),
        ("deflector_shield", "SHLD-05"),
    ];

    for (system, code) in expected {
        let response = client
            .get(format!("{address}/status"))
            .query(&[("system", system)])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body = client
            .get(format!("{address}/repair-bay"))
            .send()
            .await
            .expect("Failed to execute request")
            .text()
            .await
            .unwrap();

        assert!(
            body.contains(&format!(r#"<div class="anchor-point">{code}</div>"#)),
            "expected {code} for {system}, got {body}"
        );
    }
}

#[tokio::test]
async fn sessions_are_isolated_between_clients() {
    let address = spawn_app().await;
    let alice = session_client();
    let bob = session_client();

    alice
        .get(format!("{address}/status?system=navigation"))
        .send()
        .await
        .unwrap();

    let bob_body = bob
        .get(format!("{address}/repair-bay"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(bob_body.starts_with("Please refer to our Status service"));

    let alice_body = alice
        .get(format!("{address}/repair-bay"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(alice_body.contains("NAV-01"));
}

#[tokio::test]
async fn tampered_cookie_is_treated_as_empty_session() {
    let address = spawn_app().await;

    let response = reqwest::Client::new()
        .get(format!("{address}/repair-bay"))
        .header(header::COOKIE, "session=eyJhbGciOiJIUzI1NiJ9.forged.signature")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.starts_with("Please refer to our Status service"));
}

#[tokio::test]
async fn repair_bay_does_not_reissue_cookie() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let status = client
        .get(format!("{address}/status?system=engines"))
        .send()
        .await
        .unwrap();
    let cookie = status.headers()[header::SET_COOKIE].to_str().unwrap();
    let pair = cookie.split(';').next().unwrap().to_string();

    let response = client
        .get(format!("{address}/repair-bay"))
        .header(header::COOKIE, pair)
        .send()
        .await
        .unwrap();

    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(response.text().await.unwrap().contains("ENG-04"));
}

#[tokio::test]
async fn second_report_replaces_first_and_keeps_cookie_alive() {
    let address = spawn_app().await;
    let client = session_client();

    client
        .get(format!("{address}/status?system=navigation"))
        .send()
        .await
        .unwrap();

    let response = client
        .get(format!("{address}/status?system=deflector_shield"))
        .send()
        .await
        .unwrap();
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.contains("Max-Age=1209600"));
    assert!(!cookie.contains("Max-Age=0;"));

    let body = client
        .get(format!("{address}/repair-bay"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("SHLD-05"));
    assert!(!body.contains("NAV-01"));
}
