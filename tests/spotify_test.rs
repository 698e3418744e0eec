use std::{collections::HashMap, sync::Arc};

use axum::{Json, Router, http::StatusCode, routing::get, routing::post};
use serde_json::json;
use tokio::sync::Mutex;
use url::Url;

use sptrendcli::config::Config;
use sptrendcli::error::TrendError;
use sptrendcli::server;
use sptrendcli::spotify::auth::{build_authorization_url, exchange_code_for_token};
use sptrendcli::spotify::tracks::fetch_top_tracks;
use sptrendcli::types::{AuthState, SharedAuthState};

// Helper function to create a config pointing at arbitrary endpoints
fn create_test_config() -> Config {
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:8080/callback".to_string(),
        scope: "user-read-private user-top-read".to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "https://accounts.spotify.com/api/token".to_string(),
        api_url: "https://api.spotify.com/v1".to_string(),
        server_addr: "127.0.0.1:8080".to_string(),
    }
}

// Spawns a throwaway local server for the given routes and returns its base URL
async fn spawn_test_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[test]
fn test_authorization_url_round_trips() {
    let config = create_test_config();
    let url_string = build_authorization_url(&config).unwrap();

    // The serialized URL must not leak raw spaces from the scope
    assert!(!url_string.contains(' '));

    let url = Url::parse(&url_string).unwrap();
    assert_eq!(url.domain(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");

    let params: HashMap<String, String> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    assert_eq!(params["client_id"], config.client_id);
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], config.redirect_uri);
    assert_eq!(params["scope"], config.scope);
    assert_eq!(params.len(), 4);
}

#[test]
fn test_authorization_url_is_deterministic() {
    let config = create_test_config();
    assert_eq!(
        build_authorization_url(&config).unwrap(),
        build_authorization_url(&config).unwrap()
    );
}

#[tokio::test]
async fn test_exchange_surfaces_provider_rejection() {
    let app = Router::new().route(
        "/token",
        post(|| async { (StatusCode::BAD_REQUEST, "invalid_grant") }),
    );
    let base = spawn_test_server(app).await;

    let mut config = create_test_config();
    config.token_url = format!("{}/token", base);

    let result = exchange_code_for_token(&config, "expired-code").await;
    match result {
        Err(TrendError::AuthExchange { status, body }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected AuthExchange error, got {:?}", other.map(|t| t.access_token)),
    }
}

#[tokio::test]
async fn test_exchange_rejects_missing_access_token() {
    // A 2xx response without an access_token must fail visibly
    let app = Router::new().route(
        "/token",
        post(|| async { Json(json!({ "token_type": "Bearer" })) }),
    );
    let base = spawn_test_server(app).await;

    let mut config = create_test_config();
    config.token_url = format!("{}/token", base);

    let result = exchange_code_for_token(&config, "some-code").await;
    assert!(matches!(result, Err(TrendError::AuthExchange { .. })));
}

#[tokio::test]
async fn test_exchange_returns_token_on_success() {
    let app = Router::new().route(
        "/token",
        post(|| async {
            Json(json!({
                "access_token": "BQC-access",
                "token_type": "Bearer",
                "scope": "user-top-read",
                "expires_in": 3600
            }))
        }),
    );
    let base = spawn_test_server(app).await;

    let mut config = create_test_config();
    config.token_url = format!("{}/token", base);

    let token = exchange_code_for_token(&config, "fresh-code").await.unwrap();
    assert_eq!(token.access_token, "BQC-access");
    assert_eq!(token.scope, "user-top-read");
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn test_fetch_top_tracks_surfaces_forbidden() {
    let app = Router::new().route(
        "/me/top/tracks",
        get(|| async { (StatusCode::FORBIDDEN, "insufficient scope") }),
    );
    let base = spawn_test_server(app).await;

    let mut config = create_test_config();
    config.api_url = base;

    let result = fetch_top_tracks(&config, "some-token", 10).await;
    match result {
        Err(TrendError::DataFetch { status, body }) => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert!(body.contains("insufficient scope"));
        }
        other => panic!("expected DataFetch error, got {:?}", other.map(|v| v.len())),
    }
}

#[tokio::test]
async fn test_fetch_top_tracks_maps_snapshots() {
    let app = Router::new().route(
        "/me/top/tracks",
        get(|| async {
            Json(json!({
                "items": [
                    {
                        "name": "Track One",
                        "popularity": 70,
                        "artists": [{ "name": "Artist One" }, { "name": "Feature" }],
                        "album": { "name": "Album One" },
                        "duration_ms": 210000
                    },
                    {
                        "name": "Track Two",
                        "popularity": 40,
                        "artists": [{ "name": "Artist Two" }],
                        "album": { "name": "Album Two" },
                        "duration_ms": 184500
                    }
                ]
            }))
        }),
    );
    let base = spawn_test_server(app).await;

    let mut config = create_test_config();
    config.api_url = base;

    let snapshots = fetch_top_tracks(&config, "some-token", 10).await.unwrap();
    assert_eq!(snapshots.len(), 2);

    assert_eq!(snapshots[0].name, "Track One");
    assert_eq!(snapshots[0].popularity, 70);
    // Only the first artist is kept
    assert_eq!(snapshots[0].artist, "Artist One");
    assert_eq!(snapshots[0].album, "Album One");
    assert_eq!(snapshots[0].duration_min, 3.5);

    assert_eq!(snapshots[1].name, "Track Two");
    // 184500 ms rounds to 3.08 minutes
    assert_eq!(snapshots[1].duration_min, 3.08);
}

#[tokio::test]
async fn test_callback_transitions_state_to_authenticated() {
    // Token endpoint the callback handler will exchange against
    let token_app = Router::new().route(
        "/token",
        post(|| async {
            Json(json!({
                "access_token": "BQC-from-callback",
                "token_type": "Bearer",
                "scope": "user-top-read",
                "expires_in": 3600
            }))
        }),
    );
    let token_base = spawn_test_server(token_app).await;

    let mut config = create_test_config();
    config.token_url = format!("{}/token", token_base);

    let state: SharedAuthState = Arc::new(Mutex::new(AuthState::Unauthenticated {
        authorize_url: build_authorization_url(&config).unwrap(),
    }));

    let app = server::router(Arc::new(config), Arc::clone(&state));
    let base = spawn_test_server(app).await;

    let body = reqwest::get(format!("{}/callback?code=abc", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Authentication successful"));

    let lock = state.lock().await;
    match &*lock {
        AuthState::Authenticated { token } => {
            assert_eq!(token.access_token, "BQC-from-callback");
        }
        AuthState::Unauthenticated { .. } => panic!("state did not transition"),
    }
}

#[tokio::test]
async fn test_callback_without_code_keeps_state_unauthenticated() {
    let config = create_test_config();
    let state: SharedAuthState = Arc::new(Mutex::new(AuthState::Unauthenticated {
        authorize_url: build_authorization_url(&config).unwrap(),
    }));

    let app = server::router(Arc::new(config), Arc::clone(&state));
    let base = spawn_test_server(app).await;

    let body = reqwest::get(format!("{}/callback", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Missing authorization code"));

    let lock = state.lock().await;
    assert!(matches!(&*lock, AuthState::Unauthenticated { .. }));
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let config = create_test_config();
    let state: SharedAuthState = Arc::new(Mutex::new(AuthState::Unauthenticated {
        authorize_url: String::new(),
    }));

    let app = server::router(Arc::new(config), state);
    let base = spawn_test_server(app).await;

    let json: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["status"], "ok");
}
