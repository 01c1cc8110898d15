mod common;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use artistline::{
    config::Credentials,
    spotify::{
        SpotifyError,
        artists::{TopArtistsOptions, get_top_artists, get_top_artists_page},
        auth::{basic_auth_header, refresh_access_token},
    },
    utils::{self, TimeRange},
};
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

/// `(token, limit, offset, time_range)` of every top-artists request.
#[derive(Clone, Default)]
struct Stub {
    requests: Arc<Mutex<Vec<(String, String, String, String)>>>,
}

impl Stub {
    fn offsets(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, offset, _)| offset.clone())
            .collect()
    }
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if authorization != basic_auth_header("client", "secret") {
        return (
            StatusCode::UNAUTHORIZED,
            r#"{"error":"invalid_client"}"#,
        )
            .into_response();
    }
    if form.get("grant_type").map(String::as_str) != Some("refresh_token") {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"error":"unsupported_grant_type"}"#,
        )
            .into_response();
    }

    match form.get("refresh_token").map(String::as_str) {
        Some("good-refresh") => Json(json!({
            "access_token": "access-123",
            "token_type": "Bearer",
            "scope": "user-top-read",
            "expires_in": 3600,
        }))
        .into_response(),
        _ => (StatusCode::BAD_REQUEST, r#"{"error":"invalid_grant"}"#).into_response(),
    }
}

fn artist(rank: usize) -> Value {
    json!({
        "id": format!("artist-{}", rank),
        "name": format!("Artist {}", rank),
        "genres": ["indie pop", "art pop"],
        "popularity": 50,
        "followers": { "href": null, "total": 1000 + rank },
        "uri": format!("spotify:artist:artist-{}", rank),
        "images": if rank % 2 == 0 {
            json!([{ "url": format!("https://i.scdn.co/image/{}", rank), "height": 640, "width": 640 }])
        } else {
            json!([])
        },
        "type": "artist",
    })
}

async fn top_artists(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string();
    let param = |name: &str| params.get(name).cloned().unwrap_or_default();
    let limit: usize = param("limit").parse().unwrap_or(20);
    let offset: usize = param("offset").parse().unwrap_or(0);
    stub.requests.lock().unwrap().push((
        token.clone(),
        param("limit"),
        param("offset"),
        param("time_range"),
    ));

    // Pretend the user has 120 ranked artists
    let available = match token.as_str() {
        "access-123" => 120,
        "few-artists" => 3,
        "flaky" if offset == 0 => 120,
        "flaky" => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "upstream hiccup").into_response();
        }
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                r#"{"error":{"status":401,"message":"Invalid access token"}}"#,
            )
                .into_response();
        }
    };

    let items: Vec<Value> = (offset..available.min(offset + limit)).map(artist).collect();
    Json(json!({
        "items": items,
        "total": available,
        "limit": limit,
        "offset": offset,
        "next": null,
    }))
    .into_response()
}

async fn stub_server() -> (Stub, String) {
    let stub = Stub::default();
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me/top/artists", get(top_artists))
        .with_state(stub.clone());
    let base_url = common::spawn(app).await;
    (stub, base_url)
}

fn credentials(refresh_token: &str) -> Credentials {
    Credentials {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: refresh_token.to_string(),
    }
}

#[tokio::test]
async fn test_refresh_access_token() {
    let (_, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();

    let token = refresh_access_token(
        &client,
        &format!("{}/api/token", base_url),
        &credentials("good-refresh"),
    )
    .await
    .unwrap();

    assert_eq!(token.access_token, "access-123");
    assert_eq!(token.scope, "user-top-read");
    assert_eq!(token.expires_in, 3600);
    assert!(token.obtained_at > 0);
}

#[tokio::test]
async fn test_refresh_access_token_rejected() {
    let (_, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();

    let result = refresh_access_token(
        &client,
        &format!("{}/api/token", base_url),
        &credentials("revoked"),
    )
    .await;

    match result {
        Err(SpotifyError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_token_error_message() {
    let (_, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();
    let bad_client = Credentials {
        client_secret: "wrong".to_string(),
        ..credentials("good-refresh")
    };

    let err = refresh_access_token(&client, &format!("{}/api/token", base_url), &bad_client)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), r#"401, {"error":"invalid_client"}"#);
}

#[tokio::test]
async fn test_top_artists_page() {
    let (stub, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();

    let page = get_top_artists_page(
        &client,
        &format!("{}/v1/", base_url),
        "access-123",
        10,
        5,
        TimeRange::ShortTerm,
    )
    .await
    .unwrap();

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].id, "artist-5");

    let requests = stub.requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![(
            "access-123".to_string(),
            "10".to_string(),
            "5".to_string(),
            "short_term".to_string()
        )]
    );
}

#[tokio::test]
async fn test_top_artists_two_pages_in_ranking_order() {
    let (stub, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();

    let artists = get_top_artists(
        &client,
        &format!("{}/v1", base_url),
        "access-123",
        TopArtistsOptions::default(),
    )
    .await;

    assert_eq!(artists.len(), 100);
    assert_eq!(artists[0].id, "artist-0");
    assert_eq!(artists[50].id, "artist-50");
    assert_eq!(artists[99].id, "artist-99");
    assert_eq!(stub.offsets(), vec!["0", "50"]);
    assert!(
        stub.requests
            .lock()
            .unwrap()
            .iter()
            .all(|(_, limit, _, range)| limit == "50" && range == "long_term")
    );

    let record = utils::artist_record(&artists[0]);
    assert_eq!(record.genres, "indie pop, art pop");
    assert_eq!(record.followers, 1000);
    assert_eq!(record.profile_image, "https://i.scdn.co/image/0");
    assert_eq!(utils::artist_record(&artists[1]).profile_image, "N/A");
}

#[tokio::test]
async fn test_top_artists_keeps_partial_result() {
    let (stub, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();

    let artists = get_top_artists(
        &client,
        &format!("{}/v1", base_url),
        "flaky",
        TopArtistsOptions::default(),
    )
    .await;

    assert_eq!(artists.len(), 50);
    assert_eq!(stub.offsets(), vec!["0", "50"]);
}

#[tokio::test]
async fn test_top_artists_stop_on_empty_page() {
    let (stub, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();
    let options = TopArtistsOptions {
        limit: 2,
        total: 10,
        ..Default::default()
    };

    let artists = get_top_artists(&client, &format!("{}/v1", base_url), "few-artists", options)
        .await;

    assert_eq!(artists.len(), 3);
    assert_eq!(stub.offsets(), vec!["0", "2", "4"]);
}

#[tokio::test]
async fn test_top_artists_unauthorized() {
    let (_, base_url) = stub_server().await;
    let client = utils::http_client(None).unwrap();

    let err = get_top_artists_page(
        &client,
        &format!("{}/v1", base_url),
        "expired",
        50,
        0,
        TimeRange::LongTerm,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, SpotifyError::Status { status, .. } if status.as_u16() == 401));

    let artists = get_top_artists(
        &client,
        &format!("{}/v1", base_url),
        "expired",
        TopArtistsOptions::default(),
    )
    .await;
    assert!(artists.is_empty());
}
