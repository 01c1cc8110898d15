#![allow(dead_code)]

use std::time::Duration;

use artistline::{management::RetryPolicy, musicbrainz::MusicBrainzClient};
use axum::Router;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// MusicBrainz client against a stub server, without pacing or retry delay.
pub fn musicbrainz_client(base_url: &str) -> MusicBrainzClient {
    MusicBrainzClient::new(&format!("{}/ws/2", base_url), "artistline-tests/0.0")
        .unwrap()
        .with_throttle(Duration::ZERO, RetryPolicy::new(3, Duration::ZERO))
}

pub const MBID_A: &str = "0383dadf-2a4e-4d10-a46a-e9e041da8eb3";
pub const MBID_B: &str = "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d";
pub const MBID_C: &str = "a74b1b7f-71a5-4011-9441-d0b5e4122711";
