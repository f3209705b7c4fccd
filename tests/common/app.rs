//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use huescout::assets::AssetLoader;
use huescout::extract::SiteKind;
use huescout::models::{AppConfig, FetchConfig, SearchConfig, SiteTarget};
use huescout::server::{build_router, create_app_state_with_config};

/// Test application driving the router directly, without a TCP listener.
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Test app with no crawl targets. Good for page and validation tests;
    /// never touches the network.
    pub fn new() -> Self {
        Self::with_config(test_config(Vec::new()))
    }

    /// Test app whose crawl targets point wherever the test wants -
    /// usually at a wiremock server.
    pub fn with_config(config: AppConfig) -> Self {
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        let state = create_app_state_with_config(Arc::new(config), asset_loader)
            .expect("Failed to create app state");
        let router = build_router(state);
        Self { router }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a form-encoded body
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Config with instant fetches, no search augmentation, and the given
/// crawl targets.
pub fn test_config(sites: Vec<SiteTarget>) -> AppConfig {
    AppConfig {
        sites,
        fetch: FetchConfig {
            min_delay_ms: 0,
            max_delay_ms: 0,
            ..FetchConfig::default()
        },
        search: SearchConfig {
            enabled: false,
            ..SearchConfig::default()
        },
        max_palettes: 5,
    }
}

/// Crawl target helper.
pub fn site(url: &str, kind: SiteKind) -> SiteTarget {
    SiteTarget {
        url: url.to_string(),
        kind,
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
