//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::Config;

/// Welcome message returned from the root route.
pub const WELCOME_MESSAGE: &str = "Welcome to DevOps CI/CD Demo App!";

/// Application name reported by the status route.
pub const APP_NAME: &str = "DevOps CI/CD Demo";

/// Application version, taken from the package manifest.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<Config>,
    /// Process start time, used to compute uptime.
    pub start_time: Instant,
}

impl AppState {
    /// Create new app state, marking now as the process start time.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Seconds elapsed since startup.
    pub fn uptime_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

/// Welcome response from the root route.
#[derive(Debug, Serialize)]
pub struct WelcomeInfo {
    /// Welcome message.
    pub message: &'static str,
    /// Application version.
    pub version: &'static str,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
    /// Environment name.
    pub environment: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Status: "healthy".
    pub status: &'static str,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime_seconds: f64,
    /// Environment name.
    pub environment: String,
}

/// Status report response.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Status: "success".
    pub status: &'static str,
    /// Application and runtime details.
    pub data: StatusData,
}

/// Application details in the status report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusData {
    /// Application name.
    pub app: &'static str,
    /// Application version.
    pub version: &'static str,
    /// Environment name.
    pub environment: String,
    /// Toolchain version the binary targets.
    pub runtime_version: &'static str,
    /// Host operating system.
    pub platform: &'static str,
}

/// Error response body for 404 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short error description.
    pub error: &'static str,
    /// Fault detail, present on 500 responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Requested path, present on 404 responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorBody {
    /// Body for a routing miss.
    pub fn not_found(path: &str) -> Self {
        Self {
            error: "Route not found",
            message: None,
            path: Some(path.to_string()),
        }
    }

    /// Body for an unhandled handler fault.
    pub fn fault(message: String) -> Self {
        Self {
            error: "Something went wrong!",
            message: Some(message),
            path: None,
        }
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Root handler - returns the welcome message.
pub async fn welcome(State(state): State<AppState>) -> impl IntoResponse {
    Json(WelcomeInfo {
        message: WELCOME_MESSAGE,
        version: APP_VERSION,
        timestamp: now_rfc3339(),
        environment: state.config.environment.clone(),
    })
}

/// Health check handler - always returns 200, no dependency checks.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy",
        timestamp: now_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        environment: state.config.environment.clone(),
    })
}

/// Status handler - returns application and runtime details.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusReport {
        status: "success",
        data: StatusData {
            app: APP_NAME,
            version: APP_VERSION,
            environment: state.config.environment.clone(),
            runtime_version: concat!("rustc ", env!("CARGO_PKG_RUST_VERSION")),
            platform: std::env::consts::OS,
        },
    })
}

/// Fallback handler - any unmatched method/path yields 404.
///
/// The echoed path includes the query string when one was sent.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map_or(uri.path(), |pq| pq.as_str());

    (StatusCode::NOT_FOUND, Json(ErrorBody::not_found(path)))
}

/// Inject standard security headers on every response (helmet equivalent).
pub async fn security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::X_XSS_PROTECTION, HeaderValue::from_static("0"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_is_non_negative_and_grows() {
        let state = AppState::new(Config::default());
        let first = state.uptime_seconds();
        assert!(first >= 0.0);

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(state.uptime_seconds() > first);
    }

    #[test]
    fn not_found_body_echoes_path() {
        let body = ErrorBody::not_found("/unknown");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"error": "Route not found", "path": "/unknown"})
        );
    }

    #[test]
    fn fault_body_has_no_path_field() {
        let body = ErrorBody::fault("Internal server error".to_string());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"error": "Something went wrong!", "message": "Internal server error"})
        );
    }

    #[test]
    fn health_status_serializes_camel_case() {
        let status = HealthStatus {
            status: "healthy",
            timestamp: now_rfc3339(),
            uptime_seconds: 1.5,
            environment: "development".to_string(),
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["uptimeSeconds"], 1.5);
        assert_eq!(json["status"], "healthy");
    }
}
