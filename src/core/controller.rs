use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::error;
use crate::accounts::domain::AccountService;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
    pub accounts: Arc<dyn AccountService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>, accounts: Arc<dyn AccountService>) -> AppState {
        AppState {
            config,
            catalog,
            accounts,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ServerError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str, error: Option<String>) -> Self {
        Self {
            status,
            body: ErrorBody { message: message.to_string(), error },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, "Invalid request body", Some(err.to_string()))
}

// an empty body reads as `{}` so that missing fields surface as validation errors
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ServerError> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) { b"{}" } else { &body[..] };
    serde_json::from_slice(raw).map_err(json_to_server_error)
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match &err {
            CommandError::Access { .. } => {
                ServerError::new(StatusCode::UNAUTHORIZED, err.message(), None)
            }
            CommandError::DuplicateKey { .. } => {
                ServerError::new(StatusCode::CONFLICT, err.message(), None)
            }
            CommandError::NotFound { .. } => {
                ServerError::new(StatusCode::NOT_FOUND, err.message(), None)
            }
            CommandError::Runtime { .. } => {
                error!(error = ?err, "request failed");
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", Some(err.message().to_string()))
            }
            CommandError::Serialization { .. } => {
                ServerError::new(StatusCode::BAD_REQUEST, "Invalid request body", Some(err.message().to_string()))
            }
            CommandError::Validation { .. } => {
                ServerError::new(StatusCode::BAD_REQUEST, err.message(), None)
            }
        }
    }
}

// PrettyJson renders a success body as JSON indented with four spaces
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(256);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        match self.0.serialize(&mut ser) {
            Ok(()) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                buf,
            ).into_response(),
            Err(err) => {
                error!(error = %err, "failed to render response");
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", Some(err.to_string()))
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub branch: String,
}

pub(crate) async fn health(State(state): State<AppState>) -> PrettyJson<HealthResponse> {
    PrettyJson(HealthResponse {
        status: "ok".to_string(),
        branch: state.config.branch_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde::Deserialize;
    use crate::core::command::CommandError;
    use crate::core::controller::{parse_body, PrettyJson, ServerError};

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        name: Option<String>,
    }

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let cases = vec![
            (CommandError::Access { message: "test".to_string(), reason_code: None }, StatusCode::UNAUTHORIZED),
            (CommandError::DuplicateKey { message: "test".to_string() }, StatusCode::CONFLICT),
            (CommandError::NotFound { message: "test".to_string() }, StatusCode::NOT_FOUND),
            (CommandError::Runtime { message: "test".to_string(), reason_code: None }, StatusCode::INTERNAL_SERVER_ERROR),
            (CommandError::Serialization { message: "test".to_string() }, StatusCode::BAD_REQUEST),
            (CommandError::Validation { message: "test".to_string(), reason_code: None }, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(status, ServerError::from(err).status);
        }
    }

    #[tokio::test]
    async fn test_should_keep_not_found_message() {
        let err = ServerError::from(CommandError::NotFound { message: "Book not found".to_string() });
        assert_eq!("Book not found", err.body.message.as_str());
        assert_eq!(None, err.body.error);
    }

    #[tokio::test]
    async fn test_should_parse_empty_body_as_object() {
        let probe: Probe = parse_body(&Bytes::from_static(b"  ")).expect("should parse empty body");
        assert_eq!(None, probe.name);
        let probe: Probe = parse_body(&Bytes::from_static(br#"{"name":"x"}"#)).expect("should parse body");
        assert_eq!(Some("x".to_string()), probe.name);
        let err = parse_body::<Probe>(&Bytes::from_static(b"name=x")).expect_err("should reject body");
        assert_eq!(StatusCode::BAD_REQUEST, err.status);
        assert!(err.body.error.is_some());
    }

    #[tokio::test]
    async fn test_should_render_pretty_json() {
        let res = PrettyJson(serde_json::json!({"a": {"b": 1}})).into_response();
        assert_eq!(StatusCode::OK, res.status());
        let body = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        assert_eq!("{\n    \"a\": {\n        \"b\": 1\n    }\n}", String::from_utf8_lossy(&body));
    }
}
