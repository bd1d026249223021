use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            200..=299 => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "code": self.code,
            "error": self.message,
        }));

        (status, body).into_response()
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 4,
        message: "mail relay unreachable".into(),
    }
}

pub fn mail_configuration_error() -> Error {
    Error {
        code: 10,
        message: "mail relay configuration error".into(),
    }
}

pub fn mail_delivery_error() -> Error {
    Error {
        code: 11,
        message: "mail delivery error".into(),
    }
}

pub fn missing_field_error(field: &str) -> Error {
    Error {
        code: 101,
        message: format!("missing field: {}", field),
    }
}

pub fn invalid_format_error(field: &str) -> Error {
    Error {
        code: 102,
        message: format!("invalid format: {}", field),
    }
}

pub fn fare_not_found_error() -> Error {
    Error {
        code: 200,
        message: "no fare for this postal code and destination".into(),
    }
}

pub fn fares_unavailable_error() -> Error {
    Error {
        code: 201,
        message: "fare data not available".into(),
    }
}
