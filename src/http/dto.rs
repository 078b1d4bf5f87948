//! Request and response shapes for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};

use crate::utils::error::Result;
use crate::utils::validation::{parse_day_count, validate_name};

/// Raw query parameters of `GET /contributions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionsQuery {
    pub name: Option<String>,
    pub day_count: Option<String>,
}

impl ContributionsQuery {
    /// Parse a raw query string. When a key repeats, the first value wins.
    pub fn from_raw(query: Option<&str>) -> Self {
        let mut parsed = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "name" if parsed.name.is_none() => parsed.name = Some(value.into_owned()),
                "dayCount" if parsed.day_count.is_none() => {
                    parsed.day_count = Some(value.into_owned())
                }
                _ => {}
            }
        }

        parsed
    }

    pub fn validate(&self) -> Result<ContributionsRequest> {
        let name = validate_name(self.name.as_deref())?;
        let day_count = parse_day_count(self.day_count.as_deref())?;
        Ok(ContributionsRequest { name, day_count })
    }
}

/// Validated request, ready for the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionsRequest {
    pub name: String,
    pub day_count: f64,
}

/// `resultCode` discriminator: 0 on success, 1 on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success = 0,
    Failure = 1,
}

impl Serialize for ResultCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// JSON body written for every response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success {
        points: u64,
        #[serde(rename = "resultCode")]
        result_code: ResultCode,
    },
    Failure {
        message: String,
        #[serde(rename = "resultCode")]
        result_code: ResultCode,
    },
}

/// Outcome of a request, serialized through a single path.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success { points: u64 },
    Failure { status: StatusCode, message: String },
}

impl ApiResponse {
    pub fn success(points: u64) -> Self {
        ApiResponse::Success { points }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        ApiResponse::Failure {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Success { .. } => StatusCode::OK,
            ApiResponse::Failure { status, .. } => *status,
        }
    }

    pub fn body(&self) -> ResponseBody {
        match self {
            ApiResponse::Success { points } => ResponseBody::Success {
                points: *points,
                result_code: ResultCode::Success,
            },
            ApiResponse::Failure { message, .. } => ResponseBody::Failure {
                message: message.clone(),
                result_code: ResultCode::Failure,
            },
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
