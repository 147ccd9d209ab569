use axum::http::StatusCode;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

// Startup-time failure while resolving the schedule from the environment.
#[derive(Debug)]
pub enum ConfigError {
    InvalidDate {
        var: &'static str,
        value: String,
        source: chrono::ParseError,
    },
    InvertedRange {
        start: NaiveDate,
        target: NaiveDate,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { var, value, .. } => {
                write!(f, "{var} is not an ISO date (YYYY-MM-DD): {value:?}")
            }
            Self::InvertedRange { start, target } => {
                write!(f, "start date {start} is after target date {target}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            Self::InvertedRange { .. } => None,
        }
    }
}
