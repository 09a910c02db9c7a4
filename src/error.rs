use thiserror::Error;

use crate::models::StationId;

/// Error type for decoding the legacy string-encoded station feed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("malformed {field} value: '{value}'")]
    Malformed { field: &'static str, value: String },

    #[error("duplicate station id: {0}")]
    DuplicateId(StationId),
}

impl FeedError {
    pub fn malformed(field: &'static str, value: &str) -> Self {
        FeedError::Malformed {
            field,
            value: value.to_string(),
        }
    }
}

/// Validation errors for the partner ROI calculator inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoiError {
    #[error("no location type selected")]
    MissingLocation,

    #[error("station count must be a positive number")]
    InvalidStationCount,

    #[error("utilization must be a percentage between 1 and 100")]
    InvalidUtilization,
}

/// Platform capability failures for the one-shot location request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("geolocation is not supported on this platform")]
    Unsupported,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,
}

/// Errors for per-station directory actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("unknown station id: {0}")]
    UnknownStation(StationId),
}
