//! One-shot platform location service.
//!
//! This mirrors the browser's `getCurrentPosition`: a single request that
//! resolves to either a coordinate pair or a capability error. There is no
//! continuous tracking subscription and no cancellation path.

use crate::error::LocateError;
use crate::models::Coordinates;

pub trait LocationService {
    fn request_position(&mut self) -> Result<Coordinates, LocateError>;
}

/// Location service with a fixed outcome, for tests.
#[derive(Clone, Debug)]
pub struct MockLocationService {
    pub outcome: Result<Coordinates, LocateError>,
    pub requests: u32,
}

impl MockLocationService {
    pub fn succeeding(position: Coordinates) -> Self {
        Self {
            outcome: Ok(position),
            requests: 0,
        }
    }

    pub fn failing(error: LocateError) -> Self {
        Self {
            outcome: Err(error),
            requests: 0,
        }
    }
}

impl LocationService for MockLocationService {
    fn request_position(&mut self) -> Result<Coordinates, LocateError> {
        self.requests += 1;
        self.outcome.clone()
    }
}
