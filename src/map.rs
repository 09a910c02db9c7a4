//! Map widget contract.
//!
//! The core never talks to a concrete map provider; it drives whatever the
//! shell binds through [`MapSurface`]: recenter the view, create point
//! markers, and release them by handle. Marker info popups are plain HTML
//! fragments produced by [`crate::render`].

use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, StationId};

/// Default map center (Bhubaneswar) and zoom for the directory page.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 20.2961,
    lng: 85.8245,
};
pub const DEFAULT_ZOOM: u8 = 12;

/// Zoom applied after a successful location fix.
pub const LOCATED_ZOOM: u8 = 14;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapCamera {
    pub center: Coordinates,
    pub zoom: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerIcon {
    /// Standard station pin.
    Station,
    /// Distinguishable "you are here" dot.
    CurrentLocation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub position: Coordinates,
    pub title: String,
    /// HTML fragment shown when the marker's info popup opens.
    pub info_html: Option<String>,
    pub icon: MarkerIcon,
}

/// Handle for a live marker, issued by the surface and used to release it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

pub trait MapSurface {
    fn recenter(&mut self, camera: MapCamera);
    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerId;
    fn remove_marker(&mut self, id: MarkerId);
}

/// Deterministic placeholder position derived from the station id.
///
/// TODO: replace with a real geocoding collaborator once one exists; this
/// only spreads the sample stations across the default viewport.
pub fn placeholder_coordinates(id: StationId) -> Coordinates {
    Coordinates {
        lat: DEFAULT_CENTER.lat + f64::from(id.0) * 0.01,
        lng: DEFAULT_CENTER.lng + f64::from(id.0) * 0.01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_coordinates_deterministic() {
        let a = placeholder_coordinates(StationId(3));
        let b = placeholder_coordinates(StationId(3));
        assert_eq!(a, b);
        assert!((a.lat - 20.3261).abs() < 1e-9);
        assert!((a.lng - 85.8545).abs() < 1e-9);
    }

    #[test]
    fn test_placeholder_coordinates_distinct_per_id() {
        let a = placeholder_coordinates(StationId(1));
        let b = placeholder_coordinates(StationId(2));
        assert_ne!(a, b);
    }
}
