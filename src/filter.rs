//! Station filter engine.
//!
//! A [`FilterCriteria`] is the conjunction of zero or more active
//! constraints; a constraint that is `None` imposes nothing. Filtering is
//! stable (source order preserved) and never mutates the source set. An
//! empty result is a valid outcome, not an error.

use serde::{Deserialize, Serialize};

use crate::models::{Availability, ChargerType, Pricing, Station};

/// Current state of the search box and the three filter selects. Rebuilt
/// from control state on every interaction; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub charger_type: Option<ChargerType>,
    pub availability: Option<Availability>,
    pub pricing: Option<Pricing>,
}

impl FilterCriteria {
    /// Set the free-text query. Empty or whitespace-only input clears the
    /// constraint, so an empty search box is equivalent to no query.
    pub fn set_query(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.query = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query.is_none()
            && self.charger_type.is_none()
            && self.availability.is_none()
            && self.pricing.is_none()
    }

    /// AND over the active constraints only.
    pub fn matches(&self, station: &Station) -> bool {
        if let Some(query) = &self.query {
            let hit = station.name.to_lowercase().contains(query)
                || station.address.to_lowercase().contains(query);
            if !hit {
                return false;
            }
        }
        if let Some(charger_type) = self.charger_type {
            if station.charger_type != charger_type {
                return false;
            }
        }
        if let Some(availability) = self.availability {
            if station.availability != availability {
                return false;
            }
        }
        if let Some(pricing) = self.pricing {
            if station.pricing != pricing {
                return false;
            }
        }
        true
    }
}

/// Produce the ordered subsequence of `stations` satisfying `criteria`.
pub fn apply(stations: &[Station], criteria: &FilterCriteria) -> Vec<Station> {
    let filtered: Vec<Station> = stations
        .iter()
        .filter(|s| criteria.matches(s))
        .cloned()
        .collect();
    log::debug!(
        "filter: {} of {} stations match {:?}",
        filtered.len(),
        stations.len(),
        criteria
    );
    filtered
}
