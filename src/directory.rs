//! Directory controller: the paired list+map presentation of the filtered
//! station set.
//!
//! All interaction state lives in one [`DirectoryState`] value owned by the
//! shell's main handler - the base station list, the current criteria, the
//! live marker handles, and the locate-in-flight flag. Collaborators are
//! passed in per call, never stored.
//!
//! The synchronization rule: the list the shell renders and the markers on
//! the map always come from the same filtered sequence. [`DirectoryState::refresh`]
//! computes that sequence once, rebuilds the markers from it (tearing down
//! every previously created station marker first, so repeated filtering can
//! never accumulate stale ones), and hands the same sequence back for list
//! rendering.

use crate::error::{DirectoryError, LocateError};
use crate::filter::{self, FilterCriteria};
use crate::location::LocationService;
use crate::map::{
    placeholder_coordinates, MapCamera, MapSurface, MarkerIcon, MarkerId, MarkerSpec, LOCATED_ZOOM,
};
use crate::models::{Availability, ChargerType, Coordinates, Pricing, Station, StationId};
use crate::notify::{Notifier, Severity};
use crate::render::render_marker_info;
use crate::seed;

const MSG_STATION_BUSY: &str = "This station is currently busy. Please try another station.";
const MSG_LOCATION_FOUND: &str = "Location found! Showing nearby stations.";
const MSG_LOCATION_FAILED: &str = "Unable to get your location. Please enter an address manually.";

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";

pub struct DirectoryState {
    stations: Vec<Station>,
    criteria: FilterCriteria,
    station_markers: Vec<MarkerId>,
    user_marker: Option<MarkerId>,
    locate_pending: bool,
}

impl DirectoryState {
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations,
            criteria: FilterCriteria::default(),
            station_markers: Vec::new(),
            user_marker: None,
            locate_pending: false,
        }
    }

    /// Directory seeded with the built-in sample feed.
    pub fn from_sample_feed() -> Result<Self, crate::error::FeedError> {
        Ok(Self::new(seed::sample_stations()?))
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_query(&mut self, raw: &str) {
        self.criteria.set_query(raw);
    }

    pub fn set_charger_type(&mut self, charger_type: Option<ChargerType>) {
        self.criteria.charger_type = charger_type;
    }

    pub fn set_availability(&mut self, availability: Option<Availability>) {
        self.criteria.availability = availability;
    }

    pub fn set_pricing(&mut self, pricing: Option<Pricing>) {
        self.criteria.pricing = pricing;
    }

    /// The current filtered view, without touching the map.
    pub fn filtered(&self) -> Vec<Station> {
        filter::apply(&self.stations, &self.criteria)
    }

    /// Recompute the filtered sequence and bring the map in sync with it.
    ///
    /// Returns the same sequence the markers were built from; rendering the
    /// returned list keeps both presentations on one view of the data. An
    /// empty result is returned as an empty list - the renderer owes it a
    /// distinct "no results" state.
    pub fn refresh(&mut self, map: &mut dyn MapSurface) -> Vec<Station> {
        let filtered = self.filtered();

        for id in self.station_markers.drain(..) {
            map.remove_marker(id);
        }
        for station in &filtered {
            let id = map.add_marker(MarkerSpec {
                position: placeholder_coordinates(station.id),
                title: station.name.clone(),
                info_html: Some(render_marker_info(station)),
                icon: MarkerIcon::Station,
            });
            self.station_markers.push(id);
        }

        filtered
    }

    fn station(&self, id: StationId) -> Result<&Station, DirectoryError> {
        self.stations
            .iter()
            .find(|s| s.id == id)
            .ok_or(DirectoryError::UnknownStation(id))
    }

    /// External directions URL for a station. Opening it is the shell's job.
    pub fn directions_url(&self, id: StationId) -> Result<String, DirectoryError> {
        let station = self.station(id)?;
        Ok(format!(
            "{DIRECTIONS_BASE}{}",
            encode_component(&station.address)
        ))
    }

    /// Simulated reservation request. Returns whether a request was sent;
    /// no booking state is created either way.
    pub fn reserve(
        &self,
        id: StationId,
        notifier: &mut dyn Notifier,
    ) -> Result<bool, DirectoryError> {
        let station = self.station(id)?;
        match station.availability {
            Availability::Busy => {
                log::debug!("reserve rejected, station {id} is busy");
                notifier.notify(Severity::Error, MSG_STATION_BUSY);
                Ok(false)
            }
            Availability::Available => {
                notifier.notify(
                    Severity::Success,
                    &format!("Reservation request sent for {}", station.name),
                );
                Ok(true)
            }
        }
    }

    /// Start a location request. Returns `false` (and does nothing) when a
    /// request is already in flight; repeats are de-duplicated, not queued.
    pub fn begin_locate(&mut self) -> bool {
        if self.locate_pending {
            log::debug!("locate request ignored, one already in flight");
            return false;
        }
        self.locate_pending = true;
        true
    }

    /// Continuation for the location request.
    ///
    /// On success: recenter on the fix, replace the "you are here" marker,
    /// permanently re-sort the base list nearest-first, re-apply the current
    /// criteria, and return the new view. On failure: report it and leave
    /// ordering, list, and markers exactly as they were.
    pub fn complete_locate(
        &mut self,
        outcome: Result<Coordinates, LocateError>,
        map: &mut dyn MapSurface,
        notifier: &mut dyn Notifier,
    ) -> Option<Vec<Station>> {
        self.locate_pending = false;

        let position = match outcome {
            Ok(position) => position,
            Err(err) => {
                log::warn!("locate failed: {err}");
                notifier.notify(Severity::Error, MSG_LOCATION_FAILED);
                return None;
            }
        };

        log::info!("locate fix at ({}, {})", position.lat, position.lng);
        notifier.notify(Severity::Success, MSG_LOCATION_FOUND);

        map.recenter(MapCamera {
            center: position,
            zoom: LOCATED_ZOOM,
        });
        if let Some(old) = self.user_marker.take() {
            map.remove_marker(old);
        }
        self.user_marker = Some(map.add_marker(MarkerSpec {
            position,
            title: "You are here".to_string(),
            info_html: None,
            icon: MarkerIcon::CurrentLocation,
        }));

        // Nearest-first, by magnitude; the base order stays this way for
        // the rest of the session.
        self.stations
            .sort_by(|a, b| a.distance.magnitude.total_cmp(&b.distance.magnitude));

        Some(self.refresh(map))
    }

    /// One-shot locate: de-duplicated begin, platform request, continuation.
    pub fn locate(
        &mut self,
        service: &mut dyn LocationService,
        map: &mut dyn MapSurface,
        notifier: &mut dyn Notifier,
    ) -> Option<Vec<Station>> {
        if !self.begin_locate() {
            return None;
        }
        let outcome = service.request_position();
        self.complete_locate(outcome, map, notifier)
    }
}

/// Percent-encode a URL component with `encodeURIComponent` semantics.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_mock::MockMapSurface;
    use crate::location::MockLocationService;
    use crate::notify::MockNotifier;

    fn directory() -> DirectoryState {
        DirectoryState::from_sample_feed().unwrap()
    }

    fn station_marker_titles(map: &MockMapSurface) -> Vec<&str> {
        map.live_with_icon(MarkerIcon::Station)
            .iter()
            .map(|spec| spec.title.as_str())
            .collect()
    }

    #[test]
    fn test_refresh_syncs_list_and_markers() {
        let mut dir = directory();
        let mut map = MockMapSurface::new();

        let view = dir.refresh(&mut map);
        assert_eq!(view.len(), 5);
        assert_eq!(map.live_count(), 5);

        let list_names: Vec<&str> = view.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(station_marker_titles(&map), list_names);
    }

    #[test]
    fn test_repeated_refresh_never_leaks_markers() {
        let mut dir = directory();
        let mut map = MockMapSurface::new();

        dir.refresh(&mut map);
        dir.set_charger_type(Some(ChargerType::DcFast));
        let view = dir.refresh(&mut map);
        assert_eq!(map.live_count(), view.len());

        dir.set_availability(Some(Availability::Busy));
        let view = dir.refresh(&mut map);
        assert_eq!(view.len(), 1);
        assert_eq!(map.live_count(), 1);

        dir.set_query("no such place");
        let view = dir.refresh(&mut map);
        assert!(view.is_empty());
        assert_eq!(map.live_count(), 0);
    }

    #[test]
    fn test_marker_info_carries_name_and_address() {
        let mut dir = directory();
        let mut map = MockMapSurface::new();
        dir.set_query("master canteen");
        dir.refresh(&mut map);

        let specs = map.live_with_icon(MarkerIcon::Station);
        assert_eq!(specs.len(), 1);
        let info = specs[0].info_html.as_deref().unwrap();
        assert!(info.contains("<strong>Master Canteen Charging Hub</strong>"));
        assert!(info.contains("Bhubaneswar"));
    }

    #[test]
    fn test_directions_url_encodes_address() {
        let dir = directory();
        let url = dir.directions_url(StationId(1)).unwrap();
        assert!(url.starts_with("https://www.google.com/maps/dir/?api=1&destination="));
        assert!(url.contains("Master%20Canteen%2C%20Bhubaneswar"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_directions_unknown_station() {
        let dir = directory();
        assert_eq!(
            dir.directions_url(StationId(99)).unwrap_err(),
            DirectoryError::UnknownStation(StationId(99))
        );
    }

    #[test]
    fn test_reserve_available_station() {
        let dir = directory();
        let mut notifier = MockNotifier::new();

        let sent = dir.reserve(StationId(1), &mut notifier).unwrap();
        assert!(sent);
        let (severity, message) = notifier.last().unwrap();
        assert_eq!(*severity, Severity::Success);
        assert_eq!(
            message,
            "Reservation request sent for Master Canteen Charging Hub"
        );
    }

    #[test]
    fn test_reserve_busy_station_changes_nothing() {
        let dir = directory();
        let mut notifier = MockNotifier::new();

        let sent = dir.reserve(StationId(2), &mut notifier).unwrap();
        assert!(!sent);
        let (severity, message) = notifier.last().unwrap();
        assert_eq!(*severity, Severity::Error);
        assert_eq!(message, MSG_STATION_BUSY);
        // availability is static for the session
        assert_eq!(
            dir.station(StationId(2)).unwrap().availability,
            Availability::Busy
        );
    }

    #[test]
    fn test_locate_success_sorts_and_reapplies_filter() {
        let mut dir = directory();
        let mut map = MockMapSurface::new();
        let mut notifier = MockNotifier::new();
        let here = Coordinates {
            lat: 20.35,
            lng: 85.81,
        };
        let mut svc = MockLocationService::succeeding(here);

        dir.set_charger_type(Some(ChargerType::DcFast));
        dir.refresh(&mut map);

        let view = dir.locate(&mut svc, &mut map, &mut notifier).unwrap();

        // nearest-first among dcfast stations: 0.2, 1.2, 12.5 miles
        let ids: Vec<u32> = view.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        // base order re-sorted across the whole set
        let base_ids: Vec<u32> = dir.stations().iter().map(|s| s.id.0).collect();
        assert_eq!(base_ids, vec![1, 2, 4, 3, 5]);

        assert_eq!(map.last_camera().unwrap().zoom, LOCATED_ZOOM);
        assert_eq!(map.last_camera().unwrap().center, here);
        assert_eq!(
            map.live_with_icon(MarkerIcon::CurrentLocation).len(),
            1
        );
        assert_eq!(map.live_with_icon(MarkerIcon::Station).len(), 3);
        assert_eq!(notifier.last().unwrap().0, Severity::Success);
    }

    #[test]
    fn test_locate_failure_leaves_state_untouched() {
        let mut dir = directory();
        let mut map = MockMapSurface::new();
        let mut notifier = MockNotifier::new();
        let mut svc = MockLocationService::failing(LocateError::PermissionDenied);

        let before_view = dir.refresh(&mut map);
        let before_count = map.live_count();
        let before_order: Vec<u32> = dir.stations().iter().map(|s| s.id.0).collect();

        assert!(dir.locate(&mut svc, &mut map, &mut notifier).is_none());

        assert_eq!(dir.filtered(), before_view);
        assert_eq!(map.live_count(), before_count);
        let after_order: Vec<u32> = dir.stations().iter().map(|s| s.id.0).collect();
        assert_eq!(after_order, before_order);
        assert!(map.cameras.is_empty());

        let (severity, message) = notifier.last().unwrap();
        assert_eq!(*severity, Severity::Error);
        assert_eq!(message, MSG_LOCATION_FAILED);
    }

    #[test]
    fn test_duplicate_locate_requests_deduplicated() {
        let mut dir = directory();

        assert!(dir.begin_locate());
        assert!(!dir.begin_locate());

        let mut map = MockMapSurface::new();
        let mut notifier = MockNotifier::new();
        dir.complete_locate(
            Err(LocateError::Timeout),
            &mut map,
            &mut notifier,
        );
        // resolved; a new request may start
        assert!(dir.begin_locate());
    }

    #[test]
    fn test_user_marker_survives_refresh_and_stays_single() {
        let mut dir = directory();
        let mut map = MockMapSurface::new();
        let mut notifier = MockNotifier::new();
        let here = Coordinates {
            lat: 20.35,
            lng: 85.81,
        };
        let mut svc = MockLocationService::succeeding(here);

        dir.locate(&mut svc, &mut map, &mut notifier);
        dir.set_pricing(Some(Pricing::Free));
        let view = dir.refresh(&mut map);

        assert_eq!(map.live_with_icon(MarkerIcon::CurrentLocation).len(), 1);
        assert_eq!(map.live_with_icon(MarkerIcon::Station).len(), view.len());

        // a second fix replaces, not stacks, the user marker
        dir.locate(&mut svc, &mut map, &mut notifier);
        assert_eq!(map.live_with_icon(MarkerIcon::CurrentLocation).len(), 1);
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("abc-123_~"), "abc-123_~");
        assert_eq!(
            encode_component("Master Canteen, Odisha 751001"),
            "Master%20Canteen%2C%20Odisha%20751001"
        );
        assert_eq!(encode_component("a/b&c=d"), "a%2Fb%26c%3Dd");
    }
}
