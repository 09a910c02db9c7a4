use crate::map::{MapCamera, MapSurface, MarkerIcon, MarkerId, MarkerSpec};

/// In-memory map surface for tests and headless runs. Records every camera
/// move and keeps the live marker set keyed by handle, so tests can assert
/// the teardown-then-rebuild discipline actually holds.
#[derive(Clone, Debug, Default)]
pub struct MockMapSurface {
    next_id: u64,
    pub live: Vec<(MarkerId, MarkerSpec)>,
    pub cameras: Vec<MapCamera>,
    pub removed: u64,
}

impl MockMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_titles(&self) -> Vec<&str> {
        self.live.iter().map(|(_, spec)| spec.title.as_str()).collect()
    }

    pub fn live_with_icon(&self, icon: MarkerIcon) -> Vec<&MarkerSpec> {
        self.live
            .iter()
            .filter(|(_, spec)| spec.icon == icon)
            .map(|(_, spec)| spec)
            .collect()
    }

    pub fn last_camera(&self) -> Option<&MapCamera> {
        self.cameras.last()
    }
}

impl MapSurface for MockMapSurface {
    fn recenter(&mut self, camera: MapCamera) {
        self.cameras.push(camera);
    }

    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerId {
        self.next_id += 1;
        let id = MarkerId(self.next_id);
        self.live.push((id, spec));
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.removed += 1;
        self.live.retain(|(live_id, _)| *live_id != id);
    }
}
