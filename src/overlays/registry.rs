use crate::{
    core::{config::HitTestConfig, geo::LatLng, geo::Point, projection::Projection},
    overlays::{
        base::{OverlayHandle, OverlayTrait, OverlayType, Removable},
        hit_test,
        marker::Marker,
        options::{MarkerOptions, PolylineOptions},
        polyline::Polyline,
    },
    prelude::HashMap,
    spatial::index::SpatialIndex,
    Result,
};

/// Owns every overlay on a map, in insertion order.
///
/// Overlays are addressed by [`OverlayHandle`]. Handles are never reused, so
/// operations on a removed overlay's handle are silent no-ops. Marker
/// positions are mirrored in a [`SpatialIndex`] used by hit-testing; the
/// mutation helpers here keep it in sync.
pub struct OverlayRegistry {
    /// All overlays indexed by handle id
    overlays: HashMap<u64, Box<dyn OverlayTrait>>,
    /// Handle ids in insertion order
    order: Vec<u64>,
    index: SpatialIndex,
    next_id: u64,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self {
            overlays: HashMap::default(),
            order: Vec::new(),
            index: SpatialIndex::new(),
            next_id: 1,
        }
    }

    fn next_handle(&mut self, kind: OverlayType) -> OverlayHandle {
        let handle = OverlayHandle::new(self.next_id, kind);
        self.next_id += 1;
        handle
    }

    fn insert(&mut self, overlay: Box<dyn OverlayTrait>) -> OverlayHandle {
        let handle = overlay.handle();
        self.overlays.insert(handle.id(), overlay);
        self.order.push(handle.id());
        log::debug!("added {}", handle);
        handle
    }

    /// Adds a marker built from a copy of `options`
    pub fn add_marker(&mut self, options: &MarkerOptions) -> OverlayHandle {
        let handle = self.next_handle(OverlayType::Marker);
        let marker = Marker::from_options(handle, options);
        self.index.insert(handle.id(), marker.position().to_world());
        self.insert(Box::new(marker))
    }

    /// Adds a polyline built from a copy of `options`
    pub fn add_polyline(&mut self, options: &PolylineOptions) -> OverlayHandle {
        let handle = self.next_handle(OverlayType::Polyline);
        self.insert(Box::new(Polyline::from_options(handle, options)))
    }

    /// Removes an overlay. Returns `false` if it was already gone.
    pub fn remove(&mut self, overlay: impl Removable) -> bool {
        let handle = overlay.overlay_handle();
        if !self.contains(handle) {
            return false;
        }
        self.overlays.remove(&handle.id());
        self.order.retain(|id| *id != handle.id());
        self.index.remove(handle.id());
        log::debug!("removed {}", handle);
        true
    }

    /// Removes every overlay. Existing handles become stale.
    pub fn clear(&mut self) {
        let count = self.overlays.len();
        self.overlays.clear();
        self.order.clear();
        self.index.clear();
        log::debug!("cleared {} overlay(s)", count);
    }

    /// Whether `handle` refers to a live overlay of its kind
    pub fn contains(&self, handle: OverlayHandle) -> bool {
        self.overlays
            .get(&handle.id())
            .map_or(false, |overlay| overlay.overlay_type() == handle.kind())
    }

    pub fn get(&self, handle: OverlayHandle) -> Option<&dyn OverlayTrait> {
        self.overlays
            .get(&handle.id())
            .filter(|overlay| overlay.overlay_type() == handle.kind())
            .map(|overlay| overlay.as_ref())
    }

    pub fn marker(&self, handle: OverlayHandle) -> Option<&Marker> {
        self.get(handle)?.as_any().downcast_ref::<Marker>()
    }

    pub fn polyline(&self, handle: OverlayHandle) -> Option<&Polyline> {
        self.get(handle)?.as_any().downcast_ref::<Polyline>()
    }

    pub(crate) fn marker_by_id(&self, id: u64) -> Option<&Marker> {
        self.overlays.get(&id)?.as_any().downcast_ref::<Marker>()
    }

    /// Applies `f` to a marker, then re-indexes its position
    pub fn with_marker_mut<F, R>(&mut self, handle: OverlayHandle, f: F) -> Option<R>
    where
        F: FnOnce(&mut Marker) -> R,
    {
        if !handle.is_marker() {
            return None;
        }
        let marker = self
            .overlays
            .get_mut(&handle.id())?
            .as_any_mut()
            .downcast_mut::<Marker>()?;
        let result = f(marker);
        let position = marker.position().to_world();
        self.index.insert(handle.id(), position);
        Some(result)
    }

    /// Applies `f` to a polyline
    pub fn with_polyline_mut<F, R>(&mut self, handle: OverlayHandle, f: F) -> Option<R>
    where
        F: FnOnce(&mut Polyline) -> R,
    {
        if !handle.is_polyline() {
            return None;
        }
        let polyline = self
            .overlays
            .get_mut(&handle.id())?
            .as_any_mut()
            .downcast_mut::<Polyline>()?;
        Some(f(polyline))
    }

    /// Moves a marker. Returns `false` for stale or non-marker handles.
    pub fn set_marker_position(&mut self, handle: OverlayHandle, position: LatLng) -> bool {
        self.with_marker_mut(handle, |marker| marker.set_position(position))
            .is_some()
    }

    /// Replaces an overlay's state from the JSON form of its options.
    /// Returns `Ok(false)` for stale handles.
    pub fn set_options(&mut self, handle: OverlayHandle, options: serde_json::Value) -> Result<bool> {
        match handle.kind() {
            OverlayType::Marker => self
                .with_marker_mut(handle, |marker| marker.set_options(options))
                .transpose()
                .map(|applied| applied.is_some()),
            OverlayType::Polyline => self
                .with_polyline_mut(handle, |polyline| polyline.set_options(options))
                .transpose()
                .map(|applied| applied.is_some()),
        }
    }

    /// All overlays in insertion order
    pub fn overlays(&self) -> Vec<&dyn OverlayTrait> {
        self.order
            .iter()
            .filter_map(|id| self.overlays.get(id).map(|overlay| overlay.as_ref()))
            .collect()
    }

    /// Markers in insertion order
    pub fn markers(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.marker_by_id(*id))
    }

    /// Polylines in insertion order
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> + '_ {
        self.order.iter().filter_map(move |id| {
            self.overlays
                .get(id)?
                .as_any()
                .downcast_ref::<Polyline>()
        })
    }

    pub(crate) fn spatial_index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Finds the overlay under a screen point. See [`hit_test::hit_test`].
    pub fn hit_test(
        &self,
        projection: &Projection,
        point: Point,
        config: &HitTestConfig,
    ) -> Option<OverlayHandle> {
        hit_test::hit_test(self, projection, point, config)
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::new()
    }
}
