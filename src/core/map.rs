use crate::{
    animation::scheduler::{
        AnimationJob, AnimationScheduler, AnimationSpec, CameraField, CameraUpdate,
    },
    core::{
        builder::MapViewBuilder,
        camera::Camera,
        config::MapConfig,
        delegate::{InfoWindow, Location, MapViewDelegate},
        geo::{LatLng, Point},
        projection::Projection,
        viewport::Viewport,
    },
    input::events::{EventHandled, InputEvent},
    overlays::{
        base::OverlayHandle,
        options::{MarkerOptions, PolylineOptions},
        registry::OverlayRegistry,
    },
    traits::Configurable,
    Result,
};
use instant::Instant;
use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

/// Base map style, stored for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapType {
    #[default]
    Normal,
    Satellite,
    Terrain,
    Hybrid,
}

/// An interactive map: camera, animations, overlays and input handling.
///
/// The map view is driven from outside. The embedder forwards recognized
/// gestures and display-refresh ticks through [`MapView::handle_input`] (or
/// [`MapView::tick`]) and learns about changes through a
/// [`MapViewDelegate`].
pub struct MapView {
    camera: Camera,
    viewport: Viewport,
    config: MapConfig,
    /// Snapshot for the current camera and viewport, `None` while the
    /// viewport has no area
    projection: Option<Projection>,
    scheduler: AnimationScheduler,
    overlays: OverlayRegistry,
    delegate: Option<Weak<RefCell<dyn MapViewDelegate>>>,
    selected_marker: Option<OverlayHandle>,
    info_window: Option<InfoWindow>,
    my_location_enabled: bool,
    my_location: Option<Location>,
    map_type: MapType,
    traffic_enabled: bool,
    rendering: bool,
}

impl MapView {
    /// Creates a map view with the default configuration
    pub fn new(viewport: Viewport, camera: Camera) -> Self {
        Self::from_parts(viewport, camera, MapConfig::default())
    }

    /// Creates a map view after validating `config`
    pub fn with_config(viewport: Viewport, camera: Camera, config: MapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(viewport, camera, config))
    }

    pub fn builder() -> MapViewBuilder {
        MapViewBuilder::new()
    }

    fn from_parts(viewport: Viewport, camera: Camera, config: MapConfig) -> Self {
        let mut map = Self {
            camera: camera.clamped_within(config.min_zoom, config.max_zoom),
            viewport,
            rendering: config.start_rendering,
            config,
            projection: None,
            scheduler: AnimationScheduler::new(),
            overlays: OverlayRegistry::new(),
            delegate: None,
            selected_marker: None,
            info_window: None,
            my_location_enabled: false,
            my_location: None,
            map_type: MapType::default(),
            traffic_enabled: false,
        };
        map.refresh_projection();
        map
    }

    // --- delegate ------------------------------------------------------------------------------

    /// Installs `delegate`. Only a weak reference is kept.
    pub fn set_delegate<D: MapViewDelegate + 'static>(&mut self, delegate: &Rc<RefCell<D>>) {
        let weak = Rc::downgrade(delegate);
        let weak: Weak<RefCell<dyn MapViewDelegate>> = weak;
        self.delegate = Some(weak);
    }

    pub(crate) fn set_delegate_weak(&mut self, delegate: Option<Weak<RefCell<dyn MapViewDelegate>>>) {
        self.delegate = delegate;
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// The delegate, if one is installed and still alive
    pub fn delegate(&self) -> Option<Rc<RefCell<dyn MapViewDelegate>>> {
        self.delegate.as_ref()?.upgrade()
    }

    fn notify<R>(&self, f: impl FnOnce(&mut dyn MapViewDelegate, &MapView) -> R) -> Option<R> {
        let delegate = self.delegate()?;
        let mut guard = match delegate.try_borrow_mut() {
            Ok(guard) => guard,
            Err(_) => {
                log::warn!("delegate is already borrowed; dropping notification");
                return None;
            }
        };
        Some(f(&mut *guard, self))
    }

    fn notify_camera_changed(&self) {
        let camera = self.camera;
        self.notify(|delegate, map| delegate.did_change_camera_position(map, &camera));
    }

    // --- camera --------------------------------------------------------------------------------

    /// The last committed camera, including intermediate animation frames
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Moves the camera immediately. Running animations are cancelled without
    /// notification; the delegate hears about the new camera once.
    pub fn set_camera(&mut self, camera: Camera) {
        self.scheduler.cancel_all();
        self.commit_camera(camera);
        log::debug!(
            "camera set to ({:.6}, {:.6}) zoom {:.2} bearing {:.1} tilt {:.1}",
            self.camera.target.lat,
            self.camera.target.lng,
            self.camera.zoom,
            self.camera.bearing,
            self.camera.tilt
        );
        self.notify_camera_changed();
    }

    fn clamp_camera(&self, camera: &Camera) -> Camera {
        camera.clamped_within(self.config.min_zoom, self.config.max_zoom)
    }

    fn commit_camera(&mut self, camera: Camera) {
        self.camera = self.clamp_camera(&camera);
        self.refresh_projection();
    }

    pub fn animate_to_location(&mut self, target: LatLng) {
        self.animate(CameraUpdate::Location(target), None);
    }

    pub fn animate_to_zoom(&mut self, zoom: f64) {
        self.animate(CameraUpdate::Zoom(zoom), None);
    }

    pub fn animate_to_bearing(&mut self, bearing: f64) {
        self.animate(CameraUpdate::Bearing(bearing), None);
    }

    pub fn animate_to_viewing_angle(&mut self, tilt: f64) {
        self.animate(CameraUpdate::ViewingAngle(tilt), None);
    }

    /// Animates every camera field, each with its configured timing
    pub fn animate_to_camera(&mut self, camera: Camera) {
        self.animate(CameraUpdate::Camera(camera), None);
    }

    /// Animates the fields `update` touches with an explicit duration and
    /// easing
    pub fn animate_with(&mut self, update: CameraUpdate, spec: AnimationSpec) {
        self.animate(update, Some(spec));
    }

    fn animate(&mut self, update: CameraUpdate, spec: Option<AnimationSpec>) {
        // Tilt targets are clamped against the zoom a running zoom job ends at
        let mut destination = self.camera;
        if let Some(job) = self.scheduler.job(CameraField::Zoom) {
            destination.zoom = job.to().zoom;
        }
        let target = self.clamp_camera(&update.apply_to(&destination));
        for &field in update.fields() {
            let spec = spec.unwrap_or_else(|| AnimationSpec::for_field(field, &self.config.animation));
            self.scheduler
                .schedule(AnimationJob::new(field, self.camera, target, spec));
        }
    }

    /// Cancels running animations, leaving the camera where it is. No
    /// notification is sent.
    pub fn stop_animation(&mut self) {
        self.scheduler.cancel_all();
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    /// Advances animations to `now`. Returns whether more frames are needed.
    ///
    /// Ignored while rendering is stopped.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.rendering {
            return false;
        }
        let Some(result) = self.scheduler.tick(now, &self.camera) else {
            return false;
        };

        self.commit_camera(result.camera);
        if result.finished {
            log::debug!("camera animation finished at zoom {:.2}", self.camera.zoom);
            self.notify_camera_changed();
        }
        self.scheduler.is_animating()
    }

    // --- viewport and projection ---------------------------------------------------------------

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.refresh_projection();
    }

    fn refresh_projection(&mut self) {
        self.projection = Projection::new(self.camera, self.viewport).ok();
    }

    /// Projection for the current camera and viewport
    pub fn projection(&self) -> Result<Projection> {
        match &self.projection {
            Some(projection) => Ok(projection.clone()),
            None => Projection::new(self.camera, self.viewport),
        }
    }

    // --- input ---------------------------------------------------------------------------------

    pub fn handle_input(&mut self, event: InputEvent) -> EventHandled {
        match event {
            InputEvent::Tap { position } => self.handle_tap(position),
            InputEvent::LongPress { position } => self.handle_long_press(position),
            InputEvent::InfoWindowTap => self.handle_info_window_tap(),
            InputEvent::Resize { width, height } => {
                self.set_viewport(Viewport::new(width, height));
                EventHandled::Handled
            }
            InputEvent::Frame { timestamp } => {
                self.tick(timestamp);
                EventHandled::from_bool(self.rendering)
            }
        }
    }

    fn handle_tap(&mut self, position: Point) -> EventHandled {
        let Some(projection) = self.projection.clone() else {
            log::trace!("ignoring tap without a valid projection");
            return EventHandled::NotHandled;
        };

        match self.overlays.hit_test(&projection, position, &self.config.hit_test) {
            Some(handle) if handle.is_marker() => {
                let consumed = self
                    .notify(|delegate, map| delegate.did_tap_marker(map, handle))
                    .unwrap_or(false);
                if !consumed {
                    self.select_marker(Some(handle));
                }
            }
            Some(handle) => {
                self.notify(|delegate, map| delegate.did_tap_polyline(map, handle));
            }
            None => {
                let coordinate = projection.coordinate_for_point(position);
                self.notify(|delegate, map| delegate.did_tap_at_coordinate(map, coordinate));
                self.select_marker(None);
            }
        }
        EventHandled::Handled
    }

    fn handle_long_press(&mut self, position: Point) -> EventHandled {
        let Some(projection) = &self.projection else {
            return EventHandled::NotHandled;
        };
        let coordinate = projection.coordinate_for_point(position);
        self.notify(|delegate, map| delegate.did_long_press_at_coordinate(map, coordinate));
        EventHandled::Handled
    }

    fn handle_info_window_tap(&mut self) -> EventHandled {
        match self.selected_marker() {
            Some(marker) => {
                self.notify(|delegate, map| delegate.did_tap_info_window(map, marker));
                EventHandled::Handled
            }
            None => EventHandled::NotHandled,
        }
    }

    // --- selection -----------------------------------------------------------------------------

    /// The selected marker. Markers removed through the registry are never
    /// reported as selected.
    pub fn selected_marker(&self) -> Option<OverlayHandle> {
        self.selected_marker
            .filter(|handle| self.overlays.marker(*handle).is_some())
    }

    /// Custom info window of the selected marker, if the delegate supplied one
    pub fn info_window(&self) -> Option<&InfoWindow> {
        self.selected_marker().and(self.info_window.as_ref())
    }

    /// Selects a marker. Stale handles and non-marker handles deselect.
    pub fn set_selected_marker(&mut self, marker: Option<OverlayHandle>) {
        let marker = marker.filter(|handle| self.overlays.marker(*handle).is_some());
        self.select_marker(marker);
    }

    fn select_marker(&mut self, marker: Option<OverlayHandle>) {
        if marker == self.selected_marker() {
            return;
        }
        self.info_window = match marker {
            Some(handle) => self
                .notify(|delegate, map| delegate.marker_info_window(map, handle))
                .flatten(),
            None => None,
        };
        self.selected_marker = marker;
        log::trace!("selected marker {:?}", marker);
        self.notify(|delegate, map| delegate.did_change_selected_marker(map, marker));
    }

    // --- overlays ------------------------------------------------------------------------------

    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut OverlayRegistry {
        &mut self.overlays
    }

    pub fn add_marker(&mut self, options: &MarkerOptions) -> OverlayHandle {
        self.overlays.add_marker(options)
    }

    pub fn add_polyline(&mut self, options: &PolylineOptions) -> OverlayHandle {
        self.overlays.add_polyline(options)
    }

    /// Removes an overlay, deselecting it first if it is the selected marker
    pub fn remove_overlay(&mut self, handle: OverlayHandle) -> bool {
        if self.selected_marker() == Some(handle) {
            self.select_marker(None);
        }
        self.overlays.remove(handle)
    }

    /// Removes every overlay and drops the selection
    pub fn clear(&mut self) {
        if self.selected_marker().is_some() {
            self.select_marker(None);
        }
        self.selected_marker = None;
        self.info_window = None;
        self.overlays.clear();
    }

    // --- my location ---------------------------------------------------------------------------

    pub fn is_my_location_enabled(&self) -> bool {
        self.my_location_enabled
    }

    /// Disabling drops the last known location
    pub fn set_my_location_enabled(&mut self, enabled: bool) {
        self.my_location_enabled = enabled;
        if !enabled && self.my_location.take().is_some() {
            self.notify(|delegate, map| delegate.did_change_my_location(map, None));
        }
    }

    /// The last fix from the embedder, `None` while the layer is disabled
    pub fn my_location(&self) -> Option<Location> {
        if self.my_location_enabled {
            self.my_location
        } else {
            None
        }
    }

    /// Feeds a new fix. Ignored while the layer is disabled.
    pub fn update_my_location(&mut self, location: Option<Location>) {
        if !self.my_location_enabled || self.my_location == location {
            return;
        }
        self.my_location = location;
        self.notify(|delegate, map| delegate.did_change_my_location(map, location));
    }

    // --- renderer state ------------------------------------------------------------------------

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn set_map_type(&mut self, map_type: MapType) {
        self.map_type = map_type;
    }

    pub fn is_traffic_enabled(&self) -> bool {
        self.traffic_enabled
    }

    pub fn set_traffic_enabled(&mut self, enabled: bool) {
        self.traffic_enabled = enabled;
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    pub fn start_rendering(&mut self) {
        self.rendering = true;
    }

    pub fn stop_rendering(&mut self) {
        self.rendering = false;
    }

    /// Changes the zoom limits, re-clamping the camera
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> Result<()> {
        self.update_config(|config| {
            config.min_zoom = min_zoom;
            config.max_zoom = max_zoom;
        })
    }
}

impl Configurable for MapView {
    type Config = MapConfig;

    fn config(&self) -> &MapConfig {
        &self.config
    }

    fn set_config(&mut self, config: MapConfig) -> Result<()> {
        Self::validate_config(&config)?;
        self.config = config;

        let clamped = self.clamp_camera(&self.camera);
        if clamped != self.camera {
            self.commit_camera(clamped);
            self.notify_camera_changed();
        }
        Ok(())
    }

    fn validate_config(config: &MapConfig) -> Result<()> {
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{animation::easing::EasingFunction, MapError};
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        cameras: Vec<Camera>,
        taps: Vec<LatLng>,
        long_presses: Vec<LatLng>,
        marker_taps: Vec<OverlayHandle>,
        polyline_taps: Vec<OverlayHandle>,
        info_window_taps: Vec<OverlayHandle>,
        selections: Vec<Option<OverlayHandle>>,
        locations: Vec<Option<Location>>,
        consume_marker_taps: bool,
    }

    impl MapViewDelegate for Recorder {
        fn did_change_camera_position(&mut self, _map: &MapView, camera: &Camera) {
            self.cameras.push(*camera);
        }

        fn did_tap_at_coordinate(&mut self, _map: &MapView, coordinate: LatLng) {
            self.taps.push(coordinate);
        }

        fn did_long_press_at_coordinate(&mut self, _map: &MapView, coordinate: LatLng) {
            self.long_presses.push(coordinate);
        }

        fn did_tap_marker(&mut self, _map: &MapView, marker: OverlayHandle) -> bool {
            self.marker_taps.push(marker);
            self.consume_marker_taps
        }

        fn did_tap_polyline(&mut self, _map: &MapView, polyline: OverlayHandle) {
            self.polyline_taps.push(polyline);
        }

        fn did_tap_info_window(&mut self, _map: &MapView, marker: OverlayHandle) {
            self.info_window_taps.push(marker);
        }

        fn marker_info_window(&mut self, map: &MapView, marker: OverlayHandle) -> Option<InfoWindow> {
            let title = map.overlays().marker(marker)?.to_options().title?;
            Some(InfoWindow::new(200.0, 80.0, title))
        }

        fn did_change_selected_marker(&mut self, _map: &MapView, marker: Option<OverlayHandle>) {
            self.selections.push(marker);
        }

        fn did_change_my_location(&mut self, _map: &MapView, location: Option<Location>) {
            self.locations.push(location);
        }
    }

    fn map_with_recorder() -> (MapView, Rc<RefCell<Recorder>>) {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut map = MapView::new(Viewport::new(800.0, 600.0), Camera::make(0.0, 0.0, 10.0));
        map.set_delegate(&recorder);
        (map, recorder)
    }

    fn linear(ms: u64) -> AnimationSpec {
        AnimationSpec::new(Duration::from_millis(ms), EasingFunction::Linear)
    }

    #[test]
    fn test_set_camera_notifies_once() {
        let (mut map, recorder) = map_with_recorder();
        map.set_camera(Camera::make(10.0, 20.0, 25.0));

        assert_eq!(map.camera().zoom, 21.0);
        assert_eq!(recorder.borrow().cameras.len(), 1);
        assert_eq!(recorder.borrow().cameras[0], map.camera());
    }

    #[test]
    fn test_animation_notifies_only_when_finished() {
        let (mut map, recorder) = map_with_recorder();
        map.animate_with(CameraUpdate::Zoom(12.0), linear(100));
        map.animate_with(CameraUpdate::Bearing(90.0), linear(200));

        let t0 = Instant::now();
        assert!(map.tick(t0));
        assert!(map.tick(t0 + Duration::from_millis(150)));
        assert_eq!(map.camera().zoom, 12.0);
        assert!(recorder.borrow().cameras.is_empty());

        assert!(!map.tick(t0 + Duration::from_millis(250)));
        assert_eq!(map.camera().bearing, 90.0);
        assert_eq!(recorder.borrow().cameras.len(), 1);

        assert!(!map.tick(t0 + Duration::from_millis(300)));
        assert_eq!(recorder.borrow().cameras.len(), 1);
    }

    #[test]
    fn test_set_camera_cancels_animation() {
        let (mut map, recorder) = map_with_recorder();
        map.animate_with(CameraUpdate::Zoom(15.0), linear(1000));

        let t0 = Instant::now();
        map.tick(t0);
        map.tick(t0 + Duration::from_millis(500));
        map.set_camera(Camera::make(5.0, 5.0, 3.0));
        assert!(!map.is_animating());

        assert!(!map.tick(t0 + Duration::from_millis(600)));
        assert_eq!(map.camera().zoom, 3.0);
        assert_eq!(recorder.borrow().cameras.len(), 1);
    }

    #[test]
    fn test_ticks_ignored_while_not_rendering() {
        let (mut map, _recorder) = map_with_recorder();
        map.stop_rendering();
        map.animate_with(CameraUpdate::Zoom(12.0), linear(0));

        assert!(!map.tick(Instant::now()));
        assert_eq!(map.camera().zoom, 10.0);
        assert!(map.is_animating());

        map.start_rendering();
        map.tick(Instant::now());
        assert_eq!(map.camera().zoom, 12.0);
    }

    #[test]
    fn test_tap_selects_marker_and_queries_info_window() {
        let (mut map, recorder) = map_with_recorder();
        let marker = map.add_marker(
            &MarkerOptions::builder(LatLng::new(0.0, 0.0))
                .title("Null Island")
                .build()
                .expect("valid options"),
        );

        map.handle_input(InputEvent::Tap {
            position: Point::new(402.0, 301.0),
        });
        assert_eq!(map.selected_marker(), Some(marker));
        assert_eq!(map.info_window().map(|w| w.content.as_str()), Some("Null Island"));
        assert_eq!(recorder.borrow().marker_taps, vec![marker]);
        assert_eq!(recorder.borrow().selections, vec![Some(marker)]);

        map.handle_input(InputEvent::InfoWindowTap);
        assert_eq!(recorder.borrow().info_window_taps, vec![marker]);

        // Tapping empty map deselects
        map.handle_input(InputEvent::Tap {
            position: Point::new(100.0, 100.0),
        });
        assert_eq!(map.selected_marker(), None);
        assert_eq!(recorder.borrow().taps.len(), 1);
        assert_eq!(recorder.borrow().selections, vec![Some(marker), None]);
    }

    #[test]
    fn test_consumed_marker_tap_skips_selection() {
        let (mut map, recorder) = map_with_recorder();
        recorder.borrow_mut().consume_marker_taps = true;
        map.add_marker(&MarkerOptions::new(LatLng::new(0.0, 0.0)));

        map.handle_input(InputEvent::Tap {
            position: Point::new(400.0, 300.0),
        });
        assert_eq!(map.selected_marker(), None);
        assert!(recorder.borrow().selections.is_empty());
    }

    #[test]
    fn test_polyline_tap_keeps_selection() {
        let (mut map, recorder) = map_with_recorder();
        let marker = map.add_marker(&MarkerOptions::new(LatLng::new(0.05, 0.0)));
        let line = map.add_polyline(&PolylineOptions::new(vec![
            LatLng::new(-0.01, -0.01),
            LatLng::new(-0.01, 0.01),
        ]));
        map.set_selected_marker(Some(marker));

        let on_line = map
            .projection()
            .expect("valid viewport")
            .point_for_coordinate(LatLng::new(-0.01, 0.0));
        map.handle_input(InputEvent::Tap { position: on_line });

        assert_eq!(recorder.borrow().polyline_taps, vec![line]);
        assert_eq!(map.selected_marker(), Some(marker));
    }

    #[test]
    fn test_long_press_reports_coordinate() {
        let (mut map, recorder) = map_with_recorder();
        map.add_marker(&MarkerOptions::new(LatLng::new(0.0, 0.0)));

        let handled = map.handle_input(InputEvent::LongPress {
            position: Point::new(400.0, 300.0),
        });
        assert!(handled.is_handled());
        let presses = recorder.borrow().long_presses.clone();
        assert_eq!(presses.len(), 1);
        assert!(presses[0].lat.abs() < 1e-9 && presses[0].lng.abs() < 1e-9);
        assert!(recorder.borrow().marker_taps.is_empty());
    }

    #[test]
    fn test_invalid_viewport() {
        let (mut map, recorder) = map_with_recorder();
        map.handle_input(InputEvent::Resize {
            width: 0.0,
            height: 600.0,
        });

        assert!(matches!(map.projection(), Err(MapError::InvalidViewport { .. })));
        let handled = map.handle_input(InputEvent::Tap {
            position: Point::new(10.0, 10.0),
        });
        assert_eq!(handled, EventHandled::NotHandled);
        assert!(recorder.borrow().taps.is_empty());
    }

    #[test]
    fn test_clear_drops_selection() {
        let (mut map, recorder) = map_with_recorder();
        let marker = map.add_marker(&MarkerOptions::new(LatLng::new(0.0, 0.0)));
        map.set_selected_marker(Some(marker));

        map.clear();
        assert!(map.overlays().is_empty());
        assert_eq!(map.selected_marker(), None);
        assert_eq!(recorder.borrow().selections, vec![Some(marker), None]);

        map.set_selected_marker(Some(marker));
        assert_eq!(map.selected_marker(), None);
        assert_eq!(recorder.borrow().selections.len(), 2);
    }

    #[test]
    fn test_my_location() {
        let (mut map, recorder) = map_with_recorder();
        let fix = Location::new(LatLng::new(1.0, 1.0), 5.0);

        map.update_my_location(Some(fix));
        assert_eq!(map.my_location(), None);

        map.set_my_location_enabled(true);
        map.update_my_location(Some(fix));
        map.update_my_location(Some(fix));
        assert_eq!(map.my_location(), Some(fix));

        map.set_my_location_enabled(false);
        assert_eq!(map.my_location(), None);
        assert_eq!(recorder.borrow().locations, vec![Some(fix), None]);
    }

    #[test]
    fn test_zoom_limits_reclamp_camera() {
        let (mut map, recorder) = map_with_recorder();
        map.set_zoom_limits(2.0, 8.0).expect("valid limits");

        assert_eq!(map.camera().zoom, 8.0);
        assert_eq!(recorder.borrow().cameras.len(), 1);

        assert!(map.set_zoom_limits(9.0, 3.0).is_err());
        assert_eq!(map.config().max_zoom, 8.0);
    }

    #[test]
    fn test_dropped_delegate_is_silent() {
        let (mut map, recorder) = map_with_recorder();
        drop(recorder);
        assert!(map.delegate().is_none());
        map.set_camera(Camera::default());
    }

    #[test]
    fn test_renderer_state() {
        let (mut map, _recorder) = map_with_recorder();
        assert_eq!(map.map_type(), MapType::Normal);
        map.set_map_type(MapType::Hybrid);
        map.set_traffic_enabled(true);
        assert_eq!(map.map_type(), MapType::Hybrid);
        assert!(map.is_traffic_enabled());
        assert!(map.is_rendering());
    }
}
