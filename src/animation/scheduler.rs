//! Tick-driven camera animation.
//!
//! Each animated camera field (target, zoom, bearing, tilt) has at most one
//! [`AnimationJob`]. Jobs on different fields run independently, with their
//! own duration and easing, and are merged into a single camera on every
//! [`AnimationScheduler::tick`]. There is no timer: the embedding frame
//! driver calls `tick` with the frame timestamp, which also makes the
//! scheduler deterministic under synthetic clocks.

use crate::{
    animation::{easing::EasingFunction, interpolation::Interpolation},
    core::{camera::Camera, config::AnimationConfig, geo::LatLng},
};
use instant::Instant;
use std::time::Duration;

/// A camera field that can be animated on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraField {
    Target,
    Zoom,
    Bearing,
    Tilt,
}

impl CameraField {
    pub const ALL: [CameraField; 4] = [
        CameraField::Target,
        CameraField::Zoom,
        CameraField::Bearing,
        CameraField::Tilt,
    ];

    fn index(self) -> usize {
        match self {
            CameraField::Target => 0,
            CameraField::Zoom => 1,
            CameraField::Bearing => 2,
            CameraField::Tilt => 3,
        }
    }

    /// Writes this field of `camera`, `t` of the way from `from` to `to`
    fn interpolate(self, camera: &mut Camera, from: &Camera, to: &Camera, t: f64) {
        match self {
            CameraField::Target => camera.target = Interpolation::target(&from.target, &to.target, t),
            CameraField::Zoom => camera.zoom = Interpolation::linear(from.zoom, to.zoom, t),
            CameraField::Bearing => {
                camera.bearing = Interpolation::bearing(from.bearing, to.bearing, t)
            }
            CameraField::Tilt => camera.tilt = Interpolation::linear(from.tilt, to.tilt, t),
        }
    }

    /// Copies this field from `source` into `camera`
    fn copy(self, camera: &mut Camera, source: &Camera) {
        match self {
            CameraField::Target => camera.target = source.target,
            CameraField::Zoom => camera.zoom = source.zoom,
            CameraField::Bearing => camera.bearing = source.bearing,
            CameraField::Tilt => camera.tilt = source.tilt,
        }
    }
}

/// A requested camera change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraUpdate {
    Location(LatLng),
    Zoom(f64),
    Bearing(f64),
    ViewingAngle(f64),
    Camera(Camera),
}

impl CameraUpdate {
    /// Fields this update changes
    pub fn fields(&self) -> &'static [CameraField] {
        match self {
            CameraUpdate::Location(_) => &[CameraField::Target],
            CameraUpdate::Zoom(_) => &[CameraField::Zoom],
            CameraUpdate::Bearing(_) => &[CameraField::Bearing],
            CameraUpdate::ViewingAngle(_) => &[CameraField::Tilt],
            CameraUpdate::Camera(_) => &CameraField::ALL,
        }
    }

    /// `camera` with this update applied. The result is not clamped.
    pub fn apply_to(&self, camera: &Camera) -> Camera {
        let mut updated = *camera;
        match *self {
            CameraUpdate::Location(target) => updated.target = target,
            CameraUpdate::Zoom(zoom) => updated.zoom = zoom,
            CameraUpdate::Bearing(bearing) => updated.bearing = bearing,
            CameraUpdate::ViewingAngle(tilt) => updated.tilt = tilt,
            CameraUpdate::Camera(target) => updated = target,
        }
        updated
    }
}

/// Duration and easing for one animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: EasingFunction,
}

impl AnimationSpec {
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self { duration, easing }
    }

    /// The configured default for animating `field`
    pub fn for_field(field: CameraField, config: &AnimationConfig) -> Self {
        let duration = match field {
            CameraField::Target => config.location_duration(),
            CameraField::Zoom => config.zoom_duration(),
            CameraField::Bearing => config.bearing_duration(),
            CameraField::Tilt => config.viewing_angle_duration(),
        };
        Self::new(duration, config.easing)
    }
}

/// Animation of a single camera field from one camera to another
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationJob {
    field: CameraField,
    from: Camera,
    to: Camera,
    /// Set by the first tick after the job is scheduled
    start_time: Option<Instant>,
    duration: Duration,
    easing: EasingFunction,
}

impl AnimationJob {
    pub fn new(field: CameraField, from: Camera, to: Camera, spec: AnimationSpec) -> Self {
        Self {
            field,
            from,
            to,
            start_time: None,
            duration: spec.duration,
            easing: spec.easing,
        }
    }

    pub fn field(&self) -> CameraField {
        self.field
    }

    pub fn from(&self) -> &Camera {
        &self.from
    }

    pub fn to(&self) -> &Camera {
        &self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Raw progress in [0, 1] at `now`, starting the job's clock if needed
    fn progress(&mut self, now: Instant) -> f64 {
        let start = *self.start_time.get_or_insert(now);
        let elapsed = if now > start { now - start } else { Duration::ZERO };
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        }
    }

    /// Writes the field value at `now` into `camera`. Returns `true` once the
    /// job has reached its end value.
    fn sample(&mut self, now: Instant, camera: &mut Camera) -> bool {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.field.copy(camera, &self.to);
            true
        } else {
            let eased = self.easing.apply(progress);
            self.field.interpolate(camera, &self.from, &self.to, eased);
            false
        }
    }
}

/// Outcome of a tick that had at least one job to run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickResult {
    /// Camera with every animated field at its current value, unclamped
    pub camera: Camera,
    /// The last running job retired on this tick
    pub finished: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    jobs: [Option<AnimationJob>; 4],
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `job`, returning the job it superseded on the same field
    pub fn schedule(&mut self, job: AnimationJob) -> Option<AnimationJob> {
        let field = job.field();
        let superseded = self.jobs[field.index()].replace(job);
        if superseded.is_some() {
            log::trace!("animation on {:?} superseded", field);
        } else {
            log::trace!("animation on {:?} scheduled", field);
        }
        superseded
    }

    /// Drops the job animating `field`, if any
    pub fn cancel(&mut self, field: CameraField) -> bool {
        self.jobs[field.index()].take().is_some()
    }

    /// Drops every job without committing their end values
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.jobs.iter_mut().filter_map(Option::take).count();
        if cancelled > 0 {
            log::debug!("cancelled {} camera animation(s)", cancelled);
        }
        cancelled
    }

    pub fn is_animating(&self) -> bool {
        self.jobs.iter().any(Option::is_some)
    }

    pub fn job(&self, field: CameraField) -> Option<&AnimationJob> {
        self.jobs[field.index()].as_ref()
    }

    pub fn active_fields(&self) -> Vec<CameraField> {
        self.jobs.iter().flatten().map(AnimationJob::field).collect()
    }

    /// Advances every job to `now` and merges them onto `camera`.
    ///
    /// Returns `None` when nothing is animating. Finished jobs commit their
    /// exact end value and are retired.
    pub fn tick(&mut self, now: Instant, camera: &Camera) -> Option<TickResult> {
        if !self.is_animating() {
            return None;
        }

        let mut next = *camera;
        for slot in self.jobs.iter_mut() {
            let done = match slot.as_mut() {
                Some(job) => job.sample(now, &mut next),
                None => false,
            };
            if done {
                if let Some(job) = slot.take() {
                    log::trace!("animation on {:?} finished", job.field());
                }
            }
        }

        Some(TickResult {
            camera: next,
            finished: !self.is_animating(),
        })
    }
}
