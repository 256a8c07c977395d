// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Vec2;
use understory_panzoom_geometry::{
    Config, Geometry, PanPercent, PanZoomState, SurfaceMetrics, ZoomLevel,
};
use understory_panzoom_gesture::{Change, GestureInput, GesturePhase, GestureTracker};

use crate::emitter::{self, ContentTransform};
use crate::error::PanZoomError;
use crate::observer::{Channel, Notification, Observer};
use crate::options::PanZoomOptions;
use crate::surface::{ContentSurface, Surface, SurfaceResolver, SurfaceRole, Transition};

struct Surfaces<V, C> {
    viewport: V,
    content: C,
}

impl<V: Surface, C: Surface> Surfaces<V, C> {
    fn measure(&self) -> SurfaceMetrics {
        SurfaceMetrics::new(self.viewport.size(), self.content.size())
    }
}

/// Pans and zooms a content surface inside a viewport surface.
///
/// `PanZoom` owns both surfaces, the resolved [`Config`], the current
/// [`PanZoomState`] and a [`GestureTracker`]. Every update follows the same
/// path: measure the surfaces, compute the new state through
/// [`Geometry`], clamp it, apply the [`ContentTransform`] to the content
/// surface and notify the observer.
///
/// Sizes are measured on every update, so hosts only need to call
/// [`PanZoom::refresh`] to re-clamp after a layout change.
///
/// An instance whose surfaces could not be resolved is *inert*: every
/// mutator is a no-op and every getter reports the default state.
///
/// Type parameters:
/// - `V`: viewport surface
/// - `C`: content surface
/// - `O`: [`Observer`] receiving notifications
/// - `K`: pointer identity used by [`GestureInput`]
pub struct PanZoom<V, C, O = (), K = u64> {
    config: Config,
    state: PanZoomState,
    initial: PanZoomState,
    initialized: bool,
    surfaces: Result<Surfaces<V, C>, PanZoomError>,
    gestures: GestureTracker<K>,
    observer: O,
    transform: Option<ContentTransform>,
}

impl<V, C, O, K: Copy + PartialEq> fmt::Debug for PanZoom<V, C, O, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoom")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("initial", &self.initial)
            .field("initialized", &self.initialized)
            .field("error", &self.surfaces.as_ref().err())
            .field("phase", &self.gestures.phase())
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl<V, C, O, K> PanZoom<V, C, O, K>
where
    V: Surface,
    C: ContentSurface,
    O: Observer,
    K: Copy + PartialEq,
{
    /// Resolves the surfaces named in `options` and initializes.
    ///
    /// Resolution failures are logged and produce an inert instance; see
    /// [`PanZoom::try_new`] to handle them instead.
    pub fn new<R>(resolver: &mut R, options: &PanZoomOptions, observer: O) -> Self
    where
        R: SurfaceResolver<Viewport = V, Content = C>,
    {
        let surfaces = resolve_surfaces(resolver, options);
        if let Err(err) = &surfaces {
            log::error!("pan/zoom disabled: {err}");
        }
        Self::build(options.resolve(), surfaces, observer)
    }

    /// Resolves the surfaces named in `options` and initializes.
    pub fn try_new<R>(
        resolver: &mut R,
        options: &PanZoomOptions,
        observer: O,
    ) -> Result<Self, PanZoomError>
    where
        R: SurfaceResolver<Viewport = V, Content = C>,
    {
        let surfaces = resolve_surfaces(resolver, options)?;
        Ok(Self::build(options.resolve(), Ok(surfaces), observer))
    }

    /// Initializes with surfaces the host already holds.
    pub fn with_surfaces(viewport: V, content: C, config: Config, observer: O) -> Self {
        Self::build(config, Ok(Surfaces { viewport, content }), observer)
    }

    fn build(config: Config, surfaces: Result<Surfaces<V, C>, PanZoomError>, observer: O) -> Self {
        let mut panzoom = Self {
            config,
            state: PanZoomState::default(),
            initial: PanZoomState::default(),
            initialized: false,
            surfaces,
            gestures: GestureTracker::new(),
            observer,
            transform: None,
        };
        panzoom.initialize();
        panzoom
    }

    /// Derives the bounds minimum zoom, applies the initial zoom and pan,
    /// commits instantly and raises [`Channel::Init`].
    fn initialize(&mut self) {
        let Ok(surfaces) = &mut self.surfaces else {
            return;
        };
        let metrics = surfaces.measure();
        let Some(min_zoom) = Geometry::new(&self.config, metrics).map(|g| g.min_zoom_for_bounds())
        else {
            log::warn!(
                "pan/zoom initialization deferred: degenerate surface sizes {:?} / {:?}",
                metrics.viewport,
                metrics.content
            );
            return;
        };
        self.config.min_zoom = min_zoom;
        let Some(geometry) = Geometry::new(&self.config, metrics) else {
            return;
        };

        let mut state = PanZoomState::default();
        if let ZoomLevel::Fit(_) = self.config.initial_zoom {
            state.translate(geometry.centered_offset());
        }
        state.zoom = geometry.sanitize_zoom(self.config.initial_zoom);
        if let Some((x, y)) = self.config.initial_pan() {
            let offset = geometry.pan_to_percent(PanPercent::new(x, y), state.zoom);
            state.x = offset.x;
            state.y = offset.y;
        }

        self.transform = Some(emitter::commit(
            &geometry,
            &mut state,
            &mut surfaces.content,
            &mut self.observer,
            Transition::Instant,
        ));
        self.state = state;
        self.initial = state;
        self.initialized = true;
        self.observer.notify(Notification::new(Channel::Init, state));
    }

    /// Runs one update: measure, compute, commit and notify.
    ///
    /// Skipped when inert, not yet initialized or when the surfaces are
    /// currently degenerate.
    fn update(
        &mut self,
        transition: Transition,
        f: impl FnOnce(&Geometry<'_>, &mut PanZoomState) -> Change,
    ) {
        if !self.initialized {
            return;
        }
        let Ok(surfaces) = &mut self.surfaces else {
            return;
        };
        let metrics = surfaces.measure();
        let Some(geometry) = Geometry::new(&self.config, metrics) else {
            log::debug!("pan/zoom update skipped: degenerate metrics {metrics:?}");
            return;
        };
        let mut state = self.state;
        let mut change = f(&geometry, &mut state);
        if !state.is_finite() {
            log::debug!("pan/zoom update skipped: non-finite state {state:?}");
            return;
        }
        self.transform = Some(emitter::commit(
            &geometry,
            &mut state,
            &mut surfaces.content,
            &mut self.observer,
            transition,
        ));
        // Zooming moves the content unless it is anchored at its center.
        change.pan |= change.zoom && state.offset() != self.state.offset();
        self.state = state;
        emitter::notify(&mut self.observer, change, state);
    }

    fn transition(&self, instant: bool) -> Transition {
        if instant {
            Transition::Instant
        } else {
            Transition::Animated(self.config.transition)
        }
    }

    /// Zooms to `level`, keeping the viewport center fixed.
    ///
    /// Raises [`Channel::Pan`] after [`Channel::Zoom`] if the offset moved.
    /// Numeric levels are clamped to the zoom limits. Symbolic levels also
    /// re-center the content. `NaN` requests are ignored.
    pub fn zoom_to(&mut self, level: impl Into<ZoomLevel>, instant: bool) -> &mut Self {
        let level = level.into();
        if matches!(level, ZoomLevel::Value(zoom) if zoom.is_nan()) {
            return self;
        }
        self.update(self.transition(instant), |geometry, state| {
            let zoom = geometry.sanitize_zoom(level);
            match level {
                ZoomLevel::Fit(_) => {
                    let centered = geometry.centered_offset();
                    *state = PanZoomState::new(zoom, centered.x, centered.y);
                    Change::ZOOM_AND_PAN
                }
                ZoomLevel::Value(_) => {
                    geometry.zoom_about(zoom, None, state);
                    Change::ZOOM
                }
            }
        });
        self
    }

    /// Zooms in by `step` percent, or by the configured zoom step.
    ///
    /// A `step` that is not finite or is at most `-100` falls back to the
    /// configured zoom step.
    pub fn zoom_in(&mut self, step: Option<f64>, instant: bool) -> &mut Self {
        let factor = self.zoom_factor(step);
        self.zoom_to(self.state.zoom * factor, instant)
    }

    /// Zooms out by `step` percent, or by the configured zoom step.
    ///
    /// This undoes a [`PanZoom::zoom_in`] with the same step.
    pub fn zoom_out(&mut self, step: Option<f64>, instant: bool) -> &mut Self {
        let factor = self.zoom_factor(step);
        self.zoom_to(self.state.zoom / factor, instant)
    }

    /// Multiplier for a zoom step in percent. Steps that would not give a
    /// finite positive factor use the configured step instead.
    fn zoom_factor(&self, step: Option<f64>) -> f64 {
        let factor = |step: f64| 1.0 + step / 100.0;
        step.map(factor)
            .filter(|f| f.is_finite() && *f > 0.0)
            .unwrap_or_else(|| factor(self.config.zoom_step))
    }

    /// Pans so that the point at (`x`, `y`) percent of the content sits at
    /// the viewport center, subject to bounds.
    ///
    /// Requests with a non-finite coordinate are ignored.
    pub fn pan_to(&mut self, x: f64, y: f64, instant: bool) -> &mut Self {
        if !x.is_finite() || !y.is_finite() {
            return self;
        }
        self.update(self.transition(instant), |geometry, state| {
            let offset = geometry.pan_to_percent(PanPercent::new(x, y), state.zoom);
            state.x = offset.x;
            state.y = offset.y;
            Change::PAN
        });
        self
    }

    fn pan_by(&mut self, dx: f64, dy: f64, instant: bool) -> &mut Self {
        let Some(pan) = self.pan() else {
            return self;
        };
        self.pan_to(pan.x + dx, pan.y + dy, instant)
    }

    /// Pans left by `step` percent, or by the configured pan step.
    pub fn pan_left(&mut self, step: Option<f64>, instant: bool) -> &mut Self {
        let step = step.unwrap_or(self.config.pan_step);
        self.pan_by(-step, 0.0, instant)
    }

    /// Pans right by `step` percent, or by the configured pan step.
    pub fn pan_right(&mut self, step: Option<f64>, instant: bool) -> &mut Self {
        let step = step.unwrap_or(self.config.pan_step);
        self.pan_by(step, 0.0, instant)
    }

    /// Pans up by `step` percent, or by the configured pan step.
    pub fn pan_up(&mut self, step: Option<f64>, instant: bool) -> &mut Self {
        let step = step.unwrap_or(self.config.pan_step);
        self.pan_by(0.0, -step, instant)
    }

    /// Pans down by `step` percent, or by the configured pan step.
    pub fn pan_down(&mut self, step: Option<f64>, instant: bool) -> &mut Self {
        let step = step.unwrap_or(self.config.pan_step);
        self.pan_by(0.0, step, instant)
    }

    /// Centers the content in the viewport at the current zoom.
    pub fn center(&mut self, instant: bool) -> &mut Self {
        self.pan_to(50.0, 50.0, instant)
    }

    /// Returns to the zoom and position computed at initialization.
    pub fn reset(&mut self, instant: bool) -> &mut Self {
        let initial = self.initial;
        self.update(self.transition(instant), |_, state| {
            *state = initial;
            Change::ZOOM_AND_PAN
        });
        self
    }

    /// Re-measures the surfaces and re-clamps the current state.
    ///
    /// Call after the host layout changed. If initialization was deferred
    /// because the surfaces were degenerate, it is retried instead.
    pub fn refresh(&mut self, instant: bool) -> &mut Self {
        if self.initialized {
            self.update(self.transition(instant), |_, _| Change::NONE);
        } else {
            self.initialize();
        }
        self
    }

    /// Feeds one input event through the gesture tracker.
    ///
    /// Returns `true` if the state changed and a transform was committed.
    /// Gesture updates are always applied instantly.
    pub fn handle_input(&mut self, input: &GestureInput<K>) -> bool {
        let initialized = self.initialized;
        let Ok(surfaces) = &mut self.surfaces else {
            return false;
        };
        let geometry = Geometry::new(&self.config, surfaces.measure()).filter(|_| initialized);
        let mut state = self.state;
        let change = self.gestures.handle(input, geometry.as_ref(), &mut state);
        if !state.is_finite() {
            log::debug!("gesture skipped: non-finite state {state:?}");
            return false;
        }
        let Some(geometry) = geometry.filter(|_| !change.is_none()) else {
            return false;
        };
        self.transform = Some(emitter::commit(
            &geometry,
            &mut state,
            &mut surfaces.content,
            &mut self.observer,
            Transition::Instant,
        ));
        self.state = state;
        emitter::notify(&mut self.observer, change, state);
        true
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Current offset of the content in pixels.
    pub fn position(&self) -> Vec2 {
        self.state.offset()
    }

    /// Current zoom and offset.
    pub fn state(&self) -> PanZoomState {
        self.state
    }

    /// Current pan in percent, or `None` if the surfaces cannot be measured.
    pub fn pan(&self) -> Option<PanPercent> {
        let metrics = self.metrics().ok()?;
        let geometry = Geometry::new(&self.config, metrics)?;
        Some(geometry.pan_percent(&self.state))
    }

    /// Current pan in pixels, identical to [`PanZoom::position`].
    pub fn pan_pixels(&self) -> Vec2 {
        self.position()
    }

    /// Measures the surfaces.
    pub fn metrics(&self) -> Result<SurfaceMetrics, PanZoomError> {
        let surfaces = self.surfaces.as_ref().map_err(Clone::clone)?;
        let metrics = surfaces.measure();
        if metrics.is_degenerate() {
            return Err(PanZoomError::DegenerateGeometry {
                viewport: metrics.viewport,
                content: metrics.content,
            });
        }
        Ok(metrics)
    }

    /// The last transform applied to the content surface.
    pub fn content_transform(&self) -> Option<&ContentTransform> {
        self.transform.as_ref()
    }
}

impl<V, C, O, K: Copy + PartialEq> PanZoom<V, C, O, K> {
    /// Resolved configuration.
    ///
    /// `min_zoom` reflects the minimum raised at initialization to satisfy
    /// the bounds mode.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` if the surfaces could not be resolved.
    pub fn is_inert(&self) -> bool {
        self.surfaces.is_err()
    }

    /// Why this instance is inert, if it is.
    pub fn error(&self) -> Option<&PanZoomError> {
        self.surfaces.as_ref().err()
    }

    /// Returns `true` once the initial transform has been committed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The viewport surface.
    pub fn viewport(&self) -> Option<&V> {
        self.surfaces.as_ref().ok().map(|s| &s.viewport)
    }

    /// The content surface.
    pub fn content(&self) -> Option<&C> {
        self.surfaces.as_ref().ok().map(|s| &s.content)
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Current gesture phase.
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Returns `true` while a pinch suppresses single-pointer panning.
    pub fn is_pan_blocked(&self) -> bool {
        self.gestures.is_pan_blocked()
    }

    /// Returns `true` while a single pointer drags the content.
    pub fn is_dragging(&self) -> bool {
        self.gestures.drag().is_some()
    }

    /// Number of pointers currently down.
    pub fn active_pointers(&self) -> usize {
        self.gestures.pointers().len()
    }

    /// Drops every tracked pointer and ends the current gesture.
    pub fn cancel_gestures(&mut self) {
        self.gestures.reset();
    }
}

fn resolve_surfaces<R: SurfaceResolver>(
    resolver: &mut R,
    options: &PanZoomOptions,
) -> Result<Surfaces<R::Viewport, R::Content>, PanZoomError> {
    let (viewport_id, content_id) = options.surface_ids()?;
    let viewport = resolver
        .resolve_viewport(viewport_id)
        .ok_or_else(|| PanZoomError::UnresolvedSurface {
            role: SurfaceRole::Viewport,
            id: viewport_id.into(),
        })?;
    let content = resolver
        .resolve_content(content_id)
        .ok_or_else(|| PanZoomError::UnresolvedSurface {
            role: SurfaceRole::Content,
            id: content_id.into(),
        })?;
    Ok(Surfaces { viewport, content })
}
