// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a final state into a content transform and notifications.

use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};
use understory_panzoom_geometry::{Geometry, PanZoomState};
use understory_panzoom_gesture::Change;

use crate::observer::{Channel, Notification, Observer};
use crate::surface::{ContentSurface, Transition};

/// Transform applied to the content surface.
///
/// The content is translated by the offset and then scaled by `zoom` about
/// its own center (`origin`, in content coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    /// Uniform scale factor.
    pub zoom: f64,
    /// Translation in viewport pixels.
    pub translation: Vec2,
    /// Scale origin in unscaled content coordinates.
    pub origin: Point,
}

impl ContentTransform {
    /// Describes `state` for content of the given natural size.
    pub fn new(state: &PanZoomState, content: Size) -> Self {
        Self {
            zoom: state.zoom,
            translation: state.offset(),
            origin: Point::new(content.width * 0.5, content.height * 0.5),
        }
    }

    /// Maps unscaled content coordinates to viewport coordinates.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale_about(self.zoom, self.origin)
    }
}

/// Formats as a CSS transform with a centered origin.
impl fmt::Display for ContentTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translation.x, self.translation.y, self.zoom
        )
    }
}

/// Clamps `state`, applies it to `content` and raises [`Channel::Change`].
pub(crate) fn commit<C: ContentSurface, O: Observer>(
    geometry: &Geometry<'_>,
    state: &mut PanZoomState,
    content: &mut C,
    observer: &mut O,
    transition: Transition,
) -> ContentTransform {
    content.set_transition(transition);
    geometry.clamp_offsets(state);
    let transform = ContentTransform::new(state, geometry.metrics().content);
    content.set_transform(&transform);
    observer.notify(Notification::new(Channel::Change, *state));
    transform
}

/// Raises [`Channel::Zoom`] and then [`Channel::Pan`] as `change` requires.
pub(crate) fn notify<O: Observer>(observer: &mut O, change: Change, state: PanZoomState) {
    if change.zoom {
        observer.notify(Notification::new(Channel::Zoom, state));
    }
    if change.pan {
        observer.notify(Notification::new(Channel::Pan, state));
    }
}
