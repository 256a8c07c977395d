// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use kurbo::Size;

use crate::emitter::ContentTransform;

/// Which of the two surfaces something refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRole {
    /// The fixed-size visible area.
    Viewport,
    /// The pannable, zoomable element inside the viewport.
    Content,
}

impl fmt::Display for SurfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Viewport => "viewport",
            Self::Content => "content",
        })
    }
}

/// How the content surface should move to a newly emitted transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Jump to the new transform.
    Instant,
    /// Animate to the new transform over the given duration.
    Animated(Duration),
}

/// A rectangular surface whose size can be measured.
///
/// Sizes are read on every update and must reflect the current layout.
pub trait Surface {
    /// Current size of the surface.
    ///
    /// For content surfaces this is the natural, unscaled size.
    fn size(&self) -> Size;
}

/// The surface that receives the pan/zoom transform.
pub trait ContentSurface: Surface {
    /// Sets how the next transform is applied.
    fn set_transition(&mut self, transition: Transition);

    /// Applies a new transform.
    fn set_transform(&mut self, transform: &ContentTransform);
}

/// Looks up surfaces by identifier (for example a selector).
///
/// Returning `None` means the identifier could not be resolved; the caller
/// reports it and degrades instead of failing hard.
pub trait SurfaceResolver {
    /// Viewport surface type.
    type Viewport: Surface;
    /// Content surface type.
    type Content: ContentSurface;

    /// Resolves the viewport surface named `id`.
    fn resolve_viewport(&mut self, id: &str) -> Option<Self::Viewport>;

    /// Resolves the content surface named `id`.
    fn resolve_content(&mut self, id: &str) -> Option<Self::Content>;
}
