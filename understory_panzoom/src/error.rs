// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Size;

use crate::surface::SurfaceRole;

/// Reasons a [`PanZoom`](crate::PanZoom) cannot operate.
///
/// None of these cross the public API as a panic: constructors either return
/// them from [`PanZoom::try_new`](crate::PanZoom::try_new) or log them and
/// produce an inert instance.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PanZoomError {
    /// The options did not name a surface.
    #[error("no {0} surface was specified")]
    MissingSurface(SurfaceRole),
    /// The resolver could not find the named surface.
    #[error("{role} surface `{id}` could not be resolved")]
    UnresolvedSurface {
        /// Which surface failed.
        role: SurfaceRole,
        /// The identifier that was looked up.
        id: String,
    },
    /// A surface has a zero, negative or non-finite dimension.
    #[error("degenerate surface size: viewport {viewport:?}, content {content:?}")]
    DegenerateGeometry {
        /// Measured viewport size.
        viewport: Size,
        /// Measured natural content size.
        content: Size,
    },
}
