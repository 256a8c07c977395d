// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle notifications.
//!
//! Every committed update raises [`Channel::Change`]; public mutators and
//! gestures additionally raise [`Channel::Zoom`] and/or [`Channel::Pan`], in
//! that order. [`Channel::Init`] is raised once, after the initial commit.
//!
//! Observers are called synchronously and nothing they do is caught.
//!
//! ```rust
//! use understory_panzoom::observer::{Callbacks, Channel, Notification, Observer};
//! use understory_panzoom::PanZoomState;
//!
//! let mut log = Vec::<Notification>::new();
//! log.notify(Notification::new(Channel::Zoom, PanZoomState::default()));
//! assert_eq!(log[0].channel, Channel::Zoom);
//!
//! let mut callbacks = Callbacks::new().on_zoom(|state| assert_eq!(state.zoom, 1.0));
//! callbacks.notify(Notification::new(Channel::Zoom, PanZoomState::default()));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use understory_panzoom_geometry::PanZoomState;

/// Named notification channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Initialization finished.
    Init,
    /// A transform was committed.
    Change,
    /// The zoom was updated.
    Zoom,
    /// The position was updated.
    Pan,
}

/// A notification with a snapshot of the state at the time it was raised.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Notification {
    /// Channel the notification was raised on.
    pub channel: Channel,
    /// Zoom and offset snapshot.
    pub state: PanZoomState,
}

impl Notification {
    /// Creates a notification.
    pub fn new(channel: Channel, state: PanZoomState) -> Self {
        Self { channel, state }
    }
}

/// Receives pan/zoom notifications.
pub trait Observer {
    /// Handles one notification.
    fn notify(&mut self, notification: Notification);
}

impl Observer for () {
    fn notify(&mut self, _notification: Notification) {}
}

/// Records every notification, in order.
impl Observer for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

type Callback = Box<dyn FnMut(PanZoomState)>;

/// One optional callback per channel.
#[derive(Default)]
pub struct Callbacks {
    on_init: Option<Callback>,
    on_change: Option<Callback>,
    on_zoom: Option<Callback>,
    on_pan: Option<Callback>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |cb: &Option<Callback>| if cb.is_some() { "<function>" } else { "None" };
        f.debug_struct("Callbacks")
            .field("on_init", &slot(&self.on_init))
            .field("on_change", &slot(&self.on_change))
            .field("on_zoom", &slot(&self.on_zoom))
            .field("on_pan", &slot(&self.on_pan))
            .finish()
    }
}

impl Callbacks {
    /// Creates an empty set of callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once after initialization.
    #[must_use]
    pub fn on_init(mut self, f: impl FnMut(PanZoomState) + 'static) -> Self {
        self.on_init = Some(Box::new(f));
        self
    }

    /// Called after every commit.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(PanZoomState) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called when the zoom is updated.
    #[must_use]
    pub fn on_zoom(mut self, f: impl FnMut(PanZoomState) + 'static) -> Self {
        self.on_zoom = Some(Box::new(f));
        self
    }

    /// Called when the position is updated.
    #[must_use]
    pub fn on_pan(mut self, f: impl FnMut(PanZoomState) + 'static) -> Self {
        self.on_pan = Some(Box::new(f));
        self
    }
}

impl Observer for Callbacks {
    fn notify(&mut self, notification: Notification) {
        let slot = match notification.channel {
            Channel::Init => &mut self.on_init,
            Channel::Change => &mut self.on_change,
            Channel::Zoom => &mut self.on_zoom,
            Channel::Pan => &mut self.on_pan,
        };
        if let Some(callback) = slot {
            callback(notification.state);
        }
    }
}
