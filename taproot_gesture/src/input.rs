// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native input records, as forwarded by the host.
//!
//! Each record carries the composed path the native event traversed, the
//! fields the trackers read from it, and cancelation state. The recognizer
//! consumes records read-only except for `prevent_default`, which it calls
//! when a listener cancels the synthesized event; backward cancelation is
//! the only effect that flows from synthetic back to native.

use smallvec::SmallVec;
use taproot_event::{Modifiers, PositionSnapshot, SourcePoint};
use taproot_path::TargetPath;

/// Identifier of a touch point, as reported by the host.
pub type TouchId = i32;

macro_rules! cancelation_methods {
    () => {
        /// Returns the composed path the native event traversed.
        #[must_use]
        pub fn path(&self) -> &TargetPath<K> {
            &self.path
        }

        /// Returns `true` if the native record's default can be prevented.
        #[must_use]
        pub fn cancelable(&self) -> bool {
            self.cancelable
        }

        /// Marks this record non-cancelable. `prevent_default` becomes a
        /// no-op, matching native records dispatched without a default.
        #[must_use]
        pub fn non_cancelable(mut self) -> Self {
            self.cancelable = false;
            self
        }

        /// Prevents the native default action, if the record is cancelable.
        pub fn prevent_default(&mut self) {
            if self.cancelable {
                self.default_prevented = true;
            }
        }

        /// Returns `true` if the native default action was prevented.
        #[must_use]
        pub fn default_prevented(&self) -> bool {
            self.default_prevented
        }
    };
}

/// A native mouse button record (`mousedown` / `mouseup`).
#[derive(Debug)]
pub struct MouseInput<K> {
    path: TargetPath<K>,
    point: SourcePoint,
    cancelable: bool,
    default_prevented: bool,
}

impl<K> MouseInput<K> {
    /// Creates a mouse record with its position and modifier snapshot.
    #[must_use]
    pub fn new(path: TargetPath<K>, position: PositionSnapshot, modifiers: Modifiers) -> Self {
        Self {
            path,
            point: SourcePoint::mouse(position, modifiers),
            cancelable: true,
            default_prevented: false,
        }
    }

    /// The record's source point (mouse-like: modifiers present).
    #[must_use]
    pub fn point(&self) -> SourcePoint {
        self.point
    }

    cancelation_methods!();
}

/// One touch point of a touch record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned identifier, stable for the lifetime of the touch.
    pub identifier: TouchId,
    /// Position snapshot of the touch point.
    pub position: PositionSnapshot,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub const fn new(identifier: TouchId, position: PositionSnapshot) -> Self {
        Self {
            identifier,
            position,
        }
    }

    /// The touch point as a dispatch source (no modifier snapshot).
    #[must_use]
    pub const fn source_point(&self) -> SourcePoint {
        SourcePoint::touch(self.position)
    }
}

/// A native touch record (`touchstart` / `touchmove` / `touchend`).
#[derive(Debug)]
pub struct TouchInput<K> {
    path: TargetPath<K>,
    changed: SmallVec<[TouchPoint; 1]>,
    cancelable: bool,
    default_prevented: bool,
}

impl<K> TouchInput<K> {
    /// Creates a touch record from the touches changed by this event.
    #[must_use]
    pub fn new(path: TargetPath<K>, changed: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            path,
            changed: changed.into_iter().collect(),
            cancelable: true,
            default_prevented: false,
        }
    }

    /// The touch points changed by this event. Only the first is tracked;
    /// further simultaneous touches are invisible to the recognizer.
    #[must_use]
    pub fn changed(&self) -> &[TouchPoint] {
        &self.changed
    }

    cancelation_methods!();
}

/// A native click record.
///
/// `detail` is the press count the host reported; a zero-`detail` click is
/// the platform convention for keyboard- or assistive-technology-triggered
/// activation.
#[derive(Debug)]
pub struct ClickInput<K> {
    path: TargetPath<K>,
    detail: u32,
    point: SourcePoint,
    cancelable: bool,
    default_prevented: bool,
}

impl<K> ClickInput<K> {
    /// Creates a click record.
    #[must_use]
    pub fn new(
        path: TargetPath<K>,
        detail: u32,
        position: PositionSnapshot,
        modifiers: Modifiers,
    ) -> Self {
        Self {
            path,
            detail,
            point: SourcePoint::mouse(position, modifiers),
            cancelable: true,
            default_prevented: false,
        }
    }

    /// A simulated activation click: zero `detail`, origin position, the
    /// activating record's modifiers.
    #[must_use]
    pub fn simulated(path: TargetPath<K>, modifiers: Modifiers) -> Self {
        Self::new(path, 0, PositionSnapshot::ZERO, modifiers)
    }

    /// The press count.
    #[must_use]
    pub fn detail(&self) -> u32 {
        self.detail
    }

    /// The record's source point (mouse-like: modifiers present).
    #[must_use]
    pub fn point(&self) -> SourcePoint {
        self.point
    }

    cancelation_methods!();
}

/// Key identity of a keyboard record, reduced to what activation handling
/// distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// The Enter key.
    Enter,
    /// The Space key.
    Space,
    /// Any other key.
    Other,
}

/// A native `keyup` record.
#[derive(Debug)]
pub struct KeyInput<K> {
    path: TargetPath<K>,
    key: KeyCode,
    modifiers: Modifiers,
    cancelable: bool,
    default_prevented: bool,
}

impl<K> KeyInput<K> {
    /// Creates a keyup record.
    #[must_use]
    pub fn new(path: TargetPath<K>, key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            path,
            key,
            modifiers,
            cancelable: true,
            default_prevented: false,
        }
    }

    /// The key that was released.
    #[must_use]
    pub fn key(&self) -> KeyCode {
        self.key
    }

    /// The modifier keys held when the key was released.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    cancelation_methods!();
}
