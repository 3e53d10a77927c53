// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event payload types: position and modifier snapshots, source points, and
//! the synthesized [`TapEvent`] itself.

use kurbo::Point;

/// The position of an input, snapshotted across the three coordinate planes
/// hosts conventionally report.
///
/// All fields are copied verbatim from the originating mouse or touch point
/// at the moment of dispatch; a snapshot is immutable once captured and
/// exactly one exists per dispatched [`TapEvent`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositionSnapshot {
    /// Position relative to the full content (scrolled document).
    pub page: Point,
    /// Position relative to the physical screen.
    pub screen: Point,
    /// Position relative to the viewport.
    pub client: Point,
}

impl PositionSnapshot {
    /// A snapshot with all planes at the origin.
    ///
    /// Used for simulated activations that have no physical pointer, such as
    /// keyboard-driven clicks.
    pub const ZERO: Self = Self {
        page: Point::ZERO,
        screen: Point::ZERO,
        client: Point::ZERO,
    };

    /// Creates a snapshot from per-plane points.
    #[must_use]
    pub const fn new(page: Point, screen: Point, client: Point) -> Self {
        Self {
            page,
            screen,
            client,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held when a mouse-like input originated.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The Alt (Option) key.
        const ALT = 0b0000_0001;
        /// The Control key.
        const CTRL = 0b0000_0010;
        /// The Meta (Command / Windows) key.
        const META = 0b0000_0100;
        /// The Shift key.
        const SHIFT = 0b0000_1000;
    }
}

/// The originating input of a dispatch: where it happened and, for
/// mouse-like inputs, which modifier keys were held.
///
/// Touch points carry no modifier information of their own, so
/// [`SourcePoint::touch`] records the modifiers as absent rather than empty.
/// The distinction survives into the dispatched event via
/// [`TapEvent::source_modifiers`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SourcePoint {
    /// Position snapshot copied from the input.
    pub position: PositionSnapshot,
    /// Modifier snapshot; `Some` iff the input was mouse-like.
    pub modifiers: Option<Modifiers>,
}

impl SourcePoint {
    /// A mouse-like source: mouse buttons, clicks, simulated activations.
    #[must_use]
    pub const fn mouse(position: PositionSnapshot, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers: Some(modifiers),
        }
    }

    /// A touch-derived source.
    #[must_use]
    pub const fn touch(position: PositionSnapshot) -> Self {
        Self {
            position,
            modifiers: None,
        }
    }

    /// Returns `true` if this source carries a modifier snapshot.
    #[must_use]
    pub const fn is_mouse_like(&self) -> bool {
        self.modifiers.is_some()
    }
}

/// The kind of synthesized gesture event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// A candidate tap began (press observed).
    TapStart,
    /// A tap completed.
    Tap,
    /// A candidate tap ended (release observed), whether or not it completed
    /// as a [`GestureKind::Tap`].
    TapEnd,
}

/// A synthesized gesture event.
///
/// Tap events always bubble, cross retargeting boundaries, and are
/// cancelable. Listeners receive the event mutably during dispatch and may
/// [`prevent_default`](Self::prevent_default) (propagated backward to the
/// originating native record by the dispatching tracker) or
/// [`stop_propagation`](Self::stop_propagation) (aborts delivery to later
/// propagation steps).
#[derive(Clone, Debug)]
pub struct TapEvent<K> {
    kind: GestureKind,
    target: K,
    position: PositionSnapshot,
    modifiers: Option<Modifiers>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl<K> TapEvent<K> {
    /// Builds an event of `kind` on `target` from a source point.
    ///
    /// The position and modifier snapshots are copied out of `point` here,
    /// at dispatch time; nothing is shared with the source afterwards.
    #[must_use]
    pub fn new(kind: GestureKind, target: K, point: &SourcePoint) -> Self {
        Self {
            kind,
            target,
            position: point.position,
            modifiers: point.modifiers,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// The gesture kind.
    #[must_use]
    pub const fn kind(&self) -> GestureKind {
        self.kind
    }

    /// The resolved target the event was dispatched on.
    #[must_use]
    pub const fn target(&self) -> &K {
        &self.target
    }

    /// The position snapshot.
    #[must_use]
    pub const fn position(&self) -> PositionSnapshot {
        self.position
    }

    /// The modifier snapshot, flattened: absent modifiers read as no
    /// modifiers held.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers.unwrap_or_default()
    }

    /// The modifier snapshot as captured: `Some` for mouse-derived events,
    /// `None` for touch-derived ones.
    #[must_use]
    pub const fn source_modifiers(&self) -> Option<Modifiers> {
        self.modifiers
    }

    /// Tap events always bubble.
    #[must_use]
    pub const fn bubbles(&self) -> bool {
        true
    }

    /// Tap events always cross retargeting boundaries.
    #[must_use]
    pub const fn composed(&self) -> bool {
        true
    }

    /// Tap events are always cancelable.
    #[must_use]
    pub const fn cancelable(&self) -> bool {
        true
    }

    /// Cancels the event's default action.
    ///
    /// The dispatching tracker propagates this to the originating native
    /// record once delivery finishes.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` if a listener canceled the event.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stops delivery after the current listener returns.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Returns `true` if a listener stopped delivery.
    #[must_use]
    pub const fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
