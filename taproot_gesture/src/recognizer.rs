// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-installation recognizer: shared tracker state and dispatch.

use alloc::boxed::Box;

use taproot_event::{DispatchOutcome, GestureKind, SourcePoint, TapEvent, TapSink, dispatch};
use taproot_path::TargetPath;

use crate::input::TouchId;
use crate::platform::{EngineQuirks, Platform};
use crate::registry::{CapabilityRegistry, GestureSet};

/// A root-level on-event handler, following the platform's generic on-event
/// convention: at most one per gesture kind, invoked after an uninterrupted
/// propagation walk, with the event still mutable.
pub type GestureHandler<K> = Box<dyn FnMut(&mut TapEvent<K>)>;

/// One installation of the tap behavior against a root target.
///
/// All per-gesture state (the active touch, pending paths, the suppression
/// flag) is scoped to this instance. Concurrent installations against the
/// same root each hold their own state and negotiate dispatch ownership
/// through the shared [`CapabilityRegistry`], so they cannot corrupt each
/// other.
///
/// The host forwards native records via the `on_*` methods; each takes the
/// record mutably (for backward cancelation) and a
/// [`TapSink`](taproot_event::TapSink) that receives the synthesized
/// events.
pub struct TapRecognizer<K, P> {
    pub(crate) platform: P,
    pub(crate) quirks: EngineQuirks,
    pub(crate) enabled: GestureSet,
    /// Composed path captured at `mousedown`, consumed at `mouseup`.
    pub(crate) pending_mouse_path: Option<TargetPath<K>>,
    /// Identifier of the tracked touch; `None` once invalidated or ended.
    pub(crate) active_touch: Option<TouchId>,
    /// Composed path captured at `touchstart`, consumed at `touchend`.
    pub(crate) pending_touch_path: Option<TargetPath<K>>,
    /// One-shot suppression: the target of the last touch tap, armed until
    /// the next `mouseup` consumes it.
    pub(crate) last_tap_target: Option<K>,
    on_tapstart: Option<GestureHandler<K>>,
    on_tap: Option<GestureHandler<K>>,
    on_tapend: Option<GestureHandler<K>>,
}

impl<K, P> core::fmt::Debug for TapRecognizer<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TapRecognizer")
            .field("quirks", &self.quirks)
            .field("enabled", &self.enabled)
            .field("active_touch", &self.active_touch)
            .finish_non_exhaustive()
    }
}

impl<K, P> TapRecognizer<K, P>
where
    K: Clone + PartialEq,
    P: Platform<K>,
{
    /// Installs the behavior, claiming whatever gesture kinds the registry
    /// still has unclaimed.
    ///
    /// An installation granted nothing is valid and silently dispatches
    /// nothing; its `on_*` methods still consume records without effect.
    pub fn install(registry: &mut CapabilityRegistry, platform: P, quirks: EngineQuirks) -> Self {
        let enabled = registry.claim(GestureSet::all());
        Self {
            platform,
            quirks,
            enabled,
            pending_mouse_path: None,
            active_touch: None,
            pending_touch_path: None,
            last_tap_target: None,
            on_tapstart: None,
            on_tap: None,
            on_tapend: None,
        }
    }

    /// The gesture kinds this installation was granted.
    #[must_use]
    pub fn enabled(&self) -> GestureSet {
        self.enabled
    }

    /// Returns `true` if this installation was granted at least one kind.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.enabled.is_empty()
    }

    /// Returns `true` while a live touch is being tracked.
    #[must_use]
    pub fn has_active_touch(&self) -> bool {
        self.active_touch.is_some()
    }

    /// Sets (or clears) the root-level `tapstart` handler.
    pub fn set_on_tapstart(&mut self, handler: Option<GestureHandler<K>>) {
        self.on_tapstart = handler;
    }

    /// Sets (or clears) the root-level `tap` handler.
    pub fn set_on_tap(&mut self, handler: Option<GestureHandler<K>>) {
        self.on_tap = handler;
    }

    /// Sets (or clears) the root-level `tapend` handler.
    pub fn set_on_tapend(&mut self, handler: Option<GestureHandler<K>>) {
        self.on_tapend = handler;
    }

    fn slot_mut(&mut self, kind: GestureKind) -> &mut Option<GestureHandler<K>> {
        match kind {
            GestureKind::TapStart => &mut self.on_tapstart,
            GestureKind::Tap => &mut self.on_tap,
            GestureKind::TapEnd => &mut self.on_tapend,
        }
    }

    /// Dispatches one gesture if this installation owns its kind.
    ///
    /// Returns whether the default was prevented, so the calling tracker
    /// can cancel the originating native record.
    pub(crate) fn dispatch_gesture<S: TapSink<K>>(
        &mut self,
        kind: GestureKind,
        target: &K,
        path: &TargetPath<K>,
        point: &SourcePoint,
        sink: &mut S,
    ) -> bool {
        if !self.enabled.contains(kind.into()) {
            return false;
        }
        let DispatchOutcome {
            mut event,
            completed,
        } = dispatch(kind, target, path, point, sink);
        if completed {
            if let Some(handler) = self.slot_mut(kind) {
                handler(&mut event);
            }
        }
        event.default_prevented()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ClickInput, MouseInput, TouchInput, TouchPoint};
    use crate::testutil::{TestPlatform, install, path_to, recorder};
    use alloc::vec::Vec;
    use taproot_event::{Modifiers, Phase, PositionSnapshot};

    // P7: a second installation against the same registry claims nothing,
    // so a single physical tap still yields exactly one tap.
    #[test]
    fn double_install_yields_single_tap() {
        let mut registry = CapabilityRegistry::new();
        let mut first = install(&mut registry);
        let mut second =
            TapRecognizer::install(&mut registry, TestPlatform, EngineQuirks::default());
        assert!(first.is_active());
        assert!(!second.is_active());

        let (log, mut sink) = recorder();
        let path = path_to(&[5, 1]);
        for recognizer in [&mut first, &mut second] {
            let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
            recognizer.on_mouse_down(&mut down, &mut sink);
        }
        for recognizer in [&mut first, &mut second] {
            let mut up = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
            recognizer.on_mouse_up(&mut up, &mut sink);
        }

        let events: Vec<_> = log.borrow().clone();
        let taps = events
            .iter()
            .filter(|(kind, _, _)| *kind == GestureKind::Tap)
            .count();
        assert_eq!(taps, 1);
        // The full stream is one installation's worth, nothing doubled.
        assert_eq!(events.len(), 3);
    }

    // P2: a touch tap followed by the browser's synthetic mouse pair for
    // the same action yields exactly one tap total.
    #[test]
    fn synthetic_mouse_after_touch_tap_is_suppressed() {
        let mut registry = CapabilityRegistry::new();
        let mut recognizer = install(&mut registry);
        let (events, mut sink) = recorder();
        let path = path_to(&[5, 1]);
        let touch = TouchPoint::new(1, PositionSnapshot::ZERO);

        let mut start = TouchInput::new(path.clone(), [touch]);
        recognizer.on_touch_start(&mut start, &mut sink);
        let mut end = TouchInput::new(path.clone(), [touch]);
        recognizer.on_touch_end(&mut end, &mut sink);

        // Synthetic mouse sequence for the same physical action.
        let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_down(&mut down, &mut sink);
        let mut up = MouseInput::new(path, PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_up(&mut up, &mut sink);

        let taps = events
            .borrow()
            .iter()
            .filter(|(kind, _, _)| *kind == GestureKind::Tap)
            .count();
        assert_eq!(taps, 1, "touch tap and synthetic mouse must not both fire");
    }

    // The suppression flag is one-shot: a real mouse tap after the
    // suppressed synthetic pair fires normally.
    #[test]
    fn suppression_is_consumed_by_one_mouse_up() {
        let mut registry = CapabilityRegistry::new();
        let mut recognizer = install(&mut registry);
        let (events, mut sink) = recorder();
        let path = path_to(&[5, 1]);
        let touch = TouchPoint::new(1, PositionSnapshot::ZERO);

        let mut start = TouchInput::new(path.clone(), [touch]);
        recognizer.on_touch_start(&mut start, &mut sink);
        let mut end = TouchInput::new(path.clone(), [touch]);
        recognizer.on_touch_end(&mut end, &mut sink);

        let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_down(&mut down, &mut sink);
        let mut up = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_up(&mut up, &mut sink);

        let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_down(&mut down, &mut sink);
        let mut up = MouseInput::new(path, PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_up(&mut up, &mut sink);

        let taps = events
            .borrow()
            .iter()
            .filter(|(kind, _, _)| *kind == GestureKind::Tap)
            .count();
        assert_eq!(taps, 2, "one touch tap, then one ordinary mouse tap");
    }

    // P6: preventing the synthetic tap's default cancels the native record.
    #[test]
    fn cancelation_propagates_to_native_records() {
        let mut registry = CapabilityRegistry::new();
        let mut recognizer = install(&mut registry);
        let path = path_to(&[5, 1]);

        let mut cancel_taps = |phase: Phase, _node: &u32, ev: &mut TapEvent<u32>| {
            if phase == Phase::Target && ev.kind() == GestureKind::Tap {
                ev.prevent_default();
            }
        };

        let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_down(&mut down, &mut cancel_taps);
        assert!(!down.default_prevented());

        let mut up = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_up(&mut up, &mut cancel_taps);
        assert!(up.default_prevented(), "tap cancelation must reach mouseup");

        let touch = TouchPoint::new(3, PositionSnapshot::ZERO);
        let mut start = TouchInput::new(path.clone(), [touch]);
        recognizer.on_touch_start(&mut start, &mut cancel_taps);
        let mut end = TouchInput::new(path.clone(), [touch]);
        recognizer.on_touch_end(&mut end, &mut cancel_taps);
        assert!(end.default_prevented(), "tap cancelation must reach touchend");

        // Clear the suppression left by the touch tap before the click.
        let mut up = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_up(&mut up, &mut cancel_taps);

        let mut click = ClickInput::new(path, 0, PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_click(&mut click, &mut cancel_taps);
        assert!(click.default_prevented(), "tap cancelation must reach click");
    }

    // Root-level on-event handler slots observe completed dispatches.
    #[test]
    fn handler_slots_fire_after_propagation() {
        let mut registry = CapabilityRegistry::new();
        let mut recognizer = install(&mut registry);
        let path = path_to(&[5, 1]);

        let seen = alloc::rc::Rc::new(core::cell::RefCell::new(Vec::new()));
        let seen_by_handler = seen.clone();
        recognizer.set_on_tap(Some(Box::new(move |ev: &mut TapEvent<u32>| {
            seen_by_handler.borrow_mut().push(*ev.target());
        })));

        let mut noop = |_: Phase, _: &u32, _: &mut TapEvent<u32>| {};
        let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_down(&mut down, &mut noop);
        let mut up = MouseInput::new(path, PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_up(&mut up, &mut noop);

        assert_eq!(*seen.borrow(), [5]);
    }

    // A stopped propagation never reaches the root-level slots.
    #[test]
    fn handler_slots_skip_stopped_propagation() {
        let mut registry = CapabilityRegistry::new();
        let mut recognizer = install(&mut registry);
        let path = path_to(&[5, 1]);

        let fired = alloc::rc::Rc::new(core::cell::Cell::new(false));
        let fired_by_handler = fired.clone();
        recognizer.set_on_tap(Some(Box::new(move |_: &mut TapEvent<u32>| {
            fired_by_handler.set(true);
        })));

        let mut stopping = |_: Phase, _: &u32, ev: &mut TapEvent<u32>| {
            if ev.kind() == GestureKind::Tap {
                ev.stop_propagation();
            }
        };
        let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_down(&mut down, &mut stopping);
        let mut up = MouseInput::new(path, PositionSnapshot::ZERO, Modifiers::empty());
        recognizer.on_mouse_up(&mut up, &mut stopping);

        assert!(!fired.get());
    }
}
