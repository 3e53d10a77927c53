// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse tracker: `mousedown`/`mouseup` pairs to `tapstart`/`tapend`/`tap`.

use taproot_event::{GestureKind, TapSink};

use crate::input::MouseInput;
use crate::platform::Platform;
use crate::recognizer::TapRecognizer;
use crate::registry::GestureSet;

impl<K, P> TapRecognizer<K, P>
where
    K: Clone + PartialEq,
    P: Platform<K>,
{
    /// Handles a native `mousedown`.
    ///
    /// Ignored entirely while a touch tap's suppression is armed or a touch
    /// is being tracked: the mouse channel stands down whenever the touch
    /// channel owns the physical action. Otherwise the composed path is
    /// retained for reconciliation at `mouseup` and `tapstart` fires on the
    /// innermost target.
    pub fn on_mouse_down<S: TapSink<K>>(&mut self, input: &mut MouseInput<K>, sink: &mut S) {
        if self.last_tap_target.is_some() || self.active_touch.is_some() {
            return;
        }
        let path = input.path().clone();
        self.pending_mouse_path = Some(path.clone());
        let Some(target) = path.innermost().cloned() else {
            return;
        };
        let point = input.point();
        if self.dispatch_gesture(GestureKind::TapStart, &target, &path, &point, sink) {
            input.prevent_default();
        }
    }

    /// Handles a native `mouseup`.
    ///
    /// If a touch tap armed the suppression flag, this is the synthetic
    /// mouse release browsers emit for the already-handled touch: consume
    /// the flag and do nothing else. Otherwise `tapend` fires on the
    /// innermost target, and the pending mousedown path is reconciled
    /// against this event's path to locate the shared container the `tap`
    /// lands on. When no shared genuine element exists (a press dragged off
    /// its target), no `tap` fires.
    pub fn on_mouse_up<S: TapSink<K>>(&mut self, input: &mut MouseInput<K>, sink: &mut S) {
        if self.last_tap_target.take().is_some() {
            return;
        }
        let down_path = self.pending_mouse_path.take();
        let path = input.path().clone();
        let point = input.point();

        if let Some(end_target) = path.innermost().cloned() {
            if self.dispatch_gesture(GestureKind::TapEnd, &end_target, &path, &point, sink) {
                input.prevent_default();
            }
        }

        if !self.enabled.contains(GestureSet::TAP) {
            return;
        }
        let Some(down_path) = down_path else {
            return;
        };
        let Some(target) = down_path
            .common_container(&path, |k| self.platform.is_element(k))
            .cloned()
        else {
            return;
        };
        if self.dispatch_gesture(GestureKind::Tap, &target, &path, &point, sink) {
            input.prevent_default();
        }
    }
}
