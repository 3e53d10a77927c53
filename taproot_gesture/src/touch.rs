// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch tracker: `touchstart`/`touchmove`/`touchend` to
//! `tapstart`/`tapend`/`tap`, tracking a single active touch.

use taproot_event::{GestureKind, TapSink};

use crate::input::TouchInput;
use crate::platform::Platform;
use crate::recognizer::TapRecognizer;
use crate::registry::GestureSet;

impl<K, P> TapRecognizer<K, P>
where
    K: Clone + PartialEq,
    P: Platform<K>,
{
    /// Handles a native `touchstart`.
    ///
    /// The first changed touch becomes the tracked touch; a second
    /// simultaneous touch is invisible until the first ends or moves. The
    /// composed path is retained for reconciliation at `touchend` and
    /// `tapstart` fires on the innermost target, with no modifier snapshot.
    pub fn on_touch_start<S: TapSink<K>>(&mut self, input: &mut TouchInput<K>, sink: &mut S) {
        let Some(touch) = input.changed().first().copied() else {
            return;
        };
        self.active_touch = Some(touch.identifier);
        let path = input.path().clone();
        self.pending_touch_path = Some(path.clone());
        let Some(target) = path.innermost().cloned() else {
            return;
        };
        let point = touch.source_point();
        if self.dispatch_gesture(GestureKind::TapStart, &target, &path, &point, sink) {
            input.prevent_default();
        }
    }

    /// Handles a native `touchmove`.
    ///
    /// Any movement invalidates the tracked touch; no distance or time
    /// threshold applies, mirroring native click-cancel-on-scroll. The
    /// bracket still closes at `touchend`; only the `tap` is forfeited.
    pub fn on_touch_move<S: TapSink<K>>(&mut self, _input: &mut TouchInput<K>, _sink: &mut S) {
        self.active_touch = None;
    }

    /// Handles a native `touchend`.
    ///
    /// The stored touchstart path is reconciled against this event's path
    /// to resolve the touch target (falling back to this event's innermost
    /// entry when no shared genuine element survives). `tapend` fires
    /// there; if the ending touch is still the tracked one (no intervening
    /// move), the suppression flag is armed for the upcoming synthetic
    /// mouse sequence and `tap` fires on the same target.
    ///
    /// The tracked-touch state is reset on every exit path, so malformed
    /// touch data can never leave the tracker stuck mid-gesture.
    pub fn on_touch_end<S: TapSink<K>>(&mut self, input: &mut TouchInput<K>, sink: &mut S) {
        let live = self.active_touch.take();
        let start_path = self.pending_touch_path.take();

        let Some(touch) = input.changed().first().copied() else {
            return;
        };
        let path = input.path().clone();
        let Some(target) = start_path
            .as_ref()
            .and_then(|start| {
                start
                    .common_container(&path, |k| self.platform.is_element(k))
                    .cloned()
            })
            .or_else(|| path.innermost().cloned())
        else {
            return;
        };

        let point = touch.source_point();
        if self.dispatch_gesture(GestureKind::TapEnd, &target, &path, &point, sink) {
            input.prevent_default();
        }

        if live == Some(touch.identifier) && self.enabled.contains(GestureSet::TAP) {
            self.last_tap_target = Some(target.clone());
            if self.dispatch_gesture(GestureKind::Tap, &target, &path, &point, sink) {
                input.prevent_default();
            }
        }
    }
}
