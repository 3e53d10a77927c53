// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard activation: zero-`detail` clicks and `Enter`/`Space` on
//! role-button elements.

use taproot_event::{GestureKind, TapSink};

use crate::input::{ClickInput, KeyCode, KeyInput};
use crate::platform::{NATIVELY_ACTIVATABLE, Platform, ROLE_BUTTON};
use crate::recognizer::TapRecognizer;

impl<K, P> TapRecognizer<K, P>
where
    K: Clone + PartialEq,
    P: Platform<K>,
{
    /// Handles a native `click`.
    ///
    /// Only zero-`detail` clicks (the platform convention for keyboard and
    /// assistive-technology activation) produce a `tap` here; pointer
    /// clicks already produced theirs through the mouse or touch channel.
    /// On engines where zero `detail` also describes certain pointer-device
    /// clicks ([`EngineQuirks`](crate::EngineQuirks)), the signal is
    /// unreliable and ignored outright.
    pub fn on_click<S: TapSink<K>>(&mut self, input: &mut ClickInput<K>, sink: &mut S) {
        if input.detail() != 0 || self.quirks.zero_detail_clicks_unreliable {
            return;
        }
        let path = input.path().clone();
        let Some(target) = path.innermost().cloned() else {
            return;
        };
        let point = input.point();
        if self.dispatch_gesture(GestureKind::Tap, &target, &path, &point, sink) {
            input.prevent_default();
        }
    }

    /// Handles a native `keyup`.
    ///
    /// `Enter` or `Space` released on an element that exposes an accessible
    /// button role but is not natively activatable gets manual activation:
    /// the key record's default is prevented and a simulated zero-`detail`
    /// click carrying the key record's modifiers is routed through
    /// [`on_click`](Self::on_click), yielding the `tap`. Natively
    /// activatable elements are left alone; the host's own activation
    /// produces the click that reaches [`on_click`](Self::on_click).
    pub fn on_key_up<S: TapSink<K>>(&mut self, input: &mut KeyInput<K>, sink: &mut S) {
        if !matches!(input.key(), KeyCode::Enter | KeyCode::Space) {
            return;
        }
        let needs_activation = match input.path().innermost() {
            Some(target) => {
                self.platform.matches(target, ROLE_BUTTON)
                    && !self.platform.matches(target, NATIVELY_ACTIVATABLE)
            }
            None => false,
        };
        if !needs_activation {
            return;
        }
        input.prevent_default();
        let mut click = ClickInput::simulated(input.path().clone(), input.modifiers());
        self.on_click(&mut click, sink);
    }
}
