// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Taproot Gesture: one tap vocabulary over three input channels.
//!
//! ## Overview
//!
//! Hosts expose mouse, touch, and keyboard input as independent channels
//! with different timing, coordinate reporting, and activation semantics;
//! devices that synthesize mouse events after a touch even report the same
//! physical action twice. This crate reconciles all of it into a single
//! gesture vocabulary: `tapstart` when a candidate press begins, `tapend`
//! when it ends, and at most one `tap` per discrete physical activation,
//! whichever channel carried it.
//!
//! A [`TapRecognizer`] is installed once per root target. The host forwards
//! native input records to it (observed in the capture phase, before any
//! application listener, so composed paths are pristine) and supplies a
//! [`TapSink`](taproot_event::TapSink) that delivers the synthesized events
//! to listeners:
//!
//! ```
//! use taproot_event::{Phase, PositionSnapshot, Modifiers, TapEvent};
//! use taproot_gesture::{
//!     CapabilityRegistry, EngineQuirks, MouseInput, Platform, TapRecognizer,
//! };
//! use taproot_path::TargetPath;
//!
//! // Host-side capabilities: selector matching and element classification.
//! struct Dom;
//! impl Platform<u32> for Dom {
//!     fn matches(&self, _node: &u32, _selector: &str) -> bool {
//!         false
//!     }
//!     fn is_element(&self, node: &u32) -> bool {
//!         *node != 0
//!     }
//! }
//!
//! let mut registry = CapabilityRegistry::new();
//! let mut recognizer = TapRecognizer::install(&mut registry, Dom, EngineQuirks::default());
//!
//! let mut taps = 0;
//! let mut sink = |phase: Phase, _node: &u32, ev: &mut TapEvent<u32>| {
//!     if phase == Phase::Target && ev.kind() == taproot_event::GestureKind::Tap {
//!         taps += 1;
//!     }
//! };
//!
//! let path: TargetPath<u32> = TargetPath::from_iter([7, 1, 0]);
//! let mut down = MouseInput::new(path.clone(), PositionSnapshot::ZERO, Modifiers::empty());
//! let mut up = MouseInput::new(path, PositionSnapshot::ZERO, Modifiers::empty());
//! recognizer.on_mouse_down(&mut down, &mut sink);
//! recognizer.on_mouse_up(&mut up, &mut sink);
//! drop(sink);
//! assert_eq!(taps, 1);
//! ```
//!
//! ## Channels
//!
//! - **Mouse**: `mousedown` captures the composed path and opens the
//!   bracket; `mouseup` closes it and reconciles both paths to locate the
//!   shared container the tap lands on. Press on one element, release on an
//!   unrelated one, and no tap fires.
//! - **Touch**: a single touch identifier is tracked per recognizer; any
//!   `touchmove` cancels tap eligibility (mirroring native
//!   click-cancel-on-scroll), and a completed touch tap arms a one-shot
//!   suppression of the synthetic mouse sequence browsers emit afterwards.
//! - **Keyboard**: zero-`detail` clicks (the platform convention for
//!   keyboard and assistive-technology activation) yield taps directly;
//!   `Enter`/`Space` on elements with an accessible button role that are
//!   not natively activatable are activated by a simulated click.
//!
//! ## Capability negotiation
//!
//! Loading the behavior more than once must not stack tap streams. Each
//! installation claims the gesture kinds still unclaimed in the shared
//! [`CapabilityRegistry`] and dispatches only those; an installation that
//! was granted nothing is a silent no-op.
//!
//! ## Cancelation
//!
//! Canceling a synthesized event cancels the originating native record:
//! every tracker propagates `prevent_default` backward, synchronously,
//! before the native record finishes dispatching.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod input;
mod keyboard;
mod mouse;
mod platform;
mod recognizer;
mod registry;
#[cfg(test)]
mod testutil;
mod touch;

pub use input::{ClickInput, KeyCode, KeyInput, MouseInput, TouchId, TouchInput, TouchPoint};
pub use platform::{EngineQuirks, NATIVELY_ACTIVATABLE, Platform, ROLE_BUTTON};
pub use recognizer::{GestureHandler, TapRecognizer};
pub use registry::{CapabilityRegistry, GestureSet};
