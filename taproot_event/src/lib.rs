// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Taproot Event: the synthesized tap-event model and its dispatch core.
//!
//! ## Overview
//!
//! This crate owns the payload and the delivery of the synthesized gesture
//! vocabulary. A [`TapEvent`] carries exactly one [`PositionSnapshot`]
//! (page, screen, and client planes, copied verbatim from the originating
//! input at the moment of dispatch) and at most one [`Modifiers`] snapshot:
//! present only when the originating input was mouse-like, absent for
//! touch-derived events, which carry no modifier information of their own.
//!
//! [`dispatch`] is the shared routine every tracker funnels through: it
//! builds the event from a [`SourcePoint`], walks capture → target → bubble
//! over the composed path through a caller-supplied [`TapSink`], and reports
//! whether a listener prevented the default. Callers propagate that
//! cancelation backward to the originating native record, so a consumer can
//! block native behavior (text selection, say) by canceling the synthetic
//! event.
//!
//! ## Propagation
//!
//! Synthesized events always bubble, cross retargeting boundaries (the path
//! the host captured already pierced them), and are cancelable. A listener
//! may call [`TapEvent::stop_propagation`] to abort delivery (later phases
//! are skipped, DOM-style) or [`TapEvent::prevent_default`] to cancel
//! without affecting delivery.
//!
//! ```
//! use taproot_event::{GestureKind, Phase, SourcePoint, PositionSnapshot, TapEvent, dispatch};
//! use taproot_path::TargetPath;
//!
//! let path: TargetPath<u32> = TargetPath::from_iter([2, 1, 0]);
//! let point = SourcePoint::touch(PositionSnapshot::ZERO);
//!
//! let mut seen = Vec::new();
//! let outcome = dispatch(
//!     GestureKind::Tap,
//!     &2,
//!     &path,
//!     &point,
//!     &mut |phase: Phase, node: &u32, _ev: &mut TapEvent<u32>| seen.push((phase, *node)),
//! );
//!
//! assert!(outcome.completed);
//! assert_eq!(seen, [
//!     (Phase::Capture, 0),
//!     (Phase::Capture, 1),
//!     (Phase::Target, 2),
//!     (Phase::Bubble, 1),
//!     (Phase::Bubble, 0),
//! ]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dispatch;
mod event;

pub use dispatch::{DispatchOutcome, Phase, TapSink, dispatch};
pub use event::{GestureKind, Modifiers, PositionSnapshot, SourcePoint, TapEvent};
