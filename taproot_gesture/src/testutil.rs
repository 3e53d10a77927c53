// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test fixtures: a platform over `u32` node keys and an event
//! recorder.
//!
//! Node key conventions used across the tracker tests:
//! - `0` is the document-like root (not a genuine element);
//! - `1..10` are ordinary elements;
//! - `10..20` match [`ROLE_BUTTON`];
//! - `20..30` match [`NATIVELY_ACTIVATABLE`];
//! - `100..` are window-like containers (not genuine elements).

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use kurbo::Point;
use taproot_event::{GestureKind, Phase, PositionSnapshot, TapEvent};
use taproot_path::TargetPath;

use crate::platform::{EngineQuirks, NATIVELY_ACTIVATABLE, Platform, ROLE_BUTTON};
use crate::recognizer::TapRecognizer;
use crate::registry::CapabilityRegistry;

pub(crate) struct TestPlatform;

impl Platform<u32> for TestPlatform {
    fn matches(&self, node: &u32, selector: &str) -> bool {
        match selector {
            ROLE_BUTTON => (10..20).contains(node),
            NATIVELY_ACTIVATABLE => (20..30).contains(node),
            _ => false,
        }
    }

    fn is_element(&self, node: &u32) -> bool {
        *node != 0 && *node < 100
    }
}

/// Installs a recognizer over the test platform with no quirks.
pub(crate) fn install(registry: &mut CapabilityRegistry) -> TapRecognizer<u32, TestPlatform> {
    TapRecognizer::install(registry, TestPlatform, EngineQuirks::default())
}

/// Builds an innermost-first path ending at the document root `0`.
pub(crate) fn path_to(nodes: &[u32]) -> TargetPath<u32> {
    nodes.iter().copied().chain([0]).collect()
}

/// A snapshot with every coordinate plane at `at`.
pub(crate) fn snapshot(at: Point) -> PositionSnapshot {
    PositionSnapshot::new(at, at, at)
}

pub(crate) type EventLog = Rc<RefCell<Vec<(GestureKind, u32, PositionSnapshot)>>>;

/// A sink recording each target-phase delivery as `(kind, target, position)`.
pub(crate) fn recorder() -> (EventLog, impl FnMut(Phase, &u32, &mut TapEvent<u32>)) {
    let log = EventLog::default();
    let sink_log = log.clone();
    let sink = move |phase: Phase, _node: &u32, ev: &mut TapEvent<u32>| {
        if phase == Phase::Target {
            sink_log
                .borrow_mut()
                .push((ev.kind(), *ev.target(), ev.position()));
        }
    };
    (log, sink)
}
