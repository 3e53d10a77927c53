// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch core: build a [`TapEvent`] and walk it along the composed path.
//!
//! Delivery follows the conventional three-phase order: capture from the
//! root down to (excluding) the target, then the target itself, then bubble
//! back out to the root. Only the target and its ancestors on the composed
//! path participate; entries below the target (captured when the native
//! event hit a deeper leaf than the resolved gesture target) do not.
//!
//! Propagation control lives on the event payload rather than on a handler
//! return value: a listener calls [`TapEvent::stop_propagation`] and the
//! walk aborts before the next step.

use taproot_path::TargetPath;

use crate::event::{GestureKind, SourcePoint, TapEvent};

/// Delivery phase of a single dispatch step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Root-to-target, excluding the target.
    Capture,
    /// The target itself.
    Target,
    /// Target-to-root, excluding the target.
    Bubble,
}

/// Receiver for dispatched gesture events.
///
/// The sink is the host's listener surface: it is invoked once per
/// propagation step with the node for that step and the event, mutably, so
/// listeners can cancel or stop it. Closures of the matching shape implement
/// the trait directly.
pub trait TapSink<K> {
    /// Delivers one propagation step.
    fn event(&mut self, phase: Phase, node: &K, event: &mut TapEvent<K>);
}

impl<K, F> TapSink<K> for F
where
    F: FnMut(Phase, &K, &mut TapEvent<K>),
{
    fn event(&mut self, phase: Phase, node: &K, event: &mut TapEvent<K>) {
        self(phase, node, event);
    }
}

/// Result of a dispatch: the event in its final state and whether the walk
/// ran to completion (no listener stopped propagation).
#[derive(Debug)]
pub struct DispatchOutcome<K> {
    /// The dispatched event, carrying final cancelation state.
    pub event: TapEvent<K>,
    /// `false` if a listener stopped propagation before the walk finished.
    pub completed: bool,
}

impl<K> DispatchOutcome<K> {
    /// Returns `true` if a listener canceled the event's default action.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.event.default_prevented()
    }
}

/// Builds a [`TapEvent`] of `kind` on `target` and delivers it along `path`.
///
/// The position and modifier snapshots are copied out of `point` here;
/// touch-derived points produce events with an absent modifier snapshot.
/// `target` is located on `path` by key equality; should it not appear there
/// (a degenerate input), the event is delivered as a single target-phase
/// step rather than dropped.
///
/// This operation cannot fail and never retries. Callers are responsible
/// for propagating `default_prevented` back to the originating native
/// record when that record is cancelable.
pub fn dispatch<K, S>(
    kind: GestureKind,
    target: &K,
    path: &TargetPath<K>,
    point: &SourcePoint,
    sink: &mut S,
) -> DispatchOutcome<K>
where
    K: Clone + PartialEq,
    S: TapSink<K>,
{
    let mut event = TapEvent::new(kind, target.clone(), point);

    let Some(pos) = path.iter().position(|k| k == target) else {
        sink.event(Phase::Target, target, &mut event);
        let completed = !event.propagation_stopped();
        return DispatchOutcome { event, completed };
    };

    // Ancestors of the target, innermost first.
    let ancestors = &path.as_slice()[pos + 1..];

    for node in ancestors.iter().rev() {
        sink.event(Phase::Capture, node, &mut event);
        if event.propagation_stopped() {
            return DispatchOutcome {
                event,
                completed: false,
            };
        }
    }

    sink.event(Phase::Target, target, &mut event);
    if event.propagation_stopped() {
        return DispatchOutcome {
            event,
            completed: false,
        };
    }

    for node in ancestors {
        sink.event(Phase::Bubble, node, &mut event);
        if event.propagation_stopped() {
            return DispatchOutcome {
                event,
                completed: false,
            };
        }
    }

    DispatchOutcome {
        event,
        completed: true,
    }
}
