// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the recognizer depends on but does not implement.

/// Selector for elements the host activates natively on Enter/Space, which
/// must not be activated a second time by the keyboard tracker.
pub const NATIVELY_ACTIVATABLE: &str = "button, a, input[type=button], input[type=submit]";

/// Selector for elements exposing an accessible button role without native
/// button behavior.
pub const ROLE_BUTTON: &str = "[role=button]";

/// Capabilities a host supplies to a recognizer.
///
/// `K` is the host's node key, the same key type its composed paths carry.
/// Both operations are pure queries; the recognizer never mutates the host
/// through this trait.
pub trait Platform<K> {
    /// Returns whether `node` matches `selector`.
    ///
    /// Selectors are opaque to the recognizer; it only ever passes
    /// [`NATIVELY_ACTIVATABLE`] and [`ROLE_BUTTON`]. A host without selector
    /// support can match those two by any equivalent means.
    fn matches(&self, node: &K, selector: &str) -> bool;

    /// Returns whether `node` is a genuine element, as opposed to a
    /// document- or window-like container that appears on composed paths
    /// but cannot be a tap target.
    fn is_element(&self, node: &K) -> bool;
}

/// Engine-specific quirks, resolved once by the host at construction time.
///
/// The recognizer never inspects platform identity itself; whatever
/// user-agent or feature detection produces these flags happens outside.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineQuirks {
    /// The engine reports some pointer-device clicks with a zero `detail`,
    /// making zero-`detail` unusable as a keyboard-activation signal
    /// (observed on legacy Trident). When set, the click tracker ignores
    /// the signal entirely.
    pub zero_detail_clicks_unreliable: bool,
}
