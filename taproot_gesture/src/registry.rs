// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability negotiation between recognizer installations.
//!
//! The behavior may be loaded more than once against the same root (bundled
//! twice, loaded by independent components). Without negotiation every
//! installation would observe the same native events and each dispatch its
//! own tap, a tap storm. The registry is the explicit claim ledger: each
//! gesture kind is claimed exactly once, first installation wins, and later
//! installations receive only what remains.

use taproot_event::GestureKind;

bitflags::bitflags! {
    /// A set of gesture kinds, the capability currency of the registry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GestureSet: u8 {
        /// The `tapstart` gesture.
        const TAP_START = 0b0000_0001;
        /// The `tap` gesture.
        const TAP = 0b0000_0010;
        /// The `tapend` gesture.
        const TAP_END = 0b0000_0100;
    }
}

impl From<GestureKind> for GestureSet {
    fn from(kind: GestureKind) -> Self {
        match kind {
            GestureKind::TapStart => Self::TAP_START,
            GestureKind::Tap => Self::TAP,
            GestureKind::TapEnd => Self::TAP_END,
        }
    }
}

/// Claim ledger for gesture kinds on one root target.
///
/// The host owns one registry per root and passes it to every
/// [`TapRecognizer::install`](crate::TapRecognizer::install) against that
/// root.
#[derive(Clone, Debug, Default)]
pub struct CapabilityRegistry {
    claimed: GestureSet,
}

impl CapabilityRegistry {
    /// Creates a registry with nothing claimed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `wanted`, returning the subset that was still unclaimed.
    ///
    /// Every kind in `wanted` is marked claimed afterwards, granted or not,
    /// so a later installation observes the claim even for kinds the
    /// earlier one was itself denied.
    pub fn claim(&mut self, wanted: GestureSet) -> GestureSet {
        let granted = wanted - self.claimed;
        self.claimed |= wanted;
        granted
    }

    /// The kinds claimed so far.
    #[must_use]
    pub fn claimed(&self) -> GestureSet {
        self.claimed
    }

    /// Returns `true` if `kind` has been claimed.
    #[must_use]
    pub fn is_claimed(&self, kind: GestureKind) -> bool {
        self.claimed.contains(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_claim_wins() {
        let mut registry = CapabilityRegistry::new();
        assert_eq!(registry.claim(GestureSet::all()), GestureSet::all());
        assert_eq!(registry.claim(GestureSet::all()), GestureSet::empty());
    }

    #[test]
    fn kinds_are_claimed_independently() {
        let mut registry = CapabilityRegistry::new();
        assert_eq!(
            registry.claim(GestureSet::TAP),
            GestureSet::TAP,
            "unclaimed kind should be granted"
        );
        let granted = registry.claim(GestureSet::all());
        assert_eq!(granted, GestureSet::TAP_START | GestureSet::TAP_END);
        assert!(registry.is_claimed(GestureKind::Tap));
        assert!(registry.is_claimed(GestureKind::TapStart));
        assert!(registry.is_claimed(GestureKind::TapEnd));
    }
}
