// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Taproot Path: composed event-target paths.
//!
//! A [`TargetPath`] is the ordered sequence of targets a native event
//! traversed, innermost target first, as reported by a retargeting-aware
//! host (for the DOM this is the event's composed path; other hosts can
//! reconstruct it from a parent chain). The gesture trackers capture a path
//! when a press begins and reconcile it against the path observed when the
//! press ends.
//!
//! ## Reconciliation
//!
//! [`TargetPath::common_container`] resolves where a completed press/release
//! pair should land. Press and release paths may legitimately differ (a
//! mouse drag across siblings, a layout shift mid-press), so the resolver
//! does not demand identical leaves. Instead it aligns both paths at their
//! shared root (ignoring the deeper path's leaf-side excess) and scans from
//! the leaf side outward for the first entry both paths share that the
//! caller classifies as a genuine element. That entry is the shared
//! container; if the scan exhausts the aligned region, there is no common
//! container and the gesture resolves to nothing.
//!
//! ```
//! use taproot_path::TargetPath;
//!
//! // Paths are innermost-first. 0 is a document-like root, not an element.
//! let down: TargetPath<u32> = TargetPath::from_iter([3, 2, 1, 0]);
//! let up: TargetPath<u32> = TargetPath::from_iter([5, 4, 2, 1, 0]);
//!
//! // The press leaf (3) and release leaf (5) differ; 2 is the first entry
//! // the aligned paths share, so the gesture lands on the container.
//! let target = down.common_container(&up, |&k| k != 0);
//! assert_eq!(target, Some(&2));
//! ```
//!
//! Paths are never mutated by reconciliation; alignment is computed over
//! borrowed slices.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use smallvec::SmallVec;

/// Inline capacity for path storage. Typical composed paths (leaf element up
/// to a document-like root) fit without spilling to the heap.
const INLINE_DEPTH: usize = 8;

/// An ordered sequence of event targets, innermost target first.
///
/// `K` is the host's node key: any small clonable handle (a slotmap key, an
/// element id, a reference-counted node). Equality of keys is equality of
/// targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetPath<K> {
    targets: SmallVec<[K; INLINE_DEPTH]>,
}

impl<K> TargetPath<K> {
    /// Creates an empty path.
    ///
    /// An event with no propagation path captures as empty; every operation
    /// on an empty path degrades to "nothing" rather than failing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: SmallVec::new(),
        }
    }

    /// Appends a target on the outer side of the path.
    ///
    /// Hosts build paths from the leaf outward: push the event target first,
    /// then each enclosing target up to the root.
    pub fn push(&mut self, target: K) {
        self.targets.push(target);
    }

    /// Returns the innermost target, if any.
    #[must_use]
    pub fn innermost(&self) -> Option<&K> {
        self.targets.first()
    }

    /// Returns the outermost target (the root side), if any.
    #[must_use]
    pub fn outermost(&self) -> Option<&K> {
        self.targets.last()
    }

    /// Returns the number of targets in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if the path has no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns the targets as a slice, innermost first.
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.targets
    }

    /// Iterates the targets from the innermost outward.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.targets.iter()
    }
}

impl<K: PartialEq> TargetPath<K> {
    /// Length of the root-aligned region shared with `other`.
    ///
    /// Both paths end at the same root when captured on the same installation
    /// target, so alignment keeps each path's root-side tail and ignores the
    /// deeper path's leaf-side excess.
    #[must_use]
    pub fn aligned_len(&self, other: &Self) -> usize {
        self.len().min(other.len())
    }

    /// Resolves the shared container of this (press) path and `other`
    /// (release) path.
    ///
    /// Aligns both paths at the root, then scans the aligned region from the
    /// leaf side outward. The first entry referenced by both paths for which
    /// `is_element` holds is the result. Entries the host does not classify
    /// as genuine elements (document- and window-like containers) are
    /// skipped even when shared, so a press and release that only meet at
    /// the document root resolve to `None`, a valid drag-off-target outcome
    /// rather than an error.
    #[must_use]
    pub fn common_container<'a>(
        &'a self,
        other: &Self,
        mut is_element: impl FnMut(&K) -> bool,
    ) -> Option<&'a K> {
        let len = self.aligned_len(other);
        let a = &self.targets[self.len() - len..];
        let b = &other.as_slice()[other.len() - len..];
        a.iter()
            .zip(b)
            .find(|(x, y)| x == y && is_element(x))
            .map(|(x, _)| x)
    }
}

impl<K> Default for TargetPath<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for TargetPath<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

impl<'a, K> IntoIterator for &'a TargetPath<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    // Node 0 plays the document root; 100+ play window-like containers.
    fn is_element(k: &u32) -> bool {
        *k != 0 && *k < 100
    }

    #[test]
    fn empty_path_resolves_nothing() {
        let a: TargetPath<u32> = TargetPath::new();
        let b: TargetPath<u32> = TargetPath::from_iter([1, 0]);
        assert!(a.innermost().is_none());
        assert_eq!(a.common_container(&b, is_element), None);
        assert_eq!(b.common_container(&a, is_element), None);
    }

    #[test]
    fn identical_paths_resolve_to_the_leaf() {
        let down: TargetPath<u32> = TargetPath::from_iter([3, 2, 1, 0]);
        let up = down.clone();
        assert_eq!(down.common_container(&up, is_element), Some(&3));
    }

    #[test]
    fn sibling_leaves_resolve_to_shared_parent() {
        let down: TargetPath<u32> = TargetPath::from_iter([3, 2, 1, 0]);
        let up: TargetPath<u32> = TargetPath::from_iter([4, 2, 1, 0]);
        assert_eq!(down.common_container(&up, is_element), Some(&2));
    }

    #[test]
    fn deeper_release_path_aligns_at_the_root() {
        // Release happened on a leaf nested one level deeper than the press.
        let down: TargetPath<u32> = TargetPath::from_iter([3, 2, 1, 0]);
        let up: TargetPath<u32> = TargetPath::from_iter([5, 4, 2, 1, 0]);
        assert_eq!(down.common_container(&up, is_element), Some(&2));
        // Resolution is symmetric in what it finds, if not in whose entry
        // is borrowed.
        assert_eq!(up.common_container(&down, is_element), Some(&2));
    }

    #[test]
    fn shared_non_elements_do_not_resolve() {
        // Only the document root (0) and a window-like container (100) are
        // shared: drag-off-target, no container.
        let down: TargetPath<u32> = TargetPath::from_iter([3, 1, 0, 100]);
        let up: TargetPath<u32> = TargetPath::from_iter([4, 2, 0, 100]);
        assert_eq!(down.common_container(&up, is_element), None);
    }

    #[test]
    fn reconciliation_does_not_mutate_paths() {
        let down: TargetPath<u32> = TargetPath::from_iter([3, 2, 1, 0]);
        let up: TargetPath<u32> = TargetPath::from_iter([5, 4, 2, 1, 0]);
        let (down_before, up_before) = (down.clone(), up.clone());
        let _ = down.common_container(&up, is_element);
        assert_eq!(down, down_before);
        assert_eq!(up, up_before);
    }

    #[test]
    fn push_builds_innermost_first() {
        let mut path = TargetPath::new();
        path.push(7_u32);
        path.push(8);
        assert_eq!(path.innermost(), Some(&7));
        assert_eq!(path.outermost(), Some(&8));
        let collected: Vec<u32> = path.iter().copied().collect();
        assert_eq!(collected, [7, 8]);
    }
}
