// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Taproot Lane: track/lane hit-testing arithmetic.
//!
//! A [`LaneModel`] describes a dense strip of uniform *lanes* along one
//! axis (columns of a board, rows of a timeline), separated by an optional
//! gutter. It answers the two questions laned layouts ask during input
//! handling: which lane contains a given offset, and where does a lane sit.
//!
//! The model is pure arithmetic over a caller-chosen 1D coordinate space
//! (typically logical pixels). Every query is total: offsets outside the
//! strip clamp to the nearest edge lane, and out-of-range indices clamp to
//! the last lane. Offsets falling inside a gutter belong to the lane the
//! gutter follows.
//!
//! ```
//! use taproot_lane::LaneModel;
//!
//! // Four 100px lanes with 10px gutters.
//! let lanes = LaneModel::new(4, 100.0, 10.0);
//!
//! assert_eq!(lanes.lane_at_offset(0.0), 0);
//! assert_eq!(lanes.lane_at_offset(105.0), 0); // in the first gutter
//! assert_eq!(lanes.lane_at_offset(110.0), 1);
//! assert_eq!(lanes.lane_at_offset(1e9), 3); // clamped
//! assert_eq!(lanes.lane_origin(2), 220.0);
//! ```
//!
//! This crate is `no_std`; it performs no allocation.

#![no_std]

use kurbo::Rect;

/// Orientation of a laned strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LaneAxis {
    /// Lanes advance along x; each lane spans the strip's height.
    Horizontal,
    /// Lanes advance along y; each lane spans the strip's width.
    Vertical,
}

/// A dense strip of uniform lanes with an optional gutter between them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneModel {
    lane_count: usize,
    lane_extent: f64,
    gutter: f64,
}

impl LaneModel {
    /// Creates a model of `lane_count` lanes of uniform `lane_extent`,
    /// separated by `gutter`.
    ///
    /// Negative extents and gutters clamp to `0.0`; callers are expected to
    /// keep values finite.
    #[must_use]
    pub fn new(lane_count: usize, lane_extent: f64, gutter: f64) -> Self {
        Self {
            lane_count,
            lane_extent: lane_extent.max(0.0),
            gutter: gutter.max(0.0),
        }
    }

    /// The number of lanes.
    #[must_use]
    pub const fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// The extent of a single lane along the axis.
    #[must_use]
    pub const fn lane_extent(&self) -> f64 {
        self.lane_extent
    }

    /// The gutter between adjacent lanes.
    #[must_use]
    pub const fn gutter(&self) -> f64 {
        self.gutter
    }

    /// Returns `true` if the strip has no lanes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lane_count == 0
    }

    /// Distance from one lane's start to the next lane's start.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.lane_extent + self.gutter
    }

    /// Total extent of the strip: all lanes plus interior gutters. The
    /// trailing edge has no gutter.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        if self.lane_count == 0 {
            return 0.0;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Lane counts are small; f64 holds them exactly."
        )]
        let count = self.lane_count as f64;
        count * self.lane_extent + (count - 1.0) * self.gutter
    }

    /// The lane containing `offset`, clamped to the strip.
    ///
    /// Offsets before the strip resolve to lane `0`; offsets at or past the
    /// end resolve to the last lane. An offset inside a gutter belongs to
    /// the lane preceding it. An empty strip resolves to `0`.
    #[must_use]
    pub fn lane_at_offset(&self, offset: f64) -> usize {
        if self.lane_count == 0 || offset <= 0.0 {
            return 0;
        }
        let pitch = self.pitch();
        if pitch <= 0.0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Division of clamped non-negative finite values; the quotient is clamped below."
        )]
        let lane = (offset / pitch) as usize;
        lane.min(self.lane_count - 1)
    }

    /// The starting offset of `lane`, clamped to the last lane.
    #[must_use]
    pub fn lane_origin(&self, lane: usize) -> f64 {
        if self.lane_count == 0 {
            return 0.0;
        }
        let clamped = lane.min(self.lane_count - 1);
        #[allow(
            clippy::cast_precision_loss,
            reason = "Lane counts are small; f64 holds them exactly."
        )]
        let index = clamped as f64;
        index * self.pitch()
    }

    /// The `[start, end)` span of `lane` along the axis, excluding its
    /// trailing gutter.
    #[must_use]
    pub fn lane_span(&self, lane: usize) -> (f64, f64) {
        let origin = self.lane_origin(lane);
        (origin, origin + self.lane_extent)
    }

    /// The rectangle of `lane`, given the strip's position and extent on
    /// the cross axis.
    #[must_use]
    pub fn lane_rect(&self, lane: usize, axis: LaneAxis, cross_origin: f64, cross_extent: f64) -> Rect {
        let (start, end) = self.lane_span(lane);
        match axis {
            LaneAxis::Horizontal => {
                Rect::new(start, cross_origin, end, cross_origin + cross_extent)
            }
            LaneAxis::Vertical => Rect::new(cross_origin, start, cross_origin + cross_extent, end),
        }
    }
}
