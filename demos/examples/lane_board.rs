// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lane hit-testing with cached lane rectangles.
//!
//! Models a four-column board and resolves pointer offsets to columns,
//! memoizing computed lane rectangles in a bounded cache.

use kurbo::Rect;
use taproot_cache::BoundedCache;
use taproot_lane::{LaneAxis, LaneModel};

fn main() {
    // Four 180px columns with 16px gutters, 600px tall.
    let columns = LaneModel::new(4, 180.0, 16.0);
    let mut rects: BoundedCache<usize, Rect> = BoundedCache::with_capacity(4);

    println!(
        "board: {} columns, total extent {}px",
        columns.lane_count(),
        columns.total_extent()
    );

    for offset in [0.0, 185.0, 200.0, 560.0, 10_000.0] {
        let lane = columns.lane_at_offset(offset);
        let rect = match rects.get(&lane) {
            Some(rect) => *rect,
            None => {
                let rect = columns.lane_rect(lane, LaneAxis::Horizontal, 0.0, 600.0);
                rects.put(lane, rect);
                rect
            }
        };
        println!("offset {offset:>7.1} -> column {lane} ({rect:?})");
    }
}
