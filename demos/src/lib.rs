// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Taproot crates; see the `examples/` directory.
