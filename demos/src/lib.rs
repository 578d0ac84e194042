// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless demos for `understory_reorder`.
//!
//! Run with `cargo run -p understory_reorder_demos --example scripted_drag`.
//! Set `RUST_LOG=understory_reorder=trace` to see every target shift.
