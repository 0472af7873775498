// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal incremental chart rendering core.
//!
//! This crate holds the shared vocabulary of the rendering pipeline:
//! - **Records** are normalized observations with stable [`Key`] identity.
//! - **Layout frames** are complete, keyed geometric descriptions of one render pass.
//! - **The scene** retains the last committed geometry per key and diffs consecutive
//!   frames into enter/update/exit transitions.
//!
//! Layout computation, interaction state, and any actual drawing live in downstream
//! crates; everything here is renderer-agnostic data.

#![no_std]

extern crate alloc;

mod dataset;
mod frame;
mod key;
mod record;
mod scene;
mod shape;
pub mod z_order;

pub use dataset::Dataset;
pub use frame::{FrameTag, LayoutFrame};
pub use key::Key;
pub use record::Record;
pub use scene::{SceneState, ShapeDiff};
pub use shape::{PathShape, PointShape, RectShape, Shape, TextAnchor, TextShape};
