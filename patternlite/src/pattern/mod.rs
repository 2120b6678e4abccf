// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pattern graph model
//!
//! A [`Pattern`] is a typed directed graph describing one fragment of a
//! `MATCH` query. Patterns are grown forward through [`ExtendStep`]s and are
//! otherwise immutable; extending always returns a new pattern.

pub mod details;
pub mod edge;
pub mod extend;
pub mod pattern;
pub mod vertex;

pub use details::{ElementDetails, PathRange};
pub use edge::{EdgeKind, PatternEdge};
pub use extend::{ExtendEdge, ExtendStep, PatternDirection};
pub use pattern::Pattern;
pub use vertex::{PatternVertex, VertexKind};

/// Identifier of a vertex or edge, unique within one pattern
pub type PatternId = usize;
