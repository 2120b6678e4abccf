// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! PatternLite - pattern graphs for cost-based GQL planning
//!
//! PatternLite is the pattern model underneath a cost-based optimizer for
//! graph `MATCH` queries. A search driver grows query patterns one vertex at
//! a time and memoizes what it has already explored; this crate provides the
//! pieces it needs to do that:
//!
//! - **Pattern Model**: typed pattern vertices and edges, single-type or fuzzy
//!   (label disjunction), owned by a [`Pattern`] container
//! - **Extend Steps**: enumeration of every way to attach one new vertex to a
//!   pattern against a [`GraphSchema`]
//! - **Isomorphism**: structural [`Pattern`] equality up to relabeling
//! - **Ordering**: canonical labeling by color refinement
//!   ([`CanonicalLabeling`]) and a cheap degree ordering ([`GraphOrdering`])
//!
//! # Usage
//!
//! ```ignore
//! let mut schema = SchemaCatalog::new();
//! schema.add_edge_type(EdgeTypeId::new(person, knows, person));
//!
//! let pattern = Pattern::from(PatternVertex::single(0, person));
//! for step in pattern.get_extend_steps(&schema) {
//!     let grown = pattern.extend(&step)?;
//!     let order = CanonicalLabeling::new(&grown);
//! }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod order;
pub mod pattern;
pub mod schema;

pub use config::{ExtendConfig, OrderingStrategy, PatternConfig};
pub use error::{PatternError, PatternResult};
pub use order::{CanonicalLabeling, GraphOrdering, PatternOrder, RefinementStats};
pub use pattern::{
    ElementDetails, ExtendEdge, ExtendStep, PathRange, Pattern, PatternDirection, PatternEdge,
    PatternId, PatternVertex,
};
pub use schema::{EdgeLabelId, EdgeTypeId, GraphSchema, SchemaCatalog, VertexTypeId};

/// PatternLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PatternLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
