// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema view consumed by the extend-step enumerator
//!
//! The planner never owns the graph schema; it only asks which vertex types
//! exist and which edge types connect an ordered pair of vertex types.
//! [`SchemaCatalog`] is the in-memory implementation used by tests and by
//! drivers that load the schema from JSON.

pub mod catalog;
pub mod types;

pub use catalog::SchemaCatalog;
pub use types::{EdgeLabelId, EdgeTypeId, VertexTypeId};

/// Read-only view of the vertex and edge types of a graph schema
///
/// Implementations must stay immutable for the duration of a planning
/// session; the enumerator may be called from several search threads.
pub trait GraphSchema {
    /// All vertex types known to the schema
    fn vertex_types(&self) -> Vec<VertexTypeId>;

    /// Edge types pointing from `src_type` to `dst_type` (possibly empty)
    fn edge_types(&self, src_type: VertexTypeId, dst_type: VertexTypeId) -> Vec<EdgeTypeId>;
}

impl<S: GraphSchema + ?Sized> GraphSchema for &S {
    fn vertex_types(&self) -> Vec<VertexTypeId> {
        (**self).vertex_types()
    }

    fn edge_types(&self, src_type: VertexTypeId, dst_type: VertexTypeId) -> Vec<EdgeTypeId> {
        (**self).edge_types(src_type, dst_type)
    }
}
