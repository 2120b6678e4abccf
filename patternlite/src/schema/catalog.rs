// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory schema catalog
//!
//! Holds the vertex and edge types of one graph schema. Iteration order is
//! sorted, so extend-step enumeration over a catalog is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::{EdgeLabelId, EdgeTypeId, VertexTypeId};
use super::GraphSchema;
use crate::error::PatternResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCatalog {
    vertex_types: BTreeSet<VertexTypeId>,
    #[serde(default)]
    edge_types: BTreeSet<EdgeTypeId>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex type, returns false if it was already known
    pub fn add_vertex_type(&mut self, vertex_type: impl Into<VertexTypeId>) -> bool {
        self.vertex_types.insert(vertex_type.into())
    }

    /// Register an edge type together with both of its endpoint types
    pub fn add_edge_type(&mut self, edge_type: EdgeTypeId) -> bool {
        self.vertex_types.insert(edge_type.src_type);
        self.vertex_types.insert(edge_type.dst_type);
        self.edge_types.insert(edge_type)
    }

    pub fn vertex_type_count(&self) -> usize {
        self.vertex_types.len()
    }

    pub fn edge_type_count(&self) -> usize {
        self.edge_types.len()
    }

    pub fn contains_vertex_type(&self, vertex_type: VertexTypeId) -> bool {
        self.vertex_types.contains(&vertex_type)
    }

    pub fn all_edge_types(&self) -> impl Iterator<Item = &EdgeTypeId> {
        self.edge_types.iter()
    }

    /// Load a catalog from its JSON form
    ///
    /// Endpoint types of every listed edge type are registered even when the
    /// document omits them from `vertex_types`.
    pub fn from_json_str(json: &str) -> PatternResult<Self> {
        let mut catalog: SchemaCatalog = serde_json::from_str(json)?;
        let endpoints: Vec<VertexTypeId> = catalog
            .edge_types
            .iter()
            .flat_map(|edge_type| [edge_type.src_type, edge_type.dst_type])
            .collect();
        catalog.vertex_types.extend(endpoints);
        log::debug!(
            "Loaded schema catalog with {} vertex types and {} edge types",
            catalog.vertex_types.len(),
            catalog.edge_types.len()
        );
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> PatternResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl GraphSchema for SchemaCatalog {
    fn vertex_types(&self) -> Vec<VertexTypeId> {
        self.vertex_types.iter().copied().collect()
    }

    fn edge_types(&self, src_type: VertexTypeId, dst_type: VertexTypeId) -> Vec<EdgeTypeId> {
        let lower = EdgeTypeId {
            src_type,
            dst_type,
            label: EdgeLabelId(u32::MIN),
        };
        let upper = EdgeTypeId {
            src_type,
            dst_type,
            label: EdgeLabelId(u32::MAX),
        };
        self.edge_types.range(lower..=upper).copied().collect()
    }
}
