// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Type identifiers shared by the schema view and pattern elements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vertex label in the graph schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexTypeId(pub u32);

/// Identifier of a relationship label, independent of its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeLabelId(pub u32);

/// A `(source label, edge label, destination label)` triple
///
/// Field order matters: the derived ordering groups edge types by their
/// endpoint pair first, which `SchemaCatalog` relies on for range lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeTypeId {
    pub src_type: VertexTypeId,
    pub dst_type: VertexTypeId,
    pub label: EdgeLabelId,
}

impl VertexTypeId {
    pub fn new(id: u32) -> Self {
        VertexTypeId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexTypeId {
    fn from(id: u32) -> Self {
        VertexTypeId(id)
    }
}

impl fmt::Display for VertexTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EdgeLabelId {
    pub fn new(id: u32) -> Self {
        EdgeLabelId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for EdgeLabelId {
    fn from(id: u32) -> Self {
        EdgeLabelId(id)
    }
}

impl fmt::Display for EdgeLabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EdgeTypeId {
    pub fn new(
        src_type: impl Into<VertexTypeId>,
        label: impl Into<EdgeLabelId>,
        dst_type: impl Into<VertexTypeId>,
    ) -> Self {
        EdgeTypeId {
            src_type: src_type.into(),
            dst_type: dst_type.into(),
            label: label.into(),
        }
    }

    pub fn src_type(&self) -> VertexTypeId {
        self.src_type
    }

    pub fn dst_type(&self) -> VertexTypeId {
        self.dst_type
    }

    pub fn label(&self) -> EdgeLabelId {
        self.label
    }

    /// Both endpoints carry the same vertex label
    pub fn is_self_paired(&self) -> bool {
        self.src_type == self.dst_type
    }

    /// Whether this edge type can connect a vertex typed by one of
    /// `src_types` to a vertex typed by one of `dst_types`
    pub fn connects(&self, src_types: &[VertexTypeId], dst_types: &[VertexTypeId]) -> bool {
        src_types.contains(&self.src_type) && dst_types.contains(&self.dst_type)
    }
}

impl fmt::Display for EdgeTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-[{}]->({})", self.src_type, self.label, self.dst_type)
    }
}
