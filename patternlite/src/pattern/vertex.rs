// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Pattern vertices: single-type or fuzzy (label disjunction)

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::details::ElementDetails;
use super::PatternId;
use crate::error::{PatternError, PatternResult};
use crate::schema::VertexTypeId;

/// The type constraint of a pattern vertex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum VertexKind {
    /// Exactly one vertex type
    Single(VertexTypeId),
    /// One of several vertex types, sorted ascending and deduplicated
    Fuzzy(Vec<VertexTypeId>),
}

impl VertexKind {
    pub fn type_ids(&self) -> &[VertexTypeId] {
        match self {
            VertexKind::Single(type_id) => std::slice::from_ref(type_id),
            VertexKind::Fuzzy(type_ids) => type_ids,
        }
    }
}

/// One node of a query pattern
///
/// `id` is dense within its pattern and doubles as the vertex rank used by
/// extend steps. `position` starts out equal to `id` and takes part in
/// equality, together with the type ids.
#[derive(Debug, Clone, Serialize)]
pub struct PatternVertex {
    id: PatternId,
    position: usize,
    kind: VertexKind,
    details: ElementDetails,
}

impl PatternVertex {
    pub fn single(id: PatternId, vertex_type: impl Into<VertexTypeId>) -> Self {
        PatternVertex {
            id,
            position: id,
            kind: VertexKind::Single(vertex_type.into()),
            details: ElementDetails::default(),
        }
    }

    pub fn fuzzy<I>(id: PatternId, vertex_types: I) -> PatternResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<VertexTypeId>,
    {
        let mut type_ids: Vec<VertexTypeId> = vertex_types.into_iter().map(Into::into).collect();
        if type_ids.is_empty() {
            return Err(PatternError::EmptyTypeSet(format!("fuzzy vertex {}", id)));
        }
        type_ids.sort_unstable();
        type_ids.dedup();
        Ok(PatternVertex {
            id,
            position: id,
            kind: VertexKind::Fuzzy(type_ids),
            details: ElementDetails::default(),
        })
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn with_details(mut self, details: ElementDetails) -> Self {
        self.details = details;
        self
    }

    pub fn id(&self) -> PatternId {
        self.id
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> &VertexKind {
        &self.kind
    }

    pub fn details(&self) -> &ElementDetails {
        &self.details
    }

    /// Candidate vertex types, ascending
    pub fn vertex_type_ids(&self) -> &[VertexTypeId] {
        self.kind.type_ids()
    }

    /// Whether the label alone identifies the vertex for indexed lookups
    pub fn is_distinct(&self) -> bool {
        match self.kind {
            VertexKind::Single(_) => true,
            VertexKind::Fuzzy(_) => false,
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        !self.is_distinct()
    }

    pub fn has_type(&self, vertex_type: VertexTypeId) -> bool {
        self.vertex_type_ids().contains(&vertex_type)
    }
}

impl PartialEq for PatternVertex {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.vertex_type_ids() == other.vertex_type_ids()
    }
}

impl Eq for PatternVertex {}

impl Hash for PatternVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.vertex_type_ids().hash(state);
    }
}

impl fmt::Display for PatternVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            VertexKind::Single(type_id) => write!(f, "v{}:{}", self.id, type_id),
            VertexKind::Fuzzy(type_ids) => {
                let names: Vec<String> = type_ids.iter().map(|t| t.to_string()).collect();
                write!(f, "v{}:[{}]", self.id, names.join("|"))
            }
        }
    }
}
