// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Pattern edges: single-type or fuzzy (label disjunction)

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::details::ElementDetails;
use super::PatternId;
use crate::error::{PatternError, PatternResult};
use crate::schema::EdgeTypeId;

/// The type constraint of a pattern edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    Single(EdgeTypeId),
    /// Parallel relationship types, sorted ascending and deduplicated
    Fuzzy(Vec<EdgeTypeId>),
}

impl EdgeKind {
    pub fn fuzzy<I: IntoIterator<Item = EdgeTypeId>>(edge_types: I) -> PatternResult<Self> {
        let mut type_ids: Vec<EdgeTypeId> = edge_types.into_iter().collect();
        if type_ids.is_empty() {
            return Err(PatternError::EmptyTypeSet("fuzzy edge".to_string()));
        }
        type_ids.sort_unstable();
        type_ids.dedup();
        Ok(EdgeKind::Fuzzy(type_ids))
    }

    pub fn type_ids(&self) -> &[EdgeTypeId] {
        match self {
            EdgeKind::Single(type_id) => std::slice::from_ref(type_id),
            EdgeKind::Fuzzy(type_ids) => type_ids,
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        matches!(self, EdgeKind::Fuzzy(_))
    }
}

impl From<EdgeTypeId> for EdgeKind {
    fn from(edge_type: EdgeTypeId) -> Self {
        EdgeKind::Single(edge_type)
    }
}

/// One arc `src -> dst` of a query pattern
///
/// Endpoints are ids of vertices owned by the same pattern. Equality looks at
/// the edge type ids only, never at the endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PatternEdge {
    id: PatternId,
    src: PatternId,
    dst: PatternId,
    kind: EdgeKind,
    details: ElementDetails,
}

impl PatternEdge {
    pub(crate) fn new(
        id: PatternId,
        src: PatternId,
        dst: PatternId,
        kind: EdgeKind,
        details: ElementDetails,
    ) -> Self {
        PatternEdge {
            id,
            src,
            dst,
            kind,
            details,
        }
    }

    pub fn id(&self) -> PatternId {
        self.id
    }

    pub fn src(&self) -> PatternId {
        self.src
    }

    pub fn dst(&self) -> PatternId {
        self.dst
    }

    pub fn kind(&self) -> &EdgeKind {
        &self.kind
    }

    pub fn details(&self) -> &ElementDetails {
        &self.details
    }

    pub fn edge_type_ids(&self) -> &[EdgeTypeId] {
        self.kind.type_ids()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.kind.is_fuzzy()
    }
}

impl PartialEq for PatternEdge {
    fn eq(&self, other: &Self) -> bool {
        self.edge_type_ids() == other.edge_type_ids()
    }
}

impl Eq for PatternEdge {}

impl Hash for PatternEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edge_type_ids().hash(state);
    }
}

impl fmt::Display for PatternEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<String> = self.edge_type_ids().iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "e{}:v{}->v{}:{}",
            self.id,
            self.src,
            self.dst,
            types.join("|")
        )
    }
}
