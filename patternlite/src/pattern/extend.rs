// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Extend steps and their enumeration
//!
//! An [`ExtendStep`] proposes one new vertex of a target type, attached to
//! the existing pattern through one or more [`ExtendEdge`]s. The enumerator
//! collects, per target type, every edge the schema allows between an
//! existing vertex and the new one, then proposes every non-empty subset of
//! those edges. Partially connected steps are kept on purpose: a cheaper
//! expansion followed by a filter can beat the fully connected one.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::config::ExtendConfig;
use crate::error::{PatternError, PatternResult};
use crate::pattern::pattern::Pattern;
use crate::schema::{EdgeTypeId, GraphSchema, VertexTypeId};

/// Direction of an extend edge, seen from the existing vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PatternDirection {
    /// existing vertex -> new vertex
    Out,
    /// new vertex -> existing vertex
    In,
}

impl PatternDirection {
    pub fn reverse(&self) -> PatternDirection {
        match self {
            PatternDirection::Out => PatternDirection::In,
            PatternDirection::In => PatternDirection::Out,
        }
    }
}

/// A proposed edge between the existing vertex of rank `src_rank` and the
/// vertex an [`ExtendStep`] adds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExtendEdge {
    src_rank: usize,
    edge_type: EdgeTypeId,
    direction: PatternDirection,
}

impl ExtendEdge {
    pub fn new(src_rank: usize, edge_type: EdgeTypeId, direction: PatternDirection) -> Self {
        ExtendEdge {
            src_rank,
            edge_type,
            direction,
        }
    }

    pub fn src_rank(&self) -> usize {
        self.src_rank
    }

    pub fn edge_type(&self) -> EdgeTypeId {
        self.edge_type
    }

    pub fn direction(&self) -> PatternDirection {
        self.direction
    }
}

impl fmt::Display for ExtendEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            PatternDirection::Out => write!(f, "#{}-{}->new", self.src_rank, self.edge_type),
            PatternDirection::In => write!(f, "new-{}->#{}", self.edge_type, self.src_rank),
        }
    }
}

/// One new vertex of `target_type` plus the edges that attach it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendStep {
    target_type: VertexTypeId,
    extend_edges: Vec<ExtendEdge>,
}

impl ExtendStep {
    pub fn new(target_type: VertexTypeId, extend_edges: Vec<ExtendEdge>) -> PatternResult<Self> {
        if extend_edges.is_empty() {
            return Err(PatternError::EmptyExtendStep(target_type));
        }
        Ok(ExtendStep {
            target_type,
            extend_edges,
        })
    }

    pub fn target_type(&self) -> VertexTypeId {
        self.target_type
    }

    pub fn extend_edges(&self) -> &[ExtendEdge] {
        &self.extend_edges
    }

    pub fn len(&self) -> usize {
        self.extend_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extend_edges.is_empty()
    }

    /// Whether two extend edges would become parallel edges in the new
    /// pattern (same existing vertex, same direction)
    pub fn has_parallel_edges(&self) -> bool {
        let mut seen = BTreeSet::new();
        !self
            .extend_edges
            .iter()
            .all(|edge| seen.insert((edge.src_rank, edge.direction)))
    }
}

impl fmt::Display for ExtendStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<String> = self.extend_edges.iter().map(|e| e.to_string()).collect();
        write!(f, "ExtendStep(target={}; {})", self.target_type, edges.join(", "))
    }
}

/// Every extend step of `pattern` the schema allows, grouped by target type
/// in ascending order, subsets by ascending size
pub(crate) fn enumerate_extend_steps<S>(
    pattern: &Pattern,
    schema: &S,
    config: &ExtendConfig,
) -> Vec<ExtendStep>
where
    S: GraphSchema + ?Sized,
{
    if let Some(limit) = config.max_pattern_vertices {
        if pattern.vertex_count() >= limit {
            log::debug!(
                "Pattern already holds {} vertices (limit {}), no extend steps",
                pattern.vertex_count(),
                limit
            );
            return Vec::new();
        }
    }

    let targets: BTreeSet<VertexTypeId> = schema.vertex_types().into_iter().collect();
    let mut candidates: BTreeMap<VertexTypeId, Vec<ExtendEdge>> = BTreeMap::new();

    for target in targets {
        if let Some(limit) = config.same_type_vertex_limit {
            let present = pattern.vertices().filter(|v| v.has_type(target)).count();
            if present >= limit {
                continue;
            }
        }

        for vertex in pattern.vertices() {
            for &vertex_type in vertex.vertex_type_ids() {
                let outgoing = schema.edge_types(vertex_type, target);
                let incoming = schema.edge_types(target, vertex_type);

                // TODO: settle whether a self-paired type seen from both scans
                // should produce one extend edge or two; both are kept for now.
                for edge_type in outgoing.iter().filter(|t| incoming.contains(*t)) {
                    log::debug!(
                        "Self-paired edge type {} reaches new vertex from v{} in both directions",
                        edge_type,
                        vertex.id()
                    );
                }

                let edges = candidates.entry(target).or_default();
                edges.extend(
                    outgoing
                        .into_iter()
                        .map(|edge_type| ExtendEdge::new(vertex.id(), edge_type, PatternDirection::Out)),
                );
                edges.extend(
                    incoming
                        .into_iter()
                        .map(|edge_type| ExtendEdge::new(vertex.id(), edge_type, PatternDirection::In)),
                );
            }
        }
    }

    let mut steps = Vec::new();
    for (target, extend_edges) in candidates {
        for subset in non_empty_subsets(&extend_edges, config.max_extend_edges) {
            steps.push(ExtendStep {
                target_type: target,
                extend_edges: subset,
            });
        }
    }
    log::debug!(
        "Enumerated {} extend steps for pattern with {} vertices",
        steps.len(),
        pattern.vertex_count()
    );
    steps
}

/// All non-empty subsets of `items` up to `max_size` members, by ascending
/// size and then in lexicographic index order
pub(crate) fn non_empty_subsets<T: Clone>(items: &[T], max_size: Option<usize>) -> Vec<Vec<T>> {
    let limit = max_size.unwrap_or(items.len()).min(items.len());
    let mut subsets = Vec::new();

    for size in 1..=limit {
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            subsets.push(indices.iter().map(|&i| items[i].clone()).collect());

            let mut advanced = false;
            for slot in (0..size).rev() {
                if indices[slot] < items.len() - size + slot {
                    indices[slot] += 1;
                    for next in slot + 1..size {
                        indices[next] = indices[next - 1] + 1;
                    }
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                break;
            }
        }
    }
    subsets
}
