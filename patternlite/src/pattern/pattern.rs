// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pattern container
//!
//! Equality on [`Pattern`] is structural, not by identity:
//!
//! - two simple patterns are equal when they are isomorphic under matching
//!   vertex type ids and edge type ids;
//! - as soon as either side is a multigraph (fuzzy vertices or edges, or
//!   parallel edges), equality falls back to comparing the two graphs as
//!   they are: same vertices by value, same edge multiset between them.
//!   Isomorphism over multigraphs is not attempted.
//!
//! Isomorphism is exponential in the worst case. Search drivers that
//! compare many patterns should key their memo tables on a
//! [`PatternOrder`](crate::order::PatternOrder) first.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::details::ElementDetails;
use super::edge::{EdgeKind, PatternEdge};
use super::extend::{enumerate_extend_steps, ExtendStep, PatternDirection};
use super::vertex::PatternVertex;
use super::PatternId;
use crate::config::ExtendConfig;
use crate::error::{PatternError, PatternResult};
use crate::graph::isomorphism::is_isomorphic_matching;
use crate::graph::DiGraph;
use crate::schema::{EdgeTypeId, GraphSchema, VertexTypeId};

type VertexKey = (usize, Vec<VertexTypeId>);

#[derive(Debug, Clone)]
pub struct Pattern {
    graph: DiGraph<PatternVertex, PatternEdge>,
    /// Slot in the driver's enumeration lattice
    position: Option<usize>,
}

impl Pattern {
    /// Create an empty simple pattern
    pub fn new() -> Self {
        Pattern {
            graph: DiGraph::simple(),
            position: None,
        }
    }

    /// Create an empty pattern that accepts parallel edges
    pub fn new_multi() -> Self {
        Pattern {
            graph: DiGraph::multi(),
            position: None,
        }
    }

    /// Insert a vertex unless an equal one (same types and position) is
    /// already present
    ///
    /// Ids stay dense: the vertex must carry [`next_vertex_id`](Self::next_vertex_id).
    pub fn add_vertex(&mut self, vertex: PatternVertex) -> bool {
        if self.vertices().any(|existing| existing == &vertex) {
            log::warn!("Pattern already holds a vertex equal to {}", vertex);
            return false;
        }
        let id = vertex.id();
        let expected = self.next_vertex_id();
        if id != expected {
            log::warn!(
                "Vertex id {} refused, the next vertex of this pattern must be v{}",
                id,
                expected
            );
            return false;
        }
        let fuzzy = vertex.is_fuzzy();
        if !self.graph.add_vertex(id, vertex) {
            log::warn!("Vertex id {} is already taken in pattern", id);
            return false;
        }
        if fuzzy {
            self.upgrade_to_multi("fuzzy vertex");
        }
        true
    }

    /// Connect two vertices already in the pattern
    ///
    /// Returns `Ok(false)` when the pattern is simple and already holds an
    /// edge `src -> dst`.
    pub fn add_edge(
        &mut self,
        src: PatternId,
        dst: PatternId,
        kind: impl Into<EdgeKind>,
    ) -> PatternResult<bool> {
        self.add_edge_with_details(src, dst, kind, ElementDetails::default())
    }

    pub fn add_edge_with_details(
        &mut self,
        src: PatternId,
        dst: PatternId,
        kind: impl Into<EdgeKind>,
        details: ElementDetails,
    ) -> PatternResult<bool> {
        let kind = kind.into();
        let src_vertex = self.require_vertex(src)?;
        let dst_vertex = self.require_vertex(dst)?;
        for edge_type in kind.type_ids() {
            if !edge_type.connects(src_vertex.vertex_type_ids(), dst_vertex.vertex_type_ids()) {
                log::error!(
                    "Edge type {} cannot connect {} to {}",
                    edge_type,
                    src_vertex,
                    dst_vertex
                );
                return Err(PatternError::IncompatibleEdgeType {
                    edge_type: *edge_type,
                    src_types: src_vertex.vertex_type_ids().to_vec(),
                    dst_types: dst_vertex.vertex_type_ids().to_vec(),
                });
            }
        }

        if kind.is_fuzzy() {
            self.upgrade_to_multi("fuzzy edge");
        }
        let edge = PatternEdge::new(self.next_edge_id(), src, dst, kind, details);
        match self.graph.add_edge(src, dst, edge) {
            Some(_) => Ok(true),
            None => {
                log::warn!("Simple pattern already holds an edge v{} -> v{}", src, dst);
                Ok(false)
            }
        }
    }

    /// A new pattern: this one plus the step's target vertex and edges
    ///
    /// The new vertex takes the next free vertex id, with the same position.
    /// It goes through [`add_vertex`](Self::add_vertex), so a step that would
    /// create a value-equal twin is refused. Existing endpoints are resolved
    /// by rank. `self` is left untouched, and the returned pattern
    /// has no lattice position yet.
    pub fn extend(&self, step: &ExtendStep) -> PatternResult<Pattern> {
        let mut extended = self.clone();
        extended.position = None;
        if step.has_parallel_edges() {
            extended.upgrade_to_multi("parallel extend edges");
        }

        let new_id = self.next_vertex_id();
        if !extended.add_vertex(PatternVertex::single(new_id, step.target_type())) {
            log::error!(
                "Extend step {} would duplicate an existing vertex of pattern {}",
                step,
                self
            );
            return Err(PatternError::DuplicateVertex(new_id));
        }

        for extend_edge in step.extend_edges() {
            let existing = match self.vertex_by_rank(extend_edge.src_rank()) {
                Some(vertex) => vertex.id(),
                None => {
                    log::error!(
                        "Extend edge {} refers to rank {} missing from pattern {}",
                        extend_edge,
                        extend_edge.src_rank(),
                        self
                    );
                    return Err(PatternError::RankNotFound(extend_edge.src_rank()));
                }
            };
            let (src, dst) = match extend_edge.direction() {
                PatternDirection::Out => (existing, new_id),
                PatternDirection::In => (new_id, existing),
            };
            extended.add_edge(src, dst, extend_edge.edge_type())?;
        }
        Ok(extended)
    }

    /// Every structurally distinct way to add one vertex, see
    /// [`extend`](crate::pattern::extend)
    pub fn get_extend_steps<S>(&self, schema: &S) -> Vec<ExtendStep>
    where
        S: GraphSchema + ?Sized,
    {
        enumerate_extend_steps(self, schema, &ExtendConfig::default())
    }

    /// Like [`get_extend_steps`](Self::get_extend_steps), honoring the size
    /// limits of `config`
    pub fn get_extend_steps_with<S>(&self, schema: &S, config: &ExtendConfig) -> Vec<ExtendStep>
    where
        S: GraphSchema + ?Sized,
    {
        enumerate_extend_steps(self, schema, config)
    }

    pub fn vertex(&self, id: PatternId) -> Option<&PatternVertex> {
        self.graph.vertex(id)
    }

    /// Ranks coincide with the ids handed out at construction. Extend steps
    /// address vertices through this lookup only.
    pub fn vertex_by_rank(&self, rank: usize) -> Option<&PatternVertex> {
        self.graph.vertex(rank)
    }

    pub fn edge(&self, id: PatternId) -> Option<&PatternEdge> {
        self.graph.edge(id).map(|entry| entry.weight())
    }

    /// Vertices in ascending id order
    pub fn vertices(&self) -> impl Iterator<Item = &PatternVertex> + '_ {
        self.graph.vertices().map(|(_, vertex)| vertex)
    }

    /// Edges in id order
    pub fn edges(&self) -> impl Iterator<Item = &PatternEdge> + '_ {
        self.graph.edges().map(|(_, entry)| entry.weight())
    }

    pub fn out_edges(&self, vertex: PatternId) -> impl Iterator<Item = &PatternEdge> + '_ {
        self.graph
            .out_edges(vertex)
            .map(|(_, entry)| entry.weight())
    }

    pub fn in_edges(&self, vertex: PatternId) -> impl Iterator<Item = &PatternEdge> + '_ {
        self.graph.in_edges(vertex).map(|(_, entry)| entry.weight())
    }

    pub fn out_degree(&self, vertex: PatternId) -> usize {
        self.graph.out_degree(vertex)
    }

    pub fn in_degree(&self, vertex: PatternId) -> usize {
        self.graph.in_degree(vertex)
    }

    pub fn degree(&self, vertex: PatternId) -> usize {
        self.graph.degree(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.vertex_count() == 0
    }

    /// No parallel edges allowed, so exact isomorphism applies
    pub fn is_simple(&self) -> bool {
        !self.graph.allows_parallel_edges()
    }

    pub fn is_connected(&self) -> bool {
        self.graph.is_weakly_connected()
    }

    /// Id the next added vertex receives
    pub fn next_vertex_id(&self) -> PatternId {
        self.graph.vertex_bound()
    }

    /// Id the next added edge receives
    pub fn next_edge_id(&self) -> PatternId {
        self.graph.edge_count()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = Some(position);
    }

    pub(crate) fn graph(&self) -> &DiGraph<PatternVertex, PatternEdge> {
        &self.graph
    }

    fn require_vertex(&self, id: PatternId) -> PatternResult<&PatternVertex> {
        self.vertex(id).ok_or_else(|| {
            log::error!("Vertex {} not found in pattern {}", id, self);
            PatternError::VertexNotFound(id)
        })
    }

    fn upgrade_to_multi(&mut self, reason: &str) {
        if self.graph.allows_parallel_edges() {
            return;
        }
        log::debug!("Pattern becomes a multigraph: {}", reason);
        self.graph.allow_parallel_edges();
    }

    fn vertex_key(vertex: &PatternVertex) -> VertexKey {
        (vertex.position(), vertex.vertex_type_ids().to_vec())
    }

    fn same_multigraph(&self, other: &Pattern) -> bool {
        self.vertex_keys() == other.vertex_keys() && self.edge_keys() == other.edge_keys()
    }

    fn vertex_keys(&self) -> Vec<VertexKey> {
        let mut keys: Vec<VertexKey> = self.vertices().map(Self::vertex_key).collect();
        keys.sort();
        keys
    }

    fn edge_keys(&self) -> Vec<(Option<VertexKey>, Option<VertexKey>, Vec<EdgeTypeId>)> {
        let mut keys: Vec<_> = self
            .edges()
            .map(|edge| {
                (
                    self.vertex(edge.src()).map(Self::vertex_key),
                    self.vertex(edge.dst()).map(Self::vertex_key),
                    edge.edge_type_ids().to_vec(),
                )
            })
            .collect();
        keys.sort();
        keys
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize a Pattern from a single vertex
impl From<PatternVertex> for Pattern {
    fn from(vertex: PatternVertex) -> Self {
        let mut pattern = Pattern::new();
        pattern.add_vertex(vertex);
        pattern
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        if self.vertex_count() != other.vertex_count() || self.edge_count() != other.edge_count() {
            return false;
        }
        if self.is_simple() && other.is_simple() {
            is_isomorphic_matching(
                &self.graph,
                &other.graph,
                |a, b| a.vertex_type_ids() == b.vertex_type_ids(),
                |a, b| a.edge_type_ids() == b.edge_type_ids(),
            )
        } else {
            self.same_multigraph(other)
        }
    }
}

impl Eq for Pattern {}

/// Hashes only isomorphism invariants, so equal patterns hash alike
impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex_count().hash(state);
        self.edge_count().hash(state);

        let mut vertex_profile: Vec<(&[VertexTypeId], usize, usize)> = self
            .vertices()
            .map(|v| {
                (
                    v.vertex_type_ids(),
                    self.out_degree(v.id()),
                    self.in_degree(v.id()),
                )
            })
            .collect();
        vertex_profile.sort();
        vertex_profile.hash(state);

        let mut edge_profile: Vec<&[EdgeTypeId]> =
            self.edges().map(|e| e.edge_type_ids()).collect();
        edge_profile.sort();
        edge_profile.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices().map(|v| v.to_string()).collect();
        let edges: Vec<String> = self.edges().map(|e| e.to_string()).collect();
        write!(f, "Pattern({}", vertices.join(", "))?;
        if !edges.is_empty() {
            write!(f, "; {}", edges.join(", "))?;
        }
        write!(f, ")")
    }
}
