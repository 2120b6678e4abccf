// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Directed (multi)graph storage used by patterns
//!
//! Vertices live in an arena indexed by caller-chosen dense ids, so lookups
//! by id are O(1) and ids are never reused. Edges are appended and indexed by
//! insertion order. Nothing is ever removed. Each vertex keeps its outgoing
//! and incoming edge lists for degree and adjacency queries.
//!
//! The graph is either *simple* (at most one edge per ordered vertex pair) or
//! *multi* (parallel edges allowed). Self-loops are allowed in both.

pub mod isomorphism;
pub mod refinement;

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub type VertexIndex = usize;
pub type EdgeIndex = usize;

/// Direction of an edge relative to the vertex it is observed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone)]
struct VertexSlot<V> {
    weight: V,
    out_edges: Vec<EdgeIndex>,
    in_edges: Vec<EdgeIndex>,
}

/// An edge together with its endpoints
#[derive(Debug, Clone)]
pub struct EdgeEntry<E> {
    src: VertexIndex,
    dst: VertexIndex,
    weight: E,
}

impl<E> EdgeEntry<E> {
    pub fn src(&self) -> VertexIndex {
        self.src
    }

    pub fn dst(&self) -> VertexIndex {
        self.dst
    }

    pub fn weight(&self) -> &E {
        &self.weight
    }
}

#[derive(Debug, Clone)]
pub struct DiGraph<V, E> {
    vertices: Vec<Option<VertexSlot<V>>>,
    edges: Vec<EdgeEntry<E>>,
    vertex_count: usize,
    allow_parallel_edges: bool,
}

impl<V, E> DiGraph<V, E> {
    /// Create an empty simple digraph
    pub fn simple() -> Self {
        Self::with_parallel_edges(false)
    }

    /// Create an empty multigraph
    pub fn multi() -> Self {
        Self::with_parallel_edges(true)
    }

    fn with_parallel_edges(allow_parallel_edges: bool) -> Self {
        DiGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            vertex_count: 0,
            allow_parallel_edges,
        }
    }

    pub fn allows_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    /// Turn a simple graph into a multigraph. There is no way back.
    pub fn allow_parallel_edges(&mut self) {
        self.allow_parallel_edges = true;
    }

    /// Insert `weight` at `index`, returns false if the slot is taken or
    /// `index` cannot be addressed
    pub fn add_vertex(&mut self, index: VertexIndex, weight: V) -> bool {
        if index >= self.vertices.len() {
            let Some(len) = index.checked_add(1) else {
                return false;
            };
            self.vertices.resize_with(len, || None);
        }
        if self.vertices[index].is_some() {
            return false;
        }
        self.vertices[index] = Some(VertexSlot {
            weight,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        });
        self.vertex_count += 1;
        true
    }

    /// Append an edge `src -> dst`
    ///
    /// Returns `None` when an endpoint is missing, or when the graph is
    /// simple and already holds an edge from `src` to `dst`.
    pub fn add_edge(&mut self, src: VertexIndex, dst: VertexIndex, weight: E) -> Option<EdgeIndex> {
        if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            return None;
        }
        if !self.allow_parallel_edges && self.contains_edge(src, dst) {
            return None;
        }
        let index = self.edges.len();
        self.edges.push(EdgeEntry { src, dst, weight });
        if let Some(slot) = self.vertices[src].as_mut() {
            slot.out_edges.push(index);
        }
        if let Some(slot) = self.vertices[dst].as_mut() {
            slot.in_edges.push(index);
        }
        Some(index)
    }

    pub fn contains_vertex(&self, index: VertexIndex) -> bool {
        matches!(self.vertices.get(index), Some(Some(_)))
    }

    pub fn contains_edge(&self, src: VertexIndex, dst: VertexIndex) -> bool {
        self.edges_connecting(src, dst).next().is_some()
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&V> {
        self.slot(index).map(|slot| &slot.weight)
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&EdgeEntry<E>> {
        self.edges.get(index)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// One past the highest vertex index ever inserted
    pub fn vertex_bound(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in ascending index order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexIndex, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|slot| (index, &slot.weight)))
    }

    pub fn vertex_indices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertices().map(|(index, _)| index)
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &EdgeEntry<E>)> + '_ {
        self.edges.iter().enumerate()
    }

    pub fn out_edges(&self, vertex: VertexIndex) -> impl Iterator<Item = (EdgeIndex, &EdgeEntry<E>)> + '_ {
        self.slot(vertex)
            .map(|slot| slot.out_edges.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&index| (index, &self.edges[index]))
    }

    pub fn in_edges(&self, vertex: VertexIndex) -> impl Iterator<Item = (EdgeIndex, &EdgeEntry<E>)> + '_ {
        self.slot(vertex)
            .map(|slot| slot.in_edges.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&index| (index, &self.edges[index]))
    }

    /// Edges pointing from `src` to `dst`
    pub fn edges_connecting(
        &self,
        src: VertexIndex,
        dst: VertexIndex,
    ) -> impl Iterator<Item = (EdgeIndex, &EdgeEntry<E>)> + '_ {
        self.out_edges(src).filter(move |(_, edge)| edge.dst == dst)
    }

    pub fn out_degree(&self, vertex: VertexIndex) -> usize {
        self.slot(vertex).map_or(0, |slot| slot.out_edges.len())
    }

    pub fn in_degree(&self, vertex: VertexIndex) -> usize {
        self.slot(vertex).map_or(0, |slot| slot.in_edges.len())
    }

    /// Total degree; a self-loop counts twice
    pub fn degree(&self, vertex: VertexIndex) -> usize {
        self.out_degree(vertex) + self.in_degree(vertex)
    }

    /// Whether every vertex is reachable from every other ignoring direction.
    /// The empty graph counts as connected.
    pub fn is_weakly_connected(&self) -> bool {
        let Some(start) = self.vertex_indices().next() else {
            return true;
        };
        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        let mut reached = 1;

        while let Some(current) = queue.pop_front() {
            let neighbors = self
                .out_edges(current)
                .map(|(_, edge)| edge.dst)
                .chain(self.in_edges(current).map(|(_, edge)| edge.src));
            for neighbor in neighbors {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    reached += 1;
                    queue.push_back(neighbor);
                }
            }
        }

        reached == self.vertex_count
    }

    fn slot(&self, index: VertexIndex) -> Option<&VertexSlot<V>> {
        self.vertices.get(index).and_then(|slot| slot.as_ref())
    }
}
