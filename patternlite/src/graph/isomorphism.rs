// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Exact graph isomorphism by backtracking
//!
//! A VF2-style matcher: vertices of the first graph are visited in a
//! connectivity-first order, and each is paired with every compatible,
//! still-unused vertex of the second graph. A pairing is kept only if the
//! edges between the new vertex and every vertex matched so far (including
//! itself, for self-loops) correspond one-to-one under the edge predicate.
//! Worst case is exponential in the vertex count; callers bound pattern size.

use super::{DiGraph, EdgeIndex, VertexIndex};

/// Whether a bijection between `g1` and `g2` exists that preserves adjacency,
/// direction, edge multiplicity and both predicates
pub fn is_isomorphic_matching<V, E, FV, FE>(
    g1: &DiGraph<V, E>,
    g2: &DiGraph<V, E>,
    vertex_match: FV,
    edge_match: FE,
) -> bool
where
    FV: FnMut(&V, &V) -> bool,
    FE: FnMut(&E, &E) -> bool,
{
    if g1.vertex_count() != g2.vertex_count() || g1.edge_count() != g2.edge_count() {
        return false;
    }
    if g1.vertex_count() == 0 {
        return true;
    }

    let mut matcher = Matcher {
        g1,
        g2,
        vertex_match,
        edge_match,
        order: matching_order(g1),
        mapping: vec![None; g1.vertex_bound()],
        used: vec![false; g2.vertex_bound()],
        steps: 0,
    };
    let found = matcher.search(0);
    log::trace!(
        "Isomorphism search over {} vertices finished after {} steps: {}",
        g1.vertex_count(),
        matcher.steps,
        found
    );
    found
}

struct Matcher<'a, V, E, FV, FE> {
    g1: &'a DiGraph<V, E>,
    g2: &'a DiGraph<V, E>,
    vertex_match: FV,
    edge_match: FE,
    order: Vec<VertexIndex>,
    /// g1 vertex -> matched g2 vertex
    mapping: Vec<Option<VertexIndex>>,
    used: Vec<bool>,
    steps: usize,
}

impl<'a, V, E, FV, FE> Matcher<'a, V, E, FV, FE>
where
    FV: FnMut(&V, &V) -> bool,
    FE: FnMut(&E, &E) -> bool,
{
    fn search(&mut self, depth: usize) -> bool {
        if depth == self.order.len() {
            return true;
        }
        let u = self.order[depth];
        let candidates: Vec<VertexIndex> = self.g2.vertex_indices().collect();

        for v in candidates {
            if self.used[v] {
                continue;
            }
            self.steps += 1;
            if !self.is_feasible(depth, u, v) {
                continue;
            }
            self.mapping[u] = Some(v);
            self.used[v] = true;
            if self.search(depth + 1) {
                return true;
            }
            self.mapping[u] = None;
            self.used[v] = false;
        }
        false
    }

    fn is_feasible(&mut self, depth: usize, u: VertexIndex, v: VertexIndex) -> bool {
        let (g1, g2) = (self.g1, self.g2);
        if g1.out_degree(u) != g2.out_degree(v) || g1.in_degree(u) != g2.in_degree(v) {
            return false;
        }
        match (g1.vertex(u), g2.vertex(v)) {
            (Some(a), Some(b)) => {
                if !(self.vertex_match)(a, b) {
                    return false;
                }
            }
            _ => return false,
        }

        // Self-loops first, then every edge towards an already matched vertex
        if !self.edges_correspond(u, u, v, v) {
            return false;
        }
        for index in 0..depth {
            let w = self.order[index];
            let Some(mapped) = self.mapping[w] else {
                continue;
            };
            if !self.edges_correspond(u, w, v, mapped) || !self.edges_correspond(w, u, mapped, v)
            {
                return false;
            }
        }
        true
    }

    /// Edges `a1 -> b1` in g1 can be paired one-to-one with edges `a2 -> b2` in g2
    fn edges_correspond(
        &mut self,
        a1: VertexIndex,
        b1: VertexIndex,
        a2: VertexIndex,
        b2: VertexIndex,
    ) -> bool {
        let left: Vec<EdgeIndex> = self.g1.edges_connecting(a1, b1).map(|(i, _)| i).collect();
        let right: Vec<EdgeIndex> = self.g2.edges_connecting(a2, b2).map(|(i, _)| i).collect();
        if left.len() != right.len() {
            return false;
        }
        let mut taken = vec![false; right.len()];
        self.pair_edges(&left, &right, &mut taken, 0)
    }

    fn pair_edges(
        &mut self,
        left: &[EdgeIndex],
        right: &[EdgeIndex],
        taken: &mut [bool],
        position: usize,
    ) -> bool {
        if position == left.len() {
            return true;
        }
        let (g1, g2) = (self.g1, self.g2);
        let Some(edge) = g1.edge(left[position]) else {
            return false;
        };
        for slot in 0..right.len() {
            if taken[slot] {
                continue;
            }
            let Some(other) = g2.edge(right[slot]) else {
                continue;
            };
            if !(self.edge_match)(edge.weight(), other.weight()) {
                continue;
            }
            taken[slot] = true;
            if self.pair_edges(left, right, taken, position + 1) {
                return true;
            }
            taken[slot] = false;
        }
        false
    }
}

/// Visit order for g1: start from the highest-degree vertex and keep taking
/// the vertex with the most edges into the visited set, so that adjacency
/// constraints prune as early as possible
fn matching_order<V, E>(graph: &DiGraph<V, E>) -> Vec<VertexIndex> {
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut placed = vec![false; graph.vertex_bound()];
    let mut links = vec![0usize; graph.vertex_bound()];

    while order.len() < graph.vertex_count() {
        let next = graph
            .vertex_indices()
            .filter(|&vertex| !placed[vertex])
            .max_by(|&a, &b| {
                links[a]
                    .cmp(&links[b])
                    .then(graph.degree(a).cmp(&graph.degree(b)))
                    .then(b.cmp(&a))
            });
        let Some(next) = next else {
            break;
        };
        placed[next] = true;
        order.push(next);
        for (_, edge) in graph.out_edges(next) {
            links[edge.dst()] += 1;
        }
        for (_, edge) in graph.in_edges(next) {
            links[edge.src()] += 1;
        }
    }
    order
}
