// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Color refinement (1-dimensional Weisfeiler-Leman)
//!
//! A [`Coloring`] partitions the vertices of a graph into numbered classes.
//! One refinement round recolors every vertex by the pair (current color,
//! multiset of `(neighbor color, direction)` over its incident edges) and
//! renumbers the distinct pairs in sorted order. Because the current color
//! leads the pair, a round only ever splits classes and keeps their relative
//! order, and the numbering depends on structure alone, never on vertex ids.

use std::collections::BTreeMap;

use super::{DiGraph, Direction, VertexIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Option<usize>>,
    num_colors: usize,
}

type Signature = (usize, Vec<(usize, Direction)>);

impl Coloring {
    /// Initial coloring: one color per distinct key, numbered by ascending key
    pub fn from_keys<V, E, K, F>(graph: &DiGraph<V, E>, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(VertexIndex, &V) -> K,
    {
        let keyed: Vec<(VertexIndex, K)> = graph
            .vertices()
            .map(|(index, weight)| (index, key(index, weight)))
            .collect();

        let mut palette: BTreeMap<&K, usize> = BTreeMap::new();
        for (_, k) in &keyed {
            palette.entry(k).or_insert(0);
        }
        for (color, slot) in palette.values_mut().enumerate() {
            *slot = color;
        }

        let mut colors = vec![None; graph.vertex_bound()];
        for (index, k) in &keyed {
            colors[*index] = palette.get(k).copied();
        }
        Coloring {
            colors,
            num_colors: palette.len(),
        }
    }

    pub fn color_of(&self, vertex: VertexIndex) -> Option<usize> {
        self.colors.get(vertex).copied().flatten()
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Vertices of each class, indexed by color, each class in ascending index order
    pub fn classes(&self) -> Vec<Vec<VertexIndex>> {
        let mut classes = vec![Vec::new(); self.num_colors];
        for (vertex, color) in self.colors.iter().enumerate() {
            if let Some(color) = color {
                classes[*color].push(vertex);
            }
        }
        classes
    }

    /// Every class holds exactly one vertex
    pub fn is_discrete(&self) -> bool {
        self.classes().iter().all(|class| class.len() == 1)
    }

    /// The lowest-numbered class with more than one member
    pub fn first_non_singleton_class(&self) -> Option<Vec<VertexIndex>> {
        self.classes().into_iter().find(|class| class.len() > 1)
    }

    /// Give `vertex` a fresh color no other vertex holds
    pub fn individualize(&mut self, vertex: VertexIndex) -> bool {
        let fresh = self.num_colors;
        match self.colors.get_mut(vertex) {
            Some(Some(color)) => {
                *color = fresh;
                self.num_colors += 1;
                true
            }
            _ => false,
        }
    }
}

/// Refine `coloring` until a round no longer splits any class.
/// Returns the number of rounds run, including the final stable one.
pub fn refine<V, E>(graph: &DiGraph<V, E>, coloring: &mut Coloring) -> usize {
    let mut rounds = 0;
    loop {
        rounds += 1;
        let before = coloring.num_colors;
        refine_round(graph, coloring);
        log::trace!(
            "Refinement round {}: {} -> {} colors",
            rounds,
            before,
            coloring.num_colors
        );
        if coloring.num_colors == before {
            return rounds;
        }
    }
}

fn refine_round<V, E>(graph: &DiGraph<V, E>, coloring: &mut Coloring) {
    let mut signatures: Vec<(VertexIndex, Signature)> = Vec::with_capacity(graph.vertex_count());
    for vertex in graph.vertex_indices() {
        let Some(color) = coloring.color_of(vertex) else {
            continue;
        };
        let mut neighborhood: Vec<(usize, Direction)> = graph
            .out_edges(vertex)
            .filter_map(|(_, edge)| coloring.color_of(edge.dst()))
            .map(|neighbor| (neighbor, Direction::Outgoing))
            .chain(
                graph
                    .in_edges(vertex)
                    .filter_map(|(_, edge)| coloring.color_of(edge.src()))
                    .map(|neighbor| (neighbor, Direction::Incoming)),
            )
            .collect();
        neighborhood.sort_unstable();
        signatures.push((vertex, (color, neighborhood)));
    }

    let mut palette: BTreeMap<&Signature, usize> = BTreeMap::new();
    for (_, signature) in &signatures {
        palette.entry(signature).or_insert(0);
    }
    for (color, slot) in palette.values_mut().enumerate() {
        *slot = color;
    }

    let mut colors = vec![None; coloring.colors.len()];
    for (vertex, signature) in &signatures {
        colors[*vertex] = palette.get(signature).copied();
    }
    let num_colors = palette.len();
    coloring.colors = colors;
    coloring.num_colors = num_colors;
}
