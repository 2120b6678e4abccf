// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Canonical labeling by color refinement
//!
//! 1. Color vertices by their type list, in ascending type order.
//! 2. Refine until stable. This first stable coloring is kept as the group
//!    assignment: vertices sharing a group are symmetric within the pattern.
//! 3. While a class holds more than one vertex, give the lowest vertex id of
//!    the first such class a fresh color and refine again.
//! 4. The final, discrete coloring is the order.
//!
//! Each individualization adds a color and there are at most as many colors
//! as vertices, so the loop ends after at most one individualization per
//! vertex. [`RefinementStats`] reports how much work it took.

use super::{index_groups_by_type, invert_orders, PatternOrder, TypeGroups};
use crate::graph::refinement::{refine, Coloring};
use crate::pattern::{Pattern, PatternId};

/// Work done by one canonical labeling run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefinementStats {
    /// Refinement rounds over all passes, stable rounds included
    pub rounds: usize,
    /// Ties broken by individualization
    pub individualizations: usize,
}

#[derive(Debug, Clone)]
pub struct CanonicalLabeling {
    /// vertex id -> order
    orders: Vec<Option<usize>>,
    /// order -> vertex id
    vertices: Vec<PatternId>,
    /// vertex id -> group
    groups: Vec<Option<usize>>,
    group_count: usize,
    type_groups: TypeGroups,
    stats: RefinementStats,
}

impl CanonicalLabeling {
    pub fn new(pattern: &Pattern) -> Self {
        let graph = pattern.graph();
        let mut stats = RefinementStats::default();

        let mut coloring = Coloring::from_keys(graph, |_, vertex| vertex.vertex_type_ids().to_vec());
        stats.rounds += refine(graph, &mut coloring);
        let group_coloring = coloring.clone();

        while let Some(class) = coloring.first_non_singleton_class() {
            let chosen = class[0];
            coloring.individualize(chosen);
            stats.individualizations += 1;
            stats.rounds += refine(graph, &mut coloring);
        }

        let bound = graph.vertex_bound();
        let orders: Vec<Option<usize>> = (0..bound).map(|v| coloring.color_of(v)).collect();
        let groups: Vec<Option<usize>> = (0..bound).map(|v| group_coloring.color_of(v)).collect();
        let type_groups = index_groups_by_type(pattern, |v| groups.get(v).copied().flatten());

        log::debug!(
            "Canonical labeling of {} vertices: {} groups, {} rounds, {} individualizations",
            pattern.vertex_count(),
            group_coloring.num_colors(),
            stats.rounds,
            stats.individualizations
        );

        CanonicalLabeling {
            vertices: invert_orders(&orders),
            orders,
            groups,
            group_count: group_coloring.num_colors(),
            type_groups,
            stats,
        }
    }

    pub fn stats(&self) -> RefinementStats {
        self.stats
    }

    /// Number of distinct groups in the first stable coloring
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Whether refinement alone could not tell `a` and `b` apart
    pub fn are_interchangeable(&self, a: PatternId, b: PatternId) -> bool {
        match (self.group_of(a), self.group_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

impl PatternOrder for CanonicalLabeling {
    fn order_of(&self, vertex: PatternId) -> Option<usize> {
        self.orders.get(vertex).copied().flatten()
    }

    fn group_of(&self, vertex: PatternId) -> Option<usize> {
        self.groups.get(vertex).copied().flatten()
    }

    fn vertex_at(&self, order: usize) -> Option<PatternId> {
        self.vertices.get(order).copied()
    }

    fn len(&self) -> usize {
        self.vertices.len()
    }

    fn groups_by_type(&self) -> &TypeGroups {
        &self.type_groups
    }
}
