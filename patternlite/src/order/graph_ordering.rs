// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Degree-based vertex ordering
//!
//! Sorts vertices once by `(degree, out-degree, in-degree, number of types,
//! type ids, vertex id)`. Cheap and total, but not canonical: isomorphic
//! patterns with symmetric parts may be ordered differently, since the
//! vertex id breaks remaining ties. Fine for stable display order or as a
//! pre-check before exact comparison.

use std::cmp::Ordering;

use super::{index_groups_by_type, invert_orders, PatternOrder, TypeGroups};
use crate::pattern::{Pattern, PatternId, PatternVertex};

#[derive(Debug, Clone)]
pub struct GraphOrdering {
    orders: Vec<Option<usize>>,
    vertices: Vec<PatternId>,
    type_groups: TypeGroups,
}

impl GraphOrdering {
    pub fn new(pattern: &Pattern) -> Self {
        let mut sorted: Vec<&PatternVertex> = pattern.vertices().collect();
        sorted.sort_by(|a, b| compare_vertices(pattern, a, b));

        let mut orders = vec![None; pattern.next_vertex_id()];
        for (order, vertex) in sorted.iter().enumerate() {
            orders[vertex.id()] = Some(order);
        }
        let type_groups = index_groups_by_type(pattern, |v| orders.get(v).copied().flatten());

        GraphOrdering {
            vertices: invert_orders(&orders),
            orders,
            type_groups,
        }
    }
}

fn compare_vertices(pattern: &Pattern, a: &PatternVertex, b: &PatternVertex) -> Ordering {
    pattern
        .degree(a.id())
        .cmp(&pattern.degree(b.id()))
        .then_with(|| pattern.out_degree(a.id()).cmp(&pattern.out_degree(b.id())))
        .then_with(|| pattern.in_degree(a.id()).cmp(&pattern.in_degree(b.id())))
        .then_with(|| {
            a.vertex_type_ids()
                .len()
                .cmp(&b.vertex_type_ids().len())
        })
        .then_with(|| a.vertex_type_ids().cmp(b.vertex_type_ids()))
        .then_with(|| a.id().cmp(&b.id()))
}

impl PatternOrder for GraphOrdering {
    fn order_of(&self, vertex: PatternId) -> Option<usize> {
        self.orders.get(vertex).copied().flatten()
    }

    /// Same as the order: this strategy has no notion of symmetry
    fn group_of(&self, vertex: PatternId) -> Option<usize> {
        self.order_of(vertex)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EdgeTypeId;

    #[test]
    fn test_sort_keys() {
        // v0:5 -> v1:5, v0:5 -> v2:3, v3:[3|4] isolated
        let mut pattern = Pattern::new();
        pattern.add_vertex(PatternVertex::single(0, 5));
        pattern.add_vertex(PatternVertex::single(1, 5));
        pattern.add_vertex(PatternVertex::single(2, 3));
        pattern.add_vertex(PatternVertex::fuzzy(3, [4u32, 3]).unwrap());
        pattern.add_edge(0, 1, EdgeTypeId::new(5, 1, 5)).unwrap();
        pattern.add_edge(0, 2, EdgeTypeId::new(5, 2, 3)).unwrap();

        let ordering = GraphOrdering::new(&pattern);
        // isolated first, then the two sinks by type, then the source
        assert_eq!(ordering.vertex_at(0), Some(3));
        assert_eq!(ordering.vertex_at(1), Some(2));
        assert_eq!(ordering.vertex_at(2), Some(1));
        assert_eq!(ordering.vertex_at(3), Some(0));
        assert_eq!(ordering.group_of(0), ordering.order_of(0));
    }

    #[test]
    fn test_ties_broken_by_id() {
        let mut pattern = Pattern::new();
        for id in 0..4 {
            pattern.add_vertex(PatternVertex::single(id, 1));
        }
        let ordering = GraphOrdering::new(&pattern);
        for id in 0..4 {
            assert_eq!(ordering.order_of(id), Some(id));
        }
        assert_eq!(ordering.len(), 4);
    }
}
