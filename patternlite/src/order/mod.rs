// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Vertex orderings of a pattern
//!
//! A [`PatternOrder`] gives every vertex of one pattern an order index and a
//! group id. Two implementations exist:
//!
//! - [`CanonicalLabeling`]: color refinement plus individualization. Groups
//!   collect vertices that refinement could not tell apart.
//! - [`GraphOrdering`]: a single sort by degree and types. Group equals order.

pub mod canonical_labeling;
pub mod graph_ordering;

pub use canonical_labeling::{CanonicalLabeling, RefinementStats};
pub use graph_ordering::GraphOrdering;

use std::collections::BTreeMap;

use crate::pattern::{Pattern, PatternId};
use crate::schema::VertexTypeId;

/// Sorted group ids of the vertices carrying each type list
pub type TypeGroups = BTreeMap<Vec<VertexTypeId>, Vec<usize>>;

pub trait PatternOrder {
    /// Order index of a vertex, in `0..len()`
    fn order_of(&self, vertex: PatternId) -> Option<usize>;

    /// Group id of a vertex; equal groups mean interchangeable vertices
    fn group_of(&self, vertex: PatternId) -> Option<usize>;

    /// Vertex holding the given order index
    fn vertex_at(&self, order: usize) -> Option<PatternId>;

    /// Number of ordered vertices
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn groups_by_type(&self) -> &TypeGroups;

    /// Necessary condition for the two underlying patterns to be isomorphic:
    /// for every type list, the same sorted group ids. Meant as a cheap
    /// pre-filter, never as the final decision.
    fn is_equivalent_to(&self, other: &dyn PatternOrder) -> bool {
        self.groups_by_type() == other.groups_by_type()
    }
}

fn index_groups_by_type<F>(pattern: &Pattern, group_of: F) -> TypeGroups
where
    F: Fn(PatternId) -> Option<usize>,
{
    let mut type_groups = TypeGroups::new();
    for vertex in pattern.vertices() {
        if let Some(group) = group_of(vertex.id()) {
            type_groups
                .entry(vertex.vertex_type_ids().to_vec())
                .or_insert_with(Vec::new)
                .push(group);
        }
    }
    for groups in type_groups.values_mut() {
        groups.sort_unstable();
    }
    type_groups
}

/// Invert a vertex -> order table
fn invert_orders(orders: &[Option<usize>]) -> Vec<PatternId> {
    let mut ranked: Vec<(usize, PatternId)> = orders
        .iter()
        .enumerate()
        .filter_map(|(vertex, order)| order.map(|order| (order, vertex)))
        .collect();
    ranked.sort_unstable();
    ranked.into_iter().map(|(_, vertex)| vertex).collect()
}
