//! Schema and pattern builders for integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;

use patternlite::{
    CanonicalLabeling, EdgeTypeId, Pattern, PatternId, PatternOrder, PatternVertex, SchemaCatalog,
    VertexTypeId,
};

/// Route `log` output through the test harness; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Pattern shape: vertex `i` has type `vertex_types[i]`, each edge is
/// `(src, dst, label)` with the edge type derived from the endpoint types
#[derive(Debug, Clone)]
pub struct Shape {
    pub vertex_types: Vec<u32>,
    pub edges: Vec<(PatternId, PatternId, u32)>,
}

impl Shape {
    pub fn new(vertex_types: &[u32], edges: &[(PatternId, PatternId, u32)]) -> Self {
        Shape {
            vertex_types: vertex_types.to_vec(),
            edges: edges.to_vec(),
        }
    }

    pub fn edge_type(&self, src: PatternId, dst: PatternId, label: u32) -> EdgeTypeId {
        EdgeTypeId::new(self.vertex_types[src], label, self.vertex_types[dst])
    }

    /// Build with ids and insertion order as written
    pub fn build(&self) -> Pattern {
        let identity: Vec<PatternId> = (0..self.vertex_types.len()).collect();
        let edge_order: Vec<usize> = (0..self.edges.len()).collect();
        self.build_relabeled(&identity, &edge_order)
    }

    /// Build with vertex `i` renamed to `ids[i]` and edges inserted in
    /// `edge_order`. Vertices go in by ascending new id, since pattern ids
    /// are handed out densely.
    pub fn build_relabeled(&self, ids: &[PatternId], edge_order: &[usize]) -> Pattern {
        let mut by_new_id: Vec<(PatternId, u32)> = ids
            .iter()
            .zip(&self.vertex_types)
            .map(|(&id, &vertex_type)| (id, vertex_type))
            .collect();
        by_new_id.sort_unstable();

        let mut pattern = Pattern::new();
        for (id, vertex_type) in by_new_id {
            assert!(pattern.add_vertex(PatternVertex::single(id, vertex_type)));
        }
        for &edge in edge_order {
            let (src, dst, label) = self.edges[edge];
            let added = pattern
                .add_edge(ids[src], ids[dst], self.edge_type(src, dst, label))
                .expect("shape edge must fit its endpoints");
            assert!(added, "shape must not repeat an edge");
        }
        pattern
    }

    /// Build under a seeded random relabeling and edge insertion order
    pub fn build_shuffled(&self, rng: &mut fastrand::Rng) -> Pattern {
        let mut ids: Vec<PatternId> = (0..self.vertex_types.len()).collect();
        let mut edge_order: Vec<usize> = (0..self.edges.len()).collect();
        rng.shuffle(&mut ids);
        rng.shuffle(&mut edge_order);
        self.build_relabeled(&ids, &edge_order)
    }

    /// Build with reversed ids and reversed edge insertion order
    pub fn build_reversed(&self) -> Pattern {
        let n = self.vertex_types.len();
        let ids: Vec<PatternId> = (0..n).rev().collect();
        let edge_order: Vec<usize> = (0..self.edges.len()).rev().collect();
        self.build_relabeled(&ids, &edge_order)
    }
}

/// A handful of shapes with symmetric and asymmetric parts
pub fn sample_shapes() -> Vec<Shape> {
    vec![
        // two 11s into one 22
        Shape::new(&[11, 11, 22], &[(0, 2, 1122), (1, 2, 1122)]),
        // directed path
        Shape::new(&[1, 2, 1, 2], &[(0, 1, 7), (1, 2, 8), (2, 3, 7)]),
        // mixed-type triangle
        Shape::new(&[1, 1, 2], &[(0, 1, 5), (1, 2, 6), (2, 0, 9)]),
        // four-cycle with a chord
        Shape::new(&[3, 3, 3, 3], &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 1)]),
        // star, hub in the middle
        Shape::new(&[4, 5, 5, 6, 6], &[(0, 1, 2), (0, 2, 2), (3, 0, 3), (4, 0, 3)]),
        // two disconnected edges
        Shape::new(&[1, 2, 1, 2], &[(0, 1, 4), (2, 3, 4)]),
    ]
}

/// Schema with every vertex type of `shapes` and every edge type they use
pub fn schema_for(shapes: &[Shape]) -> SchemaCatalog {
    let mut schema = SchemaCatalog::new();
    for shape in shapes {
        for &vertex_type in &shape.vertex_types {
            schema.add_vertex_type(vertex_type);
        }
        for &(src, dst, label) in &shape.edges {
            schema.add_edge_type(shape.edge_type(src, dst, label));
        }
    }
    schema
}

/// For each type list, the sorted sizes of the groups carrying it
pub fn group_size_profile(labeling: &CanonicalLabeling) -> BTreeMap<Vec<VertexTypeId>, Vec<usize>> {
    labeling
        .groups_by_type()
        .iter()
        .map(|(types, groups)| {
            let mut sizes: BTreeMap<usize, usize> = BTreeMap::new();
            for &group in groups {
                *sizes.entry(group).or_insert(0) += 1;
            }
            let mut sizes: Vec<usize> = sizes.into_values().collect();
            sizes.sort_unstable();
            (types.clone(), sizes)
        })
        .collect()
}

/// Random simple pattern over types {1, 2}, edges typed by their endpoints
pub fn random_pattern(rng: &mut fastrand::Rng, vertex_count: usize, edge_count: usize) -> Pattern {
    let mut pattern = Pattern::new();
    for id in 0..vertex_count {
        pattern.add_vertex(PatternVertex::single(id, rng.u32(1..=2)));
    }
    if vertex_count == 0 {
        return pattern;
    }
    for _ in 0..edge_count {
        let src = rng.usize(..vertex_count);
        let dst = rng.usize(..vertex_count);
        let src_type = pattern.vertex(src).map(|v| v.vertex_type_ids()[0]);
        let dst_type = pattern.vertex(dst).map(|v| v.vertex_type_ids()[0]);
        if let (Some(src_type), Some(dst_type)) = (src_type, dst_type) {
            // duplicates are refused on simple patterns, that is fine here
            let _ = pattern.add_edge(src, dst, EdgeTypeId::new(src_type, 9, dst_type));
        }
    }
    pattern
}
