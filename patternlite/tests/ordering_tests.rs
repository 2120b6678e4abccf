//! Canonical labeling and degree ordering over generated patterns

#[path = "testutils/mod.rs"]
mod testutils;

use std::collections::BTreeSet;

use patternlite::{
    CanonicalLabeling, EdgeTypeId, GraphOrdering, Pattern, PatternConfig, PatternId, PatternOrder,
    PatternVertex, VertexTypeId,
};
use testutils::pattern_fixture::{
    group_size_profile, init_logging, random_pattern, sample_shapes, Shape,
};

/// Order indexes form exactly `0..len` and round-trip through `vertex_at`
fn assert_total(order: &dyn PatternOrder, pattern: &Pattern) {
    assert_eq!(order.len(), pattern.vertex_count());
    let mut seen = BTreeSet::new();
    for vertex in pattern.vertices() {
        let index = order.order_of(vertex.id()).unwrap();
        assert!(index < pattern.vertex_count());
        assert!(seen.insert(index), "order {} assigned twice in {}", index, pattern);
        assert_eq!(order.vertex_at(index), Some(vertex.id()));
    }
}

/// Shape over types {1, 2, 3} with distinct vertex pairs per edge
fn random_shape(rng: &mut fastrand::Rng, vertex_count: usize) -> Shape {
    let vertex_types: Vec<u32> = (0..vertex_count).map(|_| rng.u32(1..=3)).collect();
    let mut pairs = BTreeSet::new();
    for _ in 0..vertex_count * 2 {
        let src = rng.usize(..vertex_count);
        let dst = rng.usize(..vertex_count);
        if src != dst {
            pairs.insert((src, dst));
        }
    }
    let edges: Vec<(PatternId, PatternId, u32)> = pairs
        .into_iter()
        .map(|(src, dst)| (src, dst, rng.u32(1..=2)))
        .collect();
    Shape::new(&vertex_types, &edges)
}

#[test]
fn test_canonical_labeling_is_discrete_up_to_twelve_vertices() {
    init_logging();
    let mut rng = fastrand::Rng::with_seed(7);
    for vertex_count in 0..=12 {
        for density in [0, 1, 2, 4] {
            let pattern = random_pattern(&mut rng, vertex_count, vertex_count * density);
            let labeling = CanonicalLabeling::new(&pattern);
            assert_total(&labeling, &pattern);
            assert!(labeling.stats().individualizations <= vertex_count);
            assert!(labeling.group_count() <= vertex_count);
        }
    }
}

#[test]
fn test_group_profiles_survive_relabeling() {
    init_logging();
    let mut rng = fastrand::Rng::with_seed(0xc0ffee);
    let mut shapes = sample_shapes();
    shapes.extend((3..=10).map(|n| random_shape(&mut rng, n)));

    for shape in &shapes {
        let original = shape.build();
        let expected = CanonicalLabeling::new(&original);
        for relabeled in [shape.build_reversed(), shape.build_shuffled(&mut rng)] {
            let labeling = CanonicalLabeling::new(&relabeled);
            assert_eq!(group_size_profile(&labeling), group_size_profile(&expected));
            assert_eq!(labeling.groups_by_type(), expected.groups_by_type());
            assert_eq!(labeling.group_count(), expected.group_count());
            assert!(labeling.is_equivalent_to(&expected));
            assert_eq!(original, relabeled);
        }
    }
}

#[test]
fn test_fan_in_profile() {
    init_logging();
    let shape = Shape::new(&[11, 11, 22], &[(0, 2, 1122), (1, 2, 1122)]);
    let forward = CanonicalLabeling::new(&shape.build());
    let backward = CanonicalLabeling::new(&shape.build_reversed());

    let profile = group_size_profile(&forward);
    assert_eq!(profile[&vec![VertexTypeId(11)]], vec![2]);
    assert_eq!(profile[&vec![VertexTypeId(22)]], vec![1]);
    assert_eq!(profile, group_size_profile(&backward));
    assert!(forward.are_interchangeable(0, 1));
    assert!(backward.are_interchangeable(1, 2));
}

#[test]
fn test_equivalence_is_only_a_prefilter() {
    init_logging();
    // one directed 6-cycle against two directed 3-cycles: refinement sees
    // every vertex alike in both, yet the graphs differ
    let hexagon = Shape::new(
        &[1; 6],
        &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 5, 1), (5, 0, 1)],
    )
    .build();
    let triangles = Shape::new(
        &[1; 6],
        &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 1), (4, 5, 1), (5, 3, 1)],
    )
    .build();

    let a = CanonicalLabeling::new(&hexagon);
    let b = CanonicalLabeling::new(&triangles);
    assert!(a.is_equivalent_to(&b));
    assert_eq!(a.group_count(), 1);
    assert_ne!(hexagon, triangles);
}

#[test]
fn test_different_shapes_are_not_equivalent() {
    init_logging();
    let fan_in = Shape::new(&[1, 1, 2], &[(0, 2, 3), (1, 2, 3)]).build();
    let chain = Shape::new(&[1, 1, 2], &[(0, 1, 4), (1, 2, 3)]).build();
    let a = CanonicalLabeling::new(&fan_in);
    let b = CanonicalLabeling::new(&chain);
    assert!(!a.is_equivalent_to(&b));
    assert!(!b.is_equivalent_to(&a));
}

#[test]
fn test_fuzzy_vertices_group_by_type_list() {
    init_logging();
    let mut pattern = Pattern::new();
    pattern.add_vertex(PatternVertex::fuzzy(0, [2u32, 1]).unwrap());
    pattern.add_vertex(PatternVertex::single(1, 1));
    pattern.add_edge(0, 1, EdgeTypeId::new(2, 8, 1)).unwrap();

    let labeling = CanonicalLabeling::new(&pattern);
    assert_total(&labeling, &pattern);
    let groups = labeling.groups_by_type();
    assert_eq!(groups.len(), 2);
    assert!(groups.contains_key(&vec![VertexTypeId(1), VertexTypeId(2)]));
    assert!(groups.contains_key(&vec![VertexTypeId(1)]));
}

#[test]
fn test_graph_ordering_is_total() {
    init_logging();
    let mut rng = fastrand::Rng::with_seed(99);
    for vertex_count in 0..=12 {
        let pattern = random_pattern(&mut rng, vertex_count, vertex_count * 2);
        let ordering = GraphOrdering::new(&pattern);
        assert_total(&ordering, &pattern);
        for vertex in pattern.vertices() {
            assert_eq!(ordering.group_of(vertex.id()), ordering.order_of(vertex.id()));
        }
    }
}

#[test]
fn test_graph_ordering_puts_hubs_last() {
    init_logging();
    let star = Shape::new(&[4, 5, 5, 6, 6], &[(0, 1, 2), (0, 2, 2), (3, 0, 3), (4, 0, 3)]);
    let pattern = star.build();
    let ordering = GraphOrdering::new(&pattern);
    assert_eq!(ordering.vertex_at(4), Some(0));
    assert_eq!(ordering.order_of(0), Some(4));
}

#[test]
fn test_configured_strategies() {
    init_logging();
    let mut rng = fastrand::Rng::with_seed(3);
    let pattern = random_shape(&mut rng, 6).build();

    for config in [PatternConfig::exact(), PatternConfig::fast(), PatternConfig::default()] {
        let order = config.build_order(&pattern);
        assert_total(order.as_ref(), &pattern);
    }
}
