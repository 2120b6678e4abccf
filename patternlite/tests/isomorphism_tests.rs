//! Isomorphism equality under relabeling and reordering

#[path = "testutils/mod.rs"]
mod testutils;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use patternlite::{EdgeTypeId, Pattern, PatternId, PatternVertex};
use testutils::pattern_fixture::{init_logging, random_pattern, sample_shapes, Shape};

fn hash_of(pattern: &Pattern) -> u64 {
    let mut hasher = DefaultHasher::new();
    pattern.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_fan_in_built_in_opposite_order() {
    init_logging();
    let fan_in = EdgeTypeId::new(11, 1122, 22);

    let mut forward = Pattern::new();
    forward.add_vertex(PatternVertex::single(0, 11));
    forward.add_vertex(PatternVertex::single(1, 11));
    forward.add_vertex(PatternVertex::single(2, 22));
    forward.add_edge(0, 2, fan_in).unwrap();
    forward.add_edge(1, 2, fan_in).unwrap();

    let mut backward = Pattern::new();
    backward.add_vertex(PatternVertex::single(0, 22));
    backward.add_vertex(PatternVertex::single(1, 11));
    backward.add_vertex(PatternVertex::single(2, 11));
    backward.add_edge(2, 0, fan_in).unwrap();
    backward.add_edge(1, 0, fan_in).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(backward, forward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
}

#[test]
fn test_reflexive_and_symmetric() {
    init_logging();
    let shapes = sample_shapes();
    let patterns: Vec<Pattern> = shapes.iter().map(Shape::build).collect();

    for p in &patterns {
        assert_eq!(p, p);
        assert_eq!(p, &p.clone());
    }
    for p in &patterns {
        for q in &patterns {
            assert_eq!(p == q, q == p, "{} vs {}", p, q);
        }
    }
}

#[test]
fn test_distinct_sample_shapes_differ() {
    init_logging();
    let patterns: Vec<Pattern> = sample_shapes().iter().map(Shape::build).collect();
    for (i, p) in patterns.iter().enumerate() {
        for (j, q) in patterns.iter().enumerate() {
            assert_eq!(p == q, i == j, "{} vs {}", p, q);
        }
    }
}

#[test]
fn test_invariant_under_reversed_ids() {
    init_logging();
    for shape in sample_shapes() {
        let original = shape.build();
        let reversed = shape.build_reversed();
        assert_eq!(original, reversed);
        assert_eq!(hash_of(&original), hash_of(&reversed));
    }
}

#[test]
fn test_invariant_under_random_relabeling() {
    init_logging();
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for shape in sample_shapes() {
        let original = shape.build();
        for _ in 0..8 {
            let shuffled = shape.build_shuffled(&mut rng);
            assert_eq!(original, shuffled, "{} vs {}", original, shuffled);
            assert_eq!(hash_of(&original), hash_of(&shuffled));
        }
    }
}

#[test]
fn test_edge_direction_matters() {
    init_logging();
    let forward = Shape::new(&[1, 1, 1], &[(0, 1, 3), (1, 2, 3)]).build();
    let converging = Shape::new(&[1, 1, 1], &[(0, 1, 3), (2, 1, 3)]).build();
    assert_ne!(forward, converging);
}

#[test]
fn test_edge_label_matters() {
    init_logging();
    let knows = Shape::new(&[1, 1], &[(0, 1, 3)]).build();
    let likes = Shape::new(&[1, 1], &[(0, 1, 4)]).build();
    assert_ne!(knows, likes);
}

#[test]
fn test_random_patterns_against_themselves() {
    init_logging();
    let mut rng = fastrand::Rng::with_seed(42);
    for size in 1..=8 {
        let pattern = random_pattern(&mut rng, size, size + 2);
        assert_eq!(pattern, pattern.clone());
    }
}

#[test]
fn test_fuzzy_patterns_compare_literally() {
    init_logging();
    let build = |fuzzy_at: PatternId| {
        let mut pattern = Pattern::new();
        for id in 0..2 {
            let vertex = if id == fuzzy_at {
                PatternVertex::fuzzy(id, [1u32, 2]).unwrap()
            } else {
                PatternVertex::single(id, 1)
            };
            assert!(pattern.add_vertex(vertex));
        }
        pattern
            .add_edge(fuzzy_at, 1 - fuzzy_at, EdgeTypeId::new(1, 5, 1))
            .unwrap();
        pattern
    };

    let p = build(0);
    assert!(!p.is_simple());
    assert_eq!(p, build(0));
    // same shape, swapped positions: the literal comparison tells them apart
    assert_ne!(p, build(1));
}
