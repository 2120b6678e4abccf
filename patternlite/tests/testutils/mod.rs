//! Shared fixtures for patternlite integration tests
//!
//! - PatternFixture: schema plus pattern builders, logging initialised once
//! - Shape: a pattern described by vertex types and edges, rebuildable under
//!   any relabeling

pub mod pattern_fixture;
