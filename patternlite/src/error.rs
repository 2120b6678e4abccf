// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for pattern construction and extension

use thiserror::Error;

use crate::pattern::PatternId;
use crate::schema::{EdgeTypeId, VertexTypeId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("Vertex not found in pattern: {0}")]
    VertexNotFound(PatternId),

    #[error("Vertex {0} would duplicate a vertex already in the pattern")]
    DuplicateVertex(PatternId),

    #[error("No vertex holds rank {0} in pattern")]
    RankNotFound(usize),

    #[error("Empty type set: {0}")]
    EmptyTypeSet(String),

    #[error("Extend step towards type {0} carries no extend edges")]
    EmptyExtendStep(VertexTypeId),

    #[error(
        "Edge type {edge_type} is incompatible with endpoints {src_types:?} -> {dst_types:?}"
    )]
    IncompatibleEdgeType {
        edge_type: EdgeTypeId,
        src_types: Vec<VertexTypeId>,
        dst_types: Vec<VertexTypeId>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        PatternError::Serialization(err.to_string())
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
