/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use thiserror::Error;

use crate::constants::MAX_NODES;

/// Everything that can be wrong with a user-entered graph description.
///
/// Each variant corresponds to exactly one of the checks in
/// `GraphSpec::parse`/`GraphSpec::validate`, so callers can match on the
/// kind of failure while the `Display` text can be shown to the user as-is.
/// All of these are recoverable input errors, none of them is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A field did not parse as an integer. Deliberately generic, no matter
    /// which field it was: the entry form shows one message for all of them.
    #[error("please enter valid numeric values for vertices, edges and source")]
    NotNumeric,

    /// The vertex or edge count is not positive, or more edges were declared
    /// than a simple undirected graph with `num_nodes` vertices can have.
    #[error(
        "invalid number of vertices or edges, both must be positive and the \
         number of edges must not exceed V*(V-1)/2"
    )]
    InvalidCounts { num_nodes: i64, num_edges: i64 },

    /// The vertex count exceeds what the dense matrix representation is
    /// willing to allocate.
    #[error("too many vertices ({num_nodes}), at most {} are supported", MAX_NODES)]
    TooManyNodes { num_nodes: i64 },

    #[error("invalid source vertex {vertex}, it should be between 0 and {}", .num_nodes - 1)]
    InvalidSource { vertex: i64, num_nodes: i64 },

    /// The number of edge lines does not match the declared edge count.
    #[error("please enter exactly {expected} edges, got {actual}")]
    EdgeCountMismatch { expected: i64, actual: usize },

    /// An edge line does not consist of exactly three fields.
    #[error("each edge should have the format \"src dest weight\", got \"{line}\"")]
    MalformedEdgeLine { line: String },

    /// An edge references a vertex outside the graph or has a non-positive
    /// weight (zero is reserved for "no edge", negative weights would break
    /// the algorithm).
    #[error(
        "invalid edge values ({from}, {to}, {weight}), vertices should be \
         between 0 and {} and the weight should be positive", .num_nodes - 1
    )]
    InvalidEdge {
        from: i64,
        to: i64,
        weight: i64,
        num_nodes: i64,
    },
}
