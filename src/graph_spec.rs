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

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight, MAX_NODES};
use crate::dense_graph::DenseGraph;
use crate::error::InputError;

/// A shortest path request exactly as the user entered it: the declared
/// vertex and edge counts, the source vertex and the list of edge triples.
///
/// All values are kept as signed integers and nothing is checked on entry,
/// so that `validate()` can report out-of-range values (including negative
/// ones) as range errors rather than parse errors. A `GraphSpec` is built
/// either directly with `new()`/`add_edge()` or from the text fields of an
/// entry form with `parse()`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphSpec {
    num_nodes: i64,
    num_edges: i64,
    source: i64,
    edges: Vec<RawEdge>,
}

impl GraphSpec {
    pub fn new(num_nodes: i64, num_edges: i64, source: i64) -> Self {
        GraphSpec {
            num_nodes,
            num_edges,
            source,
            edges: Vec::new(),
        }
    }

    /// Records an edge triple without checking anything, `validate()` does.
    pub fn add_edge(&mut self, from: i64, to: i64, weight: i64) {
        self.edges.push(RawEdge { from, to, weight });
    }

    /// Builds a request from the four fields of the entry form: the vertex
    /// count, the edge count, the source vertex and the multi-line edge
    /// list. Only integer parsing happens here; any field that is not an
    /// integer fails with the generic `NotNumeric` error, and every
    /// non-blank line of `edge_area` must consist of exactly three fields.
    /// Blank lines are ignored.
    pub fn parse(
        num_nodes_field: &str,
        num_edges_field: &str,
        source_field: &str,
        edge_area: &str,
    ) -> Result<Self, InputError> {
        let mut spec = GraphSpec::new(
            parse_int(num_nodes_field)?,
            parse_int(num_edges_field)?,
            parse_int(source_field)?,
        );
        for line in edge_area.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(InputError::MalformedEdgeLine {
                    line: line.to_string(),
                });
            }
            spec.add_edge(
                parse_int(fields[0])?,
                parse_int(fields[1])?,
                parse_int(fields[2])?,
            );
        }
        Ok(spec)
    }

    pub fn get_num_nodes(&self) -> i64 {
        self.num_nodes
    }

    pub fn get_num_edges(&self) -> i64 {
        self.num_edges
    }

    pub fn get_source(&self) -> i64 {
        self.source
    }

    pub fn get_edges(&self) -> &Vec<RawEdge> {
        &self.edges
    }

    /// Runs all semantic checks in the order of the entry form and builds
    /// the symmetric adjacency matrix: first the counts, then the source
    /// vertex, then the edge list length and finally every single edge.
    ///
    /// The request is checked as a whole, so on failure no partially
    /// populated graph escapes. Duplicate edge pairs overwrite each other
    /// (the last weight wins) and loop edges are skipped, both with a
    /// warning.
    pub fn validate(&self) -> Result<ValidatedInput, InputError> {
        if self.num_nodes <= 0 || self.num_edges <= 0 {
            return Err(InputError::InvalidCounts {
                num_nodes: self.num_nodes,
                num_edges: self.num_edges,
            });
        }
        if self.num_nodes > MAX_NODES as i64 {
            return Err(InputError::TooManyNodes {
                num_nodes: self.num_nodes,
            });
        }
        // no overflow here, num_nodes is capped
        if self.num_edges > self.num_nodes * (self.num_nodes - 1) / 2 {
            return Err(InputError::InvalidCounts {
                num_nodes: self.num_nodes,
                num_edges: self.num_edges,
            });
        }
        if self.source < 0 || self.source >= self.num_nodes {
            return Err(InputError::InvalidSource {
                vertex: self.source,
                num_nodes: self.num_nodes,
            });
        }
        if self.edges.len() != self.num_edges as usize {
            return Err(InputError::EdgeCountMismatch {
                expected: self.num_edges,
                actual: self.edges.len(),
            });
        }
        let mut graph = DenseGraph::new(self.num_nodes as usize);
        for e in &self.edges {
            if e.from < 0
                || e.from >= self.num_nodes
                || e.to < 0
                || e.to >= self.num_nodes
                || e.weight <= 0
            {
                return Err(InputError::InvalidEdge {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                    num_nodes: self.num_nodes,
                });
            }
            if e.from == e.to {
                warn!(
                    "loop edges are not allowed, skipped edge ({}, {}, {})",
                    e.from, e.to, e.weight
                );
                continue;
            }
            graph.set_edge(e.from as NodeId, e.to as NodeId, e.weight as Weight);
        }
        Ok(ValidatedInput {
            graph,
            source: self.source as NodeId,
        })
    }
}

/// An edge triple as entered, before any range checks.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct RawEdge {
    pub from: i64,
    pub to: i64,
    pub weight: i64,
}

/// The outcome of a successful validation: the fully populated adjacency
/// matrix plus the in-range source node. This is the only doorway to the
/// engine, which therefore never has to re-check anything.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    graph: DenseGraph,
    source: NodeId,
}

impl ValidatedInput {
    pub fn get_graph(&self) -> &DenseGraph {
        &self.graph
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn into_parts(self) -> (DenseGraph, NodeId) {
        (self.graph, self.source)
    }
}

fn parse_int(field: &str) -> Result<i64, InputError> {
    field.trim().parse::<i64>().map_err(|_| InputError::NotNumeric)
}
