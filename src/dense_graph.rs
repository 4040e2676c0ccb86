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

use std::fmt;

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::constants::NodeId;
use crate::constants::Weight;
use crate::constants::NO_EDGE;

/// An undirected graph stored as a dense, symmetric V x V adjacency matrix.
///
/// A matrix entry of `NO_EDGE` (zero) means the two nodes are not connected,
/// so only strictly positive edge weights can be stored. The diagonal is
/// always `NO_EDGE`, loop edges do not exist. The node count is fixed at
/// construction time.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    matrix: Vec<Weight>,
    num_nodes: usize,
    num_edges: usize,
}

impl DenseGraph {
    pub fn new(num_nodes: usize) -> Self {
        DenseGraph {
            matrix: vec![NO_EDGE; num_nodes * num_nodes],
            num_nodes,
            num_edges: 0,
        }
    }

    /// Builds a random graph, mostly used for testing purposes
    #[cfg(test)]
    pub fn random(rng: &mut StdRng, num_nodes: usize, edge_probability: f32) -> Self {
        let threshold = (edge_probability * 100.0) as u32;
        let mut g = DenseGraph::new(num_nodes);
        for from in 0..num_nodes {
            for to in from + 1..num_nodes {
                if rng.gen_range(0, 100) < threshold {
                    g.set_edge(from, to, rng.gen_range(1, 100));
                }
            }
        }
        g
    }

    /// Sets the weight of the edge between `a` and `b`, in both directions
    /// at once so the matrix stays symmetric. Setting the same pair twice
    /// overwrites the earlier weight.
    pub fn set_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        self.assert_valid_node_id(a);
        self.assert_valid_node_id(b);
        if a == b {
            panic!("loop edges are not allowed, got ({}, {})", a, b);
        }
        if weight == NO_EDGE {
            panic!(
                "edge weights must be positive, got ({}, {}, {})",
                a, b, weight
            );
        }
        if self.has_edge(a, b) {
            warn!(
                "duplicate edge ({}, {}), overwriting weight {} with {}",
                a,
                b,
                self.get_weight(a, b),
                weight
            );
        } else {
            self.num_edges += 1;
        }
        self.matrix[a * self.num_nodes + b] = weight;
        self.matrix[b * self.num_nodes + a] = weight;
    }

    /// The weight of the edge between `a` and `b`, or `NO_EDGE` if the two
    /// nodes are not connected.
    pub fn get_weight(&self, a: NodeId, b: NodeId) -> Weight {
        self.matrix[a * self.num_nodes + b]
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.get_weight(a, b) != NO_EDGE
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn get_num_edges(&self) -> usize {
        self.num_edges
    }

    /// All edges with `from < to`, in ascending order. Since the matrix is
    /// symmetric this covers every edge exactly once.
    pub fn get_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.num_edges);
        for from in 0..self.num_nodes {
            for to in from + 1..self.num_nodes {
                if self.has_edge(from, to) {
                    edges.push(Edge::new(from, to, self.get_weight(from, to)));
                }
            }
        }
        edges
    }

    pub fn unit_test_output_string(&self) -> String {
        let mut result = format!("let mut g = DenseGraph::new({});\n", self.num_nodes);
        for edge in self.get_edges() {
            result += &format!("g.set_edge({}, {}, {});\n", edge.from, edge.to, edge.weight);
        }
        result
    }

    fn assert_valid_node_id(&self, node: NodeId) {
        if node >= self.num_nodes {
            panic!(
                "invalid node id {}, must be in [0, {})",
                node, self.num_nodes
            );
        }
    }
}

impl fmt::Debug for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.unit_test_output_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Edge {
        Edge { from, to, weight }
    }
}
