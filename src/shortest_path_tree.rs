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

use crate::constants::{NodeId, Weight, INVALID_NODE, WEIGHT_MAX};
use crate::shortest_path::ShortestPath;

/// The result of a single source shortest path run: for every node the
/// distance from the source and the predecessor on the shortest path, with
/// `WEIGHT_MAX`/`INVALID_NODE` marking unreached nodes. Paths to any target
/// can be read off without running the search again.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: Vec<Weight>,
    previous: Vec<NodeId>,
}

impl ShortestPathTree {
    pub(crate) fn new(source: NodeId, dist: Vec<Weight>, previous: Vec<NodeId>) -> Self {
        ShortestPathTree {
            source,
            dist,
            previous,
        }
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_num_nodes(&self) -> usize {
        self.dist.len()
    }

    pub fn get_distances(&self) -> &Vec<Weight> {
        &self.dist
    }

    /// The distance from the source to the given node, or `None` if the node
    /// was not reached.
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        if self.dist[node] == WEIGHT_MAX {
            None
        } else {
            Some(self.dist[node])
        }
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.dist[node] != WEIGHT_MAX
    }

    /// The node preceding the given node on its shortest path, or `None` for
    /// the source and for unreached nodes.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        if self.previous[node] == INVALID_NODE {
            None
        } else {
            Some(self.previous[node])
        }
    }

    /// Reconstructs the path from the source to `target` by walking the
    /// predecessor chain backwards and reversing it once, so no recursion no
    /// matter how long the path gets.
    pub fn path_to(&self, target: NodeId) -> Option<ShortestPath> {
        if !self.is_reached(target) {
            return None;
        }
        if target == self.source {
            return Some(ShortestPath::singular(self.source));
        }
        let mut nodes = vec![];
        let mut node = target;
        while node != INVALID_NODE {
            nodes.push(node);
            node = self.previous[node];
        }
        nodes.reverse();
        Some(ShortestPath::new(
            self.source,
            target,
            self.dist[target],
            nodes,
        ))
    }

    /// All (predecessor, node) pairs of the tree in ascending node order.
    /// The source and unreached nodes have no predecessor and are skipped.
    pub fn tree_edges(&self) -> Vec<(NodeId, NodeId)> {
        (0..self.dist.len())
            .filter(|&node| self.previous[node] != INVALID_NODE)
            .map(|node| (self.previous[node], node))
            .collect()
    }

    /// Renders the per-vertex result table, one row per node with its
    /// distance and full path, unreached nodes shown as `INF` with no path.
    pub fn result_table(&self) -> String {
        let mut table = String::from("Vertex  Distance  Path\n");
        for node in 0..self.get_num_nodes() {
            match self.path_to(node) {
                Some(path) => {
                    table.push_str(&format!("{:<6}  {:<8}  {}\n", node, self.dist[node], path));
                }
                None => {
                    table.push_str(&format!("{:<6}  {:<8}  -\n", node, "INF"));
                }
            }
        }
        table
    }
}
