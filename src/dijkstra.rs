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

use crate::constants::{NodeId, Weight, INVALID_NODE, NO_EDGE, WEIGHT_MAX, WEIGHT_ZERO};
use crate::dense_graph::DenseGraph;
use crate::shortest_path_tree::ShortestPathTree;

/// Computes the shortest path tree rooted at `source` with the classic
/// dense Dijkstra: V-1 rounds of picking the unvisited node with the
/// smallest tentative distance and relaxing its neighbors, scanning a full
/// matrix row each round, so O(V^2) overall. For the hand-entered graph
/// sizes this crate is built for that beats maintaining a heap.
///
/// All state is freshly allocated per call and handed over to the returned
/// tree, so running the same query twice yields identical results. The
/// graph is expected to come out of a validated request; an out-of-range
/// source is a programmer error and panics.
pub fn calc_tree(graph: &DenseGraph, source: NodeId) -> ShortestPathTree {
    let num_nodes = graph.get_num_nodes();
    assert!(
        source < num_nodes,
        "invalid source node {}, graph has {} nodes",
        source,
        num_nodes
    );
    let mut dist = vec![WEIGHT_MAX; num_nodes];
    let mut previous = vec![INVALID_NODE; num_nodes];
    let mut visited = vec![false; num_nodes];
    dist[source] = WEIGHT_ZERO;

    for _ in 1..num_nodes {
        let u = min_distance_node(&dist, &visited);
        visited[u] = true;
        if dist[u] == WEIGHT_MAX {
            // everything still unvisited is unreachable, nothing to relax
            continue;
        }
        for v in 0..num_nodes {
            if visited[v] {
                continue;
            }
            let weight = graph.get_weight(u, v);
            if weight == NO_EDGE {
                continue;
            }
            let candidate = dist[u].saturating_add(weight);
            if candidate < dist[v] {
                dist[v] = candidate;
                previous[v] = u;
            }
        }
    }
    ShortestPathTree::new(source, dist, previous)
}

/// Picks the unvisited node with the smallest tentative distance. Only a
/// strictly smaller distance replaces the current pick, so ties resolve to
/// the lowest node id, and once only unreachable nodes are left the lowest
/// of them is returned. There is always at least one unvisited node because
/// the caller runs at most V-1 rounds.
fn min_distance_node(dist: &[Weight], visited: &[bool]) -> NodeId {
    let mut min_node = INVALID_NODE;
    for node in 0..dist.len() {
        if visited[node] {
            continue;
        }
        if min_node == INVALID_NODE || dist[node] < dist[min_node] {
            min_node = node;
        }
    }
    min_node
}
