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

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight};
use crate::dense_graph::DenseGraph;
use crate::shortest_path_tree::ShortestPathTree;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A drawable edge: the endpoint coordinates plus the midpoint where a
/// weight label goes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeSegment {
    pub from: NodeId,
    pub to: NodeId,
    pub from_pos: Point,
    pub to_pos: Point,
    pub midpoint: Point,
    pub weight: Weight,
}

/// Spreads the nodes of a graph evenly over a circle, node 0 at the
/// rightmost point and the rest following counter-clockwise. The layout only
/// depends on the node count, so the same graph always renders the same way.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CircleLayout {
    positions: Vec<Point>,
}

impl CircleLayout {
    pub fn new(num_nodes: usize, center_x: f64, center_y: f64, radius: f64) -> Self {
        let mut positions = Vec::with_capacity(num_nodes);
        for node in 0..num_nodes {
            let angle = 2.0 * PI * node as f64 / num_nodes as f64;
            positions.push(Point::new(
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            ));
        }
        CircleLayout { positions }
    }

    pub fn get_num_nodes(&self) -> usize {
        self.positions.len()
    }

    pub fn get_position(&self, node: NodeId) -> Point {
        self.positions[node]
    }

    /// Segments for all edges of the graph, in the same order as
    /// `DenseGraph::get_edges`.
    pub fn edge_segments(&self, graph: &DenseGraph) -> Vec<EdgeSegment> {
        assert_eq!(
            self.get_num_nodes(),
            graph.get_num_nodes(),
            "layout and graph node counts do not match"
        );
        graph
            .get_edges()
            .iter()
            .map(|edge| self.segment(edge.from, edge.to, edge.weight))
            .collect()
    }

    /// Segments for the edges of a shortest path tree, typically drawn on
    /// top of the full edge set in a different color.
    pub fn tree_segments(&self, graph: &DenseGraph, tree: &ShortestPathTree) -> Vec<EdgeSegment> {
        assert_eq!(
            self.get_num_nodes(),
            tree.get_num_nodes(),
            "layout and tree node counts do not match"
        );
        tree.tree_edges()
            .iter()
            .map(|&(from, to)| self.segment(from, to, graph.get_weight(from, to)))
            .collect()
    }

    fn segment(&self, from: NodeId, to: NodeId, weight: Weight) -> EdgeSegment {
        let from_pos = self.positions[from];
        let to_pos = self.positions[to];
        EdgeSegment {
            from,
            to,
            from_pos,
            to_pos,
            midpoint: from_pos.midpoint(&to_pos),
            weight,
        }
    }
}
