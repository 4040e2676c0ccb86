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

use serde::{Deserialize, Serialize};

use crate::constants::NodeId;
use crate::constants::Weight;
use crate::constants::WEIGHT_ZERO;

/// A single path out of a shortest path tree. The node order is always
/// source first, target last, and since ties between equal-weight paths are
/// broken deterministically two equal paths also have equal node arrays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    source: NodeId,
    target: NodeId,
    weight: Weight,
    nodes: Vec<NodeId>,
}

impl ShortestPath {
    pub fn new(source: NodeId, target: NodeId, weight: Weight, nodes: Vec<NodeId>) -> Self {
        ShortestPath {
            source,
            target,
            weight,
            nodes,
        }
    }

    /// The trivial path from a node to itself.
    pub fn singular(node: NodeId) -> Self {
        ShortestPath {
            source: node,
            target: node,
            weight: WEIGHT_ZERO,
            nodes: vec![node],
        }
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_target(&self) -> NodeId {
        self.target
    }

    pub fn get_weight(&self) -> Weight {
        self.weight
    }

    pub fn get_nodes(&self) -> &Vec<NodeId> {
        &self.nodes
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
