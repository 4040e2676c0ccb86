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

use std::cmp;

use crate::constants::{NodeId, Weight, NO_EDGE, WEIGHT_MAX};
use crate::dense_graph::DenseGraph;

pub struct FloydWarshall {
    num_nodes: usize,
    matrix: Vec<Weight>,
}

impl FloydWarshall {
    /// Computes the distance between every pair of nodes of the given graph.
    pub fn new(graph: &DenseGraph) -> Self {
        let n = graph.get_num_nodes();
        let mut matrix = vec![WEIGHT_MAX; n * n];
        for i in 0..n {
            for j in 0..n {
                if graph.get_weight(i, j) != NO_EDGE {
                    matrix[i * n + j] = graph.get_weight(i, j);
                }
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        matrix[i * n + j] = 0;
                    }
                    let weight_ik = matrix[i * n + k];
                    let weight_kj = matrix[k * n + j];
                    if weight_ik == WEIGHT_MAX || weight_kj == WEIGHT_MAX {
                        continue;
                    }
                    let idx = i * n + j;
                    matrix[idx] = cmp::min(matrix[idx], weight_ik + weight_kj)
                }
            }
        }
        FloydWarshall {
            num_nodes: n,
            matrix,
        }
    }

    pub fn calc_weight(&self, source: NodeId, target: NodeId) -> Weight {
        return self.matrix[source * self.num_nodes + target];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_weights() {
        // 0 --6-- 1 --1-- 3        4
        //         |
        //         2
        let mut g = DenseGraph::new(5);
        g.set_edge(0, 1, 6);
        g.set_edge(1, 3, 1);
        g.set_edge(1, 2, 2);
        let fw = FloydWarshall::new(&g);
        assert_eq!(fw.calc_weight(0, 3), 7);
        assert_eq!(fw.calc_weight(3, 0), 7);
        assert_eq!(fw.calc_weight(2, 3), 3);
        assert_eq!(fw.calc_weight(1, 1), 0);
        assert_eq!(fw.calc_weight(0, 4), WEIGHT_MAX);
        assert_eq!(fw.calc_weight(4, 0), WEIGHT_MAX);
    }
}
