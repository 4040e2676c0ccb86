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

#[macro_use]
extern crate log;

pub use crate::circle_layout::CircleLayout;
pub use crate::circle_layout::EdgeSegment;
pub use crate::circle_layout::Point;
pub use crate::constants::*;
pub use crate::dense_graph::DenseGraph;
pub use crate::dense_graph::Edge;
pub use crate::dijkstra::calc_tree;
pub use crate::error::InputError;
pub use crate::graph_spec::GraphSpec;
pub use crate::graph_spec::RawEdge;
pub use crate::graph_spec::ValidatedInput;
pub use crate::shortest_path::ShortestPath;
pub use crate::shortest_path_tree::ShortestPathTree;

mod circle_layout;
mod constants;
mod dense_graph;
mod dijkstra;
mod error;
#[cfg(test)]
mod floyd_warshall;
mod graph_spec;
mod shortest_path;
mod shortest_path_tree;

/// Validates the given request and calculates the shortest path tree rooted
/// at its source vertex. All checks of `GraphSpec::validate()` run first, so
/// the engine only ever sees well formed graphs.
pub fn compute(
    num_nodes: i64,
    num_edges: i64,
    source: i64,
    edges: &[(i64, i64, i64)],
) -> Result<ShortestPathTree, InputError> {
    let mut spec = GraphSpec::new(num_nodes, num_edges, source);
    for (from, to, weight) in edges {
        spec.add_edge(*from, *to, *weight);
    }
    compute_spec(&spec)
}

/// Like `compute()`, but starts from the raw text fields of an entry form.
pub fn compute_from_fields(
    num_nodes_field: &str,
    num_edges_field: &str,
    source_field: &str,
    edge_area: &str,
) -> Result<ShortestPathTree, InputError> {
    compute_spec(&GraphSpec::parse(
        num_nodes_field,
        num_edges_field,
        source_field,
        edge_area,
    )?)
}

/// Like `compute()`, but takes an already assembled `GraphSpec`.
pub fn compute_spec(spec: &GraphSpec) -> Result<ShortestPathTree, InputError> {
    let (graph, source) = spec.validate()?.into_parts();
    Ok(calc_tree(&graph, source))
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use rand::rngs::StdRng;
    use rand::Rng;

    use crate::floyd_warshall::FloydWarshall;

    use super::*;

    #[test]
    fn computes_the_example_from_the_form() {
        let tree = compute(3, 3, 0, &[(0, 1, 4), (1, 2, 2), (0, 2, 9)]).unwrap();
        assert_eq!(0, tree.get_source());
        assert_eq!(&vec![0, 4, 6], tree.get_distances());
        assert_eq!("0 -> 1", format!("{}", tree.path_to(1).unwrap()));
        assert_eq!("0 -> 1 -> 2", format!("{}", tree.path_to(2).unwrap()));
        assert_eq!(None, tree.predecessor(0));
    }

    #[test]
    fn computes_from_the_raw_form_fields() {
        let tree = compute_from_fields("3", "3", "0", "0 1 4\n1 2 2\n0 2 9").unwrap();
        assert_eq!(&vec![0, 4, 6], tree.get_distances());
    }

    #[test]
    fn isolated_source_reaches_only_itself() {
        let tree = compute(4, 1, 2, &[(0, 1, 3)]).unwrap();
        assert_eq!(Some(0), tree.distance(2));
        for node in &[0, 1, 3] {
            assert_eq!(None, tree.distance(*node));
            assert_eq!(None, tree.path_to(*node));
        }
    }

    #[test]
    fn rejects_impossible_edge_counts() {
        let result = compute(3, 4, 0, &[(0, 1, 1), (1, 2, 1), (0, 2, 1), (0, 1, 2)]);
        assert_eq!(
            Err(InputError::InvalidCounts {
                num_nodes: 3,
                num_edges: 4
            }),
            result
        );
    }

    #[test]
    fn rejects_zero_weight_edges() {
        let result = compute(2, 1, 0, &[(0, 1, 0)]);
        assert_eq!(
            Err(InputError::InvalidEdge {
                from: 0,
                to: 1,
                weight: 0,
                num_nodes: 2
            }),
            result
        );
    }

    #[test]
    fn random_graph_agrees_with_floyd_warshall() {
        const REPEATS: usize = 100;
        for _i in 0..REPEATS {
            run_test_on_random_graph();
        }
    }

    fn run_test_on_random_graph() {
        const NUM_NODES: usize = 30;
        const EDGE_PROBABILITY: f32 = 0.15;

        let mut rng = create_rng();
        let graph = DenseGraph::random(&mut rng, NUM_NODES, EDGE_PROBABILITY);
        debug!("random graph: \n {:?}", graph);

        let fw = FloydWarshall::new(&graph);

        let source = rng.gen_range(0, graph.get_num_nodes());
        let tree = calc_tree(&graph, source);
        for target in 0..graph.get_num_nodes() {
            let weight_fw = fw.calc_weight(source, target);
            let weight_tree = tree.distance(target).unwrap_or(WEIGHT_MAX);
            assert_eq!(
                weight_fw, weight_tree,
                "\nNo agreement for query from: {} to: {}\nFloyd-Warshall: {}\nDijkstra: {}\
                 \n Failing graph:\n{:?}",
                source, target, weight_fw, weight_tree, graph
            );
        }
        check_path_weights(&graph, &tree);
    }

    fn check_path_weights(graph: &DenseGraph, tree: &ShortestPathTree) {
        for target in 0..graph.get_num_nodes() {
            if let Some(path) = tree.path_to(target) {
                let nodes = path.get_nodes();
                assert_eq!(tree.get_source(), nodes[0]);
                assert_eq!(target, *nodes.last().unwrap());
                let mut weight = 0;
                for w in nodes.windows(2) {
                    assert!(
                        graph.has_edge(w[0], w[1]),
                        "path from {} to {} uses the missing edge ({}, {})\n Failing graph:\n{:?}",
                        tree.get_source(),
                        target,
                        w[0],
                        w[1],
                        graph
                    );
                    weight += graph.get_weight(w[0], w[1]);
                }
                assert_eq!(weight, path.get_weight());
                assert_eq!(Some(weight), tree.distance(target));
            }
        }
    }

    #[test]
    fn deterministic_result() {
        const NUM_NODES: usize = 30;
        const EDGE_PROBABILITY: f32 = 0.15;

        // Repeat a few times to reduce test flakiness.
        for _ in 0..10 {
            let mut rng = create_rng();
            let graph = DenseGraph::random(&mut rng, NUM_NODES, EDGE_PROBABILITY);
            let source = rng.gen_range(0, graph.get_num_nodes());
            let tree1 = calc_tree(&graph, source);
            let tree2 = calc_tree(&graph, source);
            assert_eq!(tree1, tree2);
            let serialized1 = bincode::serialize(&tree1).unwrap();
            let serialized2 = bincode::serialize(&tree2).unwrap();
            if serialized1 != serialized2 {
                panic!("Computing and serializing the same tree twice produced different results");
            }
        }
    }

    fn create_rng() -> StdRng {
        let seed = create_seed();
        create_rng_with_seed(seed)
    }

    fn create_rng_with_seed(seed: u64) -> StdRng {
        debug!("creating random number generator with seed: {}", seed);
        rand::SeedableRng::seed_from_u64(seed)
    }

    fn create_seed() -> u64 {
        SystemTime::now().elapsed().unwrap().as_nanos() as u64
    }
}
