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

pub type NodeId = usize;
pub type Weight = usize;

/// Infinite distance, marks nodes that have not been reached from the source.
pub const WEIGHT_MAX: Weight = std::usize::MAX;
pub const WEIGHT_ZERO: Weight = 0;

/// Predecessor sentinel used for the source itself and for unreached nodes.
pub const INVALID_NODE: NodeId = std::usize::MAX;

/// Matrix entry meaning "there is no edge between these two nodes". This is
/// also why edge weights have to be strictly positive.
pub const NO_EDGE: Weight = 0;

/// Upper bound on the node count accepted by the validator. The dense
/// V x V matrix is meant for hand-entered graphs, so anything larger is
/// rejected before it can allocate a huge amount of memory.
pub const MAX_NODES: usize = 2048;
