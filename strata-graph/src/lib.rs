//! Dense weighted graph with Dijkstra shortest paths.
//!
//! The graph is an adjacency matrix of `i64` weights where zero means "no
//! edge". Dijkstra's loop leans entirely on the priority queue from
//! `strata-collections`, touching only its three stable operations:
//! bulk construction, `extract_root`, and `update_value_priority`.
//!
//! Dijkstra assumes weights along a path increase monotonically; negative
//! weights are representable but the greedy result then carries the usual
//! caveats.
//!
//! # Example
//!
//! ```
//! use strata_graph::DenseGraph;
//!
//! let mut graph = DenseGraph::new(3);
//! graph.set_edge_weight(0, 1, 4, false)?;
//! graph.set_edge_weight(1, 2, 2, false)?;
//! graph.set_edge_weight(0, 2, 9, false)?;
//!
//! let paths = graph.dijkstra(0)?;
//! assert_eq!(paths.dist(), &[0, 4, 6]);
//!
//! let route: Vec<usize> = paths.path_to(2)?.into_iter().collect();
//! assert_eq!(route, vec![0, 1, 2]);
//! # Ok::<(), strata_graph::GraphError>(())
//! ```

#![warn(missing_docs)]

use core::fmt;

use strata_collections::{Deque, PriorityQueue};

/// Distance assigned to nodes no path reaches.
pub const UNREACHABLE: i64 = i64::MAX;

/// Errors raised by graph construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A node index is not in `0..size`.
    NodeOutOfRange {
        /// The offending node index.
        node: usize,
        /// The graph's node count.
        size: usize,
    },
    /// An adjacency matrix row has the wrong length.
    NotSquare {
        /// The offending row.
        row: usize,
        /// That row's length.
        len: usize,
        /// The expected length (the row count).
        size: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeOutOfRange { node, size } => {
                write!(f, "node {node} out of range for graph of size {size}")
            }
            GraphError::NotSquare { row, len, size } => {
                write!(f, "adjacency row {row} has length {len}, expected {size}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// A weighted graph over a dense adjacency matrix.
///
/// Zero weight means no edge. Edges can be set directed or undirected;
/// an undirected set writes both matrix cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    adj: Vec<Vec<i64>>,
    size: usize,
}

impl DenseGraph {
    /// Creates a graph of `size` disconnected nodes.
    pub fn new(size: usize) -> Self {
        Self {
            adj: vec![vec![0; size]; size],
            size,
        }
    }

    /// Wraps an existing adjacency matrix.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotSquare`] if any row's length differs from the row
    /// count.
    pub fn from_adjacency(adj: Vec<Vec<i64>>) -> Result<Self, GraphError> {
        let size = adj.len();
        for (row, weights) in adj.iter().enumerate() {
            if weights.len() != size {
                return Err(GraphError::NotSquare {
                    row,
                    len: weights.len(),
                    size,
                });
            }
        }
        Ok(Self { adj, size })
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets the weight of the edge from `source` to `target`; when
    /// `directed` is false the reverse edge is written too.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] for either endpoint.
    pub fn set_edge_weight(
        &mut self,
        source: usize,
        target: usize,
        weight: i64,
        directed: bool,
    ) -> Result<(), GraphError> {
        self.check_node(source)?;
        self.check_node(target)?;
        self.adj[source][target] = weight;
        if !directed {
            self.adj[target][source] = weight;
        }
        Ok(())
    }

    /// Returns the weight of the edge from `source` to `target` (zero if
    /// absent).
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] for either endpoint.
    pub fn edge_weight(&self, source: usize, target: usize) -> Result<i64, GraphError> {
        self.check_node(source)?;
        self.check_node(target)?;
        Ok(self.adj[source][target])
    }

    /// Runs Dijkstra's algorithm from `source` over the whole graph.
    ///
    /// Every node starts [`UNREACHABLE`] except the source at zero; the
    /// priority queue hands back the nearest unvisited node, whose edges
    /// relax their neighbors' queued priorities in O(log n) each.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] if `source` is not a node.
    pub fn dijkstra(&self, source: usize) -> Result<ShortestPaths, GraphError> {
        self.check_node(source)?;

        let mut dist = vec![UNREACHABLE; self.size];
        let mut prev: Vec<Option<usize>> = vec![None; self.size];
        dist[source] = 0;

        let mut queue = PriorityQueue::from_entries(dist.iter().copied(), 0..self.size)
            .expect("node indices are distinct");
        let mut visited = vec![false; self.size];

        while let Ok(node) = queue.extract_root() {
            visited[node] = true;
            if dist[node] == UNREACHABLE {
                // disconnected remainder; nothing to relax
                continue;
            }
            for neighbor in 0..self.size {
                let weight = self.adj[node][neighbor];
                if visited[neighbor] || weight == 0 {
                    continue;
                }
                let alt = dist[node].saturating_add(weight);
                if alt < dist[neighbor] {
                    dist[neighbor] = alt;
                    prev[neighbor] = Some(node);
                    queue
                        .update_value_priority(&neighbor, alt)
                        .expect("unvisited neighbor is still queued");
                }
            }
        }

        Ok(ShortestPaths { source, dist, prev })
    }

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node >= self.size {
            return Err(GraphError::NodeOutOfRange {
                node,
                size: self.size,
            });
        }
        Ok(())
    }
}

/// The result of a Dijkstra run: per-node distances and predecessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<i64>,
    prev: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// The source node the run started from.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance from the source to each node ([`UNREACHABLE`] when no
    /// path exists).
    #[inline]
    pub fn dist(&self) -> &[i64] {
        &self.dist
    }

    /// Predecessor of each node on its shortest path (`None` for the
    /// source and unreachable nodes).
    #[inline]
    pub fn prev(&self) -> &[Option<usize>] {
        &self.prev
    }

    /// Reconstructs the node sequence from the source to `target` by
    /// walking predecessors backwards, prepending as it goes.
    ///
    /// Returns an empty deque when `target` is unreachable.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] if `target` is not a node.
    pub fn path_to(&self, target: usize) -> Result<Deque<usize>, GraphError> {
        if target >= self.dist.len() {
            return Err(GraphError::NodeOutOfRange {
                node: target,
                size: self.dist.len(),
            });
        }
        let mut sequence = Deque::new();
        if self.prev[target].is_some() || target == self.source {
            let mut cursor = Some(target);
            while let Some(node) = cursor {
                sequence.push_front(node);
                cursor = self.prev[node];
            }
        }
        Ok(sequence)
    }
}
