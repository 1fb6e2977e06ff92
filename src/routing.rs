use std::cmp::Ordering;
use std::fmt::{self, Display};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::{CostArithmetic, DecimalArithmetic, PathError, WeightedGraph};

/// Ordered node sequence from the start node to a queried node, together with
/// the total cost of traversing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, C> {
    pub nodes: Vec<N>,
    pub cost: C,
}

impl<N: Display, C: Display> Display for Path<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, " (cost {})", self.cost)
    }
}

/// Per-node record of the computation. Owned exclusively by the engine and
/// keyed by a stable arena index assigned once at initialization.
#[derive(Debug)]
struct PathState<N, C> {
    node: N,
    /// Arena index of the node preceding this one on the best known path.
    /// None for the start node and for nodes not yet reached.
    predecessor: Option<usize>,
    /// Cumulative cost of the best known path from the start node.
    /// None until first discovered. The start node's own cost stays unset.
    cost: Option<C>,
    /// Once true, cost and predecessor are optimal and never change again.
    finalized: bool,
}

/// Dijkstra's algorithm bound to one graph and one start node.
///
/// The engine finalizes nodes lazily: a single-target query stops as soon as
/// the target is proven optimal, and later queries against the same engine
/// resume from the already finalized state instead of recomputing. Edge
/// weights must be non-negative; the greedy finalize-on-pop step is unsound
/// for negative weights and the engine does not check for them.
///
/// Not safe for concurrent queries without external serialization. Queries
/// from a different start node need a separate engine instance.
#[derive(Debug)]
pub struct ShortestPathEngine<'g, G: WeightedGraph, A = DecimalArithmetic> {
    graph: &'g G,
    arithmetic: A,
    start: usize,
    states: Vec<PathState<G::Node, G::Weight>>,
    index: FxHashMap<G::Node, usize>,
    /// Discovered but not yet finalized nodes (the frontier).
    pool: FxHashSet<usize>,
}

impl<'g, G> ShortestPathEngine<'g, G>
where
    G: WeightedGraph,
    DecimalArithmetic: CostArithmetic<G::Weight>,
{
    /// Binds an engine to `start` using the default decimal cost policy.
    pub fn new(graph: &'g G, start: G::Node) -> Result<Self, PathError> {
        Self::with_arithmetic(graph, start, DecimalArithmetic)
    }
}

impl<'g, G, A> ShortestPathEngine<'g, G, A>
where
    G: WeightedGraph,
    A: CostArithmetic<G::Weight>,
{
    /// Binds an engine to `start` with a caller-supplied cost policy.
    ///
    /// Creates one state record per graph node, seeding the direct neighbors
    /// of `start` with their edge weight and `start` as predecessor. The
    /// start node itself is finalized immediately.
    pub fn with_arithmetic(graph: &'g G, start: G::Node, arithmetic: A) -> Result<Self, PathError> {
        let nodes: Vec<G::Node> = graph.nodes().collect();
        let index: FxHashMap<G::Node, usize> = nodes.iter().cloned().zip(0..).collect();
        let start_ix = *index.get(&start).ok_or(PathError::InvalidStart)?;

        debug!("Binding engine to {start:?} over {} nodes", nodes.len());

        let mut states: Vec<PathState<G::Node, G::Weight>> = nodes
            .into_iter()
            .map(|node| {
                let cost = if node == start {
                    None
                } else {
                    graph.edge_weight(&start, &node)
                };
                PathState {
                    predecessor: cost.as_ref().map(|_| start_ix),
                    cost,
                    node,
                    finalized: false,
                }
            })
            .collect();
        states[start_ix].finalized = true;

        let pool = graph
            .neighbors(&start)
            .filter_map(|n| index.get(&n).copied())
            .filter(|&ix| ix != start_ix)
            .collect();

        Ok(Self {
            graph,
            arithmetic,
            start: start_ix,
            states,
            index,
            pool,
        })
    }

    /// The node this engine computes shortest paths from.
    pub fn start(&self) -> &G::Node {
        &self.states[self.start].node
    }

    /// Shortest path from the start node to `end`.
    ///
    /// Runs relaxation only as far as needed: an already finalized target is
    /// answered by walking predecessor links alone, so repeated queries are
    /// idempotent. Returns [`PathError::Unreachable`] when no path exists or
    /// `end` is not a member of the graph.
    pub fn shortest_path_to(&mut self, end: &G::Node) -> Result<Path<G::Node, G::Weight>, PathError> {
        let end_ix = *self.index.get(end).ok_or(PathError::Unreachable)?;
        if !self.states[end_ix].finalized {
            self.run_until(Some(end_ix))?;
        }
        self.reconstruct(end_ix)
    }

    /// Shortest paths from the start node to every node of the graph.
    ///
    /// Runs relaxation to pool exhaustion. Unreachable nodes are present in
    /// the result with `None` rather than omitted.
    #[allow(clippy::type_complexity)]
    pub fn all_shortest_paths(
        &mut self,
    ) -> Result<FxHashMap<G::Node, Option<Path<G::Node, G::Weight>>>, PathError> {
        self.run_until(None)?;

        let mut paths = FxHashMap::default();
        for ix in 0..self.states.len() {
            let path = match self.reconstruct(ix) {
                Ok(path) => Some(path),
                Err(PathError::Unreachable) => None,
                Err(error) => return Err(error),
            };
            paths.insert(self.states[ix].node.clone(), path);
        }
        Ok(paths)
    }

    /// Pops candidates off the pool by increasing cost, finalizing each one
    /// and relaxing its unfinalized neighbors, until `target` is finalized or
    /// the pool is exhausted. Nodes never reached keep their cost unset.
    fn run_until(&mut self, target: Option<usize>) -> Result<(), PathError> {
        let graph = self.graph;

        while let Some(min) = self.min_candidate()? {
            self.pool.remove(&min);
            self.states[min].finalized = true;
            debug!("Finalized {:?}", self.states[min].node);

            let min_node = self.states[min].node.clone();
            // pool members always carry a cost, they were relaxed before
            // insertion
            if let Some(min_cost) = self.states[min].cost.clone() {
                for neighbor in graph.neighbors(&min_node) {
                    let Some(&n) = self.index.get(&neighbor) else {
                        continue;
                    };
                    if self.states[n].finalized {
                        continue;
                    }
                    let Some(weight) = graph.edge_weight(&min_node, &neighbor) else {
                        continue;
                    };

                    let candidate = self.arithmetic.combine(&min_cost, &weight)?;
                    let improves = match &self.states[n].cost {
                        None => true,
                        Some(current) => {
                            self.arithmetic.compare(&candidate, current)? == Ordering::Less
                        }
                    };
                    if improves {
                        self.states[n].predecessor = Some(min);
                        self.states[n].cost = Some(candidate);
                    }
                    self.pool.insert(n);
                }
            }

            // the target's neighbors are relaxed before stopping so that a
            // later query can resume from a consistent frontier
            if target == Some(min) {
                return Ok(());
            }
        }

        Ok(())
    }

    /// The pool member with the smallest cost, or None on an empty pool.
    /// Ties go to the lowest arena index, so among equal costs the node that
    /// comes first in the graph's node iteration order wins.
    fn min_candidate(&self) -> Result<Option<usize>, PathError> {
        let mut min: Option<(usize, &G::Weight)> = None;
        for &ix in &self.pool {
            let Some(cost) = &self.states[ix].cost else {
                continue;
            };
            match min {
                None => min = Some((ix, cost)),
                Some((best, best_cost)) => match self.arithmetic.compare(cost, best_cost)? {
                    Ordering::Less => min = Some((ix, cost)),
                    Ordering::Equal if ix < best => min = Some((ix, cost)),
                    _ => {}
                },
            }
        }
        Ok(min.map(|(ix, _)| ix))
    }

    /// Walks predecessor links backward from `end` to the start node, then
    /// reverses the collected sequence.
    fn reconstruct(&self, end: usize) -> Result<Path<G::Node, G::Weight>, PathError> {
        let cost = match &self.states[end].cost {
            Some(cost) => cost.clone(),
            None if end == self.start => self.arithmetic.zero()?,
            None => return Err(PathError::Unreachable),
        };

        let mut nodes = vec![self.states[end].node.clone()];
        let mut current = end;
        while let Some(previous) = self.states[current].predecessor {
            current = previous;
            nodes.push(self.states[current].node.clone());
        }
        nodes.reverse();

        Ok(Path { nodes, cost })
    }
}
