use rustc_hash::FxHashMap;

use minpath::WeightedGraph;

/// Adjacency-list graph for tests. Nodes keep their insertion order so the
/// engine's pinned tie-break is predictable.
#[derive(Debug, Default)]
pub struct AdjacencyGraph<N, W> {
    nodes: Vec<N>,
    adjacency: FxHashMap<N, Vec<(N, W)>>,
}

impl<N: Clone + Eq + std::hash::Hash, W: Clone> AdjacencyGraph<N, W> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: FxHashMap::default(),
        }
    }

    pub fn add_node(&mut self, node: N) {
        if !self.adjacency.contains_key(&node) {
            self.adjacency.insert(node.clone(), Vec::new());
            self.nodes.push(node);
        }
    }

    pub fn add_edge(&mut self, a: N, b: N, weight: W) {
        self.add_node(a.clone());
        self.add_node(b.clone());
        self.adjacency
            .get_mut(&a)
            .unwrap()
            .push((b.clone(), weight.clone()));
        self.adjacency.get_mut(&b).unwrap().push((a, weight));
    }
}

impl<N, W> WeightedGraph for AdjacencyGraph<N, W>
where
    N: std::fmt::Debug + Clone + Eq + std::hash::Hash,
    W: Clone,
{
    type Node = N;
    type Weight = W;

    fn nodes(&self) -> impl Iterator<Item = N> {
        self.nodes.iter().cloned()
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = N> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|(n, _)| n.clone())
    }

    fn edge_weight(&self, a: &N, b: &N) -> Option<W> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|(n, _)| n == b)
            .map(|(_, w)| w.clone())
    }
}

/// Seven-node network: a-b 4, a-c 5, b-d 9, b-e 2, c-d 1, c-f 9, d-f 3,
/// d-e 1, e-g 2, f-g 7. The cheapest route a to g is a-b-e-g with cost 8.
pub fn demo_network() -> AdjacencyGraph<&'static str, u32> {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", 4);
    graph.add_edge("a", "c", 5);
    graph.add_edge("b", "d", 9);
    graph.add_edge("b", "e", 2);
    graph.add_edge("c", "d", 1);
    graph.add_edge("c", "f", 9);
    graph.add_edge("d", "f", 3);
    graph.add_edge("d", "e", 1);
    graph.add_edge("e", "g", 2);
    graph.add_edge("f", "g", 7);
    graph
}

/// Minimum cost over every simple path between two nodes, by exhaustive
/// enumeration. Ground truth for small graphs only.
pub fn brute_force_cost<N>(graph: &AdjacencyGraph<N, u32>, from: N, to: &N) -> Option<u32>
where
    N: std::fmt::Debug + Clone + Eq + std::hash::Hash,
{
    fn walk<N>(
        graph: &AdjacencyGraph<N, u32>,
        current: N,
        to: &N,
        cost: u32,
        visited: &mut Vec<N>,
        best: &mut Option<u32>,
    ) where
        N: std::fmt::Debug + Clone + Eq + std::hash::Hash,
    {
        if current == *to {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for neighbor in graph.neighbors(&current) {
            if visited.contains(&neighbor) {
                continue;
            }
            let weight = graph.edge_weight(&current, &neighbor).unwrap();
            visited.push(neighbor.clone());
            walk(graph, neighbor, to, cost + weight, visited, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![from.clone()];
    walk(graph, from, to, 0, &mut visited, &mut best);
    best
}
