// std imports
use std::collections::VecDeque;

// local imports
use crate::trie::{NodeId, Symbol, Trie};

// ---

/// A directed graph that can be traversed breadth-first.
pub trait Graph {
    type Vertex: Copy;
    type Edge: Copy;

    fn outgoing_edges(&self, vertex: Self::Vertex) -> Vec<Self::Edge>;
    fn target(&self, edge: &Self::Edge) -> Self::Vertex;
}

/// Event passed to a breadth-first search visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit<V, E> {
    /// A vertex has been taken from the queue, before its edges are examined.
    Vertex(V),
    /// An outgoing edge of the current vertex, before its target is queued.
    Edge(E),
}

/// Traverses `graph` breadth-first starting at `origin`.
///
/// The visitor gets mutable access to the graph, so it may update vertex data
/// as long as it keeps the edge set intact. The graph is expected to be a tree
/// when reachable from `origin`: vertices are not deduplicated.
pub fn breadth_first_search<G, F>(graph: &mut G, origin: G::Vertex, mut visit: F)
where
    G: Graph,
    F: FnMut(&mut G, Visit<G::Vertex, G::Edge>),
{
    let mut queue = VecDeque::from([origin]);
    while let Some(vertex) = queue.pop_front() {
        visit(graph, Visit::Vertex(vertex));
        for edge in graph.outgoing_edges(vertex) {
            visit(graph, Visit::Edge(edge));
            queue.push_back(graph.target(&edge));
        }
    }
}

// ---

/// A trie edge from a parent node to its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<S> {
    pub source: NodeId,
    pub target: NodeId,
    pub symbol: S,
}

impl<S: Symbol> Graph for Trie<S> {
    type Vertex = NodeId;
    type Edge = Edge<S>;

    fn outgoing_edges(&self, vertex: NodeId) -> Vec<Edge<S>> {
        self.node(vertex)
            .transitions
            .iter()
            .map(|(&symbol, &target)| Edge {
                source: vertex,
                target,
                symbol,
            })
            .collect()
    }

    #[inline]
    fn target(&self, edge: &Edge<S>) -> NodeId {
        edge.target
    }
}
