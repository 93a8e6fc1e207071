// std imports
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

// ---

/// Input symbol accepted by the automaton.
///
/// Implemented for every type that is `Copy + Ord + Hash + Debug`, so `char`, `u8`
/// and small token identifiers all work out of the box.
pub trait Symbol: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> Symbol for T {}

// ---

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

// ---

/// One automaton state, i.e. one prefix of some inserted fragment.
#[derive(Debug, Clone)]
pub(crate) struct Node<S> {
    /// Trie edges, each child has exactly one parent.
    pub(crate) transitions: BTreeMap<S, NodeId>,
    /// Memoized results of the goto function.
    pub(crate) automaton_transitions: BTreeMap<S, NodeId>,
    pub(crate) suffix_link: NodeId,
    pub(crate) terminal_link: Option<NodeId>,
    pub(crate) matched_ids: Vec<usize>,
    pub(crate) depth: usize,
}

impl<S> Node<S> {
    fn new(depth: usize) -> Self {
        Self {
            transitions: BTreeMap::new(),
            automaton_transitions: BTreeMap::new(),
            suffix_link: NodeId::ROOT,
            terminal_link: None,
            matched_ids: Vec::new(),
            depth,
        }
    }
}

// ---

/// Prefix tree holding all inserted fragments, stored as an arena of nodes.
///
/// Links between nodes are plain [`NodeId`] indices, so the cyclic suffix link
/// structure built on top of the trie needs no shared ownership.
#[derive(Debug, Clone)]
pub struct Trie<S> {
    nodes: Vec<Node<S>>,
}

impl<S: Symbol> Trie<S> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
        }
    }

    /// Inserts a fragment and tags its final node with `id`.
    ///
    /// Inserting the same id for the same fragment twice has no effect.
    /// Returns the node representing the whole fragment.
    pub fn insert<I>(&mut self, fragment: I, id: usize) -> NodeId
    where
        I: IntoIterator<Item = S>,
    {
        let mut current = NodeId::ROOT;
        for symbol in fragment {
            current = match self.child(current, symbol) {
                Some(child) => child,
                None => self.add_child(current, symbol),
            };
        }

        let ids = &mut self.node_mut(current).matched_ids;
        if !ids.contains(&id) {
            ids.push(id);
        }
        current
    }

    /// Returns the trie child of `node` reached by `symbol`, if any.
    #[inline]
    pub fn child(&self, node: NodeId, symbol: S) -> Option<NodeId> {
        self.node(node).transitions.get(&symbol).copied()
    }

    /// Follows trie edges only, returning the node representing `prefix`.
    pub fn find<I>(&self, prefix: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = S>,
    {
        prefix
            .into_iter()
            .try_fold(NodeId::ROOT, |node, symbol| self.child(node, symbol))
    }

    /// Number of nodes, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// All symbols labelling at least one trie edge.
    pub fn alphabet(&self) -> BTreeSet<S> {
        self.nodes
            .iter()
            .flat_map(|node| node.transitions.keys().copied())
            .collect()
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<S> {
        &mut self.nodes[id.index()]
    }

    fn add_child(&mut self, parent: NodeId, symbol: S) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        let depth = self.node(parent).depth + 1;
        self.nodes.push(Node::new(depth));
        self.node_mut(parent).transitions.insert(symbol, id);
        id
    }
}

impl<S: Symbol> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}
