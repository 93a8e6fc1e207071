// std imports
use std::slice;

// local imports
use crate::links::{build_suffix_links, build_terminal_links, goto, resolve};
use crate::trie::{NodeId, Symbol, Trie};

// ---

/// Lightweight handle to a state of an [`Automaton`].
///
/// The default value is a null reference, see [`NodeRef::NONE`].
/// A handle never owns anything, it is only meaningful together with the
/// automaton that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeRef(Option<NodeId>);

impl NodeRef {
    /// The null reference.
    pub const NONE: NodeRef = NodeRef(None);

    #[inline]
    pub fn new(id: NodeId) -> Self {
        Self(Some(id))
    }

    #[inline]
    pub fn id(self) -> Option<NodeId> {
        self.0
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0.is_none()
    }
}

impl From<NodeId> for NodeRef {
    fn from(id: NodeId) -> Self {
        Self::new(id)
    }
}

// ---

/// Collects fragments and builds an [`Automaton`] from them.
///
/// # Examples
///
/// ```
/// use ac_automaton::Builder;
///
/// let mut builder = Builder::new();
/// builder.add("he".chars(), 0).add("she".chars(), 1);
/// let mut automaton = builder.build();
///
/// let mut state = automaton.root();
/// for ch in "ushe".chars() {
///     state = automaton.next(state, ch);
/// }
/// let mut ids: Vec<_> = automaton.matches(state).collect();
/// ids.sort();
/// assert_eq!(ids, vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<S = char> {
    fragments: Vec<(Vec<S>, usize)>,
}

impl<S: Symbol> Builder<S> {
    pub fn new() -> Self {
        Self { fragments: Vec::new() }
    }

    /// Registers a fragment under the given id.
    ///
    /// Empty fragments carry no constraint and are skipped.
    pub fn add<I>(&mut self, fragment: I, id: usize) -> &mut Self
    where
        I: IntoIterator<Item = S>,
    {
        let fragment: Vec<S> = fragment.into_iter().collect();
        if fragment.is_empty() {
            log::debug!("skipping empty fragment with id {id}");
        } else {
            self.fragments.push((fragment, id));
        }
        self
    }

    pub fn build(self) -> Automaton<S> {
        let mut trie = Trie::new();
        for (fragment, id) in &self.fragments {
            trie.insert(fragment.iter().copied(), *id);
        }
        build_suffix_links(&mut trie);
        build_terminal_links(&mut trie);
        log::debug!(
            "automaton built: {} fragments, {} states",
            self.fragments.len(),
            trie.len()
        );

        Automaton { trie, complete: false }
    }
}

impl<S: Symbol> Default for Builder<S> {
    fn default() -> Self {
        Self::new()
    }
}

// ---

/// Aho-Corasick automaton over a trie of fragments.
///
/// The automaton is immutable after construction except for the goto
/// memoization tables, which [`Automaton::next`] fills lazily and
/// [`Automaton::precompute`] fills eagerly.
#[derive(Debug, Clone)]
pub struct Automaton<S = char> {
    trie: Trie<S>,
    complete: bool,
}

impl<S: Symbol> Automaton<S> {
    /// Builds an automaton from `(fragment, id)` pairs.
    pub fn build<I, F>(fragments: I) -> Self
    where
        I: IntoIterator<Item = (F, usize)>,
        F: IntoIterator<Item = S>,
    {
        let mut builder = Builder::new();
        for (fragment, id) in fragments {
            builder.add(fragment, id);
        }
        builder.build()
    }

    #[inline]
    pub fn root(&self) -> NodeRef {
        NodeRef::new(NodeId::ROOT)
    }

    /// Advances `state` by `symbol`, memoizing the transition.
    ///
    /// Transitions from the null reference lead to the null reference.
    #[inline]
    pub fn next(&mut self, state: NodeRef, symbol: S) -> NodeRef {
        match state.id() {
            Some(node) => NodeRef::new(goto(&mut self.trie, node, symbol)),
            None => NodeRef::NONE,
        }
    }

    /// Advances `state` by `symbol` without updating the memoization tables.
    ///
    /// After [`Automaton::precompute`] this is a single lookup, otherwise it may
    /// walk the suffix chain.
    pub fn step(&self, state: NodeRef, symbol: S) -> NodeRef {
        let Some(node) = state.id() else {
            return NodeRef::NONE;
        };
        if self.complete {
            let target = self.trie.node(node).automaton_transitions.get(&symbol);
            return NodeRef::new(target.copied().unwrap_or(NodeId::ROOT));
        }
        NodeRef::new(resolve(&self.trie, node, symbol))
    }

    /// Memoizes transitions for every state and every symbol of the alphabet.
    ///
    /// Symbols outside the alphabet lead to the root from any state.
    pub fn precompute(&mut self) {
        if self.complete {
            return;
        }
        let alphabet = self.trie.alphabet();
        // Ids are assigned in insertion order, so walk states by depth to keep chains short.
        let mut order: Vec<NodeId> = (0..self.trie.len()).map(NodeId::from_index).collect();
        order.sort_by_key(|&id| self.trie.node(id).depth);
        for node in order {
            for &symbol in &alphabet {
                goto(&mut self.trie, node, symbol);
            }
        }
        self.complete = true;
        log::debug!(
            "automaton transitions precomputed: {} states, {} symbols",
            self.trie.len(),
            alphabet.len()
        );
    }

    #[inline]
    pub fn is_precomputed(&self) -> bool {
        self.complete
    }

    /// Calls `visit` with the id of every fragment ending at `state`.
    pub fn generate_matches<F>(&self, state: NodeRef, mut visit: F)
    where
        F: FnMut(usize),
    {
        for id in self.matches(state) {
            visit(id);
        }
    }

    /// Iterates over the ids of all fragments ending at `state`.
    ///
    /// The state's own ids come first, then those reachable by terminal links,
    /// from the longest fragment to the shortest.
    pub fn matches(&self, state: NodeRef) -> Matches<'_, S> {
        Matches {
            trie: &self.trie,
            ids: Default::default(),
            next: state.id(),
        }
    }

    pub fn suffix_link(&self, state: NodeRef) -> NodeRef {
        match state.id() {
            Some(node) => NodeRef::new(self.trie.node(node).suffix_link),
            None => NodeRef::NONE,
        }
    }

    pub fn terminal_link(&self, state: NodeRef) -> NodeRef {
        NodeRef(state.id().and_then(|node| self.trie.node(node).terminal_link))
    }

    pub fn matched_ids(&self, state: NodeRef) -> &[usize] {
        match state.id() {
            Some(node) => &self.trie.node(node).matched_ids,
            None => &[],
        }
    }

    /// Length of the prefix represented by `state`.
    pub fn depth(&self, state: NodeRef) -> Option<usize> {
        state.id().map(|node| self.trie.node(node).depth)
    }

    /// Returns the state representing `prefix`, following trie edges only.
    pub fn find<I>(&self, prefix: I) -> NodeRef
    where
        I: IntoIterator<Item = S>,
    {
        NodeRef(self.trie.find(prefix))
    }

    /// Number of states, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Number of memoized transitions over all states.
    pub fn memoized_transitions(&self) -> usize {
        (0..self.trie.len())
            .map(|i| self.trie.node(NodeId::from_index(i)).automaton_transitions.len())
            .sum()
    }
}

// ---

/// Iterator over fragment ids ending at a state, see [`Automaton::matches`].
pub struct Matches<'a, S> {
    trie: &'a Trie<S>,
    ids: slice::Iter<'a, usize>,
    next: Option<NodeId>,
}

impl<S: Symbol> Iterator for Matches<'_, S> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(&id) = self.ids.next() {
                return Some(id);
            }
            let node = self.trie.node(self.next?);
            self.ids = node.matched_ids.iter();
            self.next = node.terminal_link;
        }
    }
}

#[cfg(test)]
mod tests;
