//! Suffix and terminal link computation and the goto function.

// local imports
use crate::graph::{Visit, breadth_first_search};
use crate::trie::{NodeId, Symbol, Trie};

// ---

/// Performs a transition in the automaton, memoizing the result.
///
/// Every node visited on the suffix chain gets the result cached as well,
/// so each distinct `(node, symbol)` pair is resolved at most once.
pub(crate) fn goto<S: Symbol>(trie: &mut Trie<S>, node: NodeId, symbol: S) -> NodeId {
    let mut current = node;
    let mut chain = Vec::new();
    let target = loop {
        let state = trie.node(current);
        if let Some(&target) = state.automaton_transitions.get(&symbol) {
            break target;
        }
        if let Some(&child) = state.transitions.get(&symbol) {
            trie.node_mut(current).automaton_transitions.insert(symbol, child);
            break child;
        }
        if current.is_root() {
            trie.node_mut(current).automaton_transitions.insert(symbol, current);
            break current;
        }
        chain.push(current);
        current = state.suffix_link;
    };

    for id in chain {
        trie.node_mut(id).automaton_transitions.insert(symbol, target);
    }
    target
}

/// Same as [`goto`] but without touching the memoization tables.
pub(crate) fn resolve<S: Symbol>(trie: &Trie<S>, mut node: NodeId, symbol: S) -> NodeId {
    loop {
        let state = trie.node(node);
        if let Some(&target) = state.automaton_transitions.get(&symbol) {
            return target;
        }
        if let Some(&child) = state.transitions.get(&symbol) {
            return child;
        }
        if node.is_root() {
            return node;
        }
        node = state.suffix_link;
    }
}

/// Links every node to the node of its longest proper suffix present in the trie.
///
/// Nodes are processed breadth-first, so the suffix link of a parent and the
/// whole suffix chain behind it are final by the time its children are linked.
pub(crate) fn build_suffix_links<S: Symbol>(trie: &mut Trie<S>) {
    breadth_first_search(trie, NodeId::ROOT, |trie, visit| match visit {
        Visit::Vertex(node) => {
            if node.is_root() {
                trie.node_mut(node).suffix_link = NodeId::ROOT;
            }
        }
        Visit::Edge(edge) => {
            let link = if edge.source.is_root() {
                NodeId::ROOT
            } else {
                let parent_link = trie.node(edge.source).suffix_link;
                goto(trie, parent_link, edge.symbol)
            };
            debug_assert!(trie.node(link).depth < trie.node(edge.target).depth);
            trie.node_mut(edge.target).suffix_link = link;
        }
    });
}

/// Links every node to the nearest node on its suffix chain that ends a fragment.
///
/// Requires suffix links to be built.
pub(crate) fn build_terminal_links<S: Symbol>(trie: &mut Trie<S>) {
    breadth_first_search(trie, NodeId::ROOT, |trie, visit| {
        let Visit::Vertex(node) = visit else {
            return;
        };
        let link = if node.is_root() {
            None
        } else {
            let suffix = trie.node(trie.node(node).suffix_link);
            if suffix.matched_ids.is_empty() {
                suffix.terminal_link
            } else {
                Some(trie.node(node).suffix_link)
            }
        };
        trie.node_mut(node).terminal_link = link;
    });
}
