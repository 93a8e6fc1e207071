use rstest::rstest;

use super::*;

const HE: usize = 0;
const SHE: usize = 1;
const HIS: usize = 2;
const HERS: usize = 3;

fn classic() -> Automaton {
    Automaton::build([
        ("he".chars(), HE),
        ("she".chars(), SHE),
        ("his".chars(), HIS),
        ("hers".chars(), HERS),
    ])
}

fn scan(automaton: &mut Automaton, text: &str) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut state = automaton.root();
    for (offset, ch) in text.chars().enumerate() {
        state = automaton.next(state, ch);
        automaton.generate_matches(state, |id| found.push((offset, id)));
    }
    found.sort();
    found
}

fn naive(fragments: &[(&str, usize)], text: &str) -> Vec<(usize, usize)> {
    let text: Vec<char> = text.chars().collect();
    let mut found = Vec::new();
    for (fragment, id) in fragments {
        let fragment: Vec<char> = fragment.chars().collect();
        if fragment.is_empty() || fragment.len() > text.len() {
            continue;
        }
        for start in 0..=text.len() - fragment.len() {
            if text[start..start + fragment.len()] == fragment[..] {
                found.push((start + fragment.len() - 1, *id));
            }
        }
    }
    found.sort();
    found
}

#[test]
fn test_root() {
    let automaton = classic();
    let root = automaton.root();
    assert!(root.is_some());
    assert_eq!(automaton.suffix_link(root), root);
    assert!(automaton.terminal_link(root).is_none());
    assert_eq!(automaton.depth(root), Some(0));
    assert!(automaton.matched_ids(root).is_empty());
}

#[rstest]
#[case("h", "")]
#[case("s", "")]
#[case("he", "")]
#[case("sh", "h")]
#[case("she", "he")]
#[case("hi", "")]
#[case("his", "s")]
#[case("her", "")]
#[case("hers", "s")]
fn test_suffix_links(#[case] node: &str, #[case] link: &str) {
    let automaton = classic();
    let node = automaton.find(node.chars());
    assert!(node.is_some());
    assert_eq!(automaton.suffix_link(node), automaton.find(link.chars()));
}

#[rstest]
#[case("she", Some("he"))]
#[case("he", None)]
#[case("his", None)]
#[case("hers", None)]
#[case("sh", None)]
fn test_terminal_links(#[case] node: &str, #[case] link: Option<&str>) {
    let automaton = classic();
    let node = automaton.find(node.chars());
    let expected = link.map(|link| automaton.find(link.chars())).unwrap_or_default();
    assert_eq!(automaton.terminal_link(node), expected);
}

#[test]
fn test_terminal_link_chain() {
    let mut automaton = Automaton::build([("abcd".chars(), 0), ("bcd".chars(), 1), ("d".chars(), 2)]);
    let abcd = automaton.find("abcd".chars());
    let bcd = automaton.find("bcd".chars());
    let d = automaton.find("d".chars());
    assert_eq!(automaton.terminal_link(abcd), bcd);
    assert_eq!(automaton.terminal_link(bcd), d);
    assert!(automaton.terminal_link(d).is_none());

    assert_eq!(automaton.matches(abcd).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(scan(&mut automaton, "xabcd"), vec![(4, 0), (4, 1), (4, 2)]);
}

#[test]
fn test_terminal_link_skips_non_matching_suffixes() {
    // "xab" -> "ab" (no match) -> "b" (match)
    let automaton = Automaton::build([("xab".chars(), 0), ("abz".chars(), 1), ("b".chars(), 2)]);
    let xab = automaton.find("xab".chars());
    assert_eq!(automaton.suffix_link(xab), automaton.find("ab".chars()));
    assert_eq!(automaton.terminal_link(xab), automaton.find("b".chars()));
}

#[test]
fn test_classic_scan() {
    let mut automaton = classic();
    assert_eq!(scan(&mut automaton, "ushers"), vec![(3, HE), (3, SHE), (5, HERS)]);
    assert_eq!(scan(&mut automaton, "ahishers"), vec![(3, HIS), (5, HE), (5, SHE), (7, HERS)]);
}

#[rstest]
#[case(&[("a", 0), ("aa", 1), ("aaa", 2)], "aaaaa")]
#[case(&[("abab", 0), ("bab", 1), ("ba", 2)], "abababbaba")]
#[case(&[("x", 0)], "")]
#[case(&[("needle", 0), ("eed", 1), ("le", 2)], "haystack with a needle and needles")]
#[case(&[("ü", 0), ("üb", 1), ("bü", 2)], "übüb")]
fn test_scan_against_naive(#[case] fragments: &[(&str, usize)], #[case] text: &str) {
    let mut automaton = Automaton::build(fragments.iter().map(|(f, id)| (f.chars(), *id)));
    assert_eq!(scan(&mut automaton, text), naive(fragments, text));
}

#[test]
fn test_same_fragment_with_several_ids() {
    let mut automaton = Automaton::build([("ab".chars(), 1), ("ab".chars(), 4)]);
    assert_eq!(scan(&mut automaton, "cab"), vec![(2, 1), (2, 4)]);
}

#[test]
fn test_empty_fragments_are_skipped() {
    let mut builder = Builder::new();
    builder.add("".chars(), 0).add("b".chars(), 1);
    let automaton = builder.build();
    assert_eq!(automaton.len(), 2);
    assert!(automaton.matches(automaton.root()).next().is_none());
}

#[test]
fn test_empty_automaton() {
    let mut automaton = Automaton::<char>::build(std::iter::empty::<(Vec<char>, usize)>());
    assert!(automaton.is_empty());
    let root = automaton.root();
    assert_eq!(automaton.next(root, 'z'), root);
    assert_eq!(automaton.step(root, 'z'), root);
}

#[test]
fn test_null_reference() {
    let mut automaton = classic();
    let none = NodeRef::default();
    assert!(none.is_none());
    assert_eq!(none, NodeRef::NONE);
    assert!(automaton.next(none, 'h').is_none());
    assert!(automaton.step(none, 'h').is_none());
    assert!(automaton.suffix_link(none).is_none());
    assert!(automaton.terminal_link(none).is_none());
    assert!(automaton.matched_ids(none).is_empty());
    assert_eq!(automaton.depth(none), None);
    assert_eq!(automaton.matches(none).count(), 0);
}

#[test]
fn test_memoization_is_bounded() {
    let mut automaton = classic();
    let text = "hershisshehishers".repeat(50);
    scan(&mut automaton, &text);
    let memoized = automaton.memoized_transitions();

    let alphabet = "hers i".len();
    assert!(memoized <= automaton.len() * alphabet);

    scan(&mut automaton, &text);
    assert_eq!(automaton.memoized_transitions(), memoized);
}

#[test]
fn test_step_agrees_with_next() {
    let mut lazy = classic();
    let shared = classic();
    let text = "ushershishesxhe";
    let memoized = shared.memoized_transitions();

    let mut a = lazy.root();
    let mut b = shared.root();
    for ch in text.chars() {
        a = lazy.next(a, ch);
        b = shared.step(b, ch);
        assert_eq!(a, b);
    }
    assert_eq!(shared.memoized_transitions(), memoized);
}

#[test]
fn test_precompute() {
    let mut precomputed = classic();
    precomputed.precompute();
    assert!(precomputed.is_precomputed());

    // every state has a transition for each of 'e', 'h', 'i', 'r', 's'
    assert_eq!(precomputed.memoized_transitions(), precomputed.len() * 5);

    let mut lazy = classic();
    let mut a = lazy.root();
    let mut b = precomputed.root();
    for ch in "ushers and his hers, she said".chars() {
        a = lazy.next(a, ch);
        b = precomputed.step(b, ch);
        assert_eq!(a, b);
        assert_eq!(
            lazy.matches(a).collect::<Vec<_>>(),
            precomputed.matches(b).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_shared_between_threads() {
    let mut automaton = classic();
    automaton.precompute();
    let automaton = &automaton;

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["ushers", "his", "shehe"]
            .into_iter()
            .map(|text| {
                scope.spawn(move || {
                    let mut state = automaton.root();
                    let mut count = 0;
                    for ch in text.chars() {
                        state = automaton.step(state, ch);
                        count += automaton.matches(state).count();
                    }
                    count
                })
            })
            .collect();
        let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![3, 1, 3]);
    });
}

#[test]
fn test_byte_automaton() {
    let mut automaton = Automaton::build([(b"\x00\xff".iter().copied(), 7)]);
    let mut state = automaton.root();
    let mut hits = 0;
    for &b in b"\x00\x00\xff\xff" {
        state = automaton.next(state, b);
        hits += automaton.matches(state).count();
    }
    assert_eq!(hits, 1);
}
