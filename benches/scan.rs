// std imports
use std::hint::black_box;

// third-party imports
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::random;

// workspace imports
use ac_automaton::Automaton;
use wildcard::{WildcardMatcher, find_fuzzy_matches};

fn random_text(len: usize, alphabet: &[char]) -> String {
    (0..len)
        .map(|_| alphabet[random::<u32>() as usize % alphabet.len()])
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let text = random_text(64 * 1024, &['a', 'b', 'c', 'd']);

    let mut c = c.benchmark_group("scan");
    c.throughput(Throughput::Elements(text.chars().count() as u64));

    for pattern in ["abcd", "a?b?c?d", "ab??????cd", "????????"] {
        c.bench_function(format!("find-{}", pattern), |b| {
            b.iter(|| find_fuzzy_matches(black_box(pattern), black_box(&text), '?').unwrap().len());
        });
    }

    for precompute in [false, true] {
        c.bench_function(format!("stream-precompute-{}", precompute), |b| {
            let mut matcher = WildcardMatcher::default().with_precompute(precompute);
            matcher.init("a?b?c?d", '?').unwrap();
            b.iter(|| {
                matcher.reset();
                let mut n = 0;
                matcher.scan_str(black_box(&text), |_| n += 1).unwrap();
                n
            });
        });
    }

    c.bench_function("automaton-step", |b| {
        let mut automaton = Automaton::build([("abc".chars(), 0), ("bcd".chars(), 1), ("dab".chars(), 2)]);
        automaton.precompute();
        b.iter(|| {
            let mut state = automaton.root();
            let mut n = 0;
            for ch in black_box(&text).chars() {
                state = automaton.step(state, ch);
                n += automaton.matches(state).count();
            }
            n
        });
    });

    c.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
