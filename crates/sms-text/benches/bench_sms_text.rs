use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sms_text::{normalize, normalize_detailed, stem};

const WORDS: &[&str] = &[
    "URGENT!", "You", "have", "WON", "a", "FREE", "prize", "call", "now", "meeting",
    "tomorrow", "at", "5pm", "claim", "your", "£1000", "cash", "running", "late", "sorry,",
    "txt", "STOP", "to", "87121", "really", "enjoyed", "dinner", "delivery", "replies", "ok?",
];

fn generate_messages(count: usize, words_per_message: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            (0..words_per_message)
                .map(|_| *WORDS.choose(&mut rng).unwrap())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let short = generate_messages(1000, 12);
    let long = generate_messages(100, 160);

    c.bench_function("normalize_sms_1000", |b| {
        b.iter(|| {
            for m in &short {
                black_box(normalize(black_box(m)));
            }
        })
    });
    c.bench_function("normalize_long_100", |b| {
        b.iter(|| {
            for m in &long {
                black_box(normalize(black_box(m)));
            }
        })
    });
    c.bench_function("normalize_detailed_sms_1000", |b| {
        b.iter(|| {
            for m in &short {
                black_box(normalize_detailed(black_box(m)));
            }
        })
    });
}

fn bench_stem(c: &mut Criterion) {
    let tokens = ["running", "quickly", "payments", "government", "prize", "replies", "fly"];
    c.bench_function("stem_tokens", |b| {
        b.iter(|| {
            for t in &tokens {
                black_box(stem(black_box(t)));
            }
        })
    });
}

criterion_group!(benches, bench_normalize, bench_stem);
criterion_main!(benches);
