use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use split_slice::{adapters::sentence::wrap, batch::wrap_many};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn random_sentence(rng: &mut StdRng, words: usize) -> String {
    (0..words)
        .map(|_| {
            let len = rng.gen_range(1..10);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_wrap(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("sentence_wrap");

    for &words in &[16usize, 64, 256] {
        let sentence = random_sentence(&mut rng, words);
        group.bench_function(format!("wrap_{words}_words_3_lines"), |b| {
            b.iter(|| criterion::black_box(wrap(&sentence, 3, false).unwrap()))
        });
    }

    let batch: Vec<String> = (0..128).map(|_| random_sentence(&mut rng, 40)).collect();
    group.bench_function("wrap_many_128_sentences", |b| {
        b.iter(|| criterion::black_box(wrap_many(&batch, 4, true).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_wrap);
criterion_main!(benches);
