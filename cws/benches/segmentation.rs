//! 単語分割と辞書読み込みのベンチマーク
//!
//! 小さな辞書とコーパスを用いて、ワーカーを再利用した分割速度と、
//! 辞書レコードの読み込み速度を計測します。

use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cws::{Dictionary, Limits, Segmenter};

const DICT_TXT: &str = include_str!("./resources/dict.txt");
const CORPUS: &str = include_str!("./resources/corpus.txt");

fn bench_segmentation(c: &mut Criterion) {
    let dict = Arc::new(
        Dictionary::from_reader(DICT_TXT.as_bytes(), &Limits::default())
            .unwrap_or_else(|e| panic!("Failed to load the dictionary: {e}")),
    );
    let lines: Vec<&str> = CORPUS.lines().collect();

    let mut group = c.benchmark_group("Segmentation Speed");
    group.throughput(Throughput::Bytes(CORPUS.len() as u64));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    group.bench_function(BenchmarkId::new("Worker", "Corpus"), |b| {
        b.iter_with_setup(
            || Segmenter::from_shared_dictionary(dict.clone()).new_worker(),
            |mut worker| {
                for line in &lines {
                    worker.reset_sentence(line);
                    worker.segment().unwrap();
                }
            },
        );
    });

    group.bench_function(BenchmarkId::new("Oneshot", "Corpus"), |b| {
        let segmenter = Segmenter::from_shared_dictionary(dict.clone());
        b.iter(|| {
            for line in &lines {
                segmenter.segment(line).unwrap();
            }
        });
    });

    group.finish();
}

fn bench_dictionary_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dictionary Load");
    group.throughput(Throughput::Bytes(DICT_TXT.len() as u64));

    group.bench_function("from_reader", |b| {
        b.iter(|| Dictionary::from_reader(DICT_TXT.as_bytes(), &Limits::default()).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_dictionary_load);
criterion_main!(benches);
