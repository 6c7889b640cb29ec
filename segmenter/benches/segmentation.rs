//! 分かち書きのベンチマーク
//!
//! 同梱の辞書とHMMモデルを用いて、HMMの有無による分割速度と、
//! 索引用の整形を含めた処理速度を計測します。

use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glog_segmenter::{Dictionary, HmmModel, Segmenter, StopWords, Tokenizer};

const CORPUS: &str = include_str!("./resources/corpus.txt");
const DICT: &str = include_str!("../src/tests/resources/dict.txt");
const STOP_WORDS: &str = include_str!("../src/tests/resources/stop_words.txt");
const HMM_MODEL: &str = include_str!("../src/tests/resources/hmm_model.txt");

fn bench_segmentation(c: &mut Criterion) {
    let dict = Arc::new(Dictionary::from_reader(DICT.as_bytes()).unwrap());
    let model = Arc::new(HmmModel::from_reader(HMM_MODEL.as_bytes()).unwrap());
    let lines: Vec<&str> = CORPUS.lines().collect();

    let mut group = c.benchmark_group("Segmentation Speed");
    group.throughput(Throughput::Bytes(CORPUS.len() as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    for use_hmm in [false, true] {
        let tokenizer = Tokenizer::from_shared_dictionary(dict.clone())
            .with_shared_hmm_model(model.clone())
            .hmm(use_hmm);
        let name = if use_hmm { "HMM" } else { "Dictionary" };
        group.bench_function(BenchmarkId::new(name, "Corpus"), |b| {
            b.iter_with_setup(
                || tokenizer.new_worker(),
                |mut worker| {
                    for line in &lines {
                        worker.reset_sentence(line);
                        worker.tokenize();
                    }
                },
            );
        });
    }

    let stop_words = StopWords::from_reader(STOP_WORDS.as_bytes()).unwrap();
    let segmenter = Segmenter::new(
        Tokenizer::from_shared_dictionary(dict.clone()).with_shared_hmm_model(model.clone()),
        stop_words,
    );
    group.bench_function(BenchmarkId::new("Index", "Corpus"), |b| {
        b.iter(|| {
            for line in &lines {
                criterion::black_box(segmenter.segment_text_for_index(line));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_segmentation);
criterion_main!(benches);
