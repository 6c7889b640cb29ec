//! 分かち書きの精度を評価するユーティリティ
//!
//! 空白区切りの正解コーパスと比較して、語の文字範囲の一致に基づく
//! 適合率（Precision）、再現率（Recall）、F1スコアを計算します。

use std::collections::HashSet;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::PathBuf;

use glog_segmenter::{Segmenter, SegmenterConfig};

use clap::Parser;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "evaluate", about = "Evaluate the segmentation accuracy")]
struct Args {
    /// Test corpus (one sentence per line, words separated by spaces).
    #[clap(short = 't', long)]
    test_in: PathBuf,

    /// Dictionary file (one `word freq pos` entry per line).
    #[clap(short = 'd', long)]
    dict: PathBuf,

    /// HMM model file in the hmm_model.utf8 format.
    #[clap(short = 'm', long)]
    hmm_model: Option<PathBuf>,

    /// Disables HMM re-segmentation of unknown words.
    #[clap(long)]
    no_hmm: bool,

    /// Field separator of the dictionary file.
    #[clap(long, default_value = " ")]
    separator: String,
}

/// 正解の語列から入力文と語の文字範囲を復元する
fn parse_gold(line: &str) -> (String, HashSet<Range<usize>>) {
    let mut input = String::new();
    let mut refs = HashSet::new();
    let mut start = 0;
    for word in line.split_whitespace() {
        input.push_str(word);
        let len = word.chars().count();
        refs.insert(start..start + len);
        start += len;
    }
    (input, refs)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = SegmenterConfig::new(args.dict)
        .hmm_model(args.hmm_model)
        .dict_separator(args.separator)
        .hmm(!args.no_hmm);

    eprintln!("Loading the dictionary...");
    let segmenter = Segmenter::from_config(&config)?;
    let mut worker = segmenter.tokenizer().new_worker();

    eprintln!("Tokenizing...");

    let rdr = BufReader::new(File::open(args.test_in)?);

    let mut num_ref = 0;
    let mut num_sys = 0;
    let mut num_cor = 0;
    for line in rdr.lines() {
        let line = line?;
        let (input, refs) = parse_gold(&line);
        if input.is_empty() {
            continue;
        }
        worker.reset_sentence(&input);
        worker.tokenize();
        let syss: HashSet<_> = worker.token_iter().map(|t| t.range_char()).collect();
        num_ref += refs.len();
        num_sys += syss.len();
        num_cor += refs.intersection(&syss).count();
    }

    let precision = num_cor as f64 / num_sys as f64;
    let recall = num_cor as f64 / num_ref as f64;
    let f1 = 2.0 * precision * recall / (precision + recall);
    println!("Precision = {precision}");
    println!("Recall = {recall}");
    println!("F1 = {f1}");

    Ok(())
}
