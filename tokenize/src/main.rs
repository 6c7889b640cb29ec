//! 分かち書きを実行するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだテキストを1行ずつ分割し、
//! 指定された出力形式（wakati、detail、index、query、search）で結果を出力します。

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use glog_segmenter::{Segmenter, SegmenterConfig};

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Wakati,
    Detail,
    Index,
    Query,
    Search,
}

impl FromStr for OutputMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "wakati" => Ok(Self::Wakati),
            "detail" => Ok(Self::Detail),
            "index" => Ok(Self::Index),
            "query" => Ok(Self::Query),
            "search" => Ok(Self::Search),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "tokenize", about = "Segments Han-script text into words")]
struct Args {
    /// Dictionary file (one `word freq pos` entry per line).
    #[clap(short = 'd', long)]
    dict: PathBuf,

    /// Stop-word file (one word per line).
    #[clap(short = 's', long)]
    stop_words: Option<PathBuf>,

    /// HMM model file in the hmm_model.utf8 format.
    #[clap(short = 'm', long)]
    hmm_model: Option<PathBuf>,

    /// Disables HMM re-segmentation of unknown words.
    #[clap(long)]
    no_hmm: bool,

    /// Field separator of the dictionary file.
    #[clap(long, default_value = " ")]
    separator: String,

    /// Output mode. Choices are wakati, detail, index, query, and search.
    #[clap(short = 'O', long, default_value = "wakati")]
    output_mode: OutputMode,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = SegmenterConfig::new(args.dict)
        .stop_words(args.stop_words)
        .hmm_model(args.hmm_model)
        .dict_separator(args.separator)
        .hmm(!args.no_hmm);

    eprintln!("Loading the dictionary...");
    let segmenter = Segmenter::from_config(&config)?;
    let mut worker = segmenter.tokenizer().new_worker();

    eprintln!("Ready to tokenize");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        match args.output_mode {
            OutputMode::Wakati => {
                worker.reset_sentence(&line);
                worker.tokenize();
                for i in 0..worker.num_tokens() {
                    if i != 0 {
                        out.write_all(b" ")?;
                    }
                    out.write_all(worker.token(i).surface().as_bytes())?;
                }
                out.write_all(b"\n")?;
            }
            OutputMode::Detail => {
                worker.reset_sentence(&line);
                worker.tokenize();
                for t in worker.token_iter() {
                    writeln!(
                        &mut out,
                        "{}\tkind={:?}\tpos={}\tdistance={:.4}",
                        t.surface(),
                        t.kind(),
                        t.pos().unwrap_or("*"),
                        t.distance(),
                    )?;
                }
                out.write_all(b"EOS\n")?;
            }
            OutputMode::Index => {
                writeln!(&mut out, "{}", segmenter.segment_text_for_index(&line))?;
            }
            OutputMode::Query => {
                writeln!(&mut out, "{}", segmenter.segment_text_for_query(&line))?;
            }
            OutputMode::Search => {
                writeln!(&mut out, "{}", segmenter.cut_for_search(&line).join(" "))?;
            }
        }
        if is_tty {
            out.flush()?;
        }
    }

    Ok(())
}
