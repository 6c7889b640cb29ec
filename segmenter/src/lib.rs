//! # glog-segmenter
//!
//! 辞書とHMMに基づく中国語（漢字）の分かち書きエンジンです。
//!
//! ## 概要
//!
//! ブログの全文検索のために、本文を索引用のトークン列に、検索語をクエリ用の
//! トークン列に変換します。辞書語のDAGの上で距離（頻度の負の対数）の総和が
//! 最小となる経路を選び、辞書で分割できなかった漢字の連続はBMES隠れマルコフ
//! モデルで再分割します。
//!
//! ## 主な機能
//!
//! - **辞書による分割**: ダブル配列トライとDAG上の動的計画法
//! - **未知語認識**: BMES 4状態HMMとViterbiアルゴリズム（任意）
//! - **英数字の保護**: `Google` や `Go` のようなASCII英数字の連続は分割されません
//! - **索引・検索語の整形**: 記号・空白・ストップワードの除去と空白区切りへの変換
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use glog_segmenter::{Dictionary, Segmenter, StopWords, Tokenizer};
//!
//! let dict = Dictionary::from_reader("北京 100 ns\n天安门 50 ns\n语言 20 n".as_bytes())?;
//! let tokenizer = Tokenizer::new(dict);
//!
//! let mut worker = tokenizer.new_worker();
//! worker.reset_sentence("北京天安门");
//! worker.tokenize();
//! assert_eq!(worker.num_tokens(), 2);
//!
//! let t0 = worker.token(0);
//! assert_eq!(t0.surface(), "北京");
//! assert_eq!(t0.range_char(), 0..2);
//! assert_eq!(t0.range_byte(), 0..6);
//! assert_eq!(t0.pos(), Some("ns"));
//!
//! let stop_words: StopWords = ["的"].into_iter().collect();
//! let segmenter = Segmenter::new(tokenizer, stop_words);
//! assert_eq!(segmenter.cut("Go语言"), vec!["Go", "语言"]);
//! assert_eq!(segmenter.segment_text_for_query("北京的天安门！"), "北京 天安门");
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("`target_pointer_width` must be 32 or 64");

/// エンジンの設定
pub mod config;

/// 辞書データ構造とビルダー
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 記号の除去とストップワード
pub mod filter;

/// 未知語認識のための隠れマルコフモデル
pub mod hmm;

/// 全文検索向けの分かち書きAPI
pub mod segmenter;

/// 文の内部表現
mod sentence;

/// トークン型の定義
pub mod token;

/// トークナイザーの実装
pub mod tokenizer;

/// 内部ユーティリティ関数
pub mod utils;


// Re-exports
pub use config::SegmenterConfig;
pub use dictionary::{Dictionary, DictionaryBuilder};
pub use errors::{Result, SegmenterError};
pub use filter::StopWords;
pub use hmm::HmmModel;
pub use segmenter::Segmenter;
pub use tokenizer::Tokenizer;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
