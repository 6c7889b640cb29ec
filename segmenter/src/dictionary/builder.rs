//! 辞書構築のためのビルダー
//!
//! このモジュールは、テキスト形式の辞書ファイルから [`Dictionary`] を構築するための
//! ビルダーを提供します。

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dictionary::lexicon::{self, Lexicon, RawWordEntry};
use crate::dictionary::trie::Trie;
use crate::dictionary::Dictionary;
use crate::errors::{Result, SegmenterError};

/// 辞書ファイルのデフォルトのフィールド区切り文字
pub const DEFAULT_SEPARATOR: &str = " ";

/// テキスト形式の辞書から [`Dictionary`] を構築するビルダー
///
/// # 例
///
/// ```
/// use glog_segmenter::dictionary::DictionaryBuilder;
///
/// let dict = DictionaryBuilder::new()
///     .separator("\t")
///     .build_from_reader("北京\t3000\tns\n天安门\t800\tns".as_bytes())?;
/// assert_eq!(dict.num_words(), 2);
/// assert_eq!(dict.find("北京").unwrap().pos(), Some("ns"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    separator: String,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl DictionaryBuilder {
    /// 区切り文字が空白のビルダーを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドの区切り文字を指定します。
    ///
    /// 空白文字を指定した場合、連続する空白はひとつの区切りとして扱われます。
    pub fn separator<S>(mut self, separator: S) -> Self
    where
        S: Into<String>,
    {
        self.separator = separator.into();
        self
    }

    /// パース済みのエントリから辞書を構築します。
    pub(crate) fn build_from_entries(&self, entries: &[RawWordEntry]) -> Result<Dictionary> {
        let (lexicon, records) = Lexicon::from_entries(entries)?;
        let trie = if records.is_empty() {
            None
        } else {
            Some(Trie::from_records(&records)?)
        };
        Ok(Dictionary { trie, lexicon })
    }

    /// 辞書テキストから辞書を構築します。
    ///
    /// 不正な行は読み飛ばされます。すべての行が不正でも空の辞書が返り、エラーにはなりません。
    pub fn build_from_text(&self, text: &str) -> Result<Dictionary> {
        let parsed = lexicon::parse_lines(text, &self.separator);
        if parsed.num_skipped != 0 {
            log::debug!(
                "skipped {} malformed dictionary line(s)",
                parsed.num_skipped
            );
        }
        let dict = self.build_from_entries(&parsed.entries)?;
        if dict.lexicon.is_empty() {
            log::warn!("the dictionary is empty; every Han character becomes its own token");
        } else {
            log::info!(
                "loaded {} dictionary word(s), total frequency {}, longest word {} char(s)",
                dict.num_words(),
                dict.total_freq(),
                dict.max_word_len(),
            );
        }
        Ok(dict)
    }

    /// リーダーから辞書を構築します。
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合、または入力がUTF-8でない場合に [`SegmenterError`] を返します。
    pub fn build_from_reader<R>(&self, mut rdr: R) -> Result<Dictionary>
    where
        R: Read,
    {
        let mut buf = vec![];
        rdr.read_to_end(&mut buf)?;
        let text = std::str::from_utf8(&buf)?;
        self.build_from_text(text)
    }

    /// ファイルパスから辞書を構築します。
    pub fn build_from_path<P>(&self, path: P) -> Result<Dictionary>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(SegmenterError::PathIsDirectory(path.to_path_buf()));
        }
        self.build_from_reader(File::open(path)?)
    }
}
