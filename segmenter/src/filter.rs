//! 記号の除去とストップワードによるトークンの絞り込み
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use hashbrown::HashSet;
use regex::Regex;

use crate::errors::{Result, SegmenterError};

// Unicode punctuation, symbols and white space.
static SYMBOLS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{P}\p{S}\s]+").unwrap());

/// ストップワードの集合
///
/// 照合は大文字・小文字を区別します。
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// 空の集合を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 1行に1語のテキストをリーダーから読み込みます。
    ///
    /// 各行の前後の空白は取り除かれ、空行は無視されます。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut words = HashSet::new();
        for line in BufReader::new(rdr).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        log::info!("loaded {} stop words", words.len());
        Ok(Self { words })
    }

    /// 1行に1語のテキストをファイルから読み込みます。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(SegmenterError::PathIsDirectory(path.to_path_buf()));
        }
        Self::from_reader(File::open(path)?)
    }

    /// 語がストップワードかどうかを返します。
    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// 登録されている語の数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 集合が空かどうかを返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S> FromIterator<S> for StopWords
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// トークンから句読点・記号・空白を取り除き、空になったものとストップワードを除外します。
///
/// 入力の順序は保たれ、空文字列が出力されることはありません。
///
/// # 例
///
/// ```
/// use glog_segmenter::filter::{trim, StopWords};
///
/// let stop_words: StopWords = ["的"].into_iter().collect();
/// let tokens = trim(["北京", "，", "的", "C++", " "], &stop_words);
/// assert_eq!(tokens, vec!["北京", "C"]);
/// ```
pub fn trim<I, S>(tokens: I, stop_words: &StopWords) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| {
            let cleaned = SYMBOLS.replace_all(token.as_ref(), "");
            if cleaned.is_empty() || stop_words.contains(&cleaned) {
                None
            } else {
                Some(cleaned.into_owned())
            }
        })
        .collect()
}
