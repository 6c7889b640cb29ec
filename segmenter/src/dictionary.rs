//! 分かち書きのための辞書モジュール。
//!
//! 辞書は単語の表層形から [`WordEntry`]（頻度・品詞・距離）への対応を保持します。
//! 起動時に一度だけ構築され、その後は変更されません。構築後の辞書は
//! `Send + Sync` であり、任意の数のスレッドからロックなしで参照できます。
//!
//! # 辞書の構築
//!
//! [`DictionaryBuilder`]を使用して、テキスト形式の辞書から構築します。
//! 各行は `word[SEP]frequency[SEP]pos` の形式で、頻度と品詞は省略可能です。
pub mod builder;
pub(crate) mod lexicon;
pub(crate) mod trie;
pub(crate) mod word_idx;

use std::io::Read;
use std::path::Path;

use crate::dictionary::lexicon::Lexicon;
use crate::dictionary::trie::Trie;
use crate::errors::Result;
use crate::utils::fold_char;

pub use crate::dictionary::builder::{DictionaryBuilder, DEFAULT_SEPARATOR};
pub use crate::dictionary::lexicon::{WordEntry, DEFAULT_FREQUENCY, UNKNOWN_DISTANCE};
pub use crate::dictionary::word_idx::WordIdx;

/// 分かち書きのための読み取り専用辞書。
pub struct Dictionary {
    // None if the dictionary has no words.
    pub(crate) trie: Option<Trie>,
    pub(crate) lexicon: Lexicon,
}

impl Dictionary {
    /// 空白区切りの辞書をリーダーから読み込みます。
    ///
    /// 区切り文字を変更する場合は [`DictionaryBuilder`] を使用してください。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        DictionaryBuilder::new().build_from_reader(rdr)
    }

    /// 空白区切りの辞書をファイルから読み込みます。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        DictionaryBuilder::new().build_from_path(path)
    }

    /// 単語に完全一致するエントリを検索します。
    ///
    /// ASCII英字の大文字・小文字は区別されません。
    ///
    /// # 例
    ///
    /// ```
    /// use glog_segmenter::Dictionary;
    ///
    /// let dict = Dictionary::from_reader("Google 10 nz".as_bytes())?;
    /// assert_eq!(dict.find("GOOGLE").unwrap().freq(), 10.0);
    /// assert!(dict.find("Goo").is_none());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        self.find_idx(word.chars().map(fold_char))
            .map(|idx| self.word(idx))
    }

    pub(crate) fn find_idx<I>(&self, word: I) -> Option<WordIdx>
    where
        I: IntoIterator<Item = char>,
    {
        self.trie
            .as_ref()?
            .exact_match(word)
            .map(WordIdx::new)
    }

    /// 入力の先頭から始まるすべての辞書語を短い順に列挙します。
    ///
    /// [`Self::find`] と同様にASCII英字の大文字・小文字は区別されません。
    /// 検索範囲は最長語の長さ [`Self::max_word_len`] で打ち切られます。
    ///
    /// # 戻り値
    ///
    /// `(単語ID, 終了位置)` のイテレータ。終了位置は入力先頭からの文字数（排他的）です。
    pub fn lookup_all<'a>(
        &'a self,
        window: &'a [char],
    ) -> impl Iterator<Item = (WordIdx, usize)> + 'a {
        let window = &window[..window.len().min(self.max_word_len())];
        self.trie.iter().flat_map(move |trie| {
            trie.common_prefix_iterator(window.iter().copied().map(fold_char))
                .map(|m| (WordIdx::new(m.value), m.end_char))
        })
    }

    /// 単語エントリを取得します。
    #[inline(always)]
    pub fn word(&self, word_idx: WordIdx) -> &WordEntry {
        self.lexicon.get(word_idx)
    }

    /// 登録されている単語数を返します。
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.lexicon.len()
    }

    /// すべての単語の頻度の合計を返します。
    #[inline(always)]
    pub fn total_freq(&self) -> f64 {
        self.lexicon.total_freq()
    }

    /// 最長の単語の文字数を返します。
    #[inline(always)]
    pub fn max_word_len(&self) -> usize {
        self.lexicon.max_word_len()
    }
}
