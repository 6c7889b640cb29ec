//! トークンの結果コンテナ
//!
//! このモジュールは、分かち書きの結果として得られるトークンを表現する型を提供します。
//! トークンは [`Worker`] への軽量な参照であり、表層形、位置情報、
//! 由来（辞書語・未知語・HMM・その他の文字）、辞書語であれば品詞と距離への
//! アクセスを提供します。

use std::ops::Range;

use crate::dictionary::{WordEntry, WordIdx, UNKNOWN_DISTANCE};
use crate::tokenizer::worker::Worker;

/// トークンの由来
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// 辞書語
    Dictionary,
    /// 辞書にない1文字の漢字、または英数字の連続
    Unknown,
    /// HMMによって復元された複数文字の語
    Hmm,
    /// 漢字・英数字以外の1文字（空白、句読点、記号など）
    Other,
}

/// [`Worker`] が内部に保持するトークンの位置と由来
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TokenNode {
    pub(crate) range_char: Range<usize>,
    pub(crate) kind: TokenKind,
    pub(crate) word: Option<WordIdx>,
}

/// 分かち書きの結果トークン
///
/// このトークンは [`Worker`] への軽量な参照であり、実際のデータは
/// Workerが保持しています。トークンはWorkerが生存している間のみ有効です。
pub struct Token<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Token<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    #[inline(always)]
    fn node(&self) -> &'w TokenNode {
        &self.worker.tokens[self.index]
    }

    /// トークンの文字単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        self.node().range_char.clone()
    }

    /// トークンのバイト単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        let sent = &self.worker.sent;
        let range = &self.node().range_char;
        sent.byte_position(range.start)..sent.byte_position(range.end)
    }

    /// トークンの表層形（元のテキスト中の文字列）を取得します。
    ///
    /// 大文字・小文字は入力のまま保持されます。
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        &self.worker.sent.raw()[self.range_byte()]
    }

    /// トークンの由来を取得します。
    #[inline(always)]
    pub fn kind(&self) -> TokenKind {
        self.node().kind
    }

    /// 辞書語であれば単語インデックスを取得します。
    #[inline(always)]
    pub fn word_idx(&self) -> Option<WordIdx> {
        self.node().word
    }

    /// 辞書語であれば単語エントリを取得します。
    #[inline(always)]
    pub fn word(&self) -> Option<&'w WordEntry> {
        let dict = self.worker.tokenizer.dictionary();
        self.word_idx().map(|idx| dict.word(idx))
    }

    /// 辞書語であれば品詞タグを取得します。
    #[inline(always)]
    pub fn pos(&self) -> Option<&'w str> {
        self.word().and_then(WordEntry::pos)
    }

    /// 最短経路探索で使われた辺のコストを取得します。
    ///
    /// 辞書語以外のトークンでは [`UNKNOWN_DISTANCE`] を返します。
    pub fn distance(&self) -> f64 {
        self.word().map_or(UNKNOWN_DISTANCE, WordEntry::distance)
    }

    /// このトークンビューを所有型の [`TokenBuf`] に変換します。
    pub fn to_buf(&self) -> TokenBuf {
        TokenBuf {
            surface: self.surface().to_string(),
            range_char: self.range_char(),
            range_byte: self.range_byte(),
            kind: self.kind(),
            word_id: self.word_idx(),
            pos: self.pos().map(str::to_string),
        }
    }
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("surface", &self.surface())
            .field("range_char", &self.range_char())
            .field("range_byte", &self.range_byte())
            .field("kind", &self.kind())
            .field("word_id", &self.word_idx())
            .field("pos", &self.pos())
            .field("distance", &self.distance())
            .finish()
    }
}

/// トークンのイテレータ
///
/// 前方および後方からの走査をサポートしています（[`DoubleEndedIterator`]を実装）。
pub struct TokenIter<'w> {
    worker: &'w Worker,
    front: usize,
    back: usize,
}

impl<'w> TokenIter<'w> {
    #[inline(always)]
    pub(crate) fn new(worker: &'w Worker) -> Self {
        Self {
            worker,
            front: 0,
            back: worker.num_tokens(),
        }
    }
}

impl<'w> Iterator for TokenIter<'w> {
    type Item = Token<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let t = self.worker.token(self.front);
            self.front += 1;
            Some(t)
        } else {
            None
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for TokenIter<'_> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.worker.token(self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for TokenIter<'_> {}

/// 所有型の自己完結したトークン
///
/// [`Token`] の所有型版です。分かち書きの結果を保存したり、
/// スレッド間で送信する際に使います。
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBuf {
    /// トークンの表層形
    pub surface: String,

    /// トークンの文字単位の位置範囲
    pub range_char: Range<usize>,

    /// トークンのバイト単位の位置範囲
    pub range_byte: Range<usize>,

    /// トークンの由来
    pub kind: TokenKind,

    /// 辞書語の単語インデックス
    pub word_id: Option<WordIdx>,

    /// 辞書語の品詞タグ
    pub pos: Option<String>,
}

impl<'w> From<Token<'w>> for TokenBuf {
    fn from(token: Token<'w>) -> Self {
        token.to_buf()
    }
}
