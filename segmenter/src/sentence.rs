//! 入力テキストの内部表現を提供するモジュール
//!
//! このモジュールは、分かち書きのために入力テキストを効率的に処理するための
//! 内部データ構造を提供します。入力文字列を文字単位に分割し、バイト位置の
//! マッピング、辞書照合用に小文字化した文字列、英数字の連続長、および
//! ブロック（辞書で分割する範囲とそれ以外の文字）を計算・保持します。

use std::ops::Range;

use crate::utils::{fold_char, is_alnum, is_block_char, is_han};

/// ブロックの種類
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockKind {
    /// 漢字とASCII英数字の連続。DAGと最短経路探索で分割されます。
    Segmentable,
    /// それ以外の1文字（空白、句読点、記号、かななど）。そのまま1トークンになります。
    Other,
}

/// 入力テキスト上の連続範囲
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// 文字単位の範囲
    pub range: Range<usize>,
}

/// 入力テキストの内部表現を保持する構造体
///
/// # フィールド
///
/// * `input` - 元の入力文字列
/// * `chars` - 入力文字列を文字単位に分割した配列
/// * `folded` - ASCII英字を小文字化した文字配列（辞書照合用）
/// * `c2b` - 文字位置からバイト位置へのマッピング配列
/// * `alnum_run` - 各文字位置から連続する英数字の文字数（英数字でなければ0）
/// * `blocks` - ブロック分割の結果
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    chars: Vec<char>,
    folded: Vec<char>,
    c2b: Vec<usize>,
    alnum_run: Vec<usize>,
    blocks: Vec<Block>,
}

impl Sentence {
    /// 新しい空の `Sentence` インスタンスを生成します
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.chars.clear();
        self.folded.clear();
        self.c2b.clear();
        self.alnum_run.clear();
        self.blocks.clear();
    }

    /// 入力文字列を設定します
    ///
    /// 既存の内部状態をクリアした後、新しい入力文字列を設定します。
    /// この時点では文字列の解析は行われません。解析を行うには [`compile`]
    /// を呼び出す必要があります。
    ///
    /// [`compile`]: Self::compile
    pub fn set_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
    }

    /// 入力文字列を解析し、内部データ構造を構築します
    pub fn compile(&mut self) {
        self.compute_basic();
        self.compute_alnum_run();
        self.compute_blocks();
    }

    fn compute_basic(&mut self) {
        for (bi, ch) in self.input.char_indices() {
            self.chars.push(ch);
            self.folded.push(fold_char(ch));
            self.c2b.push(bi);
        }
        self.c2b.push(self.input.len());
    }

    /// 各文字位置から連続する英数字の文字数を計算します（内部メソッド）
    fn compute_alnum_run(&mut self) {
        self.alnum_run.resize(self.chars.len(), 0);
        let mut run = 0;
        for i in (0..self.chars.len()).rev() {
            run = if is_alnum(self.chars[i]) { run + 1 } else { 0 };
            self.alnum_run[i] = run;
        }
    }

    fn compute_blocks(&mut self) {
        let mut i = 0;
        while i < self.chars.len() {
            if is_block_char(self.chars[i]) {
                let start = i;
                while i < self.chars.len() && is_block_char(self.chars[i]) {
                    i += 1;
                }
                self.blocks.push(Block {
                    kind: BlockKind::Segmentable,
                    range: start..i,
                });
            } else {
                self.blocks.push(Block {
                    kind: BlockKind::Other,
                    range: i..i + 1,
                });
                i += 1;
            }
        }
    }

    /// 元の入力文字列への参照を返します
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// 文字配列への参照を返します
    #[inline(always)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// 辞書照合用に小文字化された文字配列を返します
    #[inline(always)]
    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    /// 文字数を返します
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// 指定された文字位置に対応するバイト位置を返します
    ///
    /// `pos_char` が文字数と等しい場合は入力のバイト長を返します。
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// 文字単位の範囲に対応する部分文字列を返します
    #[inline(always)]
    pub fn substr(&self, range: Range<usize>) -> &str {
        &self.input[self.byte_position(range.start)..self.byte_position(range.end)]
    }

    /// 指定された位置から連続する英数字の文字数を返します
    #[inline(always)]
    pub fn alnum_run(&self, pos_char: usize) -> usize {
        self.alnum_run[pos_char]
    }

    /// 指定された位置が英数字の連続の途中（先頭以外）かどうかを返します
    #[inline(always)]
    pub fn inside_alnum_run(&self, pos_char: usize) -> bool {
        pos_char > 0 && self.alnum_run[pos_char] != 0 && self.alnum_run[pos_char - 1] != 0
    }

    /// 指定された位置の文字が漢字かどうかを返します
    #[inline(always)]
    pub fn is_han(&self, pos_char: usize) -> bool {
        is_han(self.chars[pos_char])
    }

    /// ブロックの一覧を返します
    #[inline(always)]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence() {
        let mut sent = Sentence::new();
        sent.set_sentence("自然");
        sent.compile();
        assert_eq!(sent.chars(), &['自', '然']);
        assert_eq!(sent.byte_position(0), 0);
        assert_eq!(sent.byte_position(1), 3);
        assert_eq!(sent.byte_position(2), 6);
        assert_eq!(sent.substr(1..2), "然");
    }

    #[test]
    fn test_blocks() {
        let mut sent = Sentence::new();
        sent.set_sentence("Go语言，很好 ok");
        sent.compile();
        let blocks: Vec<_> = sent
            .blocks()
            .iter()
            .map(|b| (b.kind, sent.substr(b.range.clone())))
            .collect();
        assert_eq!(
            blocks,
            vec![
                (BlockKind::Segmentable, "Go语言"),
                (BlockKind::Other, "，"),
                (BlockKind::Segmentable, "很好"),
                (BlockKind::Other, " "),
                (BlockKind::Segmentable, "ok"),
            ]
        );
    }

    #[test]
    fn test_alnum_run() {
        let mut sent = Sentence::new();
        sent.set_sentence("ab语c12");
        sent.compile();
        assert_eq!(
            (0..sent.len_char()).map(|i| sent.alnum_run(i)).collect::<Vec<_>>(),
            vec![2, 1, 0, 3, 2, 1]
        );
        assert!(!sent.inside_alnum_run(0));
        assert!(sent.inside_alnum_run(1));
        assert!(!sent.inside_alnum_run(2));
        assert!(!sent.inside_alnum_run(3));
        assert!(sent.inside_alnum_run(5));
    }

    #[test]
    fn test_folded() {
        let mut sent = Sentence::new();
        sent.set_sentence("T恤");
        sent.compile();
        assert_eq!(sent.folded(), &['t', '恤']);
        assert_eq!(sent.chars(), &['T', '恤']);
    }

    #[test]
    fn test_empty() {
        let mut sent = Sentence::new();
        sent.set_sentence("");
        sent.compile();
        assert_eq!(sent.len_char(), 0);
        assert!(sent.blocks().is_empty());
        assert_eq!(sent.byte_position(0), 0);
    }
}
