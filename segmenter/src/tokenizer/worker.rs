//! トークン化処理のためのルーチンを提供するモジュール。
//!
//! ワーカーは内部データ構造（文、DAG、経路表、トークン列）を保持し、
//! 再利用することで不要なメモリアロケーションを避けます。
use std::ops::Range;

use crate::dictionary::WordIdx;
use crate::sentence::{BlockKind, Sentence};
use crate::token::{Token, TokenIter, TokenKind, TokenNode};
use crate::tokenizer::dag::Dag;
use crate::tokenizer::route::Route;
use crate::tokenizer::Tokenizer;

/// トークン化処理のためのルーチンを提供する構造体。
///
/// # 例
///
/// ```
/// use glog_segmenter::{Dictionary, Tokenizer};
///
/// let dict = Dictionary::from_reader("北京 100\n天安门 50".as_bytes())?;
/// let tokenizer = Tokenizer::new(dict);
/// let mut worker = tokenizer.new_worker();
///
/// worker.reset_sentence("北京天安门");
/// worker.tokenize();
/// let words: Vec<_> = worker.token_iter().map(|t| t.surface()).collect();
/// assert_eq!(words, vec!["北京", "天安门"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Worker {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) sent: Sentence,
    pub(crate) dag: Dag,
    pub(crate) route: Route,
    pub(crate) tokens: Vec<TokenNode>,
    // Raw route output of the current block, before HMM re-segmentation.
    segments: Vec<(Range<usize>, Option<WordIdx>)>,
}

impl Worker {
    /// 新しいインスタンスを作成します。
    pub(crate) fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            sent: Sentence::new(),
            dag: Dag::default(),
            route: Route::default(),
            tokens: vec![],
            segments: vec![],
        }
    }

    /// トークン化する入力文をリセットします。
    ///
    /// # 引数
    ///
    /// * `input` - トークン化する入力文字列
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.sent.clear();
        self.tokens.clear();
        let input = input.as_ref();
        if !input.is_empty() {
            self.sent.set_sentence(input);
            self.sent.compile();
        }
    }

    /// 設定された入力文をトークン化します。
    ///
    /// 結果は内部状態に保存され、[`Self::token_iter`] や [`Self::token`] で
    /// アクセスできます。得られたトークン列は常に入力文全体の分割になります。
    pub fn tokenize(&mut self) {
        self.tokens.clear();
        for bi in 0..self.sent.blocks().len() {
            let block = self.sent.blocks()[bi].clone();
            match block.kind {
                BlockKind::Other => self.tokens.push(TokenNode {
                    range_char: block.range,
                    kind: TokenKind::Other,
                    word: None,
                }),
                BlockKind::Segmentable => self.tokenize_block(block.range),
            }
        }
    }

    fn tokenize_block(&mut self, block: Range<usize>) {
        let dict = self.tokenizer.dictionary();
        self.dag.build(&self.sent, block.clone(), dict);
        self.route.resolve(&self.dag, dict);

        self.segments.clear();
        self.segments.extend(self.route.segments().map(|(r, word)| {
            (block.start + r.start..block.start + r.end, word)
        }));

        let mut i = 0;
        while i < self.segments.len() {
            let run_end = self.unknown_han_run_end(i);
            if run_end - i >= 2 {
                self.push_unknown_run(i..run_end);
                i = run_end;
            } else {
                let (range, word) = self.segments[i].clone();
                self.push_segment(range, word);
                i += 1;
            }
        }
    }

    // Exclusive end of the run of single-character unknown Han segments starting at `i`.
    fn unknown_han_run_end(&self, i: usize) -> usize {
        let mut j = i;
        while j < self.segments.len() {
            let (range, word) = &self.segments[j];
            if range.len() != 1 || word.is_some() || !self.sent.is_han(range.start) {
                break;
            }
            j += 1;
        }
        j
    }

    fn push_segment(&mut self, range_char: Range<usize>, word: Option<WordIdx>) {
        let kind = if word.is_some() {
            TokenKind::Dictionary
        } else {
            TokenKind::Unknown
        };
        self.tokens.push(TokenNode {
            range_char,
            kind,
            word,
        });
    }

    fn push_unknown_run(&mut self, run: Range<usize>) {
        let start = self.segments[run.start].0.start;
        let end = self.segments[run.end - 1].0.end;

        let Some(model) = self.tokenizer.hmm_model() else {
            for seg in run {
                let (range, word) = self.segments[seg].clone();
                self.push_segment(range, word);
            }
            return;
        };

        log::debug!("HMM re-segmentation of {:?}", self.sent.substr(start..end));
        for word in model.viterbi(&self.sent.chars()[start..end]) {
            let range_char = start + word.start..start + word.end;
            let kind = if range_char.len() == 1 {
                TokenKind::Unknown
            } else {
                TokenKind::Hmm
            };
            self.tokens.push(TokenNode {
                range_char,
                kind,
                word: None,
            });
        }
    }

    /// トークン化結果のトークン数を取得します。
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// `i`番目のトークンを取得します。
    #[inline(always)]
    pub fn token<'w>(&'w self, i: usize) -> Token<'w> {
        Token::new(self, i)
    }

    /// トークン化結果のイテレータを作成します。
    #[inline(always)]
    pub fn token_iter<'w>(&'w self) -> TokenIter<'w> {
        TokenIter::new(self)
    }
}
