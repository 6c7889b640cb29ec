//! 未知語認識のための隠れマルコフモデル
//!
//! 辞書で分割できなかった1文字トークンの連続に対して、BMES（Begin / Middle /
//! End / Single）の4状態HMMとViterbiアルゴリズムを適用し、辞書にない
//! 複数文字の語（人名、固有名詞、新語など）を文字列の統計だけから復元します。
//!
//! # モデルファイル
//!
//! [`HmmModel::from_reader`] は cppjieba の `hmm_model.utf8` 形式を読み込みます。
//! `#` で始まる行と空行は無視され、残りの行は次の順に並びます。
//!
//! 1. 開始確率（対数）4個。状態の順序は B, E, M, S
//! 2. 遷移確率（対数）4行 × 4個。行が遷移元、列が遷移先
//! 3. 出力確率 4行。各行は `文字:対数確率` をカンマで区切ったもの
mod model_file;

use std::fs::File;
use std::io::Read;
use std::ops::Range;
use std::path::Path;

use hashbrown::HashMap;

use crate::errors::{Result, SegmenterError};

/// 出力確率表にない文字、および禁止された遷移に割り当てられる対数確率
pub const MIN_LOG_PROB: f64 = -3.14e100;

/// BMESの状態
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum State {
    /// 語の先頭
    B = 0,
    /// 語の末尾
    E = 1,
    /// 語の中間
    M = 2,
    /// 1文字の語
    S = 3,
}

impl State {
    /// モデルファイルと同じ順序のすべての状態
    pub const ALL: [Self; 4] = [Self::B, Self::E, Self::M, Self::S];

    /// この状態に遷移できる直前の状態
    #[inline(always)]
    pub const fn prev_states(self) -> [Self; 2] {
        match self {
            Self::B => [Self::E, Self::S],
            Self::M => [Self::M, Self::B],
            Self::E => [Self::B, Self::M],
            Self::S => [Self::S, Self::E],
        }
    }

    /// この状態で語が閉じるかどうか
    #[inline(always)]
    pub const fn closes_word(self) -> bool {
        matches!(self, Self::E | Self::S)
    }

    #[inline(always)]
    const fn idx(self) -> usize {
        self as usize
    }
}

const DEFAULT_START: [f64; 4] = [-0.262686603532, MIN_LOG_PROB, MIN_LOG_PROB, -1.46526333986];

const DEFAULT_TRANS: [[f64; 4]; 4] = [
    // B -> B, E, M, S
    [MIN_LOG_PROB, -0.653333431965, -0.765455118334, MIN_LOG_PROB],
    // E -> B, E, M, S
    [-0.933489733133, MIN_LOG_PROB, MIN_LOG_PROB, -0.800739298181],
    // M -> B, E, M, S
    [MIN_LOG_PROB, -0.68013402119, -0.733423709737, MIN_LOG_PROB],
    // S -> B, E, M, S
    [-0.94485843981, MIN_LOG_PROB, MIN_LOG_PROB, -0.781857883616],
];

/// BMES隠れマルコフモデル
///
/// 構築後は変更されず、`Send + Sync` です。
#[derive(Debug, Clone)]
pub struct HmmModel {
    start: [f64; 4],
    trans: [[f64; 4]; 4],
    emit: [HashMap<char, f64>; 4],
}

impl HmmModel {
    /// 出力確率表から、標準的な開始確率・遷移確率を持つモデルを作成します。
    ///
    /// # 引数
    ///
    /// * `emit` - 状態 B, E, M, S の順の出力確率表（対数）
    pub fn new(emit: [HashMap<char, f64>; 4]) -> Self {
        Self {
            start: DEFAULT_START,
            trans: DEFAULT_TRANS,
            emit,
        }
    }

    /// すべての確率を指定してモデルを作成します。
    pub fn with_params(start: [f64; 4], trans: [[f64; 4]; 4], emit: [HashMap<char, f64>; 4]) -> Self {
        Self { start, trans, emit }
    }

    /// cppjieba形式のモデルをリーダーから読み込みます。
    ///
    /// # エラー
    ///
    /// 行数や値の個数が足りない場合、または数値として解釈できない値がある場合に
    /// [`SegmenterError::InvalidFormat`] を返します。
    pub fn from_reader<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut buf = vec![];
        rdr.read_to_end(&mut buf)?;
        let model = model_file::parse(std::str::from_utf8(&buf)?)?;
        log::info!(
            "loaded HMM model with {} emission entries",
            model.emit.iter().map(HashMap::len).sum::<usize>()
        );
        Ok(model)
    }

    /// cppjieba形式のモデルをファイルから読み込みます。
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

    /// 開始確率（対数）を返します。
    #[inline(always)]
    pub fn start_prob(&self, state: State) -> f64 {
        self.start[state.idx()]
    }

    /// 遷移確率（対数）を返します。
    #[inline(always)]
    pub fn trans_prob(&self, from: State, to: State) -> f64 {
        self.trans[from.idx()][to.idx()]
    }

    /// 出力確率（対数）を返します。表にない文字には [`MIN_LOG_PROB`] を返します。
    #[inline(always)]
    pub fn emit_prob(&self, state: State, c: char) -> f64 {
        self.emit[state.idx()]
            .get(&c)
            .copied()
            .unwrap_or(MIN_LOG_PROB)
    }

    /// Viterbiアルゴリズムで最尤のBMES状態列を求めます。
    ///
    /// 最後の状態は E または S に限られます。
    pub fn tag(&self, chars: &[char]) -> Vec<State> {
        if chars.is_empty() {
            return vec![];
        }

        let mut weights: Vec<[f64; 4]> = Vec::with_capacity(chars.len());
        let mut backptrs: Vec<[State; 4]> = Vec::with_capacity(chars.len());

        let mut first = [0.0; 4];
        for s in State::ALL {
            first[s.idx()] = self.start_prob(s) + self.emit_prob(s, chars[0]);
        }
        weights.push(first);
        backptrs.push([State::B; 4]);

        for &c in &chars[1..] {
            let prev = weights[weights.len() - 1];
            let mut cur = [0.0; 4];
            let mut ptr = [State::B; 4];
            for s in State::ALL {
                let emit = self.emit_prob(s, c);
                let candidates = s.prev_states();
                let mut best_state = candidates[0];
                let mut best = f64::NEG_INFINITY;
                for p in candidates {
                    let w = prev[p.idx()] + self.trans_prob(p, s) + emit;
                    if w > best {
                        best = w;
                        best_state = p;
                    }
                }
                cur[s.idx()] = best;
                ptr[s.idx()] = best_state;
            }
            weights.push(cur);
            backptrs.push(ptr);
        }

        let last = weights[weights.len() - 1];
        let mut state = if last[State::S.idx()] > last[State::E.idx()] {
            State::S
        } else {
            State::E
        };

        let mut tags = vec![State::S; chars.len()];
        for t in (0..chars.len()).rev() {
            tags[t] = state;
            state = backptrs[t][state.idx()];
        }
        tags
    }

    /// 文字列を語に分割し、各語の文字単位の範囲を返します。
    ///
    /// 返される範囲は常に入力全体の分割になっています。
    ///
    /// # 例
    ///
    /// ```
    /// use glog_segmenter::hmm::HmmModel;
    ///
    /// let model = HmmModel::from_reader(
    ///     "-0.2 -3.14e+100 -3.14e+100 -1.4\n\
    ///      -3.14e+100 -0.5 -0.9 -3.14e+100\n\
    ///      -0.5 -3.14e+100 -3.14e+100 -0.9\n\
    ///      -3.14e+100 -0.3 -1.3 -3.14e+100\n\
    ///      -0.7 -3.14e+100 -3.14e+100 -0.7\n\
    ///      小:-1.0\n\
    ///      明:-1.0\n\
    ///      中:-9.0\n\
    ///      的:-1.0\n".as_bytes(),
    /// )?;
    /// let chars: Vec<char> = "小明的".chars().collect();
    /// assert_eq!(model.viterbi(&chars), vec![0..2, 2..3]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn viterbi(&self, chars: &[char]) -> Vec<Range<usize>> {
        let tags = self.tag(chars);
        let mut words = Vec::new();
        let mut start = 0;
        for (i, tag) in tags.into_iter().enumerate() {
            if tag.closes_word() {
                words.push(start..i + 1);
                start = i + 1;
            }
        }
        if start < chars.len() {
            words.push(start..chars.len());
        }
        words
    }
}
