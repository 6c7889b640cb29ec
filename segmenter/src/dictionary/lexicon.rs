//! 辞書の語彙情報を管理するモジュール
//!
//! このモジュールは、単語の表層形、頻度、品詞、距離（コスト）を管理する
//! 語彙データ構造と、テキスト形式の辞書ファイルのパーサーを提供します。

use std::collections::BTreeMap;

use crate::dictionary::word_idx::WordIdx;
use crate::errors::Result;
use crate::utils::fold_char;

/// 頻度が省略された行に割り当てられる頻度
pub const DEFAULT_FREQUENCY: f64 = 1.0;

/// 辞書にない文字（未知語の単位）の距離
///
/// どの辞書語の距離よりも大きく、辞書語だけで覆える経路が常に優先されます。
pub const UNKNOWN_DISTANCE: f64 = 10000.0;

/// 辞書の単語エントリ
///
/// 距離 `distance` は `ln(total_freq / freq)` で定義され、最短経路探索の
/// 辺のコストとして使われます。頻度が低い単語ほど距離は大きくなります。
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    surface: String,
    len_char: usize,
    freq: f64,
    pos: Option<String>,
    distance: f64,
}

impl WordEntry {
    /// 単語の表層形（ASCII英字は小文字化済み）を取得します。
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// 単語の文字数を取得します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }

    /// 単語の頻度を取得します。
    #[inline(always)]
    pub const fn freq(&self) -> f64 {
        self.freq
    }

    /// 品詞タグを取得します。辞書に記載がない場合は`None`です。
    #[inline(always)]
    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    /// 単語の距離（コスト）を取得します。
    #[inline(always)]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// パース済みの辞書行
#[derive(Debug, Clone, PartialEq)]
pub struct RawWordEntry<'a> {
    pub surface: &'a str,
    pub freq: f64,
    pub pos: Option<&'a str>,
}

impl<'a> RawWordEntry<'a> {
    /// 辞書の1行をパースします。
    ///
    /// 行の形式は `word[SEP]frequency[SEP]pos` で、頻度と品詞は省略可能です。
    /// 空行、`#`で始まるコメント行、頻度が正の有限数として解釈できない行は
    /// `None`を返します。
    pub fn parse_line(line: &'a str, separator: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        // Whitespace separators collapse, so "word  12" is the same as "word 12".
        let fields: Vec<&'a str> = if separator.trim().is_empty() {
            line.split_whitespace().collect()
        } else {
            line.split(separator).map(str::trim).collect()
        };
        let mut fields = fields.into_iter();

        let surface = fields.next().filter(|w| !w.is_empty())?;
        let freq = match fields.next().filter(|f| !f.is_empty()) {
            Some(f) => {
                let freq = f.parse::<f64>().ok()?;
                if !freq.is_finite() || freq <= 0.0 {
                    return None;
                }
                freq
            }
            None => DEFAULT_FREQUENCY,
        };
        let pos = fields.next().filter(|p| !p.is_empty());

        Some(Self { surface, freq, pos })
    }
}

/// テキスト形式の辞書をパースした結果
#[derive(Debug, Default)]
pub struct ParsedLines<'a> {
    pub entries: Vec<RawWordEntry<'a>>,
    /// 読み飛ばされた不正な行の数（空行とコメントは含まない）
    pub num_skipped: usize,
}

/// テキスト形式の辞書をパースします。
pub fn parse_lines<'a>(text: &'a str, separator: &str) -> ParsedLines<'a> {
    let mut parsed = ParsedLines::default();
    for line in text.lines() {
        match RawWordEntry::parse_line(line, separator) {
            Some(e) => parsed.entries.push(e),
            None => {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    parsed.num_skipped += 1;
                }
            }
        }
    }
    parsed
}

/// 単語の語彙情報
///
/// 単語表は追記のみで構築され、構築後は変更されません。
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: Vec<WordEntry>,
    total_freq: f64,
    max_word_len: usize,
}

impl Lexicon {
    /// エントリのリストから新しいインスタンスを構築します。
    ///
    /// 同じ単語が複数回現れた場合は最初のエントリが採用され、
    /// 後続のエントリは総頻度にも加算されません。
    ///
    /// # 戻り値
    ///
    /// 語彙と、トライ構築用のソート済みレコード `(単語, 単語ID)` の組
    pub fn from_entries(entries: &[RawWordEntry]) -> Result<(Self, Vec<(String, u32)>)> {
        let mut map: BTreeMap<String, u32> = BTreeMap::new();
        let mut lexicon = Self::default();

        for e in entries {
            let surface: String = e.surface.chars().map(fold_char).collect();
            if map.contains_key(&surface) {
                continue;
            }
            let word_id = u32::try_from(lexicon.entries.len())?;
            let len_char = surface.chars().count();
            lexicon.total_freq += e.freq;
            lexicon.max_word_len = lexicon.max_word_len.max(len_char);
            lexicon.entries.push(WordEntry {
                surface: surface.clone(),
                len_char,
                freq: e.freq,
                pos: e.pos.map(str::to_string),
                distance: 0.0,
            });
            map.insert(surface, word_id);
        }

        // The distance depends on the final total frequency.
        let total_freq = lexicon.total_freq;
        for entry in &mut lexicon.entries {
            entry.distance = (total_freq / entry.freq).ln();
        }

        Ok((lexicon, map.into_iter().collect()))
    }

    /// 単語エントリを取得します。
    #[inline(always)]
    pub fn get(&self, word_idx: WordIdx) -> &WordEntry {
        &self.entries[word_idx.as_usize()]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline(always)]
    pub const fn total_freq(&self) -> f64 {
        self.total_freq
    }

    #[inline(always)]
    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}
