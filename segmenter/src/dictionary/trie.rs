//! トライ構造による高速文字列検索
//!
//! このモジュールは、ダブル配列トライを使用した高速な文字列検索機能を提供します。

use crate::errors::{Result, SegmenterError};

/// ダブル配列トライ
pub struct Trie {
    da: crawdad::Trie,
}

impl Trie {
    /// レコードからトライを構築します。
    ///
    /// キーは重複せず、空でない必要があります。
    pub fn from_records<K>(records: &[(K, u32)]) -> Result<Self>
    where
        K: AsRef<str>,
    {
        Ok(Self {
            da: crawdad::Trie::from_records(records.iter().map(|(k, v)| (k, *v)))
                .map_err(|e| SegmenterError::invalid_argument("records", e.to_string()))?,
        })
    }

    /// キーに完全一致する値を返します。
    #[inline(always)]
    pub fn exact_match<I>(&self, key: I) -> Option<u32>
    where
        I: IntoIterator<Item = char>,
    {
        self.da.exact_match(key)
    }

    /// 入力の接頭辞に一致するすべてのキーを短い順に返します。
    #[inline(always)]
    pub fn common_prefix_iterator<'a, I>(&'a self, input: I) -> impl Iterator<Item = TrieMatch> + 'a
    where
        I: Iterator<Item = char> + 'a,
    {
        self.da
            .common_prefix_search(input)
            .map(move |(value, end_char)| TrieMatch::new(value, end_char))
    }
}

/// トライマッチング結果
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct TrieMatch {
    pub value: u32,
    /// 入力先頭からの終了位置（文字単位、排他的）
    pub end_char: usize,
}

impl TrieMatch {
    #[inline(always)]
    pub const fn new(value: u32, end_char: usize) -> Self {
        Self { value, end_char }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix() {
        let records = [("中", 2), ("中国", 0), ("中国科学院", 1)];
        let trie = Trie::from_records(&records).unwrap();
        let matches: Vec<_> = trie.common_prefix_iterator("中国科学院计算所".chars()).collect();
        assert_eq!(
            matches,
            vec![
                TrieMatch::new(2, 1),
                TrieMatch::new(0, 2),
                TrieMatch::new(1, 5),
            ]
        );
    }

    #[test]
    fn test_exact_match() {
        let records = [("北京", 0), ("北京大学", 1)];
        let trie = Trie::from_records(&records).unwrap();
        assert_eq!(trie.exact_match("北京".chars()), Some(0));
        assert_eq!(trie.exact_match("北京大".chars()), None);
        assert_eq!(trie.exact_match("北京大学".chars()), Some(1));
    }
}
