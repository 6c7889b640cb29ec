//! 有向非巡回グラフ（DAG）の構築
//!
//! ブロック内の各文字位置について、その位置から始まる辞書語の終了位置を
//! すべて列挙します。辞書語がひとつもない位置には、1文字（英数字の場合は
//! 英数字の連続全体）を未知語とする辺を1本だけ張るため、行き止まりの位置は
//! 存在しません。
use std::ops::Range;

use crate::dictionary::{Dictionary, WordIdx};
use crate::sentence::Sentence;

/// DAGの辺
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// 語の終了位置（ブロック内の文字位置、両端を含む）
    pub end: usize,
    /// 辞書語の場合は単語ID、未知語の場合は`None`
    pub word: Option<WordIdx>,
}

/// ブロック単位のDAG
#[derive(Default)]
pub struct Dag {
    edges: Vec<Vec<Edge>>,
    len_char: usize,
}

impl Dag {
    fn reset(&mut self, len_char: usize) {
        for v in self.edges.iter_mut() {
            v.clear();
        }
        if self.edges.len() < len_char {
            self.edges.resize_with(len_char, || Vec::with_capacity(4));
        }
        self.len_char = len_char;
    }

    /// DAGを構築します。
    ///
    /// # 引数
    ///
    /// * `sent` - 入力文
    /// * `block` - 対象ブロックの文字単位の範囲
    /// * `dict` - 辞書
    pub fn build(&mut self, sent: &Sentence, block: Range<usize>, dict: &Dictionary) {
        self.reset(block.len());

        for k in 0..block.len() {
            let start = block.start + k;
            let edges = &mut self.edges[k];

            // Never reached from the route; a word cannot start inside an alphanumeric run.
            if sent.inside_alnum_run(start) {
                edges.push(Edge { end: k, word: None });
                continue;
            }

            let window = &sent.folded()[start..block.end];
            for (word_idx, end_char) in dict.lookup_all(window) {
                let end = start + end_char;
                if end < block.end && sent.inside_alnum_run(end) {
                    continue;
                }
                edges.push(Edge {
                    end: k + end_char - 1,
                    word: Some(word_idx),
                });
            }

            if edges.is_empty() {
                let unit = sent.alnum_run(start).max(1);
                edges.push(Edge {
                    end: k + unit - 1,
                    word: None,
                });
            }
        }
    }

    /// ブロックの文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }

    /// 指定位置から出る辺を終了位置の昇順で返します。
    #[inline(always)]
    pub fn edges(&self, pos: usize) -> &[Edge] {
        &self.edges[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(dict: &str, input: &str) -> (Dag, Sentence) {
        let dict = Dictionary::from_reader(dict.as_bytes()).unwrap();
        let mut sent = Sentence::new();
        sent.set_sentence(input);
        sent.compile();
        let mut dag = Dag::default();
        dag.build(&sent, 0..sent.len_char(), &dict);
        (dag, sent)
    }

    fn ends(dag: &Dag, pos: usize) -> Vec<usize> {
        dag.edges(pos).iter().map(|e| e.end).collect()
    }

    #[test]
    fn test_dag() {
        let (dag, _) = build("北京 10\n北京大学 5\n大学 8\n学生 6\n大 2", "北京大学生");
        assert_eq!(dag.len_char(), 5);
        assert_eq!(ends(&dag, 0), vec![1, 3]);
        assert_eq!(ends(&dag, 1), vec![1]);
        assert_eq!(ends(&dag, 2), vec![2, 3]);
        assert_eq!(ends(&dag, 3), vec![4]);
        assert_eq!(ends(&dag, 4), vec![4]);
        assert!(dag.edges(1)[0].word.is_none());
        assert!(dag.edges(0)[0].word.is_some());
    }

    #[test]
    fn test_every_position_has_an_edge() {
        let (dag, _) = build("", "这是测试");
        for pos in 0..dag.len_char() {
            assert_eq!(ends(&dag, pos), vec![pos]);
        }
    }

    #[test]
    fn test_alnum_run_is_one_unit() {
        let (dag, _) = build("go 10\n语言 5", "Google语言");
        // "go" would end inside "Google", so it is rejected.
        assert_eq!(ends(&dag, 0), vec![5]);
        assert!(dag.edges(0)[0].word.is_none());
        assert_eq!(ends(&dag, 6), vec![7]);
    }

    #[test]
    fn test_mixed_word() {
        let (dag, _) = build("t恤 10\nt 1", "T恤衫");
        assert_eq!(ends(&dag, 0), vec![0, 1]);
    }

    #[test]
    fn test_reuse() {
        let dict = Dictionary::from_reader("北京 10".as_bytes()).unwrap();
        let mut dag = Dag::default();
        let mut sent = Sentence::new();
        sent.set_sentence("北京北京北京");
        sent.compile();
        dag.build(&sent, 0..6, &dict);
        sent.set_sentence("北京");
        sent.compile();
        dag.build(&sent, 0..2, &dict);
        assert_eq!(dag.len_char(), 2);
        assert_eq!(ends(&dag, 0), vec![1]);
        assert_eq!(ends(&dag, 1), vec![1]);
    }
}
