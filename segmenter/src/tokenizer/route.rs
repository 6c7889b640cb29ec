//! 最短経路の探索
//!
//! DAG上で、各位置からブロック末尾までの距離の総和が最小になる経路を
//! 右から左への動的計画法で求めます。
use std::ops::Range;

use crate::dictionary::{Dictionary, WordIdx, UNKNOWN_DISTANCE};
use crate::tokenizer::dag::Dag;

/// 経路表の1要素
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteNode {
    /// この位置からブロック末尾までの最小距離
    pub distance: f64,
    /// 最良の語の終了位置（両端を含む）。番兵では文字数と等しくなります。
    pub best_end: usize,
    pub word: Option<WordIdx>,
}

/// 経路表
///
/// `nodes[k]` は位置 `k` から始まる最良の語を保持し、`nodes[N]` は距離0の番兵です。
#[derive(Default)]
pub struct Route {
    nodes: Vec<RouteNode>,
}

impl Route {
    /// DAGに対する最短経路を求めます。
    ///
    /// 距離が等しい候補が複数ある場合は、終了位置が最も小さいものが選ばれます。
    /// 辞書にない文字の辺には [`UNKNOWN_DISTANCE`] が課されます。
    pub fn resolve(&mut self, dag: &Dag, dict: &Dictionary) {
        let n = dag.len_char();

        self.nodes.clear();
        self.nodes.resize(
            n + 1,
            RouteNode {
                distance: 0.0,
                best_end: n,
                word: None,
            },
        );

        for k in (0..n).rev() {
            let mut best: Option<RouteNode> = None;
            for edge in dag.edges(k) {
                let cost = edge
                    .word
                    .map_or(UNKNOWN_DISTANCE, |idx| dict.word(idx).distance());
                let distance = cost + self.nodes[edge.end + 1].distance;
                if best.map_or(true, |b| distance < b.distance) {
                    best = Some(RouteNode {
                        distance,
                        best_end: edge.end,
                        word: edge.word,
                    });
                }
            }
            if let Some(best) = best {
                self.nodes[k] = best;
            }
        }
    }

    /// 位置 `pos` の経路表要素を返します。
    #[inline(always)]
    pub fn node(&self, pos: usize) -> &RouteNode {
        &self.nodes[pos]
    }

    /// 先頭から経路をたどり、語の範囲（ブロック内の文字位置）を順に返します。
    pub fn segments(&self) -> Segments<'_> {
        Segments { route: self, pos: 0 }
    }
}

/// [`Route::segments`] のイテレータ
pub struct Segments<'a> {
    route: &'a Route,
    pos: usize,
}

impl Iterator for Segments<'_> {
    type Item = (Range<usize>, Option<WordIdx>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos + 1 >= self.route.nodes.len() {
            return None;
        }
        let node = self.route.nodes[self.pos];
        let range = self.pos..node.best_end + 1;
        self.pos = range.end;
        Some((range, node.word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sentence::Sentence;

    fn segment(dict: &str, input: &str) -> Vec<String> {
        let dict = Dictionary::from_reader(dict.as_bytes()).unwrap();
        let mut sent = Sentence::new();
        sent.set_sentence(input);
        sent.compile();
        let mut dag = Dag::default();
        dag.build(&sent, 0..sent.len_char(), &dict);
        let mut route = Route::default();
        route.resolve(&dag, &dict);
        route
            .segments()
            .map(|(r, _)| sent.substr(r).to_string())
            .collect()
    }

    #[test]
    fn test_shortest_path() {
        let dict = "北京 100\n天安门 50\n北 5\n京 5\n天 5\n安 5\n门 5\n天安 3";
        assert_eq!(segment(dict, "北京天安门"), vec!["北京", "天安门"]);
    }

    #[test]
    fn test_prefers_frequent_split() {
        // 大学 + 生 vs 大 + 学生
        let dict = "大学 10\n学生 1000\n大 500\n生 10";
        assert_eq!(segment(dict, "大学生"), vec!["大", "学生"]);
    }

    #[test]
    fn test_unknown_chars() {
        assert_eq!(segment("", "未知"), vec!["未", "知"]);
        assert_eq!(segment("", "abc123"), vec!["abc123"]);
    }

    #[test]
    fn test_avoids_unknown_chars() {
        // 甲乙 is far more frequent, but 甲乙 + 丙 leaves 丙 uncovered.
        let dict = "甲乙 1000\n乙丙 1\n甲 1";
        assert_eq!(segment(dict, "甲乙丙"), vec!["甲", "乙丙"]);
    }

    #[test]
    fn test_tie_takes_shortest_end() {
        // 甲 + 乙丙 and 甲乙 + 丙 sum the same two distances.
        let dict = "甲乙 3\n乙丙 3\n甲 5\n丙 5";
        assert_eq!(segment(dict, "甲乙丙"), vec!["甲", "乙丙"]);
    }

    #[test]
    fn test_route_sentinel() {
        let dict = Dictionary::from_reader("北京 10".as_bytes()).unwrap();
        let mut sent = Sentence::new();
        sent.set_sentence("北京");
        sent.compile();
        let mut dag = Dag::default();
        dag.build(&sent, 0..2, &dict);
        let mut route = Route::default();
        route.resolve(&dag, &dict);
        assert_eq!(route.node(2).distance, 0.0);
        assert_eq!(route.node(2).best_end, 2);
        assert_eq!(route.node(0).best_end, 1);
        assert_eq!(route.node(0).distance, 0.0);
    }
}
