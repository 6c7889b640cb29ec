//! 単語識別子
//!
//! このモジュールは、辞書内の単語を一意に識別するための
//! インデックス構造を提供します。

use crate::utils::FromU32;

/// 単語の識別子
///
/// 辞書の単語表（追記のみの配列）へのインデックスです。
/// トライの値としても同じ値が格納されます。
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, PartialOrd, Ord)]
pub struct WordIdx(pub(crate) u32);

impl WordIdx {
    /// 新しいインスタンスを作成します。
    #[inline(always)]
    pub(crate) const fn new(word_id: u32) -> Self {
        Self(word_id)
    }

    /// 単語IDを取得します。
    #[inline(always)]
    pub const fn word_id(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        usize::from_u32(self.0)
    }
}
