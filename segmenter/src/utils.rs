//! ユーティリティ関数と型変換トレイトを提供するモジュール
//!
//! 主に以下の機能を提供します：
//!
//! - `FromU32`: u32からの型変換トレイト
//! - 文字種（漢字・ASCII英数字）の判定
//! - テスト用のマクロ

/// u32から他の型への変換を提供するトレイト
pub trait FromU32 {
    /// u32値から実装型を生成する
    fn from_u32(src: u32) -> Self;
}

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl FromU32 for usize {
    #[inline(always)]
    fn from_u32(src: u32) -> Self {
        // Since the pointer width is guaranteed to be 32 or 64,
        // the following process always succeeds.
        unsafe { Self::try_from(src).unwrap_unchecked() }
    }
}

/// 文字が漢字（CJK統合漢字）かどうかを判定する
///
/// 拡張A、互換漢字、および補助面の拡張B以降も漢字として扱います。
#[inline(always)]
pub fn is_han(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FA1F}'
    )
}

/// 文字がASCII英数字かどうかを判定する
///
/// 英数字の連続はひとまとまりの語として扱われ、DAGやHMMによって分割されることはありません。
#[inline(always)]
pub const fn is_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// 文字が分かち書きブロック（漢字または英数字）に含まれるかどうかを判定する
#[inline(always)]
pub fn is_block_char(c: char) -> bool {
    is_han(c) || is_alnum(c)
}

/// ASCII英字を小文字に変換する
///
/// 辞書のキーと検索窓の両方に同じ変換を適用することで、
/// 英字を含む語の大文字・小文字を区別せずに照合します。
#[inline(always)]
pub const fn fold_char(c: char) -> char {
    c.to_ascii_lowercase()
}

#[cfg(test)]
/// HashMapリテラルを簡潔に記述するためのマクロ
///
/// ```ignore
/// let map = hashmap! {
///     '小' => -1.0,
///     '明' => -2.0,
/// };
/// ```
macro_rules! hashmap {
    ( $($k:expr => $v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashMap::new();
            $(
                h.insert($k, $v);
            )*
            h
        }
    };
    ( $($k:expr => $v:expr),* ) => {
        hashmap![$( $k => $v, )*]
    };
}

#[cfg(test)]
pub(crate) use hashmap;
