//! エラー型の定義
//!
//! エラーが発生するのは辞書・ストップワード・HMMモデルの読み込み時のみで、
//! 分かち書き処理そのものはエラーを返しません。

/// このクレート専用のResult型
pub type Result<T, E = SegmenterError> = std::result::Result<T, E>;

/// リソースの読み込みで発生するエラー
#[derive(Debug, thiserror::Error)]
pub enum SegmenterError {
    /// 辞書のトライを構築できない場合など、内部に渡された値が不正
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// HMMモデルの行数や値の個数が合わないなど、リソースの形式が不正
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 単語数が単語IDの範囲を超えた
    #[error(transparent)]
    TryFromInt(#[from] std::num::TryFromIntError),

    /// HMMモデルの確率値が数値として解釈できない
    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// リソースファイルが開けない、または読み込めない
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// リソースがUTF-8として不正
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// ファイルの代わりにディレクトリが指定された
    #[error("The path '{0}' is a directory, but a file was expected.")]
    PathIsDirectory(std::path::PathBuf),
}

impl SegmenterError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// # 引数
    ///
    /// * `resource` - 読み込み中のリソース名（例: `hmm_model`）
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(resource: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            resource,
            msg: msg.into(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("InvalidArgumentError: {arg}: {msg}")]
pub struct InvalidArgumentError {
    pub(crate) arg: &'static str,
    pub(crate) msg: String,
}

/// リソース名と、不正だった箇所の説明を持つエラー
#[derive(Debug, thiserror::Error)]
#[error("InvalidFormatError: {resource}: {msg}")]
pub struct InvalidFormatError {
    pub(crate) resource: &'static str,
    pub(crate) msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = SegmenterError::invalid_format("hmm_model", "expected 4 values");
        assert_eq!(e.to_string(), "InvalidFormatError: hmm_model: expected 4 values");

        let e = SegmenterError::from("x".parse::<f64>().unwrap_err());
        assert!(matches!(e, SegmenterError::ParseFloat(_)));

        let e = SegmenterError::PathIsDirectory("dict".into());
        assert!(e.to_string().contains("'dict' is a directory"));
    }
}
