//! 分かち書きエンジンの設定
//!
//! 辞書・ストップワード・HMMモデルの場所と、辞書の区切り文字、HMMの使用有無を
//! まとめて保持します。[`Segmenter::from_config`](crate::Segmenter::from_config)
//! がこの設定を読み込んでエンジンを構築します。
use std::path::{Path, PathBuf};

use crate::dictionary::DEFAULT_SEPARATOR;

/// 既定の辞書ファイルのパス
pub const DEFAULT_DICT_PATH: &str = "dict/simplified.txt";

/// 既定のストップワードファイルのパス
pub const DEFAULT_STOP_WORDS_PATH: &str = "dict/stop_word.txt";

/// 分かち書きエンジンの設定
///
/// # 例
///
/// ```
/// use glog_segmenter::SegmenterConfig;
///
/// let config = SegmenterConfig::new("dict/words.txt")
///     .stop_words(Some("dict/stop.txt"))
///     .hmm_model(Some("dict/hmm_model.utf8"))
///     .dict_separator("\t")
///     .hmm(false);
/// assert_eq!(config.separator(), "\t");
/// assert!(!config.use_hmm());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    dict_path: PathBuf,
    stop_words_path: Option<PathBuf>,
    hmm_model_path: Option<PathBuf>,
    separator: String,
    hmm: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DICT_PATH).stop_words(Some(DEFAULT_STOP_WORDS_PATH))
    }
}

impl SegmenterConfig {
    /// 辞書ファイルのパスを指定して設定を作成します。
    ///
    /// ストップワードとHMMモデルは未設定、区切り文字は空白、HMMは有効です。
    pub fn new<P>(dict_path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            dict_path: dict_path.into(),
            stop_words_path: None,
            hmm_model_path: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            hmm: true,
        }
    }

    /// ストップワードファイルのパスを指定します。`None` の場合は空の集合を使います。
    pub fn stop_words<P>(mut self, path: Option<P>) -> Self
    where
        P: Into<PathBuf>,
    {
        self.stop_words_path = path.map(Into::into);
        self
    }

    /// HMMモデルファイルのパスを指定します。`None` の場合はHMMを使いません。
    pub fn hmm_model<P>(mut self, path: Option<P>) -> Self
    where
        P: Into<PathBuf>,
    {
        self.hmm_model_path = path.map(Into::into);
        self
    }

    /// 辞書ファイルのフィールド区切り文字を指定します。
    pub fn dict_separator<S>(mut self, sep: S) -> Self
    where
        S: Into<String>,
    {
        self.separator = sep.into();
        self
    }

    /// HMMによる未知語認識を行うかどうかを指定します。
    pub fn hmm(mut self, yes: bool) -> Self {
        self.hmm = yes;
        self
    }

    pub fn dict_path(&self) -> &Path {
        &self.dict_path
    }

    pub fn stop_words_path(&self) -> Option<&Path> {
        self.stop_words_path.as_deref()
    }

    pub fn hmm_model_path(&self) -> Option<&Path> {
        self.hmm_model_path.as_deref()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub const fn use_hmm(&self) -> bool {
        self.hmm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SegmenterConfig::default();
        assert_eq!(config.dict_path(), Path::new(DEFAULT_DICT_PATH));
        assert_eq!(
            config.stop_words_path(),
            Some(Path::new(DEFAULT_STOP_WORDS_PATH))
        );
        assert_eq!(config.hmm_model_path(), None);
        assert_eq!(config.separator(), " ");
        assert!(config.use_hmm());
    }

    #[test]
    fn test_builder() {
        let config = SegmenterConfig::new("a.txt")
            .stop_words(None::<PathBuf>)
            .hmm_model(Some("hmm.txt"));
        assert_eq!(config.dict_path(), Path::new("a.txt"));
        assert_eq!(config.stop_words_path(), None);
        assert_eq!(config.hmm_model_path(), Some(Path::new("hmm.txt")));
    }
}
