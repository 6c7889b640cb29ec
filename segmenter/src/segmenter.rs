//! 全文検索向けの分かち書きAPI
//!
//! [`Segmenter`] は辞書・ストップワード・HMMモデルを保持し、本文を索引用の
//! トークン列に、検索語をクエリ用のトークン列に変換します。構築後は不変で、
//! `&self` のメソッドは呼び出しごとに新しい [`Worker`] を使うため、
//! `Arc<Segmenter>` を任意の数のスレッドから共有できます。
use std::sync::Arc;

use crate::config::SegmenterConfig;
use crate::dictionary::DictionaryBuilder;
use crate::errors::Result;
use crate::filter::{self, StopWords};
use crate::hmm::HmmModel;
use crate::tokenizer::worker::Worker;
use crate::tokenizer::Tokenizer;

/// 分かち書きエンジン
///
/// # 例
///
/// ```
/// use glog_segmenter::{Dictionary, Segmenter, StopWords, Tokenizer};
///
/// let dict = Dictionary::from_reader("北京 100\n天安门 50\n广场 30".as_bytes())?;
/// let stop_words: StopWords = ["的"].into_iter().collect();
/// let segmenter = Segmenter::new(Tokenizer::new(dict), stop_words);
///
/// assert_eq!(segmenter.cut("北京天安门"), vec!["北京", "天安门"]);
/// assert_eq!(
///     segmenter.segment_text_for_index("北京的天安门广场。"),
///     "北京 天安门 广场"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Segmenter {
    tokenizer: Tokenizer,
    stop_words: Arc<StopWords>,
}

impl Segmenter {
    /// トークナイザーとストップワードから作成します。
    pub fn new(tokenizer: Tokenizer, stop_words: StopWords) -> Self {
        Self {
            tokenizer,
            stop_words: Arc::new(stop_words),
        }
    }

    /// 設定に従ってリソースを読み込み、エンジンを構築します。
    ///
    /// # エラー
    ///
    /// 辞書・ストップワード・HMMモデルのいずれかが読み込めない場合、
    /// またはHMMモデルの形式が不正な場合にエラーを返します。
    pub fn from_config(config: &SegmenterConfig) -> Result<Self> {
        log::info!("loading dictionary from {}", config.dict_path().display());
        let dict = DictionaryBuilder::new()
            .separator(config.separator())
            .build_from_path(config.dict_path())?;

        let stop_words = match config.stop_words_path() {
            Some(path) => {
                log::info!("loading stop words from {}", path.display());
                StopWords::from_path(path)?
            }
            None => StopWords::new(),
        };

        let mut tokenizer = Tokenizer::new(dict).hmm(config.use_hmm());
        if let Some(path) = config.hmm_model_path() {
            log::info!("loading HMM model from {}", path.display());
            tokenizer = tokenizer.with_hmm_model(HmmModel::from_path(path)?);
        }

        Ok(Self::new(tokenizer, stop_words))
    }

    /// トークナイザーへの参照を取得します。
    #[inline(always)]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// ストップワードへの参照を取得します。
    #[inline(always)]
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    fn tokenize(&self, text: &str) -> Worker {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        worker
    }

    /// テキストを分割します。
    ///
    /// 結果を連結すると入力と一致します。空白や句読点も1文字ずつのトークンとして
    /// 残ります。
    pub fn cut(&self, text: &str) -> Vec<String> {
        let worker = self.tokenize(text);
        worker
            .token_iter()
            .map(|t| t.surface().to_string())
            .collect()
    }

    /// 検索エンジン向けにテキストを分割します。
    ///
    /// [`Self::cut`] の各トークンの直前に、そのトークンに含まれる2文字および
    /// 3文字の辞書語を出現順に追加します。
    ///
    /// # 例
    ///
    /// ```
    /// use glog_segmenter::{Dictionary, Segmenter, StopWords, Tokenizer};
    ///
    /// let dict = Dictionary::from_reader(
    ///     "中华人民共和国 10\n中华 5\n华人 3\n人民 8\n共和 4\n共和国 6".as_bytes(),
    /// )?;
    /// let segmenter = Segmenter::new(Tokenizer::new(dict), StopWords::new());
    /// assert_eq!(
    ///     segmenter.cut_for_search("中华人民共和国"),
    ///     vec!["中华", "华人", "人民", "共和", "共和国", "中华人民共和国"]
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn cut_for_search(&self, text: &str) -> Vec<String> {
        let dict = self.tokenizer.dictionary();
        let worker = self.tokenize(text);
        let mut words = vec![];
        for token in worker.token_iter() {
            let surface = token.surface();
            let chars: Vec<(usize, char)> = surface.char_indices().collect();
            for n in [2, 3] {
                if chars.len() <= n {
                    continue;
                }
                for i in 0..=chars.len() - n {
                    let start = chars[i].0;
                    let end = chars.get(i + n).map_or(surface.len(), |&(b, _)| b);
                    let gram = &surface[start..end];
                    if dict.find(gram).is_some() {
                        words.push(gram.to_string());
                    }
                }
            }
            words.push(surface.to_string());
        }
        words
    }

    /// トークンから記号と空白を取り除き、空になったものとストップワードを除外します。
    pub fn trim<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        filter::trim(tokens, &self.stop_words)
    }

    /// 本文を索引用の空白区切りのトークン列に変換します。
    pub fn segment_text_for_index(&self, text: &str) -> String {
        self.trim(self.cut(text)).join(" ")
    }

    /// 検索語をクエリ用の空白区切りのトークン列に変換します。
    ///
    /// 索引用と同じ処理を行うため、索引と検索語のトークンは常に一致します。
    /// 結果が空文字列の場合、呼び出し側は絞り込みなしとして扱います。
    /// ブール検索式などへの整形は呼び出し側の責務です。
    pub fn segment_text_for_query(&self, text: &str) -> String {
        self.trim(self.cut(text)).join(" ")
    }
}
