//! 最短経路探索に基づくトークナイザー。
//!
//! 入力文をブロック（漢字・英数字の連続とそれ以外の1文字）に分け、
//! 各ブロックについて辞書語のDAGを構築し、距離の総和が最小となる経路を
//! 選びます。HMMモデルが設定されていれば、辞書で分割できなかった
//! 1文字の漢字の連続をHMMで再分割します。
//!
//! # 主要な構造体
//!
//! - [`Tokenizer`]: 辞書とHMMモデルを共有するトークナイザー
//! - [`Worker`]: 実際の解析処理を行う、スレッドごとのワーカー
//!
//! # 例
//!
//! ```
//! use glog_segmenter::{Dictionary, Tokenizer};
//!
//! let dict = Dictionary::from_reader("自然 10\n语言 8\n处理 6".as_bytes())?;
//! let tokenizer = Tokenizer::new(dict);
//! let mut worker = tokenizer.new_worker();
//!
//! worker.reset_sentence("自然语言处理");
//! worker.tokenize();
//!
//! for i in 0..worker.num_tokens() {
//!     let token = worker.token(i);
//!     println!("{}", token.surface());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub(crate) mod dag;
pub(crate) mod route;
pub mod worker;

use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::hmm::HmmModel;
use crate::tokenizer::worker::Worker;

/// 分かち書きを行うトークナイザー。
///
/// 辞書とHMMモデルは `Arc` で共有され、`Tokenizer` の複製は安価です。
/// 解析そのものは [`Tokenizer::new_worker`] で作成した [`Worker`] が行います。
#[derive(Clone)]
pub struct Tokenizer {
    dict: Arc<Dictionary>,
    hmm: Option<Arc<HmmModel>>,
    use_hmm: bool,
}

impl Tokenizer {
    /// 新しいトークナイザーを作成します。
    ///
    /// 辞書の所有権はトークナイザーに移動します。複数のトークナイザー間で辞書を
    /// 共有する場合は [`Tokenizer::from_shared_dictionary`] を使用してください。
    pub fn new(dict: Dictionary) -> Self {
        Self::from_shared_dictionary(Arc::new(dict))
    }

    /// 共有された辞書から新しいトークナイザーを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::sync::Arc;
    /// use glog_segmenter::{Dictionary, Tokenizer};
    ///
    /// let dict = Arc::new(Dictionary::from_reader("北京 10".as_bytes())?);
    /// let tokenizer1 = Tokenizer::from_shared_dictionary(dict.clone());
    /// let tokenizer2 = Tokenizer::from_shared_dictionary(dict);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self {
            dict,
            hmm: None,
            use_hmm: true,
        }
    }

    /// 未知語認識に使うHMMモデルを設定します。
    pub fn with_hmm_model(self, model: HmmModel) -> Self {
        self.with_shared_hmm_model(Arc::new(model))
    }

    /// 共有されたHMMモデルを設定します。
    pub fn with_shared_hmm_model(mut self, model: Arc<HmmModel>) -> Self {
        self.hmm = Some(model);
        self
    }

    /// HMMによる未知語認識を行うかどうかを指定します。
    ///
    /// モデルが設定されていない場合、この指定は効果を持ちません。
    ///
    /// # 引数
    ///
    /// * `yes` - HMMを使用する場合は `true`（デフォルト）
    pub fn hmm(mut self, yes: bool) -> Self {
        self.use_hmm = yes;
        self
    }

    /// 辞書への参照を取得します。
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// HMMが有効であれば、そのモデルへの参照を取得します。
    #[inline(always)]
    pub fn hmm_model(&self) -> Option<&HmmModel> {
        if self.use_hmm {
            self.hmm.as_deref()
        } else {
            None
        }
    }

    /// 新しいワーカーを作成します。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }
}
