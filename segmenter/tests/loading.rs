//! リソースの読み込みに関するテスト
//!
//! 設定ファイルに記載されたパスから辞書・ストップワード・HMMモデルを読み込み、
//! 読み込みに失敗した場合のエラーを検証します。

use std::fs;
use std::path::PathBuf;

use tempfile::{tempdir, TempDir};

use glog_segmenter::{Segmenter, SegmenterConfig, SegmenterError};

const HMM_MODEL: &str = "\
-0.26268660809250016 -3.14e+100 -3.14e+100 -1.4652633398537678
-3.14e+100 -0.510825623765990 -0.916290731874155 -3.14e+100
-0.5897149736854513 -3.14e+100 -3.14e+100 -0.8085250474669937
-3.14e+100 -0.33344856811948514 -1.2603623820268226 -3.14e+100
-0.7211965654669841 -3.14e+100 -3.14e+100 -0.6658631448798212
小:-1.0,明:-10.0,的:-10.0
明:-1.0,的:-1.0,小:-10.0
小:-10.0,明:-10.0,的:-10.0
小:-10.0,明:-10.0,的:-10.0
";

struct TestEnv {
    _temp_dir: TempDir,
    dict_path: PathBuf,
    stop_words_path: PathBuf,
    hmm_model_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = tempdir().unwrap();
        let dict_path = temp_dir.path().join("dict.txt");
        let stop_words_path = temp_dir.path().join("stop_words.txt");
        let hmm_model_path = temp_dir.path().join("hmm_model.utf8");
        fs::write(&dict_path, "北京 100 ns\n天安门 50 ns\n的 200 uj\n").unwrap();
        fs::write(&stop_words_path, "的\n").unwrap();
        fs::write(&hmm_model_path, HMM_MODEL).unwrap();
        Self {
            _temp_dir: temp_dir,
            dict_path,
            stop_words_path,
            hmm_model_path,
        }
    }

    fn config(&self) -> SegmenterConfig {
        SegmenterConfig::new(&self.dict_path)
            .stop_words(Some(&self.stop_words_path))
            .hmm_model(Some(&self.hmm_model_path))
    }
}

#[test]
fn test_from_config() {
    let env = TestEnv::new();
    let segmenter = Segmenter::from_config(&env.config()).unwrap();
    assert_eq!(segmenter.tokenizer().dictionary().num_words(), 3);
    assert_eq!(segmenter.stop_words().len(), 1);
    assert_eq!(
        segmenter.segment_text_for_index("小明的北京天安门"),
        "小明 北京 天安门"
    );
    // 的 is a dictionary word and stays out of the unknown run.
    assert_eq!(
        segmenter.cut("小明的北京"),
        vec!["小明", "的", "北京"]
    );
}

#[test]
fn test_from_config_without_hmm() {
    let env = TestEnv::new();
    let segmenter = Segmenter::from_config(&env.config().hmm(false)).unwrap();
    assert_eq!(
        segmenter.segment_text_for_index("小明的北京天安门"),
        "小 明 北京 天安门"
    );

    let config = SegmenterConfig::new(&env.dict_path);
    let segmenter = Segmenter::from_config(&config).unwrap();
    assert!(segmenter.tokenizer().hmm_model().is_none());
    assert!(segmenter.stop_words().is_empty());
}

#[test]
fn test_custom_separator() {
    let env = TestEnv::new();
    fs::write(&env.dict_path, "北京\t100\tns\n天安门\t50\n").unwrap();
    let config = env.config().dict_separator("\t");
    let segmenter = Segmenter::from_config(&config).unwrap();
    let dict = segmenter.tokenizer().dictionary();
    assert_eq!(dict.find("北京").unwrap().pos(), Some("ns"));
    assert_eq!(dict.find("天安门").unwrap().freq(), 50.0);
}

#[test]
fn test_missing_dictionary() {
    let env = TestEnv::new();
    let config = SegmenterConfig::new(env.dict_path.with_extension("missing"));
    assert!(matches!(
        Segmenter::from_config(&config),
        Err(SegmenterError::StdIo(_))
    ));
}

#[test]
fn test_dictionary_is_directory() {
    let env = TestEnv::new();
    let dir = env.dict_path.parent().unwrap().to_path_buf();
    assert!(matches!(
        Segmenter::from_config(&SegmenterConfig::new(dir)),
        Err(SegmenterError::PathIsDirectory(_))
    ));
}

#[test]
fn test_missing_stop_words() {
    let env = TestEnv::new();
    let config = env
        .config()
        .stop_words(Some(env.stop_words_path.with_extension("missing")));
    assert!(matches!(
        Segmenter::from_config(&config),
        Err(SegmenterError::StdIo(_))
    ));
}

#[test]
fn test_corrupt_hmm_model() {
    let env = TestEnv::new();
    fs::write(&env.hmm_model_path, "-0.26 -3.14e+100 -1.46\n").unwrap();
    assert!(matches!(
        Segmenter::from_config(&env.config()),
        Err(SegmenterError::InvalidFormat(_))
    ));
}
