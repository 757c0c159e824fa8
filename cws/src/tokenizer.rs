//! 最短経路探索に基づくセグメンター。
//!
//! このモジュールは、辞書に基づく単語分割のためのメインセグメンターを提供します。
//! 入力文の文字境界をノードとするラティスを構築し、ダイクストラ法で費用最小の
//! 経路を求めて単語列に分割します。
//!
//! # 主要な構造体
//!
//! - [`Segmenter`]: 辞書と上限設定を保持するセグメンター
//! - [`Worker`]: セグメンターのワーカー。実際の分割処理を行う
//!
//! # 例
//!
//! ```
//! use cws::{Dictionary, Limits, Segmenter};
//!
//! let dict = Dictionary::from_reader("中国 3\n人民 5\n中国人民 2\n".as_bytes(), &Limits::default())?;
//! let segmenter = Segmenter::new(dict);
//! let mut worker = segmenter.new_worker();
//!
//! worker.reset_sentence("中国人民");
//! worker.segment()?;
//!
//! for token in worker.token_iter() {
//!     println!("{}", token.surface());
//! }
//! # Ok::<(), cws::errors::CwsError>(())
//! ```
mod cost;
pub mod lattice;
pub mod solver;
pub mod worker;

use std::sync::Arc;

use crate::config::{Limits, DEFAULT_SEPARATOR};
use crate::dictionary::Dictionary;
use crate::errors::{CwsError, Result};
use crate::sentence::Sentence;
use crate::tokenizer::cost::LaplaceCost;
use crate::tokenizer::lattice::Lattice;
use crate::tokenizer::worker::Worker;

/// 単語分割を行うセグメンター。
///
/// 辞書データへの共有参照と上限設定を保持し、複数の[`Worker`]インスタンスを
/// 生成できます。辞書は読み取り専用のため、`Segmenter`のクローンは
/// 辞書を複製せずにスレッド間で共有できます。
///
/// # 例
///
/// ```
/// use std::sync::Arc;
/// use cws::{Dictionary, DictEntry, Segmenter};
///
/// let dict = Arc::new(Dictionary::from_entries([DictEntry::new("AB", 5)]));
/// let segmenter = Segmenter::from_shared_dictionary(dict).max_input_chars(16)?;
/// assert_eq!(segmenter.segment("AB")?, "AB");
/// # Ok::<(), cws::errors::CwsError>(())
/// ```
#[derive(Clone)]
pub struct Segmenter {
    dict: Arc<Dictionary>,
    limits: Limits,
    separator: String,
}

impl Segmenter {
    /// 新しいセグメンターを作成します。
    ///
    /// 辞書はセグメンターに所有権が移動します。複数のセグメンター間で辞書を共有する
    /// 必要がある場合は、[`Segmenter::from_shared_dictionary`]を使用してください。
    ///
    /// # 引数
    ///
    /// * `dict` - 分割に使用する辞書
    pub fn new(dict: Dictionary) -> Self {
        Self::from_shared_dictionary(Arc::new(dict))
    }

    /// 共有された辞書から新しいセグメンターを作成します。
    ///
    /// # 引数
    ///
    /// * `dict` - 共有される辞書への`Arc`参照
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self {
            dict,
            limits: Limits::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// 上限設定をまとめて指定します。
    ///
    /// # 引数
    ///
    /// * `limits` - 上限設定
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// 入力文字列の最大文字数を指定します。
    ///
    /// # エラー
    ///
    /// `n`が0の場合、[`CwsError`]が返されます。
    pub fn max_input_chars(mut self, n: usize) -> Result<Self> {
        self.limits = self.limits.max_input_chars(n)?;
        Ok(self)
    }

    /// [`Segmenter::segment`]で使用する区切り文字列を指定します。
    ///
    /// # エラー
    ///
    /// `separator`が空の場合、[`CwsError`]が返されます。
    pub fn separator<S>(mut self, separator: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(CwsError::invalid_argument(
                "separator",
                "must not be empty.",
            ));
        }
        self.separator = separator;
        Ok(self)
    }

    /// 辞書への参照を取得します。
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// 上限設定を取得します。
    #[inline(always)]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// 区切り文字列を取得します。
    #[inline(always)]
    pub fn separator_str(&self) -> &str {
        &self.separator
    }

    /// 新しいワーカーを作成します。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }

    /// 入力文字列を分割し、単語を区切り文字列で連結して返します。
    ///
    /// 1回限りの分割のための近道です。繰り返し分割する場合は[`Worker`]を
    /// 再利用してください。
    ///
    /// # エラー
    ///
    /// 入力文字列の文字数が上限を超える場合、[`CwsError`]が返されます。
    pub fn segment(&self, input: &str) -> Result<String> {
        let mut worker = self.new_worker();
        worker.reset_sentence(input);
        worker.segment()?;
        Ok(worker.join(&self.separator))
    }
}

/// 入力文からラティスを構築します。
///
/// まずすべての1文字を検索し、辞書にない文字の数だけ総単語数を増やした
/// 費用関数を決めてから、各エッジの費用を計算します。総単語数の増分は
/// この呼び出しの中だけで有効で、辞書には反映されません。
///
/// 複数文字の範囲は辞書の最長の単語の長さまで検索します。辞書の単語の長さは
/// 読み込み時に検査済みのため、頻度が正の単語はすべてエッジになります。
pub(crate) fn build_lattice(dict: &Dictionary, sent: &Sentence, lattice: &mut Lattice) {
    let len_char = sent.len_char();
    lattice.reset(len_char);
    if len_char == 0 {
        return;
    }

    let (total_freq, mut total_word_num) = dict.count_totals();

    let mut unigram_freqs = Vec::with_capacity(len_char);
    for i in 0..len_char {
        let freq = dict.lookup(sent.substr(i..i + 1));
        if freq == 0 {
            total_word_num += 1;
        }
        unigram_freqs.push(freq);
    }

    let cost = LaplaceCost::new(total_freq, total_word_num);
    let max_span = dict.max_word_len();

    for (i, &freq) in unigram_freqs.iter().enumerate() {
        lattice.insert_edge(i, i + 1, freq, cost.fee(freq));

        let span_end = len_char.min(i + max_span);
        for j in i + 2..=span_end {
            let freq = dict.lookup(sent.substr(i..j));
            if freq > 0 {
                lattice.insert_edge(i, j, freq, cost.fee(freq));
            }
        }
    }

    log::debug!(
        "[cws] Built a lattice with {} nodes and {} edges (total_word_num={})",
        lattice.num_nodes(),
        lattice.num_edges(),
        total_word_num,
    );
}
