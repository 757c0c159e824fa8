//! # cws
//!
//! cwsは、辞書と最短経路探索に基づく中国語の単語分割（分かち書き）の実装です。
//!
//! ## 概要
//!
//! 入力文の文字境界をノード、単語候補をエッジとするラティスを構築し、
//! 各エッジに辞書の頻度から求めた費用を与えて、ダイクストラ法で費用最小の経路を求めます。
//! 費用はラプラス平滑化した出現確率の負の自然対数です。
//!
//! ## 主な機能
//!
//! - **辞書の読み込み**: `(単語, 頻度)`レコードのファイル・テキスト・リストからの構築
//! - **単語分割**: 最短経路による分割と、区切り文字列による連結
//! - **トークン情報**: 各単語の位置、頻度、費用、累積費用
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cws::{Dictionary, Limits, Segmenter};
//!
//! let records = "中国 3\n人民 5\n中国人民 2\n万岁 4\n";
//! let dict = Dictionary::from_reader(records.as_bytes(), &Limits::default())?;
//!
//! let segmenter = Segmenter::new(dict);
//! let mut worker = segmenter.new_worker();
//!
//! worker.reset_sentence("中国人民万岁");
//! worker.segment()?;
//! assert_eq!(worker.num_tokens(), 2);
//!
//! let t0 = worker.token(0);
//! assert_eq!(t0.surface(), "中国人民");
//! assert_eq!(t0.range_char(), 0..4);
//! assert_eq!(t0.range_byte(), 0..12);
//!
//! let t1 = worker.token(1);
//! assert_eq!(t1.surface(), "万岁");
//! assert_eq!(t1.range_char(), 4..6);
//!
//! assert_eq!(worker.join("/"), "中国人民/万岁");
//! # Ok(())
//! # }
//! ```

/// 上限設定
pub mod config;

/// 辞書データ構造と読み込み
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 文の内部表現
mod sentence;

/// トークン型の定義
pub mod token;

/// セグメンターの実装
pub mod tokenizer;


// Re-exports
pub use config::Limits;
pub use dictionary::{DictEntry, Dictionary, DictionarySource, FileSource};
pub use tokenizer::Segmenter;

use errors::Result;
use tokenizer::lattice::Lattice;
use tokenizer::solver::ShortestPath;
use tokenizer::worker::reconstruct;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// データソースから既定の上限設定で辞書を構築します。
///
/// # 引数
///
/// * `source` - 辞書データソース
///
/// # エラー
///
/// ソースが利用できない場合、レコードが不正な場合、または上限を超えた場合に
/// [`CwsError`](errors::CwsError)を返します。
///
/// # 例
///
/// ```
/// let dict = cws::load_dictionary("中国 3\n人民 5\n")?;
/// assert_eq!(dict.num_entries(), 2);
/// # Ok::<(), cws::errors::CwsError>(())
/// ```
pub fn load_dictionary<S>(source: &S) -> Result<Dictionary>
where
    S: DictionarySource + ?Sized,
{
    Dictionary::from_source(source, &Limits::default())
}

/// 入力文字列を分割し、単語を`/`で連結して返します。
///
/// 空の入力文字列は空の結果になります。辞書は借用されるだけで複製されません。
/// 作業領域は呼び出しごとに確保されるため、繰り返し分割する場合は[`Segmenter`]の
/// ワーカーを再利用してください。
///
/// # エラー
///
/// 入力文字列の文字数が既定の上限を超える場合、[`CwsError`](errors::CwsError)を返します。
///
/// # 例
///
/// ```
/// use cws::{DictEntry, Dictionary};
///
/// let dict = Dictionary::from_entries([
///     DictEntry::new("AB", 5),
///     DictEntry::new("A", 3),
///     DictEntry::new("B", 2),
/// ]);
/// assert_eq!(cws::segment(&dict, "AB")?, "AB");
/// assert_eq!(cws::segment(&dict, "")?, "");
/// # Ok::<(), cws::errors::CwsError>(())
/// ```
pub fn segment(dict: &Dictionary, input: &str) -> Result<String> {
    let mut sent = sentence::Sentence::new();
    sent.set_sentence(input);
    Limits::default().check_input(sent.len_char())?;

    let mut lattice = Lattice::default();
    let mut path = ShortestPath::default();
    let mut marks = vec![];
    let mut edges = vec![];
    tokenizer::build_lattice(dict, &sent, &mut lattice);
    path.solve(&lattice);
    reconstruct(&lattice, &path, &mut marks, &mut edges);

    let words: Vec<&str> = edges.iter().map(|e| sent.substr(e.start..e.end)).collect();
    Ok(words.join(config::DEFAULT_SEPARATOR))
}
