//! 分割のための辞書モジュール。
//!
//! このモジュールは、`(単語, 頻度)`の組からなる辞書データを読み込み、
//! 頻度の検索と集計値（総頻度・総単語数）を提供します。
//!
//! # 辞書の読み込み方法
//!
//! 辞書は[`DictionarySource`]から構築します:
//!
//! - [`FileSource`]: ファイルパスから読み込む
//! - `str`: メモリ上のテキストから読み込む
//! - `[DictEntry]`: エントリのリストから直接構築する
//!
//! [`Dictionary::from_path`]と[`Dictionary::from_reader`]は、それぞれの近道です。
//!
//! # レコードの形式
//!
//! 1行に1レコードで、単語と頻度を空白で区切ります。3列目以降は無視されます。
//!
//! ```text
//! 中国 3
//! 人民 5
//! 中国人民 2
//! ```
pub mod source;

use std::io::{BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;

use crate::config::Limits;
use crate::errors::Result;

pub use crate::dictionary::source::{DictionarySource, FileSource};

/// 辞書のエントリ。
///
/// 単語とその頻度（学習コーパス中の出現回数）の組です。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DictEntry {
    word: String,
    freq: u64,
}

impl DictEntry {
    /// 新しいエントリを作成します。
    ///
    /// # 引数
    ///
    /// * `word` - 単語
    /// * `freq` - 頻度
    pub fn new<S>(word: S, freq: u64) -> Self
    where
        S: Into<String>,
    {
        Self {
            word: word.into(),
            freq,
        }
    }

    /// 単語を取得します。
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 頻度を取得します。
    #[inline(always)]
    pub const fn freq(&self) -> u64 {
        self.freq
    }
}

impl<S> From<(S, u64)> for DictEntry
where
    S: Into<String>,
{
    fn from((word, freq): (S, u64)) -> Self {
        Self::new(word, freq)
    }
}

/// 分割のための読み取り専用辞書。
///
/// エントリをソース順に保持し、単語から頻度への索引と集計値を構築時に計算します。
/// 構築後は変更されないため、[`std::sync::Arc`]で複数の
/// [`Segmenter`](crate::Segmenter)間で共有できます。
///
/// 同じ単語が複数回現れる場合、検索は最初に定義された頻度を返します。
/// 集計値は重複を含むすべてのエントリから計算されます。
///
/// # 例
///
/// ```
/// use cws::{Dictionary, Limits};
///
/// let dict = Dictionary::from_reader("中国 3\n人民 5\n".as_bytes(), &Limits::default())?;
/// assert_eq!(dict.lookup("人民"), 5);
/// assert_eq!(dict.lookup("中国人"), 0);
/// assert_eq!(dict.count_totals(), (8, 2));
/// # Ok::<(), cws::errors::CwsError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    index: HashMap<String, usize>,
    total_freq: u64,
    total_word_num: u64,
    max_word_len: usize,
}

impl Dictionary {
    /// エントリのリストから辞書を構築します。
    ///
    /// 上限の検査は行いません。検査が必要な場合は[`Dictionary::from_source`]を使用してください。
    ///
    /// # 引数
    ///
    /// * `entries` - 辞書エントリ
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictEntry>,
    {
        let entries: Vec<DictEntry> = entries.into_iter().collect();

        let mut index = HashMap::with_capacity(entries.len());
        let mut total_freq = 0u64;
        let mut max_word_len = 0;
        for (i, e) in entries.iter().enumerate() {
            total_freq = total_freq.saturating_add(e.freq);
            max_word_len = max_word_len.max(e.word.chars().count());
            if index.contains_key(e.word.as_str()) {
                log::debug!("[cws] Duplicate entry {:?} is shadowed by the first one", e.word);
                continue;
            }
            index.insert(e.word.clone(), i);
        }
        let total_word_num = entries.len() as u64;

        if entries.is_empty() {
            log::warn!("[cws] The dictionary has no entries");
        }
        log::debug!(
            "[cws] Loaded {} entries (distinct={}, total_freq={}, max_word_len={})",
            total_word_num,
            index.len(),
            total_freq,
            max_word_len,
        );

        Self {
            entries,
            index,
            total_freq,
            total_word_num,
            max_word_len,
        }
    }

    /// データソースを先頭から走査して辞書を構築します。
    ///
    /// # 引数
    ///
    /// * `source` - 辞書データソース
    /// * `limits` - 辞書レコードの上限
    ///
    /// # エラー
    ///
    /// ソースが利用できない場合、レコードが不正な場合、または上限を超えた場合に
    /// [`CwsError`](crate::errors::CwsError)を返します。
    pub fn from_source<S>(source: &S, limits: &Limits) -> Result<Self>
    where
        S: DictionarySource + ?Sized,
    {
        let entries = source.scan(limits)?;
        Ok(Self::from_entries(entries))
    }

    /// 辞書ファイルから辞書を構築します。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合は
    /// [`CwsError::DictionaryUnavailable`](crate::errors::CwsError::DictionaryUnavailable)
    /// を返します。
    pub fn from_path<P>(path: P, limits: &Limits) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::from_source(&FileSource::new(path.as_ref()), limits)
    }

    /// リーダーから辞書を構築します。
    ///
    /// リーダーは一度だけ最後まで読み込まれます。
    pub fn from_reader<R>(rdr: R, limits: &Limits) -> Result<Self>
    where
        R: Read,
    {
        let entries = source::parse_records(BufReader::new(rdr), "dict", limits)?;
        Ok(Self::from_entries(entries))
    }

    /// すべてのエントリの総頻度と総数を返します。
    ///
    /// # 戻り値
    ///
    /// `(総頻度, 総単語数)`の組
    #[inline(always)]
    pub const fn count_totals(&self) -> (u64, u64) {
        (self.total_freq, self.total_word_num)
    }

    /// 単語の頻度を検索します。
    ///
    /// # 戻り値
    ///
    /// 単語が辞書にある場合は最初に定義された頻度、ない場合は`0`
    #[inline]
    pub fn lookup(&self, word: &str) -> u64 {
        self.index
            .get(word)
            .map_or(0, |&i| self.entries[i].freq)
    }

    /// 単語が辞書に含まれるかどうかを判定します。
    ///
    /// 頻度0のエントリも含まれるとみなします。
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// エントリ数（重複を含む）を返します。
    #[inline(always)]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// エントリが1つもないかどうかを判定します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 最長の単語の文字数を返します。
    #[inline(always)]
    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// エントリをソース順に返すイテレータを作成します。
    pub fn entries(&self) -> impl Iterator<Item = &DictEntry> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_totals() {
        let dict = Dictionary::from_entries([
            DictEntry::new("自然", 4),
            DictEntry::new("言語", 6),
            DictEntry::new("自", 0),
        ]);
        assert_eq!(dict.count_totals(), (10, 3));
        assert_eq!(dict.lookup("言語"), 6);
        assert_eq!(dict.lookup("自"), 0);
        assert_eq!(dict.lookup("処理"), 0);
        assert!(dict.contains("自"));
        assert!(!dict.contains("処理"));
        assert_eq!(dict.max_word_len(), 2);
    }

    #[test]
    fn test_duplicate_returns_first() {
        let dict = Dictionary::from_entries([DictEntry::from(("自然", 4)), DictEntry::from(("自然", 9))]);
        assert_eq!(dict.lookup("自然"), 4);
        assert_eq!(dict.count_totals(), (13, 2));
        assert_eq!(dict.num_entries(), 2);
    }

    #[test]
    fn test_empty() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert_eq!(dict.count_totals(), (0, 0));
        assert_eq!(dict.max_word_len(), 0);
    }
}
