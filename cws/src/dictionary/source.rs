//! 辞書データソース
//!
//! 辞書の裏付けとなるデータを抽象化します。各走査は常に先頭から始まり、
//! 走査間で読み取り位置などの状態を共有しません。

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::Limits;
use crate::dictionary::DictEntry;
use crate::errors::{CwsError, Result};

/// `(単語, 頻度)`レコードを供給するデータソース。
///
/// [`Dictionary::from_source`](crate::Dictionary::from_source)から利用されます。
/// 実装は何度でも先頭から独立に走査できなければなりません。
pub trait DictionarySource {
    /// ソースを先頭から走査し、すべてのレコードをソース順に返します。
    ///
    /// # 引数
    ///
    /// * `limits` - 辞書レコードの上限
    ///
    /// # エラー
    ///
    /// ソースが利用できない場合、レコードが不正な場合、または上限を超えた場合に
    /// [`CwsError`]を返します。
    fn scan(&self, limits: &Limits) -> Result<Vec<DictEntry>>;
}

/// ファイル上の辞書データ。
///
/// 走査のたびにファイルを開き直し、走査の終了時に閉じます。
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// 新しいインスタンスを作成します。
    pub fn new<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 辞書ファイルのパスを取得します。
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for FileSource {
    fn scan(&self, limits: &Limits) -> Result<Vec<DictEntry>> {
        let file = File::open(&self.path)
            .map_err(|e| CwsError::dictionary_unavailable(&self.path, e))?;
        if file.metadata().is_ok_and(|m| m.is_dir()) {
            return Err(CwsError::dictionary_unavailable(
                &self.path,
                std::io::Error::other("the path is a directory, but a file was expected"),
            ));
        }
        parse_records(BufReader::new(file), "dict", limits)
    }
}

impl DictionarySource for str {
    fn scan(&self, limits: &Limits) -> Result<Vec<DictEntry>> {
        parse_records(self.as_bytes(), "dict", limits)
    }
}

impl DictionarySource for [DictEntry] {
    fn scan(&self, limits: &Limits) -> Result<Vec<DictEntry>> {
        for e in self {
            check_word(e.word(), limits)?;
        }
        Ok(self.to_vec())
    }
}

impl DictionarySource for Vec<DictEntry> {
    fn scan(&self, limits: &Limits) -> Result<Vec<DictEntry>> {
        self.as_slice().scan(limits)
    }
}

fn check_word(word: &str, limits: &Limits) -> Result<()> {
    let len_char = word.chars().count();
    if len_char > limits.word_chars() {
        return Err(CwsError::bounds_exceeded(
            "dictionary word characters",
            limits.word_chars(),
            len_char,
        ));
    }
    Ok(())
}

/// 行単位の辞書レコードを読み込みます。
///
/// 空行は読み飛ばします。各行の1列目を単語、2列目を頻度として解釈し、
/// 3列目以降は無視します。
///
/// # 引数
///
/// * `rdr` - 辞書データのリーダー
/// * `name` - エラーメッセージに使用するソースの名前
/// * `limits` - 辞書レコードの上限
pub(crate) fn parse_records<R>(mut rdr: R, name: &'static str, limits: &Limits) -> Result<Vec<DictEntry>>
where
    R: BufRead,
{
    let mut entries = vec![];
    let mut buf = vec![];
    let mut lineno = 0;
    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        if line.len() > limits.line_len() {
            return Err(CwsError::bounds_exceeded(
                "dictionary line bytes",
                limits.line_len(),
                line.len(),
            ));
        }

        let line = std::str::from_utf8(line)?;
        let mut fields = line.split_ascii_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        check_word(word, limits)?;

        let freq = fields.next().ok_or_else(|| {
            CwsError::invalid_format(name, format!("line {lineno}: a frequency is missing, {line:?}"))
        })?;
        let freq = freq.parse::<u64>().map_err(|e| {
            CwsError::invalid_format(name, format!("line {lineno}: invalid frequency {freq:?}, {e}"))
        })?;

        entries.push(DictEntry::new(word, freq));
    }
    Ok(entries)
}
