//! エラー型の定義
//!
//! このモジュールは、cwsライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// cws専用のResult型
///
/// エラー型としてデフォルトで[`CwsError`]を使用します。
pub type Result<T, E = CwsError> = std::result::Result<T, E>;

/// cwsのエラー型
///
/// 1回の分割リクエストで発生し得るすべてのエラーを表現します。
/// エラーが返された場合、部分的な分割結果は存在しません。
#[derive(Debug, thiserror::Error)]
pub enum CwsError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 上限超過エラー
    ///
    /// 入力文字列、辞書の単語、または辞書の行が設定された上限を超えた場合に発生します。
    #[error("BoundsExceededError: {what}: {actual} exceeds the limit {limit}")]
    BoundsExceeded {
        /// 上限を超えた対象の名前
        what: &'static str,
        /// 上限値
        limit: usize,
        /// 実際の値
        actual: usize,
    },

    /// 辞書データソースが利用できないエラー
    ///
    /// 辞書ファイルを開けない場合に発生します。リクエスト全体にとって致命的です。
    #[error("The dictionary source '{}' is unavailable: {source}", .path.display())]
    DictionaryUnavailable {
        /// 辞書ファイルのパス
        path: PathBuf,
        /// 原因となったI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// UTF-8エンコーディングエラー
    ///
    /// [`std::str::Utf8Error`]のエラーバリアント。
    #[error(transparent)]
    Utf8(std::str::Utf8Error),

    /// 標準I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    StdIo(#[from] std::io::Error),
}

impl CwsError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// 上限超過エラーを生成します
    pub(crate) const fn bounds_exceeded(what: &'static str, limit: usize, actual: usize) -> Self {
        Self::BoundsExceeded {
            what,
            limit,
            actual,
        }
    }

    /// 辞書データソースが利用できないエラーを生成します
    ///
    /// # 引数
    ///
    /// * `path` - 辞書ファイルのパス
    /// * `source` - 原因となったI/Oエラー
    pub(crate) fn dictionary_unavailable<P>(path: P, source: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::DictionaryUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

impl From<std::str::Utf8Error> for CwsError {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::Utf8(error)
    }
}
