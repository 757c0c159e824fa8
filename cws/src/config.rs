//! 入力と辞書の上限設定
//!
//! 既定値は固定長バッファを前提とした従来の実装の定数に合わせています。

use crate::errors::{CwsError, Result};

/// 入力文字列の最大文字数の既定値。
pub const DEFAULT_MAX_INPUT_CHARS: usize = 100;

/// 辞書の単語1語の最大文字数の既定値。
pub const DEFAULT_MAX_WORD_CHARS: usize = 10;

/// 辞書1行の最大バイト数（改行を除く）の既定値。
pub const DEFAULT_MAX_LINE_LEN: usize = 48;

/// 分割結果の既定の区切り文字列。
pub const DEFAULT_SEPARATOR: &str = "/";

/// 入力文字列と辞書レコードに対する上限。
///
/// 上限を超えた入力は切り詰められず、[`CwsError::BoundsExceeded`]として報告されます。
///
/// # 例
///
/// ```
/// use cws::Limits;
///
/// let limits = Limits::default().max_input_chars(200)?.max_line_len(256)?;
/// assert_eq!(limits.input_chars(), 200);
/// assert_eq!(limits.word_chars(), 10);
/// # Ok::<(), cws::errors::CwsError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    max_input_chars: usize,
    max_word_chars: usize,
    max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            max_word_chars: DEFAULT_MAX_WORD_CHARS,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl Limits {
    /// 入力文字列の最大文字数を指定します。
    ///
    /// # エラー
    ///
    /// `n`が0の場合、[`CwsError`]が返されます。
    pub fn max_input_chars(mut self, n: usize) -> Result<Self> {
        self.max_input_chars = Self::nonzero("max_input_chars", n)?;
        Ok(self)
    }

    /// 辞書の単語1語の最大文字数を指定します。
    ///
    /// # エラー
    ///
    /// `n`が0の場合、[`CwsError`]が返されます。
    pub fn max_word_chars(mut self, n: usize) -> Result<Self> {
        self.max_word_chars = Self::nonzero("max_word_chars", n)?;
        Ok(self)
    }

    /// 辞書1行の最大バイト数を指定します。
    ///
    /// # エラー
    ///
    /// `n`が0の場合、[`CwsError`]が返されます。
    pub fn max_line_len(mut self, n: usize) -> Result<Self> {
        self.max_line_len = Self::nonzero("max_line_len", n)?;
        Ok(self)
    }

    /// 入力文字列の最大文字数。
    #[inline(always)]
    pub const fn input_chars(&self) -> usize {
        self.max_input_chars
    }

    /// 辞書の単語1語の最大文字数。
    #[inline(always)]
    pub const fn word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// 辞書1行の最大バイト数。
    #[inline(always)]
    pub const fn line_len(&self) -> usize {
        self.max_line_len
    }

    fn nonzero(arg: &'static str, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(CwsError::invalid_argument(arg, "must be greater than zero."));
        }
        Ok(n)
    }

    pub(crate) fn check_input(&self, len_char: usize) -> Result<()> {
        if len_char > self.max_input_chars {
            return Err(CwsError::bounds_exceeded(
                "input characters",
                self.max_input_chars,
                len_char,
            ));
        }
        Ok(())
    }
}
