//! 入力テキストの内部表現を提供するモジュール
//!
//! 入力文字列を文字単位に分割し、文字位置からバイト位置へのマッピングを保持します。
//! ラティスの境界ノードは文字位置で表現されるため、部分文字列の取り出しはすべて
//! このマッピングを経由します。

use std::ops::Range;

/// 入力テキストの内部表現を保持する構造体
///
/// # フィールド
///
/// * `input` - 元の入力文字列
/// * `chars` - 入力文字列を文字単位に分割した配列
/// * `c2b` - 文字位置からバイト位置へのマッピング配列（長さは文字数+1）
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    chars: Vec<char>,
    c2b: Vec<usize>,
}

impl Sentence {
    /// 新しい空の `Sentence` インスタンスを生成します
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.chars.clear();
        self.c2b.clear();
    }

    /// 入力文字列を設定し、文字配列とバイト位置マッピングを構築します
    ///
    /// 既存の内部状態はクリアされます。
    ///
    /// # 引数
    ///
    /// * `input` - 設定する入力文字列
    pub fn set_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
        self.compute_basic();
    }

    fn compute_basic(&mut self) {
        for (bi, ch) in self.input.char_indices() {
            self.chars.push(ch);
            self.c2b.push(bi);
        }
        self.c2b.push(self.input.len());
    }

    /// 元の入力文字列への参照を返します
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// 文字数を返します
    ///
    /// 入力文字列の文字数（バイト数ではない）を返します。
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// 指定された文字位置に対応するバイト位置を返します
    ///
    /// # 引数
    ///
    /// * `pos_char` - 文字位置（0始まり、文字数まで）
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// 文字単位の範囲に対応する部分文字列を返します
    ///
    /// # 引数
    ///
    /// * `range_char` - 文字単位の範囲
    #[inline(always)]
    pub fn substr(&self, range_char: Range<usize>) -> &str {
        &self.input[self.byte_position(range_char.start)..self.byte_position(range_char.end)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence() {
        let mut sent = Sentence::new();
        sent.set_sentence("自然");
        assert_eq!(sent.len_char(), 2);
        assert_eq!(sent.byte_position(0), 0);
        assert_eq!(sent.byte_position(1), 3);
        assert_eq!(sent.byte_position(2), 6);
        assert_eq!(sent.substr(1..2), "然");
    }

    #[test]
    fn test_sentence_mixed_width() {
        let mut sent = Sentence::new();
        sent.set_sentence("a中b");
        assert_eq!(sent.len_char(), 3);
        assert_eq!(sent.substr(0..2), "a中");
        assert_eq!(sent.substr(2..3), "b");
    }

    #[test]
    fn test_empty_sentence() {
        let mut sent = Sentence::new();
        sent.set_sentence("");
        assert_eq!(sent.len_char(), 0);
        assert_eq!(sent.byte_position(0), 0);
        assert_eq!(sent.substr(0..0), "");
    }
}
