//! トークンの結果コンテナ
//!
//! このモジュールは、分割の結果として得られる単語を表現する型を提供します。
//! トークンは[`Worker`]が保持する分割結果への軽量な参照で、表層形、位置情報、
//! 頻度および費用へのアクセスを提供します。

use std::ops::Range;

use crate::tokenizer::lattice::Edge;
use crate::tokenizer::worker::Worker;

/// 分割の結果トークン
///
/// このトークンは[`Worker`]への軽量な参照であり、実際のデータは
/// Workerが保持しています。トークンはWorkerが生存している間のみ有効です。
pub struct Token<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Token<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    #[inline(always)]
    fn edge(&self) -> &'w Edge {
        &self.worker.top_edges[self.index]
    }

    /// トークンの文字単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        let edge = self.edge();
        edge.start..edge.end
    }

    /// トークンのバイト単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        let sent = &self.worker.sent;
        let edge = self.edge();
        sent.byte_position(edge.start)..sent.byte_position(edge.end)
    }

    /// トークンの表層形（元のテキスト中の文字列）を取得します。
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        let sent = &self.worker.sent;
        &sent.raw()[self.range_byte()]
    }

    /// 辞書上の頻度を取得します。
    ///
    /// # 戻り値
    ///
    /// 辞書にない単語（未知の1文字）の場合は`0`
    #[inline(always)]
    pub fn freq(&self) -> u64 {
        self.edge().freq
    }

    /// トークンの費用を取得します。
    ///
    /// 値が低いほど出現しやすい単語です。
    #[inline(always)]
    pub fn fee(&self) -> f64 {
        self.edge().fee
    }

    /// 文頭からこのトークンの終端までの累積費用を取得します。
    #[inline(always)]
    pub fn total_cost(&self) -> f64 {
        self.worker.path.distance(self.edge().end)
    }

    /// このトークンビューを所有型の[`TokenBuf`]に変換します。
    pub fn to_buf(&self) -> TokenBuf {
        TokenBuf {
            surface: self.surface().to_string(),
            range_char: self.range_char(),
            range_byte: self.range_byte(),
            freq: self.freq(),
            fee: self.fee(),
            total_cost: self.total_cost(),
        }
    }
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("surface", &self.surface())
            .field("range_char", &self.range_char())
            .field("range_byte", &self.range_byte())
            .field("freq", &self.freq())
            .field("fee", &self.fee())
            .field("total_cost", &self.total_cost())
            .finish()
    }
}

/// トークンのイテレータ
///
/// 前方および後方からの走査をサポートしています（[`DoubleEndedIterator`]を実装）。
pub struct TokenIter<'w> {
    worker: &'w Worker,
    front: usize,
    back: usize,
}

impl<'w> TokenIter<'w> {
    #[inline(always)]
    pub(crate) fn new(worker: &'w Worker) -> Self {
        let num_tokens = worker.num_tokens();
        Self {
            worker,
            front: 0,
            back: num_tokens,
        }
    }
}

impl<'w> Iterator for TokenIter<'w> {
    type Item = Token<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let t = self.worker.token(self.front);
            self.front += 1;
            Some(t)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'w> DoubleEndedIterator for TokenIter<'w> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            let t = self.worker.token(self.back);
            Some(t)
        } else {
            None
        }
    }
}

impl ExactSizeIterator for TokenIter<'_> {}

/// 所有型のトークン
///
/// [`Token`]の所有型版です。分割結果を保存したり、スレッド間で送信する際に有用です。
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBuf {
    /// トークンの表層形
    pub surface: String,

    /// トークンの文字単位の位置範囲
    pub range_char: Range<usize>,

    /// トークンのバイト単位の位置範囲
    pub range_byte: Range<usize>,

    /// 辞書上の頻度
    pub freq: u64,

    /// トークンの費用
    pub fee: f64,

    /// 文頭からこのトークンの終端までの累積費用
    pub total_cost: f64,
}

impl<'w> From<Token<'w>> for TokenBuf {
    fn from(token: Token<'w>) -> Self {
        token.to_buf()
    }
}

#[cfg(test)]
mod tests {
    use crate::dictionary::*;
    use crate::tokenizer::*;

    #[test]
    fn test_iter() {
        let dict = Dictionary::from_entries([
            DictEntry::new("自然", 1),
            DictEntry::new("言語", 4),
            DictEntry::new("処理", 3),
            DictEntry::new("自然言語", 6),
            DictEntry::new("言語処理", 5),
        ]);

        let segmenter = Segmenter::new(dict);
        let mut worker = segmenter.new_worker();
        worker.reset_sentence("自然言語処理");
        worker.segment().unwrap();
        assert_eq!(worker.num_tokens(), 2);

        let mut it = worker.token_iter();
        assert_eq!(it.len(), 2);
        for i in 0..worker.num_tokens() {
            let lhs = worker.token(i);
            let rhs = it.next().unwrap();
            assert_eq!(lhs.surface(), rhs.surface());
        }
        assert!(it.next().is_none());

        let rev: Vec<_> = worker.token_iter().rev().map(|t| t.surface()).collect();
        assert_eq!(rev, vec!["処理", "自然言語"]);
    }

    #[test]
    fn test_token_fields() {
        let dict = Dictionary::from_entries([
            DictEntry::new("中国", 3),
            DictEntry::new("人", 2),
        ]);

        let segmenter = Segmenter::new(dict);
        let mut worker = segmenter.new_worker();
        worker.reset_sentence("中国人");
        worker.segment().unwrap();
        assert_eq!(worker.num_tokens(), 2);

        let t = worker.token(0).to_buf();
        assert_eq!(t.surface, "中国");
        assert_eq!(t.range_char, 0..2);
        assert_eq!(t.range_byte, 0..6);
        assert_eq!(t.freq, 3);

        let t = worker.token(1);
        assert_eq!(t.surface(), "人");
        assert_eq!(t.range_char(), 2..3);
        assert_eq!(t.range_byte(), 6..9);
        assert_eq!(t.freq(), 2);
        assert_eq!(t.total_cost(), worker.total_cost());
        assert!(t.total_cost() > worker.token(0).total_cost());
    }
}
