//! 単語の「費用」の計算。
//!
//! 費用は、辞書における単語の出現確率の負の自然対数です。確率の推定には
//! ラプラスのAdd-one平滑化を用います。
//!
//! ```text
//! fee = ln(total_freq + total_word_num) - ln(1 + freq)
//! ```
//!
//! 分子と分母の対数は同じ関数で計算します。`1 + freq`が分母と等しいとき、
//! 費用はちょうど0になります。

/// Add-one平滑化に基づく費用関数。
///
/// 分母はラティス構築ごとに決まります。辞書にない1文字は、辞書に1語追加されたものとして
/// `total_word_num`に加算されます。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaplaceCost {
    log_denominator: f64,
}

impl LaplaceCost {
    /// 新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `total_freq` - 辞書の総頻度
    /// * `total_word_num` - 辞書の総単語数（未知の1文字の分を含む）
    pub fn new(total_freq: u64, total_word_num: u64) -> Self {
        let denominator = total_freq.saturating_add(total_word_num);
        Self {
            log_denominator: (denominator as f64).ln(),
        }
    }

    /// 頻度`freq`の単語の費用を返します。
    ///
    /// 頻度が高いほど費用は低くなります。
    #[inline(always)]
    pub fn fee(&self, freq: u64) -> f64 {
        self.log_denominator - (freq.saturating_add(1) as f64).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee() {
        let cost = LaplaceCost::new(10, 3);
        assert!((cost.fee(5) - (13f64.ln() - 6f64.ln())).abs() < 1e-12);
        assert!((cost.fee(0) - 13f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_fee_zero_when_word_covers_dictionary() {
        // A single-entry dictionary whose word is the whole input.
        for freq in [0, 1, 13, 184, 195, 307, 1_000_000] {
            let cost = LaplaceCost::new(freq, 1);
            assert_eq!(cost.fee(freq), 0.0, "freq: {freq}");
        }
    }

    #[test]
    fn test_fee_is_monotonic() {
        let cost = LaplaceCost::new(100, 10);
        let mut prev = f64::INFINITY;
        for freq in 0..=100 {
            let fee = cost.fee(freq);
            assert!(fee < prev);
            assert!(fee >= 0.0);
            prev = fee;
        }
    }
}
