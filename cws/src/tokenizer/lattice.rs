//! ラティス（格子）構造の実装モジュール。
//!
//! ラティスは文字境界をノードとする有向非巡回グラフです。ノード`i`は`i+1`文字目の
//! 直前の境界を表し、エッジ`(i, j)`は文字範囲`[i, j)`の単語候補を表します。
//!
//! 概念上はすべての`i < j`にエッジが存在しますが、費用が有限なのは隣接する1文字の
//! エッジと辞書に頻度のある複数文字のエッジだけです。それ以外のエッジは費用が無限大で
//! あり、格納されません。

/// 格納されないエッジの費用。
pub const INFINITE_FEE: f64 = f64::INFINITY;

/// ラティス内のエッジ。
///
/// エッジの内容（部分文字列）は[`Sentence`](crate::sentence::Sentence)から
/// `start..end`で取り出します。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// 始点の境界ノード。
    pub start: usize,
    /// 終点の境界ノード。
    pub end: usize,
    /// 辞書上の頻度（辞書にない場合は0）。
    pub freq: u64,
    /// 費用。
    pub fee: f64,
}

/// 1つの入力文に対するラティス。
///
/// 始点ノードごとに出ていくエッジのリストを保持します。リストは入力の文字数に合わせて
/// 確保され、[`Lattice::reset`]で再利用されます。
#[derive(Default)]
pub struct Lattice {
    starts: Vec<Vec<Edge>>,
    len_char: usize, // needed for avoiding to free starts
}

impl Lattice {
    /// ラティスをリセットし、新しい文の処理を準備します。
    ///
    /// # 引数
    ///
    /// * `len_char` - 新しい文の文字数
    pub fn reset(&mut self, len_char: usize) {
        Self::reset_vec(&mut self.starts, len_char + 1);
        self.len_char = len_char;
    }

    fn reset_vec<T>(data: &mut Vec<Vec<T>>, new_len: usize) {
        for v in data.iter_mut() {
            v.clear();
        }
        let cur_len = data.len();
        if cur_len <= new_len {
            data.reserve(new_len - cur_len);
            for _ in cur_len..new_len {
                data.push(Vec::with_capacity(4))
            }
        }
    }

    /// 設定された文の文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }

    /// 境界ノードの数（文字数+1）を返します。
    #[inline(always)]
    pub const fn num_nodes(&self) -> usize {
        self.len_char + 1
    }

    /// ラティスに費用が有限のエッジを挿入します。
    ///
    /// # 引数
    ///
    /// * `start` - 始点の境界ノード
    /// * `end` - 終点の境界ノード
    /// * `freq` - 辞書上の頻度
    /// * `fee` - 費用
    pub fn insert_edge(&mut self, start: usize, end: usize, freq: u64, fee: f64) {
        debug_assert!(start < end);
        debug_assert!(end <= self.len_char);
        debug_assert!(fee.is_finite() && fee >= 0.0);
        self.starts[start].push(Edge {
            start,
            end,
            freq,
            fee,
        });
    }

    /// ノード`start`から出ていくエッジを返します。
    ///
    /// エッジは終点の昇順に並びます。
    #[inline(always)]
    pub fn edges_from(&self, start: usize) -> &[Edge] {
        self.starts.get(start).map(Vec::as_slice).unwrap_or(&[])
    }

    /// エッジ`(start, end)`を返します。
    ///
    /// # 戻り値
    ///
    /// 費用が有限のエッジであれば`Some`、そうでなければ`None`
    pub fn edge(&self, start: usize, end: usize) -> Option<&Edge> {
        self.edges_from(start).iter().find(|e| e.end == end)
    }

    /// エッジ`(start, end)`の費用を返します。格納されていないエッジは無限大です。
    #[inline]
    pub fn fee(&self, start: usize, end: usize) -> f64 {
        self.edge(start, end).map_or(INFINITE_FEE, |e| e.fee)
    }

    /// 費用が有限のエッジの総数を返します。
    pub fn num_edges(&self) -> usize {
        self.starts.iter().take(self.num_nodes()).map(Vec::len).sum()
    }
}

impl std::fmt::Debug for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lattice {{ len_char: {}, starts: [", self.len_char)?;
        for (i, e) in self.starts.iter().take(self.num_nodes()).enumerate() {
            writeln!(f, "{i} => {e:?}")?;
        }
        writeln!(f, "]}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query() {
        let mut lattice = Lattice::default();
        lattice.reset(3);
        lattice.insert_edge(0, 1, 2, 1.5);
        lattice.insert_edge(0, 2, 7, 0.5);
        lattice.insert_edge(1, 2, 0, 3.0);
        lattice.insert_edge(2, 3, 1, 2.0);

        assert_eq!(lattice.num_nodes(), 4);
        assert_eq!(lattice.num_edges(), 4);
        assert_eq!(lattice.edges_from(0).len(), 2);
        assert_eq!(lattice.edge(0, 2).map(|e| e.freq), Some(7));
        assert_eq!(lattice.fee(0, 2), 0.5);
        assert_eq!(lattice.fee(0, 3), INFINITE_FEE);
        assert!(lattice.edges_from(3).is_empty());
    }

    #[test]
    fn test_reset_shrinks_view() {
        let mut lattice = Lattice::default();
        lattice.reset(4);
        for i in 0..4 {
            lattice.insert_edge(i, i + 1, 0, 1.0);
        }
        lattice.reset(2);
        assert_eq!(lattice.len_char(), 2);
        assert_eq!(lattice.num_edges(), 0);
        assert!(lattice.edge(0, 1).is_none());
    }

    #[test]
    fn test_empty() {
        let mut lattice = Lattice::default();
        lattice.reset(0);
        assert_eq!(lattice.num_nodes(), 1);
        assert_eq!(lattice.num_edges(), 0);
        assert!(lattice.edges_from(0).is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let lattice = Lattice::default();
        assert_eq!(lattice.num_edges(), 0);
        assert!(lattice.edges_from(0).is_empty());
        assert!(format!("{lattice:?}").starts_with("Lattice"));
    }
}
