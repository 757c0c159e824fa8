//! ラティス上の最短経路探索。
//!
//! ノード0からノードNまでの単一始点最短経路をダイクストラ法で求めます。
//! 費用はすべて非負で、格納されていないエッジ（費用無限大）は緩和の対象になりません。

use crate::tokenizer::lattice::{Lattice, INFINITE_FEE};

/// 最短経路探索の結果。
///
/// 各境界ノードについて、ノード0からの最小費用と最短経路上の直前のノードを保持します。
/// ラティスと同様に[`ShortestPath::solve`]で再利用されます。
#[derive(Default, Debug, Clone)]
pub struct ShortestPath {
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
    finalized: Vec<bool>,
}

impl ShortestPath {
    /// ラティスの最短経路を求めます。
    ///
    /// 未確定のノードのうち暫定距離が最小のものを確定し、そこから出ていくエッジを
    /// 緩和する操作を、ノードNが確定するまで繰り返します。最小のノードが複数ある場合は
    /// 番号の最も小さいノードを選びます。
    ///
    /// # 引数
    ///
    /// * `lattice` - 構築済みのラティス
    pub fn solve(&mut self, lattice: &Lattice) {
        let num_nodes = lattice.num_nodes();
        let target = lattice.len_char();

        self.distances.clear();
        self.distances.resize(num_nodes, INFINITE_FEE);
        self.predecessors.clear();
        self.predecessors.resize(num_nodes, None);
        self.finalized.clear();
        self.finalized.resize(num_nodes, false);

        self.distances[0] = 0.0;

        while !self.finalized[target] {
            let Some((v, min)) = self.select_min() else {
                // The remaining nodes are unreachable.
                break;
            };
            self.finalized[v] = true;

            for edge in lattice.edges_from(v) {
                let new_cost = min + edge.fee;
                if !self.finalized[edge.end] && new_cost < self.distances[edge.end] {
                    self.distances[edge.end] = new_cost;
                    self.predecessors[edge.end] = Some(v);
                }
            }
        }
    }

    /// 未確定で暫定距離が有限かつ最小のノードを返します。
    ///
    /// 番号の昇順に走査し、厳密に小さい値のときだけ候補を置き換えます。
    fn select_min(&self) -> Option<(usize, f64)> {
        let mut min_idx = None;
        let mut min_cost = INFINITE_FEE;
        for (i, &cost) in self.distances.iter().enumerate() {
            if !self.finalized[i] && cost < min_cost {
                min_idx = Some(i);
                min_cost = cost;
            }
        }
        min_idx.map(|i| (i, min_cost))
    }

    /// ノード0からノード`i`までの最小費用を返します。到達できない場合は無限大です。
    #[inline(always)]
    pub fn distance(&self, i: usize) -> f64 {
        self.distances[i]
    }

    /// 最短経路上でノード`i`の直前にあるノードを返します。
    ///
    /// ノード0と到達できないノードでは`None`です。
    #[inline(always)]
    pub fn predecessor(&self, i: usize) -> Option<usize> {
        self.predecessors[i]
    }

    /// すべてのノードの最小費用を返します。
    #[inline(always)]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// すべてのノードの直前のノードを返します。
    #[inline(always)]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// 最終ノードまでの最小費用を返します。
    pub fn total_cost(&self) -> f64 {
        self.distances.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_prefers_cheaper_long_edge() {
        let mut lattice = Lattice::default();
        lattice.reset(3);
        lattice.insert_edge(0, 1, 0, 1.0);
        lattice.insert_edge(1, 2, 0, 1.0);
        lattice.insert_edge(2, 3, 0, 1.0);
        lattice.insert_edge(0, 2, 5, 1.5);

        let mut path = ShortestPath::default();
        path.solve(&lattice);
        assert_eq!(path.distances(), &[0.0, 1.0, 1.5, 2.5]);
        assert_eq!(path.predecessor(3), Some(2));
        assert_eq!(path.predecessor(2), Some(0));
        assert_eq!(path.predecessor(0), None);
        assert_eq!(path.total_cost(), 2.5);
    }

    #[test]
    fn test_tie_break_keeps_first_relaxation() {
        // Paths 0-1-2 and 0-2 both cost 2.0; node 0 is finalized first, so the direct
        // edge sets the incumbent and the equal-cost relaxation via node 1 does not
        // replace it.
        let mut lattice = Lattice::default();
        lattice.reset(2);
        lattice.insert_edge(0, 1, 0, 1.0);
        lattice.insert_edge(0, 2, 1, 2.0);
        lattice.insert_edge(1, 2, 0, 1.0);

        let mut path = ShortestPath::default();
        path.solve(&lattice);
        assert_eq!(path.distance(2), 2.0);
        assert_eq!(path.predecessor(2), Some(0));
    }

    #[test]
    fn test_tie_break_lowest_index() {
        // Nodes 1 and 2 share the minimum tentative distance; node 1 must be
        // finalized first, so node 3 is reached through it.
        let mut lattice = Lattice::default();
        lattice.reset(3);
        lattice.insert_edge(0, 1, 0, 1.0);
        lattice.insert_edge(0, 2, 0, 1.0);
        lattice.insert_edge(1, 3, 0, 1.0);
        lattice.insert_edge(2, 3, 0, 1.0);

        let mut path = ShortestPath::default();
        path.solve(&lattice);
        assert_eq!(path.distance(3), 2.0);
        assert_eq!(path.predecessor(3), Some(1));
    }

    #[test]
    fn test_unreachable() {
        let mut lattice = Lattice::default();
        lattice.reset(2);
        lattice.insert_edge(0, 1, 0, 1.0);

        let mut path = ShortestPath::default();
        path.solve(&lattice);
        assert_eq!(path.distance(2), INFINITE_FEE);
        assert_eq!(path.predecessor(2), None);
    }

    #[test]
    fn test_empty() {
        let mut lattice = Lattice::default();
        lattice.reset(0);

        let mut path = ShortestPath::default();
        path.solve(&lattice);
        assert_eq!(path.distances(), &[0.0]);
        assert_eq!(path.total_cost(), 0.0);
    }
}
