//! 分割処理のためのルーチンを提供するモジュール。
//!
//! ワーカーは入力文、ラティス、最短経路などの内部データ構造を保持し、
//! それらを再利用することで不要なメモリアロケーションを避けます。
use crate::errors::Result;
use crate::sentence::Sentence;
use crate::token::{Token, TokenIter};
use crate::tokenizer::lattice::{Edge, Lattice, INFINITE_FEE};
use crate::tokenizer::solver::ShortestPath;
use crate::tokenizer::{build_lattice, Segmenter};

/// 分割処理のためのルーチンを提供する構造体。
///
/// # 例
///
/// ```
/// use cws::{Dictionary, DictEntry, Segmenter};
///
/// let dict = Dictionary::from_entries([
///     DictEntry::new("自然", 4),
///     DictEntry::new("言語", 6),
///     DictEntry::new("処理", 3),
/// ]);
/// let segmenter = Segmenter::new(dict);
/// let mut worker = segmenter.new_worker();
///
/// worker.reset_sentence("自然言語処理");
/// worker.segment()?;
/// assert_eq!(worker.num_tokens(), 3);
/// assert_eq!(worker.join("/"), "自然/言語/処理");
/// # Ok::<(), cws::errors::CwsError>(())
/// ```
pub struct Worker {
    pub(crate) segmenter: Segmenter,
    pub(crate) sent: Sentence,
    pub(crate) lattice: Lattice,
    pub(crate) path: ShortestPath,
    pub(crate) marks: Vec<bool>,
    pub(crate) top_edges: Vec<Edge>,
}

impl Worker {
    /// 新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `segmenter` - 使用するセグメンター
    pub(crate) fn new(segmenter: Segmenter) -> Self {
        Self {
            segmenter,
            sent: Sentence::new(),
            lattice: Lattice::default(),
            path: ShortestPath::default(),
            marks: vec![],
            top_edges: vec![],
        }
    }

    /// 分割する入力文をリセットします。
    ///
    /// 新しい文を設定し、以前の分割結果をクリアします。
    ///
    /// # 引数
    ///
    /// * `input` - 分割する入力文字列
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.top_edges.clear();
        self.marks.clear();
        self.sent.set_sentence(input);
    }

    /// 設定された入力文を分割します。
    ///
    /// 分割結果は内部状態に保存され、`token_iter()`や`token()`メソッドで
    /// アクセスできます。空の文が設定されている場合、結果は空になります。
    ///
    /// # エラー
    ///
    /// 入力文の文字数が上限を超える場合、[`CwsError`](crate::errors::CwsError)を返します。
    /// このとき分割結果は空になり、ラティスと最短経路は空の文のものになります。
    pub fn segment(&mut self) -> Result<()> {
        self.top_edges.clear();
        self.marks.clear();
        if let Err(e) = self.segmenter.limits().check_input(self.sent.len_char()) {
            self.lattice.reset(0);
            self.path.solve(&self.lattice);
            return Err(e);
        }

        build_lattice(self.segmenter.dictionary(), &self.sent, &mut self.lattice);
        self.path.solve(&self.lattice);
        reconstruct(&self.lattice, &self.path, &mut self.marks, &mut self.top_edges);

        log::debug!(
            "[cws] Segmented {} chars into {} words (edges={}, cost={})",
            self.sent.len_char(),
            self.top_edges.len(),
            self.lattice.num_edges(),
            self.path.total_cost(),
        );
        Ok(())
    }

    /// 分割結果のトークン数を取得します。
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.top_edges.len()
    }

    /// `i`番目のトークンを取得します。
    ///
    /// # 引数
    ///
    /// * `i` - トークンのインデックス（0から始まる）
    #[inline(always)]
    pub fn token<'w>(&'w self, i: usize) -> Token<'w> {
        Token::new(self, i)
    }

    /// 分割結果のイテレータを作成します。
    #[inline(always)]
    pub fn token_iter<'w>(&'w self) -> TokenIter<'w> {
        TokenIter::new(self)
    }

    /// 分割結果の単語を区切り文字列で連結します。
    ///
    /// # 引数
    ///
    /// * `separator` - 区切り文字列
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::with_capacity(self.sent.raw().len() + separator.len() * self.num_tokens());
        for (i, t) in self.token_iter().enumerate() {
            if i != 0 {
                out.push_str(separator);
            }
            out.push_str(t.surface());
        }
        out
    }

    /// 分割マークを返します。
    ///
    /// 長さは文字数+1で、最短経路が通る内部ノードの位置が`true`になります。
    #[inline(always)]
    pub fn marks(&self) -> &[bool] {
        &self.marks
    }

    /// 最後に構築したラティスを返します。
    #[inline(always)]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// 最後に求めた最短経路を返します。
    #[inline(always)]
    pub fn shortest_path(&self) -> &ShortestPath {
        &self.path
    }

    /// 最短経路の総費用を返します。
    pub fn total_cost(&self) -> f64 {
        self.path.total_cost()
    }
}

/// 最短経路から単語ごとのエッジを復元します。
///
/// 終点から始点へ直前のノードをたどって内部ノードに分割マークを付け、
/// マークを昇順にたどって隣り合う境界の間のエッジを並べます。
///
/// # 引数
///
/// * `lattice` - 構築済みのラティス
/// * `path` - `lattice`の最短経路
/// * `marks` - 分割マークの出力先（長さは文字数+1になる）
/// * `top_edges` - 単語ごとのエッジの出力先
pub(crate) fn reconstruct(
    lattice: &Lattice,
    path: &ShortestPath,
    marks: &mut Vec<bool>,
    top_edges: &mut Vec<Edge>,
) {
    let len_char = lattice.len_char();
    marks.clear();
    marks.resize(len_char + 1, false);
    top_edges.clear();
    if len_char == 0 {
        return;
    }

    let mut index = len_char;
    while let Some(prev) = path.predecessor(index) {
        if prev == 0 {
            break;
        }
        marks[prev] = true;
        index = prev;
    }

    let mut start = 0;
    for end in 1..=len_char {
        if end == len_char || marks[end] {
            let edge = lattice.edge(start, end).copied().unwrap_or(Edge {
                start,
                end,
                freq: 0,
                fee: INFINITE_FEE,
            });
            top_edges.push(edge);
            start = end;
        }
    }
}
