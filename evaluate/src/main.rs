//! 分割精度を評価するユーティリティ
//!
//! このバイナリは、辞書による単語分割の精度を評価します。
//! 正解コーパスと比較して、適合率（Precision）、再現率（Recall）、F1スコアを計算します。

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::PathBuf;

use cws::config::DEFAULT_SEPARATOR;
use cws::{Dictionary, Limits, Segmenter};

use clap::Parser;
use hashbrown::HashSet;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "evaluate", about = "Evaluates the segmentation accuracy")]
struct Args {
    /// Gold corpus. Each line is a segmented sentence.
    #[clap(short = 't', long)]
    test_in: PathBuf,

    /// Dictionary file of `word frequency` records.
    #[clap(short = 'i', long)]
    dict_in: PathBuf,

    /// Separator between words in the gold corpus. White spaces are always accepted.
    #[clap(short = 's', long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Maximum number of characters in an input line.
    #[clap(long)]
    max_input_chars: Option<usize>,
}

/// 正解の分割を単語の文字範囲の集合に変換する
///
/// # 引数
///
/// * `line` - 区切り文字列または空白で単語を区切った文
/// * `separator` - 区切り文字列
///
/// # 戻り値
///
/// 区切りを除いた入力文と、単語の文字範囲の集合
fn parse_gold(line: &str, separator: &str) -> (String, HashSet<Range<usize>>) {
    let mut input = String::new();
    let mut spans = HashSet::new();
    let mut start = 0;
    for word in line
        .split(separator)
        .flat_map(str::split_whitespace)
    {
        input.push_str(word);
        let len = word.chars().count();
        spans.insert(start..start + len);
        start += len;
    }
    (input, spans)
}

/// 集計値から適合率、再現率、F1スコアを計算する
///
/// 分母が0の場合は0を返します。
fn scores(num_ref: usize, num_sys: usize, num_cor: usize) -> (f64, f64, f64) {
    let ratio = |a: usize, b: usize| if b == 0 { 0.0 } else { a as f64 / b as f64 };
    let precision = ratio(num_cor, num_sys);
    let recall = ratio(num_cor, num_ref);
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };
    (precision, recall, f1)
}

/// メイン関数
///
/// 正解コーパスの各文を区切りなしで分割し、正解と比較して
/// 適合率、再現率、F1スコアを計算します。
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.separator.is_empty() {
        return Err("the separator must not be empty".into());
    }

    log::info!("Loading the dictionary...");
    let mut limits = Limits::default();
    if let Some(n) = args.max_input_chars {
        limits = limits.max_input_chars(n)?;
    }
    let dict = Dictionary::from_path(&args.dict_in, &limits)?;
    let segmenter = Segmenter::new(dict).with_limits(limits);
    let mut worker = segmenter.new_worker();

    log::info!("Segmenting...");

    let rdr = BufReader::new(File::open(&args.test_in)?);

    let mut num_sents = 0;
    let mut num_ref = 0;
    let mut num_sys = 0;
    let mut num_cor = 0;
    for line in rdr.lines() {
        let line = line?;
        let (input, refs) = parse_gold(&line, &args.separator);
        if input.is_empty() {
            continue;
        }
        worker.reset_sentence(&input);
        worker.segment()?;
        let syss: HashSet<_> = worker.token_iter().map(|t| t.range_char()).collect();

        num_sents += 1;
        num_ref += refs.len();
        num_sys += syss.len();
        num_cor += refs.intersection(&syss).count();
    }
    log::info!("Evaluated {} sentences", num_sents);

    let (precision, recall, f1) = scores(num_ref, num_sys, num_cor);
    println!("Precision = {precision}");
    println!("Recall = {recall}");
    println!("F1 = {f1}");

    Ok(())
}
