//! 単語分割を実行するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだテキストを単語分割し、
//! 指定された出力形式（wakati、detail）で結果を出力します。

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use cws::config::{
    DEFAULT_MAX_INPUT_CHARS, DEFAULT_MAX_LINE_LEN, DEFAULT_MAX_WORD_CHARS, DEFAULT_SEPARATOR,
};
use cws::tokenizer::worker::Worker;
use cws::{Dictionary, Limits, Segmenter};

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Wakati,
    Detail,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"wakati"、"detail"のいずれか）
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "wakati" => Ok(Self::Wakati),
            "detail" => Ok(Self::Detail),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "segment", about = "Segments Chinese text into words")]
struct Args {
    /// Dictionary file of `word frequency` records.
    #[clap(short = 'i', long)]
    dict: PathBuf,

    /// Output mode. Choices are wakati and detail.
    #[clap(short = 'O', long, default_value = "wakati")]
    output_mode: OutputMode,

    /// Separator between words in wakati mode.
    #[clap(short = 's', long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Maximum number of characters in an input line.
    #[clap(long, default_value_t = DEFAULT_MAX_INPUT_CHARS)]
    max_input_chars: usize,

    /// Maximum number of characters in a dictionary word.
    #[clap(long, default_value_t = DEFAULT_MAX_WORD_CHARS)]
    max_word_chars: usize,

    /// Maximum number of bytes in a dictionary line.
    #[clap(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    max_line_len: usize,

    /// Prompts for each line and stops at an empty line.
    #[clap(long)]
    interactive: bool,

    /// Reloads the dictionary for every input line.
    #[clap(long)]
    reload: bool,
}

/// 辞書を読み込み、セグメンターを構築する
fn build_segmenter(args: &Args, limits: &Limits) -> Result<Segmenter, Box<dyn Error>> {
    let dict = Dictionary::from_path(&args.dict, limits)?;
    let segmenter = Segmenter::from_shared_dictionary(Arc::new(dict))
        .with_limits(*limits)
        .separator(args.separator.as_str())?;
    Ok(segmenter)
}

/// 分割結果を出力する
fn write_result<W>(out: &mut W, worker: &Worker, mode: &OutputMode, separator: &str) -> std::io::Result<()>
where
    W: Write,
{
    match mode {
        OutputMode::Wakati => {
            out.write_all(worker.join(separator).as_bytes())?;
            out.write_all(b"\n")?;
        }
        OutputMode::Detail => {
            for t in worker.token_iter() {
                writeln!(
                    out,
                    "{}\tfreq={}\tfee={:.6}\ttotal_cost={:.6}",
                    t.surface(),
                    t.freq(),
                    t.fee(),
                    t.total_cost(),
                )?;
            }
            out.write_all(b"EOS\n")?;
        }
    }
    Ok(())
}

/// メイン関数
///
/// 辞書をロードし、標準入力から読み込んだテキストを単語分割して、
/// 指定された形式で結果を標準出力に出力します。
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let limits = Limits::default()
        .max_input_chars(args.max_input_chars)?
        .max_word_chars(args.max_word_chars)?
        .max_line_len(args.max_line_len)?;

    log::info!("Loading the dictionary...");
    let mut segmenter = build_segmenter(&args, &limits)?;
    let mut worker = segmenter.new_worker();
    log::info!("Ready to segment");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let mut lines = std::io::stdin().lock().lines();
    loop {
        if args.interactive {
            out.write_all(b">>> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if args.interactive && line.is_empty() {
            break;
        }

        if args.reload {
            segmenter = build_segmenter(&args, &limits)?;
            worker = segmenter.new_worker();
        }

        worker.reset_sentence(&line);
        if let Err(e) = worker.segment() {
            out.flush()?;
            log::error!("[cws] Failed to segment {:?}: {}", line, e);
            return Err(e.into());
        }
        write_result(&mut out, &worker, &args.output_mode, segmenter.separator_str())?;
        if is_tty || args.interactive {
            out.flush()?;
        }
    }

    Ok(())
}
