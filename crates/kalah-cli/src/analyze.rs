//! Single-position analysis

use std::io::Write;

use anyhow::{Context, Result};
use kalah_core::search::order_moves;
use kalah_core::{Board, Searcher};
use serde::Serialize;

#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Position as `p0 ... p11 / store1 store2 / turn`; the starting
    /// position when omitted
    #[arg(long)]
    pub position: Option<String>,

    /// Print the result as one JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct Analysis {
    position: String,
    best_move: usize,
    score: i32,
    pv: Vec<usize>,
    ordering: Vec<usize>,
    hash_seed: u64,
    stats: kalah_core::SearchStats,
}

fn analyze(board: &Board, depth: u32, hash_seed: u64) -> Result<Analysis> {
    let mut searcher = Searcher::with_seed(hash_seed);
    let result = searcher.search(board, depth)?;
    let pv = searcher.principal_variation(board, depth as usize * 2);
    Ok(Analysis {
        position: board.to_notation(),
        best_move: result.best_move.index(),
        score: result.score.raw(),
        pv: pv.iter().map(|p| p.index()).collect(),
        ordering: order_moves(board, None).iter().map(|p| p.index()).collect(),
        hash_seed: searcher.hasher().seed(),
        stats: result.stats,
    })
}

fn write_report<W: Write>(board: &Board, analysis: &Analysis, out: &mut W) -> Result<()> {
    writeln!(out, "{board}")?;
    writeln!(out, "best move: {}", analysis.best_move)?;
    writeln!(out, "score: {}", kalah_core::Value::new(analysis.score))?;
    let pv: Vec<String> = analysis.pv.iter().map(usize::to_string).collect();
    writeln!(out, "pv: {}", pv.join(" "))?;
    writeln!(out, "{}", analysis.stats)?;
    writeln!(out, "hash seed: {:#x}", analysis.hash_seed)?;
    Ok(())
}

pub fn run(args: &AnalyzeArgs, depth: u32, hash_seed: u64) -> Result<()> {
    let board: Board = match &args.position {
        Some(text) => text
            .parse()
            .with_context(|| format!("invalid --position `{text}`"))?,
        None => Board::new(),
    };
    let analysis = analyze(&board, depth, hash_seed)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer(&mut out, &analysis)?;
        writeln!(out)?;
    } else {
        write_report(&board, &analysis, &mut out)?;
    }
    Ok(())
}
