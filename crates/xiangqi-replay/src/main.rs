//! 棋譜再生ツール
//!
//! 中国式表記（または ICCS 形式 "h2e2"）の指し手列を盤面に順に適用し、最終局面と終局結果を出力する。
//! 一致しない表記は警告して読み飛ばす（`--strict` ならエラー終了）。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info, warn};
use rand::RngCore;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};
use xiangqi_core::notation::find_move_by_notation;
use xiangqi_core::{Board, Color, Move, RuleConfig};

#[derive(Parser, Debug)]
#[command(name = "xiangqi-replay")]
#[command(about = "中国式表記の棋譜を再生し、最終局面と結果を表示する")]
struct Cli {
    /// 開始局面の FEN（省略時は初期局面）
    #[arg(long)]
    fen: Option<String>,

    /// 棋譜ファイル（JSON: [["炮二平五","馬8进7"], ...] または ["炮二平五", ...]）
    #[arg(long)]
    moves_file: Option<PathBuf>,

    /// ルール設定ファイル（TOML）
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 一致しない表記があればエラー終了する
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// この半手数を適用したところで止める
    #[arg(long)]
    ply: Option<usize>,

    /// 結果を JSON で出力する
    #[arg(long, default_value_t = false)]
    json: bool,

    /// 棋譜の後にランダムな合法手をこの半手数だけ指す
    #[arg(long)]
    random_plies: Option<usize>,

    /// ランダム指しのシード
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// 指し手（中国式表記または ICCS。ファイルの指し手の後に適用）
    moves: Vec<String>,
}

/// 棋譜ファイルの形式
#[derive(Deserialize)]
#[serde(untagged)]
enum MoveList {
    /// 红・黑の組（空文字列は手なし）
    Pairs(Vec<Vec<String>>),
    Flat(Vec<String>),
}

impl MoveList {
    fn into_notations(self) -> Vec<String> {
        match self {
            MoveList::Pairs(pairs) => pairs.into_iter().flatten().filter(|s| !s.trim().is_empty()).collect(),
            MoveList::Flat(moves) => moves.into_iter().filter(|s| !s.trim().is_empty()).collect(),
        }
    }
}

#[derive(Serialize)]
struct AppliedMove {
    ply: usize,
    color: Color,
    notation: String,
    iccs: String,
}

#[derive(Serialize)]
struct Summary {
    applied: Vec<AppliedMove>,
    skipped: Vec<String>,
    fen: String,
    side_to_move: Color,
    halfmove_clock: u32,
    in_check: bool,
    result: Option<String>,
}

fn load_rules(path: &Path) -> Result<RuleConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("ルール設定を読めません: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("ルール設定の形式が不正です: {}", path.display()))
}

fn load_moves(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("棋譜ファイルを読めません: {}", path.display()))?;
    let list: MoveList = serde_json::from_str(&text)
        .with_context(|| format!("棋譜ファイルの形式が不正です: {}", path.display()))?;
    Ok(list.into_notations())
}

/// 指し手の文字列を手番側の合法手に解決する
///
/// ICCS として読めるものはそのまま照合し、それ以外は中国式表記として探す。
fn resolve(board: &mut Board, text: &str) -> Option<Move> {
    let Some(mv) = Move::from_iccs(text) else {
        return find_move_by_notation(board, text);
    };
    let side = board.side_to_move();
    let own = board.piece_at(mv.from).is_some_and(|p| p.color() == side);
    (own && board.is_legal(&mv)).then_some(mv)
}

/// 表記を生成してから指す
fn commit(board: &mut Board, mv: &Move, applied: &mut Vec<AppliedMove>) -> Result<()> {
    let color = board.side_to_move();
    let notation = board.move_to_chinese(mv);
    board.make_move(mv)?;
    applied.push(AppliedMove {
        ply: applied.len() + 1,
        color,
        notation,
        iccs: mv.to_iccs(),
    });
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rules = match &cli.rules {
        Some(path) => load_rules(path)?,
        None => RuleConfig::default(),
    };
    debug!("rules: {rules:?}");

    let board = match &cli.fen {
        Some(fen) => Board::from_fen(fen).with_context(|| format!("FEN を解析できません: {fen}"))?,
        None => Board::startpos(),
    };
    let mut board = board.with_rules(rules);

    let mut notations = match &cli.moves_file {
        Some(path) => load_moves(path)?,
        None => Vec::new(),
    };
    notations.extend(cli.moves.iter().cloned());

    let limit = cli.ply.unwrap_or(usize::MAX);
    let mut applied = Vec::new();
    let mut skipped = Vec::new();

    // 1. 棋譜の再生
    for text in &notations {
        if applied.len() >= limit {
            break;
        }
        match resolve(&mut board, text) {
            Some(mv) => commit(&mut board, &mv, &mut applied)?,
            None if cli.strict => {
                bail!("{}手目の「{text}」に一致する合法手がありません", applied.len() + 1);
            }
            None => {
                warn!("skip unmatched notation '{text}' at ply {}", applied.len() + 1);
                skipped.push(text.clone());
            }
        }
    }

    // 2. ランダム指し
    if let Some(plies) = cli.random_plies {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(cli.seed);
        for _ in 0..plies {
            if applied.len() >= limit || board.game_result().is_some() {
                break;
            }
            let color = board.side_to_move();
            let legal = board.generate_legal_moves(color);
            if legal.is_empty() {
                break;
            }
            let mv = &legal[(rng.next_u32() as usize) % legal.len()];
            commit(&mut board, mv, &mut applied)?;
        }
    }

    let result = board.game_result();
    info!("applied {} plies, skipped {}", applied.len(), skipped.len());

    let summary = Summary {
        fen: board.board_fen(),
        side_to_move: board.side_to_move(),
        halfmove_clock: board.halfmove_clock(),
        in_check: board.is_in_check(board.side_to_move()),
        result: result.map(|r| r.code().to_string()),
        applied,
        skipped,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for mv in &summary.applied {
        println!("{:>3}. {} ({})", mv.ply, mv.notation, mv.iccs);
    }
    for text in &summary.skipped {
        println!("skipped: {text}");
    }
    println!("FEN: {}", summary.fen);
    println!("{board}");
    println!("result: {}", summary.result.as_deref().unwrap_or("*"));
    Ok(())
}
