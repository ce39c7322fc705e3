//! Chess Board - play chess in the terminal.
//!
//! Reads one command per line from stdin, hands it to the rules engine and
//! redraws the board. With `--json`, every frame is the engine's snapshot
//! serialized as one JSON line instead, for driving a graphical front end.

mod config;
mod render;
mod session;

use anyhow::Context;
use chess_engine::Game;
use clap::Parser;
use config::{BoardConfig, GlyphStyle};
use render::TextRenderer;
use serde::Serialize;
use session::{Command, Feedback, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Chess Board - an interactive chess board for the terminal.
#[derive(Parser)]
#[command(name = "chess-board")]
#[command(about = "Play chess in the terminal with full move validation")]
struct Args {
    /// Configuration file (defaults to ./board.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this position instead of the standard setup
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces as letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Emit JSON snapshots instead of text boards
    #[arg(long)]
    json: bool,

    /// Most verbose log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

/// One JSON frame: the snapshot plus what the last command did.
#[derive(Serialize)]
struct Frame<'a> {
    report: Option<String>,
    #[serde(flatten)]
    snapshot: &'a chess_engine::Snapshot,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let mut config = BoardConfig::load(args.config.as_deref()).context("loading configuration")?;
    if args.ascii {
        config.glyphs = GlyphStyle::Ascii;
    }
    if let Some(fen) = args.fen {
        config.start_fen = Some(fen);
    }

    let game = match &config.start_fen {
        Some(fen) => {
            Game::from_fen(fen).with_context(|| format!("invalid start position '{fen}'"))?
        }
        None => Game::new(),
    };
    tracing::info!(fen = %game.to_fen(), "starting game");

    let renderer = TextRenderer::new(&config);
    let mut session = Session::new(game);
    run(
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut session,
        &renderer,
        args.json,
    )
}

/// Reads commands from `input` until it ends or `quit` is entered, writing
/// one frame per command to `out`.
///
/// In JSON mode every line written is a JSON frame, including reports of
/// unparseable input.
fn run(
    input: impl BufRead,
    out: &mut impl Write,
    session: &mut Session,
    renderer: &TextRenderer,
    json: bool,
) -> anyhow::Result<()> {
    emit(out, renderer, session, None, json)?;

    for line in input.lines() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }

        let feedback = match line.parse::<Command>() {
            Ok(command) => session.execute(command),
            Err(e) => {
                tracing::debug!("{e}");
                if json {
                    emit(out, renderer, session, Some(e.to_string()), json)?;
                } else {
                    writeln!(out, "{e}")?;
                }
                continue;
            }
        };
        if feedback == Feedback::Quit {
            break;
        }

        let report = renderer.feedback(&feedback);
        emit(out, renderer, session, report, json)?;
    }

    Ok(())
}

fn emit(
    out: &mut impl Write,
    renderer: &TextRenderer,
    session: &Session,
    report: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = session.game().snapshot();
    if json {
        let frame = Frame {
            report,
            snapshot: &snapshot,
        };
        serde_json::to_writer(&mut *out, &frame)?;
        writeln!(out)?;
    } else {
        if let Some(report) = report {
            writeln!(out, "{report}")?;
        }
        write!(out, "{}", renderer.board(&snapshot))?;
    }
    out.flush()?;
    Ok(())
}
