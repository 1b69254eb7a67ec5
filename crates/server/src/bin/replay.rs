//! Step through a game in the terminal.
//!
//! Usage: cargo run --bin replay -- <share-token | game.pgn>
//!
//! Reads one key per line from stdin: ArrowLeft/ArrowRight/ArrowUp/ArrowDown
//! (or h/l/k/j, left/right/up/down). `q` quits.

use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use annotator_core::share;
use annotator_core::{Command, Frame, GameNavigator, Mode};
use tracing_subscriber::EnvFilter;

fn load(arg: &str) -> anyhow::Result<GameNavigator> {
    if Path::new(arg).is_file() {
        let text = fs::read_to_string(arg)?;
        let moves = annotator_core::pgn::load_pgn(&text)?;
        return Ok(GameNavigator::new(moves, Default::default(), Mode::Viewer)?);
    }

    let game = share::unpack(arg)?;
    Ok(GameNavigator::new(game.moves, game.comments, Mode::Viewer)?)
}

fn print_frame(frame: &Frame) {
    println!("[{}/{}] {}", frame.pointer, frame.total, frame.move_text);
    println!("  {}", frame.fen);
    if let Some(hl) = &frame.highlight {
        print!("  {}-{} ({:?}, {})", hl.from, hl.to, hl.tone, hl.tone.color());
        if let (Some(king), Some(color)) = (hl.check, frame.check_color) {
            print!(" check on {king} ({color})");
        }
        println!();
    }
    if !frame.comment.is_empty() {
        println!("  \"{}\"", frame.comment);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(source) = args.get(1) else {
        let program = args.first().map_or("replay", String::as_str);
        eprintln!("Usage: {program} <share-token | game.pgn>");
        std::process::exit(1);
    };

    let mut nav = load(source)?;
    print_frame(&nav.frame());

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }
        match Command::from_key(&line) {
            Some(command) => {
                if nav.apply(command) {
                    print_frame(&nav.frame());
                }
            }
            None => eprintln!("Unknown key: {}", line.trim()),
        }
    }

    Ok(())
}
