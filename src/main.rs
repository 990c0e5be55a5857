use std::env;
use std::io::{self, BufRead, Write};

use log::info;

use chess_arbiter::utils::algebraic::{
    algebraic_to_location, location_to_algebraic, parse_coordinate_move,
};
use chess_arbiter::utils::render_game_state::{render_game_state, RenderStyle};
use chess_arbiter::{GameState, GameStatus};

const HELP: &str = "commands: <from><to> (e.g. e2e4), moves <square>, undo, new, help, quit";

struct ConsoleConfig {
    render_style: RenderStyle,
}

impl ConsoleConfig {
    fn from_env() -> Self {
        let render_style = env::var("ARBITER_RENDER")
            .map(|name| RenderStyle::from_name(&name))
            .unwrap_or_default();
        Self { render_style }
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ConsoleConfig::from_env();
    let mut game = GameState::new_game();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{HELP}")?;
    print_position(&mut out, &game, &config)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["quit"] | ["exit"] => break,
            ["help"] => writeln!(out, "{HELP}")?,
            ["new"] => {
                game.reset();
                info!("new game");
                print_position(&mut out, &game, &config)?;
            }
            ["undo"] => {
                if game.undo_last_move().is_some() {
                    print_position(&mut out, &game, &config)?;
                } else {
                    writeln!(out, "nothing to undo")?;
                }
            }
            ["moves", square] => match algebraic_to_location(square) {
                Ok(from) => {
                    let targets: Vec<String> = game
                        .legal_destinations(from)
                        .into_iter()
                        .filter_map(|to| location_to_algebraic(to).ok())
                        .collect();
                    writeln!(out, "{square}: {}", targets.join(" "))?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            [text] => match parse_coordinate_move(text) {
                Ok((from, to)) => match game.try_move_piece(from, to) {
                    Ok(record) => {
                        if record.is_capture() {
                            info!("{text}: capture by {}", record.mover());
                        }
                        print_position(&mut out, &game, &config)?;
                    }
                    Err(err) => writeln!(out, "illegal move: {err}")?,
                },
                Err(err) => writeln!(out, "{err}")?,
            },
            _ => writeln!(out, "unrecognised input; {HELP}")?,
        }
        out.flush()?;
    }

    Ok(())
}

fn print_position(
    out: &mut impl Write,
    game: &GameState,
    config: &ConsoleConfig,
) -> io::Result<()> {
    writeln!(out, "{}", render_game_state(game, config.render_style))?;
    let side = game.current_turn();
    match game.game_status() {
        GameStatus::Ongoing => writeln!(out, "{side} to move"),
        GameStatus::Check => writeln!(out, "{side} to move, in check"),
        GameStatus::Checkmate => writeln!(out, "checkmate, {} wins", side.opposite()),
        GameStatus::Stalemate => writeln!(out, "stalemate"),
    }
}
