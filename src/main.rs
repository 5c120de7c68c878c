//! Terminal front end for the board engine.
//!
//! Reads one command per line from stdin. `pick e2` / `drop e4` mimic a drag
//! gesture, `move e2e4` does both at once.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use rand::rng;

use plum_board::game_state::chess_types::Square;
use plum_board::interface::board_session::BoardSession;
use plum_board::interface::shell_config::ShellConfig;
use plum_board::move_generation::legal_move_apply::MoveOutcome;
use plum_board::move_generation::move_generator::destinations;
use plum_board::utils::algebraic::{algebraic_to_square, parse_coordinate_move, square_to_algebraic};
use plum_board::utils::random_walk::random_playout;
use plum_board::utils::render_game_state::render_game_state;

const HELP: &str = "commands: show | pick <sq> | drop <sq> | cancel | move <from><to> | moves <sq> | random <plies> | fen | new | quit";

fn main() {
    env_logger::init();

    let config = ShellConfig::from_env();
    let mut session = BoardSession::new(config.starting_position());
    info!("starting from {}", session.game_state().get_fen());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_board(&mut stdout, &session, &config);
    let _ = writeln!(stdout, "{HELP}");

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let argument = words.next().unwrap_or("");
        debug!("command {command:?} {argument:?}");

        let reply = match command {
            "quit" | "exit" => break,
            "show" => {
                print_board(&mut stdout, &session, &config);
                None
            }
            "fen" => Some(session.game_state().get_fen()),
            "new" => {
                session = BoardSession::new(config.starting_position());
                print_board(&mut stdout, &session, &config);
                None
            }
            "cancel" => {
                session.cancel_pick();
                Some("released".to_owned())
            }
            "pick" => Some(match algebraic_to_square(argument) {
                Ok(sq) if session.pick_up(sq) => {
                    format!("holding {argument}: {}", list_squares(&session.highlighted_destinations()))
                }
                Ok(_) => format!("nothing to pick up on {argument}"),
                Err(err) => err.to_string(),
            }),
            "drop" => match algebraic_to_square(argument) {
                Ok(sq) => report(&mut stdout, &session.drop_on(sq), &session, &config),
                Err(err) => Some(err.to_string()),
            },
            "move" => match parse_coordinate_move(argument) {
                Ok((from, to)) => report(&mut stdout, &session.attempt_move(from, to), &session, &config),
                Err(err) => Some(err.to_string()),
            },
            "moves" => Some(match algebraic_to_square(argument) {
                Ok(sq) => list_squares(&destinations(session.game_state(), sq)),
                Err(err) => err.to_string(),
            }),
            "random" => {
                let plies = argument.parse::<usize>().unwrap_or(1);
                let visited = random_playout(session.game_state(), plies, &mut rng());
                if let Some(last) = visited.last() {
                    session = BoardSession::new(last.clone());
                }
                print_board(&mut stdout, &session, &config);
                Some(format!("played {} plies", visited.len()))
            }
            _ => Some(HELP.to_owned()),
        };

        if let Some(reply) = reply {
            let _ = writeln!(stdout, "{reply}");
        }
        let _ = stdout.flush();
    }
}

fn report(
    stdout: &mut io::Stdout,
    outcome: &MoveOutcome,
    session: &BoardSession,
    config: &ShellConfig,
) -> Option<String> {
    match outcome {
        MoveOutcome::Applied { .. } => {
            print_board(stdout, session, config);
            None
        }
        MoveOutcome::Rejected => Some("illegal move".to_owned()),
    }
}

fn print_board(stdout: &mut io::Stdout, session: &BoardSession, config: &ShellConfig) {
    let _ = writeln!(
        stdout,
        "{}",
        render_game_state(session.game_state(), config.glyph_style, session.picked_up())
    );
}

fn list_squares(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "no moves".to_owned();
    }
    squares
        .iter()
        .filter_map(|&sq| square_to_algebraic(sq).ok())
        .collect::<Vec<_>>()
        .join(" ")
}
