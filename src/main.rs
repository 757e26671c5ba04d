use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use stylechess::engines::engine_style::{StyleEngine, DEFAULT_SEARCH_DEPTH};
use stylechess::game_state::chess_rules::FIFTY_MOVE_RULE_PLIES;
use stylechess::game_state::chess_types::Color;
use stylechess::game_state::game_state::GameState;
use stylechess::move_generation::legal_move_checks::{game_status, GameStatus};
use stylechess::move_generation::legal_move_generator::LegalMoveGenerator;
use stylechess::move_generation::move_generator::MoveGenerator;
use stylechess::moves::move_descriptions::Move;
use stylechess::search::style_profile::PlayerStyle;
use stylechess::utils::long_algebraic::long_algebraic_to_move;
use stylechess::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against a style-weighted alpha-beta engine", long_about = None)]
struct Args {
    /// Starting position as a FEN record (defaults to the standard start)
    #[arg(long)]
    fen: Option<String>,

    /// Engine style: default, karpov, tal or kasparov
    #[arg(short, long, default_value = "default")]
    style: PlayerStyle,

    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    /// Your color: 'w' or 'b'
    #[arg(short, long, default_value = "w")]
    color: String,

    /// Number of random plies played before the game starts
    #[arg(long, default_value_t = 0)]
    random_opening: u32,

    /// Seed for the random opening
    #[arg(long)]
    seed: Option<u64>,

    /// Let the engine play both sides
    #[arg(long)]
    self_play: bool,

    /// Stop a self-play game after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u32,
}

enum HumanInput {
    Move(Move),
    Undo,
    Quit,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "Black",
        _ => "White",
    }
}

fn print_board(game: &GameState) {
    println!("\n{}", render_game_state(game));
    println!("FEN: {}", game.get_fen());
}

fn get_human_move(game: &mut GameState) -> Result<HumanInput> {
    let legal_moves = LegalMoveGenerator.generate_legal_moves(game)?;

    loop {
        print!("Enter your move (e.g., e2e4, 'undo' or 'quit'): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(HumanInput::Quit);
        }
        let input = input.trim();

        match input {
            "quit" | "exit" => return Ok(HumanInput::Quit),
            "undo" => return Ok(HumanInput::Undo),
            _ => {}
        }

        match long_algebraic_to_move(input, game) {
            Ok(mv) if legal_moves.contains(&mv) => return Ok(HumanInput::Move(mv)),
            Ok(_) => println!("Illegal move!"),
            Err(err) => println!("{err}"),
        }
    }
}

fn play_random_opening(game: &mut GameState, plies: u32, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for _ in 0..plies {
        let moves = LegalMoveGenerator.generate_legal_moves(game)?;
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        info!("random opening move {mv}");
        game.apply_move(mv)?;
    }
    Ok(())
}

/// Prints the result and returns true once the game is over.
fn report_game_over(game: &mut GameState) -> Result<bool> {
    match game_status(&LegalMoveGenerator, game)? {
        GameStatus::Checkmate { winner } => {
            println!("Checkmate! {} wins.", color_name(winner));
            Ok(true)
        }
        GameStatus::Stalemate => {
            println!("Stalemate! The game is a draw.");
            Ok(true)
        }
        GameStatus::Ongoing if game.halfmove_clock >= FIFTY_MOVE_RULE_PLIES => {
            println!("Draw by the fifty-move rule.");
            Ok(true)
        }
        GameStatus::Ongoing => Ok(false),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let human_color = parse_color(&args.color)?;
    let mut game = match &args.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };

    play_random_opening(&mut game, args.random_opening, args.seed)?;

    let mut engine = StyleEngine::new(&game, args.style, args.depth);
    println!(
        "Engine style: {}, search depth: {}",
        engine.style(),
        engine.search_depth()
    );
    if !args.self_play {
        println!("You are playing {}.", color_name(human_color));
    }

    let mut plies_played = 0;
    loop {
        print_board(&game);

        if report_game_over(&mut game)? {
            break;
        }
        if args.self_play && plies_played >= args.max_plies {
            println!("Stopping after {plies_played} plies.");
            break;
        }

        if args.self_play || game.side_to_move != human_color {
            println!("{} is thinking...", color_name(game.side_to_move));
            let mv = engine.find_best_move_sync(&game)?;
            if mv.is_null() {
                bail!("engine returned no move in an ongoing game");
            }
            println!("Engine plays: {mv}");
            game.apply_move(mv)?;
        } else {
            match get_human_move(&mut game)? {
                HumanInput::Move(mv) => game.apply_move(mv)?,
                HumanInput::Undo => {
                    // Take back the engine reply and the human move before it.
                    if game.history_len() >= 2 {
                        game.undo_move();
                        game.undo_move();
                    } else {
                        println!("Nothing to undo.");
                    }
                    continue;
                }
                HumanInput::Quit => {
                    println!("Goodbye.");
                    break;
                }
            }
        }
        plies_played += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{color_name, parse_color, report_game_over, Args};
    use stylechess::game_state::chess_types::Color;
    use stylechess::game_state::game_state::GameState;
    use stylechess::search::style_profile::PlayerStyle;

    #[test]
    fn arguments_parse_with_defaults_and_aliases() {
        let args = Args::try_parse_from(["stylechess"]).expect("defaults should parse");
        assert_eq!(args.style, PlayerStyle::Default);
        assert_eq!(args.depth, 4);
        assert!(!args.self_play);

        let args = Args::try_parse_from([
            "stylechess", "--style", "attacking", "--depth", "2", "--self-play", "--seed", "7",
        ])
        .expect("arguments should parse");
        assert_eq!(args.style, PlayerStyle::Tal);
        assert_eq!(args.depth, 2);
        assert!(args.self_play);
        assert_eq!(args.seed, Some(7));

        assert!(Args::try_parse_from(["stylechess", "--style", "petrosian"]).is_err());
    }

    #[test]
    fn colors_parse_and_print() {
        assert_eq!(parse_color("w").expect("w should parse"), Color::White);
        assert_eq!(parse_color("Black").expect("Black should parse"), Color::Black);
        assert!(parse_color("red").is_err());

        assert_eq!(color_name(Color::White), "White");
        assert_eq!(color_name(Color::Black), "Black");
    }

    #[test]
    fn game_over_covers_mate_stalemate_and_fifty_moves() {
        let mut mated =
            GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("FEN should parse");
        assert!(report_game_over(&mut mated).expect("status should compute"));

        let mut stalemate =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(report_game_over(&mut stalemate).expect("status should compute"));

        let mut fifty =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").expect("FEN should parse");
        assert!(report_game_over(&mut fifty).expect("status should compute"));

        let mut start = GameState::new_game();
        assert!(!report_game_over(&mut start).expect("status should compute"));
    }
}
