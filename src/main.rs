use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

use clap::{arg, command, ArgMatches, Command};
use log::{error, info, LevelFilter};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use chex::boards::perft::divide;
use chex::config::GameOptions;
use chex::engines::engine_alpha_beta::AlphaBetaEngine;
use chex::engines::{Engine, RandomEngine};
use chex::{get_best_move, make_board, rate_board, Board, Color, Move, ParseError, Ruleset, SearchResult};

fn ruleset_args(command: Command) -> Command {
    command
        .arg(
            arg!(-r --red <RULESET> "Ruleset played by red (chess or checkers)")
                .default_value("chess")
                .value_parser(Ruleset::from_str),
        )
        .arg(
            arg!(-b --black <RULESET> "Ruleset played by black (chess or checkers)")
                .default_value("checkers")
                .value_parser(Ruleset::from_str),
        )
}

fn main() {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            ruleset_args(Command::new("play").about("Play a game on the terminal"))
                .arg(arg!(--auto "Let the engine answer for the other side"))
                .arg(
                    arg!(--human <COLOR> "Side played from the terminal")
                        .default_value("red")
                        .value_parser(Color::from_str),
                )
                .arg(
                    arg!(-x --depth <d> "Search depth")
                        .default_value("2")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            ruleset_args(Command::new("perft").about("Count leaf positions per root move"))
                .arg(
                    arg!(-x --depth <d> "depth")
                        .default_value("3")
                        .value_parser(clap::value_parser!(u8)),
                )
                .arg(
                    arg!(-m --moves <moves> "Moves played before counting")
                        .num_args(1..)
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(ruleset_args(Command::new("benchmark").about("Search the start position at increasing depth")))
        .subcommand(
            ruleset_args(Command::new("selfplay").about("Let the engine play against itself"))
                .arg(
                    arg!(-p --plies <n> "Maximum number of plies")
                        .default_value("100")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--"random-plies" <k> "Plies played at random before searching")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(-s --seed <seed> "Seed for the random plies")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(-x --depth <d> "Search depth")
                        .default_value("2")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches.get_flag("debug") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => play(game_options(arg_matches)),
        Some(("perft", arg_matches)) => {
            let options = game_options(arg_matches);
            let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(3);
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            perft(options, moves, depth)
        }
        Some(("benchmark", arg_matches)) => {
            benchmark(game_options(arg_matches));
            Ok(())
        }
        Some(("selfplay", arg_matches)) => {
            let options = game_options(arg_matches);
            let plies = arg_matches.get_one::<u32>("plies").copied().unwrap_or(100);
            let random_plies = arg_matches.get_one::<u32>("random-plies").copied().unwrap_or(0);
            let seed = arg_matches.get_one::<u64>("seed").copied().unwrap_or(0);
            selfplay(options, plies, random_plies, seed);
            Ok(())
        }
        None => play(GameOptions::default()),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn game_options(arg_matches: &ArgMatches) -> GameOptions {
    let defaults = GameOptions::default();
    let arg_or = |name: &str| arg_matches.try_get_one::<Ruleset>(name).ok().flatten().copied();
    GameOptions {
        red: arg_or("red").unwrap_or(defaults.red),
        black: arg_or("black").unwrap_or(defaults.black),
        human: arg_matches
            .try_get_one::<Color>("human")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(defaults.human),
        auto_move: arg_matches.try_get_one::<bool>("auto").ok().flatten().copied().unwrap_or(false),
        search_depth: arg_matches
            .try_get_one::<u32>("depth")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(defaults.search_depth),
    }
}

fn print_status(board: &Board) {
    println!("{}", board.render_to_string());
    println!("{} ({}) to move, rating {}", board.state.turn, board.ruleset_of(board.state.turn), rate_board(board));
    if let Some(square) = board.state.multi_capturing {
        println!("{} must keep capturing from {}", board.state.turn, square);
    }
}

fn apply_move(board: &Board, mv: Move) -> Board {
    match board.perform_move(mv) {
        Ok(new_board) => new_board,
        Err(e) => {
            error!("{}", e);
            println!("move {} rejected: {}", mv, e);
            board.clone()
        }
    }
}

/// What the game loop does with the current position.
#[derive(Debug, PartialEq)]
enum TurnAction {
    Finished(String),
    EngineMove(Move),
    /// Wait for terminal input, with the search suggestion if there is one.
    AwaitInput(Option<Move>),
}

/// A search without a move (depth 0) does not end the game; only an empty
/// move list does.
fn next_action(options: &GameOptions, board: &Board, suggestion: &SearchResult) -> TurnAction {
    if let Some(winner) = board.state.winner {
        return TurnAction::Finished(format!("{} wins", winner));
    }
    if board.playable_moves().is_empty() {
        return TurnAction::Finished(format!("{} has no moves left, the game is drawn", board.state.turn));
    }
    match suggestion.best_move {
        Some(mv) if options.engine_moves_for(board.state.turn) => TurnAction::EngineMove(mv),
        best_move => TurnAction::AwaitInput(best_move),
    }
}

fn play(options: GameOptions) -> Result<(), ParseError> {
    info!("starting game {:?}", options);
    println!(
        "red plays {}, black plays {}",
        options.ruleset_of(Color::Red),
        options.ruleset_of(Color::Black)
    );
    let mut board = make_board(options.red, options.black);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_status(&board);

        let suggestion = get_best_move(&board, options.search_depth);
        let best_move = match next_action(&options, &board, &suggestion) {
            TurnAction::Finished(message) => {
                println!("{}", message);
                return Ok(());
            }
            TurnAction::EngineMove(mv) => {
                println!("engine plays {}", mv);
                board = apply_move(&board, mv);
                continue;
            }
            TurnAction::AwaitInput(best_move) => best_move,
        };

        if let Some(mv) = best_move {
            println!(
                "suggested {} (value {}, {} positions searched)",
                mv, suggestion.value, suggestion.searched
            );
        }
        print!("{} > ", board.state.turn);
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };
        match line.trim() {
            "quit" | "exit" => return Ok(()),
            "" => {}
            "moves" => {
                let moves: Vec<String> = board.playable_moves().iter().map(Move::as_algebraic).collect();
                println!("{}", moves.join(" "));
            }
            "best" => match best_move {
                Some(mv) => board = apply_move(&board, mv),
                None => println!("no suggestion at depth {}", options.search_depth),
            },
            input => match board.parse_playable_move(input) {
                Ok(mv) => board = apply_move(&board, mv),
                Err(e) => println!("{}", e),
            },
        }
    }
}

fn perft(options: GameOptions, moves: Vec<&String>, depth: u8) -> Result<(), ParseError> {
    println!(
        "Perft test for {} vs {} moves {:?} with depth {}",
        options.red, options.black, moves, depth
    );
    let mut board = make_board(options.red, options.black);
    for m in moves {
        let mv = board.parse_playable_move(m)?;
        board = apply_move(&board, mv);
    }

    let mut num_nodes = 0;
    for (m, c) in divide(&board, depth) {
        println!("{}: {}", m, c);
        num_nodes += c;
    }
    println!("\nNodes searched: {}", num_nodes);
    Ok(())
}

#[derive(Tabled)]
struct BenchmarkRow {
    depth: u32,
    value: f64,
    searched: u64,
    elapsed_time: f32,
    searched_per_sec: f32,
    best_move: String,
}

fn benchmark(options: GameOptions) {
    let board = make_board(options.red, options.black);
    let mut table_rows = Vec::new();
    for depth in 0..10 {
        let start_time = Instant::now();
        let result = get_best_move(&board, depth);
        let elapsed = start_time.elapsed();
        table_rows.push(BenchmarkRow {
            depth,
            value: result.value,
            searched: result.searched,
            elapsed_time: elapsed.as_secs_f32(),
            searched_per_sec: result.searched as f32 / elapsed.as_secs_f32().max(f32::EPSILON) / 1000f32,
            best_move: result.best_move.map_or("-".to_string(), |mv| mv.as_algebraic()),
        });
        if elapsed.as_secs() > 10 {
            break;
        }
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
}

fn selfplay(options: GameOptions, plies: u32, random_plies: u32, seed: u64) {
    let mut board = make_board(options.red, options.black);
    let mut random = RandomEngine::with_seed(seed);
    // A depth 0 search never proposes a move
    let mut alpha_beta = AlphaBetaEngine::new(options.search_depth.max(1));

    for ply in 0..plies {
        if board.state.winner.is_some() {
            break;
        }
        let searching = ply >= random_plies;
        let engine: &mut dyn Engine = if searching { &mut alpha_beta } else { &mut random };
        let name = engine.name().to_string();
        let Some(mv) = engine.choose_move(&board) else {
            println!("{} has no moves left", board.state.turn);
            break;
        };
        match alpha_beta.last_result().filter(|_| searching) {
            Some(result) => println!(
                "{:>3}. {} {} ({}, value {}, {} searched)",
                ply + 1,
                board.state.turn,
                mv,
                name,
                result.value,
                result.searched
            ),
            None => println!("{:>3}. {} {} ({})", ply + 1, board.state.turn, mv, name),
        }
        board = apply_move(&board, mv);
    }

    print_status(&board);
    match board.state.winner {
        Some(winner) => println!("{} wins", winner),
        None => println!("no winner"),
    }
}
