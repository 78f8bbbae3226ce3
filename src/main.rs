use chic_board::chess_board::{perft_divide_with_total, Move};
use chic_board::ui::setup_ui;
use chic_board::{Game, MoveRejection};

use clap::arg;
use clap::command;
use clap::Command;

use log::{error, info, warn, LevelFilter};

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use chic_board::chess_board::fen::INITIAL_POSITION;

fn main() {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .arg(
            arg!(
            -f --fen <FEN> "Start position (piece placement and side to move)"
                    )
            .default_value(INITIAL_POSITION)
            .global(true),
        )
        .subcommand(Command::new("play").about("Play a game on the board"))
        .subcommand(
            Command::new("replay").about("Apply moves and report each verdict").arg(
                arg!(
                -m --moves <moves> "List of moves, e.g. e2e4"
                        )
                .num_args(1..)
                .value_parser(clap::value_parser!(String)),
            ),
        )
        .subcommand(
            Command::new("perft").about("Count move sequences").arg(
                arg!(
                -x --depth <d> "depth"
                        )
                .default_value("3")
                .value_parser(clap::value_parser!(u8)),
            ),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if matches.get_flag("debug") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let fen = matches
        .get_one::<String>("fen")
        .map(String::as_str)
        .unwrap_or(INITIAL_POSITION);
    let game = match Game::from_fen(fen) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    match matches.subcommand() {
        Some(("replay", arg_matches)) => {
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>();
            replay(game, moves);
        }
        Some(("perft", arg_matches)) => {
            let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(3);
            perft(&game, depth);
        }
        Some(("play", _)) | None => {
            info!("starting board");
            if let Err(e) = setup_ui(game) {
                error!("could not open the board: {}", e);
                std::process::exit(1);
            }
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

#[derive(Tabled)]
struct ReplayRow {
    attempt: usize,
    side: String,
    mv: String,
    piece: String,
    verdict: String,
    captured: String,
}

fn replay(mut game: Game, moves: Vec<&String>) {
    let mut table_rows = Vec::new();
    for (attempt, text) in moves.into_iter().enumerate() {
        let side = game.side_to_move();
        let mv = match Move::from_algebraic(text) {
            Ok(mv) => mv,
            Err(e) => {
                warn!("skipping {}: {}", text, e);
                continue;
            }
        };
        let piece = game
            .board()
            .piece_at(mv.from)
            .map(|p| p.symbol().to_string())
            .unwrap_or_default();
        let (verdict, captured) = match game.apply_move(mv.from, mv.to) {
            Ok(outcome) => (
                String::from("accepted"),
                outcome.captured.map(|p| p.symbol().to_string()).unwrap_or_default(),
            ),
            Err(rejection) => (describe_rejection(&rejection), String::new()),
        };
        table_rows.push(ReplayRow {
            attempt: attempt + 1,
            side: side.to_string(),
            mv: mv.as_algebraic(),
            piece,
            verdict,
            captured,
        });
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("{}", game.board().render_to_string());
    println!("{}", game.board().to_fen(game.side_to_move()));
}

fn describe_rejection(rejection: &MoveRejection) -> String {
    if rejection.is_turn_violation() {
        format!("wrong turn: {}", rejection)
    } else {
        format!("rejected: {}", rejection)
    }
}

#[derive(Tabled)]
struct PerftRow {
    mv: String,
    nodes: u64,
}

fn perft(game: &Game, depth: u8) {
    println!("Perft test for {} with depth {}", game.board().to_fen(game.side_to_move()), depth);
    let (result_moves, num_nodes) = perft_divide_with_total(game.board(), game.side_to_move(), depth);
    let table_rows: Vec<PerftRow> = result_moves
        .into_iter()
        .map(|(mv, nodes)| PerftRow {
            mv: mv.as_algebraic(),
            nodes,
        })
        .collect();
    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("\nNodes searched: {}", num_nodes);
}
