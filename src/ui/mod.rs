use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use slint::{ModelRc, SharedString, VecModel};

use crate::chess_board::{ChessBoard, ChessField};
use crate::error::MoveRejection;
use crate::game::Game;

slint::include_modules!();

/// Maps a `ChessBoard` to a UI-compatible VecModel representation
pub fn map_chessboard_to_ui(chess_board: &ChessBoard) -> ModelRc<Field> {
    let fields: Vec<Field> = ChessField::all()
        .map(|field| Field {
            symbol: chess_board
                .piece_at(field)
                .map(|piece| SharedString::from(piece.symbol().to_string()))
                .unwrap_or_default(),
            dark: (field.row() + field.col()) % 2 == 1,
        })
        .collect();

    ModelRc::new(VecModel::from(fields))
}

/// Tile under a point in board coordinates, or -1 when the point is off the
/// board. A press or release outside the tiles must not pick an edge tile.
pub fn tile_index_at(x: f32, y: f32, tile_size: f32) -> i32 {
    if !(tile_size > 0.0 && x >= 0.0 && y >= 0.0) {
        return -1;
    }
    let col = (x / tile_size).floor();
    let row = (y / tile_size).floor();
    if col >= 8.0 || row >= 8.0 {
        return -1;
    }
    row as i32 * 8 + col as i32
}

/// Text shown after a refused drop.
pub fn rejection_message(game: &Game, rejection: &MoveRejection) -> String {
    if rejection.is_turn_violation() {
        format!("It's {}'s turn!", game.side_to_move())
    } else {
        String::from("Illegal move!")
    }
}

fn refresh(ui: &MainWindow, game: &Game, message: &str) {
    ui.set_fields(map_chessboard_to_ui(game.board()));
    ui.set_status(game.status_text().into());
    ui.set_message(message.into());
}

fn handle_drop(game: &mut Game, from: i32, to: i32) -> String {
    let squares = usize::try_from(from)
        .ok()
        .zip(usize::try_from(to).ok())
        .and_then(|(from, to)| Some((ChessField::from_index(from).ok()?, ChessField::from_index(to).ok()?)));
    let Some((from, to)) = squares else {
        debug!("drop outside the board: {} -> {}", from, to);
        return String::new();
    };
    match game.apply_move(from, to) {
        Ok(_) => String::new(),
        Err(MoveRejection::NullMove) => String::new(),
        Err(rejection) => rejection_message(game, &rejection),
    }
}

/// Opens the board window and runs the event loop until it is closed.
pub fn setup_ui(game: Game) -> Result<(), slint::PlatformError> {
    let ui = MainWindow::new()?;
    let game = Rc::new(RefCell::new(game));
    refresh(&ui, &game.borrow(), "");
    ui.on_field_index(tile_index_at);

    {
        let game = Rc::clone(&game);
        let ui_handle = ui.as_weak();
        ui.on_move_requested(move |from, to| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut game = game.borrow_mut();
            let message = handle_drop(&mut game, from, to);
            refresh(&ui, &game, &message);
        });
    }

    {
        let game = Rc::clone(&game);
        let ui_handle = ui.as_weak();
        ui.on_restart(move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut game = game.borrow_mut();
            game.restart();
            refresh(&ui, &game, "");
        });
    }

    info!("opening board, {}", game.borrow().status_text());
    ui.run()
}
