#[cfg(test)]
mod tests {
    use crate::game::board::{Board, Mark};
    use crate::game::history::GameHistory;
    use crate::game::invite::{format_join_path, parse_join_path};
    use crate::game::machine::{GameError, GameMachine, Phase, Role};
    use uuid::Uuid;

    fn started_pair() -> (GameMachine, GameMachine) {
        let mut inviter = GameMachine::new(Role::Inviter);
        let mut joiner = GameMachine::new(Role::Joiner);
        inviter.ready();
        joiner.ready();
        inviter.start();
        joiner.start();
        (inviter, joiner)
    }

    /// Relay one local move to the other side, the way the wire does.
    fn play_pair(from: &mut GameMachine, to: &mut GameMachine, cell: usize) {
        from.play(cell).expect("local move refused");
        to.apply_remote_play(cell).expect("remote move refused");
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(board.winner(), None);
        assert!(!board.is_over());
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        let mut row = Board::new();
        for cell in [0, 1, 2] {
            row.place(cell, Mark::X);
        }
        assert_eq!(row.winner(), Some((Mark::X, [0, 1, 2])));

        let mut column = Board::new();
        for cell in [1, 4, 7] {
            column.place(cell, Mark::O);
        }
        assert_eq!(column.winner(), Some((Mark::O, [1, 4, 7])));

        let mut diagonal = Board::new();
        for cell in [2, 4, 6] {
            diagonal.place(cell, Mark::X);
        }
        assert_eq!(diagonal.winner(), Some((Mark::X, [2, 4, 6])));
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut board = Board::new();
        // X O X / X O O / O X X: no three in a line.
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        for (cell, mark) in marks.into_iter().enumerate() {
            board.place(cell, mark);
        }
        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert!(board.is_over());
    }

    #[test]
    fn test_marks_oppose_each_other() {
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    #[should_panic]
    fn test_board_cell_out_of_range_panics() {
        let board = Board::new();
        let _ = board.cell(9);
    }

    #[test]
    fn test_history_starts_with_single_empty_entry() {
        let history = GameHistory::new();
        assert!(!history.is_empty());
        assert_eq!(history.len(), 1);
        assert!(history.current().x_is_next);
        assert!(!history.has_moves());
    }

    #[test]
    fn test_history_undo_redo_moves_cursor_only() {
        let mut machine = started_pair().0;
        machine.play(0).unwrap();
        machine.apply_remote_play(4).unwrap();

        assert_eq!(machine.history().cursor(), 2);
        assert!(machine.undo());
        assert!(machine.undo());
        assert!(!machine.undo());
        assert_eq!(machine.history().len(), 3);
        assert!(machine.redo());
        assert!(machine.redo());
        assert!(!machine.redo());
    }

    #[test]
    fn test_forward_move_truncates_redo_tail() {
        let mut history = GameHistory::new();
        let mut board = Board::new();
        board.place(0, Mark::X);
        history.push(crate::game::history::HistoryEntry {
            board: board.clone(),
            x_is_next: false,
        });
        board.place(4, Mark::O);
        history.push(crate::game::history::HistoryEntry {
            board,
            x_is_next: true,
        });

        history.undo();
        history.undo();
        let mut replacement = Board::new();
        replacement.place(8, Mark::X);
        history.push(crate::game::history::HistoryEntry {
            board: replacement,
            x_is_next: false,
        });

        // The two rewound entries are gone; the new line of play replaces them.
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.current().board.cell(8), Some(Mark::X));
        assert_eq!(history.current().board.cell(0), None);
    }

    #[test]
    fn test_start_gives_inviter_the_first_turn() {
        let (inviter, joiner) = started_pair();
        assert_eq!(inviter.role(), Role::Inviter);
        assert_eq!(joiner.role(), Role::Joiner);
        assert_eq!(*inviter.phase(), Phase::Active { my_turn: true });
        assert_eq!(*joiner.phase(), Phase::Active { my_turn: false });
    }

    #[test]
    fn test_moves_alternate_and_marks_follow_turn_order() {
        let (mut inviter, mut joiner) = started_pair();

        play_pair(&mut inviter, &mut joiner, 0);
        assert_eq!(*inviter.phase(), Phase::Active { my_turn: false });
        assert_eq!(*joiner.phase(), Phase::Active { my_turn: true });
        assert_eq!(inviter.history().current().board.cell(0), Some(Mark::X));

        play_pair(&mut joiner, &mut inviter, 4);
        assert_eq!(joiner.history().current().board.cell(4), Some(Mark::O));
        assert_eq!(inviter.history(), joiner.history());
    }

    #[test]
    fn test_play_out_of_turn_is_refused() {
        let (mut inviter, mut joiner) = started_pair();
        assert_eq!(joiner.play(0), Err(GameError::NotYourTurn));
        inviter.play(0).unwrap();
        assert_eq!(inviter.play(1), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_play_on_occupied_or_out_of_range_cell_is_refused() {
        let (mut inviter, mut joiner) = started_pair();
        play_pair(&mut inviter, &mut joiner, 0);
        assert_eq!(joiner.play(0), Err(GameError::CellOccupied));
        assert_eq!(joiner.play(9), Err(GameError::OutOfRange));
    }

    #[test]
    fn test_play_before_start_is_refused() {
        let mut machine = GameMachine::new(Role::Inviter);
        assert_eq!(machine.play(0), Err(GameError::NotActive));
        machine.ready();
        assert_eq!(*machine.phase(), Phase::WaitingForPeer);
        assert_eq!(machine.play(0), Err(GameError::NotActive));
    }

    #[test]
    fn test_winning_line_ends_the_game_on_both_sides() {
        let (mut inviter, mut joiner) = started_pair();
        play_pair(&mut inviter, &mut joiner, 0);
        play_pair(&mut joiner, &mut inviter, 3);
        play_pair(&mut inviter, &mut joiner, 1);
        play_pair(&mut joiner, &mut inviter, 4);
        play_pair(&mut inviter, &mut joiner, 2); // X takes the top row

        assert_eq!(*inviter.phase(), Phase::Over);
        assert_eq!(*joiner.phase(), Phase::Over);
        assert_eq!(
            inviter.history().current().board.winner(),
            Some((Mark::X, [0, 1, 2]))
        );
        assert_eq!(joiner.play(5), Err(GameError::NotActive));
    }

    #[test]
    fn test_new_game_round_trip_resets_both_histories() {
        let (mut inviter, mut joiner) = started_pair();
        play_pair(&mut inviter, &mut joiner, 0);
        play_pair(&mut joiner, &mut inviter, 4);

        // The joiner asks for a fresh game; the relay carries one NewGame.
        joiner.new_game().unwrap();
        inviter.apply_remote_new_game().unwrap();

        for machine in [&inviter, &joiner] {
            assert_eq!(machine.history().len(), 1);
            assert!(machine.history().current().x_is_next);
            assert!((0..9).all(|cell| machine.history().current().board.cell(cell).is_none()));
        }
        // The initiator moves first in the fresh game.
        assert_eq!(*joiner.phase(), Phase::Active { my_turn: true });
        assert_eq!(*inviter.phase(), Phase::Active { my_turn: false });
    }

    #[test]
    fn test_new_game_before_any_move_is_refused() {
        let (mut inviter, _joiner) = started_pair();
        assert_eq!(inviter.new_game(), Err(GameError::NothingToReset));
    }

    #[test]
    fn test_peer_left_is_terminal() {
        let (mut inviter, mut joiner) = started_pair();
        play_pair(&mut inviter, &mut joiner, 0);

        inviter.peer_left();
        assert_eq!(*inviter.phase(), Phase::Closed);
        assert_eq!(inviter.play(1), Err(GameError::SessionClosed));
        assert_eq!(inviter.new_game(), Err(GameError::SessionClosed));
        assert_eq!(inviter.apply_remote_play(1), Err(GameError::SessionClosed));
    }

    #[test]
    fn test_join_path_round_trip() {
        let id = Uuid::new_v4();
        let path = format_join_path(&id);
        assert!(path.starts_with("/join/:"));
        assert_eq!(parse_join_path(&path), Some(id.simple().to_string()));
    }

    #[test]
    fn test_path_without_invite_segment_means_inviter_role() {
        assert_eq!(parse_join_path("/"), None);
        assert_eq!(parse_join_path(""), None);
        assert_eq!(parse_join_path("/join/:"), None);
        assert_eq!(parse_join_path("/stats"), None);
    }

    #[test]
    fn test_join_path_is_percent_decoded() {
        assert_eq!(
            parse_join_path("/join/:abc%20def"),
            Some("abc def".to_string())
        );
    }
}
