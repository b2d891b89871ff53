//! Properties of the evaluator and the minimax search

use noughts::{
    search::{WIN_SCORE, best_move, score_moves},
    tictactoe::{Board, Cell, Mark, Outcome, WINNING_LINES, evaluate, evaluate_with_line},
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

/// Worst outcome for `automated` over every reply the other side can make.
fn worst_result(b: Board, to_move: Mark, automated: Mark) -> Outcome {
    let outcome = evaluate(&b);
    if outcome.is_terminal() {
        return outcome;
    }
    if to_move == automated {
        let pos = best_move(&b, automated).unwrap();
        let next = b.place(pos, automated).unwrap();
        return worst_result(next, to_move.opponent(), automated);
    }
    let mut worst = Outcome::Win(automated);
    for pos in b.empty_positions() {
        let next = b.place(pos, to_move).unwrap();
        let result = worst_result(next, to_move.opponent(), automated);
        match result {
            Outcome::Win(mark) if mark != automated => return result,
            Outcome::Draw => worst = Outcome::Draw,
            _ => {}
        }
    }
    worst
}

mod evaluator {
    use super::*;

    #[test]
    fn every_line_is_detected_for_both_marks() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells = [Cell::Empty; 9];
                for idx in line.cells {
                    cells[idx] = mark.to_cell();
                }
                // One opposing mark off the line does not change the result
                let stray = (0..9).find(|i| !line.cells.contains(i)).unwrap();
                cells[stray] = mark.opponent().to_cell();

                let eval = evaluate_with_line(&Board::from_cells(cells));
                assert_eq!(eval.outcome, Outcome::Win(mark), "line {:?}", line.cells);
                assert_eq!(eval.line, Some(line));
            }
        }
    }

    #[test]
    fn full_boards_without_a_line_are_draws() {
        for s in ["XOXXOOOXX", "XXOOOXXOX", "OXOXXOXOX"] {
            assert_eq!(evaluate(&board(s)), Outcome::Draw, "{s}");
        }
    }

    #[test]
    fn open_boards_without_a_line_are_in_progress() {
        for s in [".........", "X........", "XX.OO....", "XOXXOOOX."] {
            assert_eq!(evaluate(&board(s)), Outcome::InProgress, "{s}");
        }
    }

    /// Checks all 3^9 cell assignments against a direct reading of the rules.
    #[test]
    fn agrees_with_rules_on_every_board() {
        for code in 0..3usize.pow(9) {
            let mut cells = [Cell::Empty; 9];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = match rest % 3 {
                    0 => Cell::Empty,
                    1 => Cell::X,
                    _ => Cell::O,
                };
                rest /= 3;
            }
            let b = Board::from_cells(cells);

            let x_line = WINNING_LINES
                .iter()
                .any(|l| l.cells.iter().all(|&i| cells[i] == Cell::X));
            let o_line = WINNING_LINES
                .iter()
                .any(|l| l.cells.iter().all(|&i| cells[i] == Cell::O));

            match evaluate(&b) {
                Outcome::Win(Mark::X) => assert!(x_line, "{}", b.encode()),
                Outcome::Win(Mark::O) => assert!(o_line, "{}", b.encode()),
                Outcome::Draw => assert!(!x_line && !o_line && b.is_full(), "{}", b.encode()),
                Outcome::InProgress => {
                    assert!(!x_line && !o_line && !b.is_full(), "{}", b.encode())
                }
            }
        }
    }
}

mod search {
    use super::*;

    #[test]
    fn completes_top_row_instead_of_defending() {
        // XX.
        // OO.
        // ...
        assert_eq!(best_move(&board("XX.OO...."), Mark::X), Some(2));
    }

    #[test]
    fn nested_forced_sequence() {
        // XOX
        // OXO
        // ..O
        let b = board("XOXOXO..O");

        // X wins outright on the anti-diagonal
        let x_choice = best_move(&b, Mark::X).unwrap();
        assert_eq!(x_choice, 6);
        assert_eq!(
            evaluate(&b.place(6, Mark::X).unwrap()),
            Outcome::Win(Mark::X)
        );

        // O has no win and must take 6 away from X
        let o_choice = best_move(&b, Mark::O).unwrap();
        assert_eq!(o_choice, 6);
        let blocked = b.place(6, Mark::O).unwrap().place(7, Mark::X).unwrap();
        assert_eq!(evaluate(&blocked), Outcome::Draw);
        let careless = b.place(7, Mark::O).unwrap().place(6, Mark::X).unwrap();
        assert_eq!(evaluate(&careless), Outcome::Win(Mark::X));
    }

    /// With a win in one on the board the chosen move keeps a forced win.
    ///
    /// Scores carry no depth, so a lower-index move that wins later ties
    /// with the immediate win and is preferred.
    #[test]
    fn win_in_one_keeps_a_forced_win() {
        for line in WINNING_LINES {
            for missing in line.cells {
                let mut cells = [Cell::Empty; 9];
                for idx in line.cells.into_iter().filter(|&i| i != missing) {
                    cells[idx] = Cell::X;
                }
                for idx in (0..9).filter(|i| !line.cells.contains(i)).take(2) {
                    cells[idx] = Cell::O;
                }
                let b = Board::from_cells(cells);

                let choice = best_move(&b, Mark::X).unwrap();
                let scores = score_moves(&b, Mark::X);
                let chosen = scores.iter().find(|m| m.position == choice).unwrap();
                assert_eq!(chosen.score, WIN_SCORE, "board {}", b.encode());

                let after = b.place(choice, Mark::X).unwrap();
                assert_eq!(
                    worst_result(after, Mark::O, Mark::X),
                    Outcome::Win(Mark::X),
                    "board {} chose {choice}",
                    b.encode()
                );
            }
        }
    }

    #[test]
    fn double_threat_ties_with_immediate_win() {
        // OO.
        // .XX
        // ...   3 wins now; 2 also forces a win by opening three threats
        let b = board("OO..XX...");
        assert_eq!(b.winning_moves(Mark::X), vec![3]);

        let scores = score_moves(&b, Mark::X);
        let top: Vec<_> = scores
            .iter()
            .filter(|m| m.score == WIN_SCORE)
            .map(|m| m.position)
            .collect();
        assert_eq!(top, vec![2, 3]);
        assert_eq!(best_move(&b, Mark::X), Some(2));

        let after = b.place(2, Mark::X).unwrap();
        assert_eq!(evaluate(&after), Outcome::InProgress);
        assert_eq!(after.winning_moves(Mark::X), vec![3, 6, 8]);
        let result = worst_result(after, Mark::O, Mark::X);
        assert_eq!(result, Outcome::Win(Mark::X));
    }

    #[test]
    fn full_board_has_no_move() {
        for s in ["XOXXOOOXX", "XXXOOXXOO"] {
            assert_eq!(best_move(&board(s), Mark::X), None);
            assert_eq!(best_move(&board(s), Mark::O), None);
        }
    }

    #[test]
    fn repeated_calls_agree() {
        for s in [".........", "X...O....", "XO..X....", "XOXOXO..O"] {
            let b = board(s);
            for mark in [Mark::X, Mark::O] {
                assert_eq!(best_move(&b, mark), best_move(&b, mark), "{s}");
            }
        }
    }

    #[test]
    fn board_is_not_modified() {
        let b = board("X...O....");
        let copy = b;
        let _ = best_move(&b, Mark::X);
        assert_eq!(b, copy);
    }
}

mod self_play {
    use super::*;

    fn play_out(first: Mark) -> Outcome {
        let mut b = Board::new();
        let mut mark = first;
        while !evaluate(&b).is_terminal() {
            let pos = best_move(&b, mark).expect("open board has a move");
            b = b.place(pos, mark).unwrap();
            mark = mark.opponent();
        }
        evaluate(&b)
    }

    #[test]
    fn optimal_against_itself_draws() {
        assert_eq!(play_out(Mark::X), Outcome::Draw);
        assert_eq!(play_out(Mark::O), Outcome::Draw);
    }

    #[test]
    fn never_loses_moving_second() {
        let result = worst_result(Board::new(), Mark::X, Mark::O);
        assert_ne!(result, Outcome::Win(Mark::X));
    }

    #[test]
    fn never_loses_moving_first() {
        let result = worst_result(Board::new(), Mark::X, Mark::X);
        assert_ne!(result, Outcome::Win(Mark::O));
    }
}
