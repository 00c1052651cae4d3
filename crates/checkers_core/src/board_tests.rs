use super::*;

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col).unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(b.count(Player::One), 12);
    assert_eq!(b.count(Player::Two), 12);
    assert_eq!(b.get(cell(0, 0)), Some(Piece::man(Player::One)));
    assert_eq!(b.get(cell(2, 2)), Some(Piece::man(Player::One)));
    assert_eq!(b.get(cell(5, 1)), Some(Piece::man(Player::Two)));
    assert_eq!(b.get(cell(7, 7)), Some(Piece::man(Player::Two)));
    // Light cells and the middle rows stay empty
    assert_eq!(b.get(cell(0, 1)), None);
    for col in 0..8 {
        assert_eq!(b.piece_at(3, col), None);
        assert_eq!(b.piece_at(4, col), None);
    }
}

#[test]
fn test_every_piece_on_dark_cell() {
    let b = Board::startpos();
    for player in [Player::One, Player::Two] {
        assert!(b.pieces(player).all(|(c, _)| c.is_dark()));
    }
}

#[test]
fn test_bounds() {
    assert!(Board::in_bounds(0, 0));
    assert!(Board::in_bounds(7, 7));
    assert!(!Board::in_bounds(-1, 0));
    assert!(!Board::in_bounds(0, 8));
    assert_eq!(Board::startpos().piece_at(-1, -1), None);
    assert_eq!(Board::startpos().piece_at(8, 0), None);
}

#[test]
fn test_diagram_round_trip_of_startpos() {
    let b = Board::startpos();
    let text = b.to_string();
    assert_eq!(text.lines().next(), Some("x.x.x.x."));
    assert_eq!(Board::from_diagram(&text).unwrap(), b);
}

#[test]
fn test_diagram_with_kings_and_spacing() {
    let b = Board::from_diagram(
        "
        X . . . . . . .
        . . . . . . . .
        . . o . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . O
        ",
    )
    .unwrap();
    assert_eq!(b.get(cell(0, 0)), Some(Piece::king(Player::One)));
    assert_eq!(b.get(cell(2, 2)), Some(Piece::man(Player::Two)));
    assert_eq!(b.get(cell(7, 7)), Some(Piece::king(Player::Two)));
    assert_eq!(b.count(Player::One), 1);
}

#[test]
fn test_diagram_errors() {
    let short = "........\n........";
    assert!(matches!(
        Board::from_diagram(short),
        Err(CheckersError::InvalidDiagram { .. })
    ));

    let light = ".x......\n........\n........\n........\n........\n........\n........\n........";
    assert_eq!(
        Board::from_diagram(light),
        Err(CheckersError::PieceOnLightSquare(cell(0, 1)))
    );

    let unknown = "q.......\n........\n........\n........\n........\n........\n........\n........";
    assert!(matches!(
        Board::from_diagram(unknown),
        Err(CheckersError::InvalidDiagram { line: 1, .. })
    ));
}

#[test]
fn test_diagram_accepts_exactly_the_dark_cells() {
    for target in Cell::all() {
        let diagram: String = (0..8)
            .map(|row| {
                (0..8)
                    .map(|col| if cell(row, col) == target { 'x' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        match Board::from_diagram(&diagram) {
            Ok(b) => {
                assert!(CellSet::DARK.contains(target), "accepted light cell {target}");
                assert_eq!(b.get(target), Some(Piece::man(Player::One)));
            }
            Err(e) => {
                assert!(!CellSet::DARK.contains(target), "rejected dark cell {target}");
                assert_eq!(e, CheckersError::PieceOnLightSquare(target));
            }
        }
    }
}

#[test]
fn test_promote_is_idempotent() {
    let mut b = Board::empty();
    b.set(cell(7, 1), Some(Piece::man(Player::One)));
    assert!(b.promote(cell(7, 1)));
    assert_eq!(b.get(cell(7, 1)), Some(Piece::king(Player::One)));

    let before = b.clone();
    assert!(!b.promote(cell(7, 1)));
    assert_eq!(b, before);
}

#[test]
fn test_promote_only_on_own_back_rank() {
    let mut b = Board::empty();
    b.set(cell(0, 0), Some(Piece::man(Player::One)));
    b.set(cell(7, 7), Some(Piece::man(Player::Two)));
    assert!(!b.promote(cell(0, 0)));
    assert!(!b.promote(cell(7, 7)));
    assert!(!b.promote(cell(4, 4)));
}
