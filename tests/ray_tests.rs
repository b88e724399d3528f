use blackbox::{trace, Cell, Grid, RayOutcome, ShotError};

fn grid(cells: &[(i8, i8)]) -> Grid {
    Grid::new(cells.iter().map(|&(r, c)| Cell::new(r, c))).unwrap()
}

fn shoot(g: &Grid, r: i8, c: i8) -> RayOutcome {
    trace(g, Cell::new(r, c)).unwrap()
}

#[test]
fn test_straight_pass_through() {
    let g = grid(&[]);
    assert_eq!(shoot(&g, 0, 5), RayOutcome::Exited(Cell::new(9, 5)));
    assert_eq!(shoot(&g, 5, 0), RayOutcome::Exited(Cell::new(5, 9)));
    assert_eq!(shoot(&g, 9, 1), RayOutcome::Exited(Cell::new(0, 1)));
    assert_eq!(shoot(&g, 8, 9), RayOutcome::Exited(Cell::new(8, 0)));
}

#[test]
fn test_absorbed_from_every_side() {
    let g = grid(&[(5, 5)]);
    for &(r, c) in &[(0, 5), (9, 5), (5, 0), (5, 9)] {
        assert_eq!(shoot(&g, r, c), RayOutcome::Absorbed, "from ({}, {})", r, c);
    }
}

#[test]
fn test_atom_on_first_interior_cell_absorbs() {
    let g = grid(&[(1, 5)]);
    assert_eq!(shoot(&g, 0, 5), RayOutcome::Absorbed);
}

#[test]
fn test_immediate_reflection() {
    let g = grid(&[(1, 6)]);
    assert_eq!(shoot(&g, 0, 5), RayOutcome::Reflected);
    let g = grid(&[(1, 4)]);
    assert_eq!(shoot(&g, 0, 5), RayOutcome::Reflected);
}

#[test]
fn test_double_deflection_on_entry() {
    let g = grid(&[(1, 4), (1, 6)]);
    assert_eq!(shoot(&g, 0, 5), RayOutcome::Reflected);
}

#[test]
fn test_double_deflection_inside() {
    let g = grid(&[(3, 4), (3, 6)]);
    assert_eq!(shoot(&g, 0, 5), RayOutcome::Reflected);
}

#[test]
fn test_single_deflection_turns_away() {
    let g = grid(&[(3, 6)]);
    assert_eq!(shoot(&g, 0, 5), RayOutcome::Exited(Cell::new(2, 0)));
    assert_eq!(shoot(&g, 2, 0), RayOutcome::Exited(Cell::new(0, 5)));
}

#[test]
fn test_trapped_ray_comes_back_out() {
    let g = grid(&[(6, 1), (7, 7), (8, 3), (8, 4)]);
    assert_eq!(shoot(&g, 0, 3), RayOutcome::Reflected);
}

#[test]
fn test_invalid_origins() {
    let g = grid(&[(5, 5)]);
    assert_eq!(
        trace(&g, Cell::new(0, 0)),
        Err(ShotError::Corner(Cell::new(0, 0)))
    );
    assert_eq!(
        trace(&g, Cell::new(9, 9)),
        Err(ShotError::Corner(Cell::new(9, 9)))
    );
    assert_eq!(
        trace(&g, Cell::new(3, 3)),
        Err(ShotError::NotBorder(Cell::new(3, 3)))
    );
    assert_eq!(
        trace(&g, Cell::new(-1, 3)),
        Err(ShotError::OutOfBounds(Cell::new(-1, 3)))
    );
}
