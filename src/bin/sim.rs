use blackbox::{random_layout, Cell, GameSession, RayOutcome, BOARD_SIZE, DEFAULT_ATOM_COUNT};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Fire one ray from every valid border cell of a seeded layout and report
/// the outcomes and the resulting score as JSON.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [atoms]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let count: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => DEFAULT_ATOM_COUNT,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let grid = random_layout(&mut rng, count)?;
    let mut session = GameSession::with_grid(grid)?;

    let last = BOARD_SIZE as i8 - 1;
    let mut shots = Vec::new();
    for r in 0..=last {
        for c in 0..=last {
            let cell = Cell::new(r, c);
            if !cell.is_border() || cell.is_corner() {
                continue;
            }
            let shot = session.shoot(r, c)?;
            let kind = match shot.outcome {
                RayOutcome::Absorbed => "absorbed",
                RayOutcome::Reflected => "reflected",
                RayOutcome::Exited(_) => "exited",
            };
            shots.push(json!({ "entry": shot.entry, "outcome": kind, "exit": shot.exit() }));
        }
    }

    let atoms: Vec<Cell> = session.atoms().iter().collect();
    let result = json!({
        "seed": seed,
        "atoms": atoms,
        "shots": shots,
        "hits": session.hits().len(),
        "reflections": session.reflections().len(),
        "deflections": session.deflections().len(),
        "score": session.score(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
