#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use blackbox::{
    init_logging, parse_layout, random_layout, run_terminal, trace, Cell, GameSession, Grid,
    InMemoryTransport, RayOutcome, Skeleton, Stub, DEFAULT_ATOM_COUNT,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Find the hidden atoms by firing rays into the box", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal against a random layout.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible layout (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_ATOM_COUNT, help = "Number of hidden atoms")]
        atoms: usize,
    },
    /// Fire a single ray into a given layout and print the outcome as JSON.
    Trace {
        #[arg(long, help = "Atom layout as row,col;row,col;...")]
        atoms: String,
        row: i8,
        col: i8,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, atoms } => {
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (layout will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let grid = random_layout(&mut rng, atoms).map_err(|e| anyhow::anyhow!(e))?;
            let session = GameSession::with_grid(grid).map_err(|e| anyhow::anyhow!(e))?;
            println!("{} atoms are hidden in the box.", atoms);

            let (host_side, client_side) = InMemoryTransport::pair();
            let host = tokio::spawn(async move {
                let mut skeleton = Skeleton::new(session, host_side);
                skeleton.run().await?;
                Ok::<GameSession, anyhow::Error>(skeleton.into_engine())
            });

            let mut stub = Stub::new(client_side);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let status = run_terminal(&mut stub, stdin.lock(), &mut stdout).await?;
            drop(stub);

            let finished = host.await??;
            println!("Final status: {:?}, score {}", status, finished.score());
            println!("Atoms:\n{}", finished.grid());
        }
        Commands::Trace { atoms, row, col } => {
            let cells = parse_layout(&atoms)?;
            let grid = Grid::new(cells).map_err(|e| anyhow::anyhow!(e))?;
            let entry = Cell::new(row, col);
            let result = match trace(&grid, entry) {
                Ok(outcome) => {
                    let kind = match outcome {
                        RayOutcome::Absorbed => "absorbed",
                        RayOutcome::Reflected => "reflected",
                        RayOutcome::Exited(_) => "exited",
                    };
                    serde_json::json!({
                        "entry": entry,
                        "outcome": kind,
                        "exit": outcome.exit(entry),
                    })
                }
                Err(e) => serde_json::json!({
                    "entry": entry,
                    "outcome": "invalid",
                    "error": e.to_string(),
                }),
            };
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}
