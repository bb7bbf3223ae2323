mod human;
mod recording;

use std::path::{Path, PathBuf};

use clap::Parser;
use maumau::{Event, Game, GreedyStrategy, PackCatalog, Seat, Strategy, TurnOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::human::HumanStrategy;
use crate::recording::Recorder;

#[derive(Parser)]
struct Args {
    /// Names of the players, in seating order
    #[clap(num_args(2..), value_delimiter = ' ', default_values = ["Jan", "Alpha", "Beta", "Gamma"])]
    players: Vec<String>,

    /// The seat played interactively; all others are automated
    #[arg(short, long)]
    protagonist: Option<String>,

    /// Path to a JSON pack file with "faces" and "ranks" lists
    #[arg(long)]
    pack: Option<PathBuf>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record the match's events as a JSON file at this path
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let catalog = match &args.pack {
        Some(path) => load_pack(path)?,
        None => PackCatalog::french_32(),
    };

    if let Some(name) = &args.protagonist {
        if !args.players.iter().any(|player| player == name) {
            anyhow::bail!("Protagonist '{}' is not among the players", name);
        }
    }

    let seats: Vec<Seat> = args
        .players
        .iter()
        .map(|name| {
            let strategy: Box<dyn Strategy> = if args.protagonist.as_deref() == Some(name.as_str())
            {
                Box::new(HumanStrategy::new())
            } else {
                Box::new(GreedyStrategy::new(StdRng::seed_from_u64(rng.gen())))
            };
            Seat::new(name.clone(), strategy)
        })
        .collect();

    let mut game = Game::new(&catalog, seats, rng)?;

    let mut recorder = match &args.record {
        Some(path) => Some(Recorder::new(path.clone())?),
        None => None,
    };

    info!("Table: {}", game.table().top().expect("table was dealt a card"));
    let ranking = loop {
        let outcome = game.take_turn()?;
        for event in game.events() {
            report(&event);
            if let Some(recorder) = &mut recorder {
                recorder.store(event);
            }
        }
        if let TurnOutcome::MatchOver { ranking } = outcome {
            break ranking;
        }
    };

    if let Some(recorder) = &recorder {
        recorder.write()?;
    }

    println!("Game over!\nScore board:");
    for (place, name) in ranking.iter().enumerate() {
        println!("{}.: {}", place + 1, name);
    }

    Ok(())
}

fn load_pack(path: &Path) -> anyhow::Result<PackCatalog> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn report(event: &Event) {
    match event {
        Event::CardsDrawn {
            player,
            count: 1,
            hand_size,
        } => info!("{} drew a card, and has {} cards left", player, hand_size),
        Event::CardsDrawn {
            player,
            count,
            hand_size,
        } => info!(
            "{} drew {} cards, and has {} cards left",
            player, count, hand_size
        ),
        Event::CardPlayed {
            player,
            card,
            hand_size,
        } => info!("{} played {}, and has {} cards left", player, card, hand_size),
        Event::PlayerSkipped { player, hand_size } => info!(
            "{} is skipped due to card, and has {} cards left",
            player, hand_size
        ),
        Event::DeckReplenished { count } => info!("Deck was replenished with {} cards", count),
        Event::DeckExhausted => warn!("No cards left to replenish the deck with"),
        Event::FaceChosen { player, face } => {
            info!("{} chose {} as the next face", player, face)
        }
        Event::PlayerFinished { player, .. } => info!("{} finished!", player),
        Event::MatchOver { .. } => {}
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
