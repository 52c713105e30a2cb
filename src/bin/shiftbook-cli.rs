#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use shiftbook::{
    directory::{fetch_or_empty, JsonDirectory},
    engine::Engine,
    io,
    model::ShiftId,
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de réservation de shifts (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du board
    #[arg(long, global = true, default_value = "board.json")]
    board: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Créer un shift
    Add {
        #[arg(long)]
        area: String,
        /// RFC3339 UTC
        #[arg(long)]
        start: String,
        /// RFC3339 UTC
        #[arg(long)]
        end: String,
    },

    /// Importer des shifts depuis un CSV
    Import {
        #[arg(long)]
        csv: String,
    },

    /// Récupérer les shifts d'un annuaire JSON (échec toléré → liste vide)
    Fetch {
        #[arg(long)]
        from: String,
    },

    /// Lister les shifts disponibles, groupés par jour
    List {
        /// Zone de service ; absent = toutes les zones
        #[arg(long)]
        area: Option<String>,
    },

    /// Réserver un shift
    Book {
        #[arg(long)]
        shift_id: String,
    },

    /// Annuler une réservation
    Cancel {
        #[arg(long)]
        shift_id: String,
    },

    /// Lister les shifts réservés
    Booked,

    /// Compter les shifts par zone
    Areas,

    /// Exporter le board
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.board)?;
    let mut engine = Engine::new();
    *engine.board_mut() = storage.load_or_default();

    let code = match cli.cmd {
        Commands::Add { area, start, end } => {
            let start = start.parse()?;
            let end = end.parse()?;
            engine.create_shift(&area, start, end)?;
            storage.save(engine.board())?;
            0
        }
        Commands::Import { csv } => {
            let shifts = io::import_shifts_csv(csv)?;
            engine.add_shifts(shifts)?;
            storage.save(engine.board())?;
            0
        }
        Commands::Fetch { from } => {
            let directory = JsonDirectory::open(&from);
            let shifts = fetch_or_empty(&directory);
            if shifts.is_empty() {
                eprintln!("no shifts available from {from}");
            }
            engine.add_shifts(shifts)?;
            storage.save(engine.board())?;
            0
        }
        Commands::List { area } => {
            let filter = area.as_deref().filter(|a| !a.is_empty());
            let available = engine.available(filter);
            for group in engine.group_by_day(&available) {
                println!("{}", group.label);
                for s in &group.shifts {
                    println!(
                        "  {} | {} → {} | {}{}",
                        s.id.as_str(),
                        s.start.format("%H:%M"),
                        s.end.format("%H:%M"),
                        s.area,
                        if s.booked { " | Booked" } else { "" }
                    );
                }
            }
            0
        }
        Commands::Book { shift_id } | Commands::Cancel { shift_id } => {
            let sid = ShiftId::new(shift_id);
            match engine.toggle(&sid) {
                Some(true) => println!("booked {}", sid.as_str()),
                Some(false) => println!("cancelled {}", sid.as_str()),
                None => eprintln!("unknown shift: {} (ignored)", sid.as_str()),
            }
            storage.save(engine.board())?;
            0
        }
        Commands::Booked => {
            let booked = engine.booked_shifts();
            if booked.is_empty() {
                println!("No Booked Shifts");
            } else {
                for s in &booked {
                    println!(
                        "{} | {} → {} | {}",
                        s.id.as_str(),
                        s.start.format("%B %-d, %H:%M"),
                        s.end.format("%H:%M"),
                        s.area
                    );
                }
            }
            0
        }
        Commands::Areas => {
            for (area, count) in engine.count_by_area() {
                println!("{area} ({count})");
            }
            0
        }
        Commands::Export { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_board_json(path, engine.board())?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, engine.board())?;
            }
            0
        }
    };

    std::process::exit(code);
}
