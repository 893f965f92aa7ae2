use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bookease::commands::{self, book::BookRequest};
use bookease::config::AppConfig;
use bookease::db::{AppointmentRepository, KeyValueStore, MemoryStore, SqliteStore};
use bookease::models::FormData;
use bookease::services::booking::BookingStore;
use bookease::services::validation::DefaultRules;

#[derive(Parser)]
#[command(name = "bookease")]
#[command(about = "Book, list and cancel appointments")]
struct Cli {
    /// Keep appointments in memory for this run instead of the database
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show morning, afternoon and evening slots for a date
    Slots {
        /// Date to inspect (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },
    /// Book an appointment
    Book {
        /// Appointment date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Slot label, e.g. "9:00 AM"
        #[arg(short, long)]
        time: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List booked appointments, newest first
    List {
        /// Only show appointments on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Cancel an upcoming appointment
    Cancel {
        id: String,
    },
    /// Print an .ics calendar entry for an appointment
    Ics {
        id: String,
    },
    /// Print the QR payload and share code for an appointment
    Ticket {
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let backend: Box<dyn KeyValueStore> = if cli.memory {
        tracing::info!("using in-memory storage");
        Box::new(MemoryStore::new())
    } else {
        tracing::debug!(path = %config.database_url, "opening appointment database");
        Box::new(SqliteStore::open(&config.database_url)?)
    };

    let repository = AppointmentRepository::new(backend, config.storage_key.clone());
    let mut store = BookingStore::from_config(repository, &config);
    let today = Local::now().date_naive();

    let output = match cli.command {
        Commands::Slots { date } => commands::slots::run(&store, commands::parse_date(&date)?),
        Commands::Book {
            date,
            time,
            name,
            email,
            phone,
            notes,
        } => {
            let request = BookRequest {
                date: commands::parse_date(&date)?,
                time,
                form: FormData {
                    name,
                    email,
                    phone,
                    notes,
                },
            };
            commands::book::run(&mut store, &DefaultRules::new(), request)?
        }
        Commands::List { date } => {
            let date = date.as_deref().map(commands::parse_date).transpose()?;
            commands::list::run(&store, date, today)
        }
        Commands::Cancel { id } => commands::cancel::run(&mut store, &id, today)?,
        Commands::Ics { id } => commands::export::ics(&store, &config, &id)?,
        Commands::Ticket { id } => commands::export::ticket(&store, &id)?,
    };

    print!("{output}");
    Ok(())
}
