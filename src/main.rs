use anyhow::Result;
use clap::{Parser, ValueEnum};
use solfarer::game::map;
use solfarer::game::system::{system_json, system_report, SolarSystem};
use solfarer::{ActionRead, Console, Mission};
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(version, about = "Single-player solar system mission simulator", long_about = None)]
struct Cli {
    /// Starting planet for the mission.
    #[arg(long, default_value = "Earth")]
    start: String,

    /// Initial fuel load in kilograms.
    #[arg(long, default_value_t = 10_000)]
    fuel: u64,

    /// Print the system catalog in the given format and exit.
    #[arg(long, value_enum)]
    report: Option<ReportFormat>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let system = SolarSystem::new();

    if let Some(format) = cli.report {
        match format {
            ReportFormat::Text => print!("{}", system_report(&system)),
            ReportFormat::Json => println!("{}", system_json(&system)),
        }
        return Ok(());
    }

    init_tracing();
    let start = system.find(&cli.start)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.print(&map::render(&system, Some(start)))?;
    let mut mission = Mission::with_fuel(system, start, cli.fuel);

    loop {
        console.print(&mission.status())?;
        match console.read_action()? {
            ActionRead::Action('l') => console.print(&mission.log_text())?,
            ActionRead::Action('m') => console.print(&mission.map())?,
            ActionRead::Action('t') => {
                if let Some(destination) = console.read_destination(&mission)? {
                    mission.travel_to(destination);
                }
            }
            ActionRead::Action('s') => mission.scan_planet(),
            ActionRead::Action('q') | ActionRead::Closed => break,
            ActionRead::Action(_) | ActionRead::Blank => {}
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
