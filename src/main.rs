use tracing_subscriber::EnvFilter;
use volcado_echo::build_info;
use volcado_echo::cli::{self, Command};
use volcado_echo::{Config, StoreError};

fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), StoreError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match cli::parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'volcado-echo --help' for usage.");
            std::process::exit(1);
        }
    };

    match command {
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Command::Help => {
            println!("{}", cli::HELP);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::from_env();
    init_logging(&config);

    let mut tracker = config.open_tracker()?;
    tracing::debug!("Using progress file {}", config.progress_path().display());

    match command {
        Command::Status => print!("{}", cli::render_status(&tracker)),
        Command::List => print!("{}", cli::render_list(&tracker)),
        Command::Records => print!("{}", cli::render_records(&tracker.records())),
        Command::Record(event) => {
            let unlocked = tracker.record_event(&event);
            print!("{}", cli::render_unlocks(&unlocked));
            println!(
                "Achievements: {}/{}",
                tracker.unlocked_count(),
                tracker.total_count()
            );
        }
        Command::Unlock(id) => {
            let unlocked = tracker.unlock(id);
            print!("{}", cli::render_unlocks(&unlocked));
        }
        Command::Reset => {
            tracker.reset_progress();
            println!("Progress reset.");
        }
        // Answered before the store was opened
        Command::Version | Command::Help => {}
    }

    tracker.flush()
}
