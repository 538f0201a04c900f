use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser)]
#[command(name = "glimmer-cli", version, about = "Glimmer compliment widget CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one compliment
    Show(commands::show::ShowArgs),
    /// Run the widget loop (renders periodically, reads events on stdin)
    Run(commands::run::RunArgs),
    /// Compose a greeting for recognized identifiers
    Greet(commands::greet::GreetArgs),
    /// Map a weather icon code to its category
    Weather {
        /// Provider icon code (e.g. "10d")
        icon: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn init_tracing() {
    let level = std::env::var("GLIMMER_LOG")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Greet(args) => commands::greet::run(args),
        Commands::Weather { icon } => commands::weather::run(&icon),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "glimmer-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
