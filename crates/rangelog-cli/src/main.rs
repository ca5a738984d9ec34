use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rangelog", version, about = "Rangelog CLI -- golf practice tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log practice sessions (ball striking, putting)
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Short-game testing scorecard
    Test {
        #[command(subcommand)]
        action: commands::test::TestAction,
    },
    /// Interactive drills (wedge ladder, Swedish test)
    Drill {
        #[command(subcommand)]
        action: commands::drill::DrillAction,
    },
    /// Putting tests (lag drill, Luke Donald drill)
    Putting {
        #[command(subcommand)]
        action: commands::putting::PuttingAction,
    },
    /// Three-hole loop rounds
    Loop {
        #[command(subcommand)]
        action: commands::round::LoopAction,
    },
    /// Dashboard statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Season goals
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Drill descriptions
    Drills {
        #[command(subcommand)]
        action: commands::drills::DrillsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RANGELOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { action } => commands::log::run(action),
        Commands::Test { action } => commands::test::run(action),
        Commands::Drill { action } => commands::drill::run(action),
        Commands::Putting { action } => commands::putting::run(action),
        Commands::Loop { action } => commands::round::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Goals { action } => commands::goals::run(action),
        Commands::Drills { action } => commands::drills::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
