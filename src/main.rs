use clap::Parser;
use noteful::cli::{handle_init, handle_serve, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("noteful={level},tower_http={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Init { database } => handle_init(&database),
        Commands::Serve {
            bind,
            database,
            cors_origin,
        } => handle_serve(bind, database, cors_origin),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
