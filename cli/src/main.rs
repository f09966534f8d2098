mod error_formatter;
mod formatter;
mod interactive;
mod server;

use abacus::evaluator::context::{DEFAULT_PRECISION, MAX_PRECISION};
use abacus::{Engine, NumericContext, ResourceLimits};
use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "Exact decimal arithmetic for human-written expressions.")]
#[command(
    long_about = "Abacus evaluates infix arithmetic with 20 significant digits of decimal precision.\nThe CLI evaluates a single expression, runs an interactive calculator, or serves evaluations over HTTP."
)]
#[command(version)]
struct Cli {
    /// Significant digits kept after every operation (1-100)
    #[arg(long, global = true, default_value_t = DEFAULT_PRECISION,
          value_parser = clap::value_parser!(u64).range(1..=MAX_PRECISION))]
    precision: u64,
    /// Deepest parenthesis nesting accepted
    #[arg(long = "max-depth", global = true, default_value_t = 256)]
    max_depth: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one expression and print the result
    ///
    /// Examples:
    ///   abacus eval "3+4*2"
    ///   abacus eval "200*10%" --explain
    ///   abacus eval "sqrt(2)" --raw
    Eval {
        /// The expression to evaluate (quote it to keep the shell away from * and %)
        expression: String,
        /// Output the value only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
        /// Also show the RPN form the expression was reduced to
        #[arg(short = 'e', long)]
        explain: bool,
    },
    /// Start an interactive calculator
    ///
    /// Each line is evaluated as it is entered. Commands: :history, :clear, :quit
    Repl,
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: POST /evaluate with {"expression": "..."}
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Commands::Server { .. }));

    let engine = Engine::with_settings(
        NumericContext::with_precision(cli.precision),
        ResourceLimits {
            max_nesting_depth: cli.max_depth,
            ..ResourceLimits::default()
        },
    );

    let result = match &cli.command {
        Commands::Eval {
            expression,
            raw,
            explain,
        } => eval_command(&engine, expression, *raw, *explain),
        Commands::Repl => interactive::run_repl(&engine),
        Commands::Server { host, port } => server_command(engine, host, *port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(server: bool) {
    let default_filter = if server {
        "abacus=info,tower_http=info"
    } else {
        "abacus=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn eval_command(engine: &Engine, expression: &str, raw: bool, explain: bool) -> Result<()> {
    match engine.explain(expression) {
        Ok(response) => {
            let formatter = Formatter::default();
            print!("{}", formatter.format_response(&response, raw, explain));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", error_formatter::format_error(&e, expression));
            std::process::exit(1);
        }
    }
}

fn server_command(engine: Engine, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            println!(
                "Starting HTTP server with precision {}",
                engine.context().precision()
            );
            server::http::start_server(engine, host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (engine, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}
