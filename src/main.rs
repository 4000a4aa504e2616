use ccl_lang::cli::{self, CliError, Mode, TranslateOptions};
use clap::{Args, Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "ccl")]
#[command(about = "ccl - Translate criteria symbol streams into postfix notation")]
#[command(version)]
struct Cli {
    /// Log parser decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// JSON symbol array (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Print comma separated text instead of JSON
    #[arg(long, conflicts_with = "pretty")]
    text: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Group comparisons and reorder into postfix notation
    Postfix(InputArgs),

    /// Only group comparisons into expressions
    Group(InputArgs),

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'ccl docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Postfix(args) => run_translate(args, Mode::Postfix),
        Commands::Group(args) => run_translate(args, Mode::Group),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_translate(args: InputArgs, mode: Mode) -> Result<(), CliError> {
    let input = match args.input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = TranslateOptions { input, mode };
    let result = cli::execute_translate(&options)?;

    if args.text {
        println!("{}", result.to_text());
    } else {
        let output = result.to_json()?;
        let json = if args.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        }?;
        println!("{}", json);
    }
    Ok(())
}
