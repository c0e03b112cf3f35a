//! adepdf CLI - parse PDF documents into grounded JSON chunks

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use adepdf::convert::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use adepdf::{convert, AdeClient, Config, ConvertOptions, DocumentSource, JsonFormat};

#[derive(Parser)]
#[command(name = "adepdf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Parse a PDF into grounded content chunks and save them as JSON", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    parse: ParseArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write its chunks to JSON (default)
    Parse(ParseArgs),

    /// Show version information
    Version,
}

#[derive(Args)]
struct ParseArgs {
    /// Input PDF file or http(s) URL
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: String,

    /// Output JSON file (overwritten)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Parsing model identifier [default: ADE_MODEL, then dpt-2-latest]
    #[arg(short, long)]
    model: Option<String>,

    /// Env file to read the API key from (default: nearest .env)
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse(args)) => cmd_parse(args),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_parse(cli.parse),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_parse(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load(args.env_file.as_deref())?;
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }

    let model = args
        .model
        .or_else(|| config.model.clone())
        .unwrap_or_else(|| adepdf::DEFAULT_MODEL.to_string());

    let client = AdeClient::new(&config)?;
    println!("{}", "Client initialized successfully.".green());
    println!("{}: {}", "API key".bold(), config.redacted_api_key());

    let format = if args.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let source = DocumentSource::from_input(&args.input);
    let options = ConvertOptions::new()
        .with_source(source.clone())
        .with_output(&args.output)
        .with_model(&model)
        .with_format(format);
    log::debug!("Convert options: {:?}", options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Parsing {} ({})...", source, model));

    let result = convert(&client, &options);
    pb.finish_and_clear();
    let result = result?;

    println!(
        "✅ JSON saved to {} ({} chunks, {} grounded)",
        result.output.display().to_string().green(),
        result.chunk_count(),
        result.grounded_count()
    );

    if let Some(ref metadata) = result.metadata {
        if let Some(pages) = metadata.page_count {
            println!("  {} {}", "Pages:".dimmed(), pages);
        }
        if let Some(ms) = metadata.duration_ms {
            println!("  {} {:.1}s", "Duration:".dimmed(), ms as f64 / 1000.0);
        }
        if let Some(credits) = metadata.credit_usage {
            println!("  {} {}", "Credits:".dimmed(), credits);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "adepdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF to grounded JSON chunks via LandingAI ADE");
    println!();
    println!("License: MIT");
}
