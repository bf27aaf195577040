//! coursefinder-nlp CLI: grade and course-interest extraction.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use coursefinder_nlp::config::ParserConfig;
use coursefinder_nlp::grades::GradeScale;
use coursefinder_nlp::parser::{GradeParser, ParseResult};
use coursefinder_nlp::text::normalize;

#[derive(Parser)]
#[command(
    name = "coursefinder-nlp",
    version,
    about = "Extract grades and course interests from student statements"
)]
struct Cli {
    /// Parser configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Course catalog (TOML) merged into the built-in synonyms.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Also recognize BTEC grades (D*, M, P).
    #[arg(long, global = true)]
    extended: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one statement and print the result as JSON.
    Parse {
        /// Statement text (multiple arguments are joined with spaces).
        #[arg(required = true)]
        text: Vec<String>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,

        /// Also print the intermediate normalized and drop-filtered text.
        #[arg(long)]
        explain: bool,
    },

    /// Parse one statement per line and print JSON lines.
    Batch {
        /// Input file, or "-" for stdin.
        #[arg(long)]
        file: PathBuf,
    },

    /// Resolve a subject name to its canonical form.
    Subject {
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Resolve a course name to its canonical form.
    Course {
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Inspect the active synonym table.
    Table {
        #[command(subcommand)]
        action: Option<TableAction>,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Show entry counts (default).
    Stats,
    /// Export the whole table as JSON.
    Export,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ParserConfig::load(path)?,
        None => ParserConfig::default(),
    };
    if cli.catalog.is_some() {
        config.catalog = cli.catalog.clone();
    }
    if cli.extended {
        config.grade_scale = GradeScale::Extended;
    }
    let parser = GradeParser::from_config(&config);

    match cli.command {
        Commands::Parse {
            text,
            pretty,
            explain,
        } => {
            let text = text.join(" ");
            if explain {
                let normalized = normalize(&text);
                println!("normalized: {normalized}");
                println!("filtered:   {}", parser.remove_dropped(&normalized));
            }
            let result = parser.parse(&text);
            println!("{}", to_json(&result, pretty)?);
        }

        Commands::Batch { file } => {
            let content = if file.as_os_str() == "-" {
                std::io::read_to_string(std::io::stdin()).into_diagnostic()?
            } else {
                std::fs::read_to_string(&file).into_diagnostic()?
            };
            let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
            let results = parser.parse_batch(&lines);
            for result in &results {
                println!("{}", to_json(result, false)?);
            }
            tracing::info!(statements = results.len(), "batch complete");
        }

        Commands::Subject { name } => {
            println!("{}", parser.normalize_subject(&name.join(" ")));
        }

        Commands::Course { name } => {
            println!("{}", parser.normalize_course(&name.join(" ")));
        }

        Commands::Table { action } => {
            let table = parser.table();
            match action.unwrap_or(TableAction::Stats) {
                TableAction::Stats => {
                    println!("subjects:         {}", table.subjects().len());
                    println!("courses:          {}", table.courses().len());
                    println!("drop phrases:     {}", table.dropped().len());
                    println!("interest phrases: {}", table.interest().len());
                    println!("none phrases:     {}", table.none().len());
                    println!("grade scale:      {:?}", parser.scale());
                    println!("grade patterns:   {}", parser.strategies().join(", "));
                }
                TableAction::Export => {
                    let json = serde_json::to_string_pretty(table).into_diagnostic()?;
                    println!("{json}");
                }
            }
        }
    }

    Ok(())
}

fn to_json(result: &ParseResult, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(result).into_diagnostic()
    } else {
        serde_json::to_string(result).into_diagnostic()
    }
}
