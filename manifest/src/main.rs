//! Command-line listing of the swizzle accessors of `shadevec` vectors.

use clap::{Parser, ValueEnum};
use shadevec_manifest::{Query, entries, parse_spelling, render_json, render_rust, render_text};
use shadevec_swizzle::Spelling;

#[derive(Debug, Parser)]
#[command(name = "shadevec-manifest")]
#[command(about = "List the swizzle accessors of shadevec vectors")]
#[command(version)]
struct Cli {
    /// Number of lanes of the vector
    #[arg(short, long, default_value = "4")]
    width: usize,

    /// Only list swizzles which select this many lanes
    #[arg(short, long)]
    arity: Option<usize>,

    /// Lane names to list swizzles in
    #[arg(short, long, value_enum, default_value_t = SpellingArg::All)]
    spelling: SpellingArg,

    /// Only list swizzles which may be assigned to
    #[arg(long)]
    writable_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SpellingArg {
    #[value(name = "xyzw")]
    PositionLower,
    #[value(name = "XYZW")]
    PositionUpper,
    #[value(name = "rgba")]
    ColorLower,
    #[value(name = "RGBA")]
    ColorUpper,
    #[value(name = "all")]
    All,
}

impl SpellingArg {
    fn spellings(self) -> Vec<Spelling> {
        let name = match self {
            SpellingArg::PositionLower => "xyzw",
            SpellingArg::PositionUpper => "XYZW",
            SpellingArg::ColorLower => "rgba",
            SpellingArg::ColorUpper => "RGBA",
            SpellingArg::All => return Spelling::ALL.to_vec(),
        };
        parse_spelling(name).into_iter().collect()
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One aligned line per swizzle
    Text,
    /// Array of objects with the accessor names of each swizzle
    Json,
    /// The generated accessor methods
    Rust,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG to control the log level, e.g. RUST_LOG=debug.
    // Logs go to stderr so that they never mix with the listing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let mut query = Query::new(cli.width);
    query.arity = cli.arity;
    query.spellings = cli.spelling.spellings();
    query.writable_only = cli.writable_only;

    let output = match cli.format {
        Format::Text => render_text(&entries(&query)?),
        Format::Json => render_json(&entries(&query)?)?,
        Format::Rust => render_rust(&query)?,
    };
    tracing::info!(bytes = output.len(), format = ?cli.format, "writing manifest");
    print!("{output}");

    Ok(())
}
