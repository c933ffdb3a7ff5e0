//! fontpair CLI (made by FontLab https://www.fontlab.com/)

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use regex::Regex;
use tracing::{debug, info, Level};

use fontpair_core::classify::classify;
use fontpair_core::database::{FontDatabase, FontMetadata, GenrePairing};
use fontpair_core::output::{write_database, write_json_pretty, write_ndjson, DEFAULT_OUTPUT_PATH};
use fontpair_core::taxonomy::CuratedCategory;

/// CLI entrypoint for fontpair.
#[derive(Debug, Parser)]
#[command(
    name = "fontpair",
    version,
    about = "Curated font pairing database builder (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Emit debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the database and write it (the default when no command is given)
    Build(BuildArgs),
    /// Print the category the classifier assigns to each name
    Classify(ClassifyArgs),
    /// List curated fonts with their metadata
    Fonts(FontsArgs),
    /// Show the recommended pairings for a genre
    Pairs(PairsArgs),
}

#[derive(Debug, Args, Default)]
struct BuildArgs {
    /// Where to write the database
    #[arg(short = 'o', long = "output", value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Print the JSON document to stdout instead of writing a file
    #[arg(long = "stdout", action = ArgAction::SetTrue, conflicts_with = "output")]
    stdout: bool,
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    /// Font display names
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Debug, Args)]
struct FontsArgs {
    /// Only list fonts curated for this role (e.g. serif_body)
    #[arg(short = 'c', long = "category")]
    category: Option<CuratedCategory>,

    /// Regex patterns that must match the font name
    #[arg(short = 'n', long = "name", value_hint = ValueHint::Other)]
    name_patterns: Vec<String>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct PairsArgs {
    /// Genre tag (unknown genres fall back to fiction)
    genre: String,

    /// Read a previously written database instead of building one
    #[arg(long = "db", value_hint = ValueHint::FilePath)]
    db: Option<PathBuf>,

    /// Emit the pairings as a JSON array
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        None => run_build(BuildArgs::default(), &mut handle),
        Some(Command::Build(args)) => run_build(args, &mut handle),
        Some(Command::Classify(args)) => run_classify(&args, &mut handle),
        Some(Command::Fonts(args)) => {
            let use_color = match args.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => handle.is_terminal(),
            };
            run_fonts(&args, &mut handle, use_color)
        }
        Some(Command::Pairs(args)) => run_pairs(&args, &mut handle),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {err}"))
}

fn run_build(args: BuildArgs, mut w: impl Write) -> Result<()> {
    info!("building font database");
    let db = FontDatabase::builtin().context("built-in font taxonomy is malformed")?;

    if args.stdout {
        write_json_pretty(&db, &mut w)?;
        writeln!(w)?;
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    write_database(&db, &path)?;
    write_summary(&db, &path, w)
}

fn write_summary(db: &FontDatabase, path: &Path, mut w: impl Write) -> Result<()> {
    writeln!(w, "Database created: {}", path.display())?;
    writeln!(w, "{}", db.summary())?;
    Ok(())
}

fn run_classify(args: &ClassifyArgs, mut w: impl Write) -> Result<()> {
    for name in &args.names {
        writeln!(w, "{name}\t{}", classify(name))?;
    }
    Ok(())
}

fn run_fonts(args: &FontsArgs, mut w: impl Write, color: bool) -> Result<()> {
    let db = FontDatabase::builtin().context("built-in font taxonomy is malformed")?;
    let patterns = compile_patterns(&args.name_patterns)?;
    let fonts = select_fonts(&db, args.category, &patterns);
    debug!(count = fonts.len(), "selected fonts");

    if args.ndjson {
        write_ndjson(&fonts, &mut w)?;
    } else if args.json {
        write_json_pretty(&fonts, &mut w)?;
        writeln!(w)?;
    } else if args.columns {
        write_columns(&db, &fonts, &mut w, color)?;
    } else {
        write_plain(&fonts, &mut w, color)?;
    }
    Ok(())
}

fn run_pairs(args: &PairsArgs, mut w: impl Write) -> Result<()> {
    let db = match &args.db {
        Some(path) => FontDatabase::load(path)?,
        None => FontDatabase::builtin().context("built-in font taxonomy is malformed")?,
    };

    if !db.genres().any(|g| g == args.genre) {
        debug!(genre = %args.genre, "unknown genre, using fallback pairings");
    }
    let pairs = db.pairings_for(&args.genre);

    if args.json {
        write_json_pretty(pairs, &mut w)?;
        writeln!(w)?;
    } else {
        write_pairs(pairs, &mut w)?;
    }
    Ok(())
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid regex: {p}")))
        .collect()
}

/// Metadata for fonts in `category` (all curated fonts when `None`), in
/// curation order for a category and name order otherwise.
fn select_fonts(
    db: &FontDatabase,
    category: Option<CuratedCategory>,
    patterns: &[Regex],
) -> Vec<FontMetadata> {
    let names: Vec<&str> = match category {
        Some(cat) => db.fonts_in(cat).iter().map(String::as_str).collect(),
        None => db.font_metadata.keys().map(String::as_str).collect(),
    };

    names
        .into_iter()
        .filter(|name| patterns.is_empty() || patterns.iter().any(|re| re.is_match(name)))
        .filter_map(|name| db.metadata(name).cloned())
        .collect()
}

fn write_plain(fonts: &[FontMetadata], mut w: impl Write, color: bool) -> Result<()> {
    for font in fonts {
        let rendered = apply_color(&font.name, color, AnsiColor::Cyan);
        writeln!(w, "{rendered}\t{}", font.category)?;
    }
    Ok(())
}

fn write_columns(db: &FontDatabase, fonts: &[FontMetadata], mut w: impl Write, color: bool) -> Result<()> {
    let rows: Vec<(String, String, String)> = fonts
        .iter()
        .map(|font| {
            let roles: Vec<&str> = CuratedCategory::ALL
                .into_iter()
                .filter(|cat| db.fonts_in(*cat).iter().any(|f| f == &font.name))
                .map(CuratedCategory::as_str)
                .collect();
            (font.name.clone(), font.category.to_string(), roles.join(","))
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).clamp(0, 80);
    let category_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);

    for (name, category, roles) in rows {
        let padded_name = format!("{:<name_width$}", name);
        let padded_category = format!("{:<category_width$}", category);
        let rendered_name = apply_color(&padded_name, color, AnsiColor::Cyan);
        let rendered_category = apply_color(&padded_category, color, AnsiColor::Yellow);
        let rendered_roles = apply_color(&roles, color, AnsiColor::Green);

        writeln!(w, "{rendered_name}  {rendered_category}  {rendered_roles}")?;
    }

    Ok(())
}

fn write_pairs(pairs: &[GenrePairing], mut w: impl Write) -> Result<()> {
    for (rank, pair) in pairs.iter().enumerate() {
        write!(w, "{}. {} / {}", rank + 1, pair.body, pair.heading)?;
        if let Some(mono) = &pair.mono {
            write!(w, " / {mono}")?;
        }
        writeln!(w, " [{}] {}", pair.mood, pair.rationale)?;
    }
    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
