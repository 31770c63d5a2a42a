use clap::{Parser, ValueEnum};
use log::debug;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use synbox::bracket::BracketParser;
use synbox::layout::{Layout, LayoutConfig};
use synbox::render::{self, HtmlOptions};
use synbox::SynboxError;

/// Labels drawn above the words when neither `--high-level` nor `--config` is given
const DEFAULT_HIGH_LEVEL_LABELS: &[&str] = &["SN_Sujeto", "SV_Predicado"];

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Full HTML document
    Html,
    /// HTML table with embedded style only
    Fragment,
    /// Layout rows as JSON
    Json,
    /// Outline of the parsed tree
    Tree,
}

#[derive(Parser, Debug)]
#[command(name = "synbox", version, about = "Lay out a bracket-notation constituency tree as a table of words and brackets")]
struct Cli {
    /// File with the tree in bracket notation; `-` or none reads stdin
    input: Option<PathBuf>,

    /// Tree in bracket notation, instead of a file
    #[arg(long, conflicts_with = "input")]
    tree: Option<String>,

    /// Labels drawn above the words (repeat or separate with commas)
    #[arg(long = "high-level", value_delimiter = ',', env = "SYNBOX_HIGH_LEVEL")]
    high_level: Vec<String>,

    /// JSON layout configuration, e.g. {"high_level_labels": ["NP"]}
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Title of the HTML document
    #[arg(long)]
    title: Option<String>,

    /// Output file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("synbox: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SynboxError> {
    let input = read_input(cli)?;
    let config = load_config(cli)?;
    debug!("high-level labels: {:?}", config.high_level_labels);

    let tree = BracketParser::new_defaults().parse_str(&input)?;

    let output = if cli.format == Format::Tree {
        tree.to_string()
    } else {
        let layout = Layout::compute(&tree, &config)?;
        let mut options = HtmlOptions::new();
        if let Some(title) = &cli.title {
            options = options.with_title(title.as_str());
        }

        match cli.format {
            Format::Json => render::to_json(&layout)?,
            Format::Fragment => render::to_html(&layout, &options.fragment()),
            Format::Html | Format::Tree => render::to_html(&layout, &options),
        }
    };

    write_output(cli.output.as_deref(), &output)
}

fn read_input(cli: &Cli) -> Result<String, SynboxError> {
    if let Some(tree) = &cli.tree {
        return Ok(tree.clone());
    }

    match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn load_config(cli: &Cli) -> Result<LayoutConfig, SynboxError> {
    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            LayoutConfig::from_json_str(&json).map_err(SynboxError::Config)?
        }
        None if cli.high_level.is_empty() => {
            LayoutConfig::new().with_high_level_labels(DEFAULT_HIGH_LEVEL_LABELS.iter().copied())
        }
        None => LayoutConfig::new(),
    };

    Ok(config.with_high_level_labels(cli.high_level.iter().map(|label| label.trim()).filter(|label| !label.is_empty())))
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), SynboxError> {
    match path {
        Some(path) => fs::write(path, output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
