mod error;
mod logging;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cfgconv_engine::{ConvertOptions, TreeFormat, convert, detect};
use cfgconv_ir::{DialectId, Representation};
use clap::{ArgAction, Args, Parser, ValueEnum};
use tempfile::NamedTempFile;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "config-convert")]
#[command(about = "Convert a network device config into a template, tree or flat record")]
struct Cli {
    /// Configuration file to convert.
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Destination file; replaced atomically.
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Output representation: template (jinja2), tree (xml) or flat-record (json).
    #[arg(short = 't', long = "type", default_value = "template")]
    representation: Representation,

    #[arg(long, value_enum, default_value_t = CliTreeFormat::Xml)]
    tree_format: CliTreeFormat,

    #[command(flatten)]
    dialect: DialectFlags,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct DialectFlags {
    /// Cisco IOS.
    #[arg(short = 'c', long)]
    cisco: bool,

    /// Cisco IOS-XR.
    #[arg(short = 'x', long)]
    iosxr: bool,

    /// Arista EOS.
    #[arg(short = 'a', long)]
    arista: bool,

    /// Juniper JunOS (set format).
    #[arg(short = 'j', long)]
    junos: bool,

    /// Nokia SR OS.
    #[arg(short = 's', long)]
    sros: bool,

    /// Mikrotik RouterOS.
    #[arg(short = 'm', long)]
    mikrotik: bool,

    /// Guess the dialect from the file contents.
    #[arg(long)]
    detect: bool,
}

impl DialectFlags {
    /// The explicitly selected dialect, or `None` when `--detect` was given.
    fn selected(&self) -> Option<DialectId> {
        [
            (self.cisco, DialectId::Ios),
            (self.iosxr, DialectId::Iosxr),
            (self.arista, DialectId::Eos),
            (self.junos, DialectId::Junos),
            (self.sros, DialectId::Sros),
            (self.mikrotik, DialectId::Mikrotik),
        ]
        .into_iter()
        .find_map(|(set, id)| set.then_some(id))
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTreeFormat {
    Xml,
    Json,
}

impl From<CliTreeFormat> for TreeFormat {
    fn from(value: CliTreeFormat) -> Self {
        match value {
            CliTreeFormat::Xml => TreeFormat::Xml,
            CliTreeFormat::Json => TreeFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(dialect) => {
            println!(
                "Converted {} ({dialect}) to {}: {}",
                cli.file.display(),
                cli.representation,
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(input = %cli.file.display(), error = %err, "conversion failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<DialectId, CliError> {
    let input = fs::read_to_string(&cli.file).map_err(|source| CliError::UnreadableInput {
        path: cli.file.clone(),
        source,
    })?;

    let dialect = match cli.dialect.selected() {
        Some(id) => id,
        None => detect(&input)
            .dialect()
            .ok_or_else(|| CliError::AmbiguousDetection {
                path: cli.file.clone(),
            })?,
    };

    let options =
        ConvertOptions::new(cli.representation).with_tree_format(cli.tree_format.into());
    let output = convert(&input, dialect, &options)?;

    write_atomic(&cli.output, &output).map_err(|source| CliError::UnwritableOutput {
        path: cli.output.clone(),
        source,
    })?;

    tracing::info!(
        input = %cli.file.display(),
        output = %cli.output.display(),
        %dialect,
        representation = %cli.representation,
        "conversion written"
    );
    Ok(dialect)
}

/// Write into a temp file beside `path`, then rename it over `path`.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
