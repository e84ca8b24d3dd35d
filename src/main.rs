use std::ffi::OsString;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use eqnorm::ui::{annotate, annotate_lines, is_error};
use eqnorm::{NormalizeOptions, PowerOrdering};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Reduce polynomial equations to canonical `... = 0` form.
///
/// Without arguments, equations are read interactively from stdin:
///
///   >x^2 + 3.5xy + y = y^2 - xy + y
///   ==>x^2 - y^2 + 4.5xy = 0
#[derive(Parser, Debug)]
#[command(name = "eqnorm", version, about, verbatim_doc_comment)]
struct Cli {
    /// File with one equation per line; results are written to `<FILE>.out`.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Same as the positional FILE argument.
    #[arg(long = "file", value_name = "FILE", conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Order powers by exponent value (`^10` before `^2`) instead of by text.
    #[arg(long)]
    numeric_powers: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = NormalizeOptions::new().with_power_ordering(if cli.numeric_powers {
        PowerOrdering::Numeric
    } else {
        PowerOrdering::Lexicographic
    });

    let result = match cli.file.or(cli.input) {
        Some(path) => process_file(&path, &options).map(|output| {
            println!(
                "File processed successfully. Results saved to {}",
                output.display()
            );
        }),
        None => interactive(&options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn process_file(path: &Path, options: &NormalizeOptions) -> io::Result<PathBuf> {
    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file {} does not exist", path.display()),
        ));
    }

    let contents = fs::read_to_string(path)?;
    let lines = annotate_lines(contents.lines(), options);
    debug!(path = %path.display(), lines = lines.len(), "normalized file");

    let output = output_path(path);
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(&output, body)?;
    Ok(output)
}

fn output_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".out");
    PathBuf::from(name)
}

fn interactive(options: &NormalizeOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, ">")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        write_result(&annotate(input, options), &mut stdout, &mut io::stderr())?;
    }
}

/// Failed lines go to `errors`, everything else to `out`.
fn write_result(annotated: &str, out: &mut impl Write, errors: &mut impl Write) -> io::Result<()> {
    if is_error(annotated) {
        writeln!(errors, "==>{annotated}")
    } else {
        writeln!(out, "==>{annotated}")
    }
}
