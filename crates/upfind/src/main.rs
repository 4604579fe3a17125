use std::ffi::OsString;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod error;

const EXIT_SUCCESS: u8 = 0;
/// Exit status for a failed search or an unusable start/stop directory.
const EXIT_FAILURE: u8 = 1;
/// Exit status for a malformed invocation.
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "upfind",
    version,
    about = "Find a file in the current directory or the nearest parent that has it"
)]
pub struct Cli {
    /// File or directory name to search for
    #[arg(value_name = "FILENAME")]
    target: Option<OsString>,

    /// Stop searching if a directory contains this file or directory name
    #[arg(short = 'f', long = "flag-file", value_name = "NAME")]
    flag_file: Option<OsString>,

    /// Stop searching at this directory
    #[arg(short = 's', long, value_name = "PATH")]
    stop_directory: Option<OsString>,

    /// Start searching at this directory
    #[arg(short = 'd', long, value_name = "PATH", default_value = ".")]
    start_directory: PathBuf,

    /// Do not print error messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = run_cli(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(code)
}

/// Parse `args`, run the search and write the outcome. Returns the exit status.
fn run_cli<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with success, the rest is a usage error.
            let rendered = e.render();
            return if e.use_stderr() {
                let _ = write!(err, "{rendered}");
                EXIT_USAGE
            } else {
                let _ = write!(out, "{rendered}");
                EXIT_SUCCESS
            };
        }
    };

    let Some(search) = config::search_config(&cli) else {
        error::report(err, cli.quiet, "Missing target file name");
        return EXIT_USAGE;
    };

    let found = match run(&search) {
        Ok(found) => found,
        Err(e) => {
            error::report(err, cli.quiet, &error::format_error(&e));
            return EXIT_FAILURE;
        }
    };

    match write_path(out, &found) {
        Ok(()) => EXIT_SUCCESS,
        // The reader went away; the search itself succeeded.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => EXIT_SUCCESS,
        Err(e) => {
            error::report(err, cli.quiet, &format!("failed to write result: {e}"));
            EXIT_FAILURE
        }
    }
}

fn run(search: &upfind_core::SearchConfig) -> anyhow::Result<PathBuf> {
    tracing::debug!("search config: {:?}", search);
    Ok(upfind_core::locate(search)?)
}

/// Print `path` followed by a newline, byte for byte where the platform allows.
fn write_path(out: &mut impl Write, path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(path.as_os_str().as_bytes())?;
    }
    #[cfg(not(unix))]
    write!(out, "{}", path.display())?;
    out.write_all(b"\n")?;
    out.flush()
}
