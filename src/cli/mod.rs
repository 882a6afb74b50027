pub mod commands;
pub mod utils;

use crate::models::{DEFAULT_OLD_MODULE, ModulePath};
use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;
use std::process;

/// What every binary needs from its command line
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub new_module: ModulePath,
    pub verbose: bool,
}

pub fn build_cli(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .after_help(format!("Example:\n  {} {}", name, DEFAULT_OLD_MODULE))
        .arg(
            Arg::new("new-module")
                .help("New Go module path, e.g. github.com/acme/backend")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Parse the arguments, or explain why they are wrong
///
/// `Ok(None)` means help or version output was requested and already rendered.
pub fn parse_invocation<I, T>(
    command: Command,
    args: I,
) -> Result<Option<Invocation>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    Ok(Some(invocation_from(&matches)?))
}

fn invocation_from(matches: &ArgMatches) -> Result<Invocation, clap::Error> {
    let raw = matches
        .get_one::<String>("new-module")
        .ok_or_else(|| clap::Error::new(ErrorKind::MissingRequiredArgument))?;
    let new_module = ModulePath::new(raw.as_str())
        .map_err(|e| clap::Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;

    Ok(Invocation {
        new_module,
        verbose: matches.get_flag("verbose"),
    })
}

/// Parse `std::env::args`, exiting 1 with usage on a bad command line and 0 after help
pub fn invocation_or_exit(command: Command) -> Invocation {
    let name = command.get_name().to_string();
    match parse_invocation(command, std::env::args_os()) {
        Ok(Some(invocation)) => invocation,
        Ok(None) => process::exit(0),
        Err(e) => {
            eprintln!("{}", e.render());
            print_usage(&name);
            process::exit(1);
        }
    }
}

pub fn print_usage(name: &str) {
    eprintln!("Usage: {} <new-module-path>", name);
    eprintln!("Example: {} {}", name, DEFAULT_OLD_MODULE);
}
