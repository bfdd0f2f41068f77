use std::{io, path::PathBuf};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rewind_frontend::settings::Settings;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
    #[error("Tracing error")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[tokio::main]
async fn main() {
    let args = cli().get_matches();

    let logpath = match get_logging_path(&args) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("resolving log directory failed: {}", err);
            return;
        }
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("{:?}", Error::from(err));
        return;
    }

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&args, &mut settings);

    let mut stdout = io::stdout();
    match rewind_frontend::run(settings, &mut stdout).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("{}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("rewind")
        .about("rewind - linear undo/redo history, driven by key sequences on stdin")
        .args([
            // NOTE: options
            Arg::new("keys")
                .long("keys")
                .action(ArgAction::Set)
                .help("key sequence to execute on startup, e.g. 'aaa2u<C-y>'"),
            Arg::new("no-interactive")
                .long("no-interactive")
                .action(ArgAction::SetTrue)
                .help("do not read from stdin, quit after executing the startup keys"),
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("seed for generated demo actions"),
            Arg::new("hide-ids")
                .long("hide-ids")
                .action(ArgAction::SetTrue)
                .help("hide action ids in the history lists"),
            Arg::new("log-dir")
                .long("log-dir")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("directory for log files, defaults to the user cache directory"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.interactive = !args.get_flag("no-interactive");
    settings.seed = args.get_one::<u64>("seed").copied();
    settings.show_ids = !args.get_flag("hide-ids");
    settings.startup_keys = args.get_one::<String>("keys").cloned();
}

fn get_logging_path(args: &ArgMatches) -> Result<PathBuf, Error> {
    if let Some(path) = args.get_one::<PathBuf>("log-dir") {
        return Ok(path.to_path_buf());
    }

    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("rewind").join("logs")),
        None => Err(Error::Initialization),
    }
}
