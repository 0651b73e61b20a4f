use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use bucket_table::cli::Session;
use bucket_table::config::{DEFAULT_BUCKET_CAPACITY, DEFAULT_BUCKET_COUNT};
use bucket_table::logger::initialize_logger;
use bucket_table::{load_file, Config, Table};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of buckets
    #[arg(short = 'b', long, default_value_t = DEFAULT_BUCKET_COUNT)]
    bucket_count: usize,

    /// Inline entries per bucket before chaining
    #[arg(short = 'c', long, default_value_t = DEFAULT_BUCKET_CAPACITY)]
    bucket_capacity: usize,

    /// CSV file of `key,value` lines to load at startup
    #[arg(short, long)]
    load: Option<PathBuf>,
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    let mut table = match Table::with_config(Config::new(args.bucket_count, args.bucket_capacity)) {
        Ok(table) => table,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &args.load {
        // Whatever loaded before a failure stays in the table.
        if let Err(err) = load_file(path, &mut table) {
            log::error!("{err}");
        }
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    match session.run(&mut table) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
