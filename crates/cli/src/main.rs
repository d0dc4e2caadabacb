use std::io;
use std::process::ExitCode;

use clap::Parser;
use wordcount_cli::args::Args;
use wordcount_cli::version;
use wordcount_engine::Config;

fn main() -> ExitCode {
    let args = Args::parse();

    // Resolved once at startup, before any input is touched.
    let version = version::resolve();
    if args.version {
        println!("{version}");
        return ExitCode::SUCCESS;
    }

    let config = Config::from(args);
    let stdin = io::stdin();
    match wordcount_engine::run(&config, stdin.lock()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
