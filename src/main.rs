mod args;
mod console_driver;
mod input;


use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use log::{debug, info};
use wisp_common::ast::pretty::Prettier;
use wisp_frontend::check_source;

use args::Arguments;
use console_driver::ConsoleDriver;
use input::read_file;

fn main() -> ExitCode {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let mut driver = ConsoleDriver::new(args.mode());
    let mut failed = 0;

    for path in args.sources.iter() {
        match process(&mut driver, &args, path) {
            Ok(true) => {}
            Ok(false) => failed += 1,
            Err(err) => {
                eprintln!("{}: {err:#}", style("error").red().bold());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        info!("{failed} of {} sources failed", args.sources.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Check a single source. Returns `false` if it had errors, which have been
/// reported by then.
fn process(driver: &mut ConsoleDriver, args: &Arguments, path: &Path) -> anyhow::Result<bool> {
    let source = read_file(path)?;
    let file = driver.add_file(path.display().to_string(), source.clone());
    debug!("checking {} as file {file}", driver.name(file)?);

    let Some(decls) = check_source(driver, &source, file) else {
        return Ok(false);
    };

    if args.print {
        println!(
            "{} {}",
            style("==>").cyan().bold(),
            style(path.display()).bold()
        );
        println!("{}", Prettier::new().pretty_decls(&decls));
    }

    Ok(true)
}
