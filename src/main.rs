use std::env;
use std::process::ExitCode;

use wish::error::{report, ShellError};
use wish::flags::Flags;
use wish::logging;
use wish::shell::{Shell, ShellConfig};

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        report(&e);
        return ExitCode::FAILURE;
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("wish {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(flags: &Flags) -> Result<(), ShellError> {
    let config = ShellConfig::from_flags(flags)?;
    logging::init(config.debug);
    tracing::debug!(?config, "starting");

    let mut shell = Shell::new(config)?;
    shell.run()
}
