use std::process::ExitCode;

use ccwc::{CcwcError, app, args::Invocation, config::Config, logging, presentation};

fn main() -> ExitCode {
    logging::init();

    let invocation = Invocation::parse();
    let result = Config::try_from(invocation)
        .map_err(CcwcError::from)
        .and_then(|config| app::run(&config, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", presentation::error_message(&e));
            ExitCode::FAILURE
        }
    }
}
