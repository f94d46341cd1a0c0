use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use exfn::{Config, PROGRAM, Status};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{PROGRAM}: {e}");
            return Status::Usage.into();
        }
    };

    let filter = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{PROGRAM}: invalid log filter {:?}: {e}", config.log_filter);
            return Status::Usage.into();
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    match exfn::run(&argv, &mut out, &mut err) {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!(error = %e, "cannot write output");
            ExitCode::FAILURE
        }
    }
}
