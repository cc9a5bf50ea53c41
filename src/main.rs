// src/main.rs

use depclosure::errors::DepclosureError;
use depclosure::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("depclosure error: {err:#}");
        if let Some(hint) = err
            .downcast_ref::<DepclosureError>()
            .and_then(DepclosureError::hint)
        {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)?;
    Ok(())
}
