//! `whensthenexttenarrivals`: the next ten raw arrival records at one stop.

use std::io::{self, Write};
use std::process::ExitCode;

use bus_info::config::{Credentials, NEXT_ARRIVALS_VARS};
use bus_info::domain::AtcoCode;
use bus_info::logging;
use bus_info::render::write_next_arrivals;
use bus_info::transportapi::{DEFAULT_NEXT_ARRIVALS, TransportApiClient};
use clap::Parser;

/// Get live bus arrivals for a specific stop.
#[derive(Debug, Parser)]
#[command(name = "whensthenexttenarrivals", version)]
struct Args {
    /// The ATCO code to query.
    #[arg(short, long, value_name = "CODE")]
    atco: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let client =
        TransportApiClient::new(Credentials::from_env(NEXT_ARRIVALS_VARS).into_config())?;

    let atco = AtcoCode::parse(&args.atco)?;
    let arrivals = client.next_arrivals(&atco, DEFAULT_NEXT_ARRIVALS).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_next_arrivals(&mut out, &atco, &arrivals)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_atco() {
        let args = Args::try_parse_from(["whensthenexttenarrivals", "--atco", "490004733D"]).unwrap();
        assert_eq!(args.atco, "490004733D");
    }

    #[test]
    fn atco_not_repeatable() {
        let result =
            Args::try_parse_from(["whensthenexttenarrivals", "-a", "490004733D", "-a", "1000B"]);
        assert!(result.is_err());
    }
}
