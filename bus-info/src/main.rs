//! `whensthebus`: live UK bus times in your terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use bus_info::config::{BUS_TIMES_VARS, Credentials};
use bus_info::domain::AtcoCode;
use bus_info::logging;
use bus_info::render::write_live_departures;
use bus_info::transportapi::TransportApiClient;
use chrono::Local;
use clap::Parser;

/// Get live UK bus times in your terminal.
#[derive(Debug, Parser)]
#[command(name = "whensthebus", version)]
struct Args {
    /// The ATCO codes to look up (eg. 490004733D)
    #[arg(short, long = "atco", value_name = "CODE", required = true)]
    atco: Vec<String>,
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
    // One "now" for every stop, so all boards are measured from the same instant
    let now = Local::now().naive_local();

    let client = TransportApiClient::new(Credentials::from_env(BUS_TIMES_VARS).into_config())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Stops are looked up one at a time, in the order given
    for code in &args.atco {
        let atco = AtcoCode::parse(code)?;
        let live = client.live_departures(&atco, now).await?;
        write_live_departures(&mut out, &atco, &live)?;
        out.flush()?;
    }

    Ok(())
}
