// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Downloads the OpenFlights airport and airline tables and writes the code
//! artifacts.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use aviation_codes::{Airlines, Airports, Error};
use clap::Parser;
use log::{error, info};

const AIRPORTS_URL: &str =
    "https://raw.githubusercontent.com/jpatokal/openflights/master/data/airports.dat";
const AIRLINES_URL: &str =
    "https://raw.githubusercontent.com/jpatokal/openflights/master/data/airlines.dat";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to write the artifacts to
    #[arg(short, long, default_value = "data")]
    out_dir: PathBuf,

    /// URL of the OpenFlights airports table
    #[arg(long, default_value = AIRPORTS_URL)]
    airports_url: String,

    /// URL of the OpenFlights airlines table
    #[arg(long, default_value = AIRLINES_URL)]
    airlines_url: String,
}

fn fetch(url: &str) -> Result<String, Error> {
    info!("Fetching {url}");

    let response = ureq::get(url)
        .set("User-Agent", concat!("aviation-codes/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(60))
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(status, _) => Error::Status {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(t) => Error::Fetch {
                url: url.to_string(),
                reason: t.to_string(),
            },
        })?;

    let text = response.into_string().map_err(|e| Error::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    info!("Fetched {} bytes from {url}", text.len());
    Ok(text)
}

fn write(dir: &Path, name: &str, json: String) -> Result<(), Error> {
    let path = dir.join(name);
    fs::write(&path, json)?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn build(cli: &Cli) -> Result<(), Error> {
    // both tables are fetched before anything is written
    let (airports, airlines) = thread::scope(|s| {
        let airports = s.spawn(|| fetch(&cli.airports_url));
        let airlines = s.spawn(|| fetch(&cli.airlines_url));
        (airports.join(), airlines.join())
    });

    let airports = airports.unwrap_or_else(|_| Err(fetch_panicked(&cli.airports_url)))?;
    let airlines = airlines.unwrap_or_else(|_| Err(fetch_panicked(&cli.airlines_url)))?;

    let airports = Airports::from_openflights(&airports);
    let airlines = Airlines::from_openflights(&airlines);

    fs::create_dir_all(&cli.out_dir)?;
    write(&cli.out_dir, "airport-codes.json", airports.codes().to_json()?)?;
    write(&cli.out_dir, "airline-codes.json", airlines.codes().to_json()?)?;
    write(&cli.out_dir, "airports.json", airports.to_json()?)?;
    write(&cli.out_dir, "airlines.json", airlines.to_json()?)?;

    Ok(())
}

fn fetch_panicked(url: &str) -> Error {
    Error::Fetch {
        url: url.to_string(),
        reason: "fetch thread panicked".to_string(),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match build(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Build failed: {e}");
            ExitCode::FAILURE
        }
    }
}
