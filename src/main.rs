/*  main.rs -- Main program
    This file is part of <https://github.com/uaf-acrc/night-and-day>.
    Copyright (C) 2024 the night-and-day authors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

mod acis;
mod bands;
mod cli;
mod encode;
mod error;
mod report;
mod solar;
mod stations;
mod types;
mod year;

use crate::{
    acis::{AcisClient, StationLocator},
    cli::{CliArgs, VerbosityArgs},
    encode::encode_station,
    report::{sanitize_name, table_file, write_day_table, StationChart, REPORT_FILE},
    stations::{Registry, StationEntry},
    types::Location,
    year::build_year,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::{debug, info, warn, Level};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.verbosity);
    run(&args)
}

fn init_tracing(v: &VerbosityArgs) {
    let level = if v.quiet {
        Level::WARN
    } else if v.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(args: &CliArgs) -> Result<()> {
    fs::create_dir_all(&args.dir)
        .with_context(|| format!("unable to create output directory {}", args.dir.display()))?;

    let registry = match &args.stations {
        Some(path) => Registry::from_path(path)
            .with_context(|| format!("station registry {}", path.display()))?,
        None => Registry::builtin().context("built-in station registry")?,
    };
    let selection = registry.select(args.class)?;
    debug!("{} stations flagged for class {}", selection.len(), args.class);

    let client = AcisClient::new().context("ACIS client")?;
    let located = fetch_locations(&client, &selection);
    if located.is_empty() {
        bail!("no station locations could be retrieved for class {}", args.class);
    }

    let mut charts = Vec::with_capacity(located.len());
    let mut series = BTreeMap::new();
    for (entry, loc) in &located {
        info!("{} ({:.2}°, {:.2}°)", entry.name, *loc.lat, *loc.lon);
        let records = build_year(loc, args.year)
            .with_context(|| format!("computing {} for {}", args.year, entry.name))?;

        let key = sanitize_name(&entry.name);
        if args.dump_tables {
            let path = table_file(&args.dir, &key);
            let file = BufWriter::new(File::create(&path)?);
            write_day_table(file, &records)
                .with_context(|| format!("writing {}", path.display()))?;
        }

        for (label, blob) in encode_station(&records) {
            series.insert(format!("{key}{label}"), blob);
        }
        charts.push(StationChart {
            key,
            title: entry.name.clone(),
        });
    }

    let html = report::render(args.year, &charts, &series)?;
    let out = args.dir.join(REPORT_FILE);
    fs::write(&out, html).with_context(|| format!("writing {}", out.display()))?;
    info!("report written to {}", out.display());

    Ok(())
}

/// Looks up coordinates for every selected station. A station whose
/// metadata lookup fails is dropped with a warning instead of poisoning
/// the whole run; the caller decides whether an empty result is fatal.
fn fetch_locations<'a>(
    locator: &impl StationLocator,
    selection: &[&'a StationEntry],
) -> Vec<(&'a StationEntry, Location)> {
    selection
        .iter()
        .filter_map(|entry| match locator.locate(&entry.sid) {
            Ok(loc) => Some((*entry, loc)),
            Err(err) => {
                warn!("skipping {}: {err}", entry.name);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    struct FixedLocator;

    impl StationLocator for FixedLocator {
        fn locate(&self, sid: &str) -> Result<Location, FetchError> {
            match sid {
                "PABR" => Ok(Location::new(71.29, -156.79).unwrap()),
                _ => Err(FetchError::MissingCoordinates { sid: sid.into() }),
            }
        }
    }

    #[test]
    fn failed_lookups_are_skipped() {
        let known = StationEntry {
            name: "Utqiagvik".into(),
            sid: "PABR".into(),
            classes: [1, 0, 0, 0],
        };
        let unknown = StationEntry {
            name: "Nowhere".into(),
            sid: "XXXX".into(),
            classes: [1, 0, 0, 0],
        };
        let selection = [&known, &unknown];
        let located = fetch_locations(&FixedLocator, &selection);
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].0.name, "Utqiagvik");
    }
}
