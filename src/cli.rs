/*  cli.rs -- Command line interface
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

use crate::report::REPORT_FILE;
use crate::types::{DEFAULT_YEAR, UTC_OFFSET_HOURS};
use clap::{Args, Parser};
use const_format::formatcp;
use std::path::PathBuf;

const AFTER_HELP: &str = formatcp!(
    "The report is written to DIR/{REPORT_FILE}. All clock times use the \
fixed UTC{UTC_OFFSET_HOURS} offset (AKST) regardless of daylight saving."
);

#[derive(Debug, Parser)]
#[command(version, about, after_help = AFTER_HELP)]
pub struct CliArgs {
    /// Station class selector (1-4)
    #[arg(value_name = "TYPE", value_parser = clap::value_parser!(u8).range(1..=4))]
    pub class: u8,

    /// Output directory, created if absent
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Calendar year to compute
    #[arg(long, default_value_t = DEFAULT_YEAR,
          value_parser = clap::value_parser!(i32).range(1900..=2100))]
    pub year: i32,

    /// Station registry file overriding the built-in list
    #[arg(long, value_name = "FILE")]
    pub stations: Option<PathBuf>,

    /// Also write one tab-separated table of raw times per station
    #[arg(long)]
    pub dump_tables: bool,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct VerbosityArgs {
    #[arg(long, short, display_order(100))]
    pub quiet: bool,
    #[arg(long, short, display_order(100))]
    pub verbose: bool,
}
