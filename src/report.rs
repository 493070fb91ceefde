/*  report.rs -- Template variables and HTML rendering
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

use crate::error::RenderError;
use crate::year::DayRecord;
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

const TEMPLATE: &str = include_str!("../templates/daynight.html");

pub const REPORT_FILE: &str = "daynight.html";

/// One chart on the report page.
#[derive(Debug, Clone, Serialize)]
pub struct StationChart {
    /// Identifier-safe key prefixing the series variables.
    pub key: String,
    /// Human-readable title.
    pub title: String,
}

/// Identifier-safe station key: every non-alphanumeric character is
/// dropped ("St. Paul Island" becomes "StPaulIsland").
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Renders the self-contained report page. `series` maps
/// key-plus-band-label to the encoded blob for that band.
pub fn render(
    year: i32,
    charts: &[StationChart],
    series: &BTreeMap<String, String>,
) -> Result<String, RenderError> {
    let mut env = Environment::new();
    // The series blobs are spliced into script blocks verbatim.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template("daynight", TEMPLATE)?;
    let tmpl = env.get_template("daynight")?;
    Ok(tmpl.render(context! {
        year => year,
        stations => charts,
        series => series,
    })?)
}

/// Debug artifact: the raw per-day crossing table for one station,
/// tab-separated, keyed by date.
pub fn write_day_table<W: Write>(mut out: W, records: &[DayRecord]) -> io::Result<()> {
    writeln!(
        out,
        "date\tsunrise\tsunset\tcivil_rise\tcivil_set\tnaut_rise\tnaut_set\tastr_rise\tastr_set"
    )?;
    for rec in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            rec.date,
            rec.sunrise.time(),
            rec.sunset.time(),
            rec.civil_rise.time(),
            rec.civil_set.time(),
            rec.naut_rise.time(),
            rec.naut_set.time(),
            rec.astr_rise.time(),
            rec.astr_set.time(),
        )?;
    }
    Ok(())
}

/// Table file name for one station inside the output directory.
pub fn table_file(dir: &Path, key: &str) -> std::path::PathBuf {
    dir.join(format!("{key}.tsv"))
}
