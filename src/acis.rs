/*  acis.rs -- Station metadata from the ACIS web service
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

use crate::error::FetchError;
use crate::types::Location;
use serde::Deserialize;
use serde_json::json;

pub const ACIS_STATION_URL: &str = "https://data.rcc-acis.org/StnData";

/// Seam between the pipeline and whatever supplies coordinates; the
/// computation only ever sees a validated [`Location`].
pub trait StationLocator {
    fn locate(&self, sid: &str) -> Result<Location, FetchError>;
}

pub struct AcisClient {
    http: reqwest::blocking::Client,
}

impl AcisClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("night-and-day/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl StationLocator for AcisClient {
    fn locate(&self, sid: &str) -> Result<Location, FetchError> {
        // StnData insists on a data query; a throwaway 5-day mean
        // element keeps the response small. Only `meta.ll` is read.
        let params = json!({
            "sid": sid,
            "sdate": "2017-01-01",
            "edate": "2017-01-05",
            "elems": [{
                "name": "avgt",
                "interval": "dly",
                "duration": "dly",
                "reduce": "mean",
            }],
        });

        let response: StnData = self
            .http
            .get(ACIS_STATION_URL)
            .query(&[("params", params.to_string())])
            .send()?
            .error_for_status()?
            .json()?;

        station_location(sid, &response)
    }
}

#[derive(Debug, Deserialize)]
struct StnData {
    meta: Option<StnMeta>,
}

#[derive(Debug, Deserialize)]
struct StnMeta {
    /// ACIS coordinate order is `[lon, lat]`.
    ll: Option<[f64; 2]>,
}

fn station_location(sid: &str, data: &StnData) -> Result<Location, FetchError> {
    let [lon, lat] = data
        .meta
        .as_ref()
        .and_then(|m| m.ll)
        .ok_or_else(|| FetchError::MissingCoordinates { sid: sid.into() })?;
    Location::new(lat, lon).map_err(|source| FetchError::Coordinates {
        sid: sid.into(),
        source,
    })
}
