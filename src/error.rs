/*  error.rs -- Error types
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

use crate::types::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Latitude must be between {MIN_LATITUDE}° and {MAX_LATITUDE}°, got {0}")]
pub struct LatitudeError(pub f64);

#[derive(Debug, Error)]
#[error("Longitude must be between {MIN_LONGITUDE}° and {MAX_LONGITUDE}°, got {0}")]
pub struct LongitudeError(pub f64);

#[derive(Debug, Error)]
pub enum LocationError {
    #[error(transparent)]
    Lat(#[from] LatitudeError),
    #[error(transparent)]
    Lon(#[from] LongitudeError),
}

/// Failures of the crossing calculator and the year builder.
#[derive(Debug, Error)]
pub enum SolarError {
    #[error(transparent)]
    Position(#[from] solar_positioning::Error),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

/// Failures while loading or filtering the station registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unable to read station registry")]
    Io(#[from] std::io::Error),
    #[error("malformed station registry")]
    Toml(#[from] toml::de::Error),
    #[error("no stations are flagged for class {0}")]
    EmptySelection(u8),
}

/// Failures while retrieving station metadata from ACIS.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("station {sid}: no coordinates in ACIS metadata")]
    MissingCoordinates { sid: String },
    #[error("station {sid}: {source}")]
    Coordinates {
        sid: String,
        source: LocationError,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("report template failed")]
    Template(#[from] minijinja::Error),
}
