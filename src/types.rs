/*  types.rs -- Common types
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

use crate::error::{LatitudeError, LocationError, LongitudeError};
use std::ops::Deref;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Fixed clock offset applied to every station (AKST, UTC-9).
///
/// The charts target Alaska stations and use one hardcoded offset
/// instead of per-station timezone rules; a known inaccuracy anywhere
/// outside that offset.
pub const UTC_OFFSET_HOURS: i32 = -9;
pub const UTC_OFFSET_SECS: i64 = UTC_OFFSET_HOURS as i64 * 3600;

/// Year the charts are computed for unless overridden.
pub const DEFAULT_YEAR: i32 = 2018;

/// Apparent solar semidiameter, used to move a limb-based horizon
/// angle to the solar center (16 arcminutes).
pub const SUN_SEMIDIAMETER_DEG: f64 = 16.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude(f64);
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude(f64);

/// Observer position in degrees, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: Latitude,
    pub lon: Longitude,
}

impl TryFrom<f64> for Latitude {
    type Error = LatitudeError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if n.is_finite() && (MIN_LATITUDE..=MAX_LATITUDE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(LatitudeError(n))
        }
    }
}

impl TryFrom<f64> for Longitude {
    type Error = LongitudeError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if n.is_finite() && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(LongitudeError(n))
        }
    }
}

impl Deref for Latitude {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Longitude {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Result<Self, LocationError> {
        Ok(Self {
            lat: lat.try_into()?,
            lon: lon.try_into()?,
        })
    }
}

/// The four horizon conventions a day is computed against.
///
/// `Day` is the almanac sunrise/sunset convention: the upper limb
/// crossing a horizon depressed by 34 arcminutes, with the refraction
/// model itself disabled (pressure 0). The twilight presets track the
/// solar center at the conventional depression angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizonPreset {
    Day,
    Civil,
    Nautical,
    Astronomical,
}

impl HorizonPreset {
    pub const ALL: [Self; 4] = [Self::Day, Self::Civil, Self::Nautical, Self::Astronomical];

    /// Horizon depression in degrees as configured, before any
    /// limb adjustment.
    pub fn depression_deg(self) -> f64 {
        match self {
            Self::Day => -34.0 / 60.0,
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
        }
    }

    /// Whether crossings are measured at the solar center (twilight)
    /// or at the upper limb (sunrise/sunset).
    pub fn use_center(self) -> bool {
        !matches!(self, Self::Day)
    }

    /// Elevation angle of the solar center at the crossing. For the
    /// limb-based day preset this folds in the solar semidiameter,
    /// yielding the familiar -0.833 degrees.
    pub fn elevation_deg(self) -> f64 {
        if self.use_center() {
            self.depression_deg()
        } else {
            self.depression_deg() - SUN_SEMIDIAMETER_DEG
        }
    }
}
