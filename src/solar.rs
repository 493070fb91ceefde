/*  solar.rs -- Horizon crossings and the circumpolar fallback
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

//! The calculator half answers "when does the sun next cross this
//! horizon angle, looking forward from this instant" with NREL SPA
//! rise/set math from the `solar-positioning` crate. The resolver half
//! turns the two circumpolar outcomes into concrete timestamps so the
//! rest of the pipeline never sees a missing value.

use crate::error::SolarError;
use crate::types::{HorizonPreset, Location};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use solar_positioning::{spa, time::DeltaT, Horizon, SunriseResult};

/// Next rise and next set at or after the queried instant, UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossings {
    pub rise: DateTime<Utc>,
    pub set: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircumpolarKind {
    /// Polar day: the sun stays above the horizon angle.
    AlwaysUp,
    /// Polar night: the sun stays below the horizon angle.
    NeverUp,
}

/// Outcome of one crossing query. The circumpolar case is an expected,
/// frequent condition at high latitude, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaySun {
    Crossings(Crossings),
    Circumpolar(CircumpolarKind),
}

fn day_events(
    loc: &Location,
    horizon: Horizon,
    at: DateTime<Utc>,
) -> Result<SunriseResult<DateTime<Utc>>, SolarError> {
    let delta_t = DeltaT::estimate_from_date_like(at)?;
    Ok(spa::sunrise_sunset_for_horizon(
        at, *loc.lat, *loc.lon, delta_t, horizon,
    )?)
}

/// Computes the next rise and set at or after `at` for the given
/// horizon preset.
///
/// SPA yields the events of the UTC day containing `at`; any event
/// already behind `at` is replaced by the following day's. A
/// circumpolar day anywhere in that window makes the whole query
/// circumpolar.
pub fn next_crossings(
    loc: &Location,
    preset: HorizonPreset,
    at: DateTime<Utc>,
) -> Result<DaySun, SolarError> {
    let horizon = Horizon::Custom(preset.elevation_deg());

    let (mut rise, mut set) = match day_events(loc, horizon, at)? {
        SunriseResult::AllDay { .. } => {
            return Ok(DaySun::Circumpolar(CircumpolarKind::AlwaysUp))
        }
        SunriseResult::AllNight { .. } => {
            return Ok(DaySun::Circumpolar(CircumpolarKind::NeverUp))
        }
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => (sunrise, sunset),
    };

    if rise < at || set < at {
        match day_events(loc, horizon, at + TimeDelta::days(1))? {
            SunriseResult::AllDay { .. } => {
                return Ok(DaySun::Circumpolar(CircumpolarKind::AlwaysUp))
            }
            SunriseResult::AllNight { .. } => {
                return Ok(DaySun::Circumpolar(CircumpolarKind::NeverUp))
            }
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } => {
                if rise < at {
                    rise = sunrise;
                }
                if set < at {
                    set = sunset;
                }
            }
        }
    }

    Ok(DaySun::Crossings(Crossings { rise, set }))
}

/// Substitute timestamp for a circumpolar day.
///
/// Winter dates (before March 21 or after October 21, a deliberately
/// coarse calendar rule) map to midday; the rest of the year keeps the
/// queried instant. Both failure kinds collapse into this one rule.
pub fn resolve_circumpolar(local_date: NaiveDate, at: DateTime<Utc>) -> DateTime<Utc> {
    if is_winter(local_date) {
        at + TimeDelta::hours(12)
    } else {
        at
    }
}

fn is_winter(date: NaiveDate) -> bool {
    let md = (date.month(), date.day());
    md < (3, 21) || md > (10, 21)
}

/// Total variant of [`next_crossings`]: circumpolar conditions are
/// replaced by the resolver, so every query yields two timestamps.
pub fn resolved_crossings(
    loc: &Location,
    preset: HorizonPreset,
    local_date: NaiveDate,
    at: DateTime<Utc>,
) -> Result<Crossings, SolarError> {
    match next_crossings(loc, preset, at)? {
        DaySun::Crossings(c) => Ok(c),
        DaySun::Circumpolar(_) => {
            let t = resolve_circumpolar(local_date, at);
            Ok(Crossings { rise: t, set: t })
        }
    }
}
