/*  year.rs -- Daily sunrise and twilight table for one calendar year
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

use crate::error::SolarError;
use crate::solar::resolved_crossings;
use crate::types::{HorizonPreset, Location, UTC_OFFSET_SECS};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

/// One station-day: the eight crossing timestamps in local clock time.
///
/// Always fully populated; circumpolar days carry the resolver's
/// substitute values instead of a missing marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// 1-based position in the year series.
    pub day_index: u32,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub civil_rise: NaiveDateTime,
    pub civil_set: NaiveDateTime,
    pub naut_rise: NaiveDateTime,
    pub naut_set: NaiveDateTime,
    pub astr_rise: NaiveDateTime,
    pub astr_set: NaiveDateTime,
}

pub(crate) fn to_utc(local: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&(local - TimeDelta::seconds(UTC_OFFSET_SECS)))
}

pub(crate) fn to_local(t: DateTime<Utc>) -> NaiveDateTime {
    t.naive_utc() + TimeDelta::seconds(UTC_OFFSET_SECS)
}

/// Query anchor for a calendar day: local midnight expressed in UTC.
fn anchor_utc(date: NaiveDate) -> DateTime<Utc> {
    to_utc(date.and_time(NaiveTime::MIN))
}

fn build_day(loc: &Location, date: NaiveDate, day_index: u32) -> Result<DayRecord, SolarError> {
    let at = anchor_utc(date);
    let [day, civil, naut, astr] =
        HorizonPreset::ALL.map(|preset| resolved_crossings(loc, preset, date, at));
    let (day, civil, naut, astr) = (day?, civil?, naut?, astr?);

    Ok(DayRecord {
        date,
        day_index,
        sunrise: to_local(day.rise),
        sunset: to_local(day.set),
        civil_rise: to_local(civil.rise),
        civil_set: to_local(civil.set),
        naut_rise: to_local(naut.rise),
        naut_set: to_local(naut.set),
        astr_rise: to_local(astr.rise),
        astr_set: to_local(astr.set),
    })
}

/// Builds the full chronological series for one station and year,
/// one record per calendar day, January 1 first.
pub fn build_year(loc: &Location, year: i32) -> Result<Vec<DayRecord>, SolarError> {
    let mut date =
        NaiveDate::from_ymd_opt(year, 1, 1).ok_or(SolarError::YearOutOfRange(year))?;
    let mut records = Vec::with_capacity(366);
    while date.year() == year {
        records.push(build_day(loc, date, records.len() as u32 + 1)?);
        date = date.succ_opt().ok_or(SolarError::YearOutOfRange(year))?;
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn anchorage() -> Location {
        Location::new(61.17, -150.02).unwrap()
    }

    fn utqiagvik() -> Location {
        Location::new(71.29, -156.79).unwrap()
    }

    #[test]
    fn offset_round_trip() {
        let local = NaiveDate::from_ymd_opt(2018, 7, 4)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        let utc = to_utc(local);
        assert_eq!(utc.hour(), 22);
        assert_eq!(to_local(utc), local);
    }

    #[test]
    fn year_has_a_record_per_day() {
        let records = build_year(&anchorage(), 2018).unwrap();
        assert_eq!(records.len(), 365);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
        assert_eq!(records[0].day_index, 1);
        assert_eq!(
            records[364].date,
            NaiveDate::from_ymd_opt(2018, 12, 31).unwrap()
        );
        assert_eq!(records[364].day_index, 365);
    }

    #[test]
    fn anchorage_solstice_times_are_plausible() {
        let records = build_year(&anchorage(), 2018).unwrap();

        // June 21 (index 171): sunrise in the small hours, sunset late
        // evening, both in AKST.
        let summer = &records[171];
        assert_eq!(summer.date, NaiveDate::from_ymd_opt(2018, 6, 21).unwrap());
        assert!((3..=6).contains(&summer.sunrise.hour()), "{}", summer.sunrise);
        assert!((22..=23).contains(&summer.sunset.hour()), "{}", summer.sunset);

        // December 21 (index 354): a short mid-day window.
        let winter = &records[354];
        assert_eq!(winter.date, NaiveDate::from_ymd_opt(2018, 12, 21).unwrap());
        assert!((9..=11).contains(&winter.sunrise.hour()), "{}", winter.sunrise);
        assert!((15..=16).contains(&winter.sunset.hour()), "{}", winter.sunset);
    }

    #[test]
    fn polar_night_days_resolve_to_midday() {
        let records = build_year(&utqiagvik(), 2018).unwrap();
        // Deep polar night: no sunrise, so both ends sit at local noon.
        let solstice = &records[354];
        assert_eq!(solstice.date, NaiveDate::from_ymd_opt(2018, 12, 21).unwrap());
        assert_eq!(solstice.sunrise, solstice.date.and_hms_opt(12, 0, 0).unwrap());
        assert_eq!(solstice.sunset, solstice.sunrise);
        // Astronomical twilight still happens at 71°N in December.
        assert!(solstice.astr_rise < solstice.sunrise);
    }

    #[test]
    fn polar_day_days_resolve_to_midnight() {
        let records = build_year(&utqiagvik(), 2018).unwrap();
        let solstice = &records[171];
        assert_eq!(solstice.date, NaiveDate::from_ymd_opt(2018, 6, 21).unwrap());
        let midnight = solstice.date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(solstice.sunrise, midnight);
        assert_eq!(solstice.sunset, midnight);
        assert_eq!(solstice.astr_rise, midnight);
    }
}
