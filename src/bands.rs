/*  bands.rs -- Partitioning a day into chart bands
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

use crate::year::DayRecord;
use chrono::Timelike;

pub const MS_PER_DAY: i64 = 86_400_000;
pub const NOON_MS: i64 = MS_PER_DAY / 2;
/// Upper sentinel for the evening night band, one millisecond short of
/// the next day.
pub const DAY_END_MS: i64 = MS_PER_DAY - 1;

/// The nine stacked chart bands of one day, morning to morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandKind {
    Day,
    CivilAm,
    CivilPm,
    NautAm,
    NautPm,
    AstroAm,
    AstroPm,
    NightAm,
    NightPm,
}

impl BandKind {
    pub const ALL: [Self; 9] = [
        Self::Day,
        Self::CivilAm,
        Self::CivilPm,
        Self::NautAm,
        Self::NautPm,
        Self::AstroAm,
        Self::AstroPm,
        Self::NightAm,
        Self::NightPm,
    ];

    /// Template variable suffix, matching the chart series names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::CivilAm => "Civil_twilight_AM",
            Self::CivilPm => "Civil_twilight_PM",
            Self::NautAm => "Nautical_twilight_AM",
            Self::NautPm => "Nautical_twilight_PM",
            Self::AstroAm => "Astro_twilight_AM",
            Self::AstroPm => "Astro_twilight_PM",
            Self::NightAm => "Night_AM",
            Self::NightPm => "Night_PM",
        }
    }
}

/// One day's crossing times as milliseconds since local midnight, with
/// the midnight-rollover repair already applied to the set fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMillis {
    /// X-axis value: 1-based series position scaled to a day of
    /// milliseconds.
    pub num: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub civil_rise: i64,
    pub civil_set: i64,
    pub naut_rise: i64,
    pub naut_set: i64,
    pub astr_rise: i64,
    pub astr_set: i64,
}

fn ms_of_day(t: chrono::NaiveDateTime) -> i64 {
    i64::from(t.hour() * 3600 + t.minute() * 60 + t.second()) * 1000
}

/// A set time landing before local noon means the crossing wrapped past
/// local midnight into the next day; push it out by a full day so the
/// evening bands stay above the morning ones.
fn repair_pm(ms: i64) -> i64 {
    if ms < NOON_MS {
        ms + MS_PER_DAY
    } else {
        ms
    }
}

impl DayMillis {
    pub fn from_record(rec: &DayRecord) -> Self {
        Self {
            num: i64::from(rec.day_index) * MS_PER_DAY,
            sunrise: ms_of_day(rec.sunrise),
            sunset: repair_pm(ms_of_day(rec.sunset)),
            civil_rise: ms_of_day(rec.civil_rise),
            civil_set: repair_pm(ms_of_day(rec.civil_set)),
            naut_rise: ms_of_day(rec.naut_rise),
            naut_set: repair_pm(ms_of_day(rec.naut_set)),
            astr_rise: ms_of_day(rec.astr_rise),
            astr_set: repair_pm(ms_of_day(rec.astr_set)),
        }
    }

    /// `[start, end]` of one band. Chained in `BandKind::ALL`'s
    /// night-day-night order the nine bands tile the whole day.
    pub fn band(&self, kind: BandKind) -> (i64, i64) {
        match kind {
            BandKind::Day => (self.sunrise, self.sunset),
            BandKind::CivilAm => (self.civil_rise, self.sunrise),
            BandKind::CivilPm => (self.sunset, self.civil_set),
            BandKind::NautAm => (self.naut_rise, self.civil_rise),
            BandKind::NautPm => (self.civil_set, self.naut_set),
            BandKind::AstroAm => (self.astr_rise, self.naut_rise),
            BandKind::AstroPm => (self.naut_set, self.astr_set),
            BandKind::NightAm => (0, self.astr_rise),
            BandKind::NightPm => (self.astr_set, DAY_END_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2018, 3, 1).unwrap();
        let t = |h, m| date.and_hms_opt(h, m, 0).unwrap();
        DayRecord {
            date,
            day_index: 60,
            astr_rise: t(5, 50),
            naut_rise: t(6, 30),
            civil_rise: t(7, 10),
            sunrise: t(7, 50),
            sunset: t(18, 10),
            civil_set: t(18, 50),
            naut_set: t(19, 30),
            astr_set: t(20, 10),
        }
    }

    #[test]
    fn millis_conversion() {
        let ms = DayMillis::from_record(&record());
        assert_eq!(ms.num, 60 * MS_PER_DAY);
        assert_eq!(ms.sunrise, ((7 * 60 + 50) * 60) * 1000);
        assert_eq!(ms.sunset, ((18 * 60 + 10) * 60) * 1000);
    }

    #[test]
    fn rollover_repair_pushes_early_sets_out_a_day() {
        let mut rec = record();
        // Crossing wrapped past midnight: 00:30 reads as before noon.
        rec.astr_set = rec.date.and_hms_opt(0, 30, 0).unwrap();
        let ms = DayMillis::from_record(&rec);
        assert_eq!(ms.astr_set, 30 * 60 * 1000 + MS_PER_DAY);
        // Rise fields are never repaired.
        assert_eq!(ms.astr_rise, ((5 * 60 + 50) * 60) * 1000);
    }

    #[test]
    fn rollover_repair_leaves_noon_alone() {
        let mut rec = record();
        rec.sunset = rec.date.and_hms_opt(12, 0, 0).unwrap();
        let ms = DayMillis::from_record(&rec);
        assert_eq!(ms.sunset, NOON_MS);
    }

    #[test]
    fn bands_chain_without_gaps() {
        let ms = DayMillis::from_record(&record());
        let chain = [
            BandKind::NightAm,
            BandKind::AstroAm,
            BandKind::NautAm,
            BandKind::CivilAm,
            BandKind::Day,
            BandKind::CivilPm,
            BandKind::NautPm,
            BandKind::AstroPm,
            BandKind::NightPm,
        ];
        let (start, _) = ms.band(chain[0]);
        assert_eq!(start, 0);
        for pair in chain.windows(2) {
            let (_, end) = ms.band(pair[0]);
            let (next_start, _) = ms.band(pair[1]);
            assert_eq!(end, next_start);
        }
        let (_, last) = ms.band(BandKind::NightPm);
        assert_eq!(last, DAY_END_MS);
    }

    #[test]
    fn band_bounds_follow_the_table() {
        let ms = DayMillis::from_record(&record());
        assert_eq!(ms.band(BandKind::Day), (ms.sunrise, ms.sunset));
        assert_eq!(ms.band(BandKind::CivilAm), (ms.civil_rise, ms.sunrise));
        assert_eq!(ms.band(BandKind::CivilPm), (ms.sunset, ms.civil_set));
        assert_eq!(ms.band(BandKind::NautAm), (ms.naut_rise, ms.civil_rise));
        assert_eq!(ms.band(BandKind::NautPm), (ms.civil_set, ms.naut_set));
        assert_eq!(ms.band(BandKind::AstroAm), (ms.astr_rise, ms.naut_rise));
        assert_eq!(ms.band(BandKind::AstroPm), (ms.naut_set, ms.astr_set));
        assert_eq!(ms.band(BandKind::NightAm), (0, ms.astr_rise));
        assert_eq!(ms.band(BandKind::NightPm), (ms.astr_set, DAY_END_MS));
    }
}
