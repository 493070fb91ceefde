/*  encode.rs -- Highcharts arearange series encoding
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

use crate::bands::{BandKind, DayMillis};
use crate::year::DayRecord;
use itertools::Itertools;

/// One `[x, low, high]` chart point. Missing ends render as the
/// literal `null` token the chart library expects; the resolved
/// pipeline never produces one, but the wire format supports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePoint {
    pub x: i64,
    pub low: Option<i64>,
    pub high: Option<i64>,
}

fn num(v: Option<i64>) -> String {
    v.map_or_else(|| "null".to_owned(), |n| n.to_string())
}

/// Serializes a full-year band as one bracketed blob of comma-separated
/// `[x,low,high]` triples, no whitespace.
pub fn encode_range(points: &[RangePoint]) -> String {
    let body = points
        .iter()
        .map(|p| format!("[{},{},{}]", p.x, num(p.low), num(p.high)))
        .join(",");
    format!("[{body}]")
}

/// Encodes all nine bands of one station's year, in band-table order.
pub fn encode_station(records: &[DayRecord]) -> Vec<(&'static str, String)> {
    let days: Vec<DayMillis> = records.iter().map(DayMillis::from_record).collect();
    BandKind::ALL
        .iter()
        .map(|&kind| {
            let points: Vec<RangePoint> = days
                .iter()
                .map(|d| {
                    let (low, high) = d.band(kind);
                    RangePoint {
                        x: d.num,
                        low: Some(low),
                        high: Some(high),
                    }
                })
                .collect();
            (kind.label(), encode_range(&points))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse_range(s: &str) -> Vec<(i64, Option<i64>, Option<i64>)> {
        let inner = s
            .strip_prefix("[[")
            .and_then(|s| s.strip_suffix("]]"))
            .expect("outer brackets");
        inner
            .split("],[")
            .map(|triple| {
                let mut it = triple.split(',').map(|tok| match tok {
                    "null" => None,
                    n => Some(n.parse::<i64>().expect("numeric token")),
                });
                let x = it.next().flatten().expect("x value");
                let low = it.next().expect("low value");
                let high = it.next().expect("high value");
                assert!(it.next().is_none());
                (x, low, high)
            })
            .collect()
    }

    fn day(index: u32, rise: (u32, u32), set: (u32, u32)) -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2018, 1, index).unwrap();
        let t = |(h, m)| date.and_hms_opt(h, m, 0).unwrap();
        DayRecord {
            date,
            day_index: index,
            sunrise: t(rise),
            sunset: t(set),
            civil_rise: t((rise.0 - 1, rise.1)),
            civil_set: t((set.0 + 1, set.1)),
            naut_rise: t((rise.0 - 2, rise.1)),
            naut_set: t((set.0 + 2, set.1)),
            astr_rise: t((rise.0 - 3, rise.1)),
            astr_set: t((set.0 + 3, set.1)),
        }
    }

    #[test]
    fn day_band_matches_reference_string() {
        let records = [
            day(1, (8, 0), (17, 0)),
            day(2, (8, 1), (17, 1)),
            day(3, (7, 59), (17, 2)),
        ];
        let bands = encode_station(&records);
        let (label, blob) = &bands[0];
        assert_eq!(*label, "Day");
        insta::assert_snapshot!(
            blob,
            @"[[86400000,28800000,61200000],[172800000,28860000,61260000],[259200000,28740000,61320000]]"
        );
    }

    #[test]
    fn null_tokens_for_missing_ends() {
        let points = [
            RangePoint {
                x: 86_400_000,
                low: None,
                high: Some(5),
            },
            RangePoint {
                x: 172_800_000,
                low: Some(3),
                high: None,
            },
        ];
        assert_eq!(
            encode_range(&points),
            "[[86400000,null,5],[172800000,3,null]]"
        );
    }

    #[test]
    fn round_trip_recovers_triples() {
        let points = [
            RangePoint {
                x: 86_400_000,
                low: Some(0),
                high: Some(86_399_999),
            },
            RangePoint {
                x: 172_800_000,
                low: None,
                high: Some(100_800_000),
            },
        ];
        let parsed = parse_range(&encode_range(&points));
        let expected: Vec<_> = points.iter().map(|p| (p.x, p.low, p.high)).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn station_series_has_nine_bands_in_order() {
        let records = [day(1, (8, 0), (17, 0))];
        let bands = encode_station(&records);
        let labels: Vec<_> = bands.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            [
                "Day",
                "Civil_twilight_AM",
                "Civil_twilight_PM",
                "Nautical_twilight_AM",
                "Nautical_twilight_PM",
                "Astro_twilight_AM",
                "Astro_twilight_PM",
                "Night_AM",
                "Night_PM",
            ]
        );
        for (_, blob) in &bands {
            assert_eq!(blob.matches("],[").count(), 0);
            assert!(blob.starts_with('[') && blob.ends_with(']'));
        }
    }
}
