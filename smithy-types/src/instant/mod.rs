/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;

/// A point in time with nanosecond precision, stored relative to the Unix epoch.
///
/// On the wire (both AWS JSON and REST-JSON) timestamps are epoch seconds, either an integer or
/// a fractional number carrying at most millisecond precision. Sub-millisecond nanos are rounded
/// to the nearest millisecond when serialized.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// A fraction that rounds to a whole second carries into `epoch_seconds`
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant::normalized(epoch_seconds, (fraction * NANOS_PER_SECOND as f64).round() as i64)
    }

    /// `subsecond_nanos` of a second or more carries into `seconds`
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant::normalized(seconds, i64::from(subsecond_nanos))
    }

    /// Decodes a wire timestamp, rounding the fraction to the nearest millisecond
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let whole = epoch_seconds.floor();
        let millis = ((epoch_seconds - whole) * 1000_f64).round() as i64;
        Instant::normalized(whole as i64, millis * NANOS_PER_MILLI)
    }

    fn normalized(seconds: i64, nanos: i64) -> Self {
        Instant {
            seconds: seconds + nanos.div_euclid(NANOS_PER_SECOND),
            subsecond_nanos: nanos.rem_euclid(NANOS_PER_SECOND) as u32,
        }
    }

    /// Times before the Unix epoch are clamped to the epoch.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time.duration_since(UNIX_EPOCH).unwrap_or_default();
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    // chrono pads the fraction to a multiple of three digits
                    let mut rfc3339 = rfc3339.trim_end_matches('Z').to_owned();
                    if rfc3339.contains('.') {
                        rfc3339 = rfc3339.trim_end_matches('0').to_owned();
                    }
                    rfc3339.push('Z');
                    rfc3339
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = (i64::from(self.subsecond_nanos) + NANOS_PER_MILLI / 2) / NANOS_PER_MILLI;
        let (seconds, millis) = match millis {
            1000 => (self.seconds + 1, 0),
            millis => (self.seconds, millis),
        };
        if millis == 0 {
            serializer.serialize_i64(seconds)
        } else {
            serializer.serialize_f64(seconds as f64 + millis as f64 / 1000_f64)
        }
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a timestamp expressed as epoch seconds")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Instant, E> {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Instant, E> {
        if v > i64::MAX as u64 {
            return Err(E::custom(format!("timestamp {} is out of range", v)));
        }
        Ok(Instant::from_epoch_seconds(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Instant, E> {
        if !v.is_finite() {
            return Err(E::custom("timestamp must be a finite number"));
        }
        Ok(Instant::from_f64(v))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}
