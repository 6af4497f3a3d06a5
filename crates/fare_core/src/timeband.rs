//! Time-of-day policy: hour-dependent fare increments and driver-market bands.

use serde::Serialize;

/// One of the five intervals the 24-hour clock is split into. The bands
/// partition [0, 24) exactly, no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TimeBand {
    LateNight,
    MorningPeak,
    MidDay,
    EveningPeak,
    Night,
}

impl TimeBand {
    pub const ALL: [TimeBand; 5] = [
        TimeBand::LateNight,
        TimeBand::MorningPeak,
        TimeBand::MidDay,
        TimeBand::EveningPeak,
        TimeBand::Night,
    ];

    /// Map a wall-clock hour (0-23) to its band. Total over the valid range;
    /// hour validation is the aggregator's job.
    pub fn for_hour(hour: u8) -> TimeBand {
        match hour {
            0..=5 => TimeBand::LateNight,
            6..=9 => TimeBand::MorningPeak,
            10..=14 => TimeBand::MidDay,
            15..=20 => TimeBand::EveningPeak,
            _ => TimeBand::Night,
        }
    }

    /// The hours covered by this band, as a half-open range.
    pub fn hours(self) -> std::ops::Range<u8> {
        match self {
            TimeBand::LateNight => 0..6,
            TimeBand::MorningPeak => 6..10,
            TimeBand::MidDay => 10..15,
            TimeBand::EveningPeak => 15..21,
            TimeBand::Night => 21..24,
        }
    }

    /// Human-readable label used in the response payload.
    pub fn label(self) -> &'static str {
        match self {
            TimeBand::LateNight => "Late Night",
            TimeBand::MorningPeak => "Morning Peak",
            TimeBand::MidDay => "Mid Day",
            TimeBand::EveningPeak => "Evening Peak",
            TimeBand::Night => "Night",
        }
    }

    /// Driver-availability label for this band.
    pub fn availability(self) -> &'static str {
        match self {
            TimeBand::LateNight => "Very Low",
            TimeBand::MorningPeak => "High",
            TimeBand::MidDay => "Moderate",
            TimeBand::EveningPeak => "Very High",
            TimeBand::Night => "Low",
        }
    }

    /// Flat currency amount added to the base fare before surge, modeling
    /// night/peak premiums.
    pub fn fare_increment(self) -> f64 {
        match self {
            TimeBand::LateNight => 100.0,
            TimeBand::MorningPeak => 20.0,
            TimeBand::MidDay => 30.0,
            TimeBand::EveningPeak => 0.0,
            TimeBand::Night => 30.0,
        }
    }

    /// Inclusive bounds for the driver-availability percent draw.
    pub fn availability_range(self) -> (u32, u32) {
        match self {
            TimeBand::LateNight => (10, 30),
            TimeBand::MorningPeak => (60, 90),
            TimeBand::MidDay => (40, 70),
            TimeBand::EveningPeak => (70, 95),
            TimeBand::Night => (30, 60),
        }
    }

    /// Inclusive bounds for the base acceptance-probability draw (percent).
    pub fn probability_range(self) -> (u32, u32) {
        match self {
            TimeBand::LateNight => (20, 45),
            TimeBand::MorningPeak => (60, 90),
            TimeBand::MidDay => (50, 80),
            TimeBand::EveningPeak => (65, 95),
            TimeBand::Night => (40, 70),
        }
    }

    /// Inclusive bounds for the base pickup-ETA draw (minutes).
    pub fn eta_range(self) -> (u32, u32) {
        match self {
            TimeBand::LateNight => (10, 20),
            TimeBand::MorningPeak => (3, 8),
            TimeBand::MidDay => (5, 12),
            TimeBand::EveningPeak => (2, 6),
            TimeBand::Night => (6, 14),
        }
    }
}
