// ABOUTME: Heart-rate zone resolution for zone-targeted plans
// ABOUTME: Karvonen heart-rate-reserve zones plus a resolver for users without zone data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcue developers

use runcue_core::config::Preferences;
use runcue_core::constants::keys;
use tracing::debug;

/// Zone limits as fractions of heart-rate reserve; zone `n` spans
/// `LIMITS[n - 1]..LIMITS[n]`
pub const ZONE_LIMITS: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Number of zones
#[allow(clippy::cast_possible_truncation)]
pub const ZONE_COUNT: u32 = (ZONE_LIMITS.len() - 1) as u32;

/// Resolves a heart-rate zone into a beats-per-minute band
pub trait HeartRateZoneResolver {
    /// Band for the 1-based `zone`, `None` when the zone is unknown or the
    /// user has no zone data
    fn zone_bounds(&self, zone: u32) -> Option<(u32, u32)>;
}

/// Resolver for users without heart-rate data
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeartRateZones;

impl HeartRateZoneResolver for NoHeartRateZones {
    fn zone_bounds(&self, _zone: u32) -> Option<(u32, u32)> {
        None
    }
}

/// Zones computed with the Karvonen method from resting and maximum heart rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KarvonenZones {
    resting_hr: u32,
    max_hr: u32,
}

impl KarvonenZones {
    /// Create zones; `None` unless `max_hr > resting_hr`
    #[must_use]
    pub const fn new(resting_hr: u32, max_hr: u32) -> Option<Self> {
        if max_hr > resting_hr {
            Some(Self { resting_hr, max_hr })
        } else {
            None
        }
    }

    /// Read `hrz_resting_hr` and `hrz_max_hr`
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Option<Self> {
        let resting = u32::try_from(prefs.get_int(keys::zones::RESTING_HR, -1)).ok()?;
        let max = u32::try_from(prefs.get_int(keys::zones::MAX_HR, -1)).ok()?;
        let zones = Self::new(resting, max);
        debug!(resting, max, available = zones.is_some(), "Heart-rate zones loaded");
        zones
    }

    fn at_fraction(&self, fraction: f64) -> u32 {
        let reserve = f64::from(self.max_hr - self.resting_hr);
        self.resting_hr + (reserve * fraction) as u32
    }
}

impl HeartRateZoneResolver for KarvonenZones {
    fn zone_bounds(&self, zone: u32) -> Option<(u32, u32)> {
        let index = usize::try_from(zone).ok()?;
        if index == 0 {
            return None;
        }
        let low = ZONE_LIMITS.get(index - 1)?;
        let high = ZONE_LIMITS.get(index)?;
        Some((self.at_fraction(*low), self.at_fraction(*high)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_karvonen_bounds() {
        let zones = KarvonenZones::new(50, 190).unwrap();
        assert_eq!(zones.zone_bounds(1), Some((120, 134)));
        assert_eq!(zones.zone_bounds(5), Some((176, 190)));
        assert_eq!(zones.zone_bounds(0), None);
        assert_eq!(zones.zone_bounds(6), None);
    }

    #[test]
    fn test_zones_ascend() {
        let zones = KarvonenZones::new(60, 185).unwrap();
        let bounds: Vec<(u32, u32)> = (1..=ZONE_COUNT)
            .filter_map(|z| zones.zone_bounds(z))
            .collect();
        assert_eq!(bounds.len(), 5);
        assert_eq!(zones.zone_bounds(ZONE_COUNT + 1), None);
        assert!(bounds.windows(2).all(|w| w[0].1 <= w[1].0));
    }

    #[test]
    fn test_missing_preferences_mean_no_zones() {
        assert!(KarvonenZones::from_preferences(&Preferences::new()).is_none());
        assert!(KarvonenZones::new(180, 180).is_none());
    }
}
