//! Peer-group (sector) means of each ratio.
//!
//! Means are taken over the members present in the current sample only, and
//! non-finite member values are pooled unchanged: one infinite P/E makes the
//! sector's mean P/E infinite, and the sector-relative comparison for every
//! member of that sector then fails.

use crate::RatioSet;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
struct SectorEntry {
    members: usize,
    mean: RatioSet,
}

/// Sector name to the arithmetic mean of each ratio over its members.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectorStats {
    sectors: BTreeMap<String, SectorEntry>,
}

impl SectorStats {
    /// Aggregate `(sector, ratios)` pairs into per-sector means.
    pub fn from_members<'a, I>(members: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a RatioSet)>,
    {
        let mut sums: BTreeMap<String, (usize, [f64; 6])> = BTreeMap::new();

        for (sector, ratios) in members {
            let (count, totals) = sums.entry(sector.to_string()).or_insert((0, [0.0; 6]));
            *count += 1;
            for (total, value) in totals.iter_mut().zip(ratios.as_array()) {
                *total += value;
            }
        }

        let sectors = sums
            .into_iter()
            .map(|(sector, (members, totals))| {
                let n = members as f64;
                let mean = RatioSet::from_array(totals.map(|total| total / n));
                (sector, SectorEntry { members, mean })
            })
            .collect();

        Self { sectors }
    }

    /// Mean ratios of `sector`, if it has any member.
    #[must_use]
    pub fn mean_for(&self, sector: &str) -> Option<&RatioSet> {
        self.sectors.get(sector).map(|entry| &entry.mean)
    }

    /// Number of members pooled into `sector` (zero if absent).
    #[must_use]
    pub fn member_count(&self, sector: &str) -> usize {
        self.sectors.get(sector).map_or(0, |entry| entry.members)
    }

    /// Sector names in lexical order.
    pub fn sectors(&self) -> impl Iterator<Item = &str> {
        self.sectors.keys().map(String::as_str)
    }

    /// Number of distinct sectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Whether no sector has been aggregated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ratios(value: f64) -> RatioSet {
        RatioSet::from_array([value; 6])
    }

    #[test]
    fn test_mean_per_sector() {
        let a = ratios(10.0);
        let b = ratios(30.0);
        let c = ratios(7.0);
        let stats = SectorStats::from_members([("Tech", &a), ("Energy", &c), ("Tech", &b)]);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.member_count("Tech"), 2);
        assert_eq!(stats.member_count("Energy"), 1);
        assert_eq!(stats.member_count("Utilities"), 0);
        assert_relative_eq!(stats.mean_for("Tech").unwrap().roe_pct, 20.0);
        assert_relative_eq!(stats.mean_for("Energy").unwrap().pe_ratio, 7.0);
        assert!(stats.mean_for("Utilities").is_none());
    }

    #[test]
    fn test_single_member_mean_is_exact() {
        let only = RatioSet::from_array([41.3, 17.9, 23.1, 12.7, 8.3, 33.3]);
        let stats = SectorStats::from_members([("Health", &only)]);
        assert_eq!(*stats.mean_for("Health").unwrap(), only);
    }

    #[test]
    fn test_non_finite_members_are_pooled() {
        let finite = ratios(10.0);
        let mut infinite = ratios(10.0);
        infinite.pe_ratio = f64::INFINITY;
        let mut undefined = ratios(10.0);
        undefined.roe_pct = f64::NAN;

        let stats = SectorStats::from_members([
            ("Tech", &finite),
            ("Tech", &infinite),
            ("Tech", &undefined),
        ]);
        let mean = stats.mean_for("Tech").unwrap();
        assert!(mean.pe_ratio.is_infinite());
        assert!(mean.roe_pct.is_nan());
        assert_relative_eq!(mean.gross_margin_pct, 10.0);
    }

    #[test]
    fn test_sectors_sorted() {
        let r = ratios(1.0);
        let stats = SectorStats::from_members([("Utilities", &r), ("Energy", &r), ("Tech", &r)]);
        let names: Vec<&str> = stats.sectors().collect();
        assert_eq!(names, vec!["Energy", "Tech", "Utilities"]);
    }

    #[test]
    fn test_empty() {
        let stats = SectorStats::from_members(std::iter::empty::<(&str, &RatioSet)>());
        assert!(stats.is_empty());
    }
}
