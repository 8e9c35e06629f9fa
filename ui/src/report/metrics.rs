//! Aggregate statistics for one report view.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use time::Date;

use super::dataset::Dataset;

/// Recovery-time histogram bands. Contiguous and exhaustive over `[0, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryBand {
    /// `≤ 5` minutes.
    UpTo5,
    /// `(5, 10]` minutes.
    UpTo10,
    /// `(10, 15]` minutes.
    UpTo15,
    /// `> 15` minutes.
    Over15,
}

impl RecoveryBand {
    pub const ALL: [RecoveryBand; 4] = [
        RecoveryBand::UpTo5,
        RecoveryBand::UpTo10,
        RecoveryBand::UpTo15,
        RecoveryBand::Over15,
    ];

    pub fn classify(minutes: f64) -> Self {
        if minutes <= 5.0 {
            RecoveryBand::UpTo5
        } else if minutes <= 10.0 {
            RecoveryBand::UpTo10
        } else if minutes <= 15.0 {
            RecoveryBand::UpTo15
        } else {
            RecoveryBand::Over15
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecoveryBand::UpTo5 => "≤ 5 min",
            RecoveryBand::UpTo10 => "≤ 10 min",
            RecoveryBand::UpTo15 => "≤ 15 min",
            RecoveryBand::Over15 => "> 15 min",
        }
    }

    fn index(self) -> usize {
        match self {
            RecoveryBand::UpTo5 => 0,
            RecoveryBand::UpTo10 => 1,
            RecoveryBand::UpTo15 => 2,
            RecoveryBand::Over15 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts([usize; 4]);

impl BandCounts {
    pub fn get(&self, band: RecoveryBand) -> usize {
        self.0[band.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecoveryBand, usize)> + '_ {
        RecoveryBand::ALL.into_iter().map(|band| (band, self.get(band)))
    }

    fn record(&mut self, minutes: f64) {
        self.0[RecoveryBand::classify(minutes).index()] += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenterCount {
    pub center: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: Date,
    pub count: usize,
}

/// Summary of a dataset. Statistics are `None` when the dataset is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub count: usize,
    pub mean_minutes: Option<f64>,
    pub min_minutes: Option<f64>,
    pub max_minutes: Option<f64>,
    pub bands: BandCounts,
    /// Descending by count, ties by label.
    pub per_center: Vec<CenterCount>,
    /// Ascending by date.
    pub daily: Vec<DailyCount>,
}

impl Metrics {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn summarize(dataset: &Dataset) -> Metrics {
    let events = dataset.events();
    if events.is_empty() {
        return Metrics::empty();
    }

    let mut bands = BandCounts::default();
    let mut per_center: HashMap<&str, usize> = HashMap::new();
    let mut daily: BTreeMap<Date, usize> = BTreeMap::new();
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for event in events {
        let minutes = event.recovery_minutes;
        sum += minutes;
        min = min.min(minutes);
        max = max.max(minutes);
        bands.record(minutes);

        if let Some(center) = event.center.as_deref() {
            *per_center.entry(center).or_default() += 1;
        }
        *daily.entry(event.alarm_time.date()).or_default() += 1;
    }

    let mut per_center: Vec<CenterCount> = per_center
        .into_iter()
        .map(|(center, count)| CenterCount {
            center: center.to_string(),
            count,
        })
        .collect();
    per_center.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.center.cmp(&b.center)));

    Metrics {
        count: events.len(),
        mean_minutes: Some(sum / events.len() as f64),
        min_minutes: Some(min),
        max_minutes: Some(max),
        bands,
        per_center,
        daily: daily
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::event::DerivedEvent;
    use time::macros::{date, datetime};
    use time::PrimitiveDateTime;

    fn event(center: Option<&str>, alarm_time: PrimitiveDateTime, minutes: f64) -> DerivedEvent {
        DerivedEvent {
            center: center.map(str::to_string),
            ticket_id: String::new(),
            alarm_time,
            normalization_time: alarm_time + time::Duration::seconds_f64(minutes * 60.0),
            recovery_minutes: minutes,
        }
    }

    #[test]
    fn band_edges_are_inclusive_on_the_right() {
        assert_eq!(RecoveryBand::classify(0.0), RecoveryBand::UpTo5);
        assert_eq!(RecoveryBand::classify(5.0), RecoveryBand::UpTo5);
        assert_eq!(RecoveryBand::classify(5.01), RecoveryBand::UpTo10);
        assert_eq!(RecoveryBand::classify(10.0), RecoveryBand::UpTo10);
        assert_eq!(RecoveryBand::classify(15.0), RecoveryBand::UpTo15);
        assert_eq!(RecoveryBand::classify(15.5), RecoveryBand::Over15);
    }

    #[test]
    fn empty_dataset_has_undefined_statistics() {
        let metrics = summarize(&Dataset::default());
        assert_eq!(metrics.count, 0);
        assert!(metrics.is_empty());
        assert_eq!(metrics.mean_minutes, None);
        assert_eq!(metrics.min_minutes, None);
        assert_eq!(metrics.max_minutes, None);
        assert_eq!(metrics.bands.total(), 0);
        assert!(metrics.per_center.is_empty());
        assert!(metrics.daily.is_empty());
    }

    #[test]
    fn summarizes_counts_and_statistics() {
        let day_one = datetime!(2024-01-02 10:00:00);
        let day_two = datetime!(2024-01-01 23:59:00);
        let dataset = Dataset::new(
            vec![
                event(Some("B"), day_one, 2.0),
                event(Some("A"), day_one, 7.0),
                event(Some("A"), day_two, 12.0),
                event(None, day_two, 30.0),
                event(Some("B"), day_one, 4.0),
                event(Some("C"), day_one, 5.0),
            ],
            true,
        );

        let metrics = summarize(&dataset);
        assert_eq!(metrics.count, 6);
        assert_eq!(metrics.mean_minutes, Some(10.0));
        assert_eq!(metrics.min_minutes, Some(2.0));
        assert_eq!(metrics.max_minutes, Some(30.0));

        assert_eq!(metrics.bands.get(RecoveryBand::UpTo5), 3);
        assert_eq!(metrics.bands.get(RecoveryBand::UpTo10), 1);
        assert_eq!(metrics.bands.get(RecoveryBand::UpTo15), 1);
        assert_eq!(metrics.bands.get(RecoveryBand::Over15), 1);
        assert_eq!(metrics.bands.total(), metrics.count);

        let centers: Vec<_> = metrics
            .per_center
            .iter()
            .map(|c| (c.center.as_str(), c.count))
            .collect();
        assert_eq!(centers, vec![("A", 2), ("B", 2), ("C", 1)]);

        assert_eq!(
            metrics.daily,
            vec![
                DailyCount {
                    date: date!(2024-01-01),
                    count: 2
                },
                DailyCount {
                    date: date!(2024-01-02),
                    count: 4
                },
            ]
        );
    }

    #[test]
    fn band_iteration_follows_band_order() {
        let dataset = Dataset::new(vec![event(None, datetime!(2024-01-01 00:00:00), 11.0)], false);
        let bands: Vec<_> = summarize(&dataset).bands.iter().collect();
        assert_eq!(
            bands,
            vec![
                (RecoveryBand::UpTo5, 0),
                (RecoveryBand::UpTo10, 0),
                (RecoveryBand::UpTo15, 1),
                (RecoveryBand::Over15, 0),
            ]
        );
    }
}
