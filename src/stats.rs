use crate::history::ExcuseLog;
use crate::models::{
    DailyPoint, DistributionPoint, DurationPoint, Intensity, StatsResponse,
};
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;

// Entries recorded before duration tracking default to a half-hour workout.
const FALLBACK_DURATION_MINUTES: u32 = 30;

pub fn build_stats(log: &ExcuseLog) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), log)
}

pub fn build_stats_at(today: NaiveDate, log: &ExcuseLog) -> StatsResponse {
    let entries = &log.entries;

    let mut workout_counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut intensity_counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut duration_sum = 0u64;
    for entry in entries {
        *workout_counts.entry(&entry.workout_type).or_default() += 1;
        *intensity_counts
            .entry(intensity_label(entry.intensity))
            .or_default() += 1;
        duration_sum += u64::from(entry.duration.unwrap_or(FALLBACK_DURATION_MINUTES));
    }

    let mut last_7_days = Vec::with_capacity(7);
    let mut duration_trend = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = date_key(date);
        let day_entries: Vec<_> = entries.iter().filter(|entry| entry.date == key).collect();
        let day_duration_sum: u64 = day_entries
            .iter()
            .map(|entry| u64::from(entry.duration.unwrap_or(FALLBACK_DURATION_MINUTES)))
            .sum();
        let avg_duration = if day_entries.is_empty() {
            0
        } else {
            (day_duration_sum as f64 / day_entries.len() as f64).round() as u32
        };

        last_7_days.push(DailyPoint {
            date: key.clone(),
            excuses: day_entries.len(),
        });
        duration_trend.push(DurationPoint {
            date: key,
            avg_duration,
        });
    }

    let top_workout = workout_counts
        .iter()
        .fold(None::<(&str, usize)>, |best, (name, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((*name, *count)),
        })
        .map(|(name, _)| name.to_string());

    let avg_duration_minutes = if entries.is_empty() {
        0
    } else {
        (duration_sum as f64 / entries.len() as f64).round() as u32
    };

    StatsResponse {
        streak: log.streak,
        total_excuses: entries.len(),
        unique_workouts: log.distinct_workouts(),
        avg_duration_minutes,
        top_workout,
        last_7_days,
        duration_trend,
        workout_distribution: to_distribution(workout_counts),
        intensity_distribution: to_distribution(intensity_counts),
    }
}

fn to_distribution(counts: BTreeMap<&str, usize>) -> Vec<DistributionPoint> {
    counts
        .into_iter()
        .map(|(name, count)| DistributionPoint {
            name: name.to_string(),
            count,
        })
        .collect()
}

fn intensity_label(intensity: Option<Intensity>) -> &'static str {
    match intensity.unwrap_or(Intensity::Moderate) {
        Intensity::Light => "light",
        Intensity::Moderate => "moderate",
        Intensity::Intense => "intense",
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn empty_log_produces_zeroed_stats() {
        let stats = build_stats_at(today(), &ExcuseLog::default());
        assert_eq!(stats.total_excuses, 0);
        assert_eq!(stats.avg_duration_minutes, 0);
        assert!(stats.top_workout.is_none());
        assert_eq!(stats.last_7_days.len(), 7);
        assert!(stats.last_7_days.iter().all(|day| day.excuses == 0));
        assert!(stats.workout_distribution.is_empty());
    }

    #[test]
    fn last_7_days_includes_each_day_once() {
        let mut log = ExcuseLog::default();
        log.add_excuse(
            today() - Duration::days(2),
            "busy".into(),
            "running".into(),
            Some(40),
            None,
        );
        let stats = build_stats_at(today(), &log);
        assert_eq!(stats.last_7_days.len(), 7);
        let key = (today() - Duration::days(2)).format("%Y-%m-%d").to_string();
        let point = stats
            .last_7_days
            .iter()
            .find(|day| day.date == key)
            .expect("missing day");
        assert_eq!(point.excuses, 1);
        let trend = stats
            .duration_trend
            .iter()
            .find(|day| day.date == key)
            .expect("missing day");
        assert_eq!(trend.avg_duration, 40);
    }

    #[test]
    fn missing_duration_and_intensity_fall_back_to_defaults() {
        let mut log = ExcuseLog::default();
        log.add_excuse(today(), "tired".into(), "yoga".into(), None, None);
        let stats = build_stats_at(today(), &log);
        assert_eq!(stats.avg_duration_minutes, 30);
        assert_eq!(stats.intensity_distribution.len(), 1);
        assert_eq!(stats.intensity_distribution[0].name, "moderate");
    }

    #[test]
    fn top_workout_is_the_most_frequent_type() {
        let mut log = ExcuseLog::default();
        let days = [
            ("running", 1),
            ("yoga", 2),
            ("yoga", 3),
        ];
        for (workout, ordinal) in days {
            log.add_excuse(
                NaiveDate::from_ymd_opt(2026, 1, ordinal).unwrap(),
                format!("{workout} excuse {ordinal}"),
                workout.into(),
                Some(20),
                Some(Intensity::Light),
            );
        }
        let stats = build_stats_at(today(), &log);
        assert_eq!(stats.top_workout.as_deref(), Some("yoga"));
        assert_eq!(stats.unique_workouts, 2);
        assert_eq!(stats.total_excuses, 3);
        assert_eq!(
            stats
                .workout_distribution
                .iter()
                .map(|point| (point.name.as_str(), point.count))
                .collect::<Vec<_>>(),
            vec![("running", 1), ("yoga", 2)]
        );
    }
}
