use crate::history::ExcuseLog;
use crate::models::{Notification, NotificationKind};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const STREAK_THRESHOLD: u32 = 3;
const MILESTONE_THRESHOLD: usize = 10;
const VARIETY_THRESHOLD: usize = 5;

#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: &'static str,
    pub message: &'static str,
    pub kind: NotificationKind,
}

/// Durable notification list, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationCenter {
    pub notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn add(&mut self, draft: NotificationDraft) {
        self.notifications.insert(
            0,
            Notification {
                id: Uuid::new_v4().to_string(),
                title: draft.title.to_string(),
                message: draft.message.to_string(),
                kind: draft.kind,
                timestamp: Utc::now().timestamp_millis(),
                read: false,
            },
        );
    }

    /// Marks one notification read. A missing id is a silent no-op.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        for notification in &mut self.notifications {
            if notification.id == id {
                notification.read = true;
                return true;
            }
        }
        false
    }

    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

/// Values the milestone checks watch, captured before and after a history
/// mutation so each threshold fires only at the moment it is first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneSnapshot {
    pub streak: u32,
    pub entry_count: usize,
    pub distinct_workouts: usize,
}

impl MilestoneSnapshot {
    pub fn capture(log: &ExcuseLog) -> Self {
        Self {
            streak: log.streak,
            entry_count: log.entries.len(),
            distinct_workouts: log.distinct_workouts(),
        }
    }
}

/// Edge-triggered milestone evaluation: a condition fires when its value
/// arrives exactly at the threshold and was not already there. A value that
/// left the threshold and returned would fire again, but no code path
/// decreases any of the watched values.
pub fn crossed_milestones(
    before: &MilestoneSnapshot,
    after: &MilestoneSnapshot,
) -> Vec<NotificationDraft> {
    let mut fired = Vec::new();

    if after.streak == STREAK_THRESHOLD && before.streak != STREAK_THRESHOLD {
        fired.push(NotificationDraft {
            title: "Streak Achievement",
            message: "You've maintained a 3-day excuse streak! Keep up the creative avoidance!",
            kind: NotificationKind::Streak,
        });
    }

    if after.entry_count == MILESTONE_THRESHOLD && before.entry_count != MILESTONE_THRESHOLD {
        fired.push(NotificationDraft {
            title: "Milestone Reached",
            message: "You've generated 10 excuses! You're becoming a master of avoidance!",
            kind: NotificationKind::Milestone,
        });
    }

    if after.distinct_workouts == VARIETY_THRESHOLD
        && before.distinct_workouts != VARIETY_THRESHOLD
    {
        fired.push(NotificationDraft {
            title: "Variety Achievement",
            message: "You've now avoided 5 different types of workouts. Such versatility!",
            kind: NotificationKind::Achievement,
        });
    }

    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot(streak: u32, entry_count: usize, distinct_workouts: usize) -> MilestoneSnapshot {
        MilestoneSnapshot {
            streak,
            entry_count,
            distinct_workouts,
        }
    }

    #[test]
    fn streak_notification_fires_exactly_once_across_a_run() {
        let mut fired_total = 0;
        let mut previous = snapshot(0, 0, 1);
        for streak in 1..=5 {
            let next = snapshot(streak, streak as usize, 1);
            let fired = crossed_milestones(&previous, &next);
            fired_total += fired
                .iter()
                .filter(|draft| draft.kind == NotificationKind::Streak)
                .count();
            previous = next;
        }
        assert_eq!(fired_total, 1);
    }

    #[test]
    fn unchanged_threshold_value_does_not_refire() {
        let at_threshold = snapshot(3, 5, 2);
        assert!(crossed_milestones(&at_threshold, &at_threshold).is_empty());
    }

    #[test]
    fn tenth_entry_fires_milestone() {
        let fired = crossed_milestones(&snapshot(1, 9, 3), &snapshot(1, 10, 3));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, NotificationKind::Milestone);
        assert_eq!(fired[0].title, "Milestone Reached");
    }

    #[test]
    fn fifth_distinct_workout_fires_variety_achievement() {
        let fired = crossed_milestones(&snapshot(2, 7, 4), &snapshot(2, 8, 5));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, NotificationKind::Achievement);
    }

    #[test]
    fn milestones_fire_through_real_log_mutations() {
        let mut log = ExcuseLog::default();
        let mut center = NotificationCenter::default();
        let workouts = ["running", "yoga", "cycling", "swimming", "HIIT"];

        for (offset, workout) in workouts.iter().enumerate() {
            let today = NaiveDate::from_ymd_opt(2026, 4, 1 + offset as u32).unwrap();
            let before = MilestoneSnapshot::capture(&log);
            log.add_excuse(today, format!("no {workout} today"), (*workout).into(), None, None);
            let after = MilestoneSnapshot::capture(&log);
            for draft in crossed_milestones(&before, &after) {
                center.add(draft);
            }
        }

        // Day 3 crosses the streak threshold, day 5 the variety threshold.
        assert_eq!(center.notifications.len(), 2);
        assert_eq!(center.notifications[0].kind, NotificationKind::Achievement);
        assert_eq!(center.notifications[1].kind, NotificationKind::Streak);
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn read_state_transitions() {
        let mut center = NotificationCenter::default();
        center.add(NotificationDraft {
            title: "Streak Achievement",
            message: "msg",
            kind: NotificationKind::Streak,
        });
        center.add(NotificationDraft {
            title: "Milestone Reached",
            message: "msg",
            kind: NotificationKind::Milestone,
        });

        assert_eq!(center.unread_count(), 2);
        let id = center.notifications[1].id.clone();
        assert!(center.mark_as_read(&id));
        assert_eq!(center.unread_count(), 1);
        assert!(!center.mark_as_read("missing-id"));

        center.mark_all_as_read();
        assert_eq!(center.unread_count(), 0);

        center.clear();
        assert!(center.notifications.is_empty());
    }
}
