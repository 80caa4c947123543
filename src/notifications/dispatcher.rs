//! Preference gating and delivery in front of the UI.

use super::{Notification, NotificationKind};
use std::collections::HashSet;

/// Per-user display preferences, one independent switch per reminder class.
///
/// Weekly-target facts are treated as achievement alerts. The engine never
/// reads these; only the dispatcher applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub workout_reminders: bool,
    pub hydration_reminders: bool,
    pub meal_reminders: bool,
    pub rest_day_reminders: bool,
    pub streak_alerts: bool,
    pub achievement_alerts: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            workout_reminders: true,
            hydration_reminders: true,
            meal_reminders: true,
            rest_day_reminders: true,
            streak_alerts: true,
            achievement_alerts: true,
        }
    }
}

impl DisplayPreferences {
    /// Whether facts of this kind should be rendered.
    pub fn allows(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::PreWorkout => self.workout_reminders,
            NotificationKind::Hydration => self.hydration_reminders,
            NotificationKind::Meal => self.meal_reminders,
            NotificationKind::RestDay => self.rest_day_reminders,
            NotificationKind::StreakMilestone => self.streak_alerts,
            NotificationKind::Achievement | NotificationKind::WeeklyTarget => {
                self.achievement_alerts
            }
        }
    }
}

/// Delivery target for rendered notifications (toast layer, push bridge).
pub trait NotificationSink {
    /// Render or forward one notification.
    fn deliver(&mut self, notification: &Notification);
}

/// Sink that collects notifications in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct VecSink {
    /// Delivered notifications, in order
    pub delivered: Vec<Notification>,
}

impl NotificationSink for VecSink {
    fn deliver(&mut self, notification: &Notification) {
        self.delivered.push(notification.clone());
    }
}

/// Applies display preferences and dedupes achievement facts.
///
/// The evaluator has no memory of what was already shown, so the dispatcher
/// keeps a set of seen achievement icons and drops repeats.
pub struct Dispatcher<S: NotificationSink> {
    preferences: DisplayPreferences,
    sink: S,
    seen_achievements: HashSet<String>,
}

impl<S: NotificationSink> Dispatcher<S> {
    /// Create a dispatcher with the given preferences and sink.
    pub fn new(preferences: DisplayPreferences, sink: S) -> Self {
        Self {
            preferences,
            sink,
            seen_achievements: HashSet::new(),
        }
    }

    /// Update preferences in place.
    pub fn set_preferences(&mut self, preferences: DisplayPreferences) {
        self.preferences = preferences;
    }

    /// Gate and deliver one fact. Returns whether it was delivered.
    pub fn dispatch(&mut self, notification: &Notification) -> bool {
        if !self.preferences.allows(notification.kind) {
            tracing::debug!(kind = ?notification.kind, "Notification suppressed by preferences");
            return false;
        }

        if notification.kind == NotificationKind::Achievement
            && !self.seen_achievements.insert(notification.icon.clone())
        {
            tracing::debug!(icon = %notification.icon, "Duplicate achievement suppressed");
            return false;
        }

        self.sink.deliver(notification);
        true
    }

    /// Access the sink (for tests and previews).
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;

    #[test]
    fn test_preferences_gate_by_kind() {
        let prefs = DisplayPreferences {
            hydration_reminders: false,
            ..Default::default()
        };
        let mut dispatcher = Dispatcher::new(prefs, VecSink::default());

        assert!(!dispatcher.dispatch(&Notification::hydration_reminder()));
        assert!(dispatcher.dispatch(&Notification::meal_reminder()));
        assert_eq!(dispatcher.sink().delivered.len(), 1);
    }

    #[test]
    fn test_weekly_target_gates_under_achievement_alerts() {
        let prefs = DisplayPreferences {
            achievement_alerts: false,
            ..Default::default()
        };
        let mut dispatcher = Dispatcher::new(prefs, VecSink::default());

        assert!(!dispatcher.dispatch(&Notification::weekly_target_met(4, 4)));
    }

    #[test]
    fn test_duplicate_achievements_are_dropped() {
        let mut dispatcher = Dispatcher::new(DisplayPreferences::default(), VecSink::default());
        let fact = Notification::achievement_unlocked(AchievementId::Workouts10);

        assert!(dispatcher.dispatch(&fact));
        assert!(!dispatcher.dispatch(&fact));
        assert_eq!(dispatcher.sink().delivered.len(), 1);

        // A different achievement still goes through
        let other = Notification::achievement_unlocked(AchievementId::Streak3);
        assert!(dispatcher.dispatch(&other));
    }
}
