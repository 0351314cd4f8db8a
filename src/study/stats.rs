//! Sample learning statistics for the dashboard and profile.

use super::history::ActivityKind;

pub(crate) struct SubjectStat {
    pub name: &'static str,
    pub hours: u32,
    pub quiz_score: u32,
}

pub(crate) struct RecentActivity {
    pub kind: ActivityKind,
    pub subject: &'static str,
    pub score: Option<&'static str>,
    pub when: &'static str,
}

pub(crate) struct SubjectShare {
    pub name: &'static str,
    pub hours: u32,
    pub percentage: u32,
}

pub(crate) struct DayHours {
    pub day: &'static str,
    pub hours: f64,
}

pub(crate) struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub when: &'static str,
}

pub(crate) struct ProfileSummary {
    pub join_date: &'static str,
    pub learning_streak_days: u32,
    pub total_hours: u32,
    pub completed_quizzes: u32,
    pub studied_subjects: u32,
}

pub(crate) const SUBJECTS: [SubjectStat; 4] = [
    SubjectStat { name: "Computer Science", hours: 12, quiz_score: 85 },
    SubjectStat { name: "Mathematics", hours: 8, quiz_score: 72 },
    SubjectStat { name: "Physics", hours: 5, quiz_score: 90 },
    SubjectStat { name: "Chemistry", hours: 3, quiz_score: 65 },
];

pub(crate) const RECENT_ACTIVITY: [RecentActivity; 4] = [
    RecentActivity { kind: ActivityKind::Quiz, subject: "Computer Science", score: Some("85%"), when: "2 hours ago" },
    RecentActivity { kind: ActivityKind::Notes, subject: "Mathematics", score: None, when: "Yesterday" },
    RecentActivity { kind: ActivityKind::Chat, subject: "Physics Textbook", score: None, when: "2 days ago" },
    RecentActivity { kind: ActivityKind::Flashcards, subject: "Chemistry", score: None, when: "3 days ago" },
];

pub(crate) const LEARNING_STREAK_DAYS: u32 = 7;

pub(crate) const PROFILE: ProfileSummary = ProfileSummary {
    join_date: "January 15, 2023",
    learning_streak_days: LEARNING_STREAK_DAYS,
    total_hours: 87,
    completed_quizzes: 24,
    studied_subjects: 5,
};

pub(crate) const SUBJECT_SHARES: [SubjectShare; 5] = [
    SubjectShare { name: "Computer Science", hours: 32, percentage: 45 },
    SubjectShare { name: "Mathematics", hours: 18, percentage: 20 },
    SubjectShare { name: "Physics", hours: 15, percentage: 17 },
    SubjectShare { name: "Chemistry", hours: 12, percentage: 14 },
    SubjectShare { name: "Biology", hours: 10, percentage: 11 },
];

pub(crate) const WEEKLY_HOURS: [DayHours; 7] = [
    DayHours { day: "Mon", hours: 2.5 },
    DayHours { day: "Tue", hours: 1.8 },
    DayHours { day: "Wed", hours: 3.2 },
    DayHours { day: "Thu", hours: 1.5 },
    DayHours { day: "Fri", hours: 2.0 },
    DayHours { day: "Sat", hours: 3.8 },
    DayHours { day: "Sun", hours: 2.1 },
];

pub(crate) const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { title: "Learning Streak", description: "7 days in a row", when: "Today" },
    Achievement { title: "Quiz Master", description: "Scored 90%+ on 5 quizzes", when: "Yesterday" },
    Achievement { title: "Knowledge Explorer", description: "Studied 5 different subjects", when: "3 days ago" },
    Achievement { title: "Dedicated Learner", description: "Reached 50 hours of learning", when: "1 week ago" },
];

pub(crate) fn total_hours(subjects: &[SubjectStat]) -> u32 {
    subjects.iter().map(|s| s.hours).sum()
}

/// Mean quiz score rounded to the nearest whole percent; 0 when empty.
pub(crate) fn average_score(subjects: &[SubjectStat]) -> u32 {
    if subjects.is_empty() {
        return 0;
    }
    let sum: u32 = subjects.iter().map(|s| s.quiz_score).sum();
    (f64::from(sum) / subjects.len() as f64).round() as u32
}

/// Width of a bar relative to the largest value, in percent.
pub(crate) fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_totals() {
        assert_eq!(total_hours(&SUBJECTS), 28);
        // (85 + 72 + 90 + 65) / 4 = 78
        assert_eq!(average_score(&SUBJECTS), 78);
        assert_eq!(average_score(&[]), 0);
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(1.9, 3.8), 50.0);
        assert_eq!(bar_percent(5.0, 0.0), 0.0);
        assert_eq!(bar_percent(9.0, 3.0), 100.0);
    }
}
