use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ActivityKind {
    Notes,
    Chat,
    Quiz,
    Flashcards,
    #[strum(serialize = "mindmap")]
    MindMap,
}

impl ActivityKind {
    /// Plural heading used by the type filter.
    pub fn filter_label(&self) -> &'static str {
        match self {
            Self::Notes => "Smart Notes",
            Self::Chat => "Chat Sessions",
            Self::Quiz => "Quizzes",
            Self::Flashcards => "Flashcards",
            Self::MindMap => "Mind Maps",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HistoryItem {
    pub id: u32,
    pub title: &'static str,
    pub kind: ActivityKind,
    /// ISO-8601, UTC.
    pub date: &'static str,
    pub preview: &'static str,
}

pub(crate) fn sample_history() -> Vec<HistoryItem> {
    let item = |id, title, kind, date, preview| HistoryItem {
        id,
        title,
        kind,
        date,
        preview,
    };
    vec![
        item(1, "Introduction to Neural Networks", ActivityKind::Chat, "2023-04-12T14:30:00Z", "I asked about the basics of neural networks and how they work..."),
        item(2, "Machine Learning Fundamentals", ActivityKind::Notes, "2023-04-10T09:15:00Z", "Smart notes on supervised vs unsupervised learning..."),
        item(3, "Deep Learning Quiz", ActivityKind::Quiz, "2023-04-08T16:45:00Z", "Scored 85% on the deep learning concepts quiz..."),
        item(4, "Convolutional Neural Networks", ActivityKind::Flashcards, "2023-04-05T11:20:00Z", "Reviewed 24 flashcards about CNN architecture..."),
        item(5, "AI Algorithms Overview", ActivityKind::MindMap, "2023-04-03T13:10:00Z", "Created a mind map of different AI algorithms and their applications..."),
        item(6, "Natural Language Processing", ActivityKind::Chat, "2023-04-01T10:30:00Z", "Discussion about tokenization and embeddings in NLP..."),
        item(7, "Reinforcement Learning Basics", ActivityKind::Notes, "2023-03-28T15:45:00Z", "Smart notes covering Q-learning and policy gradients..."),
    ]
}

/// Items matching `query` (title or preview, case-insensitive) and `kind`,
/// newest first.
pub(crate) fn filter_history(
    items: &[HistoryItem],
    query: &str,
    kind: Option<ActivityKind>,
) -> Vec<HistoryItem> {
    let needle = query.trim().to_lowercase();
    let mut out: Vec<HistoryItem> = items
        .iter()
        .filter(|i| kind.map_or(true, |k| i.kind == k))
        .filter(|i| {
            needle.is_empty()
                || i.title.to_lowercase().contains(&needle)
                || i.preview.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    // Same fixed-width UTC format, so string order is time order.
    out.sort_by(|a, b| b.date.cmp(a.date));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_returns_all_newest_first() {
        let items = sample_history();
        let out = filter_history(&items, "", None);
        assert_eq!(out.len(), 7);
        assert_eq!(out.first().map(|i| i.id), Some(1));
        assert_eq!(out.last().map(|i| i.id), Some(7));
    }

    #[test]
    fn test_search_matches_title_or_preview_case_insensitive() {
        let items = sample_history();
        let ids: Vec<u32> = filter_history(&items, "NLP", None).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![6]);

        let ids: Vec<u32> = filter_history(&items, "neural", None).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_type_filter_combines_with_search() {
        let items = sample_history();
        let notes = filter_history(&items, "", Some(ActivityKind::Notes));
        assert_eq!(notes.len(), 2);
        assert!(filter_history(&items, "quiz", Some(ActivityKind::Chat)).is_empty());
    }

    #[test]
    fn test_kind_parses_from_filter_value() {
        assert_eq!("mindmap".parse::<ActivityKind>().ok(), Some(ActivityKind::MindMap));
        assert_eq!(ActivityKind::Flashcards.as_ref(), "flashcards");
        assert!("all".parse::<ActivityKind>().is_err());
    }
}
