use super::fixtures::{MCQ_QUESTIONS, SHORT_ANSWER_QUESTIONS};
use strum::{AsRefStr, Display, EnumString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, AsRefStr, EnumString)]
pub(crate) enum QuizType {
    #[default]
    #[strum(serialize = "mcq")]
    Mcq,
    #[strum(serialize = "short")]
    ShortAnswer,
}

impl QuizType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mcq => "Multiple Choice",
            Self::ShortAnswer => "Short Answer",
        }
    }

    pub fn question_count(&self) -> usize {
        match self {
            Self::Mcq => MCQ_QUESTIONS.len(),
            Self::ShortAnswer => SHORT_ANSWER_QUESTIONS.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum QuizMode {
    #[default]
    Preview,
    InProgress,
    Feedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "title_case")]
pub(crate) enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Bar fill shown next to the assessment.
    pub fn progress(&self) -> u8 {
        match self {
            Self::Weak => 20,
            Self::Moderate => 50,
            Self::Strong => 90,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TopicStrength {
    pub topic: &'static str,
    pub strength: Strength,
    pub recommendation: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct QuestionReview {
    pub question: &'static str,
    pub answer: Option<String>,
    pub correct_answer: &'static str,
    pub is_correct: bool,
    pub explanation: &'static str,
}

/// Short answers longer than this count as a thorough response.
const THOROUGH_ANSWER_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct QuizSession {
    kind: QuizType,
    mode: QuizMode,
    current: usize,
    selected: Option<String>,
    draft: String,
    answers: Vec<Option<String>>,
    responses: Vec<String>,
}

impl QuizSession {
    pub fn new(kind: QuizType) -> Self {
        Self {
            kind,
            mode: QuizMode::Preview,
            current: 0,
            selected: None,
            draft: String::new(),
            answers: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn kind(&self) -> QuizType {
        self.kind
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn question_count(&self) -> usize {
        self.kind.question_count()
    }

    /// Changing the quiz type always starts over.
    pub fn set_kind(&mut self, kind: QuizType) {
        *self = Self::new(kind);
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    pub fn start(&mut self) {
        let n = self.question_count();
        *self = Self::new(self.kind);
        self.mode = QuizMode::InProgress;
        match self.kind {
            QuizType::Mcq => self.answers = vec![None; n],
            QuizType::ShortAnswer => self.responses = vec![String::new(); n],
        }
    }

    pub fn select(&mut self, option: impl Into<String>) {
        if self.mode == QuizMode::InProgress && self.kind == QuizType::Mcq {
            self.selected = Some(option.into());
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.mode == QuizMode::InProgress && self.kind == QuizType::ShortAnswer {
            self.draft = text.into();
        }
    }

    pub fn can_advance(&self) -> bool {
        if self.mode != QuizMode::InProgress {
            return false;
        }
        match self.kind {
            QuizType::Mcq => self.selected.is_some(),
            QuizType::ShortAnswer => !self.draft.trim().is_empty(),
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.question_count()
    }

    /// Records the pending answer and moves on. Returns false when nothing was
    /// recorded.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let i = self.current;
        match self.kind {
            QuizType::Mcq => {
                if let Some(slot) = self.answers.get_mut(i) {
                    *slot = self.selected.take();
                }
            }
            QuizType::ShortAnswer => {
                if let Some(slot) = self.responses.get_mut(i) {
                    *slot = std::mem::take(&mut self.draft);
                }
            }
        }

        if self.is_last_question() {
            self.mode = QuizMode::Feedback;
        } else {
            self.current += 1;
            self.selected = None;
            self.draft.clear();
        }
        true
    }

    /// Percentage of the way through, counting the question on screen.
    pub fn progress_percent(&self) -> f64 {
        let n = self.question_count();
        if n == 0 {
            return 0.0;
        }
        (self.current + 1) as f64 / n as f64 * 100.0
    }

    pub fn answer(&self, i: usize) -> Option<&str> {
        self.answers.get(i).and_then(|a| a.as_deref())
    }

    pub fn response(&self, i: usize) -> &str {
        self.responses.get(i).map(String::as_str).unwrap_or_default()
    }

    fn is_correct(&self, i: usize) -> bool {
        MCQ_QUESTIONS
            .get(i)
            .is_some_and(|q| self.answer(i) == Some(q.correct_answer))
    }

    /// Number of multiple-choice answers matching the key.
    pub fn score(&self) -> usize {
        if self.kind != QuizType::Mcq {
            return 0;
        }
        (0..MCQ_QUESTIONS.len()).filter(|&i| self.is_correct(i)).count()
    }

    pub fn score_percent(&self) -> u32 {
        let n = MCQ_QUESTIONS.len();
        if n == 0 {
            return 0;
        }
        (self.score() as f64 / n as f64 * 100.0).round() as u32
    }

    pub fn feedback_message(&self) -> &'static str {
        let score = self.score();
        let n = MCQ_QUESTIONS.len();
        if score == n {
            "Perfect score! Excellent work!"
        } else if score * 2 >= n {
            "Good job! Keep studying to improve."
        } else {
            "Keep practicing to improve your score."
        }
    }

    pub fn review(&self) -> Vec<QuestionReview> {
        MCQ_QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionReview {
                question: q.question,
                answer: self.answer(i).map(str::to_string),
                correct_answer: q.correct_answer,
                is_correct: self.is_correct(i),
                explanation: q.explanation,
            })
            .collect()
    }

    pub fn topic_strengths(&self) -> Vec<TopicStrength> {
        let right_or_weak = |i: usize| {
            if self.is_correct(i) {
                Strength::Strong
            } else {
                Strength::Weak
            }
        };
        let thorough = |i: usize| self.response(i).chars().count() > THOROUGH_ANSWER_CHARS;

        match self.kind {
            QuizType::Mcq => {
                let score = self.score();
                vec![
                    TopicStrength {
                        topic: "Neural Network Fundamentals",
                        strength: match score {
                            s if s >= 2 => Strength::Strong,
                            1 => Strength::Moderate,
                            _ => Strength::Weak,
                        },
                        recommendation: "Review the basic structure and types of neural networks.",
                    },
                    TopicStrength {
                        topic: "Activation Functions",
                        strength: right_or_weak(1),
                        recommendation: "Focus on understanding the purpose and types of activation functions.",
                    },
                    TopicStrength {
                        topic: "Training Algorithms",
                        strength: right_or_weak(2),
                        recommendation: "Study backpropagation and gradient descent algorithms in detail.",
                    },
                ]
            }
            QuizType::ShortAnswer => vec![
                TopicStrength {
                    topic: "Learning Paradigms",
                    strength: if thorough(0) { Strength::Strong } else { Strength::Moderate },
                    recommendation: "Compare and contrast supervised and unsupervised learning with examples.",
                },
                TopicStrength {
                    topic: "Model Optimization",
                    strength: if thorough(1) { Strength::Strong } else { Strength::Weak },
                    recommendation: "Study regularization techniques and early stopping in detail.",
                },
            ],
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuizType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(quiz: &mut QuizSession, picks: &[&str]) {
        quiz.start();
        for p in picks {
            quiz.select(*p);
            assert!(quiz.advance());
        }
    }

    #[test]
    fn test_one_wrong_answer_scores_two_of_three() {
        let mut quiz = QuizSession::new(QuizType::Mcq);
        answer_all(
            &mut quiz,
            &[
                "Bilateral Neural Network (BNN)",
                "To normalize the input data",
                "Backpropagation",
            ],
        );

        assert_eq!(quiz.mode(), QuizMode::Feedback);
        assert_eq!(quiz.score(), 2);
        assert_eq!(quiz.score_percent(), 67);
        assert_eq!(quiz.feedback_message(), "Good job! Keep studying to improve.");

        let review = quiz.review();
        assert!(review[0].is_correct);
        assert!(!review[1].is_correct);
        assert!(review[2].is_correct);
        assert_eq!(review[1].answer.as_deref(), Some("To normalize the input data"));
        assert_eq!(review[1].correct_answer, "To introduce non-linearity to the model");
        assert!(review[1].explanation.starts_with("Activation functions introduce"));
    }

    #[test]
    fn test_last_answer_counts_toward_score() {
        let mut quiz = QuizSession::new(QuizType::Mcq);
        answer_all(
            &mut quiz,
            &[
                "Bilateral Neural Network (BNN)",
                "To introduce non-linearity to the model",
                "Backpropagation",
            ],
        );
        assert_eq!(quiz.score(), 3);
        assert_eq!(quiz.feedback_message(), "Perfect score! Excellent work!");
    }

    #[test]
    fn test_cannot_advance_without_selection() {
        let mut quiz = QuizSession::new(QuizType::Mcq);
        assert!(!quiz.advance());
        quiz.start();
        assert!(!quiz.can_advance());
        assert!(!quiz.advance());
        assert_eq!(quiz.current(), 0);

        quiz.select("Decision trees");
        assert!(quiz.advance());
        assert_eq!(quiz.current(), 1);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_short_answer_needs_non_blank_text() {
        let mut quiz = QuizSession::new(QuizType::ShortAnswer);
        quiz.start();
        quiz.select("ignored");
        assert_eq!(quiz.selected(), None);

        quiz.set_draft("   ");
        assert!(!quiz.can_advance());
        quiz.set_draft("Labels versus no labels.");
        assert!(quiz.advance());
        assert_eq!(quiz.draft(), "");
        assert_eq!(quiz.response(0), "Labels versus no labels.");
    }

    #[test]
    fn test_short_answer_strengths_depend_on_length() {
        let mut quiz = QuizSession::new(QuizType::ShortAnswer);
        quiz.start();
        quiz.set_draft("short");
        quiz.advance();
        quiz.set_draft("x".repeat(101));
        quiz.advance();
        assert_eq!(quiz.mode(), QuizMode::Feedback);

        let s = quiz.topic_strengths();
        assert_eq!(s[0].strength, Strength::Moderate);
        assert_eq!(s[1].strength, Strength::Strong);
    }

    #[test]
    fn test_mcq_topic_strengths() {
        let mut quiz = QuizSession::new(QuizType::Mcq);
        answer_all(
            &mut quiz,
            &[
                "Decision trees",
                "To introduce non-linearity to the model",
                "K-means clustering",
            ],
        );
        let s = quiz.topic_strengths();
        assert_eq!(s[0].strength, Strength::Moderate);
        assert_eq!(s[1].strength, Strength::Strong);
        assert_eq!(s[2].strength, Strength::Weak);
        assert_eq!(quiz.feedback_message(), "Keep practicing to improve your score.");
    }

    #[test]
    fn test_switching_type_resets_progress() {
        let mut quiz = QuizSession::new(QuizType::Mcq);
        quiz.start();
        quiz.select("Backpropagation");
        quiz.advance();

        quiz.set_kind(QuizType::ShortAnswer);
        assert_eq!(quiz.mode(), QuizMode::Preview);
        assert_eq!(quiz.current(), 0);
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.answer(0), None);
    }

    #[test]
    fn test_progress_percent() {
        let mut quiz = QuizSession::new(QuizType::ShortAnswer);
        quiz.start();
        assert_eq!(quiz.progress_percent(), 50.0);
        quiz.set_draft("a");
        quiz.advance();
        assert_eq!(quiz.progress_percent(), 100.0);
    }

    #[test]
    fn test_strength_display_and_bar() {
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
        assert_eq!(Strength::Strong.progress(), 90);
        assert_eq!("short".parse::<QuizType>().ok(), Some(QuizType::ShortAnswer));
    }
}
