//! Snapshots handed to the presenter. Plain data, no behavior beyond scoring
//! arithmetic.

use crate::game::quiz::definition::QuestionId;
use crate::game::quiz::queue::FilterMode;
use crate::game::quiz::Status;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NextAction {
    Advance,
    Submit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionView {
    pub text: String,
    pub selected: bool,
    pub feedback: Option<Feedback>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavMarker {
    pub number: usize,
    pub is_current: bool,
    pub is_saved: bool,
    /// Only reported when navigation colors are enabled.
    pub status: Option<Status>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionView {
    pub id: QuestionId,
    pub category: String,
    pub text: String,
    pub options: Vec<OptionView>,
    pub note: Option<String>,
    pub position: usize,
    pub total: usize,
    pub is_saved: bool,
    pub status: Option<Status>,
    pub next_action: NextAction,
    pub filter: FilterMode,
    pub markers: Vec<NavMarker>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Grade {
    Excellent,
    Passing,
    Failing,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScoreSummary {
    pub correct_count: usize,
    pub answered_count: usize,
    pub total_in_queue: usize,
    pub percentage: u32,
}

impl ScoreSummary {
    /// Unanswered questions count against the score.
    pub fn new(correct_count: usize, answered_count: usize, total_in_queue: usize) -> Self {
        let percentage = if total_in_queue > 0 {
            (correct_count as f64 / total_in_queue as f64 * 100.0).round() as u32
        } else {
            0
        };
        ScoreSummary {
            correct_count,
            answered_count,
            total_in_queue,
            percentage,
        }
    }

    pub fn grade(&self) -> Grade {
        match self.percentage {
            p if p >= 80 => Grade::Excellent,
            p if p >= 60 => Grade::Passing,
            _ => Grade::Failing,
        }
    }
}
