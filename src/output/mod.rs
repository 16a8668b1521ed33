use anyhow::Result;

use crate::game::quiz::queue::FilterMode;
use crate::game::quiz::view::{QuestionView, ScoreSummary};

#[cfg(test)]
pub mod mock;
pub mod terminal;

/// Everything the presenter needs to draw one full screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Screen {
    Loading,
    LoadFailed(String),
    Empty(FilterMode),
    Question(QuestionView),
    Results(ScoreSummary),
}

/// Short notices shown alongside the current screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Help,
    UnknownCommand(String),
    Rejected(String),
    FilterApplied(FilterMode),
    RandomizeToggled(bool),
    InstantCheckToggled(bool),
    NavColorToggled(bool),
    SaveToggled(bool),
}

pub trait Presenter {
    fn render(&mut self, screen: &Screen) -> Result<()>;

    fn say(&mut self, message: &Message) -> Result<()>;
}
