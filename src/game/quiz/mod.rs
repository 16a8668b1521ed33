use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use self::definition::*;
use self::persisted::PersistedSets;
use self::queue::{FilterMode, Queue};
use self::settings::Settings;
use self::view::*;
use crate::storage::KeyValueStore;

pub mod definition;
pub mod persisted;
pub mod queue;
pub mod settings;
pub mod view;


#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    Correct,
    Wrong,
}

/// Queue, position and per-question progress for one session.
///
/// Answers and statuses are keyed by question id, so they survive queue
/// rebuilds (filter or randomize changes) and are only cleared by `restart`.
pub struct Quiz<S> {
    bank: QuestionBank,
    sets: PersistedSets<S>,
    settings: Settings,
    queue: Queue,
    position: usize,
    answers: HashMap<QuestionId, usize>,
    statuses: HashMap<QuestionId, Status>,
    rng: StdRng,
}

impl<S: KeyValueStore> Quiz<S> {
    pub fn new(bank: QuestionBank, sets: PersistedSets<S>, settings: Settings) -> Self {
        Quiz::with_rng(bank, sets, settings, StdRng::from_entropy())
    }

    pub fn with_rng(
        bank: QuestionBank,
        sets: PersistedSets<S>,
        settings: Settings,
        rng: StdRng,
    ) -> Self {
        let mut quiz = Quiz {
            bank,
            sets,
            settings,
            queue: Vec::new(),
            position: 0,
            answers: HashMap::new(),
            statuses: HashMap::new(),
            rng,
        };
        quiz.rebuild();
        quiz
    }

    pub fn rebuild(&mut self) {
        self.queue = queue::build(
            &self.bank,
            self.settings.filter,
            &self.sets,
            self.settings.randomize,
            &mut self.rng,
        );
        self.position = 0;
        info!(
            "Quiz ready with {} of {} questions ({:?})",
            self.queue.len(),
            self.bank.len(),
            self.settings.filter
        );
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.statuses.clear();
        self.rebuild();
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.settings.filter = filter;
        self.rebuild();
    }

    pub fn set_randomize(&mut self, randomize: bool) {
        self.settings.randomize = randomize;
        self.rebuild();
    }

    pub fn set_instant_check(&mut self, instant_check: bool) {
        self.settings.instant_check = instant_check;
    }

    pub fn set_nav_color(&mut self, nav_color: bool) {
        self.settings.nav_color = nav_color;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[cfg(test)]
    pub fn sets(&self) -> &PersistedSets<S> {
        &self.sets
    }

    #[cfg(test)]
    pub fn queue(&self) -> &[Arc<Question>] {
        &self.queue
    }

    /// `None` while the queue is empty.
    #[cfg(test)]
    pub fn position(&self) -> Option<usize> {
        if self.queue.is_empty() {
            None
        } else {
            Some(self.position)
        }
    }

    pub fn current(&self) -> Option<&Arc<Question>> {
        self.queue.get(self.position)
    }

    pub fn answer(&self, id: QuestionId) -> Option<usize> {
        self.answers.get(&id).copied()
    }

    pub fn status(&self, id: QuestionId) -> Option<Status> {
        self.statuses.get(&id).copied()
    }

    /// Records a choice, replacing any earlier one. Does not check it: callers
    /// honor `settings().instant_check` themselves.
    pub fn select_option(&mut self, question_id: QuestionId, option: usize) -> bool {
        let valid = self
            .bank
            .get(question_id)
            .map_or(false, |q| q.has_option(option));
        if valid {
            self.answers.insert(question_id, option);
        }
        valid
    }

    pub fn check_answer(&mut self) -> Option<Status> {
        let question = self.current()?.clone();
        let selected = self.answer(question.id)?;
        let status = if question.is_correct(selected) {
            Status::Correct
        } else {
            Status::Wrong
        };
        self.statuses.insert(question.id, status);
        self.sets
            .record_outcome(question.id, status == Status::Correct);
        debug!("Question {} checked: {:?}", question.id, status);
        Some(status)
    }

    /// Out-of-range indices are ignored.
    pub fn goto(&mut self, index: usize) -> Option<QuestionView> {
        if index >= self.queue.len() {
            return None;
        }
        self.position = index;
        self.view()
    }

    pub fn next(&mut self) -> Option<QuestionView> {
        self.goto(self.position + 1)
    }

    pub fn previous(&mut self) -> Option<QuestionView> {
        self.goto(self.position.checked_sub(1)?)
    }

    /// Queue membership is untouched until the next rebuild, even when the
    /// saved filter is active.
    pub fn toggle_save(&mut self) -> Option<bool> {
        let id = self.current()?.id;
        Some(self.sets.toggle_saved(id))
    }

    pub fn finish(&self) -> ScoreSummary {
        let mut correct_count = 0;
        let mut answered_count = 0;
        for question in &self.queue {
            match self.status(question.id) {
                Some(Status::Correct) => {
                    answered_count += 1;
                    correct_count += 1;
                }
                Some(Status::Wrong) => answered_count += 1,
                None => (),
            }
        }
        ScoreSummary::new(correct_count, answered_count, self.queue.len())
    }

    pub fn view(&self) -> Option<QuestionView> {
        let question = self.current()?;
        let selected = self.answer(question.id);
        let status = self.status(question.id);

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let is_selected = selected == Some(index);
                let feedback = match status {
                    None => None,
                    Some(_) if question.is_correct(index) => Some(Feedback::Correct),
                    Some(_) if is_selected => Some(Feedback::Incorrect),
                    Some(_) => None,
                };
                OptionView {
                    text: text.clone(),
                    selected: is_selected,
                    feedback,
                }
            })
            .collect();

        let next_action = if self.position + 1 == self.queue.len() {
            NextAction::Submit
        } else {
            NextAction::Advance
        };

        Some(QuestionView {
            id: question.id,
            category: question.category.clone(),
            text: question.text.clone(),
            options,
            note: status.and(question.note.clone()),
            position: self.position,
            total: self.queue.len(),
            is_saved: self.sets.is_saved(question.id),
            status,
            next_action,
            filter: self.settings.filter,
            markers: self.markers(),
        })
    }

    fn markers(&self) -> Vec<NavMarker> {
        self.queue
            .iter()
            .enumerate()
            .map(|(index, question)| NavMarker {
                number: index + 1,
                is_current: index == self.position,
                is_saved: self.sets.is_saved(question.id),
                status: if self.settings.nav_color {
                    self.status(question.id)
                } else {
                    None
                },
            })
            .collect()
    }
}
