use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, error, info, warn};

pub mod quiz;

use self::quiz::definition::{LoadError, QuestionBank};
use self::quiz::persisted::PersistedSets;
use self::quiz::settings::Settings;
use self::quiz::view::{NextAction, ScoreSummary};
use self::quiz::Quiz;
use crate::commands::Command;
use crate::output::{Message, Presenter, Screen};
use crate::storage::KeyValueStore;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Loading,
    LoadFailed,
    Ready,
    Finished,
}

enum Phase<S> {
    Loading {
        store: S,
        settings: Settings,
    },
    LoadFailed(String),
    Quiz {
        quiz: Quiz<S>,
        results: Option<ScoreSummary>,
    },
}

/// One run of the program: loading, then either a load failure or a quiz.
pub struct Game<S, P> {
    current_phase: Phase<S>,
    presenter: P,
}

impl<S: KeyValueStore, P: Presenter> Game<S, P> {
    pub fn new(store: S, settings: Settings, presenter: P) -> Self {
        let mut game = Game {
            current_phase: Phase::Loading { store, settings },
            presenter,
        };
        game.render();
        game
    }

    pub fn state(&self) -> SessionState {
        match &self.current_phase {
            Phase::Loading { .. } => SessionState::Loading,
            Phase::LoadFailed(_) => SessionState::LoadFailed,
            Phase::Quiz { results: None, .. } => SessionState::Ready,
            Phase::Quiz {
                results: Some(_), ..
            } => SessionState::Finished,
        }
    }

    #[cfg(test)]
    pub fn quiz(&self) -> Option<&Quiz<S>> {
        match &self.current_phase {
            Phase::Quiz { quiz, .. } => Some(quiz),
            _ => None,
        }
    }

    pub fn on_load(&mut self, result: std::result::Result<QuestionBank, LoadError>) {
        let placeholder = Phase::LoadFailed(String::new());
        let (store, settings) = match std::mem::replace(&mut self.current_phase, placeholder) {
            Phase::Loading { store, settings } => (store, settings),
            other => {
                warn!("Ignoring question bank load outside of the loading phase");
                self.current_phase = other;
                return;
            }
        };

        let phase = match result {
            Ok(bank) => {
                let sets = PersistedSets::load(store);
                Phase::Quiz {
                    quiz: Quiz::new(bank, sets, settings),
                    results: None,
                }
            }
            Err(e) => {
                let report = anyhow!(e);
                error!("Load error: {:#}", report);
                Phase::LoadFailed(format!("{:#}", report))
            }
        };
        self.set_current_phase(phase);
    }

    /// Runs a command and reports a rejection to the presenter.
    pub fn dispatch(&mut self, command: Command) {
        if let Err(e) = self.handle(command) {
            debug!("Command rejected: {:#}", e);
            self.say(&Message::Rejected(e.to_string()));
        }
    }

    pub fn report_unknown(&mut self, input: &str) {
        self.say(&Message::UnknownCommand(input.trim().to_owned()));
    }

    pub fn handle(&mut self, command: Command) -> Result<()> {
        if command == Command::Help {
            self.say(&Message::Help);
            return Ok(());
        }

        let (quiz, results) = match &mut self.current_phase {
            Phase::Quiz { quiz, results } => (quiz, results),
            Phase::Loading { .. } => bail!("The questions are still loading"),
            Phase::LoadFailed(_) => {
                bail!("The questions could not be loaded, restart the program to try again")
            }
        };

        let mut notice = None;
        match command {
            Command::SetFilter(filter) => {
                quiz.set_filter(filter);
                *results = None;
                notice = Some(Message::FilterApplied(filter));
            }
            Command::ToggleRandom => {
                let randomize = !quiz.settings().randomize;
                quiz.set_randomize(randomize);
                *results = None;
                notice = Some(Message::RandomizeToggled(randomize));
            }
            Command::Restart => {
                quiz.restart();
                *results = None;
            }
            Command::ToggleInstant => {
                let instant_check = !quiz.settings().instant_check;
                quiz.set_instant_check(instant_check);
                notice = Some(Message::InstantCheckToggled(instant_check));
            }
            Command::ToggleNavColor => {
                let nav_color = !quiz.settings().nav_color;
                quiz.set_nav_color(nav_color);
                notice = Some(Message::NavColorToggled(nav_color));
            }
            _ if results.is_some() => {
                bail!("The quiz is over, restart or change the filter to begin a new attempt")
            }
            Command::Select(option) => {
                let question_id = quiz.current().context("There is no question to answer")?.id;
                if !quiz.select_option(question_id, option) {
                    bail!("There is no option {}", option + 1);
                }
                if quiz.settings().instant_check {
                    quiz.check_answer();
                }
            }
            Command::Check => {
                quiz.check_answer();
            }
            Command::Next => {
                let is_last = quiz
                    .view()
                    .map_or(false, |view| view.next_action == NextAction::Submit);
                if is_last {
                    *results = Some(Self::finish(quiz));
                } else {
                    quiz.next();
                }
            }
            Command::Previous => {
                quiz.previous();
            }
            Command::Goto(index) => {
                quiz.goto(index);
            }
            Command::ToggleSave => {
                let is_saved = quiz.toggle_save().context("There is no question to save")?;
                notice = Some(Message::SaveToggled(is_saved));
            }
            Command::Finish => {
                *results = Some(Self::finish(quiz));
            }
            Command::Help | Command::Quit => (),
        }

        if let Some(message) = notice {
            self.say(&message);
        }
        self.render();
        Ok(())
    }

    fn finish(quiz: &Quiz<S>) -> ScoreSummary {
        let summary = quiz.finish();
        info!(
            "Quiz submitted: {}/{} correct, {} answered ({}%)",
            summary.correct_count,
            summary.total_in_queue,
            summary.answered_count,
            summary.percentage
        );
        summary
    }

    fn set_current_phase(&mut self, phase: Phase<S>) {
        self.current_phase = phase;
        debug!("Entering session state: {:?}", self.state());
        self.render();
    }

    fn render(&mut self) {
        let screen = match &self.current_phase {
            Phase::Loading { .. } => Screen::Loading,
            Phase::LoadFailed(reason) => Screen::LoadFailed(reason.clone()),
            Phase::Quiz {
                results: Some(summary),
                ..
            } => Screen::Results(*summary),
            Phase::Quiz {
                quiz,
                results: None,
            } => match quiz.view() {
                Some(view) => Screen::Question(view),
                None => Screen::Empty(quiz.settings().filter),
            },
        };
        if let Err(e) = self.presenter.render(&screen) {
            warn!("Could not render screen: {:#}", e);
        }
    }

    fn say(&mut self, message: &Message) {
        if let Err(e) = self.presenter.say(message) {
            warn!("Could not display message: {:#}", e);
        }
    }
}
