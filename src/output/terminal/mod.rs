use anyhow::Result;
use itertools::Itertools;
use std::io::Write;

use crate::game::quiz::queue::FilterMode;
use crate::game::quiz::view::{Feedback, Grade, NavMarker, NextAction, QuestionView};
use crate::game::quiz::Status;
use crate::output::{Message, Presenter, Screen};

#[cfg(test)]
mod tests;

const HELP: &str = "Comandi:
  1, 2, 3...       scegli una risposta
  c                verifica la risposta
  n / p            avanti / indietro
  g <numero>       vai alla domanda
  s                salva o rimuovi dai salvati
  f                consegna
  r                ricomincia
  filtro <tutti|salvati|sbagliati>
  casuale          ordine casuale on/off
  istantaneo       verifica immediata on/off
  colori           colori di navigazione on/off
  q                esci";

/// Plain text renderer. Writes each screen in full; no cursor control.
pub struct TerminalPresenter<W> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        TerminalPresenter { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn interpret_screen(screen: &Screen) -> String {
        use Screen::*;
        match screen {
            Loading => "Caricamento delle domande...".into(),
            LoadFailed(reason) => format!(
                "Errore nel caricamento del dataset.\nImpossibile caricare le domande. Riprova riavviando il quiz.\n({})",
                reason
            ),
            Empty(filter) => format!(
                "[{}]\nNessuna domanda trovata con questo filtro.",
                filter_label(*filter)
            ),
            Question(view) => interpret_question(view),
            Results(summary) => {
                let grade = match summary.grade() {
                    Grade::Excellent => "🟢",
                    Grade::Passing => "🟡",
                    Grade::Failing => "🔴",
                };
                format!(
                    "{} {}%\nHai risposto correttamente a {} domande su {}.\n(Risposte date: {})",
                    grade,
                    summary.percentage,
                    summary.correct_count,
                    summary.total_in_queue,
                    summary.answered_count
                )
            }
        }
    }

    fn interpret_message(message: &Message) -> String {
        use Message::*;
        match message {
            Help => HELP.into(),
            UnknownCommand(input) => format!("Comando non riconosciuto: {} (h per l'aiuto)", input),
            Rejected(reason) => format!("⚠️ {}", reason),
            FilterApplied(filter) => format!("Filtro: {}", filter_label(*filter)),
            RandomizeToggled(on) => format!("Ordine casuale: {}", on_off(*on)),
            InstantCheckToggled(on) => format!("Verifica immediata: {}", on_off(*on)),
            NavColorToggled(on) => format!("Colori di navigazione: {}", on_off(*on)),
            SaveToggled(true) => "★ Domanda salvata".into(),
            SaveToggled(false) => "☆ Domanda rimossa dai salvati".into(),
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, screen: &Screen) -> Result<()> {
        writeln!(self.out, "\n{}", Self::interpret_screen(screen))?;
        self.out.flush()?;
        Ok(())
    }

    fn say(&mut self, message: &Message) -> Result<()> {
        writeln!(self.out, "{}", Self::interpret_message(message))?;
        self.out.flush()?;
        Ok(())
    }
}

fn filter_label(filter: FilterMode) -> &'static str {
    match filter {
        FilterMode::All => "Tutti i quiz",
        FilterMode::Saved => "Solo salvati",
        FilterMode::Missed => "Solo sbagliati",
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "attivo"
    } else {
        "disattivo"
    }
}

fn interpret_question(view: &QuestionView) -> String {
    let star = if view.is_saved { "★" } else { "☆" };
    let mut text = format!(
        "[{}] Domanda {}/{} · #{} · {} {}\n{}\n",
        filter_label(view.filter),
        view.position + 1,
        view.total,
        view.id,
        view.category.to_uppercase(),
        star,
        view.text
    );

    for (index, option) in view.options.iter().enumerate() {
        let radio = if option.selected { "(•)" } else { "( )" };
        let mark = match option.feedback {
            Some(Feedback::Correct) => " ✅",
            Some(Feedback::Incorrect) => " ❌",
            None => "",
        };
        text += &format!("\n  {} {}. {}{}", radio, index + 1, option.text, mark);
    }

    if let Some(note) = &view.note {
        text += &format!("\n\nNota Scientifica: {}", note);
    }

    text += &format!("\n\n{}", view.markers.iter().map(interpret_marker).join(" "));

    let next = match view.next_action {
        NextAction::Advance => "[n] Avanti",
        NextAction::Submit => "[n] Consegna ✔",
    };
    text += &format!("\n[p] Indietro  {}", next);
    text
}

fn interpret_marker(marker: &NavMarker) -> String {
    let status = match marker.status {
        Some(Status::Correct) => "✓",
        Some(Status::Wrong) => "✗",
        None => "",
    };
    let saved = if marker.is_saved { "★" } else { "" };
    if marker.is_current {
        format!("[{}{}{}]", marker.number, saved, status)
    } else {
        format!("{}{}{}", marker.number, saved, status)
    }
}
