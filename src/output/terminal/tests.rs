use super::*;
use crate::game::quiz::view::{OptionView, ScoreSummary};

fn render(screen: &Screen) -> String {
    let mut presenter = TerminalPresenter::new(Vec::new());
    presenter.render(screen).unwrap();
    String::from_utf8(presenter.into_inner()).unwrap()
}

fn say(message: &Message) -> String {
    let mut presenter = TerminalPresenter::new(Vec::new());
    presenter.say(message).unwrap();
    String::from_utf8(presenter.into_inner()).unwrap()
}

fn example_view() -> QuestionView {
    QuestionView {
        id: 12,
        category: "chimica".to_owned(),
        text: "Simbolo del sodio?".to_owned(),
        options: vec![
            OptionView {
                text: "So".to_owned(),
                selected: true,
                feedback: Some(Feedback::Incorrect),
            },
            OptionView {
                text: "Na".to_owned(),
                selected: false,
                feedback: Some(Feedback::Correct),
            },
        ],
        note: Some("Dal latino natrium.".to_owned()),
        position: 1,
        total: 2,
        is_saved: true,
        status: Some(Status::Wrong),
        next_action: NextAction::Submit,
        filter: FilterMode::Saved,
        markers: vec![
            NavMarker {
                number: 1,
                is_current: false,
                is_saved: false,
                status: None,
            },
            NavMarker {
                number: 2,
                is_current: true,
                is_saved: true,
                status: Some(Status::Wrong),
            },
        ],
    }
}

#[test]
fn renders_load_failure() {
    let text = render(&Screen::LoadFailed("HTTP 404".to_owned()));
    assert!(text.contains("Errore nel caricamento del dataset."));
    assert!(text.contains("HTTP 404"));
}

#[test]
fn renders_empty_filter() {
    let text = render(&Screen::Empty(FilterMode::Missed));
    assert!(text.contains("Solo sbagliati"));
    assert!(text.contains("Nessuna domanda trovata con questo filtro."));
}

#[test]
fn renders_question() {
    let text = render(&Screen::Question(example_view()));
    assert!(text.contains("Domanda 2/2"));
    assert!(text.contains("#12"));
    assert!(text.contains("CHIMICA ★"));
    assert!(text.contains("(•) 1. So ❌"));
    assert!(text.contains("( ) 2. Na ✅"));
    assert!(text.contains("Nota Scientifica: Dal latino natrium."));
    assert!(text.contains("1 [2★✗]"));
    assert!(text.contains("Consegna"));
    assert!(!text.contains("Avanti"));
}

#[test]
fn renders_advance_label_before_last_question() {
    let mut view = example_view();
    view.next_action = NextAction::Advance;
    let text = render(&Screen::Question(view));
    assert!(text.contains("[n] Avanti"));
}

#[test]
fn renders_results() {
    let text = render(&Screen::Results(ScoreSummary::new(2, 3, 5)));
    assert!(text.contains("40%"));
    assert!(text.contains("Hai risposto correttamente a 2 domande su 5."));
    assert!(text.contains("🔴"));
}

#[test]
fn says_notices() {
    assert!(say(&Message::FilterApplied(FilterMode::All)).contains("Tutti i quiz"));
    assert!(say(&Message::SaveToggled(true)).contains("salvata"));
    assert!(say(&Message::Rejected("nope".to_owned())).contains("nope"));
    assert!(say(&Message::Help).contains("Comandi"));
}
