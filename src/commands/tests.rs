use super::*;

#[test]
fn parses_option_numbers() {
    assert_eq!(parse("1").unwrap(), Command::Select(0));
    assert_eq!(parse(" 3 ").unwrap(), Command::Select(2));
    assert!(parse("0").is_err());
}

#[test]
fn parses_navigation() {
    assert_eq!(parse("n").unwrap(), Command::Next);
    assert_eq!(parse("Avanti").unwrap(), Command::Next);
    assert_eq!(parse("p").unwrap(), Command::Previous);
    assert_eq!(parse("indietro").unwrap(), Command::Previous);
    assert_eq!(parse("g 12").unwrap(), Command::Goto(11));
    assert_eq!(parse("goto   4").unwrap(), Command::Goto(3));
    assert_eq!(parse("vai 1").unwrap(), Command::Goto(0));
    assert!(parse("g 0").is_err());
}

#[test]
fn parses_filters() {
    assert_eq!(
        parse("filter saved").unwrap(),
        Command::SetFilter(FilterMode::Saved)
    );
    assert_eq!(
        parse("Filtro Sbagliati").unwrap(),
        Command::SetFilter(FilterMode::Missed)
    );
    assert_eq!(
        parse("filtro tutti").unwrap(),
        Command::SetFilter(FilterMode::All)
    );
    assert!(parse("filter nothing").is_err());
}

#[test]
fn ignores_accents_and_punctuation() {
    assert_eq!(parse("Verifica!").unwrap(), Command::Check);
    assert_eq!(parse("ricominciá").unwrap(), Command::Restart);
    assert_eq!(parse("salva.").unwrap(), Command::ToggleSave);
}

#[test]
fn parses_toggles() {
    assert_eq!(parse("random").unwrap(), Command::ToggleRandom);
    assert_eq!(parse("istantaneo").unwrap(), Command::ToggleInstant);
    assert_eq!(parse("colori").unwrap(), Command::ToggleNavColor);
}

#[test]
fn parses_session_commands() {
    assert_eq!(parse("f").unwrap(), Command::Finish);
    assert_eq!(parse("consegna").unwrap(), Command::Finish);
    assert_eq!(parse("r").unwrap(), Command::Restart);
    assert_eq!(parse("help").unwrap(), Command::Help);
    assert_eq!(parse("q").unwrap(), Command::Quit);
}

#[test]
fn rejects_unknown_input() {
    assert!(parse("").is_err());
    assert!(parse("   ").is_err());
    assert!(parse("dance").is_err());
}
