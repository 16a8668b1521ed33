use anyhow::{anyhow, bail, ensure, Result};
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::game::quiz::queue::FilterMode;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref FORBIDDEN_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9\\s]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new("\\s+").unwrap();
    static ref GOTO_REGEX: Regex = Regex::new("^(?:g|goto|vai) ([0-9]+)$").unwrap();
    static ref FILTER_REGEX: Regex = Regex::new("^(?:filter|filtro) ([a-z]+)$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Zero-based option index.
    Select(usize),
    Check,
    Next,
    Previous,
    /// Zero-based queue index.
    Goto(usize),
    ToggleSave,
    Finish,
    Restart,
    SetFilter(FilterMode),
    ToggleRandom,
    ToggleInstant,
    ToggleNavColor,
    Help,
    Quit,
}

fn sanitize(input: &str) -> String {
    let input = unidecode(input).to_lowercase();
    let input = FORBIDDEN_CHARACTERS_REGEX.replace_all(&input, "");
    WHITESPACE_REGEX.replace_all(input.trim(), " ").into()
}

pub fn parse(input: &str) -> Result<Command> {
    let input = sanitize(input);

    if let Some(captures) = GOTO_REGEX.captures(&input) {
        let number: usize = captures[1].parse()?;
        ensure!(number > 0, "Question numbers start at 1");
        return Ok(Command::Goto(number - 1));
    }

    if let Some(captures) = FILTER_REGEX.captures(&input) {
        return Ok(Command::SetFilter(captures[1].parse()?));
    }

    if let Ok(number) = input.parse::<usize>() {
        ensure!(number > 0, "Options are numbered from 1");
        return Ok(Command::Select(number - 1));
    }

    let command = match input.as_str() {
        "c" | "check" | "verifica" => Command::Check,
        "n" | "next" | "avanti" => Command::Next,
        "p" | "prev" | "previous" | "indietro" => Command::Previous,
        "s" | "save" | "salva" => Command::ToggleSave,
        "f" | "finish" | "consegna" => Command::Finish,
        "r" | "restart" | "ricomincia" => Command::Restart,
        "random" | "casuale" => Command::ToggleRandom,
        "instant" | "istantaneo" => Command::ToggleInstant,
        "navcolor" | "colori" => Command::ToggleNavColor,
        "h" | "help" | "aiuto" => Command::Help,
        "q" | "quit" | "esci" => Command::Quit,
        "" => bail!("Empty command"),
        other => return Err(anyhow!("Unknown command: {}", other)),
    };
    Ok(command)
}
