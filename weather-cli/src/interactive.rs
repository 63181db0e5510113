use std::io::{self, BufRead, BufReader, IsTerminal};

use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use weather_core::{Language, WeatherSource};

use crate::cli::{Output, lookup};

const LANGUAGE_PROMPT: &str = "Enter language (en, ru, uz)";
const CITY_PROMPT: &str = "Enter city name (or 'exit' to quit):";

/// Options for one interactive session.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Set by `--lang`; skips the language prompt.
    pub explicit_lang: Option<Language>,
    /// Offered as the language prompt default.
    pub default_lang: Language,
    pub json: bool,
    pub details: bool,
}

/// Where the session's answers come from.
pub trait LineSource {
    /// `Ok(None)` once input is exhausted or the user cancelled.
    /// An empty answer is replaced by `default` when one is given.
    fn next_line(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>>;
}

/// Terminal prompts.
#[derive(Debug, Default)]
pub struct Prompter;

impl LineSource for Prompter {
    fn next_line(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        let mut text = Text::new(prompt);
        if let Some(default) = default {
            text = text.with_default(default);
        }

        match text.prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Answers read line by line from a non-terminal stdin, e.g. a pipe.
#[derive(Debug)]
pub struct PipedLines<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> PipedLines<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }
}

impl<R: BufRead> LineSource for PipedLines<R> {
    fn next_line(&mut self, _prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        let Some(line) = self.lines.next() else {
            return Ok(None);
        };
        let line = line.context("Failed to read from stdin")?;

        match default {
            Some(default) if line.trim().is_empty() => Ok(Some(default.to_string())),
            _ => Ok(Some(line)),
        }
    }
}

/// What to do with one line typed at the city prompt.
#[derive(Debug, PartialEq, Eq)]
enum Step<'a> {
    Exit,
    Empty,
    Lookup(&'a str),
}

fn classify(input: &str) -> Step<'_> {
    let city = input.trim();
    if city.eq_ignore_ascii_case("exit") {
        Step::Exit
    } else if city.is_empty() {
        Step::Empty
    } else {
        Step::Lookup(city)
    }
}

/// Prompt on a terminal, read lines otherwise.
pub async fn run(source: &dyn WeatherSource, settings: &Settings) -> Result<()> {
    if io::stdin().is_terminal() {
        session(&mut Prompter, source, settings).await
    } else {
        session(&mut PipedLines::new(BufReader::new(io::stdin())), source, settings).await
    }
}

/// Ask for a language, then loop over cities. Fetch errors are printed and the loop goes on.
pub async fn session(
    input: &mut impl LineSource,
    source: &dyn WeatherSource,
    settings: &Settings,
) -> Result<()> {
    let lang = match settings.explicit_lang {
        Some(lang) => lang,
        None => match input.next_line(LANGUAGE_PROMPT, Some(settings.default_lang.as_str()))? {
            Some(code) => Language::from_code(&code),
            None => return Ok(()),
        },
    };

    let output = Output::new(lang, settings.json, settings.details);

    while let Some(line) = input.next_line(CITY_PROMPT, None)? {
        match classify(&line) {
            Step::Exit => break,
            Step::Empty => println!("City name cannot be empty."),
            Step::Lookup(city) => {
                lookup(source, city, &output).await?;
            }
        }
    }

    Ok(())
}
