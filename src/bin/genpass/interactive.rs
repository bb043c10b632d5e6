use anyhow::Context;
use console::style;
use dialoguer::theme::ColorfulTheme;

use genpass::{GeneratorState, MAX_LENGTH, MIN_LENGTH};

use crate::ProgError;

static TITLE: &str = "QuickPassGen";
static SYMBOLS_LABEL: &str = "Symbols";
static NUMBERS_ONLY_LABEL: &str = "Numbers only";
static GENERATE_LABEL: &str = "Generate password";
static COPY_LABEL: &str = "Copy password";
static QUIT_LABEL: &str = "Quit";

enum Action {
    Generate,
    Copy,
    Length,
    Symbols,
    NumbersOnly,
    Quit,
}

static ACTIONS: [Action; 6] = [
    Action::Generate,
    Action::Copy,
    Action::Length,
    Action::Symbols,
    Action::NumbersOnly,
    Action::Quit,
];

fn length_label(length: usize) -> String {
    format!("Password length: {length}")
}

fn toggle_label(label: &str, on: bool) -> String {
    format!("{label}: {}", if on { "on" } else { "off" })
}

fn menu_items(state: &GeneratorState) -> Vec<String> {
    ACTIONS
        .iter()
        .map(|action| match action {
            Action::Generate => GENERATE_LABEL.to_owned(),
            Action::Copy => COPY_LABEL.to_owned(),
            Action::Length => length_label(state.length()),
            Action::Symbols => toggle_label(SYMBOLS_LABEL, state.include_symbols()),
            Action::NumbersOnly => toggle_label(NUMBERS_ONLY_LABEL, state.numbers_only()),
            Action::Quit => QUIT_LABEL.to_owned(),
        })
        .collect()
}

/// Run the interactive generator until the user quits (or cancels the menu with Esc).
pub(crate) fn run(mut state: GeneratorState) -> Result<(), ProgError> {
    let theme = ColorfulTheme::default();
    eprintln!("{}", style(TITLE).bold());

    let mut selected = 0;
    loop {
        if !state.password().is_empty() {
            eprintln!("\n  {}\n", style(state.password().as_str()).bold().green());
        }
        let Some(selection) = dialoguer::Select::with_theme(&theme)
            .items(&menu_items(&state))
            .default(selected)
            .interact_opt()
            .context("failed to query your selection")?
        else {
            return Ok(());
        };
        selected = selection;

        match ACTIONS[selection] {
            Action::Generate => {
                state.generate()?;
            }
            Action::Copy => {
                if state.password().is_empty() {
                    eprintln!("Nothing to copy yet; generate a password first.");
                } else {
                    crate::clipboard::send_to_clipboard(state.password().as_str().as_bytes())?;
                    eprintln!("Copied to the clipboard.");
                }
            }
            Action::Length => {
                let length = dialoguer::Input::<usize>::with_theme(&theme)
                    .with_prompt(format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})"))
                    .default(state.length())
                    .validate_with(|n: &usize| -> Result<(), String> {
                        if (MIN_LENGTH..=MAX_LENGTH).contains(n) {
                            Ok(())
                        } else {
                            Err(format!(
                                "the length must be between {MIN_LENGTH} and {MAX_LENGTH}"
                            ))
                        }
                    })
                    .interact_text()
                    .context("failed to read the password length")?;
                state.set_length(length);
            }
            Action::Symbols => state.toggle_include_symbols(),
            Action::NumbersOnly => state.toggle_numbers_only(),
            Action::Quit => return Ok(()),
        }
        tracing::debug!(config = ?state.config(), "interactive state updated");
    }
}
