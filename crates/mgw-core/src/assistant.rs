//! Guided question flow
//!
//! A guided command typed with no arguments asks for each value in turn.
//! The answers become ordinary flags on the [`RawCommand`], so they go
//! through the same validators as the power-user form.

use std::collections::VecDeque;

use crate::commands::CommandKind;
use crate::parser::{CommandSet, RawCommand};
use crate::rules::FlagSpec;

/// Answer that abandons a guided command
pub const CANCEL_WORD: &str = "cancel";

/// Source of answers for the guided flow
pub trait Prompter {
    /// Show `question` and read one answer
    ///
    /// `None` means the input is exhausted.
    fn ask(&mut self, question: &str) -> Option<String>;
}

/// Prompter replaying canned answers; records every question asked
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Option<String> {
        self.asked.push(question.to_string());
        self.answers.pop_front()
    }
}

/// Result of running the guided flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guided {
    /// The command, with the answers filled in as flags
    Ready(RawCommand),
    Cancelled,
}

/// True if `raw` should be completed by asking questions
pub fn wants_assistant(raw: &RawCommand, kind: CommandKind) -> bool {
    raw.command_set() == CommandSet::Guided && raw.is_bare() && has_assistant(kind)
}

/// Commands that have a question flow
pub fn has_assistant(kind: CommandKind) -> bool {
    matches!(
        kind,
        CommandKind::AddItem
            | CommandKind::UpdateItem
            | CommandKind::DeleteItem
            | CommandKind::FindItem
            | CommandKind::AddOrder
    )
}

enum Field {
    /// Always set, even when blank
    Required(FlagSpec),
    /// Skipped when blank
    Optional(FlagSpec),
    /// Becomes the argument string
    FreeText,
}

fn questions(kind: CommandKind) -> Vec<(&'static str, Field)> {
    match kind {
        CommandKind::AddItem => vec![
            ("Enter the item name:", Field::Required(FlagSpec::NAME)),
            ("Enter the price (e.g. 5.10):", Field::Required(FlagSpec::PRICE)),
        ],
        CommandKind::UpdateItem => vec![
            (
                "Enter the index of the item to update:",
                Field::Required(FlagSpec::INDEX),
            ),
            (
                "Enter the new name (leave blank to keep):",
                Field::Optional(FlagSpec::NAME),
            ),
            (
                "Enter the new price (leave blank to keep):",
                Field::Optional(FlagSpec::PRICE),
            ),
        ],
        CommandKind::DeleteItem => vec![(
            "Enter the index of the item to delete:",
            Field::Required(FlagSpec::INDEX),
        )],
        CommandKind::FindItem => vec![("Enter the name to search for:", Field::FreeText)],
        CommandKind::AddOrder => vec![
            (
                "Enter the item index or name:",
                Field::Required(FlagSpec::ITEM),
            ),
            (
                "Enter the quantity (leave blank for 1):",
                Field::Optional(FlagSpec::QUANTITY),
            ),
        ],
        _ => Vec::new(),
    }
}

/// Drop one pair of surrounding double quotes, as the tokenizer would
fn unquote(answer: &str) -> &str {
    answer
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(answer)
}

/// Ask every question for `kind` and fill the answers into `raw`
///
/// Stops at the first `cancel` answer or at end of input.
pub fn run(mut raw: RawCommand, kind: CommandKind, prompter: &mut dyn Prompter) -> Guided {
    for (question, field) in questions(kind) {
        let Some(answer) = prompter.ask(question) else {
            return Guided::Cancelled;
        };
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case(CANCEL_WORD) {
            return Guided::Cancelled;
        }
        let answer = unquote(answer);

        match field {
            Field::Required(spec) => raw.push_flag(spec.long, answer),
            Field::Optional(spec) if !answer.is_empty() => raw.push_flag(spec.long, answer),
            Field::Optional(_) => {}
            Field::FreeText => raw.set_argument_string(answer),
        }
    }
    Guided::Ready(raw)
}
