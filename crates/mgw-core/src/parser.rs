//! Command line tokenizer
//!
//! Turns one raw input line into a [`RawCommand`]: the command name, the
//! free-text argument string, and the flags with their values. Parsing never
//! fails; anything malformed is left for the validators to reject.

use std::collections::HashMap;

/// Which of the two parallel command sets a command name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSet {
    /// Names starting with `/`, flags only
    Power,
    /// Plain names and digit shortcuts, with an optional question flow
    Guided,
}

/// One flag occurrence, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Flag key without its dashes (`n` for `-n`, `name` for `--name`)
    pub key: String,
    /// Everything up to the next flag, trimmed, quotes stripped
    pub value: String,
}

impl Flag {
    /// The flag as the user would have typed it
    pub fn spelled(&self) -> String {
        if self.key.chars().count() == 1 {
            format!("-{}", self.key)
        } else {
            format!("--{}", self.key)
        }
    }
}

/// A tokenized but unvalidated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    name: String,
    argument_string: String,
    flags: Vec<Flag>,
    arguments: HashMap<String, String>,
}

impl RawCommand {
    /// Command name exactly as typed, including a leading `/`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command_set(&self) -> CommandSet {
        if self.name.starts_with('/') {
            CommandSet::Power
        } else {
            CommandSet::Guided
        }
    }

    /// Free text before the first flag
    pub fn argument_string(&self) -> &str {
        &self.argument_string
    }

    /// Every flag occurrence in input order
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Value of the first occurrence of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }

    /// True when nothing but the command name was typed
    pub fn is_bare(&self) -> bool {
        self.flags.is_empty() && self.argument_string.is_empty()
    }

    /// Copy the value of `short` under `long` unless `long` is already set
    ///
    /// Idempotent and leaves `short` in place, so later reads only need the
    /// long spelling.
    pub fn map_argument_alias(&mut self, long: &str, short: &str) {
        if self.arguments.contains_key(long) {
            return;
        }
        if let Some(value) = self.arguments.get(short).cloned() {
            self.arguments.insert(long.to_string(), value);
        }
    }

    /// Append a flag as if it had been typed at the end of the line
    pub fn push_flag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let flag = Flag {
            key: key.into(),
            value: value.into(),
        };
        self.arguments
            .entry(flag.key.clone())
            .or_insert_with(|| flag.value.clone());
        self.flags.push(flag);
    }

    pub fn set_argument_string(&mut self, text: impl Into<String>) {
        self.argument_string = text.into().trim().to_string();
    }
}

#[derive(Debug)]
struct Token {
    text: String,
    quoted: bool,
}

/// Split on whitespace, keeping `"..."` segments whole and dropping the quotes
///
/// An unterminated quote runs to the end of the line.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut started = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                }
                quoted = false;
                started = false;
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }
    if started {
        tokens.push(Token {
            text: current,
            quoted,
        });
    }

    tokens
}

/// Flag key of a token, if the token is a flag
///
/// `-x` with a single letter is a short flag, `--word` a long one. A dash
/// followed by anything else (`-5.00`) is ordinary text.
fn flag_key(token: &Token) -> Option<&str> {
    if token.quoted {
        return None;
    }
    let text = token.text.as_str();

    if let Some(long) = text.strip_prefix("--") {
        let mut chars = long.chars();
        let first_is_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if first_is_letter && chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Some(long);
        }
        return None;
    }

    let short = text.strip_prefix('-')?;
    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(short),
        _ => None,
    }
}

/// Parse one input line
pub fn parse(raw_line: &str) -> RawCommand {
    let line = raw_line.trim();
    let (name, remainder) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (line, ""),
    };

    let mut leading = Vec::new();
    let mut flags: Vec<Flag> = Vec::new();
    let mut pending: Option<(String, Vec<String>)> = None;

    for token in tokenize(remainder) {
        if let Some(key) = flag_key(&token) {
            if let Some((key, words)) = pending.take() {
                flags.push(Flag {
                    key,
                    value: words.join(" ").trim().to_string(),
                });
            }
            pending = Some((key.to_string(), Vec::new()));
            continue;
        }
        match pending.as_mut() {
            Some((_, words)) => words.push(token.text),
            None => leading.push(token.text),
        }
    }
    if let Some((key, words)) = pending.take() {
        flags.push(Flag {
            key,
            value: words.join(" ").trim().to_string(),
        });
    }

    let mut arguments = HashMap::new();
    for flag in &flags {
        arguments
            .entry(flag.key.clone())
            .or_insert_with(|| flag.value.clone());
    }

    RawCommand {
        name: name.to_string(),
        argument_string: leading.join(" ").trim().to_string(),
        flags,
        arguments,
    }
}
