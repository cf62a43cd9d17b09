use std::borrow::Cow;

use anyhow::{Context, Result};

/// Shell statements meant to be evaluated by the calling shell.
///
/// Rendered as one `unset NAME;` line per cleared variable followed by a single
/// `export A=.. B=..` line, so `$(cred)` and `eval "$(cred)"` both work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellScript {
    unsets: Vec<&'static str>,
    exports: Vec<(&'static str, String)>,
}

impl ShellScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn export(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.exports.push((name, value.into()));
        self
    }

    pub fn unset(&mut self, name: &'static str) -> &mut Self {
        self.unsets.push(name);
        self
    }

    pub fn exports(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.exports.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn unsets(&self) -> impl Iterator<Item = &'static str> {
        self.unsets.iter().copied()
    }

    pub fn render(&self) -> Result<String> {
        let mut output = String::new();

        for name in &self.unsets {
            output.push_str(&unset_statement(name));
            output.push('\n');
        }

        if !self.exports.is_empty() {
            let assignments = self
                .exports
                .iter()
                .map(|(name, value)| Ok(format!("{name}={}", quote(name, value)?)))
                .collect::<Result<Vec<_>>>()?
                .join(" ");
            output.push_str(&format!("export {assignments}\n"));
        }

        Ok(output)
    }
}

pub fn unset_statement(name: &str) -> String {
    format!("unset {name};")
}

/// Quote a value for POSIX shells, leaving it bare when nothing needs escaping
fn quote<'a>(name: &str, value: &'a str) -> Result<Cow<'a, str>> {
    shlex::try_quote(value).with_context(|| format!("Value of {name} cannot be passed to a shell"))
}
