use anyhow::Result;
use clap::Args;

use crate::{constants::MANAGED_VARS, shell::ShellScript};

#[derive(Debug, Clone, Args)]
pub struct ClearCommand {}

impl ClearCommand {
    pub fn execute(self) -> Result<()> {
        print!("{}", clear_script().render()?);
        Ok(())
    }
}

/// Unset every managed variable regardless of its current value
pub fn clear_script() -> ShellScript {
    let mut script = ShellScript::new();
    for name in MANAGED_VARS {
        script.unset(name);
    }
    script
}
