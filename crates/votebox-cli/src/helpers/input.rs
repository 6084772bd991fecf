//! Interactive prompts.

use dialoguer::Confirm;

use crate::errors::CliError;

/// Ask a yes/no question; `assume_yes` skips the prompt.
///
/// Without a terminal the prompt cannot be answered, so the caller must pass
/// `--yes` instead.
pub fn confirm(prompt: &str, assume_yes: bool, interactive: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !interactive {
        return Err(CliError::invalid_input(
            "Confirmation required but stdin is not a terminal (pass --yes)",
        )
        .into());
    }
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Prompt failed: {}", e))?;
    Ok(answer)
}
