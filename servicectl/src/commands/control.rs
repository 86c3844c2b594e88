use anyhow::Context;
use colored::Colorize;
use servicectl_core::Action;
use std::path::Path;

use crate::cli::ServiceArgs;
use crate::common::{SUCCESS_ICON, open_handle};

pub fn execute(action: Action, args: ServiceArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let handle = open_handle(&args, config)?;

    handle
        .perform(action)
        .with_context(|| format!("Failed to {} {}", action.as_str(), handle.name()))?;

    println!(
        "{} {} {} ({})",
        SUCCESS_ICON.green(),
        past_tense(action),
        handle.name(),
        handle.kind()
    );
    Ok(())
}

fn past_tense(action: Action) -> &'static str {
    match action {
        Action::Start => "Started",
        Action::Stop => "Stopped",
        Action::Restart => "Restarted",
    }
}
