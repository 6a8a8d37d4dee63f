use std::path::Path;

use crate::core::data::confirm_prompt::{ConfirmPrompt, PromptChoice};

/// Everything the guard needs to know about a pending save.
///
/// Both paths are expected in resolved (absolute or canonical) form so that
/// equality means "same file".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverwriteCheck<'a> {
    pub target_path: &'a Path,
    pub file_exists: bool,
    pub source_path: Option<&'a Path>,
    pub dataset_dirty: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverwriteDecision {
    Proceed { prompted: bool },
    Decline,
}

impl OverwriteDecision {
    #[must_use]
    pub fn proceeds(self) -> bool {
        matches!(self, Self::Proceed { .. })
    }
}

/// An existing file is only replaced silently when it is the dataset's own,
/// unmodified backing file.
#[must_use]
pub fn requires_confirmation(check: &OverwriteCheck<'_>) -> bool {
    check.file_exists && (check.dataset_dirty || check.source_path != Some(check.target_path))
}

#[must_use]
pub fn overwrite_question(target_path: &Path) -> String {
    let file_name = target_path
        .file_name()
        .map_or_else(|| target_path.display().to_string(), |name| name.to_string_lossy().into_owned());

    format!("\"{}\" already exists. Do you want to replace it?", file_name)
}

/// Decides whether a save may write to `check.target_path`.
///
/// `ask` is only invoked when confirmation is required. A `None` answer means
/// no prompt could be shown and is treated as a refusal.
pub fn decide_overwrite(
    check: &OverwriteCheck<'_>,
    dialog_title: &str,
    ask: impl FnOnce(&ConfirmPrompt) -> Option<PromptChoice>,
) -> OverwriteDecision {
    if !requires_confirmation(check) {
        return OverwriteDecision::Proceed { prompted: false };
    }

    let prompt = ConfirmPrompt::yes_no_question(overwrite_question(check.target_path), dialog_title);

    match ask(&prompt) {
        Some(PromptChoice::Yes) => OverwriteDecision::Proceed { prompted: true },
        Some(PromptChoice::No) | None => OverwriteDecision::Decline,
    }
}
