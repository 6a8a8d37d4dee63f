use crate::core::data::confirm_prompt::{ConfirmPrompt, PromptChoice};

pub trait PromptPort: Send + Sync {
    /// `None` when no answer could be obtained.
    fn ask(&self, prompt: &ConfirmPrompt) -> Option<PromptChoice>;
}

/// For headless hosts: every confirmation is left unanswered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl PromptPort for NoPrompt {
    fn ask(&self, _prompt: &ConfirmPrompt) -> Option<PromptChoice> {
        None
    }
}
