#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Question,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OptionSet {
    YesNo,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PromptChoice {
    Yes,
    No,
}

/// A question put to the user before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub message: String,
    pub title: String,
    pub kind: MessageKind,
    pub options: OptionSet,
}

impl ConfirmPrompt {
    #[must_use]
    pub fn yes_no_question(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: title.into(),
            kind: MessageKind::Question,
            options: OptionSet::YesNo,
        }
    }
}
