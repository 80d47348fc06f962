// SPDX-License-Identifier: MPL-2.0
//! State and message handling for the rubric tab.

use crate::canvas::models::{Assignment, Submission};

/// Long-description overlay content, shown on top of the criterion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongDescription {
    pub description: String,
    pub long_description: String,
}

#[derive(Debug, Clone)]
pub struct State {
    pub assignment: Assignment,
    pub submission: Submission,
    pub shown_long_description: Option<LongDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LongDescriptionClicked(String),
    LongDescriptionClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ShowLongDescription {
        description: String,
        long_description: String,
    },
}

impl State {
    pub fn new(assignment: Assignment, submission: Submission) -> Self {
        Self {
            assignment,
            submission,
            shown_long_description: None,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::LongDescriptionClicked(criterion_id) => {
                let Some(criterion) = self
                    .assignment
                    .rubric
                    .iter()
                    .find(|criterion| criterion.id.as_deref() == Some(criterion_id.as_str()))
                else {
                    return Effect::None;
                };
                Effect::ShowLongDescription {
                    description: criterion.description.clone().unwrap_or_default(),
                    long_description: criterion.long_description.clone().unwrap_or_default(),
                }
            }
            Message::LongDescriptionClosed => {
                self.shown_long_description = None;
                Effect::None
            }
        }
    }

    /// Applies the `ShowLongDescription` effect.
    pub fn show_long_description(&mut self, description: String, long_description: String) {
        self.shown_long_description = Some(LongDescription {
            description,
            long_description,
        });
    }
}
