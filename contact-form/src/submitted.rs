use serde::{Deserialize, Serialize};

use crate::state::FormState;

/// Values accepted by the last fully valid submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` when the message was left empty.
    pub message: Option<String>,
}

impl SubmittedData {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            first_name: state.first_name.clone(),
            last_name: state.last_name.clone(),
            email: state.email.clone(),
            message: (!state.message.is_empty()).then(|| state.message.clone()),
        }
    }
}
