use serde::Deserialize;

use crate::dispatch::Question;

/// Inbound body of `POST /process`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    pub id: String,
    pub question: String,
    /// Reference answer the computed answer is scored against. Some dataset
    /// rows carry no reference; those score 0.0.
    #[serde(default)]
    pub best_answer: String,
}

impl ProcessRequest {
    pub fn into_question(self) -> Question {
        Question::new(self.id, self.question, self.best_answer)
    }
}
