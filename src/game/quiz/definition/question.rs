use serde::{Deserialize, Serialize};

pub type QuestionId = u32;

/// Question record as it appears in the bank file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub id: QuestionId,
    #[serde(rename = "c", alias = "category")]
    pub category: String,
    #[serde(rename = "q", alias = "text")]
    pub text: String,
    #[serde(rename = "o", alias = "options")]
    pub options: Vec<String>,
    #[serde(rename = "a", alias = "answer")]
    pub answer: usize,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub category: String,
    pub text: String,
    pub options: Vec<String>,
    pub answer: usize,
    pub note: Option<String>,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.answer
    }

    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        // Blank notes are never displayed
        let note = raw_question.note.filter(|note| !note.trim().is_empty());

        Question {
            id: raw_question.id,
            category: raw_question.category,
            text: raw_question.text,
            options: raw_question.options,
            answer: raw_question.answer,
            note,
        }
    }
}
