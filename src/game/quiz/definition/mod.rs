use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub mod question;

pub use question::{Question, QuestionId, RawQuestion};


pub const DEFAULT_LOCATION: &str = "assets/questions.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("question bank is not a valid list of questions")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionSource {
    Remote(String),
    File(PathBuf),
}

impl QuestionSource {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            QuestionSource::Remote(location.to_owned())
        } else {
            QuestionSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Remote(url) => write!(f, "{}", url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The full question bank. Never mutated once loaded.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Arc<Question>>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        QuestionBank {
            questions: questions.into_iter().map(Arc::new).collect(),
        }
    }

    /// Performs the one and only read of the bank. Failures are not retried.
    pub async fn load(source: &QuestionSource) -> Result<QuestionBank, LoadError> {
        let content = match source {
            QuestionSource::Remote(url) => fetch(url).await?,
            QuestionSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
        };
        let bank = QuestionBank::from_json(&content)?;
        if bank.is_empty() {
            warn!("Question bank at {} contains no questions", source);
        }
        info!("Loaded {} questions from {}", bank.len(), source);
        Ok(bank)
    }

    pub fn from_json(content: &str) -> Result<QuestionBank, LoadError> {
        let raw_questions: Vec<RawQuestion> = serde_json::from_str(content)?;
        Ok(QuestionBank::new(
            raw_questions.into_iter().map(Question::from).collect(),
        ))
    }

    pub fn questions(&self) -> &[Arc<Question>] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Arc<Question>> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let request_failed = |source| LoadError::Request {
        url: url.to_owned(),
        source,
    };
    let response = reqwest::get(url).await.map_err(request_failed)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_owned(),
            status,
        });
    }
    response.text().await.map_err(request_failed)
}
