use serde::{Deserialize, Serialize};

/// A user-authored chat message as retrieved from the channel history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Slack `ts` of the message, kept verbatim; unique within the channel.
    pub id: String,
    pub author: String,
    pub text: String,
    /// ISO-8601 rendering of `id` (millisecond precision, UTC).
    pub timestamp: String,
}

/// Closed set of labels a message can be filed under.
///
/// `NotAnalyzed` is never produced by the model; it marks messages that were
/// skipped because no classification credential was configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Problema na Ferramenta")]
    ToolProblem,
    #[serde(rename = "Dificuldade do Atendente")]
    AgentDifficulty,
    #[serde(rename = "Dúvida de Uso")]
    UsageQuestion,
    #[serde(rename = "Sugestão de Melhoria")]
    ImprovementSuggestion,
    #[serde(rename = "Outro")]
    Other,
    #[serde(rename = "Não Analisado")]
    NotAnalyzed,
}

impl Category {
    /// Labels the model is allowed to answer with, in prompt order.
    pub const MODEL_LABELS: [Category; 5] = [
        Category::ToolProblem,
        Category::AgentDifficulty,
        Category::UsageQuestion,
        Category::ImprovementSuggestion,
        Category::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::ToolProblem => "Problema na Ferramenta",
            Category::AgentDifficulty => "Dificuldade do Atendente",
            Category::UsageQuestion => "Dúvida de Uso",
            Category::ImprovementSuggestion => "Sugestão de Melhoria",
            Category::Other => "Outro",
            Category::NotAnalyzed => "Não Analisado",
        }
    }

    /// Matches one of the model labels, ignoring surrounding whitespace and case.
    #[must_use]
    pub fn from_model_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::MODEL_LABELS
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
    }
}

pub const FALLBACK_TOPIC_MISSING_KEY: &str = "Chave Gemini em falta";
pub const FALLBACK_TOPIC_ANALYSIS_ERROR: &str = "Erro na Análise";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub topic: String,
}

impl Classification {
    #[must_use]
    pub fn new(category: Category, topic: impl Into<String>) -> Self {
        Self {
            category,
            topic: topic.into(),
        }
    }

    /// Sentinel used when no classification credential is configured.
    #[must_use]
    pub fn not_analyzed() -> Self {
        Self::new(Category::NotAnalyzed, FALLBACK_TOPIC_MISSING_KEY)
    }

    /// Sentinel used when the classification call or its output failed.
    #[must_use]
    pub fn analysis_error() -> Self {
        Self::new(Category::Other, FALLBACK_TOPIC_ANALYSIS_ERROR)
    }
}

/// A retrieved message together with its classification; serialized flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedMessage {
    #[serde(flatten)]
    pub message: RawMessage,
    #[serde(flatten)]
    pub classification: Classification,
}

impl EnrichedMessage {
    #[must_use]
    pub fn new(message: RawMessage, classification: Classification) -> Self {
        Self {
            message,
            classification,
        }
    }
}
