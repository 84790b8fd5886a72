//! Chat conversation models

use serde::{Deserialize, Serialize};

/// Role of a single conversation turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    /// Label used when flattening a conversation into a single prompt
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Supported chat languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ml")]
    Malayalam,
}

impl Language {
    /// Parse a language code, falling back to English for unrecognized codes
    pub fn from_code(code: &str) -> Self {
        match code {
            "hi" => Language::Hindi,
            "ml" => Language::Malayalam,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Malayalam => "ml",
        }
    }

    /// System prompt that seeds every new conversation in this language
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Language::English => {
                "You are a helpful farming assistant. Be concise and practical. \
                 You can provide weather-based agricultural advice when users ask \
                 about weather conditions or farming recommendations."
            }
            Language::Hindi => {
                "आप एक सहायक कृषि सहायक हैं। संक्षिप्त और व्यावहारिक उत्तर दें। \
                 आप मौसम के आधार पर कृषि सलाह दे सकते हैं।"
            }
            Language::Malayalam => {
                "നിങ്ങൾ ഒരു കൃഷി സഹായിയാണ്. ചുരുക്കവും പ്രായോഗികവുമായ മറുപടികൾ നൽകുക. \
                 കാലാവസ്ഥയെ അടിസ്ഥാനമാക്കി കൃഷി ഉപദേശങ്ങൾ നൽകാം."
            }
        }
    }
}
