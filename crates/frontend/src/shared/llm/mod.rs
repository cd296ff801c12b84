//! Translation-assist gateway.
//!
//! One-shot structured completion against the Gemini API: given the primary
//! category name, ask for all four language variants as strict JSON. This is
//! an assistive path; callers swallow failures and leave the draft alone.

use contracts::domain::a001_category::CategoryDraft;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compile-time API key. Without it every call fails with `MissingApiKey`
/// and the auto-fill button becomes a no-op.
const GEMINI_API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

const GEMINI_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: status {0}")]
    ApiError(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Four-field completion returned by the model. Fields the model left out
/// stay `None` and are never merged into the draft.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationSuggestion {
    pub name_uz: Option<String>,
    pub name_uz_cyrillic: Option<String>,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
}

impl TranslationSuggestion {
    /// Merges the suggested names into a draft, keeping draft values for
    /// every field the suggestion does not carry.
    pub fn merge_into(&self, draft: &mut CategoryDraft) {
        if let Some(name_uz) = &self.name_uz {
            draft.name_uz = name_uz.clone();
        }
        if let Some(name_uz_cyrillic) = &self.name_uz_cyrillic {
            draft.name_uz_cyrillic = name_uz_cyrillic.clone();
        }
        if let Some(name_ru) = &self.name_ru {
            draft.name_ru = name_ru.clone();
        }
        if let Some(name_en) = &self.name_en {
            draft.name_en = name_en.clone();
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

fn translation_prompt(source_text: &str) -> String {
    format!(
        "Translate and format the category name \"{}\":\n\
         1. Uzbek Latin (nameUz)\n\
         2. Uzbek Cyrillic (nameUzCyrillic)\n\
         3. Russian (nameRu)\n\
         4. English (nameEn)\n\
         Return strictly JSON with these keys.",
        source_text
    )
}

fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "nameUz": { "type": "STRING" },
            "nameUzCyrillic": { "type": "STRING" },
            "nameRu": { "type": "STRING" },
            "nameEn": { "type": "STRING" }
        },
        "required": ["nameUz", "nameUzCyrillic", "nameRu", "nameEn"]
    })
}

/// Pulls the JSON payload out of the completion envelope and parses it.
fn parse_suggestion(body: &str) -> Result<TranslationSuggestion, LlmError> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    let text = envelope
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.as_str())
        .ok_or_else(|| LlmError::MalformedResponse("no candidates in response".to_string()))?;

    serde_json::from_str(text).map_err(|e| LlmError::MalformedResponse(e.to_string()))
}

/// Requests the four language variants for `source_text`.
pub async fn suggest_translations(source_text: &str) -> Result<TranslationSuggestion, LlmError> {
    let api_key = match GEMINI_API_KEY {
        Some(key) if !key.is_empty() => key,
        _ => return Err(LlmError::MissingApiKey),
    };

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        GEMINI_MODEL
    );

    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: translation_prompt(source_text),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    };

    let response = Request::post(&url)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .map_err(|e| LlmError::NetworkError(e.to_string()))?
        .send()
        .await
        .map_err(|e| LlmError::NetworkError(e.to_string()))?;

    if !response.ok() {
        return Err(LlmError::ApiError(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LlmError::NetworkError(e.to_string()))?;

    parse_suggestion(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(payload: &str) -> String {
        serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": payload } ] } }
            ]
        })
        .to_string()
    }

    #[test]
    fn test_parse_full_suggestion() {
        let body = envelope(
            r#"{"nameUz":"Kiyim","nameUzCyrillic":"Кийим","nameRu":"Одежда","nameEn":"Clothing"}"#,
        );
        let suggestion = parse_suggestion(&body).unwrap();
        assert_eq!(suggestion.name_uz.as_deref(), Some("Kiyim"));
        assert_eq!(suggestion.name_uz_cyrillic.as_deref(), Some("Кийим"));
        assert_eq!(suggestion.name_ru.as_deref(), Some("Одежда"));
        assert_eq!(suggestion.name_en.as_deref(), Some("Clothing"));
    }

    #[test]
    fn test_parse_partial_suggestion_leaves_missing_fields_none() {
        let body = envelope(r#"{"nameRu":"Одежда"}"#);
        let suggestion = parse_suggestion(&body).unwrap();
        assert_eq!(suggestion.name_ru.as_deref(), Some("Одежда"));
        assert_eq!(suggestion.name_uz, None);
        assert_eq!(suggestion.name_en, None);
    }

    #[test]
    fn test_parse_rejects_non_json_payload() {
        let body = envelope("not json at all");
        assert!(matches!(
            parse_suggestion(&body),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_candidates() {
        let body = r#"{"candidates":[]}"#;
        assert!(matches!(
            parse_suggestion(body),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_merge_overwrites_only_present_fields() {
        let mut draft = CategoryDraft::new("chat-1");
        draft.name_uz = "Kiyim".to_string();
        draft.name_en = "Old".to_string();

        let suggestion = TranslationSuggestion {
            name_en: Some("Clothing".to_string()),
            ..Default::default()
        };
        suggestion.merge_into(&mut draft);

        assert_eq!(draft.name_uz, "Kiyim");
        assert_eq!(draft.name_en, "Clothing");
        assert_eq!(draft.name_ru, "");
    }

    #[test]
    fn test_prompt_names_all_four_keys() {
        let prompt = translation_prompt("Kiyim");
        assert!(prompt.contains("\"Kiyim\""));
        for key in ["nameUz", "nameUzCyrillic", "nameRu", "nameEn"] {
            assert!(prompt.contains(key), "prompt is missing {key}");
        }
    }

    #[test]
    fn test_request_body_uses_camel_case_config() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hi".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("generationConfig"));
        assert!(json.contains("responseMimeType"));
        assert!(json.contains("responseSchema"));
    }
}
