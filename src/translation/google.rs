//! Google keyless translate endpoint (`client=gtx`)
//!
//! The response is a nested JSON array; element `[0]` holds one
//! `[translated, original, ...]` entry per sentence.

use super::Translator;
use crate::error::{AssistError, AssistResult};
use crate::http;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

const SERVICE: &str = "Google Translate";

pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request_url(&self, text: &str, target: &str) -> String {
        format!(
            "{}/translate_a/single?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.base_url,
            urlencoding::encode(target),
            urlencoding::encode(text)
        )
    }
}

fn join_segments(body: &Value) -> AssistResult<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| AssistError::RequestFailed("unexpected Google Translate response".into()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &str) -> AssistResult<String> {
        let url = self.request_url(text, target);
        debug!("🌐 {}", url);
        let response = self.client.get(url).send().await?;
        let body = http::read_body(SERVICE, response).await?;
        join_segments(&http::parse_json(SERVICE, &body)?)
    }

    fn name(&self) -> &str {
        "google"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_text() {
        let translator = GoogleTranslator::new(reqwest::Client::new(), "https://translate.googleapis.com/");
        assert_eq!(
            translator.request_url("good morning & night", "es"),
            "https://translate.googleapis.com/translate_a/single?client=gtx&sl=auto&tl=es&dt=t&q=good%20morning%20%26%20night"
        );
    }

    #[test]
    fn test_join_segments() {
        let body: Value = serde_json::from_str(
            r#"[[["Hola. ","Hello. ",null,null,10],["¿Cómo estás?","How are you?",null,null,10]],null,"en"]"#,
        )
        .unwrap();
        assert_eq!(join_segments(&body).unwrap(), "Hola. ¿Cómo estás?");
    }

    #[test]
    fn test_join_segments_rejects_garbage() {
        let body: Value = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(join_segments(&body).is_err());
    }
}
