use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::RecommendError;
use crate::model::{ClothingRecommendation, Weather};

const OPENAI_BASE: &str = "https://api.openai.com";
const MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a fashion consultant with knowledge of American \
     fashion and what fashion is appropriate to wear for the average person.";

/// Client for the chat-completions endpoint that turns a fetched weather
/// record into structured clothing advice.
pub struct RecommendationClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RecommendationClient {
    pub fn new(http: Client, api_key: String) -> Self {
        Self { http, base_url: OPENAI_BASE.to_string(), api_key }
    }

    pub fn with_base_url(http: Client, api_key: String, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into(), api_key }
    }

    /// Ask the model for clothing advice for one person on one day.
    ///
    /// The reply must be a JSON object with keys head/torso/legs/feet/notes;
    /// anything else is reported as [`RecommendError::Malformed`].
    pub async fn recommend(
        &self,
        date: &str,
        zipcode: &str,
        weather: &Weather,
        gender: &str,
    ) -> Result<ClothingRecommendation, RecommendError> {
        let prompt = build_prompt(date, zipcode, weather, gender);
        debug!(date, zipcode, "requesting clothing recommendation");

        let request = json!({
            "model": MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "response_format": { "type": "json_object" },
        });

        let url = format!("{}/v1/chat/completions", self.base_url);

        let res = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(RecommendError::Service {
                status: status.as_u16(),
                detail: truncate_body(&body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| RecommendError::Malformed(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(RecommendError::EmptyReply)?;

        // Decoding into the struct is the schema check: required keys,
        // string values.
        serde_json::from_str(&content).map_err(|e| RecommendError::Malformed(e.to_string()))
    }
}

/// Natural-language prompt embedding the weather record and an example of
/// the JSON shape the model must reply with.
fn build_prompt(date: &str, zipcode: &str, weather: &Weather, gender: &str) -> String {
    let weather_json =
        serde_json::to_string(weather).unwrap_or_else(|_| "{}".to_string());

    let sample_json = serde_json::to_string_pretty(&json!({
        "head": "e.g. baseball cap or knit hat",
        "torso": "e.g. light jacket, sweater",
        "legs": "e.g. jeans or shorts",
        "feet": "e.g. sneakers or rain boots",
        "notes": "any extra notes"
    }))
    .unwrap_or_default();

    format!(
        "Given the following weather data: {weather_json}, \
         provide clothing recommendations for a {gender} on {date} in {zipcode}. \
         The weather description is '{}'. \
         Please provide the recommendation in a JSON format with keys like 'head', 'torso', 'legs', and 'feet'. \
         Here is an example of the JSON format. **You must use this format **\n{sample_json}\n",
        weather.weather_description,
    )
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multi-byte bodies can't split a char.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_weather() -> Weather {
        Weather {
            max_temp: 15.2,
            min_temp: 8.1,
            weather_code: 61,
            weather_description: "Rain: Light intensity".into(),
        }
    }

    fn reply_with_content(content: &str) -> serde_json::Value {
        json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    #[tokio::test]
    async fn decodes_well_formed_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "response_format": { "type": "json_object" },
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with_content(
                r#"{"head":"rain hood","torso":"waterproof jacket","legs":"jeans","feet":"rain boots","notes":"bring an umbrella"}"#,
            )))
            .mount(&server)
            .await;

        let client =
            RecommendationClient::with_base_url(Client::new(), "sk-test".into(), server.uri());
        let rec = client
            .recommend("2026-08-23", "47803", &sample_weather(), "Male")
            .await
            .unwrap();

        assert_eq!(rec.head, "rain hood");
        assert_eq!(rec.feet, "rain boots");
        assert_eq!(rec.notes, "bring an umbrella");
    }

    #[tokio::test]
    async fn non_json_content_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(reply_with_content("Wear a jacket, it's chilly out.")),
            )
            .mount(&server)
            .await;

        let client =
            RecommendationClient::with_base_url(Client::new(), "sk-test".into(), server.uri());
        let err = client
            .recommend("2026-08-23", "47803", &sample_weather(), "Male")
            .await
            .unwrap_err();

        assert!(matches!(err, RecommendError::Malformed(_)));
    }

    #[tokio::test]
    async fn content_missing_keys_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_with_content(
                r#"{"head":"cap","torso":"tee"}"#,
            )))
            .mount(&server)
            .await;

        let client =
            RecommendationClient::with_base_url(Client::new(), "sk-test".into(), server.uri());
        let err = client
            .recommend("2026-08-23", "47803", &sample_weather(), "Male")
            .await
            .unwrap_err();

        assert!(matches!(err, RecommendError::Malformed(_)));
    }

    #[tokio::test]
    async fn empty_choices_is_empty_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client =
            RecommendationClient::with_base_url(Client::new(), "sk-test".into(), server.uri());
        let err = client
            .recommend("2026-08-23", "47803", &sample_weather(), "Male")
            .await
            .unwrap_err();

        assert!(matches!(err, RecommendError::EmptyReply));
    }

    #[tokio::test]
    async fn unauthorized_status_is_an_auth_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "Incorrect API key provided" }
            })))
            .mount(&server)
            .await;

        let client =
            RecommendationClient::with_base_url(Client::new(), "sk-bad".into(), server.uri());
        let err = client
            .recommend("2026-08-23", "47803", &sample_weather(), "Male")
            .await
            .unwrap_err();

        assert!(err.is_auth());
        assert!(matches!(err, RecommendError::Service { status: 401, .. }));
    }

    #[test]
    fn truncate_body_keeps_short_bodies_intact() {
        assert_eq!(truncate_body("bad request"), "bad request");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 3-byte chars put byte 200 inside a character.
        let body = "日".repeat(100);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
        assert!(truncated.trim_end_matches("...").chars().all(|c| c == '日'));
    }

    #[test]
    fn prompt_embeds_all_inputs_and_schema() {
        let prompt = build_prompt("2026-08-23", "47803", &sample_weather(), "Female");

        assert!(prompt.contains("2026-08-23"));
        assert!(prompt.contains("47803"));
        assert!(prompt.contains("Female"));
        assert!(prompt.contains("Rain: Light intensity"));
        assert!(prompt.contains("\"weather_code\":61"));
        assert!(prompt.contains("**You must use this format **"));
        for key in ["head", "torso", "legs", "feet", "notes"] {
            assert!(prompt.contains(key), "missing key {key}");
        }
    }
}
