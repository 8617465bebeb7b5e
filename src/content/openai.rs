use super::prompts::{article_prompt, image_prompt_request};
use super::{ArticleDraft, ContentProducer, ProducerError};
use crate::feed::FeedEntry;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings for [`OpenAiProducer`], read from `[openai]`.
///
/// Custom Debug impl masks `api_key`.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    /// Overridden by the `OPENAI_API_KEY` environment variable.
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub image_model: String,
    pub image_size: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "gpt-4o".to_string(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
        }
    }
}

impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("image_model", &self.image_model)
            .field("image_size", &self.image_size)
            .finish()
    }
}

/// [`ContentProducer`] backed by OpenAI-compatible chat-completion and
/// image-generation endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiProducer {
    client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiProducer {
    /// Creates a producer. The API key is resolved from `OPENAI_API_KEY`
    /// first, then from `settings.api_key`.
    pub fn new(client: reqwest::Client, mut settings: OpenAiSettings) -> Self {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.trim().is_empty() {
                settings.api_key = Some(SecretString::from(key));
            }
        }
        Self { client, settings }
    }

    /// Uses exactly the given settings, ignoring the environment.
    pub fn with_settings(client: reqwest::Client, settings: OpenAiSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &OpenAiSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Result<String, ProducerError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let parsed = Url::parse(base)?;

        // The bearer token must not travel in clear text to a remote host
        if parsed.scheme() != "https" {
            let is_localhost = parsed.scheme() == "http"
                && matches!(parsed.host_str(), Some("localhost" | "127.0.0.1"));
            if !is_localhost {
                tracing::error!(base_url = %base, "Rejecting non-HTTPS base URL");
                return Err(ProducerError::InsecureBaseUrl);
            }
        }

        Ok(format!("{}/{}", base, path))
    }

    async fn post_json<B, R>(&self, stage: &'static str, path: &str, body: &B) -> Result<R, ProducerError>
    where
        B: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let key = self
            .settings
            .api_key
            .as_ref()
            .ok_or(ProducerError::MissingApiKey)?;
        let url = self.endpoint(path)?;

        tracing::debug!(stage = stage, url = %url, "Calling generative service");

        let response = self
            .client
            .post(&url)
            .bearer_auth(key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|source| ProducerError::Network { stage, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(stage = stage, status = %status, "Generative service returned an error");
            return Err(ProducerError::HttpStatus {
                stage,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ProducerError::MalformedResponse {
                stage,
                reason: e.to_string(),
            })
    }

    async fn chat(
        &self,
        stage: &'static str,
        prompt: &str,
        json_object: bool,
    ) -> Result<String, ProducerError> {
        let request = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: json_object.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let response: ChatCompletionResponse =
            self.post_json(stage, "chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProducerError::MalformedResponse {
                stage,
                reason: "No message content in completion".to_string(),
            })
    }
}

#[async_trait]
impl ContentProducer for OpenAiProducer {
    async fn generate_article(
        &self,
        source: &FeedEntry,
        keywords: &[String],
    ) -> Result<ArticleDraft, ProducerError> {
        const STAGE: &str = "content";

        let raw = self
            .chat(STAGE, &article_prompt(source, keywords), true)
            .await?;

        let draft: ArticleDraft =
            serde_json::from_str(&raw).map_err(|e| ProducerError::MalformedResponse {
                stage: STAGE,
                reason: format!("Article is not the expected JSON object: {}", e),
            })?;

        tracing::info!(title = %draft.title, slug = %draft.slug, "Generated article");
        Ok(draft)
    }

    async fn generate_image_prompt(&self, draft: &ArticleDraft) -> Result<String, ProducerError> {
        let prompt = self
            .chat("image prompt", &image_prompt_request(draft), false)
            .await?;
        Ok(prompt.trim().to_string())
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ProducerError> {
        let request = ImageRequest {
            model: &self.settings.image_model,
            prompt,
            size: &self.settings.image_size,
            n: 1,
        };

        let response: ImageResponse = self
            .post_json("image", "images/generations", &request)
            .await?;

        let url = response.data.into_iter().next().and_then(|image| image.url);
        if url.is_none() {
            tracing::warn!("Image service returned no image URL");
        }
        Ok(url)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u8,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}
