//! Implements the Inference trait for OpenAI compatible APIs
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    Result,
    inference::{
        config::{InferenceConfig, InferenceSettings},
        openai::types::{
            ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
            ImageGenerationRequest, ImageGenerationResponse,
        },
        traits::{GeneratedImage, Inference},
    },
};

mod types;

const USER_ROLE: &str = "user";

/// Inference implementation using reqwest against the chat completions and
/// image generations endpoints.
pub struct OpenAi {
    settings: InferenceSettings,
    base_url: Url,
    client: Client,
    download_client: Client,
}

impl OpenAi {
    /// Create client with bearer token authentication.
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let token = config.token.expose_secret();

        let mut headers = HeaderMap::new();

        let token_value =
            HeaderValue::from_str(format!("Bearer {}", token).as_str())?;

        headers.append("Authorization", token_value);

        let client = Client::builder().default_headers(headers).build()?;

        // generated images are served from a different host and must not
        // receive the API token
        let download_client = Client::builder().build()?;

        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            settings: config.settings,
            base_url: Url::parse(&base_url)?,
            client,
            download_client,
        })
    }
}

/// Each segment becomes its own user message, in order.
fn to_messages(segments: Vec<String>) -> Vec<ChatMessage> {
    segments
        .into_iter()
        .map(|content| ChatMessage {
            role: USER_ROLE.into(),
            content: Some(content),
        })
        .collect()
}

/// First non-blank completion text, if any.
fn first_completion(response: ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
}

#[async_trait]
impl Inference for OpenAi {
    fn max_input_length(&self) -> usize {
        self.settings.max_input_length
    }

    async fn predict(&self, segments: Vec<String>) -> Result<Option<String>> {
        let url = self.base_url.join("chat/completions")?;

        let body = ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: to_messages(segments),
        };

        debug!("requesting completion from model {}", body.model);

        let request = self.client.post(url).json(&body).build()?;
        let response = self.client.execute(request).await?;
        let result = response.error_for_status()?;
        let completion: ChatCompletionResponse = result.json().await?;

        Ok(first_completion(completion))
    }

    async fn generate_image(
        &self,
        prompt: String,
    ) -> Result<Option<GeneratedImage>> {
        let url = self.base_url.join("images/generations")?;

        let body = ImageGenerationRequest {
            model: self.settings.image_model.clone(),
            prompt,
            n: 1,
            size: self.settings.image_size.clone(),
        };

        debug!("requesting image from model {}", body.model);

        let request = self.client.post(url).json(&body).build()?;
        let response = self.client.execute(request).await?;
        let result = response.error_for_status()?;
        let generated: ImageGenerationResponse = result.json().await?;

        Ok(generated
            .data
            .into_iter()
            .next()
            .map(|d| GeneratedImage { url: d.url }))
    }

    async fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        let request = self.download_client.get(url).build()?;
        let response = self.download_client.execute(request).await?;
        let result = response.error_for_status()?;
        let content = result.bytes().await?;
        Ok(content.to_vec())
    }
}
