//! Configuration for inference service connections.
use secrecy::SecretString;
use serde::Deserialize;

/// Default OpenAI compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
/// Default chat completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default image generation model.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
/// Default generated image dimensions.
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
/// Default prompt limit in characters.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 60_000;

/// Model selection read from the `[inference]` table of
/// `release-summary.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InferenceSettings {
    /// Chat completion model used for every text prediction.
    pub model: String,
    /// Model used for image generation.
    pub image_model: String,
    /// Requested image size, e.g. "1024x1024".
    pub image_size: String,
    /// Prompts longer than this are rejected before calling the service.
    pub max_input_length: usize,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            image_model: DEFAULT_IMAGE_MODEL.into(),
            image_size: DEFAULT_IMAGE_SIZE.into(),
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

/// Everything needed to connect to the inference service.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub base_url: String,
    pub token: SecretString,
    pub settings: InferenceSettings,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            token: SecretString::from("".to_string()),
            settings: InferenceSettings::default(),
        }
    }
}
