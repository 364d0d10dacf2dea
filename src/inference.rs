//! Text and image generation through a remote inference service.

/// Connection settings for the inference service.
pub mod config;

/// OpenAI compatible REST implementation.
pub mod openai;

/// Common traits for inference service abstraction.
pub mod traits;
