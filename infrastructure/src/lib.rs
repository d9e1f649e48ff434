//! Infrastructure layer for tailor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading,
//! instruction document lookup and the HTTP completion back ends.

pub mod config;
pub mod instructions;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGeminiConfig, FileInstructionsConfig, FileOpenAiConfig,
    FileOutputConfig, FileProvidersConfig,
};
pub use instructions::{
    InstructionLoadError, InstructionLoader, InstructionSource, LoadedInstructions,
};
pub use providers::{
    AdapterCall, ProviderAdapter, gemini::GeminiAdapter, openai::OpenAiAdapter,
    routing::RoutingGateway,
};
