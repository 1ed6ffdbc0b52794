//! Client for the conversation tree data store API
//!
//! The data store owns recordings and their branching structure:
//! - POST /recordings/ - Create a recording, optionally branching off a parent
//! - GET /recordings/:id/tree - A recording and all of its descendants
//! - PUT /recordings/:id/transcription, PUT /recordings/:id/prompts
//! - POST/PUT /recordings/:id/image-generations/... - Images generated from prompts

mod client;
mod config;
mod error;
pub mod models;

pub use client::RecordingClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use models::{
    AudioRecordingCreateRequest, AudioRecordingResponse, ImageGenerationCreate,
    ImageGenerationResponse, ImageGenerationStatus, ImageGenerationSummary,
    ImageGenerationUpdate, RecordingId, UpdateMessage,
};
