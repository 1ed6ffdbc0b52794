pub mod config;
pub mod data_store;

pub use config::Config;
pub use data_store::{
    AudioRecordingCreateRequest, AudioRecordingResponse, ClientConfig, ClientError,
    ImageGenerationCreate, ImageGenerationResponse, ImageGenerationStatus,
    ImageGenerationSummary, ImageGenerationUpdate, RecordingClient, RecordingId, UpdateMessage,
};
