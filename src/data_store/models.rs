use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a recording or image generation
pub type RecordingId = i64;

/// Body of `POST /recordings/`
///
/// Absent optionals are sent as explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioRecordingCreateRequest {
    pub audio_file_path: String,
    pub parent_audio_recording_id: Option<RecordingId>,
    pub parent_time: Option<f64>,  // Seconds into the parent recording
}

/// A recording as returned by the data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioRecordingResponse {
    pub id: RecordingId,
    pub audio_file_path: String,
    pub created_date: String,
    pub updated_date: String,
    pub parent_audio_recording: Option<RecordingId>,
    pub parent_time: Option<f64>,

    // Only present on full rows (the tree endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl AudioRecordingResponse {
    /// Whether this recording starts a new tree
    pub fn is_root(&self) -> bool {
        self.parent_audio_recording.is_none()
    }

    /// `created_date` parsed as a naive timestamp, if it is ISO-8601
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_date)
    }

    /// `updated_date` parsed as a naive timestamp, if it is ISO-8601
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.updated_date)
    }
}

/// Reply to the transcription and prompts updates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TranscriptionUpdate<'a> {
    pub transcription: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PromptsUpdate<'a> {
    pub prompts: &'a [String],
}

/// Lifecycle of an image generated from a recording's prompts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageGenerationStatus {
    #[default]
    Pending,
    Generating,
    Completed,
    Failed,
}

/// Body of `POST /recordings/{id}/image-generations/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationCreate {
    pub audio_recording_id: RecordingId,
    pub prompt: String,
    pub image_file_path: Option<String>,
    pub seed: Option<i64>,
    pub request_payload: Option<serde_json::Value>,
    #[serde(default)]
    pub status: ImageGenerationStatus,
    #[serde(default)]
    pub reason: Option<String>,  // Why a generation failed
}

impl ImageGenerationCreate {
    /// A pending generation with nothing but a prompt
    pub fn new(audio_recording_id: RecordingId, prompt: impl Into<String>) -> Self {
        Self {
            audio_recording_id,
            prompt: prompt.into(),
            image_file_path: None,
            seed: None,
            request_payload: None,
            status: ImageGenerationStatus::Pending,
            reason: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchImageGenerationCreate<'a> {
    pub generations: &'a [ImageGenerationCreate],
}

/// Partial update of an image generation
///
/// Unset fields are left out of the body so the server keeps their current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_payload: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ImageGenerationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,  // Generation time in seconds
}

/// An image generation as returned by create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    pub id: RecordingId,
    pub audio_recording_id: RecordingId,
    pub image_file_path: Option<String>,
    pub seed: Option<i64>,
    pub request_payload: Option<serde_json::Value>,
    pub status: ImageGenerationStatus,
    pub created_date: String,
    pub updated_date: String,
}

/// One entry of the batch create reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationSummary {
    pub id: RecordingId,
    pub audio_recording_id: RecordingId,
    pub status: ImageGenerationStatus,
    pub created_date: String,
    pub updated_date: String,
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}
