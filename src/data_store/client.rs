use super::config::ClientConfig;
use super::error::{ClientError, Result};
use super::models::{
    AudioRecordingCreateRequest, AudioRecordingResponse, BatchImageGenerationCreate,
    ImageGenerationCreate, ImageGenerationResponse, ImageGenerationSummary,
    ImageGenerationUpdate, PromptsUpdate, RecordingId, TranscriptionUpdate, UpdateMessage,
};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Client for the conversation tree data store
///
/// Cloning is cheap: clones share one connection pool. Every operation is a
/// single request with no retry; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct RecordingClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RecordingClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::InvalidBaseAddress(format!("{}: {}", config.base_url, e))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseAddress(format!(
                "{}: unsupported scheme {}",
                config.base_url,
                base_url.scheme()
            )));
        }

        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(ClientError::InvalidBaseAddress(format!(
                "{}: query and fragment are not allowed",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        info!("Data store client configured for {}", base_url);

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create a recording, optionally branching off `parent_recording_id` at `parent_time`
    ///
    /// Creation is not idempotent: the same inputs twice make two recordings.
    pub async fn create_recording(
        &self,
        audio_file_path: &str,
        parent_recording_id: Option<RecordingId>,
        parent_time: Option<f64>,
    ) -> Result<AudioRecordingResponse> {
        let body = AudioRecordingCreateRequest {
            audio_file_path: audio_file_path.to_string(),
            parent_audio_recording_id: parent_recording_id,
            parent_time,
        };

        let url = self.url("/recordings/");
        debug!("POST {}", url);

        let recording: AudioRecordingResponse =
            self.send(self.http.post(&url).json(&body)).await?;

        info!(
            "Created recording {} for {} (parent={:?}, parent_time={:?})",
            recording.id, recording.audio_file_path, parent_recording_id, parent_time
        );

        Ok(recording)
    }

    /// Fetch `recording_id` and everything that branches from it
    ///
    /// Records come back in whatever order the server sends them.
    pub async fn get_recording_tree(
        &self,
        recording_id: RecordingId,
    ) -> Result<Vec<AudioRecordingResponse>> {
        let url = self.url(&format!("/recordings/{}/tree", recording_id));
        debug!("GET {}", url);

        let tree: Vec<AudioRecordingResponse> = self.send(self.http.get(&url)).await?;
        debug!("Tree of recording {} has {} nodes", recording_id, tree.len());

        Ok(tree)
    }

    pub async fn update_transcription(
        &self,
        recording_id: RecordingId,
        transcription: &str,
    ) -> Result<UpdateMessage> {
        let url = self.url(&format!("/recordings/{}/transcription", recording_id));
        debug!("PUT {}", url);

        self.send(self.http.put(&url).json(&TranscriptionUpdate { transcription }))
            .await
    }

    pub async fn update_prompts(
        &self,
        recording_id: RecordingId,
        prompts: &[String],
    ) -> Result<UpdateMessage> {
        let url = self.url(&format!("/recordings/{}/prompts", recording_id));
        debug!("PUT {} ({} prompts)", url, prompts.len());

        self.send(self.http.put(&url).json(&PromptsUpdate { prompts }))
            .await
    }

    pub async fn create_image_generation(
        &self,
        recording_id: RecordingId,
        generation: &ImageGenerationCreate,
    ) -> Result<ImageGenerationResponse> {
        let url = self.url(&format!("/recordings/{}/image-generations/", recording_id));
        debug!("POST {}", url);

        let created: ImageGenerationResponse =
            self.send(self.http.post(&url).json(generation)).await?;
        info!(
            "Created image generation {} for recording {}",
            created.id, recording_id
        );

        Ok(created)
    }

    /// Create several image generations in one server-side transaction
    pub async fn create_image_generations_batch(
        &self,
        recording_id: RecordingId,
        generations: &[ImageGenerationCreate],
    ) -> Result<Vec<ImageGenerationSummary>> {
        let url = self.url(&format!(
            "/recordings/{}/image-generations/batch",
            recording_id
        ));
        debug!("POST {} ({} generations)", url, generations.len());

        let created: Vec<ImageGenerationSummary> = self
            .send(
                self.http
                    .post(&url)
                    .json(&BatchImageGenerationCreate { generations }),
            )
            .await?;
        info!(
            "Created {} image generations for recording {}",
            created.len(),
            recording_id
        );

        Ok(created)
    }

    pub async fn update_image_generation(
        &self,
        recording_id: RecordingId,
        generation_id: RecordingId,
        update: &ImageGenerationUpdate,
    ) -> Result<ImageGenerationResponse> {
        let url = self.url(&format!(
            "/recordings/{}/image-generations/{}",
            recording_id, generation_id
        ));
        debug!("PUT {}", url);

        self.send(self.http.put(&url).json(update)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Issue the request and decode a 2xx body as `T`
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // The status is what matters here; a truncated body must not hide it
            let body = response.text().await.unwrap_or_default();
            warn!("Data store returned {}: {}", status, body);
            return Err(ClientError::RequestFailed { status, body });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|source| ClientError::MalformedResponse { source, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = RecordingClient::new(ClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(
            client.url("/recordings/3/tree"),
            "http://localhost:8000/recordings/3/tree"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = RecordingClient::new(ClientConfig::new("http://example.com/api")).unwrap();
        assert_eq!(client.url("/recordings/"), "http://example.com/api/recordings/");
    }

    #[test]
    fn test_rejects_relative_base_address() {
        let result = RecordingClient::new(ClientConfig::new("localhost:8000/recordings"));
        assert!(matches!(result, Err(ClientError::InvalidBaseAddress(_))));
    }

    #[test]
    fn test_rejects_query_and_fragment() {
        for base in ["http://localhost:8000/api?x=1", "http://localhost:8000/#top"] {
            let result = RecordingClient::new(ClientConfig::new(base));
            assert!(
                matches!(result, Err(ClientError::InvalidBaseAddress(_))),
                "{} should be rejected",
                base
            );
        }
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = RecordingClient::new(ClientConfig::new("ftp://localhost:8000"));
        assert!(matches!(result, Err(ClientError::InvalidBaseAddress(_))));
    }
}
