//! Daily-briefing video state.

#[cfg(test)]
#[path = "briefing_test.rs"]
mod briefing_test;

use schema::{ApiError, VideoState, VideoStatus};

pub const BRIEFING_LOAD_FAILED: &str = "Failed to load daily briefing";
pub const BRIEFING_GENERATE_FAILED: &str = "Failed to start daily briefing";

#[derive(Clone, Debug, Default)]
pub struct BriefingState {
    /// `None` until a briefing has been generated.
    pub video: Option<VideoStatus>,
    pub is_loading: bool,
    pub is_generating: bool,
    pub error: Option<String>,
}

impl BriefingState {
    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn apply_latest(&mut self, result: Result<Option<VideoStatus>, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(video) => self.video = video,
            Err(_) => self.error = Some(BRIEFING_LOAD_FAILED.to_owned()),
        }
    }

    pub fn begin_generate(&mut self) -> bool {
        if self.is_generating {
            return false;
        }
        self.is_generating = true;
        self.error = None;
        true
    }

    pub fn finish_generate(&mut self, result: Result<VideoStatus, ApiError>) {
        self.is_generating = false;
        match result {
            Ok(video) => self.video = Some(video),
            Err(_) => self.error = Some(BRIEFING_GENERATE_FAILED.to_owned()),
        }
    }

    /// Whether the view should keep polling `/api/video/latest`.
    #[must_use]
    pub fn should_poll(&self) -> bool {
        self.video.as_ref().is_some_and(|v| !v.status.is_terminal())
    }

    /// Playable URL once the render completed.
    #[must_use]
    pub fn playable_url(&self) -> Option<&str> {
        self.video.as_ref().filter(|v| v.status == VideoState::Completed).and_then(|v| v.video_url.as_deref())
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.video.as_ref().map(|v| v.status) {
            None => "No briefing yet",
            Some(VideoState::Pending) => "Queued",
            Some(VideoState::Processing) => "Rendering",
            Some(VideoState::Completed) => "Ready",
            Some(VideoState::Failed) => "Failed",
            Some(VideoState::Unknown) => "Unknown",
        }
    }
}
