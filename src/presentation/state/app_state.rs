use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, RoadmapRenderer, SubmissionStore};
use crate::application::services::SubmissionService;

pub struct AppState<L, F, S, R>
where
    L: LlmClient,
    F: FileLoader,
    S: SubmissionStore,
    R: RoadmapRenderer,
{
    pub submission_service: Arc<SubmissionService<L, F, S, R>>,
}

impl<L, F, S, R> Clone for AppState<L, F, S, R>
where
    L: LlmClient,
    F: FileLoader,
    S: SubmissionStore,
    R: RoadmapRenderer,
{
    fn clone(&self) -> Self {
        Self {
            submission_service: Arc::clone(&self.submission_service),
        }
    }
}
