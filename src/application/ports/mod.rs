mod file_loader;
mod llm_client;
mod roadmap_renderer;
mod submission_store;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use roadmap_renderer::{RenderError, RoadmapRenderer};
pub use submission_store::{SubmissionStore, SubmissionStoreError};
