/// Renders narrative prose into a paginated document.
pub trait RoadmapRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render failed: {0}")]
    RenderFailed(String),
}
