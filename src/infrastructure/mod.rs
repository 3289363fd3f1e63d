pub mod llm;
pub mod observability;
pub mod reporting;
pub mod storage;
pub mod text_processing;
