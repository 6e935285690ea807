pub mod completion_repository;
pub mod gemini_completion_repository;
pub mod openai_completion_repository;
pub mod phrasebook_repository;

pub use completion_repository::CompletionRepository;
pub use gemini_completion_repository::{GeminiCompletionRepository, DEFAULT_GEMINI_BASE_URL};
pub use openai_completion_repository::OpenAiCompletionRepository;
pub use phrasebook_repository::HardcodedPhrasebookRepository;
