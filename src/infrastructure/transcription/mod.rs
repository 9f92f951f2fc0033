mod assemblyai_provider;

pub use assemblyai_provider::{AssemblyAiProvider, DEFAULT_ASSEMBLYAI_BASE_URL};
