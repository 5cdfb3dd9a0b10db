pub mod fallback;
pub mod gemini;
pub mod offline;
pub mod traits;
pub mod types;

pub use fallback::{fetch_with_fallback, strip_json_fence, Source, Sourced};
pub use gemini::{GeminiClient, GenerationError};
pub use offline::OfflineClient;
pub use traits::GenerationClient;
pub use types::{GenerationRequest, Schema, SchemaType};
