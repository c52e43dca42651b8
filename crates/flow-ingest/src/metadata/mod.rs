//! Schema-master metadata: normalization and typed loading.

mod loader;
mod normalize;

pub use loader::{COLUMN_NAME_HEADER, FILE_NAME_HEADER, FromFrame, load_metadata};
pub use normalize::{normalize_flag, normalize_metadata, normalize_whitespace};
