//! Shared file helpers

pub mod encoding;
pub mod paths;

pub use encoding::read_text_file;
pub use paths::same_location;
