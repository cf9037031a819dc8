mod loader;
mod model;
mod paths;

pub use loader::{APP_NAME, ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{Config, DEFAULT_PREVIEW_COUNT};
pub use paths::{COMPANION_NAME, DefaultPaths, PathOverrides, ResolvedPaths, STATE_FILE_NAME};
