pub mod config;
pub mod fs_directory;
pub mod fs_metadata;
pub mod metadata_store;
