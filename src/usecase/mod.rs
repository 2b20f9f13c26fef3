pub mod list_pictures;
pub mod list_tags;
pub mod list_videos;

pub use list_pictures::ListPicturesUseCase;
pub use list_tags::ListTagsUseCase;
pub use list_videos::ListVideosUseCase;
