pub mod captions;
pub mod fetcher;
pub mod filter;
pub mod loader;
pub mod renderer;
pub mod types;

pub use captions::{caption_hash, CaptionPool};
pub use fetcher::{ContentsApiFetcher, FolderSource};
pub use filter::{filter_images, is_image_name};
pub use loader::{GalleryLoader, GallerySlot, LoadOutcome};
pub use renderer::{
    GalleryContainer, GalleryNode, GalleryRenderer, ImageSlot, NodeList, Placeholder,
    PlaceholderKind,
};
pub use types::{EntryKind, GalleryKind, GalleryState, RemoteEntry};
