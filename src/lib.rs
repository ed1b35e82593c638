//! Loads portfolio galleries (client logos, testimonial screenshots) from a
//! folder listing on a hosted repository's contents API and renders them
//! into caller-owned containers, falling back to placeholders when a folder
//! is empty, missing, rate limited or unreachable.

pub mod config;
pub mod error;
pub mod gallery;
pub mod html;

pub use config::SiteConfig;
pub use error::FetchError;
pub use gallery::{
    filter_images, ContentsApiFetcher, FolderSource, GalleryContainer, GalleryKind, GalleryLoader,
    GalleryNode, GalleryRenderer, GalleryState, LoadOutcome, NodeList, RemoteEntry,
};
