use super::captions::CaptionPool;
use super::filter::filter_images;
use super::types::{GalleryKind, GalleryState, RemoteEntry};
use crate::config::SiteConfig;
use crate::error::FetchError;

pub const REMEDIATION_HINT: &str = "Check: 1) Folder exists 2) Images are inside 3) Repository is public";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    Loading,
    Empty,
    Error,
    ImageFailed,
}

/// Non-image node shown instead of missing or broken content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub gallery: GalleryKind,
    pub kind: PlaceholderKind,
    pub title: String,
    pub details: Vec<String>,
    /// Folder the user should upload into, kept apart from `details` so
    /// markup can set it as code.
    pub upload_folder: Option<String>,
}

impl Placeholder {
    pub fn loading(gallery: GalleryKind) -> Self {
        Self {
            gallery,
            kind: PlaceholderKind::Loading,
            title: format!("Loading {}s...", gallery),
            details: Vec::new(),
            upload_folder: None,
        }
    }

    pub fn empty(gallery: GalleryKind, folder: &str) -> Self {
        Self {
            gallery,
            kind: PlaceholderKind::Empty,
            title: format!("No {}s found", gallery),
            details: Vec::new(),
            upload_folder: Some(folder.trim_matches('/').to_string()),
        }
    }

    /// "Add images to the /{folder}/ folder" for empty placeholders.
    pub fn upload_hint(&self) -> Option<String> {
        self.upload_folder
            .as_ref()
            .map(|folder| format!("Add images to the /{}/ folder", folder))
    }

    pub fn error(gallery: GalleryKind, err: &FetchError) -> Self {
        Self {
            gallery,
            kind: PlaceholderKind::Error,
            title: format!("Error loading {}s", gallery),
            details: vec![err.user_message(), REMEDIATION_HINT.to_string()],
            upload_folder: None,
        }
    }

    pub fn image_failed(gallery: GalleryKind) -> Self {
        let title = match gallery {
            GalleryKind::Logo => "Failed to load",
            GalleryKind::Testimonial => "Image not found",
        };
        Self {
            gallery,
            kind: PlaceholderKind::ImageFailed,
            title: title.to_string(),
            details: Vec::new(),
            upload_folder: None,
        }
    }
}

/// A lazily loaded image whose error handler fires at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSlot {
    pub src: String,
    pub alt: String,
    pub lazy: bool,
    error_armed: bool,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            lazy: true,
            error_armed: true,
        }
    }

    /// Returns true only the first time; the handler is disarmed afterwards.
    pub fn disarm(&mut self) -> bool {
        std::mem::replace(&mut self.error_armed, false)
    }

    pub fn is_armed(&self) -> bool {
        self.error_armed
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryNode {
    Logo {
        image: ImageSlot,
    },
    Testimonial {
        image: ImageSlot,
        caption: String,
        author: String,
    },
    Placeholder(Placeholder),
}

impl GalleryNode {
    pub fn image(&self) -> Option<&ImageSlot> {
        match self {
            GalleryNode::Logo { image } | GalleryNode::Testimonial { image, .. } => Some(image),
            GalleryNode::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            GalleryNode::Placeholder(p) => Some(p),
            _ => None,
        }
    }

    /// Called when the image fails to load at display time. Swaps this node
    /// for a failure placeholder once; later calls are no-ops.
    pub fn report_image_error(&mut self) -> bool {
        let gallery = match self {
            GalleryNode::Logo { image } => {
                if !image.disarm() {
                    return false;
                }
                GalleryKind::Logo
            }
            GalleryNode::Testimonial { image, .. } => {
                if !image.disarm() {
                    return false;
                }
                GalleryKind::Testimonial
            }
            GalleryNode::Placeholder(_) => return false,
        };
        tracing::debug!("Image failed to load, showing {} placeholder", gallery);
        *self = GalleryNode::Placeholder(Placeholder::image_failed(gallery));
        true
    }
}

/// Page region the renderer writes into. Owned by the host page.
pub trait GalleryContainer: Send {
    fn clear(&mut self);
    fn append(&mut self, node: GalleryNode);
}

/// In-memory container; also what the binary serializes to HTML.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<GalleryNode>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[GalleryNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Image load failure for the node at `index`; siblings are untouched.
    pub fn report_image_error(&mut self, index: usize) -> bool {
        self.nodes
            .get_mut(index)
            .map(GalleryNode::report_image_error)
            .unwrap_or(false)
    }
}

impl GalleryContainer for NodeList {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append(&mut self, node: GalleryNode) {
        self.nodes.push(node);
    }
}

pub struct GalleryRenderer {
    raw_base: String,
    captions: CaptionPool,
}

impl GalleryRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_captions(config, CaptionPool::default())
    }

    pub fn with_captions(config: &SiteConfig, captions: CaptionPool) -> Self {
        Self {
            raw_base: config.raw_base(),
            captions,
        }
    }

    pub fn captions(&self) -> &CaptionPool {
        &self.captions
    }

    /// Direct download URL when the listing has one, raw-content URL otherwise.
    pub fn display_url(&self, folder: &str, entry: &RemoteEntry) -> String {
        match &entry.download_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("{}/{}/{}", self.raw_base, folder.trim_matches('/'), entry.name),
        }
    }

    pub fn render_loading(&self, kind: GalleryKind, container: &mut dyn GalleryContainer) {
        container.clear();
        container.append(GalleryNode::Placeholder(Placeholder::loading(kind)));
    }

    /// Renders already filtered entries. An empty list yields exactly one
    /// placeholder naming the folder to upload into.
    pub fn render(
        &self,
        kind: GalleryKind,
        folder: &str,
        entries: &[RemoteEntry],
        container: &mut dyn GalleryContainer,
    ) -> GalleryState {
        container.clear();

        if entries.is_empty() {
            container.append(GalleryNode::Placeholder(Placeholder::empty(kind, folder)));
            return GalleryState::Empty;
        }

        for entry in entries {
            let src = self.display_url(folder, entry);
            let node = match kind {
                GalleryKind::Logo => GalleryNode::Logo {
                    image: ImageSlot::new(src, strip_extension(&entry.name)),
                },
                GalleryKind::Testimonial => GalleryNode::Testimonial {
                    image: ImageSlot::new(src, format!("Testimonial screenshot: {}", entry.name)),
                    caption: self.captions.caption_for(&entry.name).to_string(),
                    author: self.captions.author().to_string(),
                },
            };
            container.append(node);
        }

        GalleryState::Rendered {
            count: entries.len(),
        }
    }

    pub fn render_error(
        &self,
        kind: GalleryKind,
        err: &FetchError,
        container: &mut dyn GalleryContainer,
    ) -> GalleryState {
        tracing::error!("Error loading {}s: {}", kind, err);
        container.clear();
        container.append(GalleryNode::Placeholder(Placeholder::error(kind, err)));
        GalleryState::Error {
            message: err.user_message(),
        }
    }

    /// Filters a fetch result and renders it; every outcome leaves the
    /// container populated.
    pub fn render_listing(
        &self,
        kind: GalleryKind,
        folder: &str,
        listing: Result<Vec<RemoteEntry>, FetchError>,
        container: &mut dyn GalleryContainer,
    ) -> GalleryState {
        match listing {
            Ok(entries) => {
                let images = filter_images(&entries);
                tracing::info!("Found {} images in {}/", images.len(), folder.trim_matches('/'));
                self.render(kind, folder, &images, container)
            }
            Err(err) => self.render_error(kind, &err, container),
        }
    }
}

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => name,
    }
}
