use super::fetcher::{ContentsApiFetcher, FolderSource};
use super::renderer::{GalleryContainer, GalleryRenderer};
use super::types::{GalleryKind, GalleryState};
use crate::config::SiteConfig;
use anyhow::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Result of one `load` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied(GalleryState),
    /// A newer load started while this one was in flight; its result was dropped.
    Stale,
}

/// One gallery container plus the bookkeeping that keeps stale loads out.
pub struct GallerySlot<C> {
    kind: GalleryKind,
    folder: String,
    container: Mutex<C>,
    generation: AtomicU64,
    state: RwLock<GalleryState>,
}

impl<C: GalleryContainer> GallerySlot<C> {
    pub fn new(kind: GalleryKind, folder: impl Into<String>, container: C) -> Self {
        Self {
            kind,
            folder: folder.into(),
            container: Mutex::new(container),
            generation: AtomicU64::new(0),
            state: RwLock::new(GalleryState::Idle),
        }
    }

    pub fn kind(&self) -> GalleryKind {
        self.kind
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn container(&self) -> &Mutex<C> {
        &self.container
    }

    pub async fn state(&self) -> GalleryState {
        self.state.read().await.clone()
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Loads the logo and testimonial galleries from a remote folder listing.
pub struct GalleryLoader<C> {
    source: Arc<dyn FolderSource>,
    renderer: GalleryRenderer,
    logo: GallerySlot<C>,
    testimonial: GallerySlot<C>,
}

impl<C: GalleryContainer> GalleryLoader<C> {
    /// Loader backed by the contents API described by `config`.
    pub fn from_config(config: &SiteConfig, logo: C, testimonial: C) -> Result<Self> {
        let source = Arc::new(ContentsApiFetcher::new(config)?);
        Ok(Self::new(config, source, GalleryRenderer::new(config), logo, testimonial))
    }

    pub fn new(
        config: &SiteConfig,
        source: Arc<dyn FolderSource>,
        renderer: GalleryRenderer,
        logo: C,
        testimonial: C,
    ) -> Self {
        Self {
            source,
            renderer,
            logo: GallerySlot::new(GalleryKind::Logo, config.logo_folder.clone(), logo),
            testimonial: GallerySlot::new(
                GalleryKind::Testimonial,
                config.testimonial_folder.clone(),
                testimonial,
            ),
        }
    }

    pub fn slot(&self, kind: GalleryKind) -> &GallerySlot<C> {
        match kind {
            GalleryKind::Logo => &self.logo,
            GalleryKind::Testimonial => &self.testimonial,
        }
    }

    /// Idle/settled -> Loading -> Rendered | Empty | Error. Never fails: every
    /// fetch error ends up as a placeholder in the container.
    pub async fn load(&self, kind: GalleryKind) -> LoadOutcome {
        let slot = self.slot(kind);
        let generation = slot.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut container = slot.container.lock().await;
            if !slot.is_current(generation) {
                return LoadOutcome::Stale;
            }
            self.renderer.render_loading(kind, &mut *container);
            *slot.state.write().await = GalleryState::Loading;
        }

        let listing = self.source.fetch_folder(&slot.folder).await;

        let mut container = slot.container.lock().await;
        if !slot.is_current(generation) {
            tracing::debug!(
                "Discarding stale {} load (generation {}), a newer one is in flight",
                kind,
                generation
            );
            return LoadOutcome::Stale;
        }
        let state = self
            .renderer
            .render_listing(kind, &slot.folder, listing, &mut *container);
        *slot.state.write().await = state.clone();
        LoadOutcome::Applied(state)
    }

    /// Manual refresh trigger: reloads both galleries concurrently.
    pub async fn refresh_all(&self) -> (LoadOutcome, LoadOutcome) {
        tracing::info!("Refreshing portfolio images...");
        futures_util::future::join(
            self.load(GalleryKind::Logo),
            self.load(GalleryKind::Testimonial),
        )
        .await
    }
}
