mod common;

use common::{config_for, folder_path, spawn_stub, StubResponse};
use folio_gallery::gallery::{CaptionPool, PlaceholderKind};
use folio_gallery::html::render_nodes;
use folio_gallery::{GalleryKind, GalleryLoader, GalleryNode, GalleryState, LoadOutcome, NodeList};
use serde_json::json;

async fn loader_for(routes: Vec<(String, StubResponse)>) -> GalleryLoader<NodeList> {
    let base = spawn_stub(routes).await;
    GalleryLoader::from_config(&config_for(&base), NodeList::new(), NodeList::new())
        .expect("build loader")
}

fn error_text(nodes: &[GalleryNode]) -> String {
    let placeholder = nodes[0].placeholder().expect("placeholder");
    assert_eq!(placeholder.kind, PlaceholderKind::Error);
    placeholder.details.join(" | ")
}

#[tokio::test]
async fn missing_folder_renders_empty_placeholder() {
    let loader = loader_for(Vec::new()).await;

    let outcome = loader.load(GalleryKind::Logo).await;

    assert_eq!(outcome, LoadOutcome::Applied(GalleryState::Empty));
    let logos = loader.slot(GalleryKind::Logo).container().lock().await;
    assert_eq!(logos.len(), 1);
    let placeholder = logos.nodes()[0].placeholder().expect("placeholder");
    assert_eq!(placeholder.kind, PlaceholderKind::Empty);
    assert_eq!(placeholder.upload_folder.as_deref(), Some("logo"));
    assert!(placeholder.upload_hint().unwrap().contains("/logo/"));
}

#[tokio::test]
async fn only_images_are_rendered() {
    let listing = json!([
        {"name": "a.png", "type": "file", "download_url": "https://x/a.png"},
        {"name": "readme.md", "type": "file"}
    ]);
    let loader = loader_for(vec![(folder_path("logo"), StubResponse::json(listing))]).await;

    let outcome = loader.load(GalleryKind::Logo).await;

    assert_eq!(outcome, LoadOutcome::Applied(GalleryState::Rendered { count: 1 }));
    let logos = loader.slot(GalleryKind::Logo).container().lock().await;
    assert_eq!(logos.len(), 1);
    assert_eq!(logos.nodes()[0].image().expect("image").src, "https://x/a.png");
}

#[tokio::test]
async fn rate_limit_message_differs_from_server_error() {
    let loader = loader_for(vec![
        (folder_path("logo"), StubResponse::status(403, "Forbidden")),
        (
            folder_path("testimonial"),
            StubResponse::status(500, "Internal Server Error"),
        ),
    ])
    .await;

    loader.refresh_all().await;

    let logos = loader.slot(GalleryKind::Logo).container().lock().await;
    let testimonials = loader.slot(GalleryKind::Testimonial).container().lock().await;
    let limited = error_text(logos.nodes());
    let generic = error_text(testimonials.nodes());

    assert!(limited.contains("Rate limit exceeded"));
    assert!(generic.contains("500"));
    assert!(!generic.contains("Rate limit"));
    assert_ne!(limited, generic);
}

#[tokio::test]
async fn failed_image_only_affects_its_own_node() {
    let listing = json!([
        {"name": "one.jpg", "type": "file", "download_url": null},
        {"name": "two.jpg", "type": "file", "download_url": null}
    ]);
    let loader = loader_for(vec![(folder_path("testimonial"), StubResponse::json(listing))]).await;
    loader.load(GalleryKind::Testimonial).await;

    let mut testimonials = loader.slot(GalleryKind::Testimonial).container().lock().await;
    assert!(testimonials.report_image_error(1));
    assert!(!testimonials.report_image_error(1));

    let nodes = testimonials.nodes();
    assert!(matches!(nodes[0], GalleryNode::Testimonial { .. }));
    assert!(nodes[0]
        .image()
        .expect("image")
        .src
        .ends_with("/me/site/main/testimonial/one.jpg"));
    let failed = nodes[1].placeholder().expect("placeholder");
    assert_eq!(failed.kind, PlaceholderKind::ImageFailed);
    assert_eq!(failed.title, "Image not found");
}

#[tokio::test]
async fn testimonial_captions_are_stable_across_refreshes() {
    let listing = json!([
        {"name": "testimonial1.jpg", "type": "file", "download_url": "https://x/t1.jpg"}
    ]);
    let loader = loader_for(vec![(folder_path("testimonial"), StubResponse::json(listing))]).await;
    let expected = CaptionPool::default().caption_for("testimonial1.jpg").to_string();

    for _ in 0..2 {
        loader.load(GalleryKind::Testimonial).await;
        let testimonials = loader.slot(GalleryKind::Testimonial).container().lock().await;
        match &testimonials.nodes()[0] {
            GalleryNode::Testimonial { caption, .. } => assert_eq!(caption, &expected),
            other => panic!("unexpected node: {:?}", other),
        }
        assert!(render_nodes(testimonials.nodes()).contains(&expected));
    }
}
