//! Markup for rendered galleries, using the class names the portfolio
//! stylesheet expects.

use crate::gallery::{GalleryKind, GalleryNode, ImageSlot, Placeholder, PlaceholderKind};

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn icon_for(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::Loading => "fas fa-spinner fa-spin",
        PlaceholderKind::Empty => "fas fa-folder-open",
        PlaceholderKind::Error | PlaceholderKind::ImageFailed => "fas fa-exclamation-triangle",
    }
}

/// Armed images carry a self-disarming `onerror` that swaps the item's
/// content for the image-failed placeholder.
fn render_image(image: &ImageSlot, gallery: GalleryKind) -> String {
    let on_error = if image.is_armed() {
        let fallback = render_placeholder(&Placeholder::image_failed(gallery));
        let script = format!(
            "this.onerror=null; this.parentElement.innerHTML='{}';",
            fallback
        );
        format!(" onerror=\"{}\"", escape_html(&script))
    } else {
        String::new()
    };
    format!(
        "<img src=\"{}\" class=\"{}-image\" alt=\"{}\"{}{}>",
        escape_html(&image.src),
        gallery,
        escape_html(&image.alt),
        if image.lazy { " loading=\"lazy\"" } else { "" },
        on_error
    )
}

fn render_placeholder(p: &Placeholder) -> String {
    let gallery = p.gallery.as_str();
    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"{}-placeholder{}\"><i class=\"{}\"></i><div>{}</div>",
        gallery,
        if p.kind == PlaceholderKind::Error { " error" } else { "" },
        icon_for(p.kind),
        escape_html(&p.title)
    ));
    if let Some(folder) = &p.upload_folder {
        out.push_str(&format!(
            "<small>Add images to the <code>/{}/</code> folder</small>",
            escape_html(folder)
        ));
    }
    for detail in &p.details {
        out.push_str(&format!("<small>{}</small>", escape_html(detail)));
    }
    out.push_str("</div>");
    out
}

pub fn render_node(node: &GalleryNode) -> String {
    match node {
        GalleryNode::Logo { image } => format!(
            "<div class=\"logo-item fade-in\">{}</div>",
            render_image(image, GalleryKind::Logo)
        ),
        GalleryNode::Testimonial {
            image,
            caption,
            author,
        } => format!(
            "<div class=\"testimonial-card fade-in\">{}<p class=\"testimonial-text\">\"{}\"</p><strong class=\"testimonial-author\">- {}</strong></div>",
            render_image(image, GalleryKind::Testimonial),
            escape_html(caption),
            escape_html(author)
        ),
        GalleryNode::Placeholder(p) => format!(
            "<div class=\"{}-item\">{}</div>",
            p.gallery.as_str(),
            render_placeholder(p)
        ),
    }
}

pub fn render_nodes(nodes: &[GalleryNode]) -> String {
    nodes.iter().map(render_node).collect::<Vec<_>>().join("\n")
}
