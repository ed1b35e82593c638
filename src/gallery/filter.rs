use super::types::{EntryKind, RemoteEntry};

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// True when the text after the final `.` is a known image extension.
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Keeps files with an image extension, in listing order.
pub fn filter_images(entries: &[RemoteEntry]) -> Vec<RemoteEntry> {
    entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::File && is_image_name(&entry.name))
        .cloned()
        .collect()
}
