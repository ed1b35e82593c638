/// Ordered testimonial texts. A file name always maps to the same entry.
pub struct CaptionPool {
    texts: Vec<String>,
    author: String,
}

impl Default for CaptionPool {
    fn default() -> Self {
        Self::new(
            vec![
                "Great service and excellent results!".to_string(),
                "Fast turnaround and spotless data.".to_string(),
                "Reliable, accurate and easy to work with.".to_string(),
                "Exceeded our expectations on every task.".to_string(),
                "Clear communication from start to finish.".to_string(),
            ],
            "Satisfied Client",
        )
    }
}

impl CaptionPool {
    /// Falls back to the default pool if `texts` is empty.
    pub fn new(texts: Vec<String>, author: impl Into<String>) -> Self {
        let texts = if texts.is_empty() {
            vec!["Great service and excellent results!".to_string()]
        } else {
            texts
        };
        Self {
            texts,
            author: author.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn caption_for(&self, file_name: &str) -> &str {
        let index = caption_hash(file_name) as usize % self.texts.len();
        &self.texts[index]
    }
}

/// `hash = hash * 31 + code_unit` over UTF-16 code units, wrapped to i32,
/// then made non-negative.
pub fn caption_hash(file_name: &str) -> u32 {
    let hash = file_name
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32));
    hash.unsigned_abs()
}
