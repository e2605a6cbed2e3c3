// src/application/ports/util.rs

/// Derives a routing slug from free text when the content index omits one.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
