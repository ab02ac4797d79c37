//! Picture URI composition.

use super::ports::UriComposer;

/// Host placeholder stored in picture references.
pub const PICTURE_BASE_PLACEHOLDER: &str = "http://catalogbaseurltobereplaced";

/// Rewrites the placeholder host with the configured catalog base URL.
#[derive(Debug, Clone)]
pub struct CatalogUriComposer {
    base_url: String,
}

impl CatalogUriComposer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl UriComposer for CatalogUriComposer {
    fn compose_picture_uri(&self, raw: &str) -> String {
        raw.replace(PICTURE_BASE_PLACEHOLDER, &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_placeholder() {
        let composer = CatalogUriComposer::new("https://shop.example.com/");
        assert_eq!(
            composer.compose_picture_uri("http://catalogbaseurltobereplaced/images/products/1.png"),
            "https://shop.example.com/images/products/1.png"
        );
    }

    #[test]
    fn test_leaves_absolute_uri_alone() {
        let composer = CatalogUriComposer::new("https://shop.example.com");
        let raw = "https://cdn.example.com/2.png";
        assert_eq!(composer.compose_picture_uri(raw), raw);
    }
}
