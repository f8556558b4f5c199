//! Image References
//!
//! Asset references returned by the content backend and the CDN URLs they
//! resolve to.

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;

const IMAGE_CDN_BASE_URL: &str = "https://cdn.sanity.io/images";

/// Image field of a product document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Referenced asset, absent when no image was uploaded.
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

impl ImageRef {
    /// Create an image field pointing at the given asset id.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            asset: Some(AssetRef {
                reference: Some(reference.into()),
            }),
        }
    }

    /// The asset reference, if it is present and non-empty.
    pub fn asset_ref(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .and_then(|asset| asset.reference.as_deref())
            .filter(|reference| !reference.is_empty())
    }
}

/// Reference to an uploaded asset document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Asset document id, e.g. `image-<hash>-<w>x<h>-<format>`.
    #[serde(rename = "_ref", default)]
    pub reference: Option<String>,
}

/// Builds CDN URLs for image references of one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    /// Create a builder for the catalog described by `config`.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
        }
    }

    /// Resolve an image field to a URL, or `None` when it has no asset.
    pub fn image(&self, image: &ImageRef) -> Option<String> {
        image.asset_ref().map(|reference| self.url(reference))
    }

    /// Resolve an asset reference to its CDN URL.
    ///
    /// References that don't follow the `image-<id>-<w>x<h>-<format>` shape
    /// are appended verbatim; the resulting URL simply won't load.
    pub fn url(&self, reference: &str) -> String {
        let file_name = parse_asset_file_name(reference).unwrap_or_else(|| reference.to_string());

        format!(
            "{IMAGE_CDN_BASE_URL}/{}/{}/{file_name}",
            self.project_id, self.dataset
        )
    }
}

fn parse_asset_file_name(reference: &str) -> Option<String> {
    let rest = reference.strip_prefix("image-")?;
    let (head, format) = rest.rsplit_once('-')?;
    let (id, dimensions) = head.rsplit_once('-')?;
    let (width, height) = dimensions.split_once('x')?;

    let is_numeric = |value: &str| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());

    if id.is_empty() || format.is_empty() || !is_numeric(width) || !is_numeric(height) {
        return None;
    }

    Some(format!("{id}-{dimensions}.{format}"))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new(&CatalogConfig::new("cort95rk", "production", "2025-01-13"))
    }

    #[test]
    fn url_for_well_formed_reference() {
        let url = builder().url("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg");

        assert_eq!(
            url,
            "https://cdn.sanity.io/images/cort95rk/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg"
        );
    }

    #[test]
    fn url_for_malformed_reference_is_deterministic() {
        let first = builder().url("not-an-image-ref");
        let second = builder().url("not-an-image-ref");

        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://cdn.sanity.io/images/cort95rk/production/not-an-image-ref"
        );
    }

    #[test]
    fn url_rejects_non_numeric_dimensions() {
        let url = builder().url("image-abc-widexhigh-png");

        assert!(url.ends_with("/image-abc-widexhigh-png"));
    }

    #[test]
    fn image_without_asset_resolves_to_none() {
        assert_eq!(builder().image(&ImageRef::default()), None);
    }

    #[test]
    fn image_with_empty_reference_resolves_to_none() {
        assert_eq!(builder().image(&ImageRef::new("")), None);
    }

    #[test]
    fn image_with_whitespace_reference_still_resolves() {
        let url = builder().image(&ImageRef::new("  "));

        assert_eq!(
            url.as_deref(),
            Some("https://cdn.sanity.io/images/cort95rk/production/  ")
        );
    }

    #[test]
    fn image_with_reference_resolves_to_url() {
        let url = builder().image(&ImageRef::new("image-abc-10x20-png"));

        assert_eq!(
            url.as_deref(),
            Some("https://cdn.sanity.io/images/cort95rk/production/abc-10x20.png")
        );
    }

    #[test]
    fn deserializes_document_image_field() -> TestResult {
        let image: ImageRef = serde_json::from_str(
            r#"{"_type": "image", "asset": {"_ref": "image-abc-10x20-png", "_type": "reference"}}"#,
        )?;

        assert_eq!(image.asset_ref(), Some("image-abc-10x20-png"));

        Ok(())
    }

    #[test]
    fn deserializes_image_without_asset() -> TestResult {
        let image: ImageRef = serde_json::from_str(r#"{"_type": "image"}"#)?;

        assert_eq!(image.asset_ref(), None);

        Ok(())
    }
}
