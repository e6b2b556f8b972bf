use serde::{Deserialize, Serialize};

/// Where a node pool's OS disk image comes from.
///
/// Exactly one variant is set per pool; a pool without any source uses the
/// default marketplace image.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub enum ImageSource {
    /// Raw VHD blob, turned into a custom image resource at deploy time.
    Url(UrlSource),
    /// Shared image gallery version.
    Gallery(GalleryImageSource),
    /// Pre-existing managed image.
    Managed(ManagedImageSource),
    /// Explicit marketplace coordinates.
    Marketplace(MarketplaceImageSource),
}

impl ImageSource {
    /// Whether this source needs a companion custom image resource.
    pub fn requires_custom_image(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::Url(_) => "url",
            ImageSource::Gallery(_) => "gallery",
            ImageSource::Managed(_) => "managed",
            ImageSource::Marketplace(_) => "marketplace",
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UrlSource {
    /// Location of the VHD blob
    pub blob_uri: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageSource {
    pub subscription_id: String,
    pub resource_group: String,
    pub gallery_name: String,
    pub image_name: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ManagedImageSource {
    pub resource_group: String,
    pub image_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceImageSource {
    pub offer: String,
    pub publisher: String,
    pub sku: String,
    pub version: String,
}
