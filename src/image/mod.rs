pub mod custom_image;
pub mod reference;
mod source;

use mockall::automock;
use serde::{Deserialize, Serialize};

pub use custom_image::{build_custom_image, CustomImageResource, OsState, StorageAccountType};
pub use reference::{resolve_image_reference, ImageReference};
pub use source::{
    GalleryImageSource, ImageSource, ManagedImageSource, MarketplaceImageSource, UrlSource,
};

/// Suffix appended to a pool name to name its custom image resource.
pub const CUSTOM_IMAGE_SUFFIX: &str = "osCustomImage";

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum OsType {
    #[default]
    Linux,
    Windows,
}

/// Read-only view of a node pool, as seen by the builder and the resolver.
#[automock]
pub trait NodePoolView {
    fn name(&self) -> String;
    fn is_windows(&self) -> bool;
    fn image_source(&self) -> Option<ImageSource>;
}

/// Name of the custom image resource built for `pool_name`.
///
/// Shared by the builder and the resolver so that URL-sourced references
/// always point at the resource the builder emits.
pub fn custom_image_name(pool_name: &str) -> String {
    format!("{}{}", pool_name, CUSTOM_IMAGE_SUFFIX)
}
