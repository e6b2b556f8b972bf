use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{custom_image_name, ImageSource, NodePoolView};
use crate::arm::{concat, literal, resource_id, variables, Expression, IMAGE_RESOURCE_TYPE};

/// The `imageReference` a VM resource embeds in its storage profile.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(untagged)]
pub enum ImageReference {
    ById {
        id: String,
    },
    ByCoordinates {
        offer: String,
        publisher: String,
        sku: String,
        version: String,
    },
}

impl ImageReference {
    pub fn id(&self) -> Option<&str> {
        match self {
            ImageReference::ById { id } => Some(id),
            ImageReference::ByCoordinates { .. } => None,
        }
    }

    fn by_id(expr: Expression) -> Self {
        ImageReference::ById {
            id: expr.template(),
        }
    }
}

/// Decide how a pool's VM resources reference their OS image.
///
/// Marketplace sources resolve through the pool's named deployment variables,
/// exactly like pools without a source; the explicit coordinates are never
/// inlined.
pub fn resolve_image_reference<P: NodePoolView + ?Sized>(pool: &P) -> ImageReference {
    let name = pool.name();
    let source = pool.image_source();

    trace!(
        "resolving image reference for pool {} from {} source",
        name,
        source.as_ref().map_or("default", ImageSource::kind)
    );

    match source {
        None | Some(ImageSource::Marketplace(_)) => ImageReference::ByCoordinates {
            offer: variables(format!("{}osImageOffer", name)).template(),
            publisher: variables(format!("{}osImagePublisher", name)).template(),
            sku: variables(format!("{}osImageSKU", name)).template(),
            version: variables(format!("{}osImageVersion", name)).template(),
        },
        Some(ImageSource::Gallery(gallery)) => ImageReference::by_id(concat(vec![
            literal("/subscriptions/"),
            literal(gallery.subscription_id),
            literal("/resourceGroups/"),
            literal(gallery.resource_group),
            literal("/providers/Microsoft.Compute/galleries/"),
            literal(gallery.gallery_name),
            literal("/images/"),
            literal(gallery.image_name),
            literal("/versions/"),
            literal(gallery.version),
        ])),
        Some(ImageSource::Managed(managed)) => ImageReference::by_id(resource_id(vec![
            literal(managed.resource_group),
            literal(IMAGE_RESOURCE_TYPE),
            literal(managed.image_name),
        ])),
        Some(ImageSource::Url(_)) => ImageReference::by_id(resource_id(vec![
            literal(IMAGE_RESOURCE_TYPE),
            literal(custom_image_name(&name)),
        ])),
    }
}
