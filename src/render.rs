//! Per-pool image fragments for the template assembly step.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::{NodePoolConfig, PoolImageConfig},
    image::{build_custom_image, resolve_image_reference, CustomImageResource, ImageReference},
};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PoolImageReference {
    pub pool: String,
    pub image_reference: ImageReference,
}

/// Everything the template assembly needs to wire images into VM resources:
/// one image reference per pool and the custom image resources to append to
/// the top-level resources.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageFragments {
    pub image_references: Vec<PoolImageReference>,
    pub resources: Vec<CustomImageResource>,
}

impl ImageFragments {
    fn push(&mut self, pool: &NodePoolConfig) {
        let image_reference = resolve_image_reference(pool);
        debug!("pool {} resolved to {:?}", pool.name, image_reference);

        if pool.requires_custom_image() {
            debug!("pool {} needs a custom image resource", pool.name);
            self.resources.push(build_custom_image(pool));
        }

        self.image_references.push(PoolImageReference {
            pool: pool.name.clone(),
            image_reference,
        });
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

pub fn render_fragments<'a>(
    pools: impl IntoIterator<Item = &'a NodePoolConfig>,
) -> ImageFragments {
    let mut fragments = ImageFragments::default();
    for pool in pools {
        fragments.push(pool);
    }

    info!(
        "rendered {} image references and {} custom images",
        fragments.image_references.len(),
        fragments.resources.len()
    );
    fragments
}

/// Render a single pool of `config`, `None` when no pool has that name.
pub fn render_pool(config: &PoolImageConfig, name: &str) -> Option<ImageFragments> {
    config.pool(name).map(|pool| render_fragments([pool]))
}
