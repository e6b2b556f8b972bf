use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{custom_image_name, NodePoolView, OsType};
use crate::arm::{parameters, variables, IMAGE_RESOURCE_TYPE};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum OsState {
    Generalized,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum StorageAccountType {
    #[serde(rename = "Standard_LRS")]
    StandardLrs,
}

/// `Microsoft.Compute/images` resource generalizing a pool's source blob.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CustomImageResource {
    pub api_version: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub location: String,
    pub properties: ImageProperties,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    pub storage_profile: ImageStorageProfile,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageStorageProfile {
    pub os_disk: ImageOsDisk,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageOsDisk {
    pub os_type: OsType,
    pub os_state: OsState,
    /// Parameter reference resolved at deploy time, never the literal URI
    pub blob_uri: String,
    pub storage_account_type: StorageAccountType,
}

impl CustomImageResource {
    pub fn os_disk(&self) -> &ImageOsDisk {
        &self.properties.storage_profile.os_disk
    }

    pub fn os_type(&self) -> OsType {
        self.os_disk().os_type
    }

    pub fn source_blob_uri(&self) -> &str {
        &self.os_disk().blob_uri
    }
}

/// Build the custom image resource for a pool whose image comes from a URL.
///
/// The caller is expected to only call this when
/// [`super::ImageSource::requires_custom_image`] holds for the pool.
pub fn build_custom_image<P: NodePoolView + ?Sized>(pool: &P) -> CustomImageResource {
    let name = pool.name();
    let os_type = if pool.is_windows() {
        OsType::Windows
    } else {
        OsType::Linux
    };

    trace!("building {:?} custom image for pool {}", os_type, name);

    CustomImageResource {
        api_version: variables("apiVersionCompute").template(),
        resource_type: IMAGE_RESOURCE_TYPE.to_string(),
        name: custom_image_name(&name),
        location: parameters("location").template(),
        properties: ImageProperties {
            storage_profile: ImageStorageProfile {
                os_disk: ImageOsDisk {
                    os_type,
                    os_state: OsState::Generalized,
                    blob_uri: parameters(format!("{}osImageSourceUrl", name)).template(),
                    storage_account_type: StorageAccountType::StandardLrs,
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::MockNodePoolView;

    fn mock_pool(name: &str, windows: bool) -> MockNodePoolView {
        let mut pool = MockNodePoolView::new();
        pool.expect_name().return_const(name.to_string());
        pool.expect_is_windows().return_const(windows);
        pool
    }

    fn expected(name: &str, os_type: OsType, blob_uri: &str) -> CustomImageResource {
        CustomImageResource {
            api_version: "[variables('apiVersionCompute')]".to_string(),
            resource_type: "Microsoft.Compute/images".to_string(),
            name: name.to_string(),
            location: "[parameters('location')]".to_string(),
            properties: ImageProperties {
                storage_profile: ImageStorageProfile {
                    os_disk: ImageOsDisk {
                        os_type,
                        os_state: OsState::Generalized,
                        blob_uri: blob_uri.to_string(),
                        storage_account_type: StorageAccountType::StandardLrs,
                    },
                },
            },
        }
    }

    #[test]
    fn linux_image_from_url() {
        let actual = build_custom_image(&mock_pool("foo", false));

        assert_eq!(
            actual,
            expected(
                "fooosCustomImage",
                OsType::Linux,
                "[parameters('fooosImageSourceUrl')]"
            )
        );
    }

    #[test]
    fn windows_image_from_url() {
        let actual = build_custom_image(&mock_pool("bar", true));

        assert_eq!(
            actual,
            expected(
                "barosCustomImage",
                OsType::Windows,
                "[parameters('barosImageSourceUrl')]"
            )
        );
    }

    #[test]
    fn only_os_type_depends_on_os_kind() {
        let linux = build_custom_image(&mock_pool("pool", false));
        let mut windows = build_custom_image(&mock_pool("pool", true));

        assert_eq!(linux.os_type(), OsType::Linux);
        assert_eq!(windows.os_type(), OsType::Windows);

        windows.properties.storage_profile.os_disk.os_type = OsType::Linux;
        assert_eq!(linux, windows);
    }

    #[test]
    fn repeated_builds_are_identical() {
        let pool = mock_pool("agent1", false);

        let first = serde_json::to_string(&build_custom_image(&pool)).unwrap();
        let second = serde_json::to_string(&build_custom_image(&pool)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn serializes_in_arm_resource_shape() {
        let json = serde_json::to_value(build_custom_image(&mock_pool("foo", false))).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "apiVersion": "[variables('apiVersionCompute')]",
                "type": "Microsoft.Compute/images",
                "name": "fooosCustomImage",
                "location": "[parameters('location')]",
                "properties": {
                    "storageProfile": {
                        "osDisk": {
                            "osType": "Linux",
                            "osState": "Generalized",
                            "blobUri": "[parameters('fooosImageSourceUrl')]",
                            "storageAccountType": "Standard_LRS"
                        }
                    }
                }
            })
        );
    }
}
