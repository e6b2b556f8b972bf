pub mod expression;

pub use expression::{concat, literal, parameters, resource_id, variables, Expression};

/// Resource type of a managed image, as used both in resource definitions and
/// in `resourceId` lookups.
pub const IMAGE_RESOURCE_TYPE: &str = "Microsoft.Compute/images";
