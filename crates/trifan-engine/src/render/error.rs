use thiserror::Error;

use crate::geometry::GeometryError;

/// Failure while building, uploading or drawing a mesh.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Rejected vertex attribute description.
    #[error("invalid vertex layout: {0}")]
    InvalidLayout(String),

    /// A buffer, shader or program could not be created.
    #[error("failed to create {resource}: {reason}")]
    ResourceCreation {
        resource: String,
        reason: String,
    },
}

impl RenderError {
    pub(crate) fn resource(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceCreation {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}
