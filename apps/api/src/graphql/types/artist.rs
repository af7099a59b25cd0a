//! Artist GraphQL type

use async_graphql::{Object, ID};
use curio_catalog_client::Artist as CatalogArtist;

/// Artist information exposed via GraphQL
#[derive(Clone)]
pub struct Artist {
    inner: CatalogArtist,
}

impl From<CatalogArtist> for Artist {
    fn from(artist: CatalogArtist) -> Self {
        Self { inner: artist }
    }
}

#[Object]
impl Artist {
    /// Stable artist identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Artist name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Nationality, when known
    async fn nationality(&self) -> Option<&str> {
        self.inner.nationality.as_deref()
    }

    /// Birth year or date as free text
    async fn birthday(&self) -> Option<&str> {
        self.inner.birthday.as_deref()
    }

    /// URL to a representative image
    async fn image_url(&self) -> Option<&str> {
        self.inner.image_url.as_deref()
    }
}
