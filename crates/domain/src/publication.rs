use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Money, Name, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait PublicationService {
    async fn get_publications(&self) -> Result<Vec<Publication>, ReadError>;
    async fn create_publication(&self, draft: PublicationDraft)
    -> Result<Publication, CreateError>;
    async fn replace_publication(&self, publication: Publication)
    -> Result<Publication, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait PublicationRepository {
    async fn read_publications(&self) -> Result<Vec<Publication>, ReadError>;
    async fn create_publication(&self, draft: PublicationDraft)
    -> Result<Publication, CreateError>;
    async fn replace_publication(&self, publication: Publication)
    -> Result<Publication, UpdateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    pub id: PublicationID,
    pub name: Name,
    pub language: String,
    pub description: String,
    pub price: Money,
}

/// A publication before the server has assigned an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationDraft {
    pub name: Name,
    pub language: String,
    pub description: String,
    pub price: Money,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PublicationID(Uuid);

impl PublicationID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PublicationID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PublicationID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_publication_id_nil() {
        assert!(PublicationID::nil().is_nil());
        assert_eq!(PublicationID::nil(), PublicationID::default());
        assert!(!PublicationID::from(1).is_nil());
    }
}
