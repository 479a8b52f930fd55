use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, PublicationID, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait CustomerService {
    async fn get_customers(&self) -> Result<Vec<Customer>, ReadError>;
    async fn create_customer(&self, draft: CustomerDraft) -> Result<Customer, CreateError>;
    async fn replace_customer(&self, customer: Customer) -> Result<Customer, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait CustomerRepository {
    async fn read_customers(&self) -> Result<Vec<Customer>, ReadError>;
    async fn create_customer(&self, draft: CustomerDraft) -> Result<Customer, CreateError>;
    async fn replace_customer(&self, customer: Customer) -> Result<Customer, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerID,
    pub name: Name,
    pub address: String,
    pub phone: String,
    pub subscriptions: Vec<PublicationID>,
}

/// A customer before the server has assigned an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: Name,
    pub address: String,
    pub phone: String,
    pub subscriptions: Vec<PublicationID>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CustomerID(Uuid);

impl CustomerID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for CustomerID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for CustomerID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_customer_id_nil() {
        assert!(CustomerID::nil().is_nil());
        assert_eq!(CustomerID::nil(), CustomerID::default());
        assert!(!CustomerID::from(1).is_nil());
    }
}
