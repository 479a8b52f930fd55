//! Cached REST
//!
//! The REST server is the authoritative data source. Browser local storage
//! keeps a durable copy of the active session so that a reload restores it
//! without a network round trip; all other data is fetched on demand.

use gazette_domain as domain;
use gazette_domain::{
    AuthRepository, BillingRepository, CustomerRepository, DeliveryRepository, PaymentRepository,
    PublicationRepository, SessionRepository, SubscriptionRepository,
};

use super::local_storage::LocalStorage;
use super::rest::{GlooNetSendRequest, REST, SendRequest};

#[derive(Clone)]
pub struct CachedREST<S: SendRequest> {
    pub rest: REST<S>,
}

impl CachedREST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new() -> Self {
        Self { rest: REST::new() }
    }
}

impl Default for CachedREST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> domain::AuthRepository for CachedREST<S> {
    async fn request_session(
        &self,
        credentials: &domain::Credentials,
    ) -> Result<domain::Session, domain::LoginError> {
        self.rest.request_session(credentials).await
    }

    async fn register_session(
        &self,
        credentials: &domain::Credentials,
        role: domain::Role,
    ) -> Result<domain::Session, domain::RegistrationError> {
        self.rest.register_session(credentials, role).await
    }
}

impl<S: SendRequest> domain::SessionRepository for CachedREST<S> {
    fn read_session(&self) -> Result<Option<domain::Session>, domain::StorageError> {
        LocalStorage.read_session()
    }

    fn write_session(&self, session: &domain::Session) -> Result<(), domain::StorageError> {
        LocalStorage.write_session(session)
    }

    fn delete_session(&self) -> Result<(), domain::StorageError> {
        LocalStorage.delete_session()
    }
}

impl<S: SendRequest> domain::PublicationRepository for CachedREST<S> {
    async fn read_publications(&self) -> Result<Vec<domain::Publication>, domain::ReadError> {
        self.rest.read_publications().await
    }

    async fn create_publication(
        &self,
        draft: domain::PublicationDraft,
    ) -> Result<domain::Publication, domain::CreateError> {
        self.rest.create_publication(draft).await
    }

    async fn replace_publication(
        &self,
        publication: domain::Publication,
    ) -> Result<domain::Publication, domain::UpdateError> {
        self.rest.replace_publication(publication).await
    }
}

impl<S: SendRequest> domain::CustomerRepository for CachedREST<S> {
    async fn read_customers(&self) -> Result<Vec<domain::Customer>, domain::ReadError> {
        self.rest.read_customers().await
    }

    async fn create_customer(
        &self,
        draft: domain::CustomerDraft,
    ) -> Result<domain::Customer, domain::CreateError> {
        self.rest.create_customer(draft).await
    }

    async fn replace_customer(
        &self,
        customer: domain::Customer,
    ) -> Result<domain::Customer, domain::UpdateError> {
        self.rest.replace_customer(customer).await
    }
}

impl<S: SendRequest> domain::DeliveryRepository for CachedREST<S> {
    async fn read_delivery_list(&self) -> Result<Vec<domain::DeliveryStop>, domain::ReadError> {
        self.rest.read_delivery_list().await
    }

    async fn read_delivery_summary(
        &self,
    ) -> Result<Vec<domain::DeliverySummaryEntry>, domain::ReadError> {
        self.rest.read_delivery_summary().await
    }

    async fn update_delivery_status(
        &self,
        report: domain::DeliveryStatusReport,
    ) -> Result<(), domain::UpdateError> {
        self.rest.update_delivery_status(report).await
    }
}

impl<S: SendRequest> domain::BillingRepository for CachedREST<S> {
    async fn read_bills(&self) -> Result<Vec<domain::Bill>, domain::ReadError> {
        self.rest.read_bills().await
    }

    async fn read_subscriber_bills(
        &self,
    ) -> Result<Vec<domain::SubscriberBill>, domain::ReadError> {
        self.rest.read_subscriber_bills().await
    }
}

impl<S: SendRequest> domain::PaymentRepository for CachedREST<S> {
    async fn record_payment(
        &self,
        draft: domain::PaymentDraft,
    ) -> Result<domain::PaymentReceipt, domain::CreateError> {
        self.rest.record_payment(draft).await
    }

    async fn record_subscriber_payment(
        &self,
        amount: domain::Money,
        cheque_number: Option<String>,
    ) -> Result<domain::PaymentReceipt, domain::CreateError> {
        self.rest.record_subscriber_payment(amount, cheque_number).await
    }

    async fn read_deliverer_payments(
        &self,
    ) -> Result<Vec<domain::DelivererPayment>, domain::ReadError> {
        self.rest.read_deliverer_payments().await
    }

    async fn read_subscriber_payments(
        &self,
    ) -> Result<Vec<domain::SubscriberPayment>, domain::ReadError> {
        self.rest.read_subscriber_payments().await
    }
}

impl<S: SendRequest> domain::SubscriptionRepository for CachedREST<S> {
    async fn read_subscriptions(&self) -> Result<Vec<domain::Subscription>, domain::ReadError> {
        self.rest.read_subscriptions().await
    }

    async fn update_subscriptions(
        &self,
        subscriptions: Vec<domain::PublicationID>,
    ) -> Result<(), domain::UpdateError> {
        self.rest.update_subscriptions(subscriptions).await
    }

    async fn request_withhold(
        &self,
        customer_id: domain::CustomerID,
        withhold: domain::WithholdRequest,
    ) -> Result<(), domain::CreateError> {
        self.rest.request_withhold(customer_id, withhold).await
    }

    async fn request_subscriber_withhold(
        &self,
        withhold: domain::WithholdRequest,
    ) -> Result<(), domain::CreateError> {
        self.rest.request_subscriber_withhold(withhold).await
    }
}
