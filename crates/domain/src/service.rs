use log::{debug, error};

use crate::{
    AuthRepository, Bill, BillingRepository, BillingService, CreateError, Credentials, Customer,
    CustomerDraft, CustomerID, CustomerRepository, CustomerService, DeleteError, DelivererPayment,
    DeliveryRepository, DeliveryService, DeliveryStatusReport, DeliveryStop, DeliverySummaryEntry,
    LoginError, Money, PaymentDraft, PaymentReceipt, PaymentRepository, PaymentService, Publication,
    PublicationDraft, PublicationID, PublicationRepository, PublicationService, ReadError,
    RegistrationError, Role, Session, SessionRepository, SessionService, SubscriberBill,
    SubscriberPayment, Subscription, SubscriptionRepository, SubscriptionService, UpdateError,
    WithholdRequest,
};

/// Application service holding the session gate and delegating all other
/// operations to the repository.
///
/// Constructed once at process start; the session is rehydrated from the
/// durable store before the first frame is rendered and torn down never.
pub struct Service<R> {
    repository: R,
    session: Option<Session>,
}

impl<R: SessionRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        let session = repository.read_session().unwrap_or_else(|err| {
            error!("failed to restore session: {err}");
            None
        });
        Self {
            repository,
            session,
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: AuthRepository + SessionRepository> SessionService for Service<R> {
    async fn login(&mut self, credentials: Credentials) -> Result<Session, LoginError> {
        let session = log_on_error!(
            self.repository.request_session(&credentials),
            LoginError,
            "request",
            "session"
        )?;
        if let Err(err) = self.repository.write_session(&session) {
            error!("failed to persist session: {err}");
        }
        self.session = Some(session.clone());
        Ok(session)
    }

    async fn register(
        &mut self,
        credentials: Credentials,
        role: Role,
    ) -> Result<Session, RegistrationError> {
        let session = log_on_error!(
            self.repository.register_session(&credentials, role),
            RegistrationError,
            "register",
            "session"
        )?;
        if let Err(err) = self.repository.write_session(&session) {
            error!("failed to persist session: {err}");
        }
        self.session = Some(session.clone());
        Ok(session)
    }

    fn logout(&mut self) -> Result<(), DeleteError> {
        self.session = None;
        self.repository.delete_session()?;
        Ok(())
    }

    fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl<R: PublicationRepository> PublicationService for Service<R> {
    async fn get_publications(&self) -> Result<Vec<Publication>, ReadError> {
        log_on_error!(
            self.repository.read_publications(),
            ReadError,
            "get",
            "publications"
        )
    }

    async fn create_publication(
        &self,
        draft: PublicationDraft,
    ) -> Result<Publication, CreateError> {
        log_on_error!(
            self.repository.create_publication(draft),
            CreateError,
            "create",
            "publication"
        )
    }

    async fn replace_publication(
        &self,
        publication: Publication,
    ) -> Result<Publication, UpdateError> {
        log_on_error!(
            self.repository.replace_publication(publication),
            UpdateError,
            "replace",
            "publication"
        )
    }
}

impl<R: CustomerRepository> CustomerService for Service<R> {
    async fn get_customers(&self) -> Result<Vec<Customer>, ReadError> {
        log_on_error!(
            self.repository.read_customers(),
            ReadError,
            "get",
            "customers"
        )
    }

    async fn create_customer(&self, draft: CustomerDraft) -> Result<Customer, CreateError> {
        log_on_error!(
            self.repository.create_customer(draft),
            CreateError,
            "create",
            "customer"
        )
    }

    async fn replace_customer(&self, customer: Customer) -> Result<Customer, UpdateError> {
        log_on_error!(
            self.repository.replace_customer(customer),
            UpdateError,
            "replace",
            "customer"
        )
    }
}

impl<R: DeliveryRepository> DeliveryService for Service<R> {
    async fn get_delivery_list(&self) -> Result<Vec<DeliveryStop>, ReadError> {
        log_on_error!(
            self.repository.read_delivery_list(),
            ReadError,
            "get",
            "delivery list"
        )
    }

    async fn get_delivery_summary(&self) -> Result<Vec<DeliverySummaryEntry>, ReadError> {
        log_on_error!(
            self.repository.read_delivery_summary(),
            ReadError,
            "get",
            "delivery summary"
        )
    }

    async fn update_delivery_status(
        &self,
        report: DeliveryStatusReport,
    ) -> Result<(), UpdateError> {
        log_on_error!(
            self.repository.update_delivery_status(report),
            UpdateError,
            "update",
            "delivery status"
        )
    }
}

impl<R: BillingRepository> BillingService for Service<R> {
    async fn get_bills(&self) -> Result<Vec<Bill>, ReadError> {
        log_on_error!(self.repository.read_bills(), ReadError, "get", "bills")
    }

    async fn get_subscriber_bills(&self) -> Result<Vec<SubscriberBill>, ReadError> {
        log_on_error!(
            self.repository.read_subscriber_bills(),
            ReadError,
            "get",
            "subscriber bills"
        )
    }
}

impl<R: PaymentRepository> PaymentService for Service<R> {
    async fn record_payment(&self, draft: PaymentDraft) -> Result<PaymentReceipt, CreateError> {
        log_on_error!(
            self.repository.record_payment(draft),
            CreateError,
            "record",
            "payment"
        )
    }

    async fn record_subscriber_payment(
        &self,
        amount: Money,
        cheque_number: Option<String>,
    ) -> Result<PaymentReceipt, CreateError> {
        log_on_error!(
            self.repository
                .record_subscriber_payment(amount, cheque_number),
            CreateError,
            "record",
            "subscriber payment"
        )
    }

    async fn get_deliverer_payments(&self) -> Result<Vec<DelivererPayment>, ReadError> {
        log_on_error!(
            self.repository.read_deliverer_payments(),
            ReadError,
            "get",
            "deliverer payments"
        )
    }

    async fn get_subscriber_payments(&self) -> Result<Vec<SubscriberPayment>, ReadError> {
        log_on_error!(
            self.repository.read_subscriber_payments(),
            ReadError,
            "get",
            "subscriber payments"
        )
    }
}

impl<R: SubscriptionRepository> SubscriptionService for Service<R> {
    async fn get_subscriptions(&self) -> Result<Vec<Subscription>, ReadError> {
        log_on_error!(
            self.repository.read_subscriptions(),
            ReadError,
            "get",
            "subscriptions"
        )
    }

    async fn update_subscriptions(
        &self,
        subscriptions: Vec<PublicationID>,
    ) -> Result<(), UpdateError> {
        log_on_error!(
            self.repository.update_subscriptions(subscriptions),
            UpdateError,
            "update",
            "subscriptions"
        )
    }

    async fn request_withhold(
        &self,
        customer_id: CustomerID,
        withhold: WithholdRequest,
    ) -> Result<(), CreateError> {
        log_on_error!(
            self.repository.request_withhold(customer_id, withhold),
            CreateError,
            "request",
            "withhold"
        )
    }

    async fn request_subscriber_withhold(
        &self,
        withhold: WithholdRequest,
    ) -> Result<(), CreateError> {
        log_on_error!(
            self.repository.request_subscriber_withhold(withhold),
            CreateError,
            "request",
            "subscriber withhold"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Destination, Password, RouteDecision, StorageError, Username, route_decision,
    };

    #[derive(Default, Clone)]
    struct Store(Rc<RefCell<Option<Session>>>);

    impl Store {
        fn session(&self) -> Option<Session> {
            self.0.borrow().clone()
        }
    }

    struct FakeRepository {
        accounts: Vec<(Credentials, Role)>,
        store: Store,
        connected: bool,
        store_writable: bool,
    }

    impl FakeRepository {
        fn new(store: Store) -> Self {
            Self {
                accounts: vec![(credentials("alice", "pw123"), Role::Manager)],
                store,
                connected: true,
                store_writable: true,
            }
        }
    }

    impl AuthRepository for FakeRepository {
        async fn request_session(&self, credentials: &Credentials) -> Result<Session, LoginError> {
            if !self.connected {
                return Err(StorageError::NoConnection.into());
            }
            self.accounts
                .iter()
                .find(|(c, _)| c == credentials)
                .map(|(c, role)| Session {
                    username: c.username.clone(),
                    role: *role,
                })
                .ok_or(LoginError::InvalidCredentials)
        }

        async fn register_session(
            &self,
            credentials: &Credentials,
            role: Role,
        ) -> Result<Session, RegistrationError> {
            if !self.connected {
                return Err(StorageError::NoConnection.into());
            }
            if self
                .accounts
                .iter()
                .any(|(c, _)| c.username == credentials.username)
            {
                return Err(RegistrationError::Conflict);
            }
            Ok(Session {
                username: credentials.username.clone(),
                role,
            })
        }
    }

    impl SessionRepository for FakeRepository {
        fn read_session(&self) -> Result<Option<Session>, StorageError> {
            Ok(self.store.session())
        }

        fn write_session(&self, session: &Session) -> Result<(), StorageError> {
            if !self.store_writable {
                return Err(StorageError::Other("store not writable".into()));
            }
            *self.store.0.borrow_mut() = Some(session.clone());
            Ok(())
        }

        fn delete_session(&self) -> Result<(), StorageError> {
            *self.store.0.borrow_mut() = None;
            Ok(())
        }
    }

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: Username::new(username).unwrap(),
            password: Password::new(password).unwrap(),
        }
    }

    fn session(username: &str, role: Role) -> Session {
        Session {
            username: Username::new(username).unwrap(),
            role,
        }
    }

    fn service(store: &Store) -> Service<FakeRepository> {
        Service::new(FakeRepository::new(store.clone()))
    }

    #[tokio::test]
    async fn test_login_transitions_state_and_persists() {
        let store = Store::default();
        let mut service = service(&store);

        assert_eq!(service.session(), None);

        let result = service.login(credentials("alice", "pw123")).await.unwrap();

        assert_eq!(result, session("alice", Role::Manager));
        assert_eq!(service.session(), Some(&session("alice", Role::Manager)));
        assert_eq!(store.session(), Some(session("alice", Role::Manager)));
    }

    #[tokio::test]
    async fn test_login_with_invalid_credentials_keeps_state() {
        let store = Store::default();
        let mut service = service(&store);

        let result = service.login(credentials("alice", "wrong")).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid credentials"
        );
        assert_eq!(service.session(), None);
        assert_eq!(store.session(), None);
    }

    #[tokio::test]
    async fn test_login_without_connection() {
        let store = Store::default();
        let mut repository = FakeRepository::new(store.clone());
        repository.connected = false;
        let mut service = Service::new(repository);

        let result = service.login(credentials("alice", "pw123")).await;

        assert!(matches!(
            result,
            Err(LoginError::Storage(StorageError::NoConnection))
        ));
        assert_eq!(service.session(), None);
    }

    #[tokio::test]
    async fn test_login_survives_failing_store() {
        let store = Store::default();
        let mut repository = FakeRepository::new(store.clone());
        repository.store_writable = false;
        let mut service = Service::new(repository);

        service.login(credentials("alice", "pw123")).await.unwrap();

        assert_eq!(service.session(), Some(&session("alice", Role::Manager)));
        assert_eq!(store.session(), None);
    }

    #[tokio::test]
    async fn test_register_transitions_state_and_persists() {
        let store = Store::default();
        let mut service = service(&store);

        let result = service
            .register(credentials("bob", "pw123"), Role::Deliverer)
            .await
            .unwrap();

        assert_eq!(result, session("bob", Role::Deliverer));
        assert_eq!(service.session(), Some(&session("bob", Role::Deliverer)));
        assert_eq!(store.session(), Some(session("bob", Role::Deliverer)));
        assert_eq!(
            route_decision(service.session(), Destination::Manager),
            RouteDecision::Redirect(Destination::Deliverer)
        );
    }

    #[tokio::test]
    async fn test_register_with_taken_username() {
        let store = Store::default();
        let mut service = service(&store);

        let result = service
            .register(credentials("alice", "pw123"), Role::User)
            .await;

        assert!(matches!(result, Err(RegistrationError::Conflict)));
        assert_eq!(service.session(), None);
        assert_eq!(store.session(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_store() {
        let store = Store::default();
        let mut service = service(&store);
        service.login(credentials("alice", "pw123")).await.unwrap();

        service.logout().unwrap();

        assert_eq!(service.session(), None);
        assert_eq!(store.session(), None);
        assert_eq!(
            route_decision(service.session(), Destination::Manager),
            RouteDecision::Redirect(Destination::Login)
        );
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store = Store::default();
        let mut service = service(&store);
        service.login(credentials("alice", "pw123")).await.unwrap();

        service.logout().unwrap();
        service.logout().unwrap();

        assert_eq!(service.session(), None);
        assert_eq!(store.session(), None);
    }

    #[test]
    fn test_session_is_rehydrated_from_store() {
        let store = Store::default();
        *store.0.borrow_mut() = Some(session("carol", Role::User));

        let service = service(&store);

        assert_eq!(service.session(), Some(&session("carol", Role::User)));
    }

    #[test]
    fn test_rehydrated_session_round_trip() {
        let store = Store::default();
        {
            let mut repository = FakeRepository::new(store.clone());
            repository.store_writable = true;
            let persisted = session("carol", Role::User);
            repository.write_session(&persisted).unwrap();
        }

        let service = service(&store);

        assert_eq!(service.session(), Some(&session("carol", Role::User)));
    }
}
