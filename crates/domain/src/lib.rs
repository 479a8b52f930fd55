#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod billing;
pub mod customer;
pub mod delivery;
pub mod error;
pub mod money;
pub mod name;
pub mod payment;
pub mod publication;
pub mod routing;
pub mod service;
pub mod session;
pub mod subscription;

pub use billing::{
    Bill, BillLine, BillingRepository, BillingService, SubscriberBill, SubscriberBillLine,
};
pub use customer::{Customer, CustomerDraft, CustomerID, CustomerRepository, CustomerService};
pub use delivery::{
    DeliveryRepository, DeliveryService, DeliveryStatus, DeliveryStatusReport, DeliveryStop,
    DeliverySummaryEntry,
};
pub use error::{
    CreateError, DeleteError, LoginError, ReadError, RegistrationError, StorageError, UpdateError,
};
pub use money::{Money, MoneyError};
pub use name::{Name, NameError};
pub use payment::{
    DelivererPayment, PaymentDraft, PaymentReceipt, PaymentRepository, PaymentService,
    SubscriberPayment,
};
pub use publication::{
    Publication, PublicationDraft, PublicationID, PublicationRepository, PublicationService,
};
pub use routing::{Destination, RouteDecision, home_destination, route_decision};
pub use service::Service;
pub use session::{
    AuthRepository, Credentials, Password, PasswordError, Role, Session, SessionRepository,
    SessionService, Username, UsernameError,
};
pub use subscription::{
    Subscription, SubscriptionRepository, SubscriptionService, WithholdError, WithholdRequest,
};
