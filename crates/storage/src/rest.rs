use chrono::NaiveDate;
use gloo_net::http::Request;
use serde_json::json;
use uuid::Uuid;

use gazette_domain as domain;

/// Transport used by [`REST`].
///
/// Keeping the actual send behind a trait allows request building and
/// response decoding to be exercised without a browser.
#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send(&self, request: RequestData) -> Result<ResponseData, domain::StorageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestData {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseData {
    pub status: u16,
    pub body: String,
}

impl ResponseData {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send(&self, request: RequestData) -> Result<ResponseData, domain::StorageError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        let request = match request.body {
            Some(body) => builder.json(&body).expect("serialization failed"),
            None => builder.build().expect("request building failed"),
        };
        let response = request
            .send()
            .await
            .map_err(|_| domain::StorageError::NoConnection)?;
        Ok(ResponseData {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

/// Repository reading from and writing to the remote API.
#[derive(Clone)]
pub struct REST<S: SendRequest> {
    send_request: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            send_request: GlooNetSendRequest,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> REST<S> {
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ResponseData, domain::StorageError> {
        self.send_request
            .send(RequestData {
                method,
                url: url.to_string(),
                body,
            })
            .await
    }
}

impl<S: SendRequest> domain::AuthRepository for REST<S> {
    async fn request_session(
        &self,
        credentials: &domain::Credentials,
    ) -> Result<domain::Session, domain::LoginError> {
        let response = self
            .request(
                Method::Post,
                "api/login",
                Some(json!({
                    "username": credentials.username.as_ref(),
                    "password": credentials.password.as_ref(),
                })),
            )
            .await?;
        if !response.ok() {
            return Err(domain::LoginError::InvalidCredentials);
        }
        let session: Session = decode(&response.body).map_err(domain::LoginError::Other)?;
        domain::Session::try_from(session).map_err(|err| domain::LoginError::Other(err.into()))
    }

    async fn register_session(
        &self,
        credentials: &domain::Credentials,
        role: domain::Role,
    ) -> Result<domain::Session, domain::RegistrationError> {
        let response = self
            .request(
                Method::Post,
                "api/register",
                Some(json!({
                    "username": credentials.username.as_ref(),
                    "password": credentials.password.as_ref(),
                    "role": role.to_string(),
                })),
            )
            .await?;
        if response.status == 409 {
            return Err(domain::RegistrationError::Conflict);
        }
        if !response.ok() {
            return Err(domain::RegistrationError::Rejected);
        }
        let session: Session = decode(&response.body).map_err(domain::RegistrationError::Other)?;
        domain::Session::try_from(session)
            .map_err(|err| domain::RegistrationError::Other(err.into()))
    }
}

impl<S: SendRequest> domain::PublicationRepository for REST<S> {
    async fn read_publications(&self) -> Result<Vec<domain::Publication>, domain::ReadError> {
        let response = self.request(Method::Get, "api/publications", None).await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let publications: Vec<Publication> =
            decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(publications).map_err(domain::ReadError::Other)
    }

    async fn create_publication(
        &self,
        draft: domain::PublicationDraft,
    ) -> Result<domain::Publication, domain::CreateError> {
        let response = self
            .request(
                Method::Post,
                "api/publications",
                Some(json!({
                    "name": draft.name.as_ref(),
                    "language": draft.language,
                    "description": draft.description,
                    "price": f64::from(draft.price),
                })),
            )
            .await?;
        if !response.ok() {
            return Err(create_error(response.status));
        }
        let publication: Publication =
            decode(&response.body).map_err(domain::CreateError::Other)?;
        domain::Publication::try_from(publication).map_err(domain::CreateError::Other)
    }

    async fn replace_publication(
        &self,
        publication: domain::Publication,
    ) -> Result<domain::Publication, domain::UpdateError> {
        let response = self
            .request(
                Method::Put,
                &format!("api/publications/{}", *publication.id),
                Some(json!({
                    "name": publication.name.as_ref(),
                    "language": publication.language,
                    "description": publication.description,
                    "price": f64::from(publication.price),
                })),
            )
            .await?;
        if !response.ok() {
            return Err(update_error(response.status));
        }
        let publication: Publication =
            decode(&response.body).map_err(domain::UpdateError::Other)?;
        domain::Publication::try_from(publication).map_err(domain::UpdateError::Other)
    }
}

impl<S: SendRequest> domain::CustomerRepository for REST<S> {
    async fn read_customers(&self) -> Result<Vec<domain::Customer>, domain::ReadError> {
        let response = self.request(Method::Get, "api/customers", None).await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let customers: Vec<Customer> = decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(customers).map_err(domain::ReadError::Other)
    }

    async fn create_customer(
        &self,
        draft: domain::CustomerDraft,
    ) -> Result<domain::Customer, domain::CreateError> {
        let response = self
            .request(
                Method::Post,
                "api/customers",
                Some(json!({
                    "name": draft.name.as_ref(),
                    "address": draft.address,
                    "phone": draft.phone,
                    "subscriptions": subscription_ids(&draft.subscriptions),
                })),
            )
            .await?;
        if !response.ok() {
            return Err(create_error(response.status));
        }
        let customer: Customer = decode(&response.body).map_err(domain::CreateError::Other)?;
        domain::Customer::try_from(customer).map_err(domain::CreateError::Other)
    }

    async fn replace_customer(
        &self,
        customer: domain::Customer,
    ) -> Result<domain::Customer, domain::UpdateError> {
        let response = self
            .request(
                Method::Put,
                &format!("api/customers/{}", *customer.id),
                Some(json!({
                    "name": customer.name.as_ref(),
                    "address": customer.address,
                    "phone": customer.phone,
                    "subscriptions": subscription_ids(&customer.subscriptions),
                })),
            )
            .await?;
        if !response.ok() {
            return Err(update_error(response.status));
        }
        let customer: Customer = decode(&response.body).map_err(domain::UpdateError::Other)?;
        domain::Customer::try_from(customer).map_err(domain::UpdateError::Other)
    }
}

impl<S: SendRequest> domain::DeliveryRepository for REST<S> {
    async fn read_delivery_list(&self) -> Result<Vec<domain::DeliveryStop>, domain::ReadError> {
        let response = self
            .request(Method::Get, "api/deliveries/today", None)
            .await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let stops: Vec<DeliveryStop> = decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(stops).map_err(domain::ReadError::Other)
    }

    async fn read_delivery_summary(
        &self,
    ) -> Result<Vec<domain::DeliverySummaryEntry>, domain::ReadError> {
        let response = self
            .request(Method::Get, "api/delivery-summary", None)
            .await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let summary: DeliverySummary = decode(&response.body).map_err(domain::ReadError::Other)?;
        Ok(summary
            .customers
            .into_iter()
            .map(domain::DeliverySummaryEntry::from)
            .collect())
    }

    async fn update_delivery_status(
        &self,
        report: domain::DeliveryStatusReport,
    ) -> Result<(), domain::UpdateError> {
        let (status, reason) = match &report.status {
            domain::DeliveryStatus::Pending => ("pending", None),
            domain::DeliveryStatus::Delivered => ("delivered", None),
            domain::DeliveryStatus::NotDelivered { reason } => {
                ("not_delivered", Some(reason.clone()))
            }
        };
        let response = self
            .request(
                Method::Put,
                "api/deliveries/status",
                Some(json!({
                    "address": report.address,
                    "status": status,
                    "reason": reason,
                })),
            )
            .await?;
        if !response.ok() {
            return Err(update_error(response.status));
        }
        Ok(())
    }
}

impl<S: SendRequest> domain::BillingRepository for REST<S> {
    async fn read_bills(&self) -> Result<Vec<domain::Bill>, domain::ReadError> {
        let response = self.request(Method::Get, "api/bills", None).await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let bills: Bills = decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(bills.bills).map_err(domain::ReadError::Other)
    }

    async fn read_subscriber_bills(&self) -> Result<Vec<domain::SubscriberBill>, domain::ReadError> {
        let response = self.request(Method::Get, "api/user/bills", None).await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let bills: SubscriberBills = decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(bills.bills).map_err(domain::ReadError::Other)
    }
}

impl<S: SendRequest> domain::PaymentRepository for REST<S> {
    async fn record_payment(
        &self,
        draft: domain::PaymentDraft,
    ) -> Result<domain::PaymentReceipt, domain::CreateError> {
        let response = self
            .request(
                Method::Post,
                "api/payments",
                Some(json!({
                    "customerId": *draft.customer_id,
                    "amount": f64::from(draft.amount),
                    "chequeNumber": draft.cheque_number,
                })),
            )
            .await?;
        if !response.ok() {
            return Err(create_error(response.status));
        }
        let receipt: Receipt = decode(&response.body).map_err(domain::CreateError::Other)?;
        Ok(receipt.into())
    }

    async fn record_subscriber_payment(
        &self,
        amount: domain::Money,
        cheque_number: Option<String>,
    ) -> Result<domain::PaymentReceipt, domain::CreateError> {
        let response = self
            .request(
                Method::Post,
                "api/user/payments",
                Some(json!({
                    "amount": f64::from(amount),
                    "chequeNumber": cheque_number,
                })),
            )
            .await?;
        if !response.ok() {
            return Err(create_error(response.status));
        }
        let receipt: Receipt = decode(&response.body).map_err(domain::CreateError::Other)?;
        Ok(receipt.into())
    }

    async fn read_deliverer_payments(
        &self,
    ) -> Result<Vec<domain::DelivererPayment>, domain::ReadError> {
        let response = self
            .request(Method::Get, "api/payments/deliverer-payments", None)
            .await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let payments: DelivererPayments =
            decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(payments.payments).map_err(domain::ReadError::Other)
    }

    async fn read_subscriber_payments(
        &self,
    ) -> Result<Vec<domain::SubscriberPayment>, domain::ReadError> {
        let response = self.request(Method::Get, "api/user/payments", None).await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let payments: SubscriberPayments =
            decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(payments.payments).map_err(domain::ReadError::Other)
    }
}

impl<S: SendRequest> domain::SubscriptionRepository for REST<S> {
    async fn read_subscriptions(&self) -> Result<Vec<domain::Subscription>, domain::ReadError> {
        let response = self
            .request(Method::Get, "api/user/subscriptions", None)
            .await?;
        if !response.ok() {
            return Err(read_error(response.status));
        }
        let subscriptions: Subscriptions =
            decode(&response.body).map_err(domain::ReadError::Other)?;
        convert(subscriptions.subscriptions).map_err(domain::ReadError::Other)
    }

    async fn update_subscriptions(
        &self,
        subscriptions: Vec<domain::PublicationID>,
    ) -> Result<(), domain::UpdateError> {
        let response = self
            .request(
                Method::Post,
                "api/user/subscriptions",
                Some(json!({ "subscriptions": subscription_ids(&subscriptions) })),
            )
            .await?;
        if !response.ok() {
            return Err(update_error(response.status));
        }
        Ok(())
    }

    async fn request_withhold(
        &self,
        customer_id: domain::CustomerID,
        withhold: domain::WithholdRequest,
    ) -> Result<(), domain::CreateError> {
        let response = self
            .request(
                Method::Post,
                "api/customers/withhold",
                Some(json!({
                    "customerId": *customer_id,
                    "startDate": withhold.start().to_string(),
                    "endDate": withhold.end().to_string(),
                })),
            )
            .await?;
        if !response.ok() {
            return Err(create_error(response.status));
        }
        Ok(())
    }

    async fn request_subscriber_withhold(
        &self,
        withhold: domain::WithholdRequest,
    ) -> Result<(), domain::CreateError> {
        let response = self
            .request(
                Method::Post,
                "api/user/withhold",
                Some(json!({
                    "startDate": withhold.start().to_string(),
                    "endDate": withhold.end().to_string(),
                })),
            )
            .await?;
        if !response.ok() {
            return Err(create_error(response.status));
        }
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, Box<dyn std::error::Error>> {
    serde_json::from_str(body).map_err(|err| format!("deserialization failed: {err}").into())
}

fn convert<T, U: TryInto<T, Error = Box<dyn std::error::Error>>>(
    values: Vec<U>,
) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    values.into_iter().map(TryInto::try_into).collect()
}

fn subscription_ids(subscriptions: &[domain::PublicationID]) -> Vec<Uuid> {
    subscriptions.iter().map(|id| **id).collect()
}

fn status_error(status: u16) -> Box<dyn std::error::Error> {
    format!("unexpected status {status}").into()
}

fn read_error(status: u16) -> domain::ReadError {
    if status == 404 {
        domain::ReadError::NotFound
    } else {
        domain::ReadError::Other(status_error(status))
    }
}

fn create_error(status: u16) -> domain::CreateError {
    if status == 409 {
        domain::CreateError::Conflict
    } else {
        domain::CreateError::Other(status_error(status))
    }
}

fn update_error(status: u16) -> domain::UpdateError {
    if status == 409 {
        domain::UpdateError::Conflict
    } else {
        domain::UpdateError::Other(status_error(status))
    }
}

#[derive(serde::Deserialize)]
struct Session {
    username: String,
    role: String,
}

impl TryFrom<Session> for domain::Session {
    type Error = domain::UsernameError;

    fn try_from(value: Session) -> Result<Self, Self::Error> {
        Ok(Self {
            username: domain::Username::new(&value.username)?,
            role: domain::Role::from(value.role.as_str()),
        })
    }
}

#[derive(serde::Deserialize)]
struct Publication {
    id: Uuid,
    name: String,
    language: String,
    description: String,
    price: f64,
}

impl TryFrom<Publication> for domain::Publication {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: Publication) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            language: value.language,
            description: value.description,
            price: domain::Money::new(value.price)?,
        })
    }
}

#[derive(serde::Deserialize)]
struct Customer {
    id: Uuid,
    name: String,
    address: String,
    phone: String,
    subscriptions: Vec<Uuid>,
}

impl TryFrom<Customer> for domain::Customer {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            address: value.address,
            phone: value.phone,
            subscriptions: value
                .subscriptions
                .into_iter()
                .map(domain::PublicationID::from)
                .collect(),
        })
    }
}

#[derive(serde::Deserialize)]
struct DeliveryStop {
    address: String,
    publications: Vec<Publication>,
}

impl TryFrom<DeliveryStop> for domain::DeliveryStop {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: DeliveryStop) -> Result<Self, Self::Error> {
        Ok(Self {
            address: value.address,
            publications: convert(value.publications)?,
        })
    }
}

#[derive(serde::Deserialize)]
struct DeliverySummary {
    customers: Vec<DeliverySummaryEntry>,
}

#[derive(serde::Deserialize)]
struct DeliverySummaryEntry {
    name: String,
    #[serde(rename = "publicationsDelivered")]
    publications_delivered: u32,
}

impl From<DeliverySummaryEntry> for domain::DeliverySummaryEntry {
    fn from(value: DeliverySummaryEntry) -> Self {
        Self {
            name: value.name,
            publications_delivered: value.publications_delivered,
        }
    }
}

#[derive(serde::Deserialize)]
struct Bills {
    bills: Vec<Bill>,
}

#[derive(serde::Deserialize)]
struct Bill {
    #[serde(rename = "customerId")]
    customer_id: Uuid,
    #[serde(rename = "customerName")]
    customer_name: String,
    publications: Vec<BillLine>,
    #[serde(rename = "totalCost")]
    total_cost: f64,
}

impl TryFrom<Bill> for domain::Bill {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: Bill) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_id: value.customer_id.into(),
            customer_name: value.customer_name,
            lines: convert(value.publications)?,
            total_cost: domain::Money::new(value.total_cost)?,
        })
    }
}

#[derive(serde::Deserialize)]
struct BillLine {
    name: String,
    copies: u32,
    cost: f64,
}

impl TryFrom<BillLine> for domain::BillLine {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: BillLine) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            copies: value.copies,
            cost: domain::Money::new(value.cost)?,
        })
    }
}

#[derive(serde::Deserialize)]
struct SubscriberBills {
    bills: Vec<SubscriberBill>,
}

#[derive(serde::Deserialize)]
struct SubscriberBill {
    month: String,
    publications: Vec<SubscriberBillLine>,
    #[serde(rename = "totalCost")]
    total_cost: f64,
}

impl TryFrom<SubscriberBill> for domain::SubscriberBill {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: SubscriberBill) -> Result<Self, Self::Error> {
        Ok(Self {
            month: value.month,
            lines: value
                .publications
                .into_iter()
                .map(domain::SubscriberBillLine::from)
                .collect(),
            total_cost: domain::Money::new(value.total_cost)?,
        })
    }
}

#[derive(serde::Deserialize)]
struct SubscriberBillLine {
    name: String,
    copies: u32,
}

impl From<SubscriberBillLine> for domain::SubscriberBillLine {
    fn from(value: SubscriberBillLine) -> Self {
        Self {
            name: value.name,
            copies: value.copies,
        }
    }
}

#[derive(serde::Deserialize)]
struct Receipt {
    receipt: String,
}

impl From<Receipt> for domain::PaymentReceipt {
    fn from(value: Receipt) -> Self {
        Self {
            receipt: value.receipt,
        }
    }
}

#[derive(serde::Deserialize)]
struct DelivererPayments {
    payments: Vec<DelivererPayment>,
}

#[derive(serde::Deserialize)]
struct DelivererPayment {
    #[serde(rename = "delivererId")]
    deliverer_id: String,
    amount: f64,
    period: String,
}

impl TryFrom<DelivererPayment> for domain::DelivererPayment {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: DelivererPayment) -> Result<Self, Self::Error> {
        Ok(Self {
            deliverer_id: value.deliverer_id,
            amount: domain::Money::new(value.amount)?,
            period: value.period,
        })
    }
}

#[derive(serde::Deserialize)]
struct SubscriberPayments {
    payments: Vec<SubscriberPayment>,
}

#[derive(serde::Deserialize)]
struct SubscriberPayment {
    date: NaiveDate,
    amount: f64,
    #[serde(rename = "chequeNumber")]
    cheque_number: Option<String>,
}

impl TryFrom<SubscriberPayment> for domain::SubscriberPayment {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: SubscriberPayment) -> Result<Self, Self::Error> {
        Ok(Self {
            date: value.date,
            amount: domain::Money::new(value.amount)?,
            cheque_number: value.cheque_number,
        })
    }
}

#[derive(serde::Deserialize)]
struct Subscriptions {
    subscriptions: Vec<Subscription>,
}

#[derive(serde::Deserialize)]
struct Subscription {
    id: Uuid,
    name: String,
    price: f64,
}

impl TryFrom<Subscription> for domain::Subscription {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: Subscription) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            price: domain::Money::new(value.price)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use gazette_domain::{
        AuthRepository, BillingRepository, CustomerRepository, DeliveryRepository,
        PaymentRepository, PublicationRepository, SubscriptionRepository,
    };

    use super::*;

    struct FakeSendRequest {
        requests: RefCell<Vec<RequestData>>,
        status: u16,
        body: String,
        connected: bool,
    }

    impl FakeSendRequest {
        fn respond(status: u16, body: serde_json::Value) -> REST<Self> {
            REST {
                send_request: Self {
                    requests: RefCell::new(Vec::new()),
                    status,
                    body: body.to_string(),
                    connected: true,
                },
            }
        }

        fn disconnected() -> REST<Self> {
            REST {
                send_request: Self {
                    requests: RefCell::new(Vec::new()),
                    status: 0,
                    body: String::new(),
                    connected: false,
                },
            }
        }
    }

    impl SendRequest for FakeSendRequest {
        async fn send(&self, request: RequestData) -> Result<ResponseData, domain::StorageError> {
            self.requests.borrow_mut().push(request);
            if !self.connected {
                return Err(domain::StorageError::NoConnection);
            }
            Ok(ResponseData {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn sent(rest: &REST<FakeSendRequest>) -> RequestData {
        rest.send_request.requests.borrow().last().unwrap().clone()
    }

    fn credentials(username: &str, password: &str) -> domain::Credentials {
        domain::Credentials {
            username: domain::Username::new(username).unwrap(),
            password: domain::Password::new(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_request_session() {
        let rest =
            FakeSendRequest::respond(200, json!({"username": "alice", "role": "manager"}));

        let session = rest.request_session(&credentials("alice", "pw123")).await;

        assert_eq!(
            session.unwrap(),
            domain::Session {
                username: domain::Username::new("alice").unwrap(),
                role: domain::Role::Manager,
            }
        );
        assert_eq!(
            sent(&rest),
            RequestData {
                method: Method::Post,
                url: String::from("api/login"),
                body: Some(json!({"username": "alice", "password": "pw123"})),
            }
        );
    }

    #[tokio::test]
    async fn test_request_session_with_invalid_credentials() {
        let rest = FakeSendRequest::respond(401, json!({}));

        let session = rest.request_session(&credentials("alice", "wrong")).await;

        assert!(matches!(session, Err(domain::LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_request_session_without_connection() {
        let rest = FakeSendRequest::disconnected();

        let session = rest.request_session(&credentials("alice", "pw123")).await;

        assert!(matches!(
            session,
            Err(domain::LoginError::Storage(domain::StorageError::NoConnection))
        ));
    }

    #[rstest]
    #[case("deliverer", domain::Role::Deliverer)]
    #[case("user", domain::Role::User)]
    #[case("superuser", domain::Role::User)]
    #[tokio::test]
    async fn test_register_session(#[case] role: &str, #[case] expected: domain::Role) {
        let rest = FakeSendRequest::respond(200, json!({"username": "bob", "role": role}));

        let session = rest
            .register_session(&credentials("bob", "pw123"), expected)
            .await;

        assert_eq!(session.unwrap().role, expected);
        assert_eq!(sent(&rest).url, "api/register");
    }

    #[tokio::test]
    async fn test_register_session_with_taken_username() {
        let rest = FakeSendRequest::respond(409, json!({}));

        let session = rest
            .register_session(&credentials("bob", "pw123"), domain::Role::User)
            .await;

        assert!(matches!(session, Err(domain::RegistrationError::Conflict)));
    }

    #[tokio::test]
    async fn test_register_session_with_invalid_request() {
        let rest = FakeSendRequest::respond(400, json!({}));

        let session = rest
            .register_session(&credentials("bob", "pw123"), domain::Role::User)
            .await;

        assert!(matches!(session, Err(domain::RegistrationError::Rejected)));
    }

    #[tokio::test]
    async fn test_read_publications() {
        let rest = FakeSendRequest::respond(
            200,
            json!([{
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Morning Star",
                "language": "English",
                "description": "Daily",
                "price": 12.5,
            }]),
        );

        let publications = rest.read_publications().await.unwrap();

        assert_eq!(
            publications,
            vec![domain::Publication {
                id: 1.into(),
                name: domain::Name::new("Morning Star").unwrap(),
                language: String::from("English"),
                description: String::from("Daily"),
                price: domain::Money::new(12.5).unwrap(),
            }]
        );
        assert_eq!(
            sent(&rest),
            RequestData {
                method: Method::Get,
                url: String::from("api/publications"),
                body: None,
            }
        );
    }

    #[tokio::test]
    async fn test_read_publications_with_error_status() {
        let rest = FakeSendRequest::respond(500, json!({}));

        let publications = rest.read_publications().await;

        assert!(matches!(publications, Err(domain::ReadError::Other(_))));
    }

    #[tokio::test]
    async fn test_create_publication() {
        let rest = FakeSendRequest::respond(
            200,
            json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Morning Star",
                "language": "English",
                "description": "Daily",
                "price": 12.5,
            }),
        );

        let publication = rest
            .create_publication(domain::PublicationDraft {
                name: domain::Name::new("Morning Star").unwrap(),
                language: String::from("English"),
                description: String::from("Daily"),
                price: domain::Money::new(12.5).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(publication.id, 1.into());
        assert_eq!(
            sent(&rest).body,
            Some(json!({
                "name": "Morning Star",
                "language": "English",
                "description": "Daily",
                "price": 12.5,
            }))
        );
    }

    #[tokio::test]
    async fn test_replace_publication() {
        let rest = FakeSendRequest::respond(
            200,
            json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Evening Star",
                "language": "English",
                "description": "Daily",
                "price": 12.5,
            }),
        );

        let publication = rest
            .replace_publication(domain::Publication {
                id: 1.into(),
                name: domain::Name::new("Evening Star").unwrap(),
                language: String::from("English"),
                description: String::from("Daily"),
                price: domain::Money::new(12.5).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(publication.name, domain::Name::new("Evening Star").unwrap());
        let request = sent(&rest);
        assert_eq!(request.method, Method::Put);
        assert_eq!(
            request.url,
            "api/publications/00000000-0000-0000-0000-000000000001"
        );
    }

    #[tokio::test]
    async fn test_read_customers() {
        let rest = FakeSendRequest::respond(
            200,
            json!([{
                "id": "00000000-0000-0000-0000-000000000002",
                "name": "Carol",
                "address": "1 Main Street",
                "phone": "555-0100",
                "subscriptions": ["00000000-0000-0000-0000-000000000001"],
            }]),
        );

        let customers = rest.read_customers().await.unwrap();

        assert_eq!(
            customers,
            vec![domain::Customer {
                id: 2.into(),
                name: domain::Name::new("Carol").unwrap(),
                address: String::from("1 Main Street"),
                phone: String::from("555-0100"),
                subscriptions: vec![1.into()],
            }]
        );
    }

    #[tokio::test]
    async fn test_read_delivery_list() {
        let rest = FakeSendRequest::respond(
            200,
            json!([{
                "address": "1 Main Street",
                "publications": [{
                    "id": "00000000-0000-0000-0000-000000000001",
                    "name": "Morning Star",
                    "language": "English",
                    "description": "Daily",
                    "price": 12.5,
                }],
            }]),
        );

        let stops = rest.read_delivery_list().await.unwrap();

        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].address, "1 Main Street");
        assert_eq!(sent(&rest).url, "api/deliveries/today");
    }

    #[tokio::test]
    async fn test_read_delivery_summary() {
        let rest = FakeSendRequest::respond(
            200,
            json!({"customers": [{"name": "Carol", "publicationsDelivered": 28}]}),
        );

        let summary = rest.read_delivery_summary().await.unwrap();

        assert_eq!(
            summary,
            vec![domain::DeliverySummaryEntry {
                name: String::from("Carol"),
                publications_delivered: 28,
            }]
        );
    }

    #[tokio::test]
    async fn test_update_delivery_status() {
        let rest = FakeSendRequest::respond(200, json!({}));

        rest.update_delivery_status(domain::DeliveryStatusReport {
            address: String::from("1 Main Street"),
            status: domain::DeliveryStatus::NotDelivered {
                reason: String::from("nobody home"),
            },
        })
        .await
        .unwrap();

        assert_eq!(
            sent(&rest),
            RequestData {
                method: Method::Put,
                url: String::from("api/deliveries/status"),
                body: Some(json!({
                    "address": "1 Main Street",
                    "status": "not_delivered",
                    "reason": "nobody home",
                })),
            }
        );
    }

    #[tokio::test]
    async fn test_read_bills() {
        let rest = FakeSendRequest::respond(
            200,
            json!({"bills": [{
                "customerId": "00000000-0000-0000-0000-000000000002",
                "customerName": "Carol",
                "publications": [{"name": "Morning Star", "copies": 28, "cost": 35.0}],
                "totalCost": 35.0,
            }]}),
        );

        let bills = rest.read_bills().await.unwrap();

        assert_eq!(
            bills,
            vec![domain::Bill {
                customer_id: 2.into(),
                customer_name: String::from("Carol"),
                lines: vec![domain::BillLine {
                    name: String::from("Morning Star"),
                    copies: 28,
                    cost: domain::Money::new(35.0).unwrap(),
                }],
                total_cost: domain::Money::new(35.0).unwrap(),
            }]
        );
    }

    #[tokio::test]
    async fn test_read_subscriber_bills() {
        let rest = FakeSendRequest::respond(
            200,
            json!({"bills": [{
                "month": "2024-03",
                "publications": [{"name": "Morning Star", "copies": 28}],
                "totalCost": 35.0,
            }]}),
        );

        let bills = rest.read_subscriber_bills().await.unwrap();

        assert_eq!(bills[0].month, "2024-03");
        assert_eq!(bills[0].lines[0].copies, 28);
        assert_eq!(sent(&rest).url, "api/user/bills");
    }

    #[tokio::test]
    async fn test_record_payment() {
        let rest = FakeSendRequest::respond(200, json!({"receipt": "Receipt #42"}));

        let receipt = rest
            .record_payment(domain::PaymentDraft {
                customer_id: 2.into(),
                amount: domain::Money::new(35.0).unwrap(),
                cheque_number: Some(String::from("007")),
            })
            .await
            .unwrap();

        assert_eq!(receipt.receipt, "Receipt #42");
        assert_eq!(
            sent(&rest).body,
            Some(json!({
                "customerId": "00000000-0000-0000-0000-000000000002",
                "amount": 35.0,
                "chequeNumber": "007",
            }))
        );
    }

    #[tokio::test]
    async fn test_record_subscriber_payment() {
        let rest = FakeSendRequest::respond(200, json!({"receipt": "Receipt #43"}));

        let receipt = rest
            .record_subscriber_payment(domain::Money::new(35.0).unwrap(), None)
            .await
            .unwrap();

        assert_eq!(receipt.receipt, "Receipt #43");
        assert_eq!(
            sent(&rest),
            RequestData {
                method: Method::Post,
                url: String::from("api/user/payments"),
                body: Some(json!({"amount": 35.0, "chequeNumber": null})),
            }
        );
    }

    #[tokio::test]
    async fn test_read_deliverer_payments() {
        let rest = FakeSendRequest::respond(
            200,
            json!({"payments": [{"delivererId": "d1", "amount": 120.0, "period": "2024-03"}]}),
        );

        let payments = rest.read_deliverer_payments().await.unwrap();

        assert_eq!(payments[0].period, "2024-03");
        assert_eq!(payments[0].amount, domain::Money::new(120.0).unwrap());
    }

    #[tokio::test]
    async fn test_read_subscriber_payments() {
        let rest = FakeSendRequest::respond(
            200,
            json!({"payments": [{"date": "2024-03-01", "amount": 35.0, "chequeNumber": null}]}),
        );

        let payments = rest.read_subscriber_payments().await.unwrap();

        assert_eq!(
            payments[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(payments[0].cheque_number, None);
    }

    #[tokio::test]
    async fn test_read_subscriptions() {
        let rest = FakeSendRequest::respond(
            200,
            json!({"subscriptions": [{
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Morning Star",
                "price": 12.5,
            }]}),
        );

        let subscriptions = rest.read_subscriptions().await.unwrap();

        assert_eq!(subscriptions[0].id, 1.into());
    }

    #[tokio::test]
    async fn test_update_subscriptions() {
        let rest = FakeSendRequest::respond(200, json!({}));

        rest.update_subscriptions(vec![1.into()]).await.unwrap();

        assert_eq!(
            sent(&rest).body,
            Some(json!({"subscriptions": ["00000000-0000-0000-0000-000000000001"]}))
        );
    }

    #[tokio::test]
    async fn test_request_withhold() {
        let rest = FakeSendRequest::respond(200, json!({}));

        rest.request_withhold(
            2.into(),
            domain::WithholdRequest::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            )
            .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(
            sent(&rest),
            RequestData {
                method: Method::Post,
                url: String::from("api/customers/withhold"),
                body: Some(json!({
                    "customerId": "00000000-0000-0000-0000-000000000002",
                    "startDate": "2024-03-01",
                    "endDate": "2024-03-14",
                })),
            }
        );
    }

    #[tokio::test]
    async fn test_request_subscriber_withhold() {
        let rest = FakeSendRequest::respond(200, json!({}));

        rest.request_subscriber_withhold(
            domain::WithholdRequest::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            )
            .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(sent(&rest).url, "api/user/withhold");
    }
}
