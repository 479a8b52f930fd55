use chrono::NaiveDate;

use crate::{CreateError, CustomerID, Money, ReadError};

#[allow(async_fn_in_trait)]
pub trait PaymentService {
    async fn record_payment(&self, draft: PaymentDraft) -> Result<PaymentReceipt, CreateError>;
    async fn record_subscriber_payment(
        &self,
        amount: Money,
        cheque_number: Option<String>,
    ) -> Result<PaymentReceipt, CreateError>;
    async fn get_deliverer_payments(&self) -> Result<Vec<DelivererPayment>, ReadError>;
    async fn get_subscriber_payments(&self) -> Result<Vec<SubscriberPayment>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait PaymentRepository {
    async fn record_payment(&self, draft: PaymentDraft) -> Result<PaymentReceipt, CreateError>;
    async fn record_subscriber_payment(
        &self,
        amount: Money,
        cheque_number: Option<String>,
    ) -> Result<PaymentReceipt, CreateError>;
    async fn read_deliverer_payments(&self) -> Result<Vec<DelivererPayment>, ReadError>;
    async fn read_subscriber_payments(&self) -> Result<Vec<SubscriberPayment>, ReadError>;
}

/// A payment to be recorded against a customer's account.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub customer_id: CustomerID,
    pub amount: Money,
    pub cheque_number: Option<String>,
}

/// Server-rendered receipt text for a recorded payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub receipt: String,
}

/// One entry of the logged-in subscriber's payment history.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberPayment {
    pub date: NaiveDate,
    pub amount: Money,
    pub cheque_number: Option<String>,
}

/// One entry of the logged-in deliverer's payment history.
#[derive(Debug, Clone, PartialEq)]
pub struct DelivererPayment {
    pub deliverer_id: String,
    pub amount: Money,
    pub period: String,
}
