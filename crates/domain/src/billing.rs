use crate::{CustomerID, Money, ReadError};

#[allow(async_fn_in_trait)]
pub trait BillingService {
    async fn get_bills(&self) -> Result<Vec<Bill>, ReadError>;
    async fn get_subscriber_bills(&self) -> Result<Vec<SubscriberBill>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait BillingRepository {
    async fn read_bills(&self) -> Result<Vec<Bill>, ReadError>;
    async fn read_subscriber_bills(&self) -> Result<Vec<SubscriberBill>, ReadError>;
}

/// Bill of one customer as computed by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub customer_id: CustomerID,
    pub customer_name: String,
    pub lines: Vec<BillLine>,
    pub total_cost: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillLine {
    pub name: String,
    pub copies: u32,
    pub cost: Money,
}

/// A monthly bill of the logged-in subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberBill {
    pub month: String,
    pub lines: Vec<SubscriberBillLine>,
    pub total_cost: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberBillLine {
    pub name: String,
    pub copies: u32,
}
