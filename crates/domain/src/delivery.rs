use std::fmt;

use crate::{Publication, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait DeliveryService {
    async fn get_delivery_list(&self) -> Result<Vec<DeliveryStop>, ReadError>;
    async fn get_delivery_summary(&self) -> Result<Vec<DeliverySummaryEntry>, ReadError>;
    async fn update_delivery_status(&self, report: DeliveryStatusReport)
    -> Result<(), UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait DeliveryRepository {
    async fn read_delivery_list(&self) -> Result<Vec<DeliveryStop>, ReadError>;
    async fn read_delivery_summary(&self) -> Result<Vec<DeliverySummaryEntry>, ReadError>;
    async fn update_delivery_status(&self, report: DeliveryStatusReport)
    -> Result<(), UpdateError>;
}

/// One address on today's delivery route.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryStop {
    pub address: String,
    pub publications: Vec<Publication>,
}

/// Outcome reported by the deliverer for one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    NotDelivered { reason: String },
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::NotDelivered { .. } => "not delivered",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatusReport {
    pub address: String,
    pub status: DeliveryStatus,
}

/// One row of the monthly per-customer summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySummaryEntry {
    pub name: String,
    pub publications_delivered: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DeliveryStatus::Pending, "pending")]
    #[case(DeliveryStatus::Delivered, "delivered")]
    #[case(
        DeliveryStatus::NotDelivered { reason: String::from("nobody home") },
        "not delivered"
    )]
    fn test_delivery_status_display(#[case] status: DeliveryStatus, #[case] string: &str) {
        assert_eq!(status.to_string(), string);
    }
}
