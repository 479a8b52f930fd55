use chrono::NaiveDate;
use thiserror::Error;

use crate::{CreateError, CustomerID, Money, PublicationID, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait SubscriptionService {
    async fn get_subscriptions(&self) -> Result<Vec<Subscription>, ReadError>;
    async fn update_subscriptions(
        &self,
        subscriptions: Vec<PublicationID>,
    ) -> Result<(), UpdateError>;
    async fn request_withhold(
        &self,
        customer_id: CustomerID,
        withhold: WithholdRequest,
    ) -> Result<(), CreateError>;
    async fn request_subscriber_withhold(&self, withhold: WithholdRequest)
    -> Result<(), CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait SubscriptionRepository {
    async fn read_subscriptions(&self) -> Result<Vec<Subscription>, ReadError>;
    async fn update_subscriptions(
        &self,
        subscriptions: Vec<PublicationID>,
    ) -> Result<(), UpdateError>;
    async fn request_withhold(
        &self,
        customer_id: CustomerID,
        withhold: WithholdRequest,
    ) -> Result<(), CreateError>;
    async fn request_subscriber_withhold(&self, withhold: WithholdRequest)
    -> Result<(), CreateError>;
}

/// A publication the logged-in subscriber currently receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: PublicationID,
    pub name: String,
    pub price: Money,
}

/// A request to pause delivery for a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithholdRequest {
    start: NaiveDate,
    end: NaiveDate,
}

impl WithholdRequest {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WithholdError> {
        if end < start {
            return Err(WithholdError::EndBeforeStart);
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WithholdError {
    #[error("End date must not be before start date")]
    EndBeforeStart,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    #[case(date(2024, 3, 1), date(2024, 3, 14), true)]
    #[case(date(2024, 3, 1), date(2024, 3, 1), true)]
    #[case(date(2024, 3, 14), date(2024, 3, 1), false)]
    fn test_withhold_request_new(#[case] start: NaiveDate, #[case] end: NaiveDate, #[case] ok: bool) {
        let result = WithholdRequest::new(start, end);
        if ok {
            let withhold = result.unwrap();
            assert_eq!(withhold.start(), start);
            assert_eq!(withhold.end(), end);
        } else {
            assert_eq!(result, Err(WithholdError::EndBeforeStart));
        }
    }
}
