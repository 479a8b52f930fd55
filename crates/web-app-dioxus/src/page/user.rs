use dioxus::prelude::*;

use gazette_domain as domain;
use gazette_domain::{BillingService, PaymentService, SubscriptionService};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE,
    component::{
        element::{
            CenteredBlock, Color, Container, ErrorMessage, Loading, Message, NoConnection, NoData,
            PrintButton, Table, Tabs, Title, WhiteBox,
        },
        form::{FieldValue, FieldValueState, InputField},
    },
    ensure_route,
};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Subscriptions,
    Bills,
    Payments,
    Withhold,
}

const TABS: [(Tab, &str); 4] = [
    (Tab::Subscriptions, "My Subscriptions"),
    (Tab::Bills, "My Bills"),
    (Tab::Payments, "Payments"),
    (Tab::Withhold, "Withhold Delivery"),
];

#[component]
pub fn User() -> Element {
    let _ = ensure_route!(domain::Destination::User);
    let mut tab = use_signal(|| Tab::Subscriptions);

    rsx! {
        Tabs {
            labels: TABS.iter().map(|(_, label)| (*label).to_string()).collect::<Vec<_>>(),
            active: TABS.iter().position(|(t, _)| *t == tab()).unwrap_or_default(),
            onselect: move |i: usize| { *tab.write() = TABS[i].0; },
        }
        match tab() {
            Tab::Subscriptions => rsx! { Subscriptions {} },
            Tab::Bills => rsx! { Bills {} },
            Tab::Payments => rsx! { Payments {} },
            Tab::Withhold => rsx! { Withhold {} },
        }
    }
}

#[component]
fn Subscriptions() -> Element {
    let subscriptions = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_subscriptions().await
    });
    let mut selected = use_signal(|| None::<Vec<domain::PublicationID>>);
    let mut status = use_signal(|| None::<Result<(), String>>);
    let mut is_loading = use_signal(|| false);

    use_effect(move || {
        if let Some(Ok(subscriptions)) = &*subscriptions.read() {
            if selected.peek().is_none() {
                *selected.write() = Some(subscriptions.iter().map(|s| s.id).collect());
            }
        }
    });

    let submit = move |_| async move {
        let Some(subscriptions) = selected.read().clone() else {
            return;
        };
        *is_loading.write() = true;
        let result = DOMAIN_SERVICE
            .read()
            .update_subscriptions(subscriptions)
            .await;
        *is_loading.write() = false;
        *status.write() = Some(match result {
            Ok(()) => Ok(()),
            Err(err) => Err(format!("Failed to update subscriptions: {err}")),
        });
    };

    rsx! {
        Title { title: "My Subscriptions" }
        Container {
            match &*subscriptions.read() {
                Some(Ok(subscriptions)) => rsx! {
                    if subscriptions.is_empty() {
                        NoData {}
                    } else {
                        div {
                            class: "field",
                            for subscription in subscriptions.clone() {
                                div {
                                    class: "control py-1",
                                    label {
                                        class: "checkbox",
                                        input {
                                            r#type: "checkbox",
                                            checked: selected.read().as_ref()
                                                .is_some_and(|ids| ids.contains(&subscription.id)),
                                            onchange: {
                                                let subscription_id = subscription.id;
                                                move |_| {
                                                    if let Some(ids) = &mut *selected.write() {
                                                        if ids.contains(&subscription_id) {
                                                            ids.retain(|id| *id != subscription_id);
                                                        } else {
                                                            ids.push(subscription_id);
                                                        }
                                                    }
                                                }
                                            },
                                        }
                                        " {subscription.name} ({subscription.price})"
                                    }
                                }
                            }
                        }
                        match &*status.read() {
                            Some(Ok(())) => rsx! {
                                Message {
                                    color: Color::Success,
                                    "Subscription changes requested successfully. Changes will take effect in 7 days."
                                }
                            },
                            Some(Err(message)) => rsx! {
                                Message {
                                    color: Color::Danger,
                                    "{message}"
                                }
                            },
                            None => rsx! {},
                        }
                        CenteredBlock {
                            button {
                                class: "button is-primary",
                                class: if is_loading() { "is-loading" },
                                onclick: submit,
                                "Update subscriptions"
                            }
                        }
                    }
                },
                Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                    NoConnection {}
                },
                Some(Err(err)) => rsx! {
                    ErrorMessage { message: "Failed to fetch subscriptions: {err}" }
                },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn Bills() -> Element {
    let bills = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_subscriber_bills().await
    });

    rsx! {
        Title { title: "My Bills" }
        match &*bills.read() {
            Some(Ok(bills)) => rsx! {
                if bills.is_empty() {
                    NoData {}
                } else {
                    for bill in bills.clone() {
                        WhiteBox {
                            h1 { class: "title is-6", "{bill.month}" }
                            Table {
                                head: vec![
                                    rsx! { "Publication" },
                                    rsx! { "Copies" },
                                ],
                                body: bill.lines.iter().map(|line| vec![
                                    rsx! { "{line.name}" },
                                    rsx! { "{line.copies}" },
                                ]).collect::<Vec<_>>(),
                            }
                            p {
                                class: "has-text-right has-text-weight-bold",
                                "Total: {bill.total_cost}"
                            }
                        }
                    }
                    Container {
                        has_text_centered: true,
                        PrintButton { label: "Print bills" }
                    }
                }
            },
            Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                NoConnection {}
            },
            Some(Err(err)) => rsx! {
                ErrorMessage { message: "Failed to fetch bills: {err}" }
            },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
fn Payments() -> Element {
    let mut payments = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_subscriber_payments().await
    });
    let mut amount = use_signal(FieldValue::<domain::Money>::default);
    let mut cheque_number = use_signal(String::new);
    let mut receipt = use_signal(|| None::<domain::PaymentReceipt>);
    let mut error = use_signal(String::new);
    let mut is_loading = use_signal(|| false);

    let submit = move |_| async move {
        let Ok(amount_value) = amount.read().validated.clone() else {
            return;
        };
        *is_loading.write() = true;
        error.write().clear();
        let cheque = cheque_number.read().trim().to_string();
        let result = DOMAIN_SERVICE
            .read()
            .record_subscriber_payment(
                amount_value,
                if cheque.is_empty() { None } else { Some(cheque) },
            )
            .await;
        *is_loading.write() = false;
        match result {
            Ok(payment_receipt) => {
                *receipt.write() = Some(payment_receipt);
                *amount.write() = FieldValue::default();
                cheque_number.write().clear();
                payments.restart();
            }
            Err(err) => {
                *error.write() = format!("Failed to record payment: {err}");
            }
        }
    };

    rsx! {
        Title { title: "Payments" }
        Container {
            InputField {
                label: "Amount",
                inputmode: "decimal",
                value: amount.read().input.clone(),
                error: if let Err(err) = &amount.read().validated { err.clone() },
                has_changed: amount.read().changed(),
                oninput: move |event: FormEvent| {
                    let mut amount = amount.write();
                    amount.input = event.value();
                    amount.validated = domain::Money::try_from(amount.input.as_str())
                        .map_err(|err| err.to_string());
                },
            }
            InputField {
                label: "Cheque number",
                help: "Leave empty for cash payments",
                value: cheque_number.read().clone(),
                has_changed: false,
                oninput: move |event: FormEvent| {
                    *cheque_number.write() = event.value();
                },
            }
            if !error.read().is_empty() {
                Message {
                    color: Color::Danger,
                    "{error}"
                }
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    button {
                        class: "button is-primary",
                        class: if is_loading() { "is-loading" },
                        disabled: !amount.read().valid(),
                        onclick: submit,
                        "Record payment"
                    }
                }
            }
            if let Some(receipt) = receipt.read().clone() {
                Message {
                    color: Color::Success,
                    "Payment processed successfully"
                }
                WhiteBox {
                    pre { "{receipt.receipt}" }
                }
                div {
                    class: "has-text-centered",
                    PrintButton { label: "Print receipt" }
                }
            }
        }
        match &*payments.read() {
            Some(Ok(payments)) => rsx! {
                if payments.is_empty() {
                    NoData {}
                } else {
                    Table {
                        head: vec![
                            rsx! { "Date" },
                            rsx! { "Amount" },
                            rsx! { "Cheque number" },
                        ],
                        body: payments.iter().map(|payment| vec![
                            rsx! { "{payment.date}" },
                            rsx! { "{payment.amount}" },
                            rsx! { {payment.cheque_number.clone().unwrap_or_else(|| String::from("-"))} },
                        ]).collect::<Vec<_>>(),
                    }
                }
            },
            Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                NoConnection {}
            },
            Some(Err(err)) => rsx! {
                ErrorMessage { message: "Failed to fetch payment history: {err}" }
            },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
fn Withhold() -> Element {
    let mut start = use_signal(FieldValue::<chrono::NaiveDate>::default);
    let mut end = use_signal(FieldValue::<chrono::NaiveDate>::default);
    let mut status = use_signal(|| None::<Result<(), String>>);
    let mut is_loading = use_signal(|| false);

    let submit = move |_| async move {
        let (Ok(start), Ok(end)) = (
            start.read().validated.clone(),
            end.read().validated.clone(),
        ) else {
            return;
        };
        let withhold = match domain::WithholdRequest::new(start, end) {
            Ok(withhold) => withhold,
            Err(err) => {
                *status.write() = Some(Err(err.to_string()));
                return;
            }
        };
        *is_loading.write() = true;
        let result = DOMAIN_SERVICE
            .read()
            .request_subscriber_withhold(withhold)
            .await;
        *is_loading.write() = false;
        *status.write() = Some(match result {
            Ok(()) => Ok(()),
            Err(err) => Err(format!("Failed to submit withhold request: {err}")),
        });
    };

    rsx! {
        Title { title: "Request Delivery Withhold" }
        Container {
            InputField {
                label: "Start date",
                r#type: "date",
                value: start.read().input.clone(),
                error: if let Err(err) = &start.read().validated { err.clone() },
                has_changed: start.read().changed(),
                oninput: move |event: FormEvent| {
                    let mut start = start.write();
                    start.input = event.value();
                    start.validated = start
                        .input
                        .parse()
                        .map_err(|_| String::from("Invalid date"));
                },
            }
            InputField {
                label: "End date",
                r#type: "date",
                min: start.read().input.clone(),
                value: end.read().input.clone(),
                error: if let Err(err) = &end.read().validated { err.clone() },
                has_changed: end.read().changed(),
                oninput: move |event: FormEvent| {
                    let mut end = end.write();
                    end.input = event.value();
                    end.validated = end
                        .input
                        .parse()
                        .map_err(|_| String::from("Invalid date"));
                },
            }
            match &*status.read() {
                Some(Ok(())) => rsx! {
                    Message {
                        color: Color::Success,
                        "Delivery withhold request submitted successfully"
                    }
                },
                Some(Err(message)) => rsx! {
                    Message {
                        color: Color::Danger,
                        "{message}"
                    }
                },
                None => rsx! {},
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    button {
                        class: "button is-primary",
                        class: if is_loading() { "is-loading" },
                        disabled: !start.read().valid() || !end.read().valid(),
                        onclick: submit,
                        "Submit request"
                    }
                }
            }
        }
    }
}
