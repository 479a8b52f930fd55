use dioxus::prelude::*;

use gazette_domain as domain;
use gazette_domain::{DeliveryService, PaymentService};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE, NOTIFICATIONS,
    component::{
        element::{
            Container, Dialog, ErrorMessage, Icon, Loading, NoConnection, NoData, PrintButton,
            Table, Tabs, Title,
        },
        form::InputField,
    },
    ensure_route, signal_changed_data,
};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Deliveries,
    Payments,
}

const TABS: [(Tab, &str); 2] = [(Tab::Deliveries, "Deliveries"), (Tab::Payments, "Payments")];

#[component]
pub fn Deliverer() -> Element {
    let _ = ensure_route!(domain::Destination::Deliverer);
    let mut tab = use_signal(|| Tab::Deliveries);

    rsx! {
        Tabs {
            labels: TABS.iter().map(|(_, label)| (*label).to_string()).collect::<Vec<_>>(),
            active: TABS.iter().position(|(t, _)| *t == tab()).unwrap_or_default(),
            onselect: move |i: usize| { *tab.write() = TABS[i].0; },
        }
        match tab() {
            Tab::Deliveries => rsx! { Deliveries {} },
            Tab::Payments => rsx! { Payments {} },
        }
    }
}

#[component]
fn Deliveries() -> Element {
    let deliveries = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_delivery_list().await
    });
    let mut dialog = use_signal(|| ReportDialog::None);
    let mut is_loading = use_signal(|| false);

    let mut report = move |status: domain::DeliveryStatus| async move {
        let address = match &*dialog.read() {
            ReportDialog::Report { address, .. } => address.clone(),
            ReportDialog::None => return,
        };
        *is_loading.write() = true;
        let result = DOMAIN_SERVICE
            .read()
            .update_delivery_status(domain::DeliveryStatusReport { address, status })
            .await;
        *is_loading.write() = false;
        match result {
            Ok(()) => {
                *dialog.write() = ReportDialog::None;
                signal_changed_data();
            }
            Err(err) => {
                NOTIFICATIONS
                    .write()
                    .push(format!("Failed to update delivery status: {err}"));
            }
        }
    };

    rsx! {
        Title { title: "Today's Delivery List" }
        match &*deliveries.read() {
            Some(Ok(stops)) => rsx! {
                if stops.is_empty() {
                    NoData {}
                } else {
                    Table {
                        head: vec![
                            rsx! { "Address" },
                            rsx! { "Publications" },
                            rsx! {},
                        ],
                        body: stops.iter().map(|stop| {
                            let address = stop.address.clone();
                            vec![
                                rsx! { "{stop.address}" },
                                rsx! {
                                    ul {
                                        for publication in &stop.publications {
                                            li { "{publication.name}" }
                                        }
                                    }
                                },
                                rsx! {
                                    a {
                                        class: "mx-2",
                                        onclick: move |_| {
                                            *dialog.write() = ReportDialog::Report {
                                                address: address.clone(),
                                                reason: String::new(),
                                            };
                                        },
                                        Icon { name: "clipboard-check" }
                                    }
                                },
                            ]
                        }).collect::<Vec<_>>(),
                    }
                    Container {
                        has_text_centered: true,
                        PrintButton { label: "Print list" }
                    }
                }
            },
            Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                NoConnection {}
            },
            Some(Err(err)) => rsx! {
                ErrorMessage { message: "Failed to fetch delivery list: {err}" }
            },
            None => rsx! { Loading {} },
        }
        match &*dialog.read() {
            ReportDialog::None => rsx! {},
            ReportDialog::Report { address, reason } => rsx! {
                Dialog {
                    title: rsx! { "Report delivery" },
                    close_event: move |_| { *dialog.write() = ReportDialog::None; },
                    p { class: "block", "{address}" }
                    InputField {
                        label: "Reason for non-delivery",
                        value: reason.clone(),
                        has_changed: false,
                        oninput: move |event: FormEvent| {
                            if let ReportDialog::Report { reason, .. } = &mut *dialog.write() {
                                *reason = event.value();
                            }
                        },
                    }
                    div {
                        class: "field is-grouped is-grouped-centered",
                        div {
                            class: "control",
                            button {
                                class: "button is-success",
                                class: if is_loading() { "is-loading" },
                                onclick: move |_| report(domain::DeliveryStatus::Delivered),
                                "Delivered"
                            }
                        }
                        div {
                            class: "control",
                            button {
                                class: "button is-danger",
                                class: if is_loading() { "is-loading" },
                                disabled: reason.trim().is_empty(),
                                onclick: {
                                    let reason = reason.clone();
                                    move |_| report(domain::DeliveryStatus::NotDelivered {
                                        reason: reason.trim().to_string(),
                                    })
                                },
                                "Not delivered"
                            }
                        }
                    }
                }
            },
        }
    }
}

enum ReportDialog {
    None,
    Report { address: String, reason: String },
}

#[component]
fn Payments() -> Element {
    let payments = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_deliverer_payments().await
    });

    rsx! {
        Title { title: "Payment History" }
        match &*payments.read() {
            Some(Ok(payments)) => rsx! {
                if payments.is_empty() {
                    NoData {}
                } else {
                    Table {
                        head: vec![
                            rsx! { "Period" },
                            rsx! { "Amount" },
                        ],
                        body: payments.iter().map(|payment| vec![
                            rsx! { "{payment.period}" },
                            rsx! { "{payment.amount}" },
                        ]).collect::<Vec<_>>(),
                    }
                    Container {
                        has_text_centered: true,
                        PrintButton { label: "Print history" }
                    }
                }
            },
            Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                NoConnection {}
            },
            Some(Err(err)) => rsx! {
                ErrorMessage { message: "Failed to fetch payments: {err}" }
            },
            None => rsx! { Loading {} },
        }
    }
}
