use dioxus::prelude::*;

use gazette_domain as domain;
use gazette_domain::{
    BillingService, CustomerService, DeliveryService, PaymentService, PublicationService,
    SubscriptionService,
};

use crate::{
    DATA_CHANGED, DOMAIN_SERVICE, NOTIFICATIONS,
    component::{
        element::{
            Color, Container, Dialog, ErrorMessage, Icon, Loading, Message, NoConnection, NoData,
            PrintButton, Table, Tabs, Title, WhiteBox,
        },
        form::{FieldValue, FieldValueState, InputField, SelectField, SelectOption},
    },
    ensure_route, signal_changed_data,
};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Publications,
    Customers,
    Summary,
    Bills,
    Payments,
    Withhold,
}

const TABS: [(Tab, &str); 6] = [
    (Tab::Publications, "Publications"),
    (Tab::Customers, "Customers"),
    (Tab::Summary, "Delivery Summary"),
    (Tab::Bills, "Bills"),
    (Tab::Payments, "Payments"),
    (Tab::Withhold, "Withhold"),
];

#[component]
pub fn Manager() -> Element {
    let _ = ensure_route!(domain::Destination::Manager);
    let mut tab = use_signal(|| Tab::Publications);

    rsx! {
        Tabs {
            labels: TABS.iter().map(|(_, label)| (*label).to_string()).collect::<Vec<_>>(),
            active: TABS.iter().position(|(t, _)| *t == tab()).unwrap_or_default(),
            onselect: move |i: usize| { *tab.write() = TABS[i].0; },
        }
        match tab() {
            Tab::Publications => rsx! { Publications {} },
            Tab::Customers => rsx! { Customers {} },
            Tab::Summary => rsx! { DeliverySummary {} },
            Tab::Bills => rsx! { Bills {} },
            Tab::Payments => rsx! { RecordPayment {} },
            Tab::Withhold => rsx! { Withhold {} },
        }
    }
}

#[component]
fn Publications() -> Element {
    let publications = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_publications().await
    });
    let mut dialog = use_signal(|| PublicationDialog::None);
    let mut is_loading = use_signal(|| false);

    let mut close_dialog = move || {
        *dialog.write() = PublicationDialog::None;
    };

    let save = move |_| async move {
        let mut saved = false;
        *is_loading.write() = true;
        match &*dialog.read() {
            PublicationDialog::Add {
                name,
                language,
                description,
                price,
            } => {
                if let (Ok(name), Ok(price)) = (name.validated.clone(), price.validated.clone()) {
                    match DOMAIN_SERVICE
                        .read()
                        .create_publication(domain::PublicationDraft {
                            name,
                            language: language.input.clone(),
                            description: description.input.clone(),
                            price,
                        })
                        .await
                    {
                        Ok(_) => {
                            saved = true;
                            signal_changed_data();
                        }
                        Err(err) => {
                            NOTIFICATIONS
                                .write()
                                .push(format!("Failed to add publication: {err}"));
                        }
                    }
                }
            }
            PublicationDialog::Edit {
                id,
                name,
                language,
                description,
                price,
            } => {
                if let (Ok(name), Ok(price)) = (name.validated.clone(), price.validated.clone()) {
                    match DOMAIN_SERVICE
                        .read()
                        .replace_publication(domain::Publication {
                            id: *id,
                            name,
                            language: language.input.clone(),
                            description: description.input.clone(),
                            price,
                        })
                        .await
                    {
                        Ok(_) => {
                            saved = true;
                            signal_changed_data();
                        }
                        Err(err) => {
                            NOTIFICATIONS
                                .write()
                                .push(format!("Failed to edit publication: {err}"));
                        }
                    }
                }
            }
            PublicationDialog::None => {}
        }
        *is_loading.write() = false;
        if saved {
            close_dialog();
        }
    };
    let close = move |_| close_dialog();

    rsx! {
        Title { title: "Publications" }
        match &*publications.read() {
            Some(Ok(publications)) => rsx! {
                if publications.is_empty() {
                    NoData {}
                } else {
                    Table {
                        head: vec![
                            rsx! { "Name" },
                            rsx! { "Language" },
                            rsx! { "Price" },
                            rsx! {},
                        ],
                        body: publications.iter().map(|publication| {
                            let publication = publication.clone();
                            vec![
                                rsx! { "{publication.name}" },
                                rsx! { "{publication.language}" },
                                rsx! { "{publication.price}" },
                                rsx! {
                                    a {
                                        class: "mx-2",
                                        onclick: move |_| {
                                            *dialog.write() = PublicationDialog::Edit {
                                                id: publication.id,
                                                name: FieldValue {
                                                    input: publication.name.to_string(),
                                                    validated: Ok(publication.name.clone()),
                                                    orig: publication.name.to_string(),
                                                },
                                                language: FieldValue::new(publication.language.clone()),
                                                description: FieldValue::new(publication.description.clone()),
                                                price: FieldValue::new(publication.price),
                                            };
                                        },
                                        Icon { name: "edit" }
                                    }
                                },
                            ]
                        }).collect::<Vec<_>>(),
                    }
                }
                Container {
                    has_text_centered: true,
                    button {
                        class: "button is-link",
                        onclick: move |_| {
                            *dialog.write() = PublicationDialog::Add {
                                name: FieldValue::default(),
                                language: FieldValue::default(),
                                description: FieldValue::default(),
                                price: FieldValue::default(),
                            };
                        },
                        Icon { name: "plus" }
                        span { "Add publication" }
                    }
                }
            },
            Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                NoConnection {}
            },
            Some(Err(err)) => rsx! {
                ErrorMessage { message: "Failed to fetch publications: {err}" }
            },
            None => rsx! { Loading {} },
        }
        match &*dialog.read() {
            PublicationDialog::None => rsx! {},
            PublicationDialog::Add { name, language, description, price }
            | PublicationDialog::Edit { name, language, description, price, .. } => rsx! {
                Dialog {
                    title: rsx! {
                        if let PublicationDialog::Add { .. } = &*dialog.read() {
                            "Add publication"
                        } else {
                            "Edit publication"
                        }
                    },
                    close_event: close,
                    InputField {
                        label: "Name",
                        value: name.input.clone(),
                        error: if let Err(err) = &name.validated { err.clone() },
                        has_changed: name.changed(),
                        oninput: move |event: FormEvent| {
                            if let PublicationDialog::Add { name, .. }
                            | PublicationDialog::Edit { name, .. } = &mut *dialog.write()
                            {
                                name.input = event.value();
                                name.validated = domain::Name::new(&name.input)
                                    .map_err(|err| err.to_string());
                            }
                        },
                    }
                    InputField {
                        label: "Language",
                        value: language.input.clone(),
                        has_changed: language.changed(),
                        oninput: move |event: FormEvent| {
                            if let PublicationDialog::Add { language, .. }
                            | PublicationDialog::Edit { language, .. } = &mut *dialog.write()
                            {
                                language.input = event.value();
                                language.validated = Ok(language.input.clone());
                            }
                        },
                    }
                    InputField {
                        label: "Description",
                        value: description.input.clone(),
                        has_changed: description.changed(),
                        oninput: move |event: FormEvent| {
                            if let PublicationDialog::Add { description, .. }
                            | PublicationDialog::Edit { description, .. } = &mut *dialog.write()
                            {
                                description.input = event.value();
                                description.validated = Ok(description.input.clone());
                            }
                        },
                    }
                    InputField {
                        label: "Price",
                        inputmode: "decimal",
                        value: price.input.clone(),
                        error: if let Err(err) = &price.validated { err.clone() },
                        has_changed: price.changed(),
                        oninput: move |event: FormEvent| {
                            if let PublicationDialog::Add { price, .. }
                            | PublicationDialog::Edit { price, .. } = &mut *dialog.write()
                            {
                                price.input = event.value();
                                price.validated = domain::Money::try_from(price.input.as_str())
                                    .map_err(|err| err.to_string());
                            }
                        },
                    }
                    div {
                        class: "field is-grouped is-grouped-centered",
                        div {
                            class: "control",
                            onclick: close,
                            button { class: "button is-light is-soft", "Cancel" }
                        }
                        div {
                            class: "control",
                            onclick: save,
                            button {
                                class: "button is-primary",
                                class: if is_loading() { "is-loading" },
                                disabled: !name.valid() || !price.valid(),
                                "Save"
                            }
                        }
                    }
                }
            },
        }
    }
}

enum PublicationDialog {
    None,
    Add {
        name: FieldValue<domain::Name>,
        language: FieldValue<String>,
        description: FieldValue<String>,
        price: FieldValue<domain::Money>,
    },
    Edit {
        id: domain::PublicationID,
        name: FieldValue<domain::Name>,
        language: FieldValue<String>,
        description: FieldValue<String>,
        price: FieldValue<domain::Money>,
    },
}

#[component]
fn Customers() -> Element {
    let customers = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_customers().await
    });
    let publications = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_publications().await
    });
    let mut dialog = use_signal(|| CustomerDialog::None);
    let mut is_loading = use_signal(|| false);

    let mut close_dialog = move || {
        *dialog.write() = CustomerDialog::None;
    };

    let save = move |_| async move {
        let mut saved = false;
        *is_loading.write() = true;
        match &*dialog.read() {
            CustomerDialog::Add {
                name,
                address,
                phone,
                subscriptions,
            } => {
                if let Ok(name) = name.validated.clone() {
                    match DOMAIN_SERVICE
                        .read()
                        .create_customer(domain::CustomerDraft {
                            name,
                            address: address.input.clone(),
                            phone: phone.input.clone(),
                            subscriptions: subscriptions.clone(),
                        })
                        .await
                    {
                        Ok(_) => {
                            saved = true;
                            signal_changed_data();
                        }
                        Err(err) => {
                            NOTIFICATIONS
                                .write()
                                .push(format!("Failed to add customer: {err}"));
                        }
                    }
                }
            }
            CustomerDialog::Edit {
                id,
                name,
                address,
                phone,
                subscriptions,
            } => {
                if let Ok(name) = name.validated.clone() {
                    match DOMAIN_SERVICE
                        .read()
                        .replace_customer(domain::Customer {
                            id: *id,
                            name,
                            address: address.input.clone(),
                            phone: phone.input.clone(),
                            subscriptions: subscriptions.clone(),
                        })
                        .await
                    {
                        Ok(_) => {
                            saved = true;
                            signal_changed_data();
                        }
                        Err(err) => {
                            NOTIFICATIONS
                                .write()
                                .push(format!("Failed to edit customer: {err}"));
                        }
                    }
                }
            }
            CustomerDialog::None => {}
        }
        *is_loading.write() = false;
        if saved {
            close_dialog();
        }
    };
    let close = move |_| close_dialog();

    rsx! {
        Title { title: "Customers" }
        match &*customers.read() {
            Some(Ok(customers)) => rsx! {
                if customers.is_empty() {
                    NoData {}
                } else {
                    Table {
                        head: vec![
                            rsx! { "Name" },
                            rsx! { "Address" },
                            rsx! { "Phone" },
                            rsx! { "Subscriptions" },
                            rsx! {},
                        ],
                        body: customers.iter().map(|customer| {
                            let customer = customer.clone();
                            vec![
                                rsx! { "{customer.name}" },
                                rsx! { "{customer.address}" },
                                rsx! { "{customer.phone}" },
                                rsx! { "{customer.subscriptions.len()}" },
                                rsx! {
                                    a {
                                        class: "mx-2",
                                        onclick: move |_| {
                                            *dialog.write() = CustomerDialog::Edit {
                                                id: customer.id,
                                                name: FieldValue {
                                                    input: customer.name.to_string(),
                                                    validated: Ok(customer.name.clone()),
                                                    orig: customer.name.to_string(),
                                                },
                                                address: FieldValue::new(customer.address.clone()),
                                                phone: FieldValue::new(customer.phone.clone()),
                                                subscriptions: customer.subscriptions.clone(),
                                            };
                                        },
                                        Icon { name: "edit" }
                                    }
                                },
                            ]
                        }).collect::<Vec<_>>(),
                    }
                }
                Container {
                    has_text_centered: true,
                    button {
                        class: "button is-link",
                        onclick: move |_| {
                            *dialog.write() = CustomerDialog::Add {
                                name: FieldValue::default(),
                                address: FieldValue::default(),
                                phone: FieldValue::default(),
                                subscriptions: Vec::new(),
                            };
                        },
                        Icon { name: "user-plus" }
                        span { "Add customer" }
                    }
                }
            },
            Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                NoConnection {}
            },
            Some(Err(err)) => rsx! {
                ErrorMessage { message: "Failed to fetch customers: {err}" }
            },
            None => rsx! { Loading {} },
        }
        match &*dialog.read() {
            CustomerDialog::None => rsx! {},
            CustomerDialog::Add { name, address, phone, subscriptions }
            | CustomerDialog::Edit { name, address, phone, subscriptions, .. } => rsx! {
                Dialog {
                    title: rsx! {
                        if let CustomerDialog::Add { .. } = &*dialog.read() {
                            "Add customer"
                        } else {
                            "Edit customer"
                        }
                    },
                    close_event: close,
                    InputField {
                        label: "Name",
                        value: name.input.clone(),
                        error: if let Err(err) = &name.validated { err.clone() },
                        has_changed: name.changed(),
                        oninput: move |event: FormEvent| {
                            if let CustomerDialog::Add { name, .. }
                            | CustomerDialog::Edit { name, .. } = &mut *dialog.write()
                            {
                                name.input = event.value();
                                name.validated = domain::Name::new(&name.input)
                                    .map_err(|err| err.to_string());
                            }
                        },
                    }
                    InputField {
                        label: "Address",
                        value: address.input.clone(),
                        has_changed: address.changed(),
                        oninput: move |event: FormEvent| {
                            if let CustomerDialog::Add { address, .. }
                            | CustomerDialog::Edit { address, .. } = &mut *dialog.write()
                            {
                                address.input = event.value();
                                address.validated = Ok(address.input.clone());
                            }
                        },
                    }
                    InputField {
                        label: "Phone",
                        inputmode: "tel",
                        value: phone.input.clone(),
                        has_changed: phone.changed(),
                        oninput: move |event: FormEvent| {
                            if let CustomerDialog::Add { phone, .. }
                            | CustomerDialog::Edit { phone, .. } = &mut *dialog.write()
                            {
                                phone.input = event.value();
                                phone.validated = Ok(phone.input.clone());
                            }
                        },
                    }
                    div {
                        class: "field",
                        label { class: "label", "Subscriptions" }
                        match &*publications.read() {
                            Some(Ok(publications)) => rsx! {
                                for publication in publications.clone() {
                                    div {
                                        class: "control",
                                        label {
                                            class: "checkbox",
                                            input {
                                                r#type: "checkbox",
                                                checked: subscriptions.contains(&publication.id),
                                                onchange: {
                                                    let publication_id = publication.id;
                                                    move |_| {
                                                        if let CustomerDialog::Add { subscriptions, .. }
                                                        | CustomerDialog::Edit { subscriptions, .. } =
                                                            &mut *dialog.write()
                                                        {
                                                            if subscriptions.contains(&publication_id) {
                                                                subscriptions.retain(|id| *id != publication_id);
                                                            } else {
                                                                subscriptions.push(publication_id);
                                                            }
                                                        }
                                                    }
                                                },
                                            }
                                            " {publication.name}"
                                        }
                                    }
                                }
                            },
                            Some(Err(err)) => rsx! {
                                p { class: "help is-danger", "Failed to fetch publications: {err}" }
                            },
                            None => rsx! { Loading {} },
                        }
                    }
                    div {
                        class: "field is-grouped is-grouped-centered",
                        div {
                            class: "control",
                            onclick: close,
                            button { class: "button is-light is-soft", "Cancel" }
                        }
                        div {
                            class: "control",
                            onclick: save,
                            button {
                                class: "button is-primary",
                                class: if is_loading() { "is-loading" },
                                disabled: !name.valid(),
                                "Save"
                            }
                        }
                    }
                }
            },
        }
    }
}

enum CustomerDialog {
    None,
    Add {
        name: FieldValue<domain::Name>,
        address: FieldValue<String>,
        phone: FieldValue<String>,
        subscriptions: Vec<domain::PublicationID>,
    },
    Edit {
        id: domain::CustomerID,
        name: FieldValue<domain::Name>,
        address: FieldValue<String>,
        phone: FieldValue<String>,
        subscriptions: Vec<domain::PublicationID>,
    },
}

#[component]
fn DeliverySummary() -> Element {
    let summary = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_delivery_summary().await
    });

    rsx! {
        Title { title: "Monthly Delivery Summary" }
        match &*summary.read() {
            Some(Ok(entries)) => rsx! {
                if entries.is_empty() {
                    NoData {}
                } else {
                    Table {
                        head: vec![
                            rsx! { "Customer Name" },
                            rsx! { "Publications Delivered" },
                        ],
                        body: entries.iter().map(|entry| vec![
                            rsx! { "{entry.name}" },
                            rsx! { "{entry.publications_delivered}" },
                        ]).collect::<Vec<_>>(),
                    }
                    Container {
                        has_text_centered: true,
                        PrintButton { label: "Print summary" }
                    }
                }
            },
            Some(Err(domain::ReadError::Storage(domain::StorageError::NoConnection))) => rsx! {
                NoConnection {}
            },
            Some(Err(err)) => rsx! {
                ErrorMessage { message: "Failed to fetch delivery summary: {err}" }
            },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
fn Bills() -> Element {
    let bills = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_bills().await
    });

    rsx! {
        Title { title: "Customer Bills" }
        match &*bills.read() {
            Some(Ok(bills)) => rsx! {
                if bills.is_empty() {
                    NoData {}
                } else {
                    for bill in bills.clone() {
                        WhiteBox {
                            h1 { class: "title is-6", "{bill.customer_name}" }
                            Table {
                                head: vec![
                                    rsx! { "Publication" },
                                    rsx! { "Copies" },
                                    rsx! { "Cost" },
                                ],
                                body: bill.lines.iter().map(|line| vec![
                                    rsx! { "{line.name}" },
                                    rsx! { "{line.copies}" },
                                    rsx! { "{line.cost}" },
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
fn RecordPayment() -> Element {
    let customers = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_customers().await
    });
    let mut customer_id = use_signal(|| None::<domain::CustomerID>);
    let mut amount = use_signal(FieldValue::<domain::Money>::default);
    let mut cheque_number = use_signal(String::new);
    let mut receipt = use_signal(|| None::<domain::PaymentReceipt>);
    let mut error = use_signal(String::new);
    let mut is_loading = use_signal(|| false);

    let submit = move |_| async move {
        let (Some(customer_id), Ok(amount_value)) =
            (*customer_id.read(), amount.read().validated.clone())
        else {
            return;
        };
        *is_loading.write() = true;
        error.write().clear();
        let cheque = cheque_number.read().trim().to_string();
        let result = DOMAIN_SERVICE
            .read()
            .record_payment(domain::PaymentDraft {
                customer_id,
                amount: amount_value,
                cheque_number: if cheque.is_empty() { None } else { Some(cheque) },
            })
            .await;
        *is_loading.write() = false;
        match result {
            Ok(payment_receipt) => {
                *receipt.write() = Some(payment_receipt);
                *amount.write() = FieldValue::default();
                cheque_number.write().clear();
            }
            Err(err) => {
                *error.write() = format!("Failed to record payment: {err}");
            }
        }
    };

    rsx! {
        Title { title: "Record Payment" }
        Container {
            match &*customers.read() {
                Some(Ok(customers)) => rsx! {
                    SelectField {
                        label: "Customer",
                        options: {
                            let mut options = vec![rsx! {
                                SelectOption {
                                    text: "Select a customer",
                                    value: "",
                                    selected: customer_id.read().is_none(),
                                }
                            }];
                            options.extend(customers.iter().map(|customer| rsx! {
                                SelectOption {
                                    text: customer.name.to_string(),
                                    value: (*customer.id).to_string(),
                                    selected: *customer_id.read() == Some(customer.id),
                                }
                            }));
                            options
                        },
                        has_changed: false,
                        onchange: {
                            let customers = customers.clone();
                            move |event: FormEvent| {
                                let value = event.value();
                                *customer_id.write() = customers
                                    .iter()
                                    .find(|customer| (*customer.id).to_string() == value)
                                    .map(|customer| customer.id);
                            }
                        },
                    }
                },
                Some(Err(err)) => rsx! {
                    ErrorMessage { message: "Failed to fetch customers: {err}" }
                },
                None => rsx! { Loading {} },
            }
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
                        disabled: customer_id.read().is_none() || !amount.read().valid(),
                        onclick: submit,
                        "Record payment"
                    }
                }
            }
            if let Some(receipt) = receipt.read().clone() {
                Message {
                    color: Color::Success,
                    "Payment recorded successfully"
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
    }
}

#[component]
fn Withhold() -> Element {
    let customers = use_resource(|| async {
        let _ = DATA_CHANGED.read();
        DOMAIN_SERVICE.read().get_customers().await
    });
    let mut customer_id = use_signal(|| None::<domain::CustomerID>);
    let mut start = use_signal(FieldValue::<chrono::NaiveDate>::default);
    let mut end = use_signal(FieldValue::<chrono::NaiveDate>::default);
    let mut status = use_signal(|| None::<Result<(), String>>);
    let mut is_loading = use_signal(|| false);

    let submit = move |_| async move {
        let (Some(customer_id), Ok(start), Ok(end)) = (
            *customer_id.read(),
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
            .request_withhold(customer_id, withhold)
            .await;
        *is_loading.write() = false;
        *status.write() = Some(match result {
            Ok(()) => Ok(()),
            Err(err) => Err(format!("Failed to withhold subscription: {err}")),
        });
    };

    rsx! {
        Title { title: "Withhold Subscription" }
        Container {
            match &*customers.read() {
                Some(Ok(customers)) => rsx! {
                    SelectField {
                        label: "Customer",
                        options: {
                            let mut options = vec![rsx! {
                                SelectOption {
                                    text: "Select a customer",
                                    value: "",
                                    selected: customer_id.read().is_none(),
                                }
                            }];
                            options.extend(customers.iter().map(|customer| rsx! {
                                SelectOption {
                                    text: customer.name.to_string(),
                                    value: (*customer.id).to_string(),
                                    selected: *customer_id.read() == Some(customer.id),
                                }
                            }));
                            options
                        },
                        has_changed: false,
                        onchange: {
                            let customers = customers.clone();
                            move |event: FormEvent| {
                                let value = event.value();
                                *customer_id.write() = customers
                                    .iter()
                                    .find(|customer| (*customer.id).to_string() == value)
                                    .map(|customer| customer.id);
                            }
                        },
                    }
                },
                Some(Err(err)) => rsx! {
                    ErrorMessage { message: "Failed to fetch customers: {err}" }
                },
                None => rsx! { Loading {} },
            }
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
                        "Subscription withheld successfully"
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
                        disabled: customer_id.read().is_none()
                            || !start.read().valid()
                            || !end.read().valid(),
                        onclick: submit,
                        "Withhold delivery"
                    }
                }
            }
        }
    }
}
