use dioxus::prelude::*;

use gazette_domain as domain;
use gazette_domain::SessionService;

use crate::{
    DOMAIN_SERVICE, Route,
    component::{
        element::{CenteredBlock, Color, Container, Message, Title},
        form::{FieldValue, FieldValueState, InputField, SelectField, SelectOption},
    },
    ensure_route,
};

#[component]
pub fn Login() -> Element {
    let _ = ensure_route!(domain::Destination::Login);
    let mut registering = use_signal(|| false);
    let mut username = use_signal(FieldValue::<domain::Username>::default);
    let mut password = use_signal(FieldValue::<domain::Password>::default);
    let mut role = use_signal(|| domain::Role::Manager);
    let mut error = use_signal(String::new);
    let mut is_loading = use_signal(|| false);
    let navigator = use_navigator();

    let submit = move |_| async move {
        let (Ok(username), Ok(password)) = (
            username.read().validated.clone(),
            password.read().validated.clone(),
        ) else {
            return;
        };
        *is_loading.write() = true;
        error.write().clear();
        let credentials = domain::Credentials { username, password };
        let result = if registering() {
            DOMAIN_SERVICE
                .write()
                .register(credentials, role())
                .await
                .map_err(|err| match err {
                    domain::RegistrationError::Conflict => String::from("Username already taken"),
                    domain::RegistrationError::Rejected => String::from("Registration failed"),
                    err => format!("Registration failed: {err}"),
                })
        } else {
            DOMAIN_SERVICE
                .write()
                .login(credentials)
                .await
                .map_err(|err| match err {
                    domain::LoginError::InvalidCredentials => String::from("Invalid credentials"),
                    err => format!("Login failed: {err}"),
                })
        };
        *is_loading.write() = false;
        match result {
            Ok(session) => {
                navigator.push(Route::from(domain::home_destination(session.role)));
            }
            Err(message) => {
                *error.write() = message;
            }
        }
    };

    rsx! {
        Container {
            div {
                class: "box",
                Title {
                    title: if registering() { "Create account" } else { "Sign in" },
                }
                InputField {
                    label: "Username",
                    value: username.read().input.clone(),
                    error: if let Err(err) = &username.read().validated { err.clone() },
                    has_changed: username.read().changed(),
                    oninput: move |event: FormEvent| {
                        let mut username = username.write();
                        username.input = event.value();
                        username.validated = domain::Username::new(&username.input)
                            .map_err(|err| err.to_string());
                    },
                }
                InputField {
                    label: "Password",
                    r#type: "password",
                    value: password.read().input.clone(),
                    error: if let Err(err) = &password.read().validated { err.clone() },
                    has_changed: password.read().changed(),
                    oninput: move |event: FormEvent| {
                        let mut password = password.write();
                        password.input = event.value();
                        password.validated = domain::Password::new(&password.input)
                            .map_err(|err| err.to_string());
                    },
                }
                if registering() {
                    SelectField {
                        label: "Role",
                        options: [domain::Role::Manager, domain::Role::Deliverer, domain::Role::User]
                            .iter()
                            .map(|r| rsx! {
                                SelectOption {
                                    text: r.to_string(),
                                    value: r.to_string(),
                                    selected: role() == *r,
                                }
                            })
                            .collect::<Vec<_>>(),
                        has_changed: false,
                        onchange: move |event: FormEvent| {
                            *role.write() = domain::Role::from(event.value().as_str());
                        },
                    }
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
                            disabled: !username.read().valid() || !password.read().valid(),
                            onclick: submit,
                            if registering() { "Create account" } else { "Sign in" }
                        }
                    }
                }
                CenteredBlock {
                    a {
                        onclick: move |_| {
                            *registering.write() = !registering();
                            error.write().clear();
                        },
                        if registering() {
                            "Already have an account? Sign in"
                        } else {
                            "Need an account? Register"
                        }
                    }
                }
            }
        }
    }
}
