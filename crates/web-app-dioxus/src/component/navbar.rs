use dioxus::prelude::*;
use log::error;

use gazette_domain::SessionService;
use gazette_web_app::{self as web_app, SettingsService};

use crate::{
    DOMAIN_SERVICE, NOTIFICATIONS, Route, WEB_APP_SERVICE,
    component::element::{Color, Dialog, ErrorMessage, Icon, Loading},
};

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let mut settings_visible = use_signal(|| false);
    let settings = use_resource(|| async { WEB_APP_SERVICE.read().get_settings().await });
    let navigator = use_navigator();

    use_effect(move || {
        if let Some(Ok(settings)) = &*settings.read() {
            apply_theme(settings.current_theme());
        }
    });

    let session = DOMAIN_SERVICE.read().session().cloned();

    let page_title = match use_route::<Route>() {
        Route::Root {} | Route::Login {} | Route::NotFound { .. } => "Gazette".to_string(),
        Route::Manager {} => "Manager Dashboard".to_string(),
        Route::Deliverer {} => "Deliverer Dashboard".to_string(),
        Route::User {} => {
            if let Some(ref session) = session {
                format!("Welcome, {}", session.username)
            } else {
                "Subscriber Dashboard".to_string()
            }
        }
    };

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    div {
                        class: "navbar-item is-size-5",
                        Icon { name: "newspaper", px: 2 }
                        "{page_title}"
                    }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *settings_visible.write() = true;
                                *menu_visible.write() = false;
                            },
                            Icon { name: "gear", px: 5 }
                            "Settings"
                        }
                        if let Some(session) = session {
                            a {
                                class: "navbar-item",
                                onclick: move |_| {
                                    let result = DOMAIN_SERVICE.write().logout();
                                    match result {
                                        Ok(()) => {
                                            navigator.push(Route::Root {});
                                        }
                                        Err(err) => {
                                            NOTIFICATIONS
                                                .write()
                                                .push(format!("Failed to log out: {err}"));
                                        }
                                    }
                                    *menu_visible.write() = false;
                                },
                                Icon { name: "sign-out-alt", px: 5 }
                                "Log out ({session.username})"
                            }
                        }
                    }
                }
            }
        }

        if *settings_visible.read() {
            Settings { settings, settings_visible }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn Settings(
    settings: Resource<Result<web_app::Settings, String>>,
    settings_visible: Signal<bool>,
) -> Element {
    match settings.read().clone() {
        Some(Ok(current)) => rsx! {
            Dialog {
                color: Color::Primary,
                title: rsx! { "Settings" },
                close_event: move |_| {
                    *settings_visible.write() = false;
                },
                p {
                    class: "mb-5",
                    h1 { class: "subtitle", "Theme" }
                    div {
                        class: "field has-addons",
                        for (icon, label, theme) in [
                            ("sun", "Light", web_app::Theme::Light),
                            ("moon", "Dark", web_app::Theme::Dark),
                            ("desktop", "System", web_app::Theme::System),
                        ] {
                            p {
                                class: "control",
                                button {
                                    class: "button",
                                    class: if current.theme == theme { "is-link" },
                                    onclick: {
                                        let mut settings = settings;
                                        move |_| {
                                            async move {
                                                let updated = web_app::Settings { theme };
                                                if let Err(err) =
                                                    WEB_APP_SERVICE.write().set_settings(updated).await
                                                {
                                                    NOTIFICATIONS.write().push(format!(
                                                        "Failed to save settings: {err}"
                                                    ));
                                                }
                                                settings.restart();
                                            }
                                        }
                                    },
                                    Icon { name: icon, is_small: true }
                                    span { "{label}" }
                                }
                            }
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            ErrorMessage { message: "Failed to get settings: {err}" }
        },
        None => rsx! { Loading {} },
    }
}

fn apply_theme(theme: web_app::Theme) {
    let value = match theme {
        web_app::Theme::Dark => "dark",
        web_app::Theme::Light | web_app::Theme::System => "light",
    };
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        if element.set_attribute("data-theme", value).is_err() {
            error!("failed to apply theme");
        }
    }
}
