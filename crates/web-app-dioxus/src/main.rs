#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use dioxus::prelude::*;
use log::error;

use gazette_domain::{self as domain};
use gazette_storage as storage;
use gazette_web_app as web_app;

use component::{
    element::{Color, Dialog},
    navbar::Navbar,
};
use page::{
    deliverer::Deliverer, login::Login, manager::Manager, not_found::NotFound, root::Root,
    user::User,
};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/manager")]
    Manager {},
    #[route("/deliverer")]
    Deliverer {},
    #[route("/user")]
    User {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<domain::Destination> for Route {
    fn from(value: domain::Destination) -> Self {
        match value {
            domain::Destination::Login => Route::Login {},
            domain::Destination::Manager => Route::Manager {},
            domain::Destination::Deliverer => Route::Deliverer {},
            domain::Destination::User => Route::User {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static DOMAIN_SERVICE: GlobalSignal<
    domain::Service<storage::cached_rest::CachedREST<storage::rest::GlooNetSendRequest>>,
> = Signal::global(|| domain::Service::new(storage::cached_rest::CachedREST::new()));
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::local_storage::LocalStorage>> =
    Signal::global(|| web_app::Service::new(storage::local_storage::LocalStorage));
static NOTIFICATIONS: GlobalSignal<Vec<String>> = Signal::global(Vec::new);
static DATA_CHANGED: GlobalSignal<usize> = Signal::global(|| 0);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(storage::local_storage::LocalStorage);
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
            Notification {}
        }
    }
}

#[component]
fn Notification() -> Element {
    let notification = NOTIFICATIONS.read().last().cloned();

    rsx! {
        if let Some(message) = notification {
            Dialog {
                color: Color::Danger,
                title: rsx! { "Error" },
                close_event: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                div {
                    class: "block",
                    "{message}"
                }
                div {
                    class: "field is-grouped is-grouped-centered",
                    div {
                        class: "control",
                        button {
                            class: "button is-danger",
                            onclick: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

/// Applies the routing policy to the current page.
///
/// Evaluates to the session when the destination is allowed; otherwise pushes
/// the redirect target and returns from the component.
#[macro_export]
macro_rules! ensure_route {
    ($destination: expr) => {{
        use gazette_domain::SessionService;
        let session = $crate::DOMAIN_SERVICE.read().session().cloned();
        if let gazette_domain::RouteDecision::Redirect(destination) =
            gazette_domain::route_decision(session.as_ref(), $destination)
        {
            navigator().push($crate::Route::from(destination));
            return rsx! {};
        }
        session
    }};
}

fn signal_changed_data() {
    *DATA_CHANGED.write() += 1;
}
