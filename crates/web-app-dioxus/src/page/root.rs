use dioxus::prelude::*;

use gazette_domain::{self as domain, SessionService};

use crate::{DOMAIN_SERVICE, Route};

#[component]
pub fn Root() -> Element {
    let session = DOMAIN_SERVICE.read().session().cloned();
    let navigator = use_navigator();

    match session {
        Some(session) => {
            navigator.push(Route::from(domain::home_destination(session.role)));
        }
        None => {
            navigator.push(Route::Login {});
        }
    }

    rsx! {}
}
