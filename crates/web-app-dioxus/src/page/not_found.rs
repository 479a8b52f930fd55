use dioxus::prelude::*;

use crate::component::element::ErrorMessage;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        ErrorMessage { message: "Page /{route.join(\"/\")} not found" }
    }
}
