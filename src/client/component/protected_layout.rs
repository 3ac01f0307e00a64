use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Header},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Guards every admin route. Non-admins are alerted and sent home.
#[component]
pub fn RequiresAdmin() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let initializing = matches!(&*auth.read(), AuthState::Initializing);
    let is_admin = auth.is_admin();

    use_effect(use_reactive!(|(initializing, is_admin)| {
        if !initializing && !is_admin {
            #[cfg(feature = "web")]
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Admin access required");
            }
            nav.replace(Route::Home {});
        }
    }));

    rsx! {
        Header {}
        if is_admin {
            Outlet::<Route> {}
        } else {
            LoadingPage {}
        }
    }
}
