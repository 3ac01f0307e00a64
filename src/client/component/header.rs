use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowRightToBracket, FaGamepad, FaRightFromBracket, FaUserShield},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthContext>();

    let username = auth.username();
    let is_admin = auth.is_admin();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 32, height: 32, icon: FaGamepad }
                    p { class: "md:text-xl text-wrap", {SITE_NAME} }
                }
            }
            Link {
                to: Route::games(),
                class: "btn btn-ghost",
                "Games"
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(username) = username {
                if is_admin {
                    Link {
                        to: Route::AdminDashboard {},
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon { width: 18, height: 18, icon: FaUserShield }
                        p { "Admin" }
                    }
                }
                span { class: "hidden sm:inline opacity-80", "{username}" }
                a {
                    href: "/api/auth/logout",
                    onclick: move |_| auth.logout(),
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon { width: 18, height: 18, icon: FaRightFromBracket }
                        p { "Logout" }
                    }
                }
            } else {
                Link {
                    to: Route::Login { sso: String::new() },
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon { width: 18, height: 18, icon: FaArrowRightToBracket }
                    p { "Login" }
                }
            }
        }
    })
}
