pub mod dashboard;
pub mod developers;
pub mod games;

pub use dashboard::AdminDashboard;
pub use developers::DeveloperManagement;
pub use games::GameManagement;

use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Dashboard,
    Games,
    Developers,
}

#[component]
pub fn AdminTabs(active_tab: AdminTab) -> Element {
    rsx!(
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6",
            Link {
                to: Route::AdminDashboard {},
                role: "tab",
                class: if active_tab == AdminTab::Dashboard { "tab tab-active" } else { "tab" },
                "Dashboard"
            }
            Link {
                to: Route::GameManagement {},
                role: "tab",
                class: if active_tab == AdminTab::Games { "tab tab-active" } else { "tab" },
                "Games"
            }
            Link {
                to: Route::DeveloperManagement {},
                role: "tab",
                class: if active_tab == AdminTab::Developers { "tab tab-active" } else { "tab" },
                "Developers"
            }
        }
    )
}
