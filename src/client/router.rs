use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin};
use crate::client::route::{
    admin::{AdminDashboard, DeveloperManagement, GameManagement},
    GameDetail, Games, Home, Login, NotFound, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/games?:name&:genre&:tag&:developer&:language&:price_min&:price_max&:sort_by&:order&:sort&:page")]
    Games {
        name: String,
        genre: String,
        tag: String,
        developer: String,
        language: String,
        price_min: String,
        price_max: String,
        sort_by: String,
        order: String,
        sort: String,
        page: u64,
    },

    #[route("/games/:appid")]
    GameDetail { appid: i64 },

    #[route("/login?:sso")]
    Login { sso: String },

    #[route("/register?:admin_code")]
    Register { admin_code: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
    #[end_layout]

    #[layout(RequiresAdmin)]
    #[nest("/admin")]
        #[route("/")]
        AdminDashboard {},

        #[route("/games")]
        GameManagement {},

        #[route("/developers")]
        DeveloperManagement {},
}

impl Route {
    /// The unfiltered catalog.
    pub fn games() -> Self {
        Route::Games {
            name: String::new(),
            genre: String::new(),
            tag: String::new(),
            developer: String::new(),
            language: String::new(),
            price_min: String::new(),
            price_max: String::new(),
            sort_by: String::new(),
            order: String::new(),
            sort: String::new(),
            page: 1,
        }
    }
}
