use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaGamepad, FaKey},
    Icon,
};

use crate::client::{
    component::{page::LoadingPage, ErrorAlert, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::{
    client::api::auth::{login, register, session_token},
    model::user::{LoginDto, RegisterDto},
};

/// Marker the identity-provider callback appends to the login redirect.
const SSO_COMPLETE: &str = "1";

#[component]
pub fn Login(sso: String) -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Handle redirect for authenticated users
    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(Route::Home {});
        }
    });

    // Returning from the identity provider; trade the session for a token
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(sso)| {
        if sso != SSO_COMPLETE {
            return;
        }
        spawn(async move {
            match session_token().await {
                Ok(dto) => {
                    if let Err(e) = auth_context.login(&dto.token) {
                        error.set(Some(e.message));
                    }
                }
                Err(e) => error.set(Some(e.message)),
            }
        });
    }));

    #[cfg(not(feature = "web"))]
    let _ = &sso;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if username().trim().is_empty() || password().is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = LoginDto {
                username: username().trim().to_string(),
                password: password(),
            };
            let result = match login(&payload).await {
                Ok(dto) => auth_context.login(&dto.token),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error.set(Some(e.message));
            }
            submitting.set(false);
        });
    };

    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::Anonymous => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-4",
                        Icon { width: 96, height: 96, icon: FaGamepad }
                        p { class: "text-2xl", {SITE_NAME} }
                    }
                    form {
                        class: "flex flex-col gap-3 w-full max-w-sm",
                        onsubmit: on_submit,
                        input {
                            class: "input input-bordered",
                            placeholder: "Username",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered",
                            placeholder: "Password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            "Sign in"
                        }
                        if let Some(message) = error() {
                            ErrorAlert { message }
                        }
                    }
                    div {
                        class: "flex flex-col items-center gap-2",
                        a {
                            href: "/api/auth/login",
                            div {
                                class: "btn btn-outline flex gap-2 items-center",
                                Icon { width: 20, height: 20, icon: FaKey }
                                p { "Sign in with single sign-on" }
                            }
                        }
                        Link {
                            to: Route::Register { admin_code: String::new() },
                            class: "link text-sm",
                            "Create an account"
                        }
                    }
                }
            },
        }
    }
}

#[component]
pub fn Register(admin_code: String) -> Element {
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut code = use_signal(|| admin_code.clone());
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if username().trim().is_empty() || password().is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let admin_code = code().trim().to_string();
            let payload = RegisterDto {
                username: username().trim().to_string(),
                password: password(),
                role: (!admin_code.is_empty()).then(|| "admin".to_string()),
                admin_code: (!admin_code.is_empty()).then_some(admin_code),
            };
            match register(&payload).await {
                Ok(_) => {
                    nav.push(Route::Login { sso: String::new() });
                }
                Err(e) => error.set(Some(e.message)),
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = nav;
    };

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center w-full h-full",
            p { class: "text-2xl", "Create an account" }
            form {
                class: "flex flex-col gap-3 w-full max-w-sm",
                onsubmit: on_submit,
                input {
                    class: "input input-bordered",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered",
                    placeholder: "Password",
                    autocomplete: "new-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Admin code (optional)",
                    value: "{code}",
                    oninput: move |evt| code.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: submitting(),
                    "Register"
                }
                if let Some(message) = error() {
                    ErrorAlert { message }
                }
            }
            Link {
                to: Route::Login { sso: String::new() },
                class: "link text-sm",
                "Already have an account?"
            }
        }
    }
}
