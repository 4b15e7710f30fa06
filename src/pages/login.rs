//! Login Page

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::config::{API_BASE_URL, DASHBOARD_PATH, LOGIN_REDIRECT_DELAY_MS, REGISTER_PATH};
use crate::context::use_app_context;
use crate::session::{start_session, use_navigator, BrowserStorage, SessionCheck};
use crate::state::{ModalKind, ModalState};
use crate::validation::LoginForm;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let navigator = use_navigator();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match LoginForm::new(&email.get(), &password.get()).into_request() {
            Ok(request) => request,
            Err(message) => {
                ctx.validation_error(message);
                return;
            }
        };

        set_loading.set(true);
        spawn_local(async move {
            match ApiClient::new(API_BASE_URL).login(&request).await {
                Ok(response) => {
                    if let SessionCheck::Redirect = start_session(&BrowserStorage, &response.token, Utc::now().timestamp()) {
                        web_sys::console::error_1(&"[LOGIN] Issued token has no usable customer id".into());
                    }
                    set_loading.set(false);
                    ctx.show(ModalState::notify(ModalKind::Success, "Sucesso!", "Bem-vindo(a)!"));
                    TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                    ctx.show(ModalState::Closed);
                    navigator.go(DASHBOARD_PATH);
                }
                Err(err) => {
                    set_loading.set(false);
                    ctx.show(ModalState::notify(ModalKind::Error, "Falha no Login", err.message()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <span class="brand-icon large">"📦"</span>
                    <h1>"Shipping"</h1>
                    <p class="muted">"Faça login com sua conta"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="seuemail@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Senha"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <button type="submit" class="btn primary wide" disabled=move || loading.get()>
                        {move || if loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="divider"><span>"Ou"</span></div>

                <A href=REGISTER_PATH attr:class="btn outline wide">"Criar nova conta"</A>
            </div>
        </div>
    }
}
