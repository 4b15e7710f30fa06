//! Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::ApiClient;
use crate::config::{API_BASE_URL, LOGIN_PATH};
use crate::context::use_app_context;
use crate::session::use_navigator;
use crate::state::{ModalKind, ModalState};
use crate::validation::RegisterForm;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let navigator = use_navigator();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match RegisterForm::new(&name.get(), &email.get(), &password.get()).into_request() {
            Ok(request) => request,
            Err(message) => {
                ctx.validation_error(message);
                return;
            }
        };

        set_loading.set(true);
        spawn_local(async move {
            let result = ApiClient::new(API_BASE_URL).register(&request).await;
            set_loading.set(false);
            match result {
                Ok(customer) => {
                    web_sys::console::log_1(&format!("[REGISTER] Created customer {}", customer.id).into());
                    ctx.success_then(
                        "Cliente criado com sucesso! Você pode logar com suas credenciais.",
                        move || navigator.go(LOGIN_PATH),
                    );
                }
                Err(err) => {
                    ctx.show(ModalState::notify(ModalKind::Error, "Falha no Cadastro", err.message()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-heading">
                    <span class="brand-icon large accent">"📦"</span>
                    <h1>"Criar Conta"</h1>
                    <p class="muted">"Entre para a Shipping hoje"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Nome"</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="João Silva"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

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
                    <p class="hint">"Senha deve ter no mínimo 6 caracteres"</p>

                    <button type="submit" class="btn primary wide" disabled=move || loading.get()>
                        {move || if loading.get() { "Criando conta..." } else { "Criar Conta" }}
                    </button>
                </form>

                <div class="divider"><span>"Já tem uma conta?"</span></div>

                <A href=LOGIN_PATH attr:class="btn outline wide">"← Login"</A>
            </div>
        </div>
    }
}
