use contracts::system::auth::{FormErrors, FormField, LoginForm};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance, ButtonType, Card, Checkbox, Input, InputType};

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(FormErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };
        let found = form.validate();
        errors.set(found);

        if let Some(user) = form.session_user() {
            session.sign_in(user);
            navigate("/majors", Default::default());
        }
    };

    let error_of = move |field: FormField| {
        move || {
            errors.with(|e| {
                e.get(field)
                    .map(|msg| view! { <p class="form-error">{msg}</p> })
            })
        }
    };

    view! {
        <PageFrame page_id="sys_auth--login" category=PAGE_CAT_SYSTEM class="auth-page">
            <div class="auth-page__intro">
                <h1>"Welcome Back"</h1>
                <p>"Continue your journey with DegreeCompass"</p>
            </div>

            <Card class="auth-card">
                <h2>"Log in to Your Account"</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Email"</label>
                        <Input value=email input_type=InputType::Email placeholder="you@example.com" />
                        {error_of(FormField::Email)}
                    </div>

                    <div class="form-group">
                        <label>"Password"</label>
                        <Input value=password input_type=InputType::Password />
                        {error_of(FormField::Password)}
                    </div>

                    <div class="form-row">
                        <Checkbox checked=remember_me label="Remember me" />
                        <a href="#" class="muted">"Forgot your password?"</a>
                    </div>

                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        "Log in"
                    </Button>
                </form>

                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/user/register">"Sign up"</A>
                </p>
            </Card>
        </PageFrame>
    }
}
