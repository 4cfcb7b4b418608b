use contracts::system::auth::{FormErrors, FormField, RegisterForm};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance, ButtonType, Card, Input, InputType};

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_session;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        errors.set(form.validate());

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
        <PageFrame page_id="sys_auth--register" category=PAGE_CAT_SYSTEM class="auth-page">
            <div class="auth-page__intro">
                <h1>"Begin Your Journey"</h1>
                <p>"Discover your perfect major with DegreeCompass"</p>
            </div>

            <Card class="auth-card">
                <h2>"Create an Account"</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Full Name"</label>
                        <Input value=name />
                        {error_of(FormField::Name)}
                    </div>

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

                    <div class="form-group">
                        <label>"Confirm Password"</label>
                        <Input value=confirm_password input_type=InputType::Password />
                        {error_of(FormField::ConfirmPassword)}
                    </div>

                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        "Register"
                    </Button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/user/login">"Log in"</A>
                </p>
            </Card>
        </PageFrame>
    }
}
