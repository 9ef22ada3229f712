use common::error::ApiError;
use common::forms::{submit, LoginForm};
use common::model::user::User;
use common::validation::FormErrors;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::users;
use crate::components::form_field::text_field;
use crate::storage;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<User>,
}

pub enum Msg {
    Email(String),
    Password(String),
    Submit,
    Done(Result<User, ApiError>),
}

/// Sign-in gate shown while no valid token is stored.
pub struct LoginPage {
    form: LoginForm,
    errors: FormErrors,
    failure: Option<String>,
    busy: bool,
}

async fn sign_in(request: common::requests::LoginRequest) -> Result<User, ApiError> {
    let session = users::login(request).await?;
    storage::set_auth_token(&session.token).map_err(|err| ApiError::Config(err.to_string()))?;
    match session.user {
        Some(user) => Ok(user),
        None => users::me().await,
    }
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LoginForm::default(),
            errors: FormErrors::new(),
            failure: None,
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Email(email) => self.form.email = email,
            Msg::Password(password) => self.form.password = password,
            Msg::Submit => {
                let link = ctx.link().clone();
                match submit(&self.form, |request| {
                    spawn_local(async move { link.send_message(Msg::Done(sign_in(request).await)) })
                }) {
                    Ok(()) => {
                        self.errors = FormErrors::new();
                        self.failure = None;
                        self.busy = true;
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            Msg::Done(Ok(user)) => {
                self.busy = false;
                log::info!("Signed in as {}", user.email);
                ctx.props().on_login.emit(user);
            }
            Msg::Done(Err(err)) => {
                self.busy = false;
                self.failure = Some(match err {
                    ApiError::Unauthorized => "Invalid email or password".to_string(),
                    other => other.to_string(),
                });
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-screen">
                <form class="console-form login-form" {onsubmit}>
                    <h2>{"Sign in"}</h2>
                    if let Some(failure) = &self.failure {
                        <div class="error-banner" role="alert">{ failure.clone() }</div>
                    }
                    { text_field("Email", "email", &self.form.email, self.errors.get("email"), link.callback(Msg::Email)) }
                    { text_field("Password", "password", &self.form.password, self.errors.get("password"),
                        link.callback(Msg::Password)) }
                    <button type="submit" class="btn btn-primary" disabled={self.busy}>
                        { if self.busy { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        }
    }
}
