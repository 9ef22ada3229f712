//! Application shell: runtime config, login gate, auth context and
//! navigation between the console pages.

use std::rc::Rc;

use common::config::AppConfig;
use common::error::ApiError;
use common::model::user::User;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{client, config, users};
use crate::components::banner::loading_indicator;
use crate::context::AuthContext;
use crate::pages::builder::CampaignBuilder;
use crate::pages::campaign_form::CampaignFormPage;
use crate::pages::contacts::ContactsScreen;
use crate::pages::invitations::InvitationsScreen;
use crate::pages::login::LoginPage;
use crate::pages::outreach::OutreachScreen;
use crate::pages::resources::{ids, AuditLogsPage, CampaignsPage, DonationsPage, UsersPage, WithdrawalsPage};
use crate::pages::segments::SegmentsScreen;
use crate::storage;

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Campaigns,
    NewCampaign,
    EditCampaign(String),
    Builder,
    Segments,
    Contacts(Option<String>),
    Outreach,
    Invitations,
    Donations,
    Withdrawals,
    Users,
    AuditLogs,
}

impl Route {
    /// Entries of the side navigation, in display order.
    const MENU: [Route; 10] = [
        Route::Campaigns,
        Route::Builder,
        Route::Segments,
        Route::Contacts(None),
        Route::Outreach,
        Route::Invitations,
        Route::Donations,
        Route::Withdrawals,
        Route::Users,
        Route::AuditLogs,
    ];

    fn admin_only(&self) -> bool {
        matches!(self, Route::Withdrawals | Route::Users | Route::AuditLogs)
    }

    fn label(&self) -> &'static str {
        match self {
            Route::Campaigns | Route::NewCampaign | Route::EditCampaign(_) => "Campaigns",
            Route::Builder => "Page builder",
            Route::Segments => "Segments",
            Route::Contacts(_) => "Contacts",
            Route::Outreach => "Email outreach",
            Route::Invitations => "Invitations",
            Route::Donations => "Donations",
            Route::Withdrawals => "Withdrawals",
            Route::Users => "Users",
            Route::AuditLogs => "Audit log",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Route::Campaigns | Route::NewCampaign | Route::EditCampaign(_) => "campaign",
            Route::Builder => "web",
            Route::Segments => "groups",
            Route::Contacts(_) => "contacts",
            Route::Outreach => "mail",
            Route::Invitations => "share",
            Route::Donations => "volunteer_activism",
            Route::Withdrawals => "account_balance",
            Route::Users => "manage_accounts",
            Route::AuditLogs => "history",
        }
    }

    fn same_page(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

pub enum Session {
    Booting,
    SignedOut,
    SignedIn(Rc<User>),
}

pub enum Msg {
    ConfigLoaded(AppConfig),
    SessionChecked(Result<User, ApiError>),
    LoggedIn(User),
    Logout,
    Navigate(Route),
    CampaignRowAction(&'static str, String),
}

pub struct App {
    session: Session,
    route: Route,
    logout: Callback<()>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(config::load().await));
        });
        Self {
            session: Session::Booting,
            route: Route::Campaigns,
            logout: ctx.link().callback(|_| Msg::Logout),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                log::info!("API base URL: {}", config.api_base_url);
                client::configure(config);
                if storage::auth_token().is_some() {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::SessionChecked(users::me().await));
                    });
                } else {
                    self.session = Session::SignedOut;
                }
            }
            Msg::SessionChecked(Ok(user)) | Msg::LoggedIn(user) => {
                self.session = Session::SignedIn(Rc::new(user));
                self.route = Route::Campaigns;
            }
            Msg::SessionChecked(Err(err)) => {
                log::warn!("Stored session rejected: {err}");
                storage::clear_auth_token();
                self.session = Session::SignedOut;
            }
            Msg::Logout => {
                storage::clear_auth_token();
                self.session = Session::SignedOut;
            }
            Msg::Navigate(route) => {
                let admin = matches!(&self.session, Session::SignedIn(user) if user.is_admin());
                self.route = if route.admin_only() && !admin {
                    log::warn!("{} requires an administrator", route.label());
                    Route::Campaigns
                } else {
                    route
                };
            }
            Msg::CampaignRowAction(action, id) => {
                if action != ids::EDIT {
                    return false;
                }
                self.route = Route::EditCampaign(id);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.session {
            Session::Booting => loading_indicator(),
            Session::SignedOut => html! {
                <LoginPage on_login={ctx.link().callback(Msg::LoggedIn)} />
            },
            Session::SignedIn(user) => {
                let auth = AuthContext {
                    user: user.clone(),
                    logout: self.logout.clone(),
                };
                html! {
                    <ContextProvider<AuthContext> context={auth.clone()}>
                        <div class="console">
                            { self.sidebar(&auth, ctx.link()) }
                            <main class="console-main">{ self.page(ctx.link()) }</main>
                        </div>
                    </ContextProvider<AuthContext>>
                }
            }
        }
    }
}

impl App {
    fn sidebar(&self, auth: &AuthContext, link: &Scope<Self>) -> Html {
        let admin = auth.is_admin();
        html! {
            <nav class="console-nav">
                <div class="nav-user">
                    <strong>{ auth.user.name.clone() }</strong>
                    <span>{ auth.user.email.clone() }</span>
                </div>
                {
                    for Route::MENU.iter().filter(|route| admin || !route.admin_only()).map(|route| {
                        let target = route.clone();
                        let onclick = link.callback(move |_| Msg::Navigate(target.clone()));
                        html! {
                            <button class={classes!("nav-item", self.route.same_page(route).then_some("active"))} {onclick}>
                                <i class="material-icons">{ route.icon() }</i>
                                <span>{ route.label() }</span>
                            </button>
                        }
                    })
                }
                <button class="nav-item" onclick={auth.logout.reform(|_: MouseEvent| ())}>
                    <i class="material-icons">{"logout"}</i>
                    <span>{"Sign out"}</span>
                </button>
            </nav>
        }
    }

    fn page(&self, link: &Scope<Self>) -> Html {
        let to_campaigns = link.callback(|_: ()| Msg::Navigate(Route::Campaigns));
        match &self.route {
            Route::Campaigns => html! {
                <>
                    <div class="page-actions">
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::Navigate(Route::NewCampaign))}>
                            <i class="material-icons">{"add"}</i>{"New campaign"}
                        </button>
                    </div>
                    <CampaignsPage
                        on_navigate={link.callback(|(action, id): (&'static str, String)| Msg::CampaignRowAction(action, id))}
                    />
                </>
            },
            Route::NewCampaign => html! { <CampaignFormPage on_done={to_campaigns} /> },
            Route::EditCampaign(id) => html! {
                <CampaignFormPage key={id.clone()} campaign_id={Some(id.clone())} on_done={to_campaigns} />
            },
            Route::Builder => html! { <CampaignBuilder /> },
            Route::Segments => html! {
                <SegmentsScreen on_open_contacts={link.callback(|id| Msg::Navigate(Route::Contacts(Some(id))))} />
            },
            Route::Contacts(segment_id) => html! { <ContactsScreen segment_id={segment_id.clone()} /> },
            Route::Outreach => html! { <OutreachScreen /> },
            Route::Invitations => html! { <InvitationsScreen /> },
            Route::Donations => html! { <DonationsPage /> },
            Route::Withdrawals => html! { <WithdrawalsPage /> },
            Route::Users => html! { <UsersPage /> },
            Route::AuditLogs => html! { <AuditLogsPage /> },
        }
    }
}
