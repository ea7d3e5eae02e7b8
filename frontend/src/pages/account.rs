use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

// Sign-in and sign-up live in the external auth flow; these routes only
// keep the welcome page's links from dead-ending.

#[derive(Properties, PartialEq)]
struct AccountNoticeProps {
    title: AttrValue,
    message: AttrValue,
}

#[function_component(AccountNotice)]
fn account_notice(props: &AccountNoticeProps) -> Html {
    html! {
        <div class="account-notice">
            <h1>{props.title.clone()}</h1>
            <p>{props.message.clone()}</p>
            <Link<Route> to={Route::Welcome} classes="text-link">{"← Back to home"}</Link<Route>>
            <style>
                {r#"
                .account-notice {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: #fff;
                    background: #1a1a1a;
                    padding: 2rem;
                    text-align: center;
                }
                .account-notice p { color: #999; }
                .account-notice .text-link { color: #7EB2FF; text-decoration: none; }
                "#}
            </style>
        </div>
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <AccountNotice title="Log in" message="Sign-in opens in our secure account portal." />
    }
}

#[function_component(Register)]
pub fn register() -> Html {
    html! {
        <AccountNotice title="Join for free" message="Create your profile in our secure account portal." />
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <AccountNotice title="Page not found" message="This stage is empty." />
    }
}
