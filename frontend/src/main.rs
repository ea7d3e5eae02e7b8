use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod auth;
mod config;
mod content;
mod hooks;
mod models;
mod showcase;
mod components {
    pub mod cards;
    pub mod carousel;
    pub mod reveal_on_scroll;
    pub mod search_bar;
    pub mod stagger_text;
    pub mod typed_text;
}
mod pages {
    pub mod account;
    pub mod competitions;
    pub mod talents;
    pub mod welcome;
    pub mod workshops;
}

use pages::{
    account::{Login, NotFound, Register},
    competitions::Competitions,
    talents::Talents,
    welcome::Welcome,
    workshops::Workshops,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Welcome,
    #[at("/talents")]
    Talents,
    #[at("/competitions")]
    Competitions,
    #[at("/workshops")]
    Workshops,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Welcome => {
            info!("Rendering Welcome page");
            html! { <Welcome /> }
        },
        Route::Talents => {
            info!("Rendering Talents page");
            html! { <Talents /> }
        },
        Route::Competitions => {
            info!("Rendering Competitions page");
            html! { <Competitions /> }
        },
        Route::Workshops => {
            info!("Rendering Workshops page");
            html! { <Workshops /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::Register => {
            info!("Rendering Register page");
            html! { <Register /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub logged_in: bool,
    pub on_logout: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { logged_in, on_logout } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    let scroll_top = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > config::NAV_SCROLL_THRESHOLD);
                });

                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_ok()
                {
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                }
            } else {
                Box::new(|| ())
            };

            move || destructor()
        }, ());
    }

    let handle_logout = {
        let on_logout = on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Welcome} classes="nav-logo">
                    {"youthstage"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Talents} classes="nav-link">
                            {"Talents"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Competitions} classes="nav-link">
                            {"Competitions"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Workshops} classes="nav-link">
                            {"Workshops"}
                        </Link<Route>>
                    </div>
                    {
                        if *logged_in {
                            html! {
                                <button onclick={
                                    let close = close_menu.clone();
                                    let logout = handle_logout.clone();
                                    Callback::from(move |e: MouseEvent| {
                                        close.emit(e);
                                        logout.emit(());
                                    })
                                } class="nav-logout-button">
                                    {"Logout"}
                                </button>
                            }
                        } else {
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={Route::Login} classes="nav-login-button">
                                        {"Login"}
                                    </Link<Route>>
                                </div>
                            }
                        }
                    }
                </div>
            </div>
            <style>{NAV_CSS}</style>
        </nav>
    }
}

const NAV_CSS: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 100;
    transition: background 0.3s ease;
}
.top-nav.scrolled {
    background: rgba(26, 26, 26, 0.95);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    color: #fff;
    font-weight: 700;
    font-size: 1.4rem;
    text-decoration: none;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link,
.nav-login-button {
    color: #fff;
    text-decoration: none;
}
.nav-login-button,
.nav-logout-button {
    border: 1px solid rgba(126, 178, 255, 0.6);
    border-radius: 999px;
    padding: 0.4rem 1.2rem;
    background: transparent;
    color: #fff;
    cursor: pointer;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}
@media (max-width: 768px) {
    .burger-menu { display: flex; }
    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        background: rgba(26, 26, 26, 0.98);
        padding: 1.5rem;
    }
    .nav-right.mobile-menu-open { display: flex; }
}
"#;


#[function_component]
fn App() -> Html {
    let logged_in = use_state(auth::is_logged_in);
    let handle_logout = Callback::from(|_| auth::logout());

    html! {
        <BrowserRouter>
            <Nav logged_in={*logged_in} on_logout={handle_logout} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
