use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod pages {
    pub mod home;
    pub mod termsprivacy;
}
mod components {
    pub mod ev_models;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod reveal;
    pub mod stations;
    pub mod testimonials;
    pub mod why_electric;
}
mod auth {
    pub mod registration;
    pub mod signup;
}

use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};

use auth::{
    signup::login::Login,
    signup::register::Register,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::Register => {
            info!("Rendering Register page");
            html! { <Register /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
    }
}


const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Vehicles", "/#vehicles"),
    ("Stations", "/#stations"),
    ("How It Works", "/#how-it-works"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 20);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

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
            <style>
            {r#".top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                transition: all 0.5s ease;
                background: transparent;
            }
            .top-nav.scrolled {
                background: rgba(18, 18, 18, 0.85);
                backdrop-filter: blur(12px);
                border-bottom: 1px solid rgba(52, 211, 153, 0.15);
                box-shadow: 0 2px 16px rgba(0, 0, 0, 0.3);
            }
            .nav-content {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
                height: 5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                text-decoration: none;
                color: #fff;
                font-size: 1.25rem;
                font-weight: 700;
            }
            .nav-logo .bolt {
                width: 40px;
                height: 40px;
                border-radius: 12px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.2rem;
            }
            .nav-logo .brand-accent {
                background: linear-gradient(45deg, #34D399, #2DD4BF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .nav-right {
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-link {
                color: rgba(255, 255, 255, 0.7);
                text-decoration: none;
                font-size: 0.9rem;
                font-weight: 500;
                transition: color 0.3s ease;
            }
            .nav-link:hover {
                color: #34D399;
            }
            .nav-login-link {
                color: #fff;
                text-decoration: none;
                font-size: 0.9rem;
                padding: 0.5rem 1.2rem;
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 8px;
                transition: border-color 0.3s ease;
            }
            .nav-login-link:hover {
                border-color: #34D399;
            }
            .nav-cta {
                color: #053527;
                text-decoration: none;
                font-size: 0.9rem;
                font-weight: 700;
                padding: 0.5rem 1.2rem;
                border-radius: 8px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                transition: opacity 0.3s ease;
            }
            .nav-cta:hover {
                opacity: 0.9;
            }
            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
                cursor: pointer;
                padding: 0.5rem;
            }
            .burger-menu span {
                width: 24px;
                height: 2px;
                background: #fff;
                border-radius: 2px;
            }
            @media (max-width: 768px) {
                .burger-menu {
                    display: flex;
                }
                .nav-right {
                    display: none;
                }
                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    position: absolute;
                    top: 5rem;
                    left: 0;
                    right: 0;
                    background: rgba(18, 18, 18, 0.97);
                    border-bottom: 1px solid rgba(52, 211, 153, 0.15);
                    padding: 1.5rem;
                    gap: 1.2rem;
                }
            }"#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="bolt">{"⚡"}</span>
                    <span>{"EV"}<span class="brand-accent">{"Portal"}</span></span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { NAV_LINKS.iter().map(|(name, href)| {
                        html! {
                            <a class="nav-link" href={*href} onclick={close_menu.clone()}>
                                {*name}
                            </a>
                        }
                    }).collect::<Html>() }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Login} classes="nav-login-link">
                            {"Login"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Register} classes="nav-cta">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
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
