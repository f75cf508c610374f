use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Find Stations", "/#stations"),
    ("EV Models", "/#vehicles"),
    ("How It Works", "/#how-it-works"),
];

const SOCIALS: &[(&str, &str)] = &[
    ("𝕗", "#"),
    ("𝕏", "#"),
    ("📷", "#"),
    ("in", "#"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
            {r#".site-footer {
                background: #0b1512;
                border-top: 1px solid rgba(52, 211, 153, 0.1);
                padding: 4rem 1.5rem 2rem;
            }
            .footer-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 2fr 1fr 1fr 1.5fr;
                gap: 3rem;
            }
            .footer-brand .nav-logo {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                text-decoration: none;
                color: #fff;
                font-size: 1.25rem;
                font-weight: 700;
                margin-bottom: 1.2rem;
            }
            .footer-brand .bolt {
                width: 40px;
                height: 40px;
                border-radius: 12px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.2rem;
            }
            .footer-brand .brand-accent {
                color: #34D399;
            }
            .footer-brand p {
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.9rem;
                line-height: 1.6;
                margin-bottom: 1.5rem;
            }
            .footer-socials {
                display: flex;
                gap: 0.8rem;
            }
            .footer-socials a {
                width: 38px;
                height: 38px;
                border-radius: 10px;
                background: rgba(255, 255, 255, 0.06);
                color: #fff;
                display: flex;
                align-items: center;
                justify-content: center;
                text-decoration: none;
                transition: background 0.3s ease;
            }
            .footer-socials a:hover {
                background: #34D399;
                color: #053527;
            }
            .footer-column h4 {
                color: #fff;
                font-size: 1rem;
                margin-bottom: 1.4rem;
            }
            .footer-column ul {
                list-style: none;
                padding: 0;
                margin: 0;
            }
            .footer-column li {
                margin-bottom: 0.9rem;
            }
            .footer-column a {
                color: rgba(255, 255, 255, 0.6);
                text-decoration: none;
                font-size: 0.9rem;
                transition: color 0.3s ease;
            }
            .footer-column a:hover {
                color: #34D399;
            }
            .footer-contact li {
                display: flex;
                align-items: center;
                gap: 0.7rem;
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.9rem;
            }
            .footer-bottom {
                max-width: 1200px;
                margin: 3rem auto 0;
                padding-top: 2rem;
                border-top: 1px solid rgba(255, 255, 255, 0.08);
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 1rem;
                flex-wrap: wrap;
                color: rgba(255, 255, 255, 0.5);
                font-size: 0.85rem;
            }
            @media (max-width: 900px) {
                .footer-grid {
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
            }"#}
            </style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="bolt">{"⚡"}</span>
                        <span>{"EV"}<span class="brand-accent">{"Portal"}</span></span>
                    </Link<Route>>
                    <p>
                        {"Powering the future of sustainable transportation. Find charging \
                          stations, compare EVs, and join the electric revolution."}
                    </p>
                    <div class="footer-socials">
                        { SOCIALS.iter().map(|(icon, href)| {
                            html! { <a href={*href}>{*icon}</a> }
                        }).collect::<Html>() }
                    </div>
                </div>
                <div class="footer-column">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { QUICK_LINKS.iter().map(|(name, href)| {
                            html! { <li><a href={*href}>{*name}</a></li> }
                        }).collect::<Html>() }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Support"}</h4>
                    <ul>
                        <li><a href="/#how-it-works">{"Help Center"}</a></li>
                        <li>
                            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        </li>
                    </ul>
                </div>
                <div class="footer-column footer-contact">
                    <h4>{"Contact Us"}</h4>
                    <ul>
                        <li>{"📍 123 Electric Ave, Green City, EC 12345"}</li>
                        <li>{"📞 +1 (555) 123-4567"}</li>
                        <li>{"✉️ hello@evportal.com"}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2026 EVPortal. All rights reserved."}</p>
                <p>{"Made with 💚 for a sustainable future"}</p>
            </div>
        </footer>
    }
}
