use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::use_scroll_reveal;
use crate::Route;

const STATS: &[(&str, &str, &str)] = &[
    ("⚡", "10,000+", "Charging Stations"),
    ("🔋", "50,000+", "Happy Users"),
    ("🍃", "2M+", "CO₂ Tons Saved"),
];

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section = use_node_ref();
    use_scroll_reveal(section.clone());

    html! {
        <section ref={section} class="hero-section reveal">
            <style>
            {r#".hero-section {
                min-height: 100vh;
                padding: 8rem 1.5rem 5rem;
                position: relative;
                overflow: hidden;
            }
            .hero-section::before {
                content: '';
                position: absolute;
                top: 5rem;
                left: 5%;
                width: 300px;
                height: 300px;
                background: rgba(52, 211, 153, 0.08);
                border-radius: 50%;
                filter: blur(80px);
            }
            .hero-section::after {
                content: '';
                position: absolute;
                bottom: 5rem;
                right: 5%;
                width: 380px;
                height: 380px;
                background: rgba(45, 212, 191, 0.08);
                border-radius: 50%;
                filter: blur(80px);
            }
            .hero-inner {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 4rem;
                align-items: center;
                position: relative;
                z-index: 1;
            }
            .hero-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.1);
                border: 1px solid rgba(52, 211, 153, 0.25);
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 500;
            }
            .hero-content h1 {
                font-size: clamp(2.2rem, 5vw, 3.8rem);
                line-height: 1.15;
                color: #fff;
                margin: 1.5rem 0;
            }
            .hero-content h1 .text-gradient {
                background: linear-gradient(45deg, #34D399, #2DD4BF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .hero-content p {
                font-size: 1.1rem;
                color: rgba(255, 255, 255, 0.7);
                max-width: 36rem;
                line-height: 1.6;
                margin-bottom: 2rem;
            }
            .hero-actions {
                display: flex;
                gap: 1rem;
                flex-wrap: wrap;
            }
            .hero-primary {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.9rem 1.6rem;
                border-radius: 10px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                color: #053527;
                font-weight: 700;
                text-decoration: none;
                transition: opacity 0.3s ease;
            }
            .hero-primary:hover {
                opacity: 0.9;
            }
            .hero-secondary {
                display: inline-flex;
                align-items: center;
                padding: 0.9rem 1.6rem;
                border-radius: 10px;
                border: 1px solid rgba(255, 255, 255, 0.25);
                color: #fff;
                text-decoration: none;
                transition: border-color 0.3s ease;
            }
            .hero-secondary:hover {
                border-color: #34D399;
            }
            .hero-visual {
                position: relative;
                display: flex;
                align-items: center;
                justify-content: center;
            }
            .hero-card {
                position: relative;
                width: 100%;
                max-width: 420px;
                aspect-ratio: 1;
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(52, 211, 153, 0.15);
                border-radius: 24px;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
            }
            .hero-card .charge-orb {
                width: 120px;
                height: 120px;
                border-radius: 50%;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 3rem;
                box-shadow: 0 0 60px rgba(52, 211, 153, 0.35);
                animation: float 4s ease-in-out infinite;
                margin-bottom: 1.5rem;
            }
            .hero-card h3 {
                color: #fff;
                font-size: 1.4rem;
                margin-bottom: 0.5rem;
            }
            .hero-card p {
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.9rem;
            }
            .hero-card .float-chip {
                position: absolute;
                width: 56px;
                height: 56px;
                border-radius: 16px;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.5rem;
                background: rgba(52, 211, 153, 0.1);
                animation: float 4s ease-in-out infinite;
            }
            .hero-card .float-chip.battery {
                top: 2rem;
                right: 2rem;
                animation-delay: 1s;
            }
            .hero-card .float-chip.leaf {
                bottom: 2rem;
                left: 2rem;
                animation-delay: 2s;
            }
            @keyframes float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-12px); }
            }
            .hero-stats {
                max-width: 1200px;
                margin: 5rem auto 0;
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 1.5rem;
                position: relative;
                z-index: 1;
            }
            .stat-tile {
                display: flex;
                align-items: center;
                gap: 1rem;
                padding: 1.5rem;
                border-radius: 16px;
                background: rgba(30, 30, 30, 0.5);
                border: 1px solid rgba(255, 255, 255, 0.08);
                transition: border-color 0.3s ease;
            }
            .stat-tile:hover {
                border-color: rgba(52, 211, 153, 0.3);
            }
            .stat-tile .stat-icon {
                width: 52px;
                height: 52px;
                border-radius: 12px;
                background: rgba(52, 211, 153, 0.1);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.5rem;
            }
            .stat-tile .stat-value {
                font-size: 1.5rem;
                font-weight: 700;
                color: #fff;
            }
            .stat-tile .stat-label {
                font-size: 0.85rem;
                color: rgba(255, 255, 255, 0.6);
            }
            @media (max-width: 900px) {
                .hero-inner {
                    grid-template-columns: 1fr;
                }
                .hero-stats {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>
            <div class="hero-inner">
                <div class="hero-content">
                    <span class="hero-badge">{"⚡ #1 EV Platform in the Region"}</span>
                    <h1>
                        {"Powering the Future with "}
                        <span class="text-gradient">{"Electric Vehicles"}</span>
                    </h1>
                    <p>
                        {"Join the sustainable transportation revolution. Find nearby charging \
                          stations, compare EV models, and book your charging slots in seconds."}
                    </p>
                    <div class="hero-actions">
                        <a class="hero-primary" href="/#stations">
                            {"📍 Find Charging Stations →"}
                        </a>
                        <Link<Route> to={Route::Register} classes="hero-secondary">
                            {"Register Now"}
                        </Link<Route>>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-card">
                        <div class="charge-orb">{"⚡"}</div>
                        <h3>{"Smart Charging"}</h3>
                        <p>{"Find & book charging stations near you"}</p>
                        <div class="float-chip battery">{"🔋"}</div>
                        <div class="float-chip leaf">{"🍃"}</div>
                    </div>
                </div>
            </div>
            <div class="hero-stats">
                { STATS.iter().enumerate().map(|(i, (icon, value, label))| {
                    html! {
                        <div class="stat-tile reveal-item" style={format!("transition-delay: {}ms", i * 100)}>
                            <div class="stat-icon">{*icon}</div>
                            <div>
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </section>
    }
}
