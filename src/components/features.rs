use yew::prelude::*;

use crate::components::reveal::use_scroll_reveal;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🕒", "Real-time Availability", "Check live charging station status and available slots instantly."),
    ("📅", "Online Slot Booking", "Book your charging slot in advance. No more waiting in queues."),
    ("🚗", "EV Model Comparison", "Compare different EV models, specs, and find the perfect vehicle."),
    ("🛡️", "Secure Payments", "Multiple payment options with bank-grade security protection."),
    ("⭐", "Ratings & Reviews", "Read user reviews and rate your charging experience."),
    ("🔔", "Smart Notifications", "Get alerts for booking confirmations and charging updates."),
    ("⚡", "Fast Charging", "Locate fast charging stations for quick power-ups on the go."),
    ("👛", "Wallet & Rewards", "Earn points on every charge and redeem for discounts."),
];

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let section = use_node_ref();
    use_scroll_reveal(section.clone());

    html! {
        <section ref={section} class="features-section reveal">
            <style>
            {r#".features-section {
                padding: 6rem 1.5rem;
                background: rgba(255, 255, 255, 0.02);
            }
            .features-header {
                max-width: 48rem;
                margin: 0 auto 4rem;
                text-align: center;
            }
            .features-header .section-pill {
                display: inline-block;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.1);
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 500;
                margin-bottom: 1rem;
            }
            .features-header h2 {
                font-size: clamp(1.8rem, 4vw, 2.8rem);
                color: #fff;
                margin-bottom: 1.2rem;
            }
            .features-header h2 .text-gradient {
                background: linear-gradient(45deg, #34D399, #2DD4BF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .features-header p {
                font-size: 1.05rem;
                color: rgba(255, 255, 255, 0.7);
            }
            .feature-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1.5rem;
            }
            .feature-card {
                padding: 1.8rem;
                border-radius: 16px;
                background: rgba(30, 30, 30, 0.5);
                border: 1px solid rgba(255, 255, 255, 0.08);
                text-align: center;
                transition: border-color 0.3s ease, transform 0.3s ease;
            }
            .feature-card:hover {
                border-color: rgba(52, 211, 153, 0.3);
                transform: translateY(-4px);
            }
            .feature-card .feature-icon {
                width: 60px;
                height: 60px;
                margin: 0 auto 1.2rem;
                border-radius: 16px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.7rem;
            }
            .feature-card h3 {
                color: #fff;
                font-size: 1.05rem;
                margin-bottom: 0.7rem;
            }
            .feature-card p {
                color: rgba(255, 255, 255, 0.65);
                font-size: 0.88rem;
                line-height: 1.6;
            }
            @media (max-width: 1000px) {
                .feature-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
            @media (max-width: 600px) {
                .feature-grid {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>
            <div class="features-header">
                <span class="section-pill">{"Platform Features"}</span>
                <h2>
                    {"Everything You Need for "}
                    <span class="text-gradient">{"Smart Charging"}</span>
                </h2>
                <p>
                    {"Our platform offers a complete suite of features to make your EV \
                      charging experience seamless and enjoyable."}
                </p>
            </div>
            <div class="feature-grid">
                { FEATURES.iter().enumerate().map(|(i, (icon, title, description))| {
                    html! {
                        <div class="feature-card reveal-item" style={format!("transition-delay: {}ms", i * 80)}>
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </section>
    }
}
