use yew::prelude::*;

use crate::components::reveal::use_scroll_reveal;

const REASONS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "👛",
        "70%",
        "Fuel Savings",
        "Cost Savings",
        "Save up to 70% on fuel costs compared to traditional vehicles. Lower running costs mean more money in your pocket.",
    ),
    (
        "🍃",
        "0",
        "Emissions",
        "Eco-Friendly",
        "Zero direct emissions help reduce air pollution and combat climate change. Drive green, live green.",
    ),
    (
        "🔧",
        "50%",
        "Less Maintenance",
        "Low Maintenance",
        "Fewer moving parts mean less wear and tear. No oil changes, fewer brake replacements, minimal servicing.",
    ),
    (
        "🏅",
        "$7,500",
        "Tax Credit",
        "Government Benefits",
        "Take advantage of tax credits, subsidies, and incentives offered by the government for EV adoption.",
    ),
];

#[function_component(WhyElectric)]
pub fn why_electric() -> Html {
    let section = use_node_ref();
    use_scroll_reveal(section.clone());

    html! {
        <section ref={section} class="why-section reveal">
            <style>
            {r#".why-section {
                padding: 6rem 1.5rem;
                background: linear-gradient(180deg, #0b1512, #0e1a16);
                position: relative;
                overflow: hidden;
            }
            .why-section::before {
                content: '';
                position: absolute;
                top: 0;
                left: 25%;
                width: 380px;
                height: 380px;
                background: rgba(52, 211, 153, 0.08);
                border-radius: 50%;
                filter: blur(90px);
            }
            .why-header {
                max-width: 48rem;
                margin: 0 auto 4rem;
                text-align: center;
                position: relative;
                z-index: 1;
            }
            .why-header .section-pill {
                display: inline-block;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.15);
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 500;
                margin-bottom: 1rem;
            }
            .why-header h2 {
                font-size: clamp(1.8rem, 4vw, 2.8rem);
                color: #fff;
                margin-bottom: 1.2rem;
            }
            .why-header h2 .accent {
                color: #34D399;
            }
            .why-header p {
                font-size: 1.05rem;
                color: rgba(255, 255, 255, 0.7);
            }
            .why-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1.5rem;
                position: relative;
                z-index: 1;
            }
            .why-card {
                padding: 1.6rem;
                border-radius: 16px;
                background: rgba(255, 255, 255, 0.03);
                border: 1px solid rgba(255, 255, 255, 0.08);
                backdrop-filter: blur(8px);
                transition: border-color 0.3s ease, background 0.3s ease;
            }
            .why-card:hover {
                background: rgba(255, 255, 255, 0.06);
                border-color: rgba(52, 211, 153, 0.3);
            }
            .why-card .why-stat {
                font-size: 2.2rem;
                font-weight: 700;
                color: #34D399;
            }
            .why-card .why-stat-label {
                display: block;
                font-size: 0.85rem;
                color: rgba(255, 255, 255, 0.55);
                margin: 0.3rem 0 1.4rem;
            }
            .why-card .why-icon {
                width: 52px;
                height: 52px;
                border-radius: 12px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.4rem;
                margin-bottom: 1.2rem;
            }
            .why-card h3 {
                color: #fff;
                font-size: 1.15rem;
                margin-bottom: 0.7rem;
            }
            .why-card p {
                color: rgba(255, 255, 255, 0.65);
                font-size: 0.88rem;
                line-height: 1.6;
            }
            @media (max-width: 1000px) {
                .why-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
            @media (max-width: 600px) {
                .why-grid {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>
            <div class="why-header">
                <span class="section-pill">{"Benefits"}</span>
                <h2>{"Why Choose "}<span class="accent">{"Electric?"}</span></h2>
                <p>
                    {"Electric vehicles are not just the future, they're the smarter choice \
                      today. Discover the benefits of going electric."}
                </p>
            </div>
            <div class="why-grid">
                { REASONS.iter().enumerate().map(|(i, (icon, stat, stat_label, title, description))| {
                    html! {
                        <div class="why-card reveal-item" style={format!("transition-delay: {}ms", i * 120)}>
                            <span class="why-stat">{*stat}</span>
                            <span class="why-stat-label">{*stat_label}</span>
                            <div class="why-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </section>
    }
}
