use yew::prelude::*;

use crate::components::reveal::use_scroll_reveal;

struct EvModel {
    kind: &'static str,
    icon: &'static str,
    name: &'static str,
    range: &'static str,
    price: &'static str,
    charge_time: &'static str,
    badge: &'static str,
    art: &'static str,
}

const EV_MODELS: &[EvModel] = &[
    EvModel {
        kind: "Car",
        icon: "🚗",
        name: "Tesla Model 3",
        range: "358 km",
        price: "$39,990",
        charge_time: "8.5 hrs",
        badge: "Popular",
        art: "linear-gradient(135deg, #1e293b, #0f172a)",
    },
    EvModel {
        kind: "Car",
        icon: "🚙",
        name: "Hyundai Kona",
        range: "484 km",
        price: "$34,000",
        charge_time: "9.5 hrs",
        badge: "Long Range",
        art: "linear-gradient(135deg, #1e3a8a, #1e293b)",
    },
    EvModel {
        kind: "Bike",
        icon: "🏍️",
        name: "Ather 450X",
        range: "116 km",
        price: "$1,800",
        charge_time: "3.5 hrs",
        badge: "Best Seller",
        art: "linear-gradient(135deg, #047857, #064e3b)",
    },
    EvModel {
        kind: "Scooter",
        icon: "🛵",
        name: "Ola S1 Pro",
        range: "181 km",
        price: "$1,500",
        charge_time: "6.5 hrs",
        badge: "New",
        art: "linear-gradient(135deg, #0f766e, #134e4a)",
    },
];

#[function_component(EvModelsSection)]
pub fn ev_models_section() -> Html {
    let section = use_node_ref();
    use_scroll_reveal(section.clone());

    html! {
        <section ref={section} id="vehicles" class="models-section reveal">
            <style>
            {r#".models-section {
                padding: 6rem 1.5rem;
            }
            .models-header {
                max-width: 1200px;
                margin: 0 auto 4rem;
                display: flex;
                align-items: flex-end;
                justify-content: space-between;
                gap: 1.5rem;
                flex-wrap: wrap;
            }
            .models-header .section-pill {
                display: inline-block;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.1);
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 500;
                margin-bottom: 1rem;
            }
            .models-header h2 {
                font-size: clamp(1.8rem, 4vw, 2.8rem);
                color: #fff;
                margin-bottom: 1rem;
            }
            .models-header h2 .text-gradient {
                background: linear-gradient(45deg, #34D399, #2DD4BF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .models-header p {
                font-size: 1.05rem;
                color: rgba(255, 255, 255, 0.7);
                max-width: 36rem;
            }
            .models-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1.5rem;
            }
            .model-card {
                border-radius: 16px;
                overflow: hidden;
                background: rgba(30, 30, 30, 0.5);
                border: 1px solid rgba(255, 255, 255, 0.08);
                transition: border-color 0.3s ease, transform 0.3s ease;
            }
            .model-card:hover {
                border-color: rgba(52, 211, 153, 0.3);
                transform: translateY(-4px);
            }
            .model-art {
                position: relative;
                height: 10rem;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 4rem;
            }
            .model-badge {
                position: absolute;
                top: 1rem;
                left: 1rem;
                padding: 0.3rem 0.8rem;
                border-radius: 999px;
                background: #34D399;
                color: #053527;
                font-size: 0.7rem;
                font-weight: 700;
            }
            .model-body {
                padding: 1.4rem;
            }
            .model-kind {
                font-size: 0.7rem;
                font-weight: 600;
                letter-spacing: 0.08em;
                text-transform: uppercase;
                color: #34D399;
            }
            .model-body h3 {
                color: #fff;
                font-size: 1.15rem;
                margin: 0.3rem 0 1rem;
            }
            .model-specs {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 0.6rem;
                margin-bottom: 1.2rem;
            }
            .model-spec {
                text-align: center;
                padding: 0.6rem 0.3rem;
                border-radius: 10px;
                background: rgba(255, 255, 255, 0.05);
            }
            .model-spec .spec-name {
                display: block;
                font-size: 0.65rem;
                color: rgba(255, 255, 255, 0.55);
                margin-bottom: 0.2rem;
            }
            .model-spec .spec-value {
                font-size: 0.82rem;
                font-weight: 600;
                color: #fff;
            }
            .model-details-button {
                width: 100%;
                padding: 0.7rem;
                border-radius: 10px;
                border: 1px solid rgba(255, 255, 255, 0.2);
                background: transparent;
                color: #fff;
                font-size: 0.9rem;
                cursor: pointer;
                transition: all 0.3s ease;
            }
            .model-details-button:hover {
                background: #34D399;
                border-color: #34D399;
                color: #053527;
            }
            @media (max-width: 1000px) {
                .models-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
            @media (max-width: 600px) {
                .models-grid {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>
            <div class="models-header">
                <div>
                    <span class="section-pill">{"EV Catalog"}</span>
                    <h2>{"Explore "}<span class="text-gradient">{"Electric Vehicles"}</span></h2>
                    <p>
                        {"Browse our collection of electric cars, bikes, and scooters. \
                          Compare specifications and find your perfect ride."}
                    </p>
                </div>
            </div>
            <div class="models-grid">
                { EV_MODELS.iter().enumerate().map(|(i, model)| {
                    html! {
                        <div class="model-card reveal-item" style={format!("transition-delay: {}ms", i * 120)}>
                            <div class="model-art" style={format!("background: {}", model.art)}>
                                <span class="model-badge">{model.badge}</span>
                                <span>{model.icon}</span>
                            </div>
                            <div class="model-body">
                                <span class="model-kind">{model.kind}</span>
                                <h3>{model.name}</h3>
                                <div class="model-specs">
                                    <div class="model-spec">
                                        <span class="spec-name">{"Range"}</span>
                                        <span class="spec-value">{model.range}</span>
                                    </div>
                                    <div class="model-spec">
                                        <span class="spec-name">{"Charge"}</span>
                                        <span class="spec-value">{model.charge_time}</span>
                                    </div>
                                    <div class="model-spec">
                                        <span class="spec-name">{"Price"}</span>
                                        <span class="spec-value">{model.price}</span>
                                    </div>
                                </div>
                                <button class="model-details-button">{"View Details"}</button>
                            </div>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </section>
    }
}
