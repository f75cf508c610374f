use yew::prelude::*;

use crate::components::reveal::use_scroll_reveal;

const STEPS: &[(&str, &str, &str, &str)] = &[
    (
        "👥",
        "01",
        "Register / Login",
        "Create your account in seconds. Quick and secure registration with email or phone.",
    ),
    (
        "📍",
        "02",
        "Select Your Area",
        "Choose your location to find the nearest charging stations and available slots.",
    ),
    (
        "📅",
        "03",
        "Book Your Slot",
        "Pick your preferred time slot and charging station. Real-time availability updates.",
    ),
    (
        "💳",
        "04",
        "Pay & Charge",
        "Secure payment options. Arrive, plug in, and power up your EV hassle-free.",
    ),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section = use_node_ref();
    use_scroll_reveal(section.clone());

    html! {
        <section ref={section} id="how-it-works" class="how-section reveal">
            <style>
            {r#".how-section {
                padding: 6rem 1.5rem;
                position: relative;
            }
            .how-header {
                max-width: 48rem;
                margin: 0 auto 4rem;
                text-align: center;
            }
            .section-pill {
                display: inline-block;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.1);
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 500;
                margin-bottom: 1rem;
            }
            .how-header h2 {
                font-size: clamp(1.8rem, 4vw, 2.8rem);
                color: #fff;
                margin-bottom: 1.2rem;
            }
            .how-header h2 .text-gradient {
                background: linear-gradient(45deg, #34D399, #2DD4BF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .how-header p {
                font-size: 1.05rem;
                color: rgba(255, 255, 255, 0.7);
            }
            .step-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 1.5rem;
            }
            .step-card {
                position: relative;
                padding: 1.8rem;
                border-radius: 16px;
                background: rgba(30, 30, 30, 0.5);
                border: 1px solid rgba(255, 255, 255, 0.08);
                overflow: hidden;
                transition: border-color 0.3s ease;
            }
            .step-card:hover {
                border-color: rgba(52, 211, 153, 0.3);
            }
            .step-card .step-ghost {
                position: absolute;
                top: -1rem;
                right: -0.5rem;
                font-size: 5rem;
                font-weight: 700;
                color: rgba(52, 211, 153, 0.06);
            }
            .step-card .step-icon {
                width: 56px;
                height: 56px;
                border-radius: 16px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.6rem;
                margin-bottom: 1.3rem;
            }
            .step-card .step-number {
                display: block;
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 600;
                margin-bottom: 0.4rem;
            }
            .step-card h3 {
                color: #fff;
                font-size: 1.2rem;
                margin-bottom: 0.7rem;
            }
            .step-card p {
                color: rgba(255, 255, 255, 0.65);
                font-size: 0.9rem;
                line-height: 1.6;
            }
            @media (max-width: 1000px) {
                .step-grid {
                    grid-template-columns: repeat(2, 1fr);
                }
            }
            @media (max-width: 600px) {
                .step-grid {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>
            <div class="how-header">
                <span class="section-pill">{"Simple Process"}</span>
                <h2>{"How It "}<span class="text-gradient">{"Works"}</span></h2>
                <p>
                    {"Getting started with EVPortal is easy. Follow these simple steps to \
                      find and book your charging station."}
                </p>
            </div>
            <div class="step-grid">
                { STEPS.iter().enumerate().map(|(i, (icon, number, title, description))| {
                    html! {
                        <div class="step-card reveal-item" style={format!("transition-delay: {}ms", i * 120)}>
                            <span class="step-ghost">{*number}</span>
                            <div class="step-icon">{*icon}</div>
                            <span class="step-number">{"Step "}{*number}</span>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </section>
    }
}
