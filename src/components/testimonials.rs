use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::use_scroll_reveal;

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "Sarah Johnson",
        "Tesla Model 3 Owner",
        "SJ",
        "EVPortal made finding charging stations so easy! I was worried about range anxiety, but this app shows real-time availability. Game changer!",
    ),
    (
        "Michael Chen",
        "Hyundai Kona EV Owner",
        "MC",
        "The slot booking feature is brilliant. No more waiting at charging stations. I just book my slot and drive there when my time comes.",
    ),
    (
        "Priya Sharma",
        "Ather 450X Rider",
        "PS",
        "As a daily commuter, this platform helps me plan my routes efficiently. The EV comparison feature helped me choose the perfect scooter.",
    ),
    (
        "David Williams",
        "Fleet Manager",
        "DW",
        "Managing our company EV fleet is now seamless. Real-time tracking, booking management, and payment reports all in one place.",
    ),
];

const ROTATE_MS: u32 = 5_000;

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let section = use_node_ref();
    use_scroll_reveal(section.clone());

    let current = use_state(|| 0usize);

    {
        let current = current.clone();
        use_interval(
            move || {
                current.set((*current + 1) % TESTIMONIALS.len());
            },
            ROTATE_MS,
        );
    }

    let next_slide = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set((*current + 1) % TESTIMONIALS.len());
        })
    };

    let prev_slide = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set((*current + TESTIMONIALS.len() - 1) % TESTIMONIALS.len());
        })
    };

    let (name, role, initials, quote) = TESTIMONIALS[*current];

    html! {
        <section ref={section} class="testimonials-section reveal">
            <style>
            {r#".testimonials-section {
                padding: 6rem 1.5rem;
                position: relative;
            }
            .testimonials-header {
                max-width: 48rem;
                margin: 0 auto 4rem;
                text-align: center;
            }
            .testimonials-header .section-pill {
                display: inline-block;
                padding: 0.5rem 1rem;
                border-radius: 999px;
                background: rgba(52, 211, 153, 0.1);
                color: #34D399;
                font-size: 0.85rem;
                font-weight: 500;
                margin-bottom: 1rem;
            }
            .testimonials-header h2 {
                font-size: clamp(1.8rem, 4vw, 2.8rem);
                color: #fff;
                margin-bottom: 1.2rem;
            }
            .testimonials-header h2 .text-gradient {
                background: linear-gradient(45deg, #34D399, #2DD4BF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .testimonials-header p {
                font-size: 1.05rem;
                color: rgba(255, 255, 255, 0.7);
            }
            .testimonial-slider {
                max-width: 56rem;
                margin: 0 auto;
                position: relative;
            }
            .testimonial-card {
                position: relative;
                padding: 2.5rem;
                border-radius: 16px;
                background: rgba(30, 30, 30, 0.5);
                border: 1px solid rgba(255, 255, 255, 0.08);
            }
            .testimonial-stars {
                color: #f59e0b;
                letter-spacing: 0.2em;
                margin-bottom: 1.4rem;
            }
            .testimonial-quote {
                font-size: 1.15rem;
                line-height: 1.7;
                color: rgba(255, 255, 255, 0.9);
                margin-bottom: 2rem;
            }
            .testimonial-author {
                display: flex;
                align-items: center;
                gap: 1rem;
            }
            .testimonial-avatar {
                width: 52px;
                height: 52px;
                border-radius: 50%;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                color: #053527;
                display: flex;
                align-items: center;
                justify-content: center;
                font-weight: 700;
            }
            .testimonial-author h4 {
                color: #fff;
                font-size: 1rem;
            }
            .testimonial-author p {
                color: rgba(255, 255, 255, 0.55);
                font-size: 0.85rem;
            }
            .slider-controls {
                position: absolute;
                bottom: 1.5rem;
                right: 1.5rem;
                display: flex;
                gap: 0.5rem;
            }
            .slider-controls button {
                width: 38px;
                height: 38px;
                border-radius: 10px;
                border: none;
                background: rgba(255, 255, 255, 0.08);
                color: #fff;
                cursor: pointer;
                transition: background 0.3s ease;
            }
            .slider-controls button:hover {
                background: #34D399;
                color: #053527;
            }
            .slider-dots {
                display: flex;
                justify-content: center;
                gap: 0.5rem;
                margin-top: 1.5rem;
            }
            .slider-dot {
                width: 8px;
                height: 8px;
                border-radius: 999px;
                border: none;
                background: rgba(255, 255, 255, 0.25);
                cursor: pointer;
                transition: all 0.3s ease;
                padding: 0;
            }
            .slider-dot.active {
                width: 28px;
                background: #34D399;
            }"#}
            </style>
            <div class="testimonials-header">
                <span class="section-pill">{"Testimonials"}</span>
                <h2>{"What Our "}<span class="text-gradient">{"Users Say"}</span></h2>
                <p>
                    {"Join thousands of satisfied EV owners who trust EVPortal for their \
                      charging needs."}
                </p>
            </div>
            <div class="testimonial-slider reveal-item">
                <div class="testimonial-card">
                    <div class="testimonial-stars">{"★★★★★"}</div>
                    <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", quote)}</p>
                    <div class="testimonial-author">
                        <div class="testimonial-avatar">{initials}</div>
                        <div>
                            <h4>{name}</h4>
                            <p>{role}</p>
                        </div>
                    </div>
                    <div class="slider-controls">
                        <button onclick={prev_slide}>{"‹"}</button>
                        <button onclick={next_slide}>{"›"}</button>
                    </div>
                </div>
                <div class="slider-dots">
                    { (0..TESTIMONIALS.len()).map(|i| {
                        let onclick = {
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| current.set(i))
                        };
                        html! {
                            <button
                                class={classes!("slider-dot", (i == *current).then(|| "active"))}
                                {onclick}
                            ></button>
                        }
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}
