use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ev_models::EvModelsSection;
use crate::components::features::FeaturesSection;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::how_it_works::HowItWorks;
use crate::components::stations::StationsSection;
use crate::components::testimonials::TestimonialsSection;
use crate::components::why_electric::WhyElectric;
use crate::Nav;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <style>
            {r#".cta-section {
                padding: 6rem 1.5rem;
                text-align: center;
                position: relative;
                overflow: hidden;
            }
            .cta-section::before {
                content: '';
                position: absolute;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                width: 500px;
                height: 500px;
                background: rgba(52, 211, 153, 0.08);
                border-radius: 50%;
                filter: blur(100px);
            }
            .cta-section h2 {
                font-size: clamp(1.8rem, 4vw, 2.8rem);
                color: #fff;
                margin-bottom: 1.2rem;
                position: relative;
            }
            .cta-section p {
                font-size: 1.05rem;
                color: rgba(255, 255, 255, 0.7);
                max-width: 36rem;
                margin: 0 auto 2rem;
                position: relative;
            }
            .cta-button {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 1rem 2rem;
                border-radius: 10px;
                background: linear-gradient(135deg, #34D399, #2DD4BF);
                color: #053527;
                font-weight: 700;
                font-size: 1.05rem;
                text-decoration: none;
                transition: opacity 0.3s ease;
                position: relative;
            }
            .cta-button:hover {
                opacity: 0.9;
            }"#}
            </style>
            <Nav />
            <main>
                <HeroSection />
                <HowItWorks />
                <FeaturesSection />
                <EvModelsSection />
                <StationsSection />
                <WhyElectric />
                <TestimonialsSection />
                <section class="cta-section">
                    <h2>{"Ready to Go Electric?"}</h2>
                    <p>
                        {"Create your free EVPortal account and start finding charging \
                          stations, comparing vehicles, and booking slots today."}
                    </p>
                    <Link<Route> to={Route::Register} classes="cta-button">
                        {"Get Started →"}
                    </Link<Route>>
                </section>
            </main>
            <Footer />
        </div>
    }
}
