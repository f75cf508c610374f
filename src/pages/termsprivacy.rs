use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn legal_styles() -> Html {
    html! {
        <style>
        {r#".legal-page {
            min-height: 100vh;
            padding: 6rem 1.5rem 4rem;
        }
        .legal-container {
            max-width: 48rem;
            margin: 0 auto;
            background: rgba(30, 30, 30, 0.7);
            border: 1px solid rgba(52, 211, 153, 0.15);
            border-radius: 16px;
            padding: 3rem;
        }
        .legal-container h1 {
            color: #fff;
            font-size: 2rem;
            margin-bottom: 0.5rem;
        }
        .legal-container .legal-updated {
            color: rgba(255, 255, 255, 0.5);
            font-size: 0.85rem;
            margin-bottom: 2rem;
        }
        .legal-container h2 {
            color: #fff;
            font-size: 1.2rem;
            margin: 1.8rem 0 0.7rem;
        }
        .legal-container p {
            color: rgba(255, 255, 255, 0.7);
            line-height: 1.7;
            font-size: 0.95rem;
        }
        .legal-back {
            display: inline-block;
            margin-bottom: 1.5rem;
            color: #34D399;
            text-decoration: none;
            font-size: 0.9rem;
        }
        .legal-back:hover {
            text-decoration: underline;
        }
        @media (max-width: 600px) {
            .legal-container {
                padding: 1.8rem;
            }
        }"#}
        </style>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-page">
            { legal_styles() }
            <div class="legal-container">
                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to home"}</Link<Route>>
                <h1>{"Terms of Service"}</h1>
                <p class="legal-updated">{"Last updated: January 2026"}</p>
                <h2>{"1. Acceptance of Terms"}</h2>
                <p>
                    {"By creating an EVPortal account or using this site you agree to these \
                      terms. If you do not agree, do not use the service."}
                </p>
                <h2>{"2. The Service"}</h2>
                <p>
                    {"EVPortal helps you locate charging stations, compare electric \
                      vehicles, and book charging slots. Station availability and pricing \
                      shown on the site are provided by station operators and may change \
                      without notice."}
                </p>
                <h2>{"3. Accounts"}</h2>
                <p>
                    {"You are responsible for the accuracy of the information you register \
                      with and for keeping your password confidential. One account per \
                      person; accounts may not be shared or transferred."}
                </p>
                <h2>{"4. Acceptable Use"}</h2>
                <p>
                    {"Do not misuse the service, interfere with its operation, or access it \
                      by any means other than the interfaces we provide."}
                </p>
                <h2>{"5. Changes"}</h2>
                <p>
                    {"We may update these terms from time to time. Continued use of the \
                      service after changes take effect constitutes acceptance."}
                </p>
            </div>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            { legal_styles() }
            <div class="legal-container">
                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to home"}</Link<Route>>
                <h1>{"Privacy Policy"}</h1>
                <p class="legal-updated">{"Last updated: January 2026"}</p>
                <h2>{"1. What We Collect"}</h2>
                <p>
                    {"When you register we collect your name, email address, phone number, \
                      and the role you select. We do not collect payment details on this \
                      site."}
                </p>
                <h2>{"2. How We Use It"}</h2>
                <p>
                    {"Registration details are used to create and operate your account and \
                      to send booking confirmations and charging updates you opt into."}
                </p>
                <h2>{"3. Sharing"}</h2>
                <p>
                    {"We do not sell your personal information. Station operators only see \
                      the details needed to honor a booking you make."}
                </p>
                <h2>{"4. Retention"}</h2>
                <p>
                    {"Account data is retained while your account is active and deleted on \
                      request."}
                </p>
                <h2>{"5. Contact"}</h2>
                <p>
                    {"Questions about this policy can be sent to hello@evportal.com."}
                </p>
            </div>
        </div>
    }
}
