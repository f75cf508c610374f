pub mod register {
    use futures::future::{select, Either};
    use gloo_console::error;
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use gloo_timers::future::TimeoutFuture;
    use serde::{Deserialize, Serialize};
    use wasm_bindgen_futures::spawn_local;
    use web_sys::HtmlInputElement;
    use yew::prelude::*;
    use yew_hooks::prelude::*;
    use yew_router::prelude::*;

    use crate::auth::registration::{
        password_strength, strength_label, strength_tier, try_advance, validate_stage, Field,
        FieldErrors, RegistrationForm, Stage, UserRole,
    };
    use crate::config;
    use crate::Route;

    const REGISTER_TIMEOUT_MS: u32 = 10_000;
    const REDIRECT_DELAY_MS: u32 = 2_500;

    #[derive(Serialize)]
    struct RegisterRequest {
        full_name: String,
        email: String,
        phone: String,
        password: String,
        role: UserRole,
    }

    #[derive(Deserialize)]
    struct ErrorResponse {
        error: String,
    }

    async fn create_account(body: &RegisterRequest) -> Result<(), String> {
        let request = Request::post(&format!("{}/api/register", config::get_backend_url()))
            .json(body)
            .map_err(|e| format!("Failed to encode request: {}", e))?
            .send();

        let response = match select(
            Box::pin(request),
            Box::pin(TimeoutFuture::new(REGISTER_TIMEOUT_MS)),
        )
        .await
        {
            Either::Left((result, _)) => result.map_err(|e| format!("Request failed: {}", e))?,
            Either::Right(_) => {
                return Err("The server took too long to respond. Please try again.".to_string())
            }
        };

        if response.ok() {
            Ok(())
        } else {
            match response.json::<ErrorResponse>().await {
                Ok(err) => Err(err.error),
                Err(_) => Err("Registration failed. Please try again.".to_string()),
            }
        }
    }

    fn clear_error(errors: &UseStateHandle<FieldErrors>, field: Field) {
        if errors.contains_key(&field) {
            let mut remaining = (**errors).clone();
            remaining.remove(&field);
            errors.set(remaining);
        }
    }

    fn edit_field(
        form: &UseStateHandle<RegistrationForm>,
        errors: &UseStateHandle<FieldErrors>,
        field: Field,
        apply: fn(&mut RegistrationForm, String),
    ) -> Callback<InputEvent> {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            apply(&mut updated, input.value());
            form.set(updated);
            clear_error(&errors, field);
        })
    }

    fn field_error(errors: &FieldErrors, field: Field) -> Html {
        match errors.get(&field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }

    fn input_class(errors: &FieldErrors, field: Field) -> Classes {
        classes!("text-input", errors.contains_key(&field).then(|| "invalid"))
    }

    #[function_component(Register)]
    pub fn register() -> Html {
        let navigator = use_navigator().unwrap();
        let stage = use_state(|| Stage::Role);
        let form = use_state(RegistrationForm::default);
        let errors = use_state(FieldErrors::new);
        let submitting = use_state(|| false);
        let submit_error = use_state(|| None::<String>);
        let show_password = use_state(|| false);
        let show_confirm = use_state(|| false);
        let is_mounted = use_is_mounted();

        // One-shot redirect after the success screen; dropping the handle on
        // teardown cancels a pending redirect.
        {
            let navigator = navigator.clone();
            use_effect_with_deps(
                move |stage: &Stage| {
                    let redirect = (*stage == Stage::Success).then(|| {
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            navigator.push(&Route::Login);
                        })
                    });
                    move || drop(redirect)
                },
                *stage,
            );
        }

        let select_role = {
            let form = form.clone();
            let errors = errors.clone();
            Callback::from(move |role: UserRole| {
                let mut updated = (*form).clone();
                updated.role = Some(role);
                form.set(updated);
                clear_error(&errors, Field::Role);
            })
        };

        let on_full_name = edit_field(&form, &errors, Field::FullName, |f, v| f.full_name = v);
        let on_email = edit_field(&form, &errors, Field::Email, |f, v| f.email = v);
        let on_phone = edit_field(&form, &errors, Field::Phone, |f, v| f.phone = v);
        let on_password = edit_field(&form, &errors, Field::Password, |f, v| f.password = v);
        let on_confirm = edit_field(&form, &errors, Field::ConfirmPassword, |f, v| {
            f.confirm_password = v
        });

        let on_terms = {
            let form = form.clone();
            let errors = errors.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut updated = (*form).clone();
                updated.agree_terms = input.checked();
                form.set(updated);
                clear_error(&errors, Field::AgreeTerms);
            })
        };

        let on_continue = {
            let stage = stage.clone();
            let form = form.clone();
            let errors = errors.clone();
            Callback::from(move |_: MouseEvent| {
                let (next, found) = try_advance(*stage, &form);
                errors.set(found);
                stage.set(next);
            })
        };

        let on_back = {
            let stage = stage.clone();
            Callback::from(move |_: MouseEvent| {
                stage.set(stage.prev());
            })
        };

        let on_submit = {
            let stage = stage.clone();
            let form = form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let submit_error = submit_error.clone();
            let is_mounted = is_mounted.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if *submitting {
                    return;
                }
                let found = validate_stage(Stage::Credentials, &form);
                if !found.is_empty() {
                    errors.set(found);
                    return;
                }
                errors.set(FieldErrors::new());
                let Some(role) = form.role else {
                    stage.set(Stage::Role);
                    return;
                };

                submitting.set(true);
                submit_error.set(None);
                let body = RegisterRequest {
                    full_name: form.full_name.clone(),
                    email: form.email.clone(),
                    phone: form.phone.clone(),
                    password: form.password.clone(),
                    role,
                };

                let stage = stage.clone();
                let submitting = submitting.clone();
                let submit_error = submit_error.clone();
                let is_mounted = is_mounted.clone();
                spawn_local(async move {
                    let result = create_account(&body).await;
                    if !is_mounted() {
                        return;
                    }
                    submitting.set(false);
                    match result {
                        Ok(()) => stage.set(Stage::Success),
                        Err(message) => {
                            error!("Registration failed: {}", &message);
                            submit_error.set(Some(message));
                        }
                    }
                });
            })
        };

        let toggle_password = {
            let show_password = show_password.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                show_password.set(!*show_password);
            })
        };

        let toggle_confirm = {
            let show_confirm = show_confirm.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                show_confirm.set(!*show_confirm);
            })
        };

        let strength = password_strength(&form.password);

        let stage_view = match *stage {
            Stage::Role => html! {
                <div class="step">
                    <div class="step-header">
                        <h1>{"Choose Your Role"}</h1>
                        <p>{"Select how you'll use EVPortal"}</p>
                    </div>
                    <div class="role-list">
                        { UserRole::ALL.iter().map(|&role| {
                            let selected = form.role == Some(role);
                            let onclick = {
                                let select_role = select_role.clone();
                                Callback::from(move |_: MouseEvent| select_role.emit(role))
                            };
                            html! {
                                <button
                                    type="button"
                                    class={classes!("role-card", selected.then(|| "selected"))}
                                    {onclick}
                                >
                                    <span class="role-icon">{role.icon()}</span>
                                    <span class="role-text">
                                        <span class="role-title">{role.title()}</span>
                                        <span class="role-description">{role.description()}</span>
                                    </span>
                                    if selected {
                                        <span class="role-check">{"✓"}</span>
                                    }
                                </button>
                            }
                        }).collect::<Html>() }
                        { field_error(&errors, Field::Role) }
                    </div>
                    <button type="button" class="primary-button full" onclick={on_continue.clone()}>
                        {"Continue →"}
                    </button>
                </div>
            },
            Stage::Personal => html! {
                <div class="step">
                    <div class="step-header">
                        <h1>{"Personal Information"}</h1>
                        <p>{"Tell us about yourself"}</p>
                    </div>
                    <div class="field">
                        <label for="full-name">{"Full Name"}</label>
                        <div class="input-wrap">
                            <span class="input-icon">{"👤"}</span>
                            <input
                                id="full-name"
                                type="text"
                                placeholder="John Doe"
                                value={form.full_name.clone()}
                                oninput={on_full_name}
                                class={input_class(&errors, Field::FullName)}
                            />
                        </div>
                        { field_error(&errors, Field::FullName) }
                    </div>
                    <div class="field">
                        <label for="email">{"Email Address"}</label>
                        <div class="input-wrap">
                            <span class="input-icon">{"✉️"}</span>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                value={form.email.clone()}
                                oninput={on_email}
                                class={input_class(&errors, Field::Email)}
                            />
                        </div>
                        { field_error(&errors, Field::Email) }
                    </div>
                    <div class="field">
                        <label for="phone">{"Mobile Number"}</label>
                        <div class="input-wrap">
                            <span class="input-icon">{"📞"}</span>
                            <input
                                id="phone"
                                type="tel"
                                placeholder="+1 234 567 8900"
                                value={form.phone.clone()}
                                oninput={on_phone}
                                class={input_class(&errors, Field::Phone)}
                            />
                        </div>
                        { field_error(&errors, Field::Phone) }
                    </div>
                    <div class="button-row">
                        <button type="button" class="secondary-button" onclick={on_back.clone()}>
                            {"← Back"}
                        </button>
                        <button type="button" class="primary-button" onclick={on_continue}>
                            {"Continue →"}
                        </button>
                    </div>
                </div>
            },
            Stage::Credentials => html! {
                <form class="step" onsubmit={on_submit}>
                    <div class="step-header">
                        <h1>{"Secure Your Account"}</h1>
                        <p>{"Create a strong password"}</p>
                    </div>
                    <div class="field">
                        <label for="password">{"Password"}</label>
                        <div class="input-wrap">
                            <span class="input-icon">{"🔒"}</span>
                            <input
                                id="password"
                                type={if *show_password { "text" } else { "password" }}
                                placeholder="Create a password"
                                value={form.password.clone()}
                                oninput={on_password}
                                class={input_class(&errors, Field::Password)}
                            />
                            <button type="button" class="reveal-toggle" onclick={toggle_password}>
                                { if *show_password { "🙈" } else { "👁️" } }
                            </button>
                        </div>
                        { field_error(&errors, Field::Password) }
                        {
                            if let (Some(label), Some(tier)) =
                                (strength_label(strength), strength_tier(strength))
                            {
                                html! {
                                    <div class="strength">
                                        <div class="strength-bars">
                                            { (1..=5u8).map(|i| {
                                                let class = if i <= strength {
                                                    format!("strength-bar filled {}", tier)
                                                } else {
                                                    "strength-bar".to_string()
                                                };
                                                html! { <div class={class}></div> }
                                            }).collect::<Html>() }
                                        </div>
                                        <p class="strength-label">{"Password strength: "}{label}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <div class="field">
                        <label for="confirm-password">{"Confirm Password"}</label>
                        <div class="input-wrap">
                            <span class="input-icon">{"🔒"}</span>
                            <input
                                id="confirm-password"
                                type={if *show_confirm { "text" } else { "password" }}
                                placeholder="Confirm your password"
                                value={form.confirm_password.clone()}
                                oninput={on_confirm}
                                class={input_class(&errors, Field::ConfirmPassword)}
                            />
                            <button type="button" class="reveal-toggle" onclick={toggle_confirm}>
                                { if *show_confirm { "🙈" } else { "👁️" } }
                            </button>
                        </div>
                        { field_error(&errors, Field::ConfirmPassword) }
                    </div>
                    <div class="terms-row">
                        <input
                            id="terms"
                            type="checkbox"
                            checked={form.agree_terms}
                            onchange={on_terms}
                        />
                        <div>
                            <label for="terms">
                                {"I agree to the "}
                                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                                {" and "}
                                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                            </label>
                            { field_error(&errors, Field::AgreeTerms) }
                        </div>
                    </div>
                    {
                        if let Some(message) = (*submit_error).as_ref() {
                            html! { <div class="submit-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="button-row">
                        <button type="button" class="secondary-button" onclick={on_back}>
                            {"← Back"}
                        </button>
                        <button type="submit" class="primary-button" disabled={*submitting}>
                            {
                                if *submitting {
                                    html! { <><span class="loading-spinner"></span>{" Creating..."}</> }
                                } else {
                                    html! { {"Create Account →"} }
                                }
                            }
                        </button>
                    </div>
                </form>
            },
            Stage::Success => html! {
                <div class="step success-step">
                    <div class="success-icon">{"✓"}</div>
                    <h1>{"Welcome to EVPortal!"}</h1>
                    <p>{"Your account has been created successfully."}</p>
                    <span class="loading-spinner"></span>
                    <p class="redirect-note">{"Redirecting to login..."}</p>
                </div>
            },
        };

        html! {
            <div class="register-page">
                <style>
                {r#".register-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem 1rem;
                    position: relative;
                    overflow: hidden;
                }
                .register-page::before {
                    content: '';
                    position: absolute;
                    top: 10%;
                    right: 5%;
                    width: 320px;
                    height: 320px;
                    background: rgba(52, 211, 153, 0.08);
                    border-radius: 50%;
                    filter: blur(80px);
                }
                .register-page::after {
                    content: '';
                    position: absolute;
                    bottom: 10%;
                    left: 5%;
                    width: 380px;
                    height: 380px;
                    background: rgba(45, 212, 191, 0.08);
                    border-radius: 50%;
                    filter: blur(80px);
                }
                .register-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin-bottom: 2rem;
                    text-decoration: none;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    z-index: 1;
                }
                .register-logo .bolt {
                    width: 44px;
                    height: 44px;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #34D399, #2DD4BF);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                }
                .register-logo .brand-accent {
                    background: linear-gradient(45deg, #34D399, #2DD4BF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .progress-track {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    z-index: 1;
                }
                .progress-segment {
                    width: 2rem;
                    height: 0.5rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.12);
                    transition: all 0.3s ease;
                }
                .progress-segment.current {
                    width: 3rem;
                    background: #34D399;
                }
                .progress-segment.done {
                    background: rgba(52, 211, 153, 0.5);
                }
                .register-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(52, 211, 153, 0.15);
                    border-radius: 16px;
                    padding: 2.5rem;
                    width: 100%;
                    max-width: 520px;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    z-index: 1;
                }
                .step-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .step-header h1 {
                    font-size: 1.6rem;
                    margin-bottom: 0.5rem;
                    color: #fff;
                }
                .step-header p {
                    color: rgba(255, 255, 255, 0.7);
                }
                .role-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .role-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 2px solid rgba(255, 255, 255, 0.1);
                    background: transparent;
                    color: #fff;
                    text-align: left;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .role-card:hover {
                    border-color: rgba(52, 211, 153, 0.5);
                }
                .role-card.selected {
                    border-color: #34D399;
                    background: rgba(52, 211, 153, 0.08);
                }
                .role-icon {
                    width: 44px;
                    height: 44px;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.08);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                    flex-shrink: 0;
                }
                .role-card.selected .role-icon {
                    background: linear-gradient(135deg, #34D399, #2DD4BF);
                }
                .role-text {
                    display: flex;
                    flex-direction: column;
                    gap: 0.2rem;
                }
                .role-title {
                    font-weight: 700;
                }
                .role-description {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .role-check {
                    margin-left: auto;
                    color: #34D399;
                    font-size: 1.2rem;
                }
                .field {
                    margin-bottom: 1.3rem;
                }
                .field label {
                    display: block;
                    margin-bottom: 0.5rem;
                    color: rgba(255, 255, 255, 0.85);
                    font-size: 0.9rem;
                }
                .input-wrap {
                    position: relative;
                }
                .input-icon {
                    position: absolute;
                    left: 1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    opacity: 0.6;
                }
                .text-input {
                    width: 100%;
                    padding: 0.9rem 3rem 0.9rem 2.8rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.25);
                    color: #fff;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .text-input:focus {
                    outline: none;
                    border-color: #34D399;
                }
                .text-input.invalid {
                    border-color: #f87171;
                }
                .reveal-toggle {
                    position: absolute;
                    right: 0.8rem;
                    top: 50%;
                    transform: translateY(-50%);
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .field-error {
                    color: #f87171;
                    font-size: 0.85rem;
                    margin-top: 0.4rem;
                }
                .role-list .field-error {
                    text-align: center;
                }
                .strength {
                    margin-top: 0.6rem;
                }
                .strength-bars {
                    display: flex;
                    gap: 0.25rem;
                }
                .strength-bar {
                    flex: 1;
                    height: 0.4rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.12);
                    transition: background 0.3s ease;
                }
                .strength-bar.filled.very-weak { background: #ef4444; }
                .strength-bar.filled.weak { background: #f97316; }
                .strength-bar.filled.fair { background: #f59e0b; }
                .strength-bar.filled.good { background: #84cc16; }
                .strength-bar.filled.strong { background: #34D399; }
                .strength-label {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                    margin-top: 0.35rem;
                }
                .terms-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.7rem;
                    margin-bottom: 1.3rem;
                }
                .terms-row input {
                    margin-top: 0.25rem;
                }
                .terms-row label {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .terms-row a {
                    color: #34D399;
                    text-decoration: none;
                }
                .terms-row a:hover {
                    text-decoration: underline;
                }
                .submit-error {
                    background: rgba(248, 113, 113, 0.1);
                    border: 1px solid rgba(248, 113, 113, 0.4);
                    border-radius: 10px;
                    padding: 0.8rem 1rem;
                    color: #f87171;
                    font-size: 0.9rem;
                    margin-bottom: 1.3rem;
                }
                .button-row {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .button-row > * {
                    flex: 1;
                }
                .primary-button {
                    padding: 0.9rem 1.5rem;
                    border-radius: 10px;
                    border: none;
                    background: linear-gradient(135deg, #34D399, #2DD4BF);
                    color: #053527;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: opacity 0.3s ease;
                }
                .primary-button:hover {
                    opacity: 0.9;
                }
                .primary-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .primary-button.full {
                    width: 100%;
                }
                .secondary-button {
                    padding: 0.9rem 1.5rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .secondary-button:hover {
                    border-color: rgba(255, 255, 255, 0.5);
                }
                .success-step {
                    text-align: center;
                    padding: 2rem 0;
                }
                .success-icon {
                    width: 90px;
                    height: 90px;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #34D399, #2DD4BF);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                    color: #053527;
                    box-shadow: 0 0 40px rgba(52, 211, 153, 0.4);
                }
                .success-step h1 {
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .success-step p {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 1.5rem;
                }
                .redirect-note {
                    font-size: 0.85rem;
                    margin-top: 1rem;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 18px;
                    height: 18px;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                    vertical-align: middle;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .signin-divider {
                    position: relative;
                    text-align: center;
                    margin: 2rem 0 1.5rem;
                }
                .signin-divider::before {
                    content: '';
                    position: absolute;
                    top: 50%;
                    left: 0;
                    width: 100%;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .signin-divider span {
                    position: relative;
                    padding: 0 0.8rem;
                    background: #1e1e1e;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .signin-link {
                    display: block;
                    text-align: center;
                    padding: 0.9rem 1.5rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    text-decoration: none;
                    transition: border-color 0.3s ease;
                }
                .signin-link:hover {
                    border-color: #34D399;
                }
                @media (max-width: 600px) {
                    .register-card {
                        padding: 1.5rem;
                    }
                }"#}
                </style>
                <Link<Route> to={Route::Home} classes="register-logo">
                    <span class="bolt">{"⚡"}</span>
                    <span>{"EV"}<span class="brand-accent">{"Portal"}</span></span>
                </Link<Route>>
                {
                    if *stage != Stage::Success {
                        html! {
                            <div class="progress-track">
                                { (1..=3u8).map(|s| {
                                    let class = if s == stage.ordinal() {
                                        "progress-segment current"
                                    } else if s < stage.ordinal() {
                                        "progress-segment done"
                                    } else {
                                        "progress-segment"
                                    };
                                    html! { <div class={class}></div> }
                                }).collect::<Html>() }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="register-card">
                    { stage_view }
                    {
                        if *stage != Stage::Success {
                            html! {
                                <>
                                    <div class="signin-divider">
                                        <span>{"Already have an account?"}</span>
                                    </div>
                                    <Link<Route> to={Route::Login} classes="signin-link">
                                        {"Sign In"}
                                    </Link<Route>>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        }
    }
}

pub mod login {
    use gloo_net::http::Request;
    use serde::{Deserialize, Serialize};
    use wasm_bindgen_futures::spawn_local;
    use web_sys::HtmlInputElement;
    use yew::prelude::*;
    use yew_router::prelude::*;

    use crate::config;
    use crate::Route;

    #[derive(Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    #[derive(Deserialize)]
    struct LoginResponse {
        token: String,
    }

    #[derive(Deserialize)]
    struct ErrorResponse {
        error: String,
    }

    #[function_component(Login)]
    pub fn login() -> Html {
        let email = use_state(String::new);
        let password = use_state(String::new);
        let error = use_state(|| None::<String>);
        let is_loading = use_state(|| false);

        let on_email = {
            let email = email.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                email.set(input.value());
            })
        };

        let on_password = {
            let password = password.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                password.set(input.value());
            })
        };

        let on_submit = {
            let email = email.clone();
            let password = password.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if *is_loading {
                    return;
                }
                if email.is_empty() || password.is_empty() {
                    error.set(Some("Please enter your email and password".to_string()));
                    return;
                }
                is_loading.set(true);
                error.set(None);
                let body = LoginRequest {
                    email: (*email).clone(),
                    password: (*password).clone(),
                };
                let error = error.clone();
                let is_loading = is_loading.clone();
                spawn_local(async move {
                    match Request::post(&format!("{}/api/login", config::get_backend_url()))
                        .json(&body)
                    {
                        Ok(request) => match request.send().await {
                            Ok(response) => {
                                if response.ok() {
                                    match response.json::<LoginResponse>().await {
                                        Ok(resp) => {
                                            let window = web_sys::window().unwrap();
                                            if let Ok(Some(storage)) = window.local_storage() {
                                                let _ = storage.set_item("token", &resp.token);
                                            }
                                            let _ = window.location().set_href("/");
                                        }
                                        Err(_) => {
                                            error.set(Some("Failed to parse response".to_string()));
                                            is_loading.set(false);
                                        }
                                    }
                                } else {
                                    match response.json::<ErrorResponse>().await {
                                        Ok(err_resp) => error.set(Some(err_resp.error)),
                                        Err(_) => error.set(Some("Login failed".to_string())),
                                    }
                                    is_loading.set(false);
                                }
                            }
                            Err(e) => {
                                error.set(Some(format!("Request failed: {}", e)));
                                is_loading.set(false);
                            }
                        },
                        Err(e) => {
                            error.set(Some(format!("Failed to encode request: {}", e)));
                            is_loading.set(false);
                        }
                    }
                });
            })
        };

        html! {
            <div class="login-page">
                <style>
                {r#".login-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                }
                .login-container {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(52, 211, 153, 0.15);
                    border-radius: 16px;
                    padding: 3rem;
                    width: 100%;
                    max-width: 480px;
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .login-container h1 {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                    text-align: center;
                    background: linear-gradient(45deg, #fff, #34D399);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .login-field {
                    margin-bottom: 1.2rem;
                }
                .login-field label {
                    display: block;
                    margin-bottom: 0.5rem;
                    color: rgba(255, 255, 255, 0.85);
                    font-size: 0.9rem;
                }
                .login-field input {
                    width: 100%;
                    padding: 0.9rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.25);
                    color: #fff;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .login-field input:focus {
                    outline: none;
                    border-color: #34D399;
                }
                .login-button {
                    width: 100%;
                    padding: 0.9rem 1.5rem;
                    border-radius: 10px;
                    border: none;
                    background: linear-gradient(135deg, #34D399, #2DD4BF);
                    color: #053527;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    margin-top: 0.5rem;
                }
                .login-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .error-message {
                    background: rgba(248, 113, 113, 0.1);
                    border: 1px solid rgba(248, 113, 113, 0.4);
                    border-radius: 10px;
                    padding: 0.8rem 1rem;
                    color: #f87171;
                    font-size: 0.9rem;
                    margin-bottom: 1.2rem;
                }
                .register-hint {
                    text-align: center;
                    margin-top: 1.5rem;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                }
                .register-hint a {
                    color: #34D399;
                    text-decoration: none;
                }
                .login-spinner {
                    display: inline-block;
                    width: 16px;
                    height: 16px;
                    border: 3px solid rgba(5, 53, 39, 0.3);
                    border-radius: 50%;
                    border-top-color: #053527;
                    animation: login-spin 1s ease-in-out infinite;
                    vertical-align: middle;
                }
                @keyframes login-spin { to { transform: rotate(360deg); } }
                @media (max-width: 768px) {
                    .login-container {
                        padding: 2rem;
                        margin: 1rem;
                    }
                }"#}
                </style>
                <div class="login-container">
                    <h1>{"Login"}</h1>
                    {
                        if let Some(message) = (*error).as_ref() {
                            html! { <div class="error-message">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <form onsubmit={on_submit}>
                        <div class="login-field">
                            <label for="login-email">{"Email Address"}</label>
                            <input
                                id="login-email"
                                type="email"
                                placeholder="you@example.com"
                                value={(*email).clone()}
                                oninput={on_email}
                            />
                        </div>
                        <div class="login-field">
                            <label for="login-password">{"Password"}</label>
                            <input
                                id="login-password"
                                type="password"
                                placeholder="Your password"
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                        </div>
                        <button type="submit" class="login-button" disabled={*is_loading}>
                            {
                                if *is_loading {
                                    html! { <><span class="login-spinner"></span>{" Logging in..."}</> }
                                } else {
                                    html! { {"Sign In"} }
                                }
                            }
                        </button>
                    </form>
                    <p class="register-hint">
                        {"New to EVPortal? "}
                        <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
                    </p>
                </div>
            </div>
        }
    }
}
