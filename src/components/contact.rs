use std::rc::Rc;

use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::components::toast::Toaster;
use crate::config::{FieldKind, FormField, SiteConfig};
use crate::dom::DomQuoteForm;
use crate::form::{handle_quote_submit, Notifier, QuoteForm};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub config: Rc<SiteConfig>,
}

fn form_field(field: &FormField) -> Html {
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let control = match field.kind {
        FieldKind::Select => html! {
            <select id={field.name.clone()} name={field.name.clone()} required={field.required}>
                <option value="" disabled=true selected=true hidden=true>
                    { if placeholder.is_empty() { "Select an option".to_string() } else { placeholder } }
                </option>
                { for field.options.iter().map(|opt| html! {
                    <option value={opt.value.clone()}>{ &opt.label }</option>
                }) }
            </select>
        },
        FieldKind::Textarea => html! {
            <textarea
                id={field.name.clone()}
                name={field.name.clone()}
                rows="4"
                placeholder={placeholder}
                required={field.required}
            ></textarea>
        },
        kind => html! {
            <input
                type={kind.input_type()}
                id={field.name.clone()}
                name={field.name.clone()}
                placeholder={placeholder}
                required={field.required}
            />
        },
    };

    html! {
        <div class={classes!("form-field", field.half_width.then(|| "half"))}>
            <label for={field.name.clone()}>{ &field.label }</label>
            { control }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let config = &props.config;
    let contact = &config.contact;
    let phone = &config.business.phone;
    let toaster = use_context::<Toaster>();
    let form_ref = use_node_ref();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let config = props.config.clone();
        Callback::from(move |e: SubmitEvent| {
            let form = form_ref.cast::<HtmlFormElement>().and_then(DomQuoteForm::new);
            handle_quote_submit(
                &e,
                form.as_ref().map(|form| form as &dyn QuoteForm),
                &config.quote_form,
                toaster.as_ref().map(|toaster| toaster as &dyn Notifier),
            );
        })
    };

    html! {
        <section id="contact" class="page-section contact alt-bg">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &contact.heading }</h2>
                    <p>{ &contact.intro }</p>
                </div>
                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="info-row">
                            <div class="icon-badge"><i class="fas fa-phone"></i></div>
                            <div>
                                <h3>{"Phone"}</h3>
                                <p>{ &contact.phone_blurb }</p>
                                <a href={phone.tel_href()} class="phone-link">{ &phone.display }</a>
                            </div>
                        </div>
                        <div class="info-row">
                            <div class="icon-badge"><i class="fas fa-clock"></i></div>
                            <div>
                                <h3>{"Business Hours"}</h3>
                                { for contact.hours.iter().map(|row| html! {
                                    <p><span class="hours-days">{ format!("{}:", row.days) }</span>{ format!(" {}", row.hours) }</p>
                                }) }
                            </div>
                        </div>
                        <div class="info-row">
                            <div class="icon-badge"><i class="fas fa-map-marker-alt"></i></div>
                            <div>
                                <h3>{"Mobile Service Area"}</h3>
                                <p>{ &contact.service_area }</p>
                            </div>
                        </div>
                        <div class="card benefits">
                            <h3>{ &contact.benefits_title }</h3>
                            <ul>
                                { for contact.benefits.iter().map(|benefit| html! {
                                    <li><i class="fas fa-check"></i><span>{ benefit }</span></li>
                                }) }
                            </ul>
                        </div>
                    </div>

                    <div class="card quote-card">
                        <h3>{ &contact.form_title }</h3>
                        <form ref={form_ref} class="quote-form" onsubmit={onsubmit}>
                            { for config.quote_form.iter().map(form_field) }
                            <button type="submit" class="hero-cta submit">{"Request Quote"}</button>
                        </form>
                        <div class="call-direct">
                            <p>{ &contact.call_prompt }</p>
                            <a href={phone.tel_href()} class="call-button">
                                <i class="fas fa-phone"></i>
                                { format!("Call {}", phone.display) }
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .info-row {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .info-row h3 {
                    margin: 0 0 0.5rem;
                }
                .info-row p {
                    margin: 0.25rem 0;
                    color: #555;
                }
                .hours-days {
                    font-weight: 600;
                }
                .phone-link {
                    color: var(--primary);
                    font-size: 1.25rem;
                    font-weight: 600;
                    text-decoration: none;
                }
                .benefits ul {
                    list-style: none;
                    padding: 0;
                }
                .benefits li {
                    display: flex;
                    gap: 0.75rem;
                    margin: 0.5rem 0;
                }
                .benefits i {
                    color: var(--accent);
                }
                .quote-form {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .form-field {
                    grid-column: span 2;
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }
                .form-field.half {
                    grid-column: span 1;
                }
                .form-field label {
                    font-weight: 500;
                    font-size: 0.9rem;
                }
                .form-field input, .form-field select, .form-field textarea {
                    border: 1px solid #ccc;
                    border-radius: 6px;
                    padding: 0.7rem;
                    font: inherit;
                }
                .quote-form .submit {
                    grid-column: span 2;
                    width: 100%;
                }
                .call-direct {
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #eee;
                    text-align: center;
                }
                .call-button {
                    display: inline-flex;
                    gap: 0.5rem;
                    align-items: center;
                    background: var(--accent);
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }
                @media (max-width: 900px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
