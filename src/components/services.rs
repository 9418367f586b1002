use std::rc::Rc;

use yew::prelude::*;

use crate::config::{Service, SiteConfig};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub config: Rc<SiteConfig>,
    pub on_navigate: Callback<AttrValue>,
}

fn service_card(service: &Service) -> Html {
    html! {
        <div class="card service-card">
            <div class="icon-circle" style={format!("background: {};", service.color)}>
                <i class={service.icon.clone()}></i>
            </div>
            <h3>{ &service.title }</h3>
            <p>{ &service.description }</p>
            <ul>
                { for service.features.iter().map(|feature| html! {
                    <li>{ format!("• {}", feature) }</li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let services = &props.config.services;

    let get_quote = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(AttrValue::from("contact")))
    };

    html! {
        <section id="services" class="page-section services alt-bg">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &services.heading }</h2>
                    <p>{ &services.intro }</p>
                </div>
                <div class="card-grid">
                    { for services.items.iter().map(service_card) }
                </div>
                <div class="section-cta">
                    <button class="hero-cta" onclick={get_quote}>{ &services.cta_label }</button>
                </div>
            </div>
            <style>
                {r#"
                .service-card h3 {
                    font-size: 1.25rem;
                    margin: 1rem 0 0.5rem;
                    color: var(--dark);
                }
                .service-card p {
                    color: #555;
                    margin-bottom: 1rem;
                }
                .service-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    color: #666;
                    font-size: 0.9rem;
                    line-height: 1.8;
                }
                .section-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                "#}
            </style>
        </section>
    }
}
