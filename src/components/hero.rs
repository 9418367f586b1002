use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<SiteConfig>,
    pub on_navigate: Callback<AttrValue>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.config.hero;
    let phone = &props.config.business.phone;

    let book = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(AttrValue::from("contact")))
    };

    html! {
        <section id="home" class="hero">
            <div
                class="hero-background"
                style={format!("background-image: url({});", hero.background_image)}
            ></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1>{ &hero.title }</h1>
                <p class="hero-subtitle">{ &hero.subtitle }</p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={book}>{ &hero.cta_label }</button>
                    <a href={phone.tel_href()} class="hero-call">
                        <i class="fas fa-phone"></i>
                        { format!("Call {}", phone.display) }
                    </a>
                </div>
                <div class="hero-badges">
                    { for hero.badges.iter().map(|badge| html! {
                        <div class="hero-badge">
                            <i class={badge.icon.clone()}></i>
                            <span>{ &badge.text }</span>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #fff;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.4));
                }
                .hero-content {
                    position: relative;
                    max-width: 900px;
                    padding: 6rem 1.5rem 3rem;
                }
                .hero-content h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 800;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #e5e5e5;
                    margin-bottom: 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 2.5rem;
                }
                .hero-cta {
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .hero-call {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: 2px solid #fff;
                    color: #fff;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    border-radius: 8px;
                    text-decoration: none;
                }
                .hero-call:hover {
                    background: #fff;
                    color: var(--dark);
                }
                .hero-badges {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2rem;
                    justify-content: center;
                    color: #ddd;
                }
                .hero-badge i {
                    color: var(--accent);
                    margin-right: 0.5rem;
                }
                "#}
            </style>
        </section>
    }
}
