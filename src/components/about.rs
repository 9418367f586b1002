use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.config.about;

    html! {
        <section id="about" class="page-section about">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &about.heading }</h2>
                    <p>{ &about.intro }</p>
                </div>
                <div class="about-grid">
                    <img src={about.image.clone()} alt={about.image_alt.clone()} loading="lazy" />
                    <div>
                        <h3>{ &about.title }</h3>
                        <p class="about-body">{ &about.body }</p>
                        <div class="highlight-grid">
                            { for about.highlights.iter().map(|h| html! {
                                <div class="highlight">
                                    <div class="icon-badge"><i class={h.icon.clone()}></i></div>
                                    <div>
                                        <h4>{ &h.title }</h4>
                                        <p>{ &h.text }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-grid img {
                    width: 100%;
                    border-radius: 12px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                }
                .about-grid h3 {
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                    color: var(--dark);
                }
                .about-body {
                    color: #555;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .highlight-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .highlight {
                    display: flex;
                    gap: 0.75rem;
                    align-items: flex-start;
                }
                .highlight h4 {
                    margin: 0 0 0.25rem;
                }
                .highlight p {
                    margin: 0;
                    color: #666;
                    font-size: 0.9rem;
                }
                @media (max-width: 900px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
