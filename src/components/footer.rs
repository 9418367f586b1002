use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub config: Rc<SiteConfig>,
    pub on_navigate: Callback<AttrValue>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let business = &props.config.business;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{ &business.name }</h3>
                    <p>{ &business.tagline }</p>
                    <div class="social-links">
                        { for business.social.iter().map(|link| html! {
                            <a href={link.href.clone()} aria-label={link.label.clone()}>
                                <i class={link.icon.clone()}></i>
                            </a>
                        }) }
                    </div>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for props.config.nav.iter().map(|item| {
                            let on_navigate = props.on_navigate.clone();
                            let id = AttrValue::from(item.id.clone());
                            html! {
                                <li>
                                    <button onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(id.clone()))}>
                                        { &item.label }
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact Info"}</h4>
                    <p><i class="fas fa-phone"></i><a href={business.phone.tel_href()}>{ &business.phone.display }</a></p>
                    <p><i class="fas fa-clock"></i><span>{ &business.hours_summary }</span></p>
                    <p><i class="fas fa-map-marker-alt"></i><span>{"Mobile Service Available"}</span></p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {} {}. All rights reserved.", year, business.legal_name) }</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--dark);
                    color: #ccc;
                    padding: 3rem 1.5rem 1.5rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .site-footer h3, .site-footer h4 {
                    color: #fff;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                }
                .site-footer button {
                    background: none;
                    border: none;
                    color: #ccc;
                    cursor: pointer;
                    padding: 0.25rem 0;
                    font: inherit;
                }
                .site-footer button:hover, .site-footer a:hover {
                    color: #fff;
                }
                .site-footer a {
                    color: #ccc;
                    text-decoration: none;
                }
                .site-footer p i {
                    color: var(--accent);
                    margin-right: 0.5rem;
                }
                .social-links {
                    display: flex;
                    gap: 1rem;
                    font-size: 1.25rem;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    font-size: 0.85rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
