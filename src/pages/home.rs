use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, nav_bar::NavBar,
    projects::Projects, reviews::Reviews, services::Services,
};
use crate::config::{SectionKind, SiteConfig};
use crate::dom::{DomViewport, ScrollListener};
use crate::nav::{NavAction, NavItem, NavState};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = props.config.clone();

    let nav = {
        let config = config.clone();
        use_reducer(move || {
            let items: Rc<[NavItem]> = config.nav.iter().cloned().collect();
            NavState::new(Rc::new(DomViewport), items, config.scroll)
        })
    };

    // Scroll-spy: one listener for the lifetime of the page
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = {
                    let dispatcher = dispatcher.clone();
                    ScrollListener::attach(move || dispatcher.dispatch(NavAction::Scrolled))
                };
                if listener.is_none() {
                    warn!("Could not attach scroll listener, section highlight disabled");
                }
                // Initial check
                dispatcher.dispatch(NavAction::Scrolled);
                move || drop(listener)
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |id: AttrValue| dispatcher.dispatch(NavAction::ScrollTo(id)))
    };

    let on_toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let section = |kind: &SectionKind| -> Html {
        match kind {
            SectionKind::Home => html! {
                <Hero config={config.clone()} on_navigate={on_navigate.clone()} />
            },
            SectionKind::About => html! { <About config={config.clone()} /> },
            SectionKind::Services => html! {
                <Services config={config.clone()} on_navigate={on_navigate.clone()} />
            },
            SectionKind::Projects => match &config.projects {
                Some(projects) => html! { <Projects projects={projects.clone()} /> },
                None => html! {},
            },
            SectionKind::Reviews => html! { <Reviews config={config.clone()} /> },
            SectionKind::Contact => html! { <Contact config={config.clone()} /> },
        }
    };

    html! {
        <div class="detailing-page" style={config.theme.css_vars(&config.scroll)}>
            <NavBar
                config={config.clone()}
                active={AttrValue::from(nav.active().to_string())}
                menu_open={nav.menu_open()}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            { for config.sections.iter().map(section) }
            <Footer config={config.clone()} on_navigate={on_navigate.clone()} />
            <style>
                {r#"
                .detailing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #222;
                    background: #fff;
                }
                .page-section {
                    padding: 6rem 1.5rem;
                }
                .alt-bg {
                    background: var(--light);
                }
                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .section-header {
                    text-align: center;
                    max-width: 720px;
                    margin: 0 auto 3.5rem;
                }
                .section-header h2 {
                    font-size: clamp(2rem, 4vw, 2.75rem);
                    color: var(--dark);
                    margin-bottom: 1rem;
                }
                .section-header p {
                    color: #555;
                    font-size: 1.1rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    padding: 2rem;
                    transition: box-shadow 0.2s;
                }
                .card:hover {
                    box-shadow: 0 12px 28px rgba(0, 0, 0, 0.12);
                }
                .icon-circle {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 1.5rem;
                }
                .icon-circle.small {
                    width: 40px;
                    height: 40px;
                    font-size: 1rem;
                }
                .icon-badge {
                    flex-shrink: 0;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: var(--primary);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                "#}
            </style>
        </div>
    }
}
