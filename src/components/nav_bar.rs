use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::nav::NavItem;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub config: Rc<SiteConfig>,
    pub active: AttrValue,
    pub menu_open: bool,
    pub on_navigate: Callback<AttrValue>,
    pub on_toggle_menu: Callback<()>,
}

fn nav_buttons(items: &[NavItem], active: &str, class: &'static str, on_navigate: &Callback<AttrValue>) -> Html {
    items
        .iter()
        .map(|item| {
            let id = AttrValue::from(item.id.clone());
            let onclick = {
                let on_navigate = on_navigate.clone();
                let id = id.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_navigate.emit(id.clone());
                })
            };
            html! {
                <button
                    key={item.id.clone()}
                    class={classes!(class, (item.id == active).then(|| "active"))}
                    onclick={onclick}
                >
                    { &item.label }
                </button>
            }
        })
        .collect()
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps {
        config,
        active,
        menu_open,
        on_navigate,
        on_toggle_menu,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let go_home = {
        let on_navigate = on_navigate.clone();
        let first = config.nav.first().map(|item| AttrValue::from(item.id.clone()));
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(id) = first.clone() {
                on_navigate.emit(id);
            }
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go_home}>{ &config.business.name }</a>

                <div class="nav-links">
                    { nav_buttons(&config.nav, active, "nav-link", on_navigate) }
                </div>

                <button
                    class={classes!("burger-menu", menu_open.then(|| "open"))}
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { nav_buttons(&config.nav, active, "mobile-nav-link", on_navigate) }
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: var(--header-height);
                    background: rgba(255, 255, 255, 0.97);
                    box-shadow: 0 1px 6px rgba(0, 0, 0, 0.08);
                    z-index: 50;
                }
                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--primary);
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    gap: 0.5rem;
                }
                .nav-link, .mobile-nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.95rem;
                    font-weight: 500;
                    color: #555;
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    transition: color 0.2s;
                }
                .nav-link:hover, .mobile-nav-link:hover {
                    color: var(--primary);
                }
                .nav-link.active, .mobile-nav-link.active {
                    color: var(--primary);
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--dark);
                    transition: transform 0.2s;
                }
                .mobile-menu {
                    display: none;
                    background: #fff;
                    border-top: 1px solid #eee;
                    padding: 0.5rem 1rem 1rem;
                }
                .mobile-nav-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .mobile-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
