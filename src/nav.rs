//! Scroll-spy and smooth-scroll navigation.
//!
//! `NavState` is a Yew reducer owned by the page. It reaches the document only
//! through [`Viewport`], so the browser binding lives in `dom.rs` and tests
//! drive it with an in-memory layout.

use std::rc::Rc;

use log::debug;
use serde::Deserialize;
use yew::prelude::*;

use crate::config::ScrollMetrics;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

/// Vertical extent of a section in document pixels: `[top, top + height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Layout extent of the element with this id, if it exists.
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;

    /// Document-relative top of the element with this id, if it exists.
    fn section_page_top(&self, id: &str) -> Option<f64>;

    /// Starts an animated scroll; completion is not observed.
    fn smooth_scroll_to(&self, top: f64);
}

pub enum NavAction {
    /// A scroll event fired.
    Scrolled,
    ScrollTo(AttrValue),
    ToggleMenu,
}

#[derive(Clone)]
pub struct NavState {
    viewport: Rc<dyn Viewport>,
    items: Rc<[NavItem]>,
    metrics: ScrollMetrics,
    active: AttrValue,
    menu_open: bool,
}

impl PartialEq for NavState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
            && self.metrics == other.metrics
            && self.active == other.active
            && self.menu_open == other.menu_open
    }
}

impl NavState {
    pub fn new(viewport: Rc<dyn Viewport>, items: Rc<[NavItem]>, metrics: ScrollMetrics) -> Self {
        let active = items
            .first()
            .map(|item| AttrValue::from(item.id.clone()))
            .unwrap_or(AttrValue::Static(""));
        Self {
            viewport,
            items,
            metrics,
            active,
            menu_open: false,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Where the page should scroll to bring `id` just below the fixed header.
    pub fn scroll_target(&self, id: &str) -> Option<f64> {
        self.viewport
            .section_page_top(id)
            .map(|top| top - self.metrics.header_offset)
    }

    /// First nav section, in declaration order, containing the look-ahead
    /// position. `None` leaves the highlight where it was.
    pub fn locate_active(&self) -> Option<&NavItem> {
        let position = self.viewport.scroll_offset() + self.metrics.lookahead;
        self.items.iter().find(|item| {
            self.viewport
                .section_bounds(&item.id)
                .map_or(false, |bounds| bounds.contains(position))
        })
    }

    fn with_menu(self: Rc<Self>, open: bool) -> Rc<Self> {
        if self.menu_open == open {
            return self;
        }
        Rc::new(Self {
            menu_open: open,
            ..(*self).clone()
        })
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    // Returning `self` untouched keeps scroll events that don't move the
    // highlight from re-rendering the nav bar.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Scrolled => {
                let next = self
                    .locate_active()
                    .filter(|item| item.id != *self.active)
                    .map(|item| AttrValue::from(item.id.clone()));
                match next {
                    Some(active) => Rc::new(Self {
                        active,
                        ..(*self).clone()
                    }),
                    None => self,
                }
            }
            NavAction::ScrollTo(id) => {
                match self.scroll_target(&id) {
                    Some(top) => self.viewport.smooth_scroll_to(top),
                    None => debug!("No section with id '{}'", id),
                }
                self.with_menu(false)
            }
            NavAction::ToggleMenu => {
                let open = !self.menu_open;
                self.with_menu(open)
            }
        }
    }
}
