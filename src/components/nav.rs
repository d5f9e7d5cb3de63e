use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::smooth_scroll::anchor_click;
use crate::components::theme_toggle::ThemeToggle;
use crate::error::{body, document, window, UiError};

/// Sections count as current this far before their top edge reaches the viewport.
const SECTION_LOOKAHEAD: f64 = 100.0;
const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("inicio", "Inicio"),
    ("productos", "Productos"),
    ("nosotros", "Nosotros"),
    ("faq", "Preguntas"),
    ("contacto", "Contacto"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_LOOKAHEAD;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// The section under the scroll offset; the first one in document order wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
}

pub fn is_header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Mobile menu panel; while open the page behind it does not scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// A click anywhere on the page closes the menu unless it landed on the
    /// panel or its toggle.
    pub fn page_click_closes(inside_menu: bool, inside_toggle: bool) -> bool {
        !inside_menu && !inside_toggle
    }

    /// Value for the body's `overflow` style.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn measure_sections() -> Result<Vec<SectionBounds>, UiError> {
    let nodes = document()?.query_selector_all("section[id]")?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(section) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            sections.push(SectionBounds {
                id: section.id(),
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            });
        }
    }
    Ok(sections)
}

fn sync_with_scroll(is_scrolled: &UseStateHandle<bool>, current: &UseStateHandle<Option<String>>) {
    let y = scroll_y();
    is_scrolled.set(is_header_scrolled(y));
    match measure_sections() {
        Ok(sections) => current.set(active_section(y, &sections).map(str::to_string)),
        Err(err) => warn!("Could not measure sections: {}", err),
    }
}

fn lock_page_scroll(menu: MenuState) -> Result<(), UiError> {
    body()?.style().set_property("overflow", menu.body_overflow())?;
    Ok(())
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state_eq(MenuState::default);
    let is_scrolled = use_state_eq(|| false);
    let current_section = use_state_eq(|| None::<String>);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        let current_section = current_section.clone();
        use_effect_with_deps(
            move |_| {
                sync_with_scroll(&is_scrolled, &current_section);

                let listener = window().ok().and_then(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        sync_with_scroll(&is_scrolled, &current_section);
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .ok()?;
                    Some((window, scroll_callback))
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    use_effect_with_deps(
        move |menu| {
            if let Err(err) = lock_page_scroll(*menu) {
                warn!("Could not update page scroll lock: {}", err);
            }
            || ()
        },
        *menu,
    );

    // Close on any click outside the panel and its toggle.
    {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map_or(false, |node| node.contains(target.as_ref()))
            };
            if MenuState::page_click_closes(inside(&menu_ref), inside(&toggle_ref)) {
                menu.set(menu.closed());
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggled();
            debug!("Menu toggled, open: {}", next.is_open());
            menu.set(next);
        })
    };

    let link_click = |href: String| {
        let menu = menu.clone();
        let scroll = anchor_click(href);
        Callback::from(move |e: MouseEvent| {
            menu.set(menu.closed());
            scroll.emit(e);
        })
    };

    html! {
        <header id="header" class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav container">
                <a href="#inicio" class="nav-logo" onclick={anchor_click("#inicio")}>
                    {"Pedacitos"}
                </a>
                <ul id="nav-menu" ref={menu_ref} class={classes!("nav-menu", menu.is_open().then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let href = format!("#{}", id);
                        let is_current = current_section.as_deref() == Some(*id);
                        html! {
                            <li>
                                <a href={href.clone()}
                                   class={classes!("nav-link", is_current.then(|| "active"))}
                                   onclick={link_click(href)}>
                                    {*label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button id="nav-toggle"
                            ref={toggle_ref}
                            class={classes!("nav-toggle", menu.is_open().then(|| "active"))}
                            aria-label="Abrir menú"
                            onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        [("inicio", 0.0, 600.0), ("productos", 600.0, 900.0), ("faq", 1500.0, 400.0)]
            .iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top: *top,
                height: *height,
            })
            .collect()
    }

    #[test]
    fn section_becomes_current_100px_early() {
        let sections = page();
        assert_eq!(active_section(0.0, &sections), Some("inicio"));
        assert_eq!(active_section(499.0, &sections), Some("inicio"));
        assert_eq!(active_section(500.0, &sections), Some("productos"));
        assert_eq!(active_section(1399.0, &sections), Some("productos"));
        assert_eq!(active_section(1400.0, &sections), Some("faq"));
    }

    #[test]
    fn range_end_is_exclusive() {
        let sections = page();
        // faq covers [1400, 1800)
        assert_eq!(active_section(1799.0, &sections), Some("faq"));
        assert_eq!(active_section(1800.0, &sections), None);
    }

    #[test]
    fn no_section_outside_all_ranges() {
        let sections = vec![SectionBounds {
            id: "contacto".to_string(),
            top: 2000.0,
            height: 300.0,
        }];
        assert_eq!(active_section(0.0, &sections), None);
        assert_eq!(active_section(5000.0, &sections), None);
        assert_eq!(active_section(100.0, &[]), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_first_in_document_order() {
        let mut sections = page();
        sections.push(SectionBounds {
            id: "banner".to_string(),
            top: 0.0,
            height: 2000.0,
        });
        assert_eq!(active_section(50.0, &sections), Some("inicio"));
    }

    #[test]
    fn each_offset_maps_to_its_hand_computed_section() {
        // inicio [-100, 500), productos [500, 1400), faq [1400, 1800)
        let sections = page();
        let expected = [
            (-150.0, None),
            (-100.0, Some("inicio")),
            (250.0, Some("inicio")),
            (499.9, Some("inicio")),
            (500.0, Some("productos")),
            (1000.0, Some("productos")),
            (1400.0, Some("faq")),
            (1799.9, Some("faq")),
            (1800.0, None),
        ];
        for (y, id) in expected {
            assert_eq!(active_section(y, &sections), id, "offset {}", y);
        }
    }

    #[test]
    fn header_scrolled_only_past_50() {
        assert!(!is_header_scrolled(0.0));
        assert!(!is_header_scrolled(50.0));
        assert!(is_header_scrolled(50.5));
        assert!(is_header_scrolled(900.0));
    }

    #[test]
    fn menu_toggle_opens_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());
    }

    #[test]
    fn link_click_closes_the_menu() {
        let menu = MenuState::default().toggled();
        assert_eq!(menu.closed(), MenuState::default());
        assert_eq!(MenuState::default().closed(), MenuState::default());
    }

    #[test]
    fn only_clicks_outside_panel_and_toggle_close_it() {
        assert!(!MenuState::page_click_closes(true, false));
        assert!(!MenuState::page_click_closes(false, true));
        assert!(!MenuState::page_click_closes(true, true));
        assert!(MenuState::page_click_closes(false, false));

        let open = MenuState::default().toggled();
        assert!(!open.closed().is_open());
    }

    #[test]
    fn body_overflow_locked_only_while_open() {
        let menu = MenuState::default();
        assert_eq!(menu.body_overflow(), "");
        assert_eq!(menu.toggled().body_overflow(), "hidden");
        assert_eq!(menu.toggled().toggled().body_overflow(), "");
    }
}
