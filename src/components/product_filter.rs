use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::content::{Category, Product};

pub const ALL_CATEGORIES: &str = "all";

const FADE_IN_BASE_MS: u32 = 50;
const FADE_IN_STAGGER_MS: u32 = 50;
const FADE_OUT_MS: u32 = 300;

pub fn matches(selected: &str, tag: &str) -> bool {
    selected == ALL_CATEGORIES || selected == tag
}

/// What happens to one card after a category is picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStep {
    /// Display now, fade in after `delay_ms`.
    Show { delay_ms: u32 },
    /// Fade out now, remove from layout after `delay_ms`.
    Hide { delay_ms: u32 },
}

pub fn filter_plan<'a>(selected: &str, tags: impl IntoIterator<Item = &'a str>) -> Vec<CardStep> {
    tags.into_iter()
        .enumerate()
        .map(|(index, tag)| {
            if matches(selected, tag) {
                CardStep::Show {
                    delay_ms: FADE_IN_BASE_MS + FADE_IN_STAGGER_MS * index as u32,
                }
            } else {
                CardStep::Hide {
                    delay_ms: FADE_OUT_MS,
                }
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub tag: String,
    /// `display: block` vs `display: none`.
    pub displayed: bool,
    /// `opacity: 1; translateY(0)` vs `opacity: 0; translateY(20px)`.
    pub faded_in: bool,
}

impl CardView {
    fn style(&self) -> String {
        format!(
            "display: {}; opacity: {}; transform: {};",
            if self.displayed { "block" } else { "none" },
            if self.faded_in { "1" } else { "0" },
            if self.faded_in { "translateY(0)" } else { "translateY(20px)" },
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub selected: String,
    pub cards: Vec<CardView>,
}

impl FilterState {
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
            cards: tags
                .into_iter()
                .map(|tag| CardView {
                    tag,
                    displayed: true,
                    faded_in: true,
                })
                .collect(),
        }
    }
}

pub enum FilterAction {
    Select(String),
    FadeIn(usize),
    Collapse(usize),
}

impl Reducible for FilterState {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FilterAction::Select(selected) => {
                for card in next.cards.iter_mut() {
                    if matches(&selected, &card.tag) {
                        card.displayed = true;
                    } else {
                        card.faded_in = false;
                    }
                }
                next.selected = selected;
            }
            // Delayed steps only apply if a later selection has not reversed them.
            FilterAction::FadeIn(index) => {
                let selected = next.selected.clone();
                match next.cards.get_mut(index) {
                    Some(card) if matches(&selected, &card.tag) => card.faded_in = true,
                    _ => return self,
                }
            }
            FilterAction::Collapse(index) => {
                let selected = next.selected.clone();
                match next.cards.get_mut(index) {
                    Some(card) if !matches(&selected, &card.tag) => card.displayed = false,
                    _ => return self,
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductFilterProps {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

#[function_component(ProductFilter)]
pub fn product_filter(props: &ProductFilterProps) -> Html {
    let state = {
        let tags: Vec<String> = props.products.iter().map(|p| p.category.clone()).collect();
        use_reducer(move || FilterState::new(tags))
    };

    let select = |tag: String| {
        let state = state.clone();
        let tags: Vec<String> = props.products.iter().map(|p| p.category.clone()).collect();
        Callback::from(move |_: MouseEvent| {
            debug!("Filtering products by {}", tag);
            state.dispatch(FilterAction::Select(tag.clone()));
            let plan = filter_plan(&tag, tags.iter().map(String::as_str));
            for (index, step) in plan.into_iter().enumerate() {
                let dispatcher = state.dispatcher();
                let (delay_ms, action) = match step {
                    CardStep::Show { delay_ms } => (delay_ms, FilterAction::FadeIn(index)),
                    CardStep::Hide { delay_ms } => (delay_ms, FilterAction::Collapse(index)),
                };
                Timeout::new(delay_ms, move || dispatcher.dispatch(action)).forget();
            }
        })
    };

    html! {
        <>
            <div class="categories">
                { for props.categories.iter().map(|category| html! {
                    <button
                        class={classes!("category-btn", (state.selected == category.tag).then(|| "active"))}
                        data-category={category.tag.clone()}
                        onclick={select(category.tag.clone())}
                    >
                        {&category.label}
                    </button>
                }) }
            </div>
            <div class="products-grid">
                { for props.products.iter().zip(state.cards.iter()).map(|(product, card)| html! {
                    <article class="product-card" data-category={product.category.clone()} style={card.style()}>
                        <LazyImage src={product.image.clone()} alt={product.name.clone()} />
                        <div class="product-info">
                            <h3>{&product.name}</h3>
                            <p>{&product.description}</p>
                            <span class="product-price">{&product.price}</span>
                        </div>
                    </article>
                }) }
            </div>
        </>
    }
}
