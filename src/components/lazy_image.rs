use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::js_sys::{self, Reflect};
use web_sys::{Element, Event};
use yew::prelude::*;

use crate::observer::{ObserverOptions, ViewportObserver};

/// Attribute holding the real source until the fallback observer swaps it in.
const STAGING_SRC_ATTR: &str = "data-src";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyStrategy {
    /// The browser defers `loading="lazy"` images itself.
    Native,
    /// Older browsers: swap `data-src` into `src` when the image scrolls into view.
    Observer,
}

impl LazyStrategy {
    pub fn detect() -> Self {
        if supports_native_lazy_loading() {
            LazyStrategy::Native
        } else {
            LazyStrategy::Observer
        }
    }
}

/// `'loading' in HTMLImageElement.prototype`
fn supports_native_lazy_loading() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("HTMLImageElement"))
        .and_then(|ctor| Reflect::get(&ctor, &JsValue::from_str("prototype")))
        .and_then(|proto| Reflect::has(&proto, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

/// Source and `loaded` marker of one image. Both paths settle exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LazyImageState {
    pub src: Option<String>,
    pub loaded: bool,
}

pub enum LazyImageAction {
    /// The browser fired `load` on a natively deferred image.
    NativeLoad,
    /// The fallback observer saw the image; carries its staged source.
    Intersect { staged: Option<String> },
}

impl Reducible for LazyImageState {
    type Action = LazyImageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.loaded {
            return self;
        }
        match action {
            LazyImageAction::NativeLoad => Rc::new(Self {
                src: self.src.clone(),
                loaded: true,
            }),
            LazyImageAction::Intersect { staged } => Rc::new(Self {
                src: staged.or_else(|| self.src.clone()),
                loaded: true,
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: String,
    pub alt: String,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let strategy = use_state(LazyStrategy::detect);
    let state = use_reducer(LazyImageState::default);
    let img_ref = use_node_ref();

    {
        let img_ref = img_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |strategy| {
                let observer = match (*strategy, img_ref.cast::<Element>()) {
                    (LazyStrategy::Observer, Some(img)) => {
                        let observer = ViewportObserver::new(ObserverOptions::DEFAULT, move |entry, observer| {
                            if entry.is_intersecting() {
                                let img = entry.target();
                                dispatcher.dispatch(LazyImageAction::Intersect {
                                    staged: img.get_attribute(STAGING_SRC_ATTR),
                                });
                                observer.unobserve(&img);
                            }
                        });
                        match observer {
                            Ok(observer) => {
                                observer.observe(&img);
                                Some(observer)
                            }
                            Err(err) => {
                                warn!("Lazy image fallback unavailable: {}", err);
                                None
                            }
                        }
                    }
                    _ => None,
                };
                move || drop(observer)
            },
            *strategy,
        );
    }

    match *strategy {
        LazyStrategy::Native => {
            let onload = {
                let dispatcher = state.dispatcher();
                Callback::from(move |_: Event| dispatcher.dispatch(LazyImageAction::NativeLoad))
            };
            html! {
                <img
                    ref={img_ref}
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    loading="lazy"
                    class={classes!("lazy-image", state.loaded.then(|| "loaded"))}
                    {onload}
                />
            }
        }
        LazyStrategy::Observer => html! {
            <img
                ref={img_ref}
                src={state.src.clone()}
                data-src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                class={classes!(state.loaded.then(|| "loaded"))}
            />
        },
    }
}
