use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::observer::{ObserverOptions, ViewportObserver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    StaggerChildren,
    Reveal,
}

impl Animation {
    pub fn class(self) -> &'static str {
        match self {
            Animation::FadeInUp => "fade-in-up",
            Animation::FadeInLeft => "fade-in-left",
            Animation::FadeInRight => "fade-in-right",
            Animation::ScaleIn => "scale-in",
            Animation::StaggerChildren => "stagger-children",
            Animation::Reveal => "reveal",
        }
    }
}

/// One-way switch: hidden until the first intersecting entry, then revealed
/// for good.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

impl Reducible for RevealState {
    /// Whether the observed entry is intersecting.
    type Action = bool;

    fn reduce(self: Rc<Self>, is_intersecting: bool) -> Rc<Self> {
        if self.revealed || !is_intersecting {
            self
        } else {
            Rc::new(Self { revealed: true })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub animation: Animation,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in an element that gains `visible active` the first time it
/// scrolls into view, and keeps them.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let state = use_reducer(RevealState::default);

    {
        let node_ref = node_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = node_ref.cast::<Element>().and_then(|element| {
                    let observer = ViewportObserver::new(ObserverOptions::REVEAL, move |entry, observer| {
                        let intersecting = entry.is_intersecting();
                        dispatcher.dispatch(intersecting);
                        if intersecting {
                            observer.unobserve(&entry.target());
                        }
                    });
                    match observer {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some(observer)
                        }
                        Err(err) => {
                            warn!("Scroll reveal unavailable: {}", err);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    let revealed = state.is_revealed();
    html! {
        <div
            ref={node_ref}
            class={classes!(
                props.animation.class(),
                props.class.clone(),
                revealed.then(|| "visible"),
                revealed.then(|| "active")
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
