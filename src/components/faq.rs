use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

/// Question/answer list where at most one item is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Clicking the open item collapses everything; any other item opens alone.
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| accordion.set(accordion.toggle(index)))
                };
                html! {
                    <FaqItem
                        question={entry.question.clone()}
                        answer={entry.answer.clone()}
                        is_open={accordion.is_open(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_collapsed() {
        let accordion = Accordion::default();
        assert_eq!(accordion, Accordion { open: None });
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn clicking_a_closed_item_opens_only_that_one() {
        let accordion = Accordion::default().toggle(2);
        assert!(accordion.is_open(2));

        let accordion = accordion.toggle(0);
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(2));
    }

    #[test]
    fn clicking_the_open_item_collapses_everything() {
        let accordion = Accordion::default().toggle(1).toggle(1);
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn never_more_than_one_open() {
        let clicks = [0, 3, 3, 1, 2, 2, 2, 0, 1];
        let mut accordion = Accordion::default();
        for index in clicks {
            let was_open = accordion.is_open(index);
            accordion = accordion.toggle(index);
            let open_count = (0..4).filter(|i| accordion.is_open(*i)).count();
            assert!(open_count <= 1);
            assert_eq!(accordion.is_open(index), !was_open);
        }
    }
}
