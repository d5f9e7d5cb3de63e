use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::error::{window, UiError};
use crate::storage::{BrowserStorage, DismissalFlag, KeyValueStore};

const SHOW_DELAY_MS: u32 = 5000;

pub fn subscription_message(email: &str) -> String {
    format!(
        "¡Hola! Me gustaría suscribirme a las ofertas de Pedacitos. Mi email es: {}",
        email
    )
}

/// `encodeURIComponent` leaves these unreserved marks as they are.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes like `encodeURIComponent`.
fn encode_uri_component(text: &str) -> String {
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

/// WhatsApp deep link carrying the subscription message. The email is not validated.
pub fn whatsapp_link(email: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        encode_uri_component(&subscription_message(email))
    )
}

fn popup_flag() -> DismissalFlag<BrowserStorage> {
    DismissalFlag::new(BrowserStorage::session(), config::POPUP_CLOSED_KEY)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    /// Counting down to the first showing.
    Waiting,
    Visible,
    /// Closed or submitted; stays hidden for the rest of the session.
    Dismissed,
}

pub enum PopupAction {
    TimerElapsed,
    Dismiss,
}

impl PopupPhase {
    pub fn initial<S: KeyValueStore>(flag: &DismissalFlag<S>) -> Self {
        if flag.is_dismissed() {
            PopupPhase::Dismissed
        } else {
            PopupPhase::Waiting
        }
    }

    pub fn next(self, action: PopupAction) -> Self {
        match (self, action) {
            (PopupPhase::Waiting, PopupAction::TimerElapsed) => PopupPhase::Visible,
            (_, PopupAction::Dismiss) => PopupPhase::Dismissed,
            (phase, _) => phase,
        }
    }
}

impl Reducible for PopupPhase {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.next(action))
    }
}

fn open_whatsapp(email: &str) -> Result<(), UiError> {
    window()?.open_with_url_and_target(&whatsapp_link(email), "_blank")?;
    Ok(())
}

#[function_component(SubscribePopup)]
pub fn subscribe_popup() -> Html {
    let phase = use_reducer(|| {
        let phase = PopupPhase::initial(&popup_flag());
        match phase {
            PopupPhase::Dismissed => info!("Subscribe popup already dismissed this session"),
            _ => info!("Subscribe popup scheduled in {}ms", SHOW_DELAY_MS),
        }
        phase
    });
    let input_ref = use_node_ref();

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = (*phase == PopupPhase::Waiting).then(|| {
                    let dispatcher = phase.dispatcher();
                    Timeout::new(SHOW_DELAY_MS, move || dispatcher.dispatch(PopupAction::TimerElapsed))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            phase.dispatch(PopupAction::Dismiss);
            popup_flag().dismiss();
        })
    };

    let submit = {
        let phase = phase.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            if let Err(err) = open_whatsapp(&email) {
                warn!("Could not open WhatsApp link: {}", err);
            }
            phase.dispatch(PopupAction::Dismiss);
            popup_flag().dismiss();
        })
    };

    html! {
        <div id="subscribe-popup" class={classes!("subscribe-popup", (*phase == PopupPhase::Visible).then(|| "active"))}>
            <div class="subscribe-content">
                <button id="subscribe-close" class="subscribe-close" aria-label="Cerrar" onclick={close}>
                    {"×"}
                </button>
                <h3>{"¡No te pierdas nuestras ofertas!"}</h3>
                <p>{"Déjanos tu email y te escribimos por WhatsApp con las novedades de la semana."}</p>
                <form id="subscribe-form" onsubmit={submit}>
                    <input ref={input_ref} type="email" placeholder="tu@email.com" />
                    <button type="submit" class="btn btn-primary">{"Suscribirme"}</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn text_param(link: &str) -> String {
        let (base, query) = link.split_once("?text=").unwrap();
        assert_eq!(base, "https://wa.me/59173476653");
        urlencoding::decode(query).unwrap().into_owned()
    }

    #[test]
    fn link_carries_the_email_in_the_template() {
        let text = text_param(&whatsapp_link("a@b.com"));
        assert_eq!(
            text,
            "¡Hola! Me gustaría suscribirme a las ofertas de Pedacitos. Mi email es: a@b.com"
        );
        assert_eq!(text.matches("a@b.com").count(), 1);
    }

    #[test]
    fn link_text_is_fully_encoded() {
        let link = whatsapp_link("x y&z=1");
        let (_, query) = link.split_once("?text=").unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(text_param(&link).ends_with("Mi email es: x y&z=1"));
    }

    #[test]
    fn link_text_matches_browser_uri_component_encoding() {
        let link = whatsapp_link("a@b.com");
        assert!(link.contains("?text=%C2%A1Hola!%20Me%20gustar%C3%ADa"));
        assert!(link.ends_with("es%3A%20a%40b.com"));
        assert_eq!(encode_uri_component("(it's) *new*!"), "(it's)%20*new*!");
        assert_eq!(encode_uri_component("~-_."), "~-_.");
    }

    #[test]
    fn empty_email_is_sent_as_is() {
        assert!(text_param(&whatsapp_link("")).ends_with("Mi email es: "));
    }

    #[test]
    fn shows_after_timer_unless_dismissed() {
        let session = MemoryStore::default();
        let flag = DismissalFlag::new(session, config::POPUP_CLOSED_KEY);
        let phase = PopupPhase::initial(&flag);
        assert_eq!(phase, PopupPhase::Waiting);
        assert_eq!(phase.next(PopupAction::TimerElapsed), PopupPhase::Visible);
    }

    #[test]
    fn dismissal_suppresses_for_the_session() {
        let session = MemoryStore::default();
        let flag = DismissalFlag::new(session.clone(), config::POPUP_CLOSED_KEY);
        let phase = PopupPhase::initial(&flag)
            .next(PopupAction::TimerElapsed)
            .next(PopupAction::Dismiss);
        flag.dismiss();
        assert_eq!(phase, PopupPhase::Dismissed);
        assert_eq!(phase.next(PopupAction::TimerElapsed), PopupPhase::Dismissed);

        let remounted = DismissalFlag::new(session, config::POPUP_CLOSED_KEY);
        assert_eq!(PopupPhase::initial(&remounted), PopupPhase::Dismissed);
    }

    #[test]
    fn dismiss_before_timer_keeps_it_hidden() {
        let phase = PopupPhase::Waiting
            .next(PopupAction::Dismiss)
            .next(PopupAction::TimerElapsed);
        assert_eq!(phase, PopupPhase::Dismissed);
    }
}
