use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::storage::{BrowserStorage, DismissalFlag, KeyValueStore};

fn promo_flag() -> DismissalFlag<BrowserStorage> {
    DismissalFlag::new(BrowserStorage::session(), config::PROMO_CLOSED_KEY)
}

fn initially_visible<S: KeyValueStore>(flag: &DismissalFlag<S>) -> bool {
    !flag.is_dismissed()
}

#[derive(Properties, PartialEq)]
pub struct PromoBannerProps {
    pub message: String,
}

#[function_component(PromoBanner)]
pub fn promo_banner(props: &PromoBannerProps) -> Html {
    let visible = use_state(|| {
        let visible = initially_visible(&promo_flag());
        if !visible {
            info!("Promo banner already closed this session");
        }
        visible
    });

    let close = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            visible.set(false);
            promo_flag().dismiss();
        })
    };

    html! {
        <div id="promo-banner" class="promo-banner" style={(!*visible).then(|| "display: none")}>
            <p>{&props.message}</p>
            <button id="promo-close" class="promo-close" aria-label="Cerrar" onclick={close}>
                {"×"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn banner_stays_hidden_after_close_for_the_session() {
        let session = MemoryStore::default();
        let flag = DismissalFlag::new(session.clone(), config::PROMO_CLOSED_KEY);
        assert!(initially_visible(&flag));

        flag.dismiss();

        let remounted = DismissalFlag::new(session, config::PROMO_CLOSED_KEY);
        assert!(!initially_visible(&remounted));
    }
}
