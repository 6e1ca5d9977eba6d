use yew::prelude::*;

use wheel_core::collaborators::Notifier;
use wheel_core::slices::Sentiment;

use crate::styles;

/// Everything the result dialog needs to show one notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub header: String,
    pub icon: String,
    pub message: String,
    pub sentiment: Sentiment,
}

/// `Notifier` backed by a Yew state handle: the engine pushes a notice,
/// the page re-renders the modal.
pub struct ModalNotifier {
    pub notice: UseStateHandle<Option<Notice>>,
}

impl Notifier for ModalNotifier {
    fn notify(&mut self, header: &str, icon: &str, message: &str, sentiment: Sentiment) {
        self.notice.set(Some(Notice {
            header: header.to_string(),
            icon: icon.to_string(),
            message: message.to_string(),
            sentiment,
        }));
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let message_color = match notice.sentiment {
        Sentiment::Positive => "text-green-400",
        Sentiment::Negative => "text-red-400",
        Sentiment::Neutral => "text-white",
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={props.on_close.clone()}>
            <div class={styles::MODAL_CARD} onclick={keep_open}>
                <h2 class="text-2xl font-bold text-white">{ &notice.header }</h2>
                <div class="text-6xl my-4">{ &notice.icon }</div>
                <p class={classes!("text-xl", "font-semibold", message_color)}>
                    { &notice.message }
                </p>
                <button class={styles::MODAL_CLOSE} onclick={props.on_close.clone()}>
                    { "Close" }
                </button>
            </div>
        </div>
    }
}
