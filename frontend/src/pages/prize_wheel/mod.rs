mod wheel_canvas;
mod wheel_hud;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use wheel_core::config::WheelConfig;
use wheel_core::wheel::{PrizeWheel, SpinRequest, TickOutcome};

use crate::components::confetti::ConfettiRain;
use crate::components::result_modal::{ModalNotifier, Notice, ResultModal};
use crate::styles;
use wheel_canvas::{CanvasRenderer, WheelCanvas};
use wheel_hud::{SpinsLeftLabel, WinningsLabel};

/// The concrete widget: engine plus the DOM-backed collaborators.
type WheelWidget = PrizeWheel<CanvasRenderer, ModalNotifier, ConfettiRain>;

// Keyframes for the money-bill rain, injected while this page is
// mounted.
const CUSTOM_CSS: &str = r#"
.confetti {
    position: fixed;
    top: -40px;
    font-size: 1.6rem;
    pointer-events: none;
    animation: confetti-fall 2.2s linear forwards;
}

@keyframes confetti-fall {
    to {
        transform: translateY(105vh) rotate(360deg);
    }
}
"#;

/// Self-re-arming animation chain: each step schedules its own successor
/// only after it ran, so there is never more than one pending wheel
/// timer. The chain dies on the terminal tick and hands over to the
/// counter chain if a payout needs counting.
fn schedule_tick(
    wheel: Rc<RefCell<WheelWidget>>,
    tick_ms: u32,
    count_delay_ms: u32,
    winnings: UseStateHandle<i64>,
    is_spinning: UseStateHandle<bool>,
    counting: UseStateHandle<Option<bool>>,
) {
    Timeout::new(tick_ms, move || {
        let outcome = wheel.borrow_mut().tick();
        match outcome {
            TickOutcome::StillSpinning => {
                schedule_tick(wheel, tick_ms, count_delay_ms, winnings, is_spinning, counting);
            }
            TickOutcome::Resolved(resolved) => {
                is_spinning.set(false);
                if let Some(payout) = resolved.payout {
                    counting.set(Some(payout >= 0));
                    schedule_count(wheel, count_delay_ms, winnings, counting);
                }
            }
            TickOutcome::Idle => {}
        }
    })
    .forget();
}

/// Self-re-arming counter chain driving the winnings label one unit per
/// step until the ledger settles.
fn schedule_count(
    wheel: Rc<RefCell<WheelWidget>>,
    count_delay_ms: u32,
    winnings: UseStateHandle<i64>,
    counting: UseStateHandle<Option<bool>>,
) {
    Timeout::new(count_delay_ms, move || {
        let step = wheel.borrow_mut().step_ledger();
        match step {
            Some(value) => {
                winnings.set(value);
                schedule_count(wheel, count_delay_ms, winnings, counting);
            }
            None => counting.set(None),
        }
    })
    .forget();
}

#[function_component(PrizeWheelPage)]
pub fn prize_wheel_page() -> Html {
    let config = WheelConfig::default();
    let tick_ms = config.tick_interval_ms;
    let count_delay_ms = config.count_step_delay_ms;

    let canvas_ref = use_node_ref();
    let notice = use_state(|| None::<Notice>);
    let winnings = use_state(|| 0_i64);
    let spins_left = use_state(|| config.max_spins);
    let is_spinning = use_state(|| false);
    let counting = use_state(|| None::<bool>);

    let wheel = {
        let canvas_ref = canvas_ref.clone();
        let notice = notice.clone();
        use_mut_ref(move || -> WheelWidget {
            PrizeWheel::new(
                config,
                CanvasRenderer::new(canvas_ref),
                ModalNotifier { notice },
                ConfettiRain,
            )
            .expect("the default wheel configuration is valid")
        })
    };

    // Inject the confetti keyframes for the lifetime of this page.
    use_effect_with((), move |_| {
        let style_element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                let head = document.head()?;
                let style = document.create_element("style").ok()?;
                style.set_text_content(Some(CUSTOM_CSS));
                head.append_child(&style).ok()?;
                Some(style)
            });
        move || {
            if let Some(style) = style_element {
                if let Some(parent) = style.parent_node() {
                    let _ = parent.remove_child(&style);
                }
            }
        }
    });

    // First paint once the canvas is mounted, then repaint on resize.
    {
        let wheel = wheel.clone();
        use_effect_with((), move |_| {
            wheel.borrow_mut().render_now();
            let listener = web_sys::window().map(|window| {
                let wheel = wheel.clone();
                EventListener::new(&window, "resize", move |_| {
                    wheel.borrow_mut().render_now();
                })
            });
            move || drop(listener)
        });
    }

    let on_spin = {
        let wheel = wheel.clone();
        let spins_left = spins_left.clone();
        let is_spinning = is_spinning.clone();
        let winnings = winnings.clone();
        let counting = counting.clone();
        Callback::from(move |_| {
            let request = wheel.borrow_mut().request_spin();
            match request {
                SpinRequest::Started => {
                    spins_left.set(wheel.borrow().spins_remaining());
                    is_spinning.set(true);
                    schedule_tick(
                        wheel.clone(),
                        tick_ms,
                        count_delay_ms,
                        winnings.clone(),
                        is_spinning.clone(),
                        counting.clone(),
                    );
                }
                SpinRequest::AlreadySpinning => {}
                SpinRequest::NoSpinsRemaining => {
                    log::debug!("spin request refused: budget exhausted");
                }
            }
        })
    };

    let on_close = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <div class={styles::PAGE}>
            <h1 class={styles::TITLE}>{ "Spin & Win" }</h1>
            <div class={styles::HUD}>
                <WinningsLabel amount={*winnings} counting={*counting} />
                <SpinsLeftLabel spins={*spins_left} />
            </div>
            <WheelCanvas
                canvas_ref={canvas_ref}
                is_spinning={*is_spinning}
                onclick={on_spin}
            />
            <p class={styles::HINT}>{ "Click the wheel to spin" }</p>
            <div id="confetti-container" class={styles::CONFETTI_LAYER}></div>
            <ResultModal notice={(*notice).clone()} on_close={on_close} />
        </div>
    }
}
