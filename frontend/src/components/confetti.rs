use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use wheel_core::collaborators::ParticleEffects;

const DROP_COUNT: usize = 50;
const DROP_LIFETIME_MS: u32 = 2500;

/// Money-bill rain: spawns emoji drops into the page's overlay container
/// and removes each one once it has fallen. Everything in here is
/// fire-and-forget; a missing container or a failed DOM call is ignored
/// so the effects layer can never break a spin.
pub struct ConfettiRain;

impl ParticleEffects for ConfettiRain {
    fn celebrate(&mut self, is_win: bool) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(container) = document.get_element_by_id("confetti-container") else {
            return;
        };

        let emoji = if is_win { "💵" } else { "💸" };
        for _ in 0..DROP_COUNT {
            let Ok(bill) = document.create_element("div") else {
                continue;
            };
            bill.set_class_name("confetti");
            bill.set_text_content(Some(emoji));
            if let Some(element) = bill.dyn_ref::<HtmlElement>() {
                let style = element.style();
                let _ = style.set_property("left", &format!("{}%", js_sys::Math::random() * 100.0));
                let _ = style.set_property("animation-delay", &format!("{:.2}s", js_sys::Math::random()));
            }
            let _ = container.append_child(&bill);

            Timeout::new(DROP_LIFETIME_MS, move || {
                if let Some(parent) = bill.parent_node() {
                    let _ = parent.remove_child(&bill);
                }
            })
            .forget();
        }
    }
}
