pub mod components;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::pages::prize_wheel::PrizeWheelPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full bg-gray-900">
            <PrizeWheelPage />
        </div>
    }
}
