use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinningsLabelProps {
    pub amount: i64,
    /// Sign of the payout currently counting, if the counter is running:
    /// `Some(true)` flashes green, `Some(false)` red, `None` rests gold.
    pub counting: Option<bool>,
}

#[function_component(WinningsLabel)]
pub fn winnings_label(props: &WinningsLabelProps) -> Html {
    let color = match props.counting {
        Some(true) => "text-[#4af0a4]",
        Some(false) => "text-[#f04444]",
        None => "text-[#ffc600]",
    };
    html! {
        <p class={classes!(styles::HUD_LABEL, color)}>
            { format!("Total Winnings: R{}", props.amount) }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinsLeftLabelProps {
    pub spins: u32,
}

#[function_component(SpinsLeftLabel)]
pub fn spins_left_label(props: &SpinsLeftLabelProps) -> Html {
    html! {
        <p class={classes!(styles::HUD_LABEL, "text-white")}>
            { format!("Spins Left: {}", props.spins) }
        </p>
    }
}
