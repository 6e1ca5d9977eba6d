use crate::slices::{Sentiment, Slice};

/// Draws the wheel. Implementations paint every slice as a pie wedge in
/// fixed order starting at `angle`, color each by payout sign (negative
/// red, non-negative gold) with a brighter variant for the wedge at
/// `highlighted`, label each with its payout text, and draw the fixed
/// pointer marker at the top.
pub trait WheelRenderer {
    fn render(&mut self, angle: f64, slices: &[Slice], highlighted: usize);
}

/// Shows spin results and refusals to the player, typically as a modal.
/// The sentiment drives the display color.
pub trait Notifier {
    fn notify(&mut self, header: &str, icon: &str, message: &str, sentiment: Sentiment);
}

/// Fire-and-forget celebration effects. Implementations must swallow
/// their own failures; the engine never looks at what happens in here.
pub trait ParticleEffects {
    fn celebrate(&mut self, is_win: bool);
}
