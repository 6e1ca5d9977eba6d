pub const PAGE: &str = "min-h-screen flex flex-col items-center justify-center bg-gradient-to-b from-gray-900 to-gray-800 px-4 py-8";
pub const TITLE: &str = "text-4xl font-bold mb-6 text-center bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const HUD: &str = "flex flex-col items-center gap-1 mb-6";
pub const HUD_LABEL: &str = "text-xl font-bold tracking-wide transition-colors duration-200";
pub const HINT: &str = "mt-4 text-sm text-gray-400";
pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/70";
pub const MODAL_CARD: &str = "bg-gray-800 rounded-2xl shadow-xl border border-gray-700 p-8 max-w-sm w-full mx-4 text-center";
pub const MODAL_CLOSE: &str = "mt-6 px-6 py-2 rounded-full font-semibold text-gray-900 bg-yellow-400 hover:bg-yellow-300 transition-colors duration-200";
pub const CONFETTI_LAYER: &str = "fixed inset-0 pointer-events-none overflow-hidden";
