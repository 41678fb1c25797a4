use log::Level;

use crate::models::Panel;

/// WhatsApp conversation the receipt screenshot is sent to.
pub const WHATSAPP_URL: &str = "http://wa.me/201225020005";

/// Served by the deployment alongside the wasm bundle.
pub const LOGO_ASSET: &str = "/images/ns-logo.png";

/// How long the "✓ Copied!" badge stays up after a successful copy.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

pub const DEFAULT_PANEL: Panel = Panel::Misr;

pub const PARTICLE_COUNT: usize = 20;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
