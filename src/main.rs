//! Pong entry point
//!
//! Sets up logging for the target and hands off to its host.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Pong starting...");
    pong::platform::web::run().await.map_err(|e| {
        log::error!("Pong failed to start: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong::{GameConfig, Variant};

    env_logger::init();

    let variant = Variant::default();
    let config = GameConfig::preset(variant);
    log::info!("Pong (native) starting, variant: {}", variant.as_str());
    log::debug!(
        "Config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    if let Err(e) = pong::platform::native::run(config) {
        log::error!("Pong exited with error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
