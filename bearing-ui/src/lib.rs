pub mod app;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod themes;

use gpui::{App, actions};
pub use gui::{run_gui, setup_app};
use tracing::info;

actions!(bearing_spec, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
