mod app;
mod controls;

use anyhow::Result;

use paintbox_engine::device::GpuInit;
use paintbox_engine::logging::{init_logging, LoggingConfig};
use paintbox_engine::session::SessionConfig;
use paintbox_engine::window::{Runtime, RuntimeConfig};

use crate::app::StudioApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!(
        "P/T/C: point/triangle/circle  R/G/B (+Shift): color  Up/Down: size  \
         Left/Right: segments  Backspace: clear  Esc: quit"
    );

    let gpu_init = GpuInit {
        // Slider values are written to the framebuffer as-is.
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(
        RuntimeConfig {
            title: "paintbox".to_string(),
            ..RuntimeConfig::default()
        },
        gpu_init,
        StudioApp::new(SessionConfig::default()),
    )
}
