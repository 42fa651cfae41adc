//! Responsive breakpoint classification of the viewport.

use dioxus::prelude::*;
use lodestone_core::utils::styles::{parse_breakpoints, Breakpoints};

/// Tracks which breakpoints the viewport currently reaches.
///
/// On wasm32 the signal follows window resizes; the listener is
/// removed when the component unmounts. Native builds see a fixed
/// desktop-sized viewport.
pub fn use_breakpoints() -> Signal<Breakpoints> {
    #[allow(unused_mut)]
    let mut breakpoints = use_signal(|| parse_breakpoints(current_width()));

    #[cfg(target_arch = "wasm32")]
    use_hook(|| {
        std::rc::Rc::new(crate::dom::ListenerGuard::on_window("resize", move |_| {
            breakpoints.set(parse_breakpoints(crate::dom::viewport_width()));
        }))
    });

    breakpoints
}

fn current_width() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::viewport_width()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        1280
    }
}
