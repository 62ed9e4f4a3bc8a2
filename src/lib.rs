//! Browser boundary for hex bridges: one [`Game`] per canvas.
//!
//! Drawing is left to the page. It passes canvas sizes and pointer positions in,
//! and draws from the values returned here.

use wasm_bindgen::prelude::*;

mod game;

pub use game::Game;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
