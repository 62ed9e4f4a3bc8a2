use hexbridges_logic::{Difficulty, GridOptions, PuzzleGrid};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Game {
    grid: PuzzleGrid,
}

impl Game {
    fn create(width: f64, height: f64, options: GridOptions) -> Result<Game, JsError> {
        let grid = PuzzleGrid::new(width, height, options)?;
        Ok(Game { grid })
    }
}

#[wasm_bindgen]
impl Game {
    ///
    /// New puzzle for a canvas of `width` x `height`.
    /// `options` is a plain object like `{ islandCount: 20, lineHitThreshold: 8 }`,
    /// missing fields take their defaults.
    ///
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, options: JsValue) -> Result<Game, JsError> {
        let options: GridOptions = if options.is_undefined() || options.is_null() {
            GridOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Game::create(width, height, options)
    }

    /// New puzzle with one of the presets `easy`, `medium`, `hard` or `extreme`.
    pub fn with_difficulty(width: f64, height: f64, difficulty: &str) -> Result<Game, JsError> {
        let difficulty: Difficulty = difficulty.parse()?;
        Game::create(width, height, difficulty.options())
    }

    /// Handle a pointer-down in canvas coordinates, returns the outcome object.
    pub fn toggle_pointer(&mut self, x: f64, y: f64) -> Result<JsValue, JsError> {
        let outcome = self.grid.toggle_pointer(x, y);
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    /// Islands, placed bridges and whether the puzzle is solved.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.grid.snapshot())?)
    }

    pub fn report(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.grid.report())?)
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Remove all placed bridges.
    pub fn restart(&mut self) {
        self.grid.clear_bridges();
    }

    /// Text rendering of the grid, for the console.
    pub fn render_text(&self) -> String {
        self.grid.to_string()
    }
}
