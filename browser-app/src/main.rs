// PlantUML Preview browser entry point

use plantuml_preview_web_ui::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    yew::Renderer::<App>::new().render();
}

fn main() {
    run_app();
}
