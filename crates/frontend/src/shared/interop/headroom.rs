use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Hides the sticky header on scroll down, shows it on scroll up.
    pub type Headroom;

    #[wasm_bindgen(constructor)]
    pub fn new(element: &web_sys::Element) -> Headroom;

    #[wasm_bindgen(method)]
    pub fn init(this: &Headroom);
}
