use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type InfiniteMarquee;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> InfiniteMarquee;
}
