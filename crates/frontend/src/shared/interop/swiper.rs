use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Swiper;

    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: &JsValue) -> Swiper;
}
