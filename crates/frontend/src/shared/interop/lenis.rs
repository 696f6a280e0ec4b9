use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Lenis smooth-scroll instance.
    pub type Lenis;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> Lenis;

    #[wasm_bindgen(method)]
    pub fn on(this: &Lenis, event: &str, callback: &Closure<dyn FnMut()>);

    #[wasm_bindgen(method)]
    pub fn raf(this: &Lenis, time_ms: f64);
}
