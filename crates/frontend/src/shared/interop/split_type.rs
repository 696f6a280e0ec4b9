use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Splits an element's text into line/word/char spans.
    pub type SplitType;

    #[wasm_bindgen(constructor)]
    pub fn new(target: &web_sys::Element, options: &JsValue) -> SplitType;

    #[wasm_bindgen(method, getter)]
    pub fn chars(this: &SplitType) -> js_sys::Array;

    #[wasm_bindgen(method, getter)]
    pub fn words(this: &SplitType) -> js_sys::Array;

    #[wasm_bindgen(method, getter)]
    pub fn lines(this: &SplitType) -> js_sys::Array;
}
