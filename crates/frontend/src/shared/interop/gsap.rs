use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A running GSAP tween.
    pub type Tween;

    #[wasm_bindgen(method, js_name = timeScale)]
    pub fn time_scale(this: &Tween, value: f64);

    #[wasm_bindgen(method)]
    pub fn invalidate(this: &Tween);

    #[wasm_bindgen(method)]
    pub fn restart(this: &Tween);

    #[wasm_bindgen(method, getter)]
    pub fn vars(this: &Tween) -> js_sys::Object;

    /// A GSAP timeline.
    pub type Timeline;

    #[wasm_bindgen(method)]
    pub fn to(this: &Timeline, targets: &JsValue, vars: &JsValue, position: f64);

    #[wasm_bindgen(method)]
    pub fn play(this: &Timeline);

    #[wasm_bindgen(method)]
    pub fn reverse(this: &Timeline);

    #[wasm_bindgen(method, js_name = timeScale)]
    pub fn set_time_scale(this: &Timeline, value: f64);

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    pub fn to(targets: &JsValue, vars: &JsValue) -> Tween;

    #[wasm_bindgen(js_namespace = gsap, js_name = from)]
    pub fn from(targets: &JsValue, vars: &JsValue) -> Tween;

    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    pub fn set(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    pub fn timeline(vars: &JsValue) -> Timeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = registerEase)]
    pub fn register_ease(name: &str, ease: &Closure<dyn Fn(f64) -> f64>);

    #[wasm_bindgen(js_namespace = ["gsap", "ticker"], js_name = add)]
    pub fn ticker_add(callback: &Closure<dyn FnMut(f64)>);

    #[wasm_bindgen(js_namespace = ["gsap", "ticker"], js_name = lagSmoothing)]
    pub fn ticker_lag_smoothing(threshold: f64);

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = update)]
    pub fn scroll_trigger_update();

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = refresh)]
    pub fn scroll_trigger_refresh();

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = create)]
    pub fn scroll_trigger_create(vars: &JsValue);

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = killAll)]
    pub fn scroll_trigger_kill_all();
}
