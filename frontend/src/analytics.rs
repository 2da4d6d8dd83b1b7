use gloo_console::log;
use js_sys::{Function, Object, Reflect};
use shared_data::{Analytics, AnalyticsEvent};
use wasm_bindgen::{JsCast, JsValue};

/// Sends events to Google Analytics through the page's global `gtag` function. Pages without the
/// GA snippet (or with it blocked) just don't record anything.
pub struct Gtag;

impl Analytics for Gtag {
	fn track(&self, event: &AnalyticsEvent) {
		let Some(gtag) = web_sys::window()
			.and_then(|win| Reflect::get(&win, &JsValue::from_str("gtag")).ok())
			.and_then(|f| f.dyn_into::<Function>().ok()) else {
			return;
		};

		let params = Object::new();
		for (key, value) in [
			("event_category", JsValue::from_str(event.category)),
			("event_label", JsValue::from_str(&event.label)),
			("value", JsValue::from(1)),
		] {
			if let Err(e) = Reflect::set(&params, &JsValue::from_str(key), &value) {
				log!("Couldn't set analytics param ", key, ": ", e);
			}
		}

		if let Err(e) = gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(event.action), &params) {
			log!("gtag threw while tracking ", event.action, ": ", e);
		}
	}
}

pub fn track(event: &AnalyticsEvent) {
	Gtag.track(event);
}
