use std::future::Future;

use crate::session::Quote;

/// How a quote left the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
	/// The relay accepted it
	Sent,
	/// We handed it to WhatsApp and can't know what happened next
	Redirected,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
	#[error("couldn't reach the relay: {0}")]
	NetworkFailure(String),
	#[error("the relay responded with status {0}")]
	NonSuccessStatus(u16),
}

/// Something that can take a finished quote somewhere
pub trait Dispatcher {
	fn deliver(&self, quote: &Quote) -> impl Future<Output = Result<Dispatched, DispatchError>>;
}

/// A WhatsApp link that opens a conversation with `recipient` (digits only, with country code)
/// with `text` already typed out
#[must_use]
pub fn deep_link(recipient: &str, text: &str) -> String {
	format!("https://wa.me/{recipient}?text={}", urlencoding::encode(text))
}

/// A Google Analytics event, as passed to `gtag('event', action, { ... })`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
	pub action: &'static str,
	pub category: &'static str,
	pub label: String,
}

impl AnalyticsEvent {
	#[must_use]
	pub fn quote_submit() -> Self {
		Self { action: "quote_form_submit", category: "forms", label: "Quote Request".into() }
	}

	#[must_use]
	pub fn product_view(category: &str, item: &str) -> Self {
		Self { action: "product_view", category: "products", label: format!("{category} - {item}") }
	}

	#[must_use]
	pub fn product_image_click(category: &str, item: &str) -> Self {
		Self { action: "product_image_click", category: "products", label: format!("{category} - {item}") }
	}

	#[must_use]
	pub fn whatsapp_click() -> Self {
		Self { action: "whatsapp_click", category: "engagement", label: "floating_button".into() }
	}

	#[must_use]
	pub fn contact_click(contact: &str) -> Self {
		Self { action: "contact_click", category: "engagement", label: contact.into() }
	}
}

/// Fire-and-forget event tracking. There's intentionally no way for this to fail - if the event
/// can't be recorded, it's just dropped.
pub trait Analytics {
	fn track(&self, event: &AnalyticsEvent);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deep_links_encode_the_whole_message() {
		let link = deep_link("5521995942928", "Olá!\nNome: Maria & João #1");
		assert_eq!(
			link,
			"https://wa.me/5521995942928?text=Ol%C3%A1%21%0ANome%3A%20Maria%20%26%20Jo%C3%A3o%20%231"
		);
	}

	#[test]
	fn product_events_label_their_category() {
		let event = AnalyticsEvent::product_view("Cookies", "Cookie Mini");
		assert_eq!(event.label, "Cookies - Cookie Mini");
		assert_eq!(event.category, "products");
		assert_eq!(AnalyticsEvent::quote_submit().label, "Quote Request");
	}
}
