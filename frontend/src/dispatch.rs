use gloo_console::log;
use gloo_net::http::Request;
use shared_data::{
	Channel, DispatchError, Dispatched, Dispatcher, Quote, RelayBody, SiteConfig, compile, deep_link
};

/// POSTs the quote to the form relay, which forwards it to our inbox
pub struct Relay {
	endpoint: &'static str,
}

impl Dispatcher for Relay {
	async fn deliver(&self, quote: &Quote) -> Result<Dispatched, DispatchError> {
		let body = RelayBody::from(quote);

		let req = Request::post(self.endpoint)
			// otherwise formspree responds with a redirect to its thank-you page
			.header("Accept", "application/json")
			.json(&body)
			.map_err(|e| DispatchError::NetworkFailure(format!("quote couldn't be serialized: {e:?}")))?;

		let res = req.send()
			.await
			.map_err(|e| DispatchError::NetworkFailure(format!("{e:?}")))?;

		if res.ok() {
			Ok(Dispatched::Sent)
		} else {
			Err(DispatchError::NonSuccessStatus(res.status()))
		}
	}
}

/// Opens WhatsApp in a new tab with the whole quote already typed out. Whether they actually hit
/// send is up to them, so this can't fail.
pub struct DeepLink {
	recipient: &'static str,
}

impl Dispatcher for DeepLink {
	async fn deliver(&self, quote: &Quote) -> Result<Dispatched, DispatchError> {
		let url = deep_link(self.recipient, &compile(quote));

		match web_sys::window().map(|win| win.open_with_url_and_target(&url, "_blank")) {
			Some(Ok(Some(_))) => (),
			Some(Ok(None)) => log!("WhatsApp tab was blocked from opening: ", url),
			Some(Err(e)) => log!("Couldn't open WhatsApp: ", e),
			None => log!("There's no window to open WhatsApp from"),
		}

		Ok(Dispatched::Redirected)
	}
}

pub enum ChannelDispatcher {
	Relay(Relay),
	DeepLink(DeepLink),
}

impl ChannelDispatcher {
	pub fn for_site(config: &SiteConfig) -> Self {
		match config.channel {
			Channel::Relay => Self::Relay(Relay { endpoint: config.relay_endpoint }),
			Channel::DeepLink => Self::DeepLink(DeepLink { recipient: config.whatsapp_number }),
		}
	}
}

impl Dispatcher for ChannelDispatcher {
	async fn deliver(&self, quote: &Quote) -> Result<Dispatched, DispatchError> {
		match self {
			Self::Relay(relay) => relay.deliver(quote).await,
			Self::DeepLink(link) => link.deliver(quote).await,
		}
	}
}
