use crate::selection::ItemLimit;

/// Where a finished quote gets sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Channel {
	/// POSTed as JSON to the form relay, which emails it to us
	#[default]
	Relay,
	/// Opened as a pre-filled WhatsApp conversation
	DeepLink,
}

impl Channel {
	/// Parses the build-time `QUOTE_CHANNEL` value
	#[must_use]
	pub fn from_env_value(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"relay" | "formspree" | "email" => Some(Self::Relay),
			"whatsapp" | "deeplink" | "deep_link" => Some(Self::DeepLink),
			_ => None,
		}
	}
}

/// The rules a quote form runs under. The two channels ask slightly different things of the
/// customer: a WhatsApp conversation only carries a single item per product and we need their
/// event date up front, while the relayed email can take as many items as they like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormPolicy {
	pub channel: Channel,
	pub require_event_date: bool,
	pub item_limit: ItemLimit,
}

impl FormPolicy {
	#[must_use]
	pub const fn relay() -> Self {
		Self { channel: Channel::Relay, require_event_date: false, item_limit: ItemLimit::Multiple }
	}

	#[must_use]
	pub const fn deep_link() -> Self {
		Self { channel: Channel::DeepLink, require_event_date: true, item_limit: ItemLimit::Single }
	}

	#[must_use]
	pub const fn for_channel(channel: Channel) -> Self {
		match channel {
			Channel::Relay => Self::relay(),
			Channel::DeepLink => Self::deep_link(),
		}
	}
}

impl Default for FormPolicy {
	fn default() -> Self {
		Self::relay()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
	pub brand_name: &'static str,
	pub logo_path: &'static str,
	pub whatsapp_number: &'static str,
	pub whatsapp_display: &'static str,
	pub contact_email: &'static str,
	pub instagram_handle: &'static str,
	pub relay_endpoint: &'static str,
	pub channel: Channel,
}

impl SiteConfig {
	pub const DEFAULT: Self = Self {
		brand_name: "Bibbidi Brownie",
		logo_path: "/logo.png",
		whatsapp_number: "5521995942928",
		whatsapp_display: "(21) 99594-2928",
		contact_email: "bibbidibrownie@gmail.com",
		instagram_handle: "bibbidibrownie",
		relay_endpoint: "https://formspree.io/f/mkgknvry",
		channel: Channel::Relay,
	};

	/// [`Self::DEFAULT`], with whatever was overridden through the environment at build time
	/// (`QUOTE_CHANNEL`, `RELAY_ENDPOINT`, `WHATSAPP_NUMBER`)
	#[must_use]
	pub fn from_build_env() -> Self {
		Self::with_overrides(
			option_env!("QUOTE_CHANNEL"),
			option_env!("RELAY_ENDPOINT"),
			option_env!("WHATSAPP_NUMBER"),
		)
	}

	fn with_overrides(
		channel: Option<&'static str>,
		relay_endpoint: Option<&'static str>,
		whatsapp_number: Option<&'static str>,
	) -> Self {
		let mut config = Self::DEFAULT;

		if let Some(channel) = channel.and_then(Channel::from_env_value) {
			config.channel = channel;
		}
		if let Some(endpoint) = relay_endpoint.filter(|e| !e.is_empty()) {
			config.relay_endpoint = endpoint;
		}
		if let Some(number) = whatsapp_number.filter(|n| !n.is_empty()) {
			config.whatsapp_number = number;
		}

		config
	}

	#[must_use]
	pub fn policy(&self) -> FormPolicy {
		FormPolicy::for_channel(self.channel)
	}

	#[must_use]
	pub fn whatsapp_link(&self) -> String {
		format!("https://wa.me/{}", self.whatsapp_number)
	}

	#[must_use]
	pub fn instagram_link(&self) -> String {
		format!("https://instagram.com/{}", self.instagram_handle)
	}

	#[must_use]
	pub fn mailto_link(&self) -> String {
		format!("mailto:{}", self.contact_email)
	}
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self::DEFAULT
	}
}
