use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryMethod {
	#[default]
	Pickup,
	Delivery,
}

impl DeliveryMethod {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Pickup => "Retirada no local",
			Self::Delivery => "Entrega",
		}
	}

	/// The value used for this in form inputs
	#[must_use]
	pub fn value(self) -> &'static str {
		match self {
			Self::Pickup => "pickup",
			Self::Delivery => "delivery",
		}
	}
}

impl FromStr for DeliveryMethod {
	type Err = ();
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pickup" => Ok(Self::Pickup),
			"delivery" => Ok(Self::Delivery),
			_ => Err(()),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralSource {
	Instagram,
	Friend,
	Google,
	Event,
	Other,
}

impl ReferralSource {
	pub const ALL: [Self; 5] = [Self::Instagram, Self::Friend, Self::Google, Self::Event, Self::Other];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Instagram => "Instagram",
			Self::Friend => "Indicação de amigo",
			Self::Google => "Google",
			Self::Event => "Evento",
			Self::Other => "Outros",
		}
	}

	#[must_use]
	pub fn value(self) -> &'static str {
		match self {
			Self::Instagram => "instagram",
			Self::Friend => "indicacao",
			Self::Google => "google",
			Self::Event => "evento",
			Self::Other => "outros",
		}
	}
}

impl FromStr for ReferralSource {
	type Err = ();
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|src| src.value() == s)
			.ok_or(())
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customization {
	pub wanted: bool,
	pub kind: String,
	pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
	pub method: DeliveryMethod,
	pub cep: String,
	pub address: String,
	pub number: String,
	pub complement: String,
	pub neighborhood: String,
	pub city: String,
	// in the `datetime-local` input format, e.g. 2025-03-01T15:30
	pub date_time: String,
}

/// Everything on the quote form that isn't part of the product selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFields {
	pub full_name: String,
	pub email: String,
	pub phone: String,
	// in the `date` input format, e.g. 2025-03-01
	pub event_date: String,
	pub customization: Customization,
	pub delivery: Delivery,
	pub observations: String,
	pub referral: Option<ReferralSource>,
	pub referral_other: String,
}

/// The free-text inputs of the form, so that a single message can update any of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
	FullName,
	Email,
	Phone,
	EventDate,
	CustomizationKind,
	CustomizationDescription,
	Cep,
	Address,
	Number,
	Complement,
	Neighborhood,
	City,
	DeliveryDateTime,
	Observations,
	ReferralOther,
}

impl QuoteFields {
	fn slot(&mut self, field: TextField) -> &mut String {
		match field {
			TextField::FullName => &mut self.full_name,
			TextField::Email => &mut self.email,
			TextField::Phone => &mut self.phone,
			TextField::EventDate => &mut self.event_date,
			TextField::CustomizationKind => &mut self.customization.kind,
			TextField::CustomizationDescription => &mut self.customization.description,
			TextField::Cep => &mut self.delivery.cep,
			TextField::Address => &mut self.delivery.address,
			TextField::Number => &mut self.delivery.number,
			TextField::Complement => &mut self.delivery.complement,
			TextField::Neighborhood => &mut self.delivery.neighborhood,
			TextField::City => &mut self.delivery.city,
			TextField::DeliveryDateTime => &mut self.delivery.date_time,
			TextField::Observations => &mut self.observations,
			TextField::ReferralOther => &mut self.referral_other,
		}
	}

	pub fn set_text(&mut self, field: TextField, value: String) {
		*self.slot(field) = value;
	}

	/// Changing where they heard about us throws away whatever they typed for "other"
	pub fn set_referral(&mut self, referral: Option<ReferralSource>) {
		self.referral = referral;
		self.referral_other.clear();
	}

	/// What to show for "how did you hear about us", if they answered at all
	#[must_use]
	pub fn referral_text(&self) -> Option<&str> {
		self.referral.map(|src| match src {
			ReferralSource::Other if !self.referral_other.trim().is_empty() => self.referral_other.as_str(),
			src => src.label(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn input_values_parse_back() {
		for src in ReferralSource::ALL {
			assert_eq!(src.value().parse::<ReferralSource>(), Ok(src));
		}
		for method in [DeliveryMethod::Pickup, DeliveryMethod::Delivery] {
			assert_eq!(method.value().parse::<DeliveryMethod>(), Ok(method));
		}
		assert_eq!("".parse::<ReferralSource>(), Err(()));
	}

	#[test]
	fn text_fields_land_in_the_right_place() {
		let mut fields = QuoteFields::default();
		fields.set_text(TextField::Complement, "Apto 12".into());
		fields.set_text(TextField::CustomizationKind, "Tags com nome".into());

		assert_eq!(fields.delivery.complement, "Apto 12");
		assert_eq!(fields.customization.kind, "Tags com nome");
		assert!(fields.delivery.number.is_empty());
	}

	#[test]
	fn other_referral_substitutes_its_free_text() {
		let mut fields = QuoteFields::default();
		assert_eq!(fields.referral_text(), None);

		fields.set_referral(Some(ReferralSource::Other));
		assert_eq!(fields.referral_text(), Some("Outros"));

		fields.set_text(TextField::ReferralOther, "Feira de Botafogo".into());
		assert_eq!(fields.referral_text(), Some("Feira de Botafogo"));

		fields.set_referral(Some(ReferralSource::Google));
		assert!(fields.referral_other.is_empty());
		assert_eq!(fields.referral_text(), Some("Google"));
	}
}
