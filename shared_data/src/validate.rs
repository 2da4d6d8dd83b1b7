use chrono::{Days, NaiveDate};

use crate::{config::FormPolicy, fields::QuoteFields, selection::Selection};

/// Orders need at least this many days between today and the event
pub const LEAD_TIME_DAYS: u64 = 2;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("full name, email and phone are all required")]
	MissingContactInfo,
	#[error("at least one product must be selected")]
	NoProductSelected,
	#[error("an event date is required")]
	MissingEventDate,
}

impl ValidationError {
	/// What to tell the customer
	#[must_use]
	pub fn user_message(self) -> &'static str {
		match self {
			Self::MissingContactInfo | Self::MissingEventDate =>
				"Por favor, preencha todos os campos obrigatórios!",
			Self::NoProductSelected => "Por favor, selecione pelo menos um produto!",
		}
	}
}

fn blank(s: &str) -> bool {
	s.trim().is_empty()
}

/// Checks that a quote can be sent. Line items are never looked at; whatever's missing from them
/// is just left out of the message.
pub fn validate(
	fields: &QuoteFields,
	selection: &Selection,
	policy: &FormPolicy
) -> Result<(), ValidationError> {
	if blank(&fields.full_name) || blank(&fields.email) || blank(&fields.phone) {
		return Err(ValidationError::MissingContactInfo);
	}

	if policy.require_event_date && blank(&fields.event_date) {
		return Err(ValidationError::MissingEventDate);
	}

	if selection.is_empty() {
		return Err(ValidationError::NoProductSelected);
	}

	Ok(())
}

/// The earliest date the event date input accepts
#[must_use]
pub fn earliest_event_date(today: NaiveDate) -> NaiveDate {
	today.checked_add_days(Days::new(LEAD_TIME_DAYS))
		.unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn contact(name: &str, email: &str, phone: &str) -> QuoteFields {
		QuoteFields {
			full_name: name.into(),
			email: email.into(),
			phone: phone.into(),
			..QuoteFields::default()
		}
	}

	fn one_product() -> Selection {
		let mut sel = Selection::default();
		sel.toggle("Cookie Grande").unwrap();
		sel
	}

	#[test]
	fn contact_info_is_required_regardless_of_products() {
		let policy = FormPolicy::relay();
		let cases = [
			contact("", "maria@example.com", "21999999999"),
			contact("Maria", "", "21999999999"),
			contact("Maria", "maria@example.com", ""),
			contact("   ", "maria@example.com", "21999999999"),
		];

		for fields in &cases {
			assert_eq!(validate(fields, &one_product(), &policy), Err(ValidationError::MissingContactInfo));
			assert_eq!(validate(fields, &Selection::default(), &policy), Err(ValidationError::MissingContactInfo));
		}
	}

	#[test]
	fn products_are_required_regardless_of_contact_info() {
		let fields = contact("Maria", "maria@example.com", "21999999999");
		assert_eq!(
			validate(&fields, &Selection::default(), &FormPolicy::relay()),
			Err(ValidationError::NoProductSelected)
		);
		assert_eq!(validate(&fields, &one_product(), &FormPolicy::relay()), Ok(()));
	}

	#[test]
	fn event_date_only_matters_for_deep_links() {
		let mut fields = contact("Maria", "maria@example.com", "21999999999");
		assert_eq!(validate(&fields, &one_product(), &FormPolicy::relay()), Ok(()));
		assert_eq!(
			validate(&fields, &one_product(), &FormPolicy::deep_link()),
			Err(ValidationError::MissingEventDate)
		);

		fields.event_date = "2025-12-20".into();
		assert_eq!(validate(&fields, &one_product(), &FormPolicy::deep_link()), Ok(()));
	}

	#[test]
	fn empty_line_items_are_tolerated() {
		let fields = contact("Maria", "maria@example.com", "21999999999");
		let mut sel = one_product();
		sel.add_line_item("Cookie Grande").unwrap();
		assert_eq!(validate(&fields, &sel, &FormPolicy::relay()), Ok(()));
	}

	#[test]
	fn lead_time_is_two_days() {
		let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
		assert_eq!(earliest_event_date(today), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
	}
}
