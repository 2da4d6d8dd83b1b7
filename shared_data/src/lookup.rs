use serde::Deserialize;

use crate::fields::Delivery;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
	#[error("a CEP has exactly 8 digits")]
	InvalidCep,
	#[error("couldn't reach the lookup service: {0}")]
	Network(String),
	#[error("no address is registered for this CEP")]
	NotFound,
}

/// Strips out everything but digits, returning them if there are exactly 8
#[must_use]
pub fn normalize_cep(raw: &str) -> Option<String> {
	let digits = raw.chars()
		.filter(char::is_ascii_digit)
		.collect::<String>();

	(digits.len() == 8).then_some(digits)
}

/// Where to ask ViaCEP about an already-normalized CEP
#[must_use]
pub fn lookup_url(cep: &str) -> String {
	format!("https://viacep.com.br/ws/{cep}/json/")
}

// viacep has sent this both as `true` and as `"true"`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Flag {
	Bool(bool),
	Text(String),
}

impl Flag {
	fn is_set(&self) -> bool {
		match self {
			Self::Bool(b) => *b,
			Self::Text(s) => s.eq_ignore_ascii_case("true"),
		}
	}
}

/// The parts of a ViaCEP response we care about
#[derive(Deserialize, Debug, Default)]
pub struct CepResponse {
	#[serde(default)]
	erro: Option<Flag>,
	#[serde(default)]
	logradouro: String,
	#[serde(default)]
	bairro: String,
	#[serde(default)]
	localidade: String,
}

impl CepResponse {
	pub fn into_address(self) -> Result<ResolvedAddress, LookupError> {
		if self.erro.as_ref().is_some_and(Flag::is_set) {
			return Err(LookupError::NotFound);
		}

		Ok(ResolvedAddress {
			street: self.logradouro,
			neighborhood: self.bairro,
			city: self.localidade,
		})
	}
}

/// What a CEP told us about where someone lives. Any of these can be empty; small towns often
/// only have a single CEP with no street attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAddress {
	pub street: String,
	pub neighborhood: String,
	pub city: String,
}

impl Delivery {
	/// Fills in whatever `addr` knows, as long as the CEP that was looked up is still the one in
	/// the form. Returns whether anything was applied.
	pub fn apply_lookup(&mut self, cep: &str, addr: &ResolvedAddress) -> bool {
		if normalize_cep(&self.cep).as_deref() != Some(cep) {
			return false;
		}

		for (slot, value) in [
			(&mut self.address, &addr.street),
			(&mut self.neighborhood, &addr.neighborhood),
			(&mut self.city, &addr.city),
		] {
			if !value.is_empty() {
				slot.clone_from(value);
			}
		}

		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ceps_need_eight_digits() {
		assert_eq!(normalize_cep("01310-100"), Some("01310100".into()));
		assert_eq!(normalize_cep(" 01310100 "), Some("01310100".into()));
		assert_eq!(normalize_cep("0131010"), None);
		assert_eq!(normalize_cep("013101000"), None);
		assert_eq!(normalize_cep(""), None);
		assert_eq!(lookup_url("01310100"), "https://viacep.com.br/ws/01310100/json/");
	}

	#[test]
	fn responses_resolve_to_addresses() {
		let resp: CepResponse = serde_json::from_str(r#"{
			"cep": "01310-100",
			"logradouro": "Avenida Paulista",
			"complemento": "de 612 a 1510 - lado par",
			"bairro": "Bela Vista",
			"localidade": "São Paulo",
			"uf": "SP"
		}"#).unwrap();

		assert_eq!(resp.into_address(), Ok(ResolvedAddress {
			street: "Avenida Paulista".into(),
			neighborhood: "Bela Vista".into(),
			city: "São Paulo".into(),
		}));
	}

	#[test]
	fn error_flags_mean_not_found() {
		for body in [r#"{"erro": true}"#, r#"{"erro": "true"}"#] {
			let resp: CepResponse = serde_json::from_str(body).unwrap();
			assert_eq!(resp.into_address(), Err(LookupError::NotFound));
		}

		let resp: CepResponse = serde_json::from_str(r#"{"erro": false, "localidade": "Paraty"}"#).unwrap();
		assert_eq!(resp.into_address().unwrap().city, "Paraty");
	}

	#[test]
	fn lookups_fill_in_everything_but_the_number() {
		let mut delivery = Delivery {
			cep: "01310-100".into(),
			number: "1000".into(),
			complement: "Sala 4".into(),
			neighborhood: "typed by hand".into(),
			..Delivery::default()
		};
		let addr = ResolvedAddress {
			street: "Avenida Paulista".into(),
			neighborhood: "Bela Vista".into(),
			city: "São Paulo".into(),
		};

		assert!(delivery.apply_lookup("01310100", &addr));
		assert_eq!(delivery.address, "Avenida Paulista");
		assert_eq!(delivery.neighborhood, "Bela Vista");
		assert_eq!(delivery.city, "São Paulo");
		assert_eq!(delivery.number, "1000");
		assert_eq!(delivery.complement, "Sala 4");
	}

	#[test]
	fn empty_parts_of_a_lookup_are_skipped() {
		let mut delivery = Delivery {
			cep: "23970000".into(),
			address: "Rua do Comércio".into(),
			..Delivery::default()
		};
		let addr = ResolvedAddress { city: "Paraty".into(), ..ResolvedAddress::default() };

		assert!(delivery.apply_lookup("23970000", &addr));
		assert_eq!(delivery.address, "Rua do Comércio");
		assert_eq!(delivery.city, "Paraty");
	}

	#[test]
	fn stale_lookups_are_dropped() {
		let mut delivery = Delivery { cep: "22250-040".into(), ..Delivery::default() };
		let before = delivery.clone();
		let addr = ResolvedAddress { city: "São Paulo".into(), ..ResolvedAddress::default() };

		assert!(!delivery.apply_lookup("01310100", &addr));
		assert_eq!(delivery, before);
	}
}
