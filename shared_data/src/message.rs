use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{
	catalog::OTHER_PRODUCT,
	fields::{DeliveryMethod, QuoteFields},
	selection::{LineItem, Selected},
	session::Quote,
};

const NOT_INFORMED: &str = "Não informado";
const NOT_APPLICABLE: &str = "N/A";
const NONE_GIVEN: &str = "Nenhuma";

fn or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
	if value.trim().is_empty() { placeholder } else { value }
}

/// `2025-03-01` -> `01/03/2025`, leaving anything unparseable as it was typed
fn display_date(raw: &str) -> String {
	NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
		.map_or_else(|_| raw.to_string(), |d| d.format("%d/%m/%Y").to_string())
}

/// `2025-03-01T15:30` -> `01/03/2025 às 15:30`
fn display_date_time(raw: &str) -> String {
	NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M")
		.map_or_else(|_| raw.to_string(), |dt| dt.format("%d/%m/%Y às %H:%M").to_string())
}

fn item_line(product: &str, position: usize, item: &LineItem) -> String {
	let mut line = format!("{product} #{position}");

	for (label, value) in [("Qtd", &item.quantity), ("Sabor", &item.flavor), ("Tamanho", &item.package_size)] {
		if !value.trim().is_empty() {
			line.push_str(&format!(" - {label}: {value}"));
		}
	}

	line
}

/// One line per requested thing for a selected product
#[must_use]
pub fn product_lines(selected: Selected<'_>) -> Vec<String> {
	match selected {
		Selected::Other(text) if !text.trim().is_empty() => vec![text.to_string()],
		Selected::Other(_) => vec![OTHER_PRODUCT.to_string()],
		// shouldn't happen since selecting always seeds an item, but there's nothing to detail
		Selected::Items(product, []) => vec![product.name.to_string()],
		Selected::Items(product, items) => items.iter()
			.enumerate()
			.map(|(idx, item)| item_line(product.name, idx + 1, item))
			.collect(),
	}
}

fn all_product_lines(quote: &Quote) -> impl Iterator<Item = String> + '_ {
	quote.selection.selected().flat_map(product_lines)
}

fn event_date(fields: &QuoteFields) -> String {
	if fields.event_date.trim().is_empty() {
		NOT_INFORMED.to_string()
	} else {
		display_date(&fields.event_date)
	}
}

fn section(title: &str, lines: impl IntoIterator<Item = String>) -> String {
	lines.into_iter().fold(title.to_string(), |mut acc, line| {
		acc.push('\n');
		acc.push_str(&line);
		acc
	})
}

/// Renders a quote as the plain text message that's sent to us over WhatsApp
#[must_use]
pub fn compile(quote: &Quote) -> String {
	let fields = &quote.fields;
	let mut sections = Vec::with_capacity(6);

	sections.push("📋 NOVA SOLICITAÇÃO DE ORÇAMENTO".to_string());

	sections.push(section("👤 CLIENTE:", [
		format!("Nome: {}", fields.full_name),
		format!("Email: {}", fields.email),
		format!("Telefone: {}", fields.phone),
		format!("Data do Evento: {}", event_date(fields)),
	]));

	sections.push(section(
		"🍫 PRODUTOS SOLICITADOS:",
		all_product_lines(quote).map(|line| format!("• {line}"))
	));

	let custom = &fields.customization;
	if custom.wanted {
		sections.push(section("🎨 PERSONALIZAÇÃO:", [
			format!("Tipo: {}", or(&custom.kind, NOT_APPLICABLE)),
			format!("Descrição: {}", or(&custom.description, NOT_APPLICABLE)),
		]));
	}

	let delivery = &fields.delivery;
	let mut delivery_lines = vec![format!("Método: {}", delivery.method.label())];
	if delivery.method == DeliveryMethod::Delivery {
		delivery_lines.extend([
			("Endereço", &delivery.address),
			("CEP", &delivery.cep),
			("Número", &delivery.number),
			("Complemento", &delivery.complement),
			("Bairro", &delivery.neighborhood),
			("Cidade", &delivery.city),
		].into_iter().map(|(label, value)| format!("{label}: {}", or(value, NOT_APPLICABLE))));
	}
	if !delivery.date_time.trim().is_empty() {
		delivery_lines.push(format!("Data/Horário: {}", display_date_time(&delivery.date_time)));
	}
	sections.push(section("🚚 ENTREGA:", delivery_lines));

	sections.push(section("📝 INFORMAÇÕES ADICIONAIS:", [
		format!("Observações: {}", or(&fields.observations, NONE_GIVEN)),
		format!("Como conheceu: {}", fields.referral_text().unwrap_or(NOT_INFORMED)),
	]));

	sections.join("\n\n")
}

/// The labelled fields POSTed to the form relay, which turns them into an email. The relay
/// shows them in the order they're sent, so this keeps insertion order instead of being a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayBody(Vec<(&'static str, String)>);

impl RelayBody {
	/// Tells the relay what to use as the email's subject
	pub const SUBJECT_KEY: &'static str = "_subject";

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter()
			.find(|(k, _)| *k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.0.iter().map(|(k, _)| *k)
	}
}

impl From<&Quote> for RelayBody {
	fn from(quote: &Quote) -> Self {
		let fields = &quote.fields;
		let custom = &fields.customization;
		let delivery = &fields.delivery;

		let products = all_product_lines(quote).collect::<Vec<_>>().join("; ");
		let delivery_time = if delivery.date_time.trim().is_empty() {
			NOT_INFORMED.to_string()
		} else {
			display_date_time(&delivery.date_time)
		};

		let na = |value: &str| or(value, NOT_APPLICABLE).to_string();

		Self(vec![
			("Nome Completo", fields.full_name.clone()),
			("Email", fields.email.clone()),
			("Telefone", fields.phone.clone()),
			("Data do Evento", event_date(fields)),
			("Produtos", products),
			("Deseja Personalização", if custom.wanted { "Sim" } else { "Não" }.to_string()),
			("Tipo de Personalização", na(&custom.kind)),
			("Descrição da Personalização", na(&custom.description)),
			("Método de Entrega", delivery.method.label().to_string()),
			("CEP", na(&delivery.cep)),
			("Endereço de Entrega", na(&delivery.address)),
			("Número", na(&delivery.number)),
			("Complemento", na(&delivery.complement)),
			("Bairro", na(&delivery.neighborhood)),
			("Cidade", na(&delivery.city)),
			("Data/Horário de Entrega", delivery_time),
			("Observações", or(&fields.observations, NONE_GIVEN).to_string()),
			("Como Conheceu", fields.referral_text().unwrap_or(NOT_INFORMED).to_string()),
			(Self::SUBJECT_KEY, format!("🍫 Novo Orçamento - {}", fields.full_name)),
		])
	}
}

impl Serialize for RelayBody {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (key, value) in &self.0 {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		catalog,
		fields::{ReferralSource, TextField},
		selection::{ItemField, Selection},
	};

	fn quote_with(selection: Selection) -> Quote {
		let mut fields = QuoteFields::default();
		fields.set_text(TextField::FullName, "Maria".into());
		fields.set_text(TextField::Email, "maria@example.com".into());
		fields.set_text(TextField::Phone, "21999999999".into());
		Quote { fields, selection }
	}

	fn products_block(message: &str) -> Vec<&str> {
		message.split("\n\n")
			.find(|s| s.starts_with("🍫"))
			.expect("there's always a products block")
			.lines()
			.skip(1)
			.collect()
	}

	#[test]
	fn cookie_line_has_quantity_and_flavor_only() {
		let mut sel = Selection::default();
		sel.toggle("Cookie Grande").unwrap();
		sel.update_line_item("Cookie Grande", 0, ItemField::Quantity, "20".into()).unwrap();
		sel.update_line_item("Cookie Grande", 0, ItemField::Flavor, "Macadamia".into()).unwrap();

		let message = compile(&quote_with(sel));
		let lines = products_block(&message);

		assert_eq!(lines, ["• Cookie Grande #1 - Qtd: 20 - Sabor: Macadamia"]);
		assert!(!message.contains("Tamanho"));
	}

	#[test]
	fn biscuit_line_has_package_size_only() {
		let mut sel = Selection::default();
		sel.toggle("Biscoitos Amanteigados").unwrap();
		sel.update_line_item("Biscoitos Amanteigados", 0, ItemField::PackageSize, "Saquinho com 8".into()).unwrap();

		let message = compile(&quote_with(sel));

		assert_eq!(products_block(&message), ["• Biscoitos Amanteigados #1 - Tamanho: Saquinho com 8"]);
		assert!(!message.contains("Qtd"));
	}

	#[test]
	fn compiling_is_deterministic() {
		let mut sel = Selection::default();
		sel.toggle("Cake Pequeno (20 cm)").unwrap();
		sel.add_line_item("Cake Pequeno (20 cm)").unwrap();
		sel.toggle(catalog::OTHER_PRODUCT).unwrap();
		sel.set_other_text("Cupcakes de brownie".into()).unwrap();
		let quote = quote_with(sel);

		assert_eq!(compile(&quote), compile(&quote));
		assert_eq!(RelayBody::from(&quote), RelayBody::from(&quote));
	}

	#[test]
	fn products_follow_catalog_order_with_every_item() {
		let mut sel = Selection::default();
		sel.toggle(catalog::OTHER_PRODUCT).unwrap();
		sel.set_other_text("Bolo de brownie de 3 andares".into()).unwrap();
		sel.toggle("Cookie Mini").unwrap();
		sel.toggle("Brownies Mini (3,5x3,5 cm)").unwrap();
		sel.add_line_item("Brownies Mini (3,5x3,5 cm)").unwrap();
		sel.update_line_item("Brownies Mini (3,5x3,5 cm)", 1, ItemField::Flavor, "Café".into()).unwrap();

		let quote = quote_with(sel);

		assert_eq!(products_block(&compile(&quote)), [
			"• Brownies Mini (3,5x3,5 cm) #1",
			"• Brownies Mini (3,5x3,5 cm) #2 - Sabor: Café",
			"• Cookie Mini #1",
			"• Bolo de brownie de 3 andares",
		]);
		assert_eq!(
			RelayBody::from(&quote).get("Produtos"),
			Some("Brownies Mini (3,5x3,5 cm) #1; Brownies Mini (3,5x3,5 cm) #2 - Sabor: Café; Cookie Mini #1; Bolo de brownie de 3 andares")
		);
	}

	#[test]
	fn products_without_details_are_just_named() {
		let (_, cookie) = catalog::find("Cookie Mini").unwrap();
		assert_eq!(product_lines(Selected::Items(cookie, &[])), ["Cookie Mini"]);
		assert_eq!(product_lines(Selected::Other("  ")), [catalog::OTHER_PRODUCT]);
	}

	#[test]
	fn optional_sections_appear_only_when_asked_for() {
		let mut sel = Selection::default();
		sel.toggle("Snack (latinhas)").unwrap();
		let mut quote = quote_with(sel);

		let message = compile(&quote);
		assert!(!message.contains("PERSONALIZAÇÃO"));
		assert!(message.contains("Método: Retirada no local"));
		assert!(!message.contains("CEP"));
		assert!(!message.contains("Data/Horário"));
		assert!(message.contains("Data do Evento: Não informado"));
		assert!(message.contains("Observações: Nenhuma\nComo conheceu: Não informado"));

		quote.fields.customization.wanted = true;
		quote.fields.customization.kind = "Tags com nome".into();
		quote.fields.delivery.method = DeliveryMethod::Delivery;
		quote.fields.delivery.cep = "22250-040".into();
		quote.fields.delivery.date_time = "2025-03-01T15:30".into();
		quote.fields.event_date = "2025-03-01".into();
		quote.fields.set_referral(Some(ReferralSource::Friend));

		let message = compile(&quote);
		assert!(message.contains("🎨 PERSONALIZAÇÃO:\nTipo: Tags com nome\nDescrição: N/A"));
		assert!(message.contains("Método: Entrega\nEndereço: N/A\nCEP: 22250-040"));
		assert!(message.contains("Data/Horário: 01/03/2025 às 15:30"));
		assert!(message.contains("Data do Evento: 01/03/2025"));
		assert!(message.contains("Como conheceu: Indicação de amigo"));
	}

	#[test]
	fn sections_come_in_order() {
		let mut sel = Selection::default();
		sel.toggle("Cookie Grande").unwrap();
		let mut quote = quote_with(sel);
		quote.fields.customization.wanted = true;

		let message = compile(&quote);
		let titles: Vec<_> = message.split("\n\n")
			.map(|s| s.lines().next().unwrap_or_default())
			.collect();

		assert_eq!(titles, [
			"📋 NOVA SOLICITAÇÃO DE ORÇAMENTO",
			"👤 CLIENTE:",
			"🍫 PRODUTOS SOLICITADOS:",
			"🎨 PERSONALIZAÇÃO:",
			"🚚 ENTREGA:",
			"📝 INFORMAÇÕES ADICIONAIS:",
		]);
	}

	#[test]
	fn relay_body_is_an_ordered_object_with_a_subject() {
		let mut sel = Selection::default();
		sel.toggle("Cookie Grande").unwrap();
		let quote = quote_with(sel);
		let body = RelayBody::from(&quote);

		assert_eq!(body.get(RelayBody::SUBJECT_KEY), Some("🍫 Novo Orçamento - Maria"));
		assert_eq!(body.get("Deseja Personalização"), Some("Não"));
		assert_eq!(body.get("CEP"), Some("N/A"));
		assert_eq!(body.get("Data/Horário de Entrega"), Some("Não informado"));
		assert_eq!(body.keys().next(), Some("Nome Completo"));
		assert_eq!(body.keys().last(), Some(RelayBody::SUBJECT_KEY));

		let json = serde_json::to_string(&body).unwrap();
		assert!(json.starts_with(r#"{"Nome Completo":"Maria","Email":"maria@example.com""#));

		let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed.len(), body.keys().count());
		assert!(parsed.values().all(serde_json::Value::is_string));
	}
}
