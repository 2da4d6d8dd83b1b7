/// The name of the catch-all product that's described with free text instead of line items
pub const OTHER_PRODUCT: &str = "Outros";

const BROWNIE_FLAVORS: &[&str] = &[
	"Tradicional",
	"Café",
	"Meio Amargo",
	"Nutella",
	"Doce de Leite",
	"Caramelo Salgado",
	"Café com Caramelo",
];

const SNACK_FLAVORS: &[&str] = &["Tradicional"];

const COOKIE_FLAVORS: &[&str] = &[
	"Gotas de Chocolate",
	"Macadamia",
	"Macadamia Duplo Chocolate",
];

const BISCUIT_PACKAGES: &[&str] = &["Saquinho com 6", "Saquinho com 8"];

/// What a line item of a given product gets configured with, besides its quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variants {
	Flavors(&'static [&'static str]),
	// these are sold per package, so the package size takes the place of the flavor
	PackageSizes(&'static [&'static str]),
	FreeText,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CatalogEntry {
	pub name: &'static str,
	pub variants: Variants,
}

impl CatalogEntry {
	#[must_use]
	pub fn valid_flavors(&self) -> &'static [&'static str] {
		match self.variants {
			Variants::Flavors(flavors) => flavors,
			Variants::PackageSizes(_) | Variants::FreeText => &[],
		}
	}

	#[must_use]
	pub fn package_sizes(&self) -> &'static [&'static str] {
		match self.variants {
			Variants::PackageSizes(sizes) => sizes,
			Variants::Flavors(_) | Variants::FreeText => &[],
		}
	}

	#[must_use]
	pub fn requires_package_size(&self) -> bool {
		matches!(self.variants, Variants::PackageSizes(_))
	}

	#[must_use]
	pub fn is_free_text(&self) -> bool {
		matches!(self.variants, Variants::FreeText)
	}
}

/// Everything that can be requested through the quote form, in the order it's displayed (and
/// thus the order it's rendered into the compiled message)
pub static CATALOG: &[CatalogEntry] = &[
	CatalogEntry { name: "Brownies Mini (3,5x3,5 cm)", variants: Variants::Flavors(BROWNIE_FLAVORS) },
	CatalogEntry { name: "Brownies Médio (4x4 cm)", variants: Variants::Flavors(BROWNIE_FLAVORS) },
	CatalogEntry { name: "Brownies Grande (6x6 cm)", variants: Variants::Flavors(BROWNIE_FLAVORS) },
	CatalogEntry { name: "Cake Pequeno (20 cm)", variants: Variants::Flavors(BROWNIE_FLAVORS) },
	CatalogEntry { name: "Cake Grande (24 cm)", variants: Variants::Flavors(BROWNIE_FLAVORS) },
	CatalogEntry { name: "Snack (latinhas)", variants: Variants::Flavors(SNACK_FLAVORS) },
	CatalogEntry { name: "Cookie Grande", variants: Variants::Flavors(COOKIE_FLAVORS) },
	CatalogEntry { name: "Cookie Mini", variants: Variants::Flavors(COOKIE_FLAVORS) },
	CatalogEntry { name: "Biscoitos Amanteigados", variants: Variants::PackageSizes(BISCUIT_PACKAGES) },
	CatalogEntry { name: OTHER_PRODUCT, variants: Variants::FreeText },
];

/// Finds a product by its exact name, returning its position in [`CATALOG`] as well
#[must_use]
pub fn find(name: &str) -> Option<(usize, &'static CatalogEntry)> {
	CATALOG.iter()
		.enumerate()
		.find(|(_, entry)| entry.name == name)
}
