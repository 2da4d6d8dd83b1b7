use std::collections::BTreeMap;

use crate::catalog::{self, CatalogEntry, CATALOG};

/// One quantity/flavor/package combination requested for a product. Empty strings mean the
/// customer hasn't filled that part in, which is fine - it just gets left out of the message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItem {
	pub quantity: String,
	pub flavor: String,
	pub package_size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
	Quantity,
	Flavor,
	PackageSize,
}

impl LineItem {
	#[must_use]
	pub fn get(&self, field: ItemField) -> &str {
		match field {
			ItemField::Quantity => &self.quantity,
			ItemField::Flavor => &self.flavor,
			ItemField::PackageSize => &self.package_size,
		}
	}

	pub fn set(&mut self, field: ItemField, value: String) {
		match field {
			ItemField::Quantity => self.quantity = value,
			ItemField::Flavor => self.flavor = value,
			ItemField::PackageSize => self.package_size = value,
		}
	}
}

/// How many line items a single product may carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemLimit {
	Single,
	#[default]
	Multiple,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
	#[error("'{0}' is not in the catalog")]
	UnknownProduct(String),
	#[error("'{0}' has not been selected")]
	NotSelected(String),
	#[error("'{0}' is described with free text and has no line items")]
	NoLineItems(String),
	#[error("'{0}' can only have a single line item")]
	LimitReached(String),
	#[error("line item {index} of '{product}' doesn't exist (it has {len})")]
	OutOfRange {
		product: String,
		index: usize,
		len: usize,
	},
	#[error("the first line item of a selected product can't be removed")]
	FirstItemRequired,
}

/// A selected product as seen when rendering, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selected<'a> {
	Items(&'static CatalogEntry, &'a [LineItem]),
	Other(&'a str),
}

/// Which products the customer has picked, and what they want of each.
///
/// A (non-free-text) product is selected iff it has an entry in `items`, so the two can never
/// disagree. Entries are keyed by the product's position in the catalog so that iterating them
/// always follows catalog order regardless of the order they were toggled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	limit: ItemLimit,
	items: BTreeMap<usize, Vec<LineItem>>,
	// `Some` iff the free-text product is selected
	other: Option<String>,
}

fn entry(name: &str) -> Result<(usize, &'static CatalogEntry), SelectionError> {
	catalog::find(name).ok_or_else(|| SelectionError::UnknownProduct(name.to_string()))
}

impl Selection {
	#[must_use]
	pub fn new(limit: ItemLimit) -> Self {
		Self { limit, ..Self::default() }
	}

	#[must_use]
	pub fn limit(&self) -> ItemLimit {
		self.limit
	}

	/// Selects the product if it isn't yet (seeding it with one empty line item), or deselects it
	/// and drops everything entered for it. Returns whether it's now selected.
	pub fn toggle(&mut self, name: &str) -> Result<bool, SelectionError> {
		let (idx, product) = entry(name)?;

		if product.is_free_text() {
			self.other = match self.other.take() {
				Some(_) => None,
				None => Some(String::new()),
			};
			return Ok(self.other.is_some());
		}

		if self.items.remove(&idx).is_some() {
			Ok(false)
		} else {
			self.items.insert(idx, vec![LineItem::default()]);
			Ok(true)
		}
	}

	fn items_mut(&mut self, name: &str) -> Result<&mut Vec<LineItem>, SelectionError> {
		let (idx, product) = entry(name)?;

		if product.is_free_text() {
			return Err(SelectionError::NoLineItems(name.to_string()));
		}

		self.items.get_mut(&idx)
			.ok_or_else(|| SelectionError::NotSelected(name.to_string()))
	}

	/// Appends an empty line item, returning its index
	pub fn add_line_item(&mut self, name: &str) -> Result<usize, SelectionError> {
		let limit = self.limit;
		let items = self.items_mut(name)?;

		if limit == ItemLimit::Single && !items.is_empty() {
			return Err(SelectionError::LimitReached(name.to_string()));
		}

		items.push(LineItem::default());
		Ok(items.len() - 1)
	}

	pub fn update_line_item(
		&mut self,
		name: &str,
		index: usize,
		field: ItemField,
		value: String
	) -> Result<(), SelectionError> {
		let items = self.items_mut(name)?;
		let len = items.len();

		items.get_mut(index)
			.ok_or_else(|| SelectionError::OutOfRange { product: name.to_string(), index, len })
			.map(|item| item.set(field, value))
	}

	/// Removes the line item at `index`. The first item stays for as long as the product is
	/// selected; deselect the product to get rid of it.
	pub fn remove_line_item(&mut self, name: &str, index: usize) -> Result<LineItem, SelectionError> {
		let items = self.items_mut(name)?;

		if index >= items.len() {
			return Err(SelectionError::OutOfRange { product: name.to_string(), index, len: items.len() });
		}

		if index == 0 {
			return Err(SelectionError::FirstItemRequired);
		}

		Ok(items.remove(index))
	}

	pub fn set_other_text(&mut self, text: String) -> Result<(), SelectionError> {
		match self.other.as_mut() {
			Some(other) => {
				*other = text;
				Ok(())
			}
			None => Err(SelectionError::NotSelected(catalog::OTHER_PRODUCT.to_string())),
		}
	}

	#[must_use]
	pub fn is_selected(&self, name: &str) -> bool {
		match catalog::find(name) {
			Some((_, product)) if product.is_free_text() => self.other.is_some(),
			Some((idx, _)) => self.items.contains_key(&idx),
			None => false,
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty() && self.other.is_none()
	}

	/// The line items of a selected product, or `None` if it isn't selected (or is the free-text
	/// product)
	#[must_use]
	pub fn line_items(&self, name: &str) -> Option<&[LineItem]> {
		let (idx, _) = catalog::find(name)?;
		self.items.get(&idx).map(Vec::as_slice)
	}

	#[must_use]
	pub fn other_text(&self) -> Option<&str> {
		self.other.as_deref()
	}

	/// Every selected product, in catalog order
	pub fn selected(&self) -> impl Iterator<Item = Selected<'_>> {
		CATALOG.iter()
			.enumerate()
			.filter_map(|(idx, product)| if product.is_free_text() {
				self.other.as_deref().map(Selected::Other)
			} else {
				self.items.get(&idx).map(|items| Selected::Items(product, items.as_slice()))
			})
	}
}
