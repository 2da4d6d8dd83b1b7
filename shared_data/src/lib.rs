pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod fields;
pub mod lookup;
pub mod message;
pub mod selection;
pub mod session;
pub mod validate;

pub use catalog::{CATALOG, CatalogEntry, OTHER_PRODUCT, Variants};
pub use config::{Channel, FormPolicy, SiteConfig};
pub use dispatch::{Analytics, AnalyticsEvent, DispatchError, Dispatched, Dispatcher, deep_link};
pub use fields::{DeliveryMethod, QuoteFields, ReferralSource, TextField};
pub use message::{RelayBody, compile};
pub use selection::{ItemField, ItemLimit, LineItem, Selected, Selection, SelectionError};
pub use session::{FormSession, Notice, NoticeKind, Phase, Quote, SubmitError};
pub use validate::{ValidationError, earliest_event_date, validate};

pub static BASE_STYLE: &str = r#"
* {
	--chocolate: #4a2c2a;
	--cocoa: #6b4226;
	--cream: #fdf6ec;
	--frosting: #f6d6de;
	--berry: #c2577a;
	--gold: #c8963e;
	--muted-text: #7a6259;
	box-sizing: border-box;
	font-family: "Poppins", "Helvetica Neue", Arial, sans-serif;
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	background-color: var(--cream);
	color: var(--chocolate);
}
h1, h2, h3 {
	font-family: "Playfair Display", Georgia, serif;
	color: var(--cocoa);
}
a {
	color: var(--berry);
	text-decoration: none;
}
button, a.button {
	display: inline-block;
	cursor: pointer;
	font: inherit;
	border: none;
	border-radius: 999px;
	padding: 10px 22px;
	background-color: var(--berry);
	color: white;
}
button:disabled {
	opacity: 0.6;
	cursor: not-allowed;
}
button.secondary, a.button.secondary {
	background-color: transparent;
	border: 2px solid var(--berry);
	color: var(--berry);
}
input, textarea, select {
	font: inherit;
	width: 100%;
	padding: 8px 10px;
	border: 1px solid var(--frosting);
	border-radius: 8px;
	background-color: white;
	color: var(--chocolate);
}
section {
	padding: 64px 20px;
	max-width: 1100px;
	margin: 0 auto;
}
"#;

pub static SITE_STYLE: &str = r"
#site-header {
	position: sticky;
	top: 0;
	z-index: 10;
	display: flex;
	align-items: center;
	justify-content: space-between;
	padding: 12px 24px;
	background-color: var(--cream);
	box-shadow: 0 2px 8px rgba(74, 44, 42, 0.1);
}
#site-header img {
	height: 48px;
}
#site-header nav a {
	margin-left: 20px;
	color: var(--chocolate);
}
#menu-toggle {
	display: none;
	background: none;
	color: var(--chocolate);
	font-size: 1.6em;
	padding: 4px 10px;
}
#hero {
	text-align: center;
	padding: 96px 20px;
}
#hero .actions button {
	margin: 8px;
}
.product-grid, .contact-grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
	gap: 24px;
}
.card {
	background-color: white;
	border-radius: 16px;
	padding: 20px;
	box-shadow: 0 4px 14px rgba(74, 44, 42, 0.08);
}
.card img {
	width: 100%;
	border-radius: 12px;
	cursor: zoom-in;
}
.card .price {
	color: var(--gold);
	font-weight: bold;
}
.image-dialog {
	position: fixed;
	inset: 0;
	z-index: 30;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: rgba(0, 0, 0, 0.7);
}
.image-dialog img {
	max-width: 90vw;
	max-height: 90vh;
	border-radius: 12px;
}
#site-footer {
	text-align: center;
	padding: 32px 20px;
	background-color: var(--chocolate);
	color: var(--cream);
}
#site-footer a {
	color: var(--frosting);
	margin: 0 10px;
}
#whatsapp-float {
	position: fixed;
	right: 24px;
	bottom: 24px;
	z-index: 20;
	width: 60px;
	height: 60px;
	border-radius: 50%;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: #25d366;
	color: white;
	font-size: 1.8em;
}
#toasts {
	position: fixed;
	top: 20px;
	right: 20px;
	z-index: 50;
	display: flex;
	flex-direction: column;
	gap: 10px;
}
.toast {
	max-width: 360px;
	padding: 14px 18px;
	border-radius: 10px;
	color: white;
	box-shadow: 0 4px 14px rgba(0, 0, 0, 0.2);
}
.toast.success {
	background-color: #3c8d5a;
}
.toast.info {
	background-color: #3a6ea5;
}
.toast.error {
	background-color: #b33a3a;
}
@media (max-width: 760px) {
	#menu-toggle {
		display: block;
	}
	#site-header nav {
		display: none;
	}
	#site-header nav.open {
		display: flex;
		flex-direction: column;
		position: absolute;
		top: 100%;
		left: 0;
		right: 0;
		padding: 12px 24px;
		background-color: var(--cream);
	}
	#site-header nav a {
		margin: 8px 0;
	}
}
";

pub static FORM_STYLE: &str = r"
.modal-backdrop {
	position: fixed;
	inset: 0;
	z-index: 40;
	overflow-y: auto;
	padding: 32px 12px;
	background-color: rgba(74, 44, 42, 0.6);
}
.modal-body {
	position: relative;
	max-width: 760px;
	margin: 0 auto;
	padding-top: 16px;
	border-radius: 16px;
	background-color: white;
}
.modal-body > h2 {
	margin: 12px 28px 0 28px;
}
.modal-close {
	position: absolute;
	top: 12px;
	right: 12px;
	padding: 4px 12px;
	background-color: var(--frosting);
	color: var(--chocolate);
}
.quote-form {
	max-width: 760px;
	background-color: white;
	border-radius: 16px;
	padding: 28px;
}
.quote-form fieldset {
	border: 1px solid var(--frosting);
	border-radius: 12px;
	margin-bottom: 20px;
}
.quote-form legend {
	font-weight: bold;
	color: var(--cocoa);
	padding: 0 8px;
}
.quote-form label {
	display: block;
	margin: 10px 0 4px 0;
}
.quote-form .check {
	display: flex;
	align-items: center;
	gap: 8px;
}
.quote-form .check input {
	width: auto;
}
.quote-form .hint {
	font-size: 0.85em;
	color: var(--muted-text);
}
.line-item {
	display: grid;
	grid-template-columns: 1fr 2fr auto;
	gap: 8px;
	align-items: end;
	margin: 8px 0 8px 24px;
}
.line-item button, .add-item {
	padding: 6px 14px;
}
";
