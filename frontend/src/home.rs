use chrono::Datelike;
use yew::prelude::*;
use shared_data::SiteConfig;
use crate::{
	about::About,
	contact::{Contact, WhatsAppButton},
	products::Products,
	quote_form::{QuoteForm, QuoteFormModal},
	style::SharedStyle,
};

// Sections of the home page that can be jumped to, as (element id, link text)
const NAV_LINKS: [(&str, &str); 3] = [
	("produtos", "Produtos"),
	("sobre", "Sobre"),
	("contato", "Contato"),
];

#[function_component(Header)]
pub fn header() -> Html {
	let config = SiteConfig::from_build_env();
	let menu_open = use_state(|| false);

	let toggle_menu = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
	};

	// These are links to `/#section` so that they work from the standalone quote page too
	let links = NAV_LINKS.iter().map(|(id, text)| {
		let menu_open = menu_open.clone();
		html! {
			<a href={ format!("/#{id}") } onclick={ move |_| menu_open.set(false) }>{ *text }</a>
		}
	}).collect::<Html>();

	html! {
		<header id="site-header">
			<a href="/">
				<img src={ config.logo_path } alt={ config.brand_name } />
			</a>
			<button id="menu-toggle" aria-label="Abrir menu" onclick={ toggle_menu }>
				{ if *menu_open { "✕" } else { "☰" } }
			</button>
			<nav class={ classes!(menu_open.then_some("open")) }>
				{ links }
			</nav>
		</header>
	}
}

#[function_component(Hero)]
fn hero() -> Html {
	let modal_open = use_state(|| false);

	let open_modal = {
		let modal_open = modal_open.clone();
		Callback::from(move |_: MouseEvent| modal_open.set(true))
	};
	let close_modal = {
		let modal_open = modal_open.clone();
		Callback::from(move |()| modal_open.set(false))
	};

	html! {
		<section id="hero">
			<h1>{ "Doces que Aquecem o Coração" }</h1>
			<p>
				{ "Brownies, cookies e biscoitos artesanais feitos com carinho e os melhores ingredientes. \
				Cada pedaço é uma experiência de puro prazer." }
			</p>
			<div class="actions">
				<button onclick={ open_modal }>{ "Solicite seu Orçamento!" }</button>
				<a class="button secondary" href="#contato">{ "Fale Conosco" }</a>
			</div>
			<img class="hero-image" src="/hero-brownies.jpg" alt="Brownies Bibbidi Brownie" />
			<QuoteFormModal open={ *modal_open } on_close={ close_modal } />
		</section>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	let config = SiteConfig::from_build_env();
	let year = chrono::Local::now().year();

	html! {
		<footer id="site-footer">
			<h3>{ config.brand_name }</h3>
			<p>{ "Doces artesanais feitos com carinho e os melhores ingredientes." }</p>
			<p>
			{
				NAV_LINKS.iter().map(|(id, text)| html! {
					<a href={ format!("/#{id}") }>{ *text }</a>
				}).collect::<Html>()
			}
			</p>
			<p>
				<a href={ config.whatsapp_link() } target="_blank" rel="noopener noreferrer">{ "WhatsApp" }</a>
				<a href={ config.mailto_link() } target="_blank" rel="noopener noreferrer">{ "E-mail" }</a>
				<a href={ config.instagram_link() } target="_blank" rel="noopener noreferrer">{ "Instagram" }</a>
			</p>
			<p>{ format!("© {year} {}. Todos os direitos reservados.", config.brand_name) }</p>
		</footer>
	}
}

#[function_component(Home)]
pub fn home() -> Html {
	html! {
		<>
			<SharedStyle />
			<Header />
			<main>
				<Hero />
				<Products />
				<About />
				<Contact />
			</main>
			<Footer />
			<WhatsAppButton />
		</>
	}
}

/// Just the quote form, for linking to directly
#[function_component(QuotePage)]
pub fn quote_page() -> Html {
	html! {
		<>
			<SharedStyle />
			<Header />
			<main>
				<section id="orcamento">
					<h1>{ "Solicite seu Orçamento" }</h1>
					<QuoteForm />
				</section>
			</main>
			<Footer />
			<WhatsAppButton />
		</>
	}
}
