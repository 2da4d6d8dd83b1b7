use yew::prelude::*;
use shared_data::{AnalyticsEvent, SiteConfig, deep_link};
use crate::analytics;

const GREETING: &str = "Olá! Gostaria de fazer um pedido na Bibbidi Brownie 🤎";

struct ContactCard {
	title: &'static str,
	description: &'static str,
	value: String,
	link: String,
}

fn contact_cards(config: &SiteConfig) -> [ContactCard; 3] {
	[
		ContactCard {
			title: "WhatsApp",
			description: "Entre em contato para fazer seu pedido",
			value: config.whatsapp_display.to_string(),
			link: config.whatsapp_link(),
		},
		ContactCard {
			title: "E-mail",
			description: "Envie sua mensagem ou orçamento",
			value: config.contact_email.to_string(),
			link: config.mailto_link(),
		},
		ContactCard {
			title: "Instagram",
			description: "Siga para ver nossas delícias",
			value: format!("@{}", config.instagram_handle),
			link: config.instagram_link(),
		},
	]
}

#[function_component(Contact)]
pub fn contact() -> Html {
	let config = SiteConfig::from_build_env();

	let cards = contact_cards(&config).into_iter().map(|card| {
		let title = card.title;
		html! {
			<a
				class="card"
				href={ card.link }
				target="_blank"
				rel="noopener noreferrer"
				onclick={ move |_| analytics::track(&AnalyticsEvent::contact_click(title)) }
			>
				<h3>{ card.title }</h3>
				<p>{ card.description }</p>
				<p class="price">{ card.value }</p>
			</a>
		}
	}).collect::<Html>();

	html! {
		<section id="contato">
			<h2>{ "Entre em Contato" }</h2>
			<p>
				{ "Ficou com água na boca? Entre em contato para fazer seu pedido ou tirar dúvidas. \
				Estamos prontos para adoçar o seu dia!" }
			</p>
			<div class="contact-grid">{ cards }</div>
			<p class="hint">
				{ "Para entrar em contato, basta clicar em qualquer meio de comunicação acima e será \
				automaticamente direcionado." }
			</p>
		</section>
	}
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
	let config = SiteConfig::from_build_env();

	html! {
		<a
			id="whatsapp-float"
			href={ deep_link(config.whatsapp_number, GREETING) }
			target="_blank"
			rel="noopener noreferrer"
			title="Faça seu pedido!"
			aria-label="Fale conosco pelo WhatsApp"
			onclick={ |_| analytics::track(&AnalyticsEvent::whatsapp_click()) }
		>
			{ "💬" }
		</a>
	}
}
