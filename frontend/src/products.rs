use yew::prelude::*;
use shared_data::AnalyticsEvent;
use crate::analytics;

struct ProductItem {
	name: &'static str,
	description: &'static str,
	price: &'static str,
	image: Option<&'static str>,
}

struct ProductCategory {
	title: &'static str,
	items: &'static [ProductItem],
}

const COOKIE_FLAVORS: &str = "Chocolate Belga, Chocolate Belga e Macadâmia, Macadâmia Duplo Chocolate";

static CATEGORIES: &[ProductCategory] = &[
	ProductCategory {
		title: "Brownies",
		items: &[
			ProductItem {
				name: "Mini (3,5x3,5 cm)",
				description: "Mínimo 50 unidades - Tradicional, Café, Meio-Amargo, Recheados",
				price: "A partir de R$ 3,00",
				image: None,
			},
			ProductItem {
				name: "Médio (4x4 cm)",
				description: "Mínimo 25 unidades - Tradicional, Café, Meio-Amargo, Recheados",
				price: "A partir de R$ 5,50",
				image: None,
			},
			ProductItem {
				name: "Grande (6x6 cm)",
				description: "Mínimo 15 unidades - Tradicional, Café, Meio-Amargo, Recheados",
				price: "A partir de R$ 7,50",
				image: None,
			},
			ProductItem {
				name: "Cake - Pequeno (20 cm)",
				description: "Serve de 8 a 10 pessoas - Tradicional, Café, Meio-Amargo, Recheados",
				price: "A partir de R$ 50,00",
				image: None,
			},
			ProductItem {
				name: "Cake - Grande (24 cm)",
				description: "Serve de 10 a 15 pessoas - Tradicional, Café, Meio-Amargo, Recheados",
				price: "A partir de R$ 90,00",
				image: None,
			},
			ProductItem {
				name: "Snack",
				description: "Latinha com as disputadas lascas de brownie tradicional",
				price: "R$ 20,00",
				image: Some("/snack-latinhas.jpg"),
			},
		],
	},
	ProductCategory {
		title: "Cookies",
		items: &[
			ProductItem {
				name: "Cookie Grande",
				description: COOKIE_FLAVORS,
				price: "A partir de R$ 9,00",
				image: None,
			},
			ProductItem {
				name: "Cookie Mini",
				description: COOKIE_FLAVORS,
				price: "A partir de R$ 5,00",
				image: None,
			},
		],
	},
	ProductCategory {
		title: "Biscoitos Amanteigados",
		items: &[
			ProductItem {
				name: "Pacotinho com 6 unidades",
				description: "Biscoitinhos amanteigados deliciosos",
				price: "R$ 7,50",
				image: None,
			},
			ProductItem {
				name: "Pacotinho com 8 unidades",
				description: "Biscoitinhos amanteigados deliciosos",
				price: "R$ 9,50",
				image: None,
			},
			ProductItem {
				name: "Personalizados",
				description: "Formatos e temas personalizados - consulte-nos!",
				price: "Sob consulta",
				image: None,
			},
		],
	},
];

fn product_card(
	category: &'static ProductCategory,
	item: &'static ProductItem,
	preview: &UseStateHandle<Option<&'static ProductItem>>
) -> Html {
	let on_view = move |_: MouseEvent| analytics::track(&AnalyticsEvent::product_view(category.title, item.name));

	let image = item.image.map(|src| {
		let preview = preview.clone();
		html! {
			<img src={ src } alt={ item.name } onclick={ move |e: MouseEvent| {
				// the whole card also tracks clicks, and we don't want this counted as both
				e.stop_propagation();
				analytics::track(&AnalyticsEvent::product_image_click(category.title, item.name));
				preview.set(Some(item));
			}} />
		}
	});

	html! {
		<div class="card" onclick={ on_view }>
			<h4>{ item.name }</h4>
			<p>{ item.description }</p>
			<p class="price">{ item.price }</p>
			{ image }
		</div>
	}
}

#[function_component(Products)]
pub fn products() -> Html {
	let preview = use_state(|| Option::<&'static ProductItem>::None);

	let dialog = preview.map(|item| {
		let preview = preview.clone();
		html! {
			<div class="image-dialog" role="dialog" onclick={ move |_| preview.set(None) }>
				<img src={ item.image.unwrap_or_default() } alt={ item.name } />
			</div>
		}
	});

	html! {
		<section id="produtos">
			<h2>{ "Nossos Produtos" }</h2>
			<p>
				{ "Cada doce é feito com ingredientes selecionados e muito carinho. \
				Descubra o sabor que vai conquistar seu coração." }
			</p>
			{
				CATEGORIES.iter().map(|category| html! {
					<div class="category">
						<h3>{ category.title }</h3>
						<div class="product-grid">
						{
							category.items.iter()
								.map(|item| product_card(category, item, &preview))
								.collect::<Html>()
						}
						</div>
					</div>
				}).collect::<Html>()
			}
			<p class="hint">{ "* Os valores dos brownies quadrados já incluem embalagens personalizadas." }</p>
			{ dialog }
		</section>
	}
}
