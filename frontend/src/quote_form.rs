use std::{ops::Deref, rc::Rc};
use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use gloo_console::log;
use shared_data::{
	AnalyticsEvent, CATALOG, CatalogEntry, DeliveryMethod, DispatchError, Dispatched, Dispatcher,
	FormSession, ItemField, ItemLimit, LineItem, ReferralSource, SelectionError, SiteConfig,
	TextField, Variants, earliest_event_date,
	lookup::{LookupError, ResolvedAddress},
};
use crate::{
	analytics,
	dispatch::ChannelDispatcher,
	lookup,
	style::FormStyle,
	toast::{self, Toaster},
};

/// A [`FormSession`] that yew can drive through [`use_reducer`]
#[derive(Clone, PartialEq)]
pub struct FormState(FormSession);

impl Deref for FormState {
	type Target = FormSession;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

pub enum FormMsg {
	Text(TextField, String),
	Customize(bool),
	Method(DeliveryMethod),
	Referral(Option<ReferralSource>),
	Toggle(&'static str),
	AddItem(&'static str),
	UpdateItem(&'static str, usize, ItemField, String),
	RemoveItem(&'static str, usize),
	OtherText(String),
	CepResolved(String, ResolvedAddress),
	// Carries a handle to this same reducer so that the dispatch can report back when it's done
	Submit(UseReducerHandle<FormState>, Option<Toaster>),
	Finished(Result<Dispatched, DispatchError>, Option<Toaster>),
}

impl Reducible for FormState {
	type Action = FormMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut session = self.0.clone();

		let res: Result<(), SelectionError> = match action {
			FormMsg::Text(field, value) => {
				session.fields.set_text(field, value);
				Ok(())
			},
			FormMsg::Customize(wanted) => {
				session.fields.customization.wanted = wanted;
				Ok(())
			},
			FormMsg::Method(method) => {
				session.fields.delivery.method = method;
				Ok(())
			},
			FormMsg::Referral(referral) => {
				session.fields.set_referral(referral);
				Ok(())
			},
			FormMsg::Toggle(name) => session.selection.toggle(name).map(|_| ()),
			FormMsg::AddItem(name) => session.selection.add_line_item(name).map(|_| ()),
			FormMsg::UpdateItem(name, idx, field, value) =>
				session.selection.update_line_item(name, idx, field, value),
			FormMsg::RemoveItem(name, idx) => session.selection.remove_line_item(name, idx).map(|_| ()),
			FormMsg::OtherText(text) => session.selection.set_other_text(text),
			FormMsg::CepResolved(cep, addr) => {
				if !session.fields.delivery.apply_lookup(&cep, &addr) {
					log!("Dropping address lookup for ", cep, " since the CEP has changed since");
					return self;
				}
				Ok(())
			},
			FormMsg::Submit(handle, toaster) => {
				let quote = match session.begin_submit() {
					Ok(quote) => quote,
					Err(err) => {
						if let Some(notice) = err.notice() {
							toast::notify(toaster.as_ref(), notice);
						}
						return self;
					}
				};

				analytics::track(&AnalyticsEvent::quote_submit());

				let dispatcher = ChannelDispatcher::for_site(&SiteConfig::from_build_env());
				wasm_bindgen_futures::spawn_local(async move {
					let result = dispatcher.deliver(&quote).await;

					if let Err(ref err) = result {
						log!("Couldn't send quote: ", err.to_string());
					}

					handle.dispatch(FormMsg::Finished(result, toaster));
				});

				Ok(())
			},
			FormMsg::Finished(result, toaster) => {
				let notice = session.finish_submit(result);
				toast::notify(toaster.as_ref(), notice);
				Ok(())
			}
		};

		match res {
			Ok(()) => Self(session).into(),
			Err(err) => {
				// the markup only offers actions that make sense, so this means it's out of sync
				log!("Ignoring form action: ", err.to_string());
				self
			}
		}
	}
}

/// Whatever's currently in the input, textarea or select that fired `e`
fn target_value(e: &Event) -> Option<String> {
	let target = e.target()?;

	let target = match target.dyn_into::<HtmlInputElement>() {
		Ok(input) => return Some(input.value()),
		Err(t) => t,
	};

	let target = match target.dyn_into::<HtmlTextAreaElement>() {
		Ok(area) => return Some(area.value()),
		Err(t) => t,
	};

	target.dyn_into::<HtmlSelectElement>()
		.ok()
		.map(|select| select.value())
}

/// Every field the customer types into is handled the same way, so this just needs to know which
/// one it's for
fn text_callback(form: &UseReducerHandle<FormState>, field: TextField) -> Callback<InputEvent> {
	let form = form.clone();
	Callback::from(move |e: InputEvent| if let Some(value) = target_value(&e) {
		form.dispatch(FormMsg::Text(field, value));
	})
}

fn select_options(options: &[&'static str], current: &str, placeholder: &'static str) -> Html {
	html! {
		<>
			<option value="" selected={ current.is_empty() }>{ placeholder }</option>
			{
				options.iter().map(|opt| html! {
					<option value={ *opt } selected={ *opt == current }>{ *opt }</option>
				}).collect::<Html>()
			}
		</>
	}
}

fn line_item_view(
	form: &UseReducerHandle<FormState>,
	product: &'static CatalogEntry,
	idx: usize,
	item: &LineItem
) -> Html {
	let name = product.name;

	let on_field = |field: ItemField| {
		let form = form.clone();
		Callback::from(move |e: Event| if let Some(value) = target_value(&e) {
			form.dispatch(FormMsg::UpdateItem(name, idx, field, value));
		})
	};

	let on_quantity = {
		let form = form.clone();
		Callback::from(move |e: InputEvent| if let Some(value) = target_value(&e) {
			form.dispatch(FormMsg::UpdateItem(name, idx, ItemField::Quantity, value));
		})
	};

	let details = match product.variants {
		Variants::PackageSizes(sizes) => html! {
			<label>
				{ "Tamanho do Pacotinho" }
				<select onchange={ on_field(ItemField::PackageSize) }>
					{ select_options(sizes, &item.package_size, "Selecione o tamanho") }
				</select>
			</label>
		},
		Variants::Flavors(flavors) => html! {
			<>
				<label>
					{ "Quantidade" }
					<input
						type="number"
						min="1"
						placeholder="Ex: 50"
						value={ item.quantity.clone() }
						oninput={ on_quantity }
					/>
				</label>
				if !flavors.is_empty() {
					<label>
						{ "Sabor/Recheio" }
						<select onchange={ on_field(ItemField::Flavor) }>
							{ select_options(flavors, &item.flavor, "Selecione o sabor") }
						</select>
					</label>
				}
			</>
		},
		Variants::FreeText => html! {},
	};

	// The first item is what selecting the product gave them, so it can only go away by
	// unselecting the product entirely
	let remove = (idx > 0).then(|| {
		let form = form.clone();
		html! {
			<button type="button" class="secondary" onclick={
				move |_| form.dispatch(FormMsg::RemoveItem(name, idx))
			}>{ "Remover" }</button>
		}
	});

	html! {
		<div class="line-item">
			<span class="hint">{ format!("Item {}", idx + 1) }</span>
			{ details }
			{ remove }
		</div>
	}
}

fn product_view(form: &UseReducerHandle<FormState>, product: &'static CatalogEntry) -> Html {
	let name = product.name;
	let selected = form.selection.is_selected(name);
	let input_id = format!("product-{name}");

	let on_toggle = {
		let form = form.clone();
		Callback::from(move |_: Event| form.dispatch(FormMsg::Toggle(name)))
	};

	let details = if !selected {
		html! {}
	} else if product.is_free_text() {
		let text = form.selection.other_text().unwrap_or_default().to_string();
		let form = form.clone();
		html! {
			<label>
				{ "Descreva o produto desejado" }
				<textarea
					placeholder="Ex: Bolo de brownie de 3 andares, Cupcakes de brownie, etc."
					value={ text }
					oninput={ move |e: InputEvent| if let Some(text) = target_value(&e) {
						form.dispatch(FormMsg::OtherText(text));
					}}
				/>
			</label>
		}
	} else {
		let items = form.selection.line_items(name).unwrap_or_default();
		let add = (form.selection.limit() == ItemLimit::Multiple).then(|| {
			let form = form.clone();
			html! {
				<button type="button" class="secondary add-item" onclick={
					move |_| form.dispatch(FormMsg::AddItem(name))
				}>{ "+ Adicionar outro sabor/quantidade" }</button>
			}
		});

		html! {
			<>
				{
					items.iter()
						.enumerate()
						.map(|(idx, item)| line_item_view(form, product, idx, item))
						.collect::<Html>()
				}
				{ add }
			</>
		}
	};

	html! {
		<div class="product-choice">
			<label class="check" for={ input_id.clone() }>
				<input type="checkbox" id={ input_id } checked={ selected } onchange={ on_toggle } />
				{ name }
			</label>
			{ details }
		</div>
	}
}

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
	let config = SiteConfig::from_build_env();
	let form = use_reducer_eq(|| FormState(FormSession::new(config.policy())));
	let toaster = use_context::<Toaster>();

	let policy = form.policy();
	let fields = &form.fields;
	let delivery = &fields.delivery;

	let min_event_date = earliest_event_date(chrono::Local::now().date_naive())
		.format("%Y-%m-%d")
		.to_string();

	let on_submit = {
		let form = form.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			form.dispatch(FormMsg::Submit(form.clone(), toaster.clone()));
		})
	};

	let on_cep = {
		let form = form.clone();
		Callback::from(move |e: InputEvent| {
			let Some(raw) = target_value(&e) else {
				return;
			};

			form.dispatch(FormMsg::Text(TextField::Cep, raw.clone()));

			let form = form.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match lookup::resolve(&raw).await {
					Ok((cep, addr)) => form.dispatch(FormMsg::CepResolved(cep, addr)),
					// they're probably just not done typing it yet
					Err(LookupError::InvalidCep) => (),
					Err(err) => log!("Couldn't look up CEP ", raw.as_str(), ": ", err.to_string()),
				}
			});
		})
	};

	let radio = |checked: bool, msg: fn() -> FormMsg| {
		let form = form.clone();
		(checked, Callback::from(move |_: Event| form.dispatch(msg())))
	};
	let (custom_no, on_custom_no) = radio(!fields.customization.wanted, || FormMsg::Customize(false));
	let (custom_yes, on_custom_yes) = radio(fields.customization.wanted, || FormMsg::Customize(true));
	let is_delivery = delivery.method == DeliveryMethod::Delivery;
	let (pickup, on_pickup) = radio(!is_delivery, || FormMsg::Method(DeliveryMethod::Pickup));
	let (deliver, on_deliver) = radio(is_delivery, || FormMsg::Method(DeliveryMethod::Delivery));

	let on_referral = {
		let form = form.clone();
		Callback::from(move |e: Event| if let Some(value) = target_value(&e) {
			form.dispatch(FormMsg::Referral(value.parse().ok()));
		})
	};

	let submitting = form.is_submitting();

	html! {
		<form class="quote-form" onsubmit={ on_submit }>
			<FormStyle />
			<fieldset>
				<legend>{ "1. Informações do Cliente" }</legend>
				<label>
					{ "Nome Completo *" }
					<input
						required=true
						placeholder="Seu nome completo"
						value={ fields.full_name.clone() }
						oninput={ text_callback(&form, TextField::FullName) }
					/>
				</label>
				<label>
					{ "Email *" }
					<input
						type="email"
						required=true
						placeholder="seu@email.com"
						value={ fields.email.clone() }
						oninput={ text_callback(&form, TextField::Email) }
					/>
				</label>
				<label>
					{ "Telefone/WhatsApp *" }
					<input
						type="tel"
						required=true
						placeholder={ config.whatsapp_display }
						value={ fields.phone.clone() }
						oninput={ text_callback(&form, TextField::Phone) }
					/>
				</label>
				<label>
					{ if policy.require_event_date { "Data do Evento *" } else { "Data do Evento" } }
					<input
						type="date"
						required={ policy.require_event_date }
						min={ min_event_date }
						value={ fields.event_date.clone() }
						oninput={ text_callback(&form, TextField::EventDate) }
					/>
				</label>
				<p class="hint">{ "Pedidos devem ser feitos com no mínimo 48 horas de antecedência" }</p>
			</fieldset>

			<fieldset>
				<legend>{ "2. Detalhes do Pedido" }</legend>
				{ CATALOG.iter().map(|product| product_view(&form, product)).collect::<Html>() }
			</fieldset>

			<fieldset>
				<legend>{ "3. Personalização" }</legend>
				<label class="check">
					<input type="radio" name="customization" checked={ custom_no } onchange={ on_custom_no } />
					{ "Não" }
				</label>
				<label class="check">
					<input type="radio" name="customization" checked={ custom_yes } onchange={ on_custom_yes } />
					{ "Sim" }
				</label>
				if fields.customization.wanted {
					<label>
						{ "Tipo de Personalização" }
						<input
							placeholder="Ex: Embalagem personalizada, Tags com nome, Cores específicas"
							value={ fields.customization.kind.clone() }
							oninput={ text_callback(&form, TextField::CustomizationKind) }
						/>
					</label>
					<label>
						{ "Descrição da Personalização" }
						<textarea
							placeholder="Descreva em detalhes como você gostaria da personalização"
							value={ fields.customization.description.clone() }
							oninput={ text_callback(&form, TextField::CustomizationDescription) }
						/>
					</label>
				}
			</fieldset>

			<fieldset>
				<legend>{ "4. Entrega" }</legend>
				<label class="check">
					<input type="radio" name="delivery" checked={ pickup } onchange={ on_pickup } />
					{ DeliveryMethod::Pickup.label() }
				</label>
				<label class="check">
					<input type="radio" name="delivery" checked={ deliver } onchange={ on_deliver } />
					{ DeliveryMethod::Delivery.label() }
				</label>
				if is_delivery {
					<label>
						{ "CEP *" }
						<input
							required=true
							placeholder="00000-000"
							value={ delivery.cep.clone() }
							oninput={ on_cep }
						/>
					</label>
					<label>
						{ "Endereço" }
						<input
							placeholder="Rua, Avenida..."
							value={ delivery.address.clone() }
							oninput={ text_callback(&form, TextField::Address) }
						/>
					</label>
					<label>
						{ "Número" }
						<input
							placeholder="123"
							value={ delivery.number.clone() }
							oninput={ text_callback(&form, TextField::Number) }
						/>
					</label>
					<label>
						{ "Complemento" }
						<input
							placeholder="Apto, Bloco..."
							value={ delivery.complement.clone() }
							oninput={ text_callback(&form, TextField::Complement) }
						/>
					</label>
					<label>
						{ "Bairro" }
						<input
							placeholder="Centro"
							value={ delivery.neighborhood.clone() }
							oninput={ text_callback(&form, TextField::Neighborhood) }
						/>
					</label>
					<label>
						{ "Cidade" }
						<input
							placeholder="Rio de Janeiro"
							value={ delivery.city.clone() }
							oninput={ text_callback(&form, TextField::City) }
						/>
					</label>
				}
				<label>
					{ "Data e Horário Preferencial" }
					<input
						type="datetime-local"
						value={ delivery.date_time.clone() }
						oninput={ text_callback(&form, TextField::DeliveryDateTime) }
					/>
				</label>
			</fieldset>

			<fieldset>
				<legend>{ "5. Informações Adicionais" }</legend>
				<label>
					{ "Observações / Pedidos Especiais" }
					<textarea
						placeholder="Alguma informação adicional que devemos saber?"
						value={ fields.observations.clone() }
						oninput={ text_callback(&form, TextField::Observations) }
					/>
				</label>
				<label>
					{ format!("Como conheceu a {}?", config.brand_name) }
					<select onchange={ on_referral }>
						<option value="" selected={ fields.referral.is_none() }>{ "Selecione uma opção" }</option>
						{
							ReferralSource::ALL.iter().map(|src| html! {
								<option value={ src.value() } selected={ fields.referral == Some(*src) }>
									{ src.label() }
								</option>
							}).collect::<Html>()
						}
					</select>
				</label>
				if fields.referral == Some(ReferralSource::Other) {
					<label>
						{ "Conte pra gente" }
						<input
							value={ fields.referral_other.clone() }
							oninput={ text_callback(&form, TextField::ReferralOther) }
						/>
					</label>
				}
			</fieldset>

			<button type="submit" disabled={ submitting }>
				{ if submitting { "Enviando..." } else { "Solicitar Orçamento" } }
			</button>
			<p class="hint">{ "* Campos obrigatórios." }</p>
		</form>
	}
}

#[derive(Properties, PartialEq)]
pub struct QuoteFormModalProps {
	pub open: bool,
	pub on_close: Callback<()>,
}

/// The quote form floating over whatever page opened it
#[function_component(QuoteFormModal)]
pub fn quote_form_modal(props: &QuoteFormModalProps) -> Html {
	if !props.open {
		return html! {};
	}

	let on_close = props.on_close.clone();

	html! {
		<div class="modal-backdrop" role="dialog" aria-modal="true">
			<div class="modal-body">
				<button type="button" class="modal-close" aria-label="Fechar" onclick={ move |_| on_close.emit(()) }>
					{ "✕" }
				</button>
				<h2>{ "Solicite seu Orçamento" }</h2>
				<QuoteForm />
			</div>
		</div>
	}
}
