use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ shared_data::BASE_STYLE }{ shared_data::SITE_STYLE }</style> }
}

#[function_component(FormStyle)]
pub fn form_style() -> Html {
	html! { <style>{ shared_data::FORM_STYLE }</style> }
}
