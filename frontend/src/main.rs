use yew_router::prelude::*;
use yew::prelude::*;
use home::{Home, QuotePage};
use toast::ToastProvider;

mod about;
mod analytics;
mod contact;
mod dispatch;
mod home;
mod lookup;
mod products;
mod quote_form;
mod style;
mod toast;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/orcamento")]
	Quote,
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Quote => html! { <QuotePage /> },
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<ToastProvider>
			<BrowserRouter>
				<Switch<Route> render={switch} />
			</BrowserRouter>
		</ToastProvider>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
