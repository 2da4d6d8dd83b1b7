use std::rc::Rc;
use yew::prelude::*;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use shared_data::{Notice, NoticeKind};

// Toasts dismiss themselves after this long, or earlier if they're clicked
const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
	id: u32,
	notice: Notice,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Toasts {
	next_id: u32,
	shown: Vec<Toast>,
}

pub enum ToastMsg {
	Push(Notice),
	Dismiss(u32),
}

impl Reducible for Toasts {
	type Action = ToastMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		match action {
			ToastMsg::Push(notice) => {
				let mut shown = self.shown.clone();
				shown.push(Toast { id: self.next_id, notice });

				Self { next_id: self.next_id.wrapping_add(1), shown }.into()
			},
			ToastMsg::Dismiss(id) => if self.shown.iter().any(|t| t.id == id) {
				Self {
					next_id: self.next_id,
					shown: self.shown.iter().filter(|t| t.id != id).cloned().collect()
				}.into()
			} else {
				// it was already clicked away before its timer ran out
				self
			}
		}
	}
}

pub type Toaster = UseReducerHandle<Toasts>;

/// Shows `notice` if there's a [`ToastProvider`] to show it in
pub fn notify(toaster: Option<&Toaster>, notice: Notice) {
	match toaster {
		Some(toaster) => toaster.dispatch(ToastMsg::Push(notice)),
		None => log!("No ToastProvider to show notice in: ", notice.message),
	}
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
	#[prop_or_default]
	pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
	let toasts = use_reducer_eq(Toasts::default);

	let dismiss = {
		let toasts = toasts.clone();
		Callback::from(move |id: u32| toasts.dispatch(ToastMsg::Dismiss(id)))
	};

	html! {
		<ContextProvider<Toaster> context={ toasts.clone() }>
			{ props.children.clone() }
			<div id="toasts">
			{
				toasts.shown.iter().map(|toast| html! {
					<ToastView key={ toast.id } toast={ toast.clone() } dismiss={ dismiss.clone() } />
				}).collect::<Html>()
			}
			</div>
		</ContextProvider<Toaster>>
	}
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
	toast: Toast,
	dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
	{
		let dismiss = props.dismiss.clone();
		use_effect_with(props.toast.id, move |&id| {
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(DISMISS_AFTER_MS).await;
				dismiss.emit(id);
			});

			|| ()
		});
	}

	let kind = match props.toast.notice.kind {
		NoticeKind::Success => "success",
		NoticeKind::Info => "info",
		NoticeKind::Error => "error",
	};

	let id = props.toast.id;
	let dismiss = props.dismiss.clone();

	html! {
		<div class={ classes!("toast", kind) } role="status" onclick={ move |_| dismiss.emit(id) }>
			{ props.toast.notice.message }
		</div>
	}
}
