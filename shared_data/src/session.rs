use crate::{
	config::FormPolicy,
	dispatch::{DispatchError, Dispatched},
	fields::QuoteFields,
	selection::Selection,
	validate::{validate, ValidationError},
};

/// Everything a customer asked for, as handed to a dispatcher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
	pub fields: QuoteFields,
	pub selection: Selection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Idle,
	Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Info,
	Error,
}

/// A short-lived message for the customer about how their submission went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub message: &'static str,
}

impl Notice {
	pub const SENT: Self = Self {
		kind: NoticeKind::Success,
		message: "Orçamento enviado com sucesso! Entraremos em contato em breve.",
	};
	pub const REDIRECTED: Self = Self {
		kind: NoticeKind::Info,
		message: "Orçamento enviado! Você será redirecionado para o WhatsApp.",
	};
	pub const FAILED: Self = Self {
		kind: NoticeKind::Error,
		message: "Erro ao enviar orçamento. Por favor, tente novamente ou entre em contato pelo WhatsApp.",
	};
}

impl From<ValidationError> for Notice {
	fn from(err: ValidationError) -> Self {
		Self { kind: NoticeKind::Error, message: err.user_message() }
	}
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
	#[error("a submission is already in flight")]
	AlreadySubmitting,
	#[error(transparent)]
	Invalid(#[from] ValidationError),
}

impl SubmitError {
	/// Double submissions are just ignored, but the customer needs to know what's wrong with
	/// their form
	#[must_use]
	pub fn notice(self) -> Option<Notice> {
		match self {
			Self::AlreadySubmitting => None,
			Self::Invalid(err) => Some(err.into()),
		}
	}
}

/// The whole state of one quote form, from the first keystroke until it's been sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
	policy: FormPolicy,
	pub fields: QuoteFields,
	pub selection: Selection,
	phase: Phase,
}

impl FormSession {
	#[must_use]
	pub fn new(policy: FormPolicy) -> Self {
		Self {
			policy,
			fields: QuoteFields::default(),
			selection: Selection::new(policy.item_limit),
			phase: Phase::Idle,
		}
	}

	#[must_use]
	pub fn policy(&self) -> FormPolicy {
		self.policy
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		self.phase
	}

	#[must_use]
	pub fn is_submitting(&self) -> bool {
		self.phase == Phase::Submitting
	}

	/// Checks whether the form could be submitted right now, and if so, what would be sent
	pub fn prepare(&self) -> Result<Quote, SubmitError> {
		if self.is_submitting() {
			return Err(SubmitError::AlreadySubmitting);
		}

		validate(&self.fields, &self.selection, &self.policy)?;

		Ok(Quote {
			fields: self.fields.clone(),
			selection: self.selection.clone(),
		})
	}

	/// Like [`Self::prepare`], but also marks the form as submitting so that it can't be sent
	/// again until [`Self::finish_submit`] is called. Nothing entered is touched if this fails.
	pub fn begin_submit(&mut self) -> Result<Quote, SubmitError> {
		let quote = self.prepare()?;
		self.phase = Phase::Submitting;
		Ok(quote)
	}

	/// Records how dispatching went. Anything that reached its destination clears the form; a
	/// failure keeps everything so they can just hit submit again.
	pub fn finish_submit(&mut self, result: Result<Dispatched, DispatchError>) -> Notice {
		self.phase = Phase::Idle;

		match result {
			Ok(dispatched) => {
				self.reset();
				match dispatched {
					Dispatched::Sent => Notice::SENT,
					Dispatched::Redirected => Notice::REDIRECTED,
				}
			}
			Err(_) => Notice::FAILED,
		}
	}

	pub fn reset(&mut self) {
		*self = Self::new(self.policy);
	}
}

impl Default for FormSession {
	fn default() -> Self {
		Self::new(FormPolicy::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		dispatch::Dispatcher,
		fields::{ReferralSource, TextField},
		selection::ItemField,
	};
	use futures::executor::block_on;
	use std::cell::RefCell;

	/// Pretends to be the relay, handing back a canned response and remembering what it got
	struct FakeRelay {
		response: Result<Dispatched, DispatchError>,
		received: RefCell<Vec<Quote>>,
	}

	impl FakeRelay {
		fn answering(response: Result<Dispatched, DispatchError>) -> Self {
			Self { response, received: RefCell::default() }
		}
	}

	impl Dispatcher for FakeRelay {
		async fn deliver(&self, quote: &Quote) -> Result<Dispatched, DispatchError> {
			self.received.borrow_mut().push(quote.clone());
			self.response.clone()
		}
	}

	fn filled_in() -> FormSession {
		let mut session = FormSession::new(FormPolicy::relay());
		session.fields.set_text(TextField::FullName, "Maria".into());
		session.fields.set_text(TextField::Email, "maria@example.com".into());
		session.fields.set_text(TextField::Phone, "21999999999".into());
		session.fields.set_referral(Some(ReferralSource::Instagram));
		session.selection.toggle("Cookie Grande").unwrap();
		session.selection.update_line_item("Cookie Grande", 0, ItemField::Quantity, "20".into()).unwrap();
		session
	}

	fn submit(session: &mut FormSession, relay: &FakeRelay) -> Result<Notice, SubmitError> {
		let quote = session.begin_submit()?;
		let result = block_on(relay.deliver(&quote));
		Ok(session.finish_submit(result))
	}

	#[test]
	fn failed_validation_changes_nothing() {
		let mut session = filled_in();
		session.fields.set_text(TextField::Email, String::new());
		let before = session.clone();

		assert_eq!(
			session.begin_submit(),
			Err(SubmitError::Invalid(ValidationError::MissingContactInfo))
		);
		assert_eq!(session, before);
		assert_eq!(session.phase(), Phase::Idle);
	}

	#[test]
	fn successful_relay_resets_everything() {
		let mut session = filled_in();
		let relay = FakeRelay::answering(Ok(Dispatched::Sent));

		let notices: Vec<_> = submit(&mut session, &relay).into_iter().collect();

		assert_eq!(notices, [Notice::SENT]);
		assert_eq!(session, FormSession::new(FormPolicy::relay()));
		assert_eq!(relay.received.borrow().len(), 1);
		assert_eq!(relay.received.borrow()[0].fields.full_name, "Maria");
	}

	#[test]
	fn failed_relay_keeps_everything_for_a_retry() {
		let mut session = filled_in();
		let before = session.clone();

		for err in [DispatchError::NonSuccessStatus(500), DispatchError::NetworkFailure("offline".into())] {
			let relay = FakeRelay::answering(Err(err));
			assert_eq!(submit(&mut session, &relay), Ok(Notice::FAILED));
			assert_eq!(session, before);
		}

		// and the retry goes through with what they'd already typed
		let relay = FakeRelay::answering(Ok(Dispatched::Sent));
		assert_eq!(submit(&mut session, &relay), Ok(Notice::SENT));
		assert_eq!(relay.received.borrow()[0], before.prepare().unwrap());
	}

	#[test]
	fn deep_links_reset_without_confirmation() {
		let mut session = FormSession::new(FormPolicy::deep_link());
		session.fields = filled_in().fields;
		session.fields.set_text(TextField::EventDate, "2025-12-20".into());
		session.selection.toggle("Snack (latinhas)").unwrap();

		let relay = FakeRelay::answering(Ok(Dispatched::Redirected));
		assert_eq!(submit(&mut session, &relay), Ok(Notice::REDIRECTED));
		assert_eq!(session, FormSession::new(FormPolicy::deep_link()));
	}

	#[test]
	fn only_one_submission_at_a_time() {
		let mut session = filled_in();
		session.begin_submit().unwrap();
		assert!(session.is_submitting());
		assert_eq!(session.begin_submit(), Err(SubmitError::AlreadySubmitting));
		assert_eq!(SubmitError::AlreadySubmitting.notice(), None);

		session.finish_submit(Err(DispatchError::NonSuccessStatus(422)));
		assert!(!session.is_submitting());
		assert!(session.begin_submit().is_ok());
	}

	#[test]
	fn validation_notices_are_errors() {
		let notice = SubmitError::Invalid(ValidationError::NoProductSelected).notice().unwrap();
		assert_eq!(notice.kind, NoticeKind::Error);
		assert_eq!(notice.message, "Por favor, selecione pelo menos um produto!");
	}

	#[test]
	fn sessions_keep_their_item_limit_across_resets() {
		let mut session = FormSession::new(FormPolicy::deep_link());
		session.reset();
		assert_eq!(session.selection.limit(), crate::selection::ItemLimit::Single);
	}
}
