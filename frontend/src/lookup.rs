use gloo_net::http::Request;
use shared_data::lookup::{CepResponse, LookupError, ResolvedAddress, lookup_url, normalize_cep};

/// Asks ViaCEP where `raw` points to, handing back the normalized CEP that was actually looked up
/// so the caller can tell if the form has moved on since
pub async fn resolve(raw: &str) -> Result<(String, ResolvedAddress), LookupError> {
	let cep = normalize_cep(raw).ok_or(LookupError::InvalidCep)?;

	let res = Request::get(&lookup_url(&cep))
		.send()
		.await
		.map_err(|e| LookupError::Network(format!("{e:?}")))?;

	if !res.ok() {
		return Err(LookupError::Network(format!("lookup returned {}", res.status())));
	}

	let addr = res.json::<CepResponse>().await
		.map_err(|e| LookupError::Network(format!("couldn't decode lookup response: {e:?}")))?
		.into_address()?;

	Ok((cep, addr))
}
