use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
pub const DEFAULT_SITE_URL: &str = "https://bibbidibrownie.com.br";

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
	pub port: u16,
	// where trunk put the built frontend
	pub dist_dir: PathBuf,
	// with no trailing slash
	pub site_url: String,
}

impl Config {
	/// Reads everything from the environment (and `.env`, if there is one)
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let var = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

		let port = var("BACKEND_PORT")
			.and_then(|p| p.parse::<u16>().ok())
			.unwrap_or(DEFAULT_PORT);

		let dist_dir = var("DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.into()).into();

		let site_url = var("SITE_URL")
			.unwrap_or_else(|| DEFAULT_SITE_URL.into())
			.trim_end_matches('/')
			.to_string();

		Self { port, dist_dir, site_url }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_or_bad_vars_fall_back_to_defaults() {
		let config = Config::from_lookup(|key| match key {
			"BACKEND_PORT" => Some("not a port".into()),
			"DIST_DIR" => Some("  ".into()),
			_ => None,
		});

		assert_eq!(config, Config {
			port: DEFAULT_PORT,
			dist_dir: DEFAULT_DIST_DIR.into(),
			site_url: DEFAULT_SITE_URL.into(),
		});
	}

	#[test]
	fn vars_override_defaults() {
		let config = Config::from_lookup(|key| Some(match key {
			"BACKEND_PORT" => "3000".into(),
			"DIST_DIR" => "/srv/site".into(),
			"SITE_URL" => "https://example.com/".into(),
			_ => return None,
		}));

		assert_eq!(config.port, 3000);
		assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
		assert_eq!(config.site_url, "https://example.com");
	}
}
