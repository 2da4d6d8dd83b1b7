use axum::{extract::State, routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
	services::{ServeDir, ServeFile},
	trace::TraceLayer,
};

mod config;
mod robots;

// These never change while we're running, so they're just rendered once at startup
struct SiteFiles {
	robots: String,
	sitemap: String,
}

async fn robots_txt(State(files): State<Arc<SiteFiles>>) -> String {
	files.robots.clone()
}

async fn sitemap_xml(State(files): State<Arc<SiteFiles>>) -> ([(&'static str, &'static str); 1], String) {
	([("content-type", "application/xml")], files.sitemap.clone())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "backend=info,tower_http=info".into())
		)
		.init();

	let config = config::Config::from_env();

	if !config.dist_dir.is_dir() {
		tracing::warn!(
			"DIST_DIR ({}) isn't a directory; build the frontend with trunk first or every page will 404",
			config.dist_dir.display()
		);
	}

	let files = Arc::new(SiteFiles {
		robots: robots::robots_txt(&config.site_url),
		sitemap: robots::sitemap_xml(&config.site_url)?,
	});

	// Anything that isn't a file in the bundle is a frontend route, so it gets index.html and the
	// router sorts it out from there
	let spa = ServeDir::new(&config.dist_dir)
		.fallback(ServeFile::new(config.dist_dir.join("index.html")));

	let app = Router::new()
		.route("/robots.txt", get(robots_txt))
		.route("/sitemap.xml", get(sitemap_xml))
		.fallback_service(spa)
		.layer(TraceLayer::new_for_http())
		.with_state(files);

	let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Serving {} for {} on {addr}", config.dist_dir.display(), config.site_url);

	axum::serve(listener, app).await?;

	Ok(())
}
