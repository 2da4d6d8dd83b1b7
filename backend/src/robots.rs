use sitewriter::{ChangeFreq, UrlEntry};

// Every page the frontend routes to, and how much it matters relative to the others
const PAGES: [(&str, f32); 2] = [
	("/", 1.0),
	("/orcamento", 0.8),
];

pub fn robots_txt(site_url: &str) -> String {
	format!("User-agent: *\nAllow: /\n\nSitemap: {site_url}/sitemap.xml\n")
}

pub fn sitemap_xml(site_url: &str) -> Result<String, Box<dyn std::error::Error>> {
	let urls = PAGES.iter()
		.map(|(path, priority)| Ok(UrlEntry {
			loc: format!("{site_url}{path}").parse()?,
			lastmod: None,
			changefreq: Some(ChangeFreq::Monthly),
			priority: Some(*priority),
		}))
		.collect::<Result<Vec<_>, Box<dyn std::error::Error>>>()?;

	Ok(sitewriter::generate_str(&urls))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sitemap_lists_every_page() {
		let xml = sitemap_xml("https://bibbidibrownie.com.br").unwrap();

		assert!(xml.contains("<loc>https://bibbidibrownie.com.br/</loc>"));
		assert!(xml.contains("<loc>https://bibbidibrownie.com.br/orcamento</loc>"));
		assert_eq!(xml.matches("<url>").count(), PAGES.len());
	}

	#[test]
	fn sitemap_needs_a_real_url() {
		assert!(sitemap_xml("not a url").is_err());
	}

	#[test]
	fn robots_points_at_the_sitemap() {
		let robots = robots_txt("https://bibbidibrownie.com.br");
		assert!(robots.starts_with("User-agent: *\n"));
		assert!(robots.contains("Sitemap: https://bibbidibrownie.com.br/sitemap.xml"));
	}
}
