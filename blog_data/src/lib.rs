use chrono::NaiveDate;

mod md_to_html;
pub use md_to_html::md_to_html;

pub mod catalog;
pub mod ledger;
pub mod seed;
mod style;

pub use catalog::{CatalogFilter, Facet, FilterMsg, facet_set, filter_articles};
pub use ledger::{Draft, LedgerMsg, Submission, SubmissionErr, SubmissionLedger, parse_tags};
pub use style::{BASE_STYLE, GRID_STYLE};

pub const SITE_NAME: &str = "Mental Health Blog";

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Article {
	pub id: String,
	pub title: String,
	pub excerpt: String,
	pub image_url: String,
	// always stored lowercase, see `Facet::label` for how it's shown
	pub category: String,
	pub date: String
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Author {
	pub name: String,
	pub avatar: Option<String>
}

impl Author {
	/// What to show in the avatar bubble when there's no avatar image
	#[must_use]
	pub fn initial(&self) -> String {
		self.name.chars().next().map(String::from).unwrap_or_default()
	}
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ArticleDetail {
	pub article: Article,
	pub author: Author,
	pub tags: Vec<String>,
	pub body: String,
	pub video_url: Option<String>
}

impl ArticleDetail {
	#[must_use]
	pub fn body_html(&self) -> String {
		md_to_html(&self.body)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RelatedArticle {
	pub id: String,
	pub title: String,
	pub image_url: String,
	pub category: String,
	pub views: String,
	pub published: String
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Testimonial {
	pub id: u64,
	pub title: String,
	pub content: String,
	pub date: NaiveDate,
	pub tags: Vec<String>
}

impl Testimonial {
	/// The two characters shown in the card's avatar
	#[must_use]
	pub fn initials(&self) -> String {
		self.title.chars().take(2).collect()
	}

	#[must_use]
	pub fn display_date(&self) -> String {
		self.date.format("%b %-d, %Y").to_string()
	}
}

/// Turns a sidebar label like "Stress Management" into the path segment used by
/// `/category/:name`, which lines up with how catalog categories are stored.
#[must_use]
pub fn category_slug(label: &str) -> String {
	label.split_whitespace()
		.map(str::to_lowercase)
		.collect::<Vec<_>>()
		.join("-")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugs_match_stored_categories() {
		assert_eq!(category_slug("Anxiety"), "anxiety");
		assert_eq!(category_slug("Stress Management"), "stress-management");
		assert_eq!(category_slug("Self-Care"), "self-care");
	}

	#[test]
	fn testimonial_initials_and_date() {
		let testimonial = Testimonial {
			id: 1,
			title: "Finding Hope".into(),
			content: "...".into(),
			date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
			tags: vec![]
		};

		assert_eq!(testimonial.initials(), "Fi");
		assert_eq!(testimonial.display_date(), "May 15, 2023");
	}

	#[test]
	fn testimonial_date_serializes_as_iso() {
		let testimonial = Testimonial {
			id: 7,
			title: "T".into(),
			content: "Body".into(),
			date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
			tags: vec!["A".into()]
		};

		let json = serde_json::to_value(&testimonial).unwrap();
		assert_eq!(json["date"], "2024-02-09");
		assert_eq!(json["tags"], serde_json::json!(["A"]));
	}

	#[test]
	fn author_initial_falls_back_to_empty() {
		let named = Author { name: "Dr. Sarah Johnson".into(), avatar: None };
		let unnamed = Author { name: String::new(), avatar: None };
		assert_eq!(named.initial(), "D");
		assert_eq!(unnamed.initial(), "");
	}
}
