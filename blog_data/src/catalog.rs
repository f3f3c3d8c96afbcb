//! The view model behind the article grid: a free-text search over titles combined with a single
//! category facet.

use crate::Article;
use std::{fmt, rc::Rc};

const ALL_TOKEN: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Facet {
	#[default]
	All,
	Category(String)
}

impl Facet {
	/// "all" is reserved for the synthetic facet, anything else is taken as a category name
	#[must_use]
	pub fn parse(token: &str) -> Self {
		if token == ALL_TOKEN {
			Self::All
		} else {
			Self::Category(token.to_string())
		}
	}

	#[must_use]
	pub fn token(&self) -> &str {
		match self {
			Self::All => ALL_TOKEN,
			Self::Category(name) => name
		}
	}

	/// The one place a facet gets turned into display text, so every view capitalizes the same
	/// way while matching still happens on the stored lowercase name.
	#[must_use]
	pub fn label(&self) -> String {
		let mut chars = self.token().chars();
		chars.next()
			.map(|first| first.to_uppercase().chain(chars).collect())
			.unwrap_or_default()
	}

	#[must_use]
	pub fn matches(&self, article: &Article) -> bool {
		match self {
			Self::All => true,
			Self::Category(name) => article.category == *name
		}
	}
}

impl fmt::Display for Facet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.token())
	}
}

/// "all" followed by every distinct category in the order they first show up
#[must_use]
pub fn facet_set(catalog: &[Article]) -> Vec<Facet> {
	let mut facets = vec![Facet::All];

	for article in catalog {
		if !facets.iter().any(|f| matches!(f, Facet::Category(c) if *c == article.category)) {
			facets.push(Facet::Category(article.category.clone()));
		}
	}

	facets
}

/// Every article whose title contains `query` (ignoring case) and which falls under `facet`, in
/// catalog order.
pub fn filter_articles<'a>(
	catalog: &'a [Article],
	query: &str,
	facet: &'a Facet
) -> impl Iterator<Item = &'a Article> + 'a {
	let query = query.to_lowercase();

	catalog.iter()
		.filter(move |article| article.title.to_lowercase().contains(&query))
		.filter(move |article| facet.matches(article))
}

#[derive(Debug)]
pub enum FilterMsg {
	Query(String),
	Select(Facet)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogFilter {
	catalog: Rc<[Article]>,
	facets: Rc<[Facet]>,
	query: String,
	selected: Facet
}

impl CatalogFilter {
	#[must_use]
	pub fn new(catalog: Rc<[Article]>) -> Self {
		let facets = facet_set(&catalog).into();
		Self {
			catalog,
			facets,
			query: String::new(),
			selected: Facet::All
		}
	}

	#[must_use]
	pub fn with_facet(self, selected: Facet) -> Self {
		Self { selected, ..self }
	}

	#[must_use]
	pub fn apply(&self, msg: FilterMsg) -> Self {
		match msg {
			FilterMsg::Query(query) => Self { query, ..self.clone() },
			FilterMsg::Select(selected) => Self { selected, ..self.clone() }
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn selected(&self) -> &Facet {
		&self.selected
	}

	#[must_use]
	pub fn facets(&self) -> &[Facet] {
		&self.facets
	}

	#[must_use]
	pub fn catalog(&self) -> &[Article] {
		&self.catalog
	}

	#[must_use]
	pub fn visible(&self) -> Vec<&Article> {
		filter_articles(&self.catalog, &self.query, &self.selected).collect()
	}

	/// When this is false the grid should say so instead of rendering nothing
	#[must_use]
	pub fn has_results(&self) -> bool {
		filter_articles(&self.catalog, &self.query, &self.selected).next().is_some()
	}
}

#[cfg(feature = "yew")]
impl yew::functional::Reducible for CatalogFilter {
	type Action = FilterMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		self.apply(action).into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::seed;

	fn article(id: &str, title: &str, category: &str) -> Article {
		Article {
			id: id.into(),
			title: title.into(),
			excerpt: String::new(),
			image_url: String::new(),
			category: category.into(),
			date: String::new()
		}
	}

	fn ids(articles: &[&Article]) -> Vec<String> {
		articles.iter().map(|a| a.id.clone()).collect()
	}

	fn small_catalog() -> Rc<[Article]> {
		vec![
			article("a", "Sleep and Stress", "wellness"),
			article("b", "stress at work", "stress"),
			article("c", "Breathing Basics", "wellness"),
			article("d", "STRESS Less", "stress"),
		].into()
	}

	#[test]
	fn seed_query_finds_the_anxiety_article() {
		let filter = CatalogFilter::new(seed::articles())
			.apply(FilterMsg::Query("anxiety".into()));

		let visible = filter.visible();
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0].title, "Understanding Anxiety: Causes, Symptoms, and Coping Strategies");
	}

	#[test]
	fn seed_category_finds_the_depression_article() {
		let filter = CatalogFilter::new(seed::articles())
			.apply(FilterMsg::Select(Facet::parse("depression")));

		let visible = filter.visible();
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0].category, "depression");
	}

	#[test]
	fn unknown_term_has_no_results() {
		let filter = CatalogFilter::new(seed::articles())
			.apply(FilterMsg::Query("nonexistent-term".into()));

		assert!(filter.visible().is_empty());
		assert!(!filter.has_results());
	}

	#[test]
	fn empty_query_and_all_shows_everything_in_order() {
		let catalog = small_catalog();
		let filter = CatalogFilter::new(catalog.clone());

		assert!(filter.has_results());
		assert_eq!(ids(&filter.visible()), ["a", "b", "c", "d"]);
	}

	#[test]
	fn query_ignores_case_and_keeps_catalog_order() {
		let filter = CatalogFilter::new(small_catalog())
			.apply(FilterMsg::Query("StReSs".into()));

		assert_eq!(ids(&filter.visible()), ["a", "b", "d"]);
	}

	#[test]
	fn query_only_looks_at_titles() {
		let mut catalog = small_catalog().to_vec();
		catalog[2].excerpt = "all about stress".into();

		let filter = CatalogFilter::new(catalog.into())
			.apply(FilterMsg::Query("stress".into()));

		// "c" only mentions stress in its excerpt
		assert_eq!(ids(&filter.visible()), ["a", "b", "d"]);
	}

	#[test]
	fn category_match_is_exact() {
		let catalog = small_catalog();

		let exact = CatalogFilter::new(catalog.clone())
			.apply(FilterMsg::Select(Facet::parse("stress")));
		assert_eq!(ids(&exact.visible()), ["b", "d"]);

		let wrong_case = CatalogFilter::new(catalog)
			.apply(FilterMsg::Select(Facet::parse("Stress")));
		assert!(wrong_case.visible().is_empty());
	}

	#[test]
	fn query_and_category_combine() {
		let filter = CatalogFilter::new(small_catalog())
			.apply(FilterMsg::Query("stress".into()))
			.apply(FilterMsg::Select(Facet::parse("wellness")));

		assert_eq!(ids(&filter.visible()), ["a"]);

		let back_to_all = filter.apply(FilterMsg::Select(Facet::All));
		assert_eq!(ids(&back_to_all.visible()), ["a", "b", "d"]);
	}

	#[test]
	fn filtering_is_idempotent() {
		let catalog = small_catalog();
		let facet = Facet::parse("stress");

		let once: Vec<_> = filter_articles(&catalog, "less", &facet).cloned().collect();
		let twice: Vec<_> = filter_articles(&once, "less", &facet).cloned().collect();
		assert_eq!(once, twice);

		let filter = CatalogFilter::new(catalog)
			.apply(FilterMsg::Query("less".into()))
			.apply(FilterMsg::Query("less".into()));
		assert_eq!(ids(&filter.visible()), ["d"]);
	}

	#[test]
	fn facets_are_distinct_in_first_seen_order() {
		let facets = facet_set(&small_catalog());
		assert_eq!(facets, [
			Facet::All,
			Facet::Category("wellness".into()),
			Facet::Category("stress".into()),
		]);

		let seeded = CatalogFilter::new(seed::articles());
		let tokens: Vec<_> = seeded.facets().iter().map(Facet::token).collect();
		assert_eq!(tokens, ["all", "anxiety", "depression", "mindfulness", "resilience", "wellness", "support"]);
	}

	#[test]
	fn empty_catalog_still_has_all() {
		let filter = CatalogFilter::new(Vec::new().into());
		assert_eq!(filter.facets(), [Facet::All]);
		assert!(!filter.has_results());
	}

	#[test]
	fn preselected_facet_is_kept() {
		let filter = CatalogFilter::new(small_catalog())
			.with_facet(Facet::parse("wellness"));

		assert_eq!(filter.selected(), &Facet::Category("wellness".into()));
		assert_eq!(filter.query(), "");
		assert_eq!(ids(&filter.visible()), ["a", "c"]);
	}

	#[test]
	fn labels_capitalize_the_first_letter() {
		assert_eq!(Facet::All.label(), "All");
		assert_eq!(Facet::parse("self-care").label(), "Self-care");
		assert_eq!(Facet::Category(String::new()).label(), "");
		assert_eq!(Facet::parse("all"), Facet::All);
		assert_eq!(Facet::parse("anxiety").to_string(), "anxiety");
	}
}
