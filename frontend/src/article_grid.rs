use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use blog_data::{Article, CatalogFilter, Facet, FilterMsg, seed};
use std::rc::Rc;
use crate::style::SharedStyle;

#[derive(Properties, PartialEq)]
pub struct ArticleGridProps {
	#[prop_or_else(seed::articles)]
	pub articles: Rc<[Article]>,
	#[prop_or_default]
	pub initial: Facet,
	#[prop_or(AttrValue::Static("Articles"))]
	pub title: AttrValue
}

fn article_card(article: &Article) -> Html {
	html! {
		<div class="card article-card" id={ format!("article-{}", article.id) }>
			<img src={ article.image_url.clone() } alt={ article.title.clone() } loading="lazy" />
			<div class="article-card-body">
				<div class="article-card-meta">
					<span class="badge">{ Facet::parse(&article.category).label() }</span>
					<span class="muted">{ &article.date }</span>
				</div>
				<h3>{ &article.title }</h3>
				<p class="muted">{ &article.excerpt }</p>
			</div>
			<div class="article-card-footer">
				<a class="button" href={ format!("/article/{}", article.id) }>{ "Read More" }</a>
			</div>
		</div>
	}
}

#[function_component(ArticleGrid)]
pub fn article_grid(props: &ArticleGridProps) -> Html {
	let filter = use_reducer_eq(||
		CatalogFilter::new(props.articles.clone()).with_facet(props.initial.clone())
	);

	// Going from one /category/ page to another keeps this component around, so the new facet has
	// to be pushed in by hand
	{
		let filter = filter.clone();
		use_effect_with(props.initial.clone(), move |initial| {
			filter.dispatch(FilterMsg::Select(initial.clone()));
		});
	}

	let filter_clone = filter.clone();
	let search_input = Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				filter_clone.dispatch(FilterMsg::Query(input.value()));
			}
	);

	let facet_buttons = filter.facets().iter().map(|facet| {
		let owned = facet.clone();
		let filter = filter.clone();
		let class = classes!((facet == filter.selected()).then_some("active"));

		html! {
			<button class={ class } onclick={
				move |_| filter.dispatch(FilterMsg::Select(owned.clone()))
			}>{ facet.label() }</button>
		}
	}).collect::<Html>();

	let articles_html = if filter.has_results() {
		html! {
			<div id="articles">
				{ filter.visible().into_iter().map(article_card).collect::<Html>() }
			</div>
		}
	} else {
		html! {
			<div id="no-results">
				<p class="muted">{ "No articles found. Try adjusting your search." }</p>
			</div>
		}
	};

	html! {
		<>
			<SharedStyle />
			<style>{ blog_data::GRID_STYLE }</style>
			<h2>{ &props.title }</h2>
			<div id="grid-controls">
				<input
					id="article-search"
					placeholder="Search articles..."
					value={ filter.query().to_string() }
					oninput={ search_input }
				/>
				<div id="facets">{ facet_buttons }</div>
			</div>
			{ articles_html }
		</>
	}
}
