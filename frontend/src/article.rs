use yew::prelude::*;
use gloo_console::log;
use blog_data::{Article, ArticleDetail, Facet, RelatedArticle, category_slug, seed};
use std::rc::Rc;
use crate::style::SharedStyle;

#[derive(Properties, PartialEq)]
pub struct ArticleProps {
	pub id: String,
	#[prop_or_else(seed::articles)]
	pub catalog: Rc<[Article]>
}

fn related_card(related: &RelatedArticle) -> Html {
	html! {
		<a href={ format!("/article/{}", related.id) } class="related">
			<div class="card">
				<img src={ related.image_url.clone() } alt={ related.title.clone() } />
				<div class="related-body">
					<h4>{ &related.title }</h4>
					<div class="related-meta muted">
						<span class="badge outline">{ Facet::parse(&related.category).label() }</span>
						<span>{ format!("{} views", related.views) }</span>
					</div>
					<small class="muted">{ &related.published }</small>
				</div>
			</div>
		</a>
	}
}

fn author_view(detail: &ArticleDetail) -> Html {
	let author = &detail.author;
	let avatar = match &author.avatar {
		Some(url) => html! { <img class="avatar" src={ url.clone() } alt={ author.name.clone() } /> },
		None => html! { <span class="avatar">{ author.initial() }</span> }
	};

	html! {
		<div id="author">
			{ avatar }
			<div>
				<strong>{ &author.name }</strong>
				<br />
				<span class="muted">{ &detail.article.date }</span>
			</div>
		</div>
	}
}

#[function_component(ViewArticle)]
pub fn view_article(props: &ArticleProps) -> Html {
	let Some(detail) = seed::article_detail(&props.catalog, &props.id) else {
		log!(format!("No article with id {:?}", props.id));
		return html! {
			<>
				<SharedStyle />
				<h1>{ "Not Found" }</h1>
				<a href="/articles">{ "Back to Articles" }</a>
			</>
		};
	};

	let related = seed::related_to(&props.catalog, &props.id);

	html! {
		<>
			<SharedStyle />
			<style>
			{
				"
				#article-layout {
					display: flex;
					flex-wrap: wrap;
					gap: 32px;
				}
				#article-main {
					flex: 7 1 500px;
				}
				#article-sidebar {
					flex: 3 1 260px;
				}
				#author {
					display: flex;
					align-items: center;
					gap: 12px;
					margin-bottom: 16px;
				}
				.avatar {
					width: 40px;
					height: 40px;
					border-radius: 50%;
					display: inline-flex;
					align-items: center;
					justify-content: center;
					background-color: var(--secondary-background);
				}
				#hero-image, #article-main iframe {
					width: 100%;
					border-radius: 8px;
					margin-bottom: 24px;
				}
				#article-main iframe {
					aspect-ratio: 16 / 9;
					border: none;
				}
				#engagement button {
					margin-right: 12px;
				}
				.related .card {
					margin-bottom: 16px;
				}
				.related img {
					width: 100%;
					aspect-ratio: 16 / 9;
					object-fit: cover;
				}
				.related-body {
					padding: 8px 12px;
				}
				.related-meta {
					display: flex;
					justify-content: space-between;
					font-size: 0.85em;
				}
				#sidebar-categories a {
					display: flex;
					justify-content: space-between;
					padding: 8px;
					border-radius: 4px;
				}
				#sidebar-categories a:hover {
					background-color: var(--secondary-background);
				}
				"
			}
			</style>
			<a href="/articles" class="button">{ "← Back to Articles" }</a>
			<div id="article-layout">
				<div id="article-main">
					<h1>{ &detail.article.title }</h1>
					{ author_view(&detail) }
					<div id="article-tags">
						{
							detail.tags.iter().map(|tag|
								html! { <span class="badge">{ tag }</span> }
							).collect::<Html>()
						}
					</div>
					<img id="hero-image" src={ detail.article.image_url.clone() } alt={ detail.article.title.clone() } />
					{
						match &detail.video_url {
							Some(url) => html! {
								<iframe
									src={ url.clone() }
									title={ detail.article.title.clone() }
									allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
									allowfullscreen=true
								/>
							},
							None => html! {}
						}
					}
					<div id="article-text">
						{ Html::from_html_unchecked(detail.body_html().into()) }
					</div>
					<div id="engagement">
						<button>{ "Like" }</button>
						<button>{ "Comment" }</button>
						<button>{ "Share" }</button>
						<button>{ "Save" }</button>
					</div>
				</div>
				<div id="article-sidebar">
					<h2>{ "Related Articles" }</h2>
					{ related.iter().map(related_card).collect::<Html>() }
					<h3>{ "Categories" }</h3>
					<hr />
					<div id="sidebar-categories">
						{
							seed::SIDEBAR_CATEGORIES.iter().map(|label| html! {
								<a href={ format!("/category/{}", category_slug(label)) }>
									<span>{ *label }</span>
									<span>{ "›" }</span>
								</a>
							}).collect::<Html>()
						}
					</div>
				</div>
			</div>
		</>
	}
}
