use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;
use article::ViewArticle;
use article_grid::ArticleGrid;
use testimonials::Testimonials;
use layout::{Nav, Footer};
use blog_data::Facet;

mod article;
mod article_grid;
mod home;
mod layout;
mod style;
mod testimonials;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/articles")]
	Articles,
	#[at("/category/:name")]
	Category { name: String },
	#[at("/article/:id")]
	Article { id: String },
	#[at("/testimonials")]
	Testimonials
}

fn switch(route: Route) -> Html {
	let page = match route {
		Route::Home => return html! { <Home /> },
		Route::Articles => html! { <ArticleGrid /> },
		Route::Category { name } => html! {
			<ArticleGrid initial={ Facet::parse(&name) } />
		},
		Route::Article { id } => html! { <ViewArticle id={ id } /> },
		Route::Testimonials => html! { <Testimonials /> }
	};

	// Home brings its own nav and footer since it lays them out around full-width sections
	html! {
		<>
			<Nav />
			<div class="page">{ page }</div>
			<Footer />
		</>
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
