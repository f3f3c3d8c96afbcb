use yew::prelude::*;
use blog_data::SITE_NAME;
use crate::style::SharedStyle;

const HEART_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/></svg>"#;

#[function_component(Nav)]
pub fn nav() -> Html {
	html! {
		<>
			<SharedStyle />
			<nav id="nav">
				<a href="/" id="site-name">
					{ Html::from_html_unchecked(HEART_ICON.into()) }
					{ " " }{ SITE_NAME }
				</a>
				<span>
					<a href="/">{ "Home" }</a>
					<a href="/articles">{ "Articles" }</a>
					<a href="/testimonials">{ "Testimonials" }</a>
					<a href="/articles" class="button">{ "Search" }</a>
				</span>
			</nav>
		</>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	let year = js_sys::Date::new_0().get_full_year();

	html! {
		<footer id="footer">
			<span id="site-name">
				{ Html::from_html_unchecked(HEART_ICON.into()) }
				{ " " }{ SITE_NAME }
			</span>
			<span>
				<a href="/">{ "Home" }</a>
				<a href="/articles">{ "Articles" }</a>
				<a href="/testimonials">{ "Testimonials" }</a>
				<a href="/about">{ "About" }</a>
			</span>
			<span class="muted">{ format!("© {year} {SITE_NAME}. All rights reserved.") }</span>
		</footer>
	}
}
