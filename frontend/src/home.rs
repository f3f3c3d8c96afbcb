use yew::prelude::*;
use crate::{
	article_grid::ArticleGrid,
	layout::{Nav, Footer},
	style::SharedStyle,
};

#[function_component(Home)]
pub fn home() -> Html {
	html!{
		<>
			<SharedStyle />
			<style>
			{
				"
				.home-section {
					padding: 48px 24px;
				}
				.home-section > div {
					max-width: 900px;
					margin: 0 auto;
				}
				.centered {
					text-align: center;
				}
				#hero {
					background: linear-gradient(to bottom, var(--body-background), var(--secondary-background));
				}
				#hero h1 {
					font-size: 2.6em;
					color: var(--title-text);
				}
				#hero-buttons a {
					margin: 0 8px;
				}
				#mission {
					background-color: var(--secondary-background);
				}
				#mission .card {
					padding: 24px 32px;
					line-height: 1.6;
				}
				#featured > div {
					max-width: 1100px;
				}
				#featured-header {
					display: flex;
					justify-content: space-between;
					align-items: baseline;
				}
				#join {
					background-color: var(--secondary-background);
				}
				"
			}
			</style>
			<Nav />
			<section id="hero" class="home-section centered">
				<div>
					<h1>{ "Welcome to Our Mental Health Community" }</h1>
					<p class="muted">
						{ "A safe space to learn, share, and grow together on the journey to better mental \
						wellbeing. Explore our resources, read personal stories, and join our supportive \
						community." }
					</p>
					<div id="hero-buttons">
						<a href="/testimonials" class="button primary">{ "Share Your Story" }</a>
						<a href="/articles" class="button">{ "Explore Articles" }</a>
					</div>
				</div>
			</section>
			<section id="mission" class="home-section">
				<div>
					<h2 class="centered">{ "Our Mission" }</h2>
					<div class="card">
						<p>
							{ "We believe that mental health is just as important as physical health. Our \
							mission is to break the stigma surrounding mental health issues by providing \
							reliable information, sharing personal experiences, and fostering a supportive \
							community where everyone feels heard and understood. Through education and \
							compassion, we aim to empower individuals to take control of their mental \
							wellbeing and seek help when needed." }
						</p>
					</div>
				</div>
			</section>
			<section id="featured" class="home-section">
				<div>
					<div id="featured-header">
						<h2>{ "Featured Articles" }</h2>
						<a href="/articles">{ "View All" }</a>
					</div>
					<ArticleGrid />
				</div>
			</section>
			<section id="join" class="home-section centered">
				<div>
					<h2>{ "Join Our Community" }</h2>
					<p>
						{ "Share your experiences, read others' stories, and become part of our supportive \
						community." }
					</p>
					<a href="/testimonials" class="button primary">{ "Share Your Story" }</a>
				</div>
			</section>
			<Footer />
		</>
	}
}
