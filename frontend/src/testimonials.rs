use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_console::log;
use gloo_timers::callback::Timeout;
use chrono::DateTime;
use blog_data::{LedgerMsg, Submission, SubmissionLedger, Testimonial, seed};
use std::rc::Rc;
use crate::style::SharedStyle;

// How long the 'thank you' banner stays up after a submission
pub const ACK_DISMISS_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
	#[prop_or_else(seed::testimonials)]
	pub seed: Rc<[Testimonial]>
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
	html! {
		<div class="card testimonial" id={ format!("testimonial-{}", testimonial.id) }>
			<div class="testimonial-header">
				<span class="avatar">{ testimonial.initials() }</span>
				<h3>{ &testimonial.title }</h3>
			</div>
			<span class="muted">{ testimonial.display_date() }</span>
			<p class="muted">{ &testimonial.content }</p>
			<div>
				{
					testimonial.tags.iter().map(|tag|
						html! { <span class="badge outline">{ tag }</span> }
					).collect::<Html>()
				}
			</div>
		</div>
	}
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
	let ledger = use_reducer_eq(|| SubmissionLedger::new(&props.seed));

	// Every acknowledgment gets its own timer. Dropping the Timeout cancels it, so when a newer
	// submission comes in or the page goes away, the old one never fires.
	{
		let handle = ledger.clone();
		let deps = (ledger.is_acknowledged(), ledger.ack_generation());
		use_effect_with(deps, move |&(acknowledged, generation)| {
			let timeout = acknowledged.then(|| Timeout::new(ACK_DISMISS_MS, move || {
				log!("Dismissing submission banner");
				handle.dispatch(LedgerMsg::Dismiss(generation));
			}));

			move || drop(timeout)
		});
	}

	macro_rules! input_callback{
		($type:ident, $elem:ty) => {{
			let ledger_clone = ledger.clone();
			Callback::from(move |e: InputEvent| if let Some(msg) = e.target()
				.and_then(|t| t.dyn_into::<$elem>().ok())
				.map(|input| LedgerMsg::$type(input.value())) {
					ledger_clone.dispatch(msg);
				}
			)
		}}
	}

	let title_callback = input_callback!(Title, HtmlInputElement);
	let content_callback = input_callback!(Content, HtmlTextAreaElement);
	let tags_callback = input_callback!(Tags, HtmlInputElement);

	let submit_ledger = ledger.clone();
	let on_submit = Callback::from(move |e: SubmitEvent| {
		e.prevent_default();

		// The inputs are `required`, so the browser should have stopped an empty form before
		// we ever get here
		let submission = match Submission::from_draft(submit_ledger.draft()) {
			Ok(s) => s,
			Err(err) => {
				log!(format!("Not submitting story: {err}"));
				return;
			}
		};

		let Some(now) = DateTime::from_timestamp_millis(js_sys::Date::now() as i64) else {
			log!("Couldn't read the current time, not submitting story");
			return;
		};

		log!(format!("Adding story with {} tags", submission.tags().len()));
		submit_ledger.dispatch(LedgerMsg::Submit(submission, now));
	});

	let draft = ledger.draft();

	let form_html = if ledger.is_acknowledged() {
		html! {
			<div id="submitted">
				<p>{ "Thank you for sharing your story! It has been added anonymously." }</p>
			</div>
		}
	} else {
		html! {
			<form onsubmit={ on_submit }>
				<label for="title">{ "Title" }</label>
				<input
					id="title"
					name="title"
					placeholder="Give your story a title"
					value={ draft.title.clone() }
					oninput={ title_callback }
					required=true
				/>
				<label for="content">{ "Your Story" }</label>
				<textarea
					id="content"
					name="content"
					placeholder="Share your experience..."
					rows="6"
					value={ draft.content.clone() }
					oninput={ content_callback }
					required=true
				/>
				<label for="tags">{ "Tags (optional)" }</label>
				<input
					id="tags"
					name="tags"
					placeholder="Anxiety, Depression, Recovery (separate with commas)"
					value={ draft.tags.clone() }
					oninput={ tags_callback }
				/>
				<button type="submit" class="primary">{ "Submit Your Story" }</button>
				<p class="muted disclaimer">
					{ "By submitting, you agree that your story may be shared on this blog. No \
					personally identifiable information will be stored or displayed." }
				</p>
			</form>
		}
	};

	html! {
		<>
			<SharedStyle />
			<style>
			{
				"
				#testimonials-title, #testimonials-subtitle {
					text-align: center;
				}
				#testimonial-grid {
					display: grid;
					grid-template-columns: repeat(auto-fill, minmax(400px, 1fr));
					gap: 24px;
				}
				.testimonial {
					padding: 16px 20px;
				}
				.testimonial-header {
					display: flex;
					align-items: center;
					gap: 12px;
				}
				.testimonial-header h3 {
					margin: 8px 0;
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
				#share {
					padding: 20px 24px;
					margin-top: 48px;
				}
				form label {
					display: block;
					margin: 16px 0 6px 0;
					font-weight: bold;
				}
				form button {
					margin-top: 20px;
				}
				.disclaimer {
					font-size: 0.8em;
				}
				#submitted {
					background-color: var(--success-background);
					border-radius: 6px;
					padding: 4px 16px;
				}
				#submitted p {
					color: var(--success-text);
				}
				"
			}
			</style>
			<h1 id="testimonials-title">{ "Testimonials" }</h1>
			<p id="testimonials-subtitle" class="muted">
				{ "Read stories from our community and share your own experience anonymously" }
			</p>
			<section>
				<h2>{ "Community Stories" }</h2>
				<div id="testimonial-grid">
					{ ledger.entries().iter().map(testimonial_card).collect::<Html>() }
				</div>
			</section>
			<section id="share" class="card">
				<h2>{ "Share Your Story" }</h2>
				<h3>{ "Submit Anonymously" }</h3>
				<p class="muted">
					{ "Your story can help others feel less alone. No personal information will be collected." }
				</p>
				{ form_html }
			</section>
		</>
	}
}
