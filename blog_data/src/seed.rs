//! The fixed dataset the site ships with. Everything here is handed to the view models at
//! construction, so tests can just as well hand them something else.

use crate::{Article, ArticleDetail, Author, RelatedArticle, Testimonial};
use chrono::NaiveDate;
use std::rc::Rc;

pub const SIDEBAR_CATEGORIES: [&str; 6] = [
	"Anxiety",
	"Depression",
	"Mindfulness",
	"Self-Care",
	"Therapy",
	"Stress Management",
];

// How many related articles to show next to an article
pub const RELATED_COUNT: usize = 4;

// (id, title, excerpt, image, category, date)
const ARTICLES: [(&str, &str, &str, &str, &str, &str); 6] = [
	(
		"1",
		"Understanding Anxiety: Causes, Symptoms, and Coping Strategies",
		"Anxiety disorders are the most common mental health concern in the United States. Learn about the different types of anxiety and effective ways to manage symptoms.",
		"https://images.unsplash.com/photo-1490645935967-10de6ba17061?w=800&q=80",
		"anxiety",
		"May 15, 2023"
	),
	(
		"2",
		"The Science of Depression: What We Know and What Helps",
		"Depression affects millions worldwide. This article explores the latest research on depression and evidence-based treatments that can help.",
		"https://images.unsplash.com/photo-1518199266791-5375a83190b7?w=800&q=80",
		"depression",
		"June 3, 2023"
	),
	(
		"3",
		"Mindfulness Meditation: A Practical Guide for Beginners",
		"Mindfulness meditation has been shown to reduce stress and improve mental well-being. Learn how to start a simple practice that can transform your relationship with difficult emotions.",
		"https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&q=80",
		"mindfulness",
		"April 22, 2023"
	),
	(
		"4",
		"Building Resilience: How to Bounce Back from Life's Challenges",
		"Resilience isn't something you're born with, it's a skill that can be developed. Discover practical strategies to build your mental strength and adaptability.",
		"https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=800&q=80",
		"resilience",
		"July 8, 2023"
	),
	(
		"5",
		"The Connection Between Physical Exercise and Mental Health",
		"Regular physical activity can significantly improve mood and reduce symptoms of anxiety and depression. Learn about the mind-body connection and how to create an exercise routine that benefits your mental health.",
		"https://images.unsplash.com/photo-1538805060514-97d9cc17730c?w=800&q=80",
		"wellness",
		"March 17, 2023"
	),
	(
		"6",
		"Supporting a Loved One with Mental Health Challenges",
		"When someone you care about is struggling with their mental health, knowing how to help can be difficult. This guide provides practical advice for offering support while taking care of your own well-being.",
		"https://images.unsplash.com/photo-1516585427167-9f4af9627e6c?w=800&q=80",
		"support",
		"August 2, 2023"
	),
];

struct DetailSeed {
	id: &'static str,
	author: &'static str,
	avatar: Option<&'static str>,
	tags: &'static [&'static str],
	video_url: Option<&'static str>,
	body: &'static str
}

const DETAILS: [DetailSeed; 6] = [
	DetailSeed {
		id: "1",
		author: "Dr. Sarah Johnson",
		avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=sarah"),
		tags: &["Anxiety", "Mental Health", "Self-Care"],
		video_url: None,
		body: "\
Anxiety is a normal and often healthy emotion. However, when a person regularly feels
disproportionate levels of anxiety, it might become a medical disorder.

Anxiety disorders form a category of mental health diagnoses that lead to excessive nervousness,
fear, apprehension, and worry. These disorders alter how a person processes emotions and behaves,
also causing physical symptoms. Mild anxiety might be vague and unsettling, while severe anxiety
may seriously affect day-to-day living.

## Common Symptoms of Anxiety

- Feeling nervous, restless or tense
- Having a sense of impending danger, panic or doom
- Having an increased heart rate
- Breathing rapidly (hyperventilation)
- Sweating
- Trembling
- Feeling weak or tired
- Trouble concentrating or thinking about anything other than the present worry

## Coping Strategies

While anxiety disorders are serious mental health conditions, they're also highly treatable. Some
effective strategies include:

- **Therapy:** Cognitive-behavioral therapy (CBT) is particularly effective for anxiety disorders
- **Medication:** Anti-anxiety medications and antidepressants can help manage symptoms
- **Lifestyle changes:** Regular exercise, adequate sleep, and avoiding caffeine and alcohol can
  reduce anxiety symptoms
- **Relaxation techniques:** Deep breathing, meditation, and yoga can help manage anxiety
- **Support groups:** Connecting with others facing similar challenges can provide validation and
  perspective
"
	},
	DetailSeed {
		id: "2",
		author: "Dr. Michael Chen",
		avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=michael"),
		tags: &["Depression", "Mental Health", "Research"],
		video_url: None,
		body: "\
Depression is more than feeling sad for a few days. It is a persistent low mood that affects how a
person thinks, feels, and handles daily activities.

## What the Research Shows

Depression arises from a mix of genetic, biological, environmental, and psychological factors.
No single cause explains it, which is why treatment often combines more than one approach.

## What Helps

- **Psychotherapy:** Talking therapies such as CBT and interpersonal therapy
- **Medication:** Antidepressants, prescribed and monitored by a professional
- **Routine:** Regular sleep, meals, and small achievable goals
- **Connection:** Staying in touch with people, even when it feels hard
"
	},
	DetailSeed {
		id: "3",
		author: "Emma Rodriguez",
		avatar: None,
		tags: &["Mindfulness", "Meditation", "Self-Care"],
		video_url: Some("https://www.youtube.com/embed/inpok4MKVLM"),
		body: "\
Mindfulness is the practice of paying attention to the present moment without judgment. A few
minutes a day is enough to start.

## A Simple First Practice

1. Sit somewhere comfortable and close your eyes.
2. Notice the feeling of your breath going in and out.
3. When your mind wanders, gently bring it back to the breath.
4. Start with five minutes and build up from there.

Don't worry about doing it *right*. Noticing that your mind wandered **is** the practice.
"
	},
	DetailSeed {
		id: "4",
		author: "Dr. Sarah Johnson",
		avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=sarah"),
		tags: &["Resilience", "Stress Management"],
		video_url: None,
		body: "\
Resilience is the ability to adapt when things go wrong. It can be learned and strengthened over
time.

## Ways to Build Resilience

- Build a network of people you can lean on
- Treat setbacks as something to learn from rather than proof of failure
- Look after your body with sleep, food, and movement
- Keep things in perspective and remember past challenges you've come through
"
	},
	DetailSeed {
		id: "5",
		author: "James Okafor",
		avatar: None,
		tags: &["Wellness", "Exercise", "Mental Health"],
		video_url: None,
		body: "\
Exercise releases endorphins, improves sleep, and gives a sense of accomplishment, all of which
support better mental health.

## Getting Started

- Pick an activity you actually enjoy
- Start small, even a ten minute walk counts
- Schedule it like any other appointment
- Notice how your mood changes afterwards
"
	},
	DetailSeed {
		id: "6",
		author: "Emma Rodriguez",
		avatar: None,
		tags: &["Support", "Relationships", "Self-Care"],
		video_url: None,
		body: "\
Supporting someone through a hard time starts with listening. You don't need to have the answers.

## How to Help

- Ask how they are, and really listen to the reply
- Offer practical help, like cooking a meal or going to an appointment with them
- Encourage professional support without pushing
- Look after your own well-being too
"
	},
];

// (id, views, published)
const POPULARITY: [(&str, &str, &str); 6] = [
	("1", "6.1k", "5 months ago"),
	("2", "3.2k", "2 weeks ago"),
	("3", "1.8k", "1 month ago"),
	("4", "5.4k", "3 weeks ago"),
	("5", "2.7k", "5 days ago"),
	("6", "4.0k", "2 months ago"),
];

#[must_use]
pub fn articles() -> Rc<[Article]> {
	ARTICLES.iter()
		.map(|&(id, title, excerpt, image_url, category, date)| Article {
			id: id.into(),
			title: title.into(),
			excerpt: excerpt.into(),
			image_url: image_url.into(),
			category: category.into(),
			date: date.into()
		})
		.collect()
}

#[must_use]
pub fn testimonials() -> Rc<[Testimonial]> {
	// (id, title, content, (y, m, d), tags)
	let seeds: [(u64, &str, &str, (i32, u32, u32), &[&str]); 3] = [
		(
			1,
			"Finding Hope in Therapy",
			"After struggling with anxiety for years, I finally decided to seek help. The journey hasn't been easy, but therapy has given me tools to manage my thoughts and emotions. I'm sharing this because I want others to know they're not alone.",
			(2023, 5, 15),
			&["Anxiety", "Therapy"]
		),
		(
			2,
			"My Journey with Depression",
			"Depression made me feel like I was drowning while everyone around me was breathing. It took time, but with support and treatment, I've found ways to stay afloat. Some days are still hard, but there's always hope.",
			(2023, 6, 22),
			&["Depression", "Recovery"]
		),
		(
			3,
			"Breaking the Stigma",
			"I hid my mental health struggles for years because I was afraid of judgment. Now I realize that speaking openly helps not only me but others who might be suffering in silence. Mental health is health, period.",
			(2023, 7, 10),
			&["Stigma", "Awareness"]
		),
	];

	seeds.into_iter()
		.filter_map(|(id, title, content, (y, m, d), tags)| {
			let date = NaiveDate::from_ymd_opt(y, m, d)?;
			Some(Testimonial {
				id,
				title: title.into(),
				content: content.into(),
				date,
				tags: tags.iter().map(|t| (*t).to_string()).collect()
			})
		})
		.collect()
}

/// Looks up everything the article page needs. `None` means there's no such article.
#[must_use]
pub fn article_detail(catalog: &[Article], id: &str) -> Option<ArticleDetail> {
	let article = catalog.iter().find(|a| a.id == id)?;
	let seed = DETAILS.iter().find(|d| d.id == id)?;

	Some(ArticleDetail {
		article: article.clone(),
		author: Author {
			name: seed.author.into(),
			avatar: seed.avatar.map(str::to_string)
		},
		tags: seed.tags.iter().map(|t| (*t).to_string()).collect(),
		body: seed.body.into(),
		video_url: seed.video_url.map(str::to_string)
	})
}

/// Other articles to suggest next to the one with `id`
#[must_use]
pub fn related_to(catalog: &[Article], id: &str) -> Vec<RelatedArticle> {
	catalog.iter()
		.filter(|a| a.id != id)
		.filter_map(|a| {
			let &(_, views, published) = POPULARITY.iter().find(|(pid, ..)| *pid == a.id)?;
			Some(RelatedArticle {
				id: a.id.clone(),
				title: a.title.clone(),
				image_url: a.image_url.clone(),
				category: a.category.clone(),
				views: views.into(),
				published: published.into()
			})
		})
		.take(RELATED_COUNT)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn article_ids_are_unique_and_categories_set() {
		let articles = articles();
		let ids: HashSet<_> = articles.iter().map(|a| a.id.as_str()).collect();

		assert_eq!(ids.len(), articles.len());
		assert!(articles.iter().all(|a| !a.category.is_empty()));
		assert!(articles.iter().all(|a| a.category == a.category.to_lowercase()));
	}

	#[test]
	fn testimonials_are_all_seeded() {
		let testimonials = testimonials();
		assert_eq!(testimonials.len(), 3);
		assert_eq!(testimonials[0].title, "Finding Hope in Therapy");
		assert_eq!(testimonials[2].tags, ["Stigma", "Awareness"]);
	}

	#[test]
	fn every_article_has_details() {
		let catalog = articles();
		for article in catalog.iter() {
			let detail = article_detail(&catalog, &article.id).unwrap();
			assert_eq!(&detail.article, article);
			assert!(!detail.body_html().is_empty());
		}

		let anxiety = article_detail(&catalog, "1").unwrap();
		assert_eq!(anxiety.author.name, "Dr. Sarah Johnson");
		assert_eq!(anxiety.tags, ["Anxiety", "Mental Health", "Self-Care"]);
		assert!(anxiety.body_html().contains("<h2>Common Symptoms of Anxiety</h2>"));
	}

	#[test]
	fn unknown_article_has_no_details() {
		assert_eq!(article_detail(&articles(), "404"), None);
		assert_eq!(article_detail(&[], "1"), None);
	}

	#[test]
	fn related_skips_the_current_article() {
		let catalog = articles();
		let related = related_to(&catalog, "2");
		let ids: Vec<_> = related.iter().map(|r| r.id.as_str()).collect();

		assert_eq!(ids, ["1", "3", "4", "5"]);
		assert_eq!(related[0].views, "6.1k");
	}
}
