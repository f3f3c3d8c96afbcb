use crate::Testimonial;
use chrono::{DateTime, Utc};
use std::{fmt, rc::Rc};

/// Splits the comma-separated tags field. Blank pieces are dropped, so an empty field gives no
/// tags at all rather than a single empty one.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
	input.split(',')
		.map(str::trim)
		.filter(|t| !t.is_empty())
		.map(str::to_string)
		.collect()
}

/// What's currently typed into the submission form
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Draft {
	pub title: String,
	pub content: String,
	pub tags: String
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionErr {
	MissingTitle,
	MissingContent
}

impl fmt::Display for SubmissionErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingTitle => f.write_str("a title is required"),
			Self::MissingContent => f.write_str("the story itself is required"),
		}
	}
}

impl std::error::Error for SubmissionErr {}

/// A draft that has made it past the required-field check. The ledger only ever takes these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
	title: String,
	content: String,
	tags: Vec<String>
}

impl Submission {
	pub fn from_draft(draft: &Draft) -> Result<Self, SubmissionErr> {
		if draft.title.trim().is_empty() {
			return Err(SubmissionErr::MissingTitle);
		}
		if draft.content.trim().is_empty() {
			return Err(SubmissionErr::MissingContent);
		}

		Ok(Self {
			title: draft.title.clone(),
			content: draft.content.clone(),
			tags: parse_tags(&draft.tags)
		})
	}

	#[must_use]
	pub fn tags(&self) -> &[String] {
		&self.tags
	}
}

#[derive(Debug)]
pub enum LedgerMsg {
	Title(String),
	Content(String),
	Tags(String),
	Submit(Submission, DateTime<Utc>),
	// Carries the generation of the acknowledgment it was scheduled for
	Dismiss(u32)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionLedger {
	// newest first, always
	entries: Rc<Vec<Testimonial>>,
	draft: Draft,
	acknowledged: bool,
	ack_generation: u32,
	last_id: u64
}

impl SubmissionLedger {
	#[must_use]
	pub fn new(seed: &[Testimonial]) -> Self {
		Self {
			last_id: seed.iter().map(|t| t.id).max().unwrap_or(0),
			entries: Rc::new(seed.to_vec()),
			draft: Draft::default(),
			acknowledged: false,
			ack_generation: 0
		}
	}

	#[must_use]
	pub fn entries(&self) -> &[Testimonial] {
		&self.entries
	}

	#[must_use]
	pub fn draft(&self) -> &Draft {
		&self.draft
	}

	#[must_use]
	pub fn is_acknowledged(&self) -> bool {
		self.acknowledged
	}

	#[must_use]
	pub fn ack_generation(&self) -> u32 {
		self.ack_generation
	}

	/// Ids come from the submission time in millis, but are bumped past the previous id if the
	/// clock hasn't moved (or went backwards) so that two quick submissions can't share one.
	fn next_id(&self, now: DateTime<Utc>) -> u64 {
		let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
		millis.max(self.last_id.saturating_add(1))
	}

	/// Puts the submission at the front of the ledger, clears out the form, and raises the
	/// acknowledgment banner.
	pub fn append(&mut self, submission: Submission, now: DateTime<Utc>) -> &Testimonial {
		let id = self.next_id(now);
		let Submission { title, content, tags } = submission;

		let entries = Rc::make_mut(&mut self.entries);
		entries.insert(0, Testimonial {
			id,
			title,
			content,
			date: now.date_naive(),
			tags
		});

		self.last_id = id;
		self.draft = Draft::default();
		self.acknowledged = true;
		self.ack_generation = self.ack_generation.wrapping_add(1);

		&entries[0]
	}

	#[must_use]
	pub fn apply(&self, msg: LedgerMsg) -> Self {
		let mut next = self.clone();

		match msg {
			LedgerMsg::Title(title) => next.draft.title = title,
			LedgerMsg::Content(content) => next.draft.content = content,
			LedgerMsg::Tags(tags) => next.draft.tags = tags,
			LedgerMsg::Submit(submission, now) => {
				next.append(submission, now);
			},
			// a timer left over from an earlier submission shouldn't hide the banner for a newer one
			LedgerMsg::Dismiss(generation) => if generation == next.ack_generation {
				next.acknowledged = false;
			}
		}

		next
	}
}

#[cfg(feature = "yew")]
impl yew::functional::Reducible for SubmissionLedger {
	type Action = LedgerMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		self.apply(action).into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::seed;
	use chrono::NaiveDate;

	fn at(millis: i64) -> DateTime<Utc> {
		DateTime::from_timestamp_millis(millis).unwrap()
	}

	// 2024-03-10T12:00:00Z
	const NOON: i64 = 1_710_072_000_000;

	fn typed(ledger: SubmissionLedger, title: &str, content: &str, tags: &str) -> SubmissionLedger {
		ledger.apply(LedgerMsg::Title(title.into()))
			.apply(LedgerMsg::Content(content.into()))
			.apply(LedgerMsg::Tags(tags.into()))
	}

	fn submit(ledger: &SubmissionLedger, now: DateTime<Utc>) -> SubmissionLedger {
		let submission = Submission::from_draft(ledger.draft()).unwrap();
		ledger.apply(LedgerMsg::Submit(submission, now))
	}

	#[test]
	fn submission_lands_on_top() {
		let seeded = SubmissionLedger::new(&seed::testimonials());
		let before = seeded.entries().to_vec();

		let ledger = submit(&typed(seeded, "T", "Body", "A, B , C"), at(NOON));
		let entries = ledger.entries();

		assert_eq!(entries.len(), before.len() + 1);
		assert_eq!(entries[0].title, "T");
		assert_eq!(entries[0].content, "Body");
		assert_eq!(entries[0].tags, ["A", "B", "C"]);
		assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
		assert_eq!(&entries[1..], &before[..]);
	}

	#[test]
	fn empty_tags_field_gives_no_tags() {
		let ledger = submit(&typed(SubmissionLedger::new(&[]), "T", "Body", ""), at(NOON));
		assert!(ledger.entries()[0].tags.is_empty());

		assert!(parse_tags("   ").is_empty());
		assert_eq!(parse_tags(" Anxiety ,, Recovery,"), ["Anxiety", "Recovery"]);
		assert_eq!(parse_tags("Recovery, Anxiety"), ["Recovery", "Anxiety"]);
	}

	#[test]
	fn draft_is_cleared_and_banner_raised() {
		let ledger = typed(SubmissionLedger::new(&[]), "T", "Body", "x");
		assert!(!ledger.is_acknowledged());

		let ledger = submit(&ledger, at(NOON));
		assert_eq!(ledger.draft(), &Draft::default());
		assert!(ledger.is_acknowledged());

		let ledger = ledger.apply(LedgerMsg::Dismiss(ledger.ack_generation()));
		assert!(!ledger.is_acknowledged());
		assert_eq!(ledger.entries().len(), 1);
	}

	#[test]
	fn stale_dismiss_keeps_newer_banner() {
		let first = submit(&typed(SubmissionLedger::new(&[]), "One", "1", ""), at(NOON));
		let stale = first.ack_generation();

		let second = submit(&typed(first, "Two", "2", ""), at(NOON + 1_000));
		let second = second.apply(LedgerMsg::Dismiss(stale));
		assert!(second.is_acknowledged());

		let second = second.apply(LedgerMsg::Dismiss(second.ack_generation()));
		assert!(!second.is_acknowledged());
	}

	#[test]
	fn ids_stay_unique_within_one_millisecond() {
		let ledger = submit(&typed(SubmissionLedger::new(&[]), "One", "1", ""), at(NOON));
		let ledger = submit(&typed(ledger, "Two", "2", ""), at(NOON));
		// and a clock that steps backwards
		let ledger = submit(&typed(ledger, "Three", "3", ""), at(NOON - 5));

		let ids: Vec<_> = ledger.entries().iter().map(|t| t.id).collect();
		let noon = NOON as u64;
		assert_eq!(ids, [noon + 2, noon + 1, noon]);
	}

	#[test]
	fn ids_are_time_based_past_the_seed() {
		let seeded = SubmissionLedger::new(&seed::testimonials());
		let ledger = submit(&typed(seeded, "T", "Body", ""), at(NOON));
		assert_eq!(ledger.entries()[0].id, NOON as u64);

		// a clock sitting before the epoch still can't reuse a seeded id
		let seeded = SubmissionLedger::new(&seed::testimonials());
		let ledger = submit(&typed(seeded, "T", "Body", ""), at(-1));
		assert_eq!(ledger.entries()[0].id, 4);
	}

	#[test]
	fn required_fields_are_checked_at_the_boundary() {
		let draft = Draft { title: String::new(), content: "Body".into(), tags: String::new() };
		assert_eq!(Submission::from_draft(&draft), Err(SubmissionErr::MissingTitle));

		let draft = Draft { title: "T".into(), content: " \n ".into(), tags: String::new() };
		assert_eq!(Submission::from_draft(&draft), Err(SubmissionErr::MissingContent));

		let draft = Draft { title: "T".into(), content: "Body".into(), tags: "a,b".into() };
		let submission = Submission::from_draft(&draft).unwrap();
		assert_eq!(submission.tags(), ["a", "b"]);
	}

	#[test]
	fn typing_only_touches_the_draft() {
		let seeded = SubmissionLedger::new(&seed::testimonials());
		let typed = typed(seeded.clone(), "Title", "Some words", "Hope");

		assert_eq!(typed.entries(), seeded.entries());
		assert_eq!(typed.draft(), &Draft {
			title: "Title".into(),
			content: "Some words".into(),
			tags: "Hope".into()
		});
		assert!(!typed.is_acknowledged());
	}

	#[test]
	fn earlier_snapshots_are_left_alone() {
		let before = SubmissionLedger::new(&seed::testimonials());
		let after = submit(&typed(before.clone(), "T", "Body", ""), at(NOON));

		assert_eq!(before.entries().len(), 3);
		assert_eq!(after.entries().len(), 4);
	}
}
