pub static BASE_STYLE: &str = r#"
* {
	--body-background: #f7f5f2;
	--main-text: #2d2a32;
	--secondary-text: #6b6475;
	--main-background: #ffffff;
	--secondary-background: #ece7f2;
	--border-color: #d6cfe0;
	--title-text: #4b3f72;
	--accent: #7a5ea8;
	--success-background: #e7f6ea;
	--success-text: #23732f;
	font-family: "Segoe UI", Arial, sans-serif;
	color: var(--main-text);
	box-sizing: border-box;
}
body {
	background-color: var(--body-background);
	margin: 0;
}
a {
	text-decoration: none;
	color: var(--title-text);
}
span.tag, span.badge {
	display: inline-block;
	margin: 0 6px 6px 0;
	background-color: var(--secondary-background);
	padding: 3px 8px;
	border-radius: 8px;
	font-size: 0.85em;
}
span.badge.outline {
	background: none;
	border: 1px solid var(--border-color);
}
input, textarea {
	background-color: var(--main-background);
	border: 1px solid var(--border-color);
	border-radius: 4px;
	padding: 8px 10px;
	width: 100%;
}
textarea {
	resize: vertical;
}
button, a.button {
	background-color: var(--main-background);
	border: 1px solid var(--border-color);
	border-radius: 4px;
	padding: 6px 10px;
	cursor: pointer;
}
button.primary, a.button.primary {
	background-color: var(--accent);
	border-color: var(--accent);
	color: white;
}
button.active {
	background-color: var(--title-text);
	color: white;
}
.card {
	background-color: var(--main-background);
	border: 1px solid var(--border-color);
	border-radius: 8px;
	overflow: hidden;
}
.muted {
	color: var(--secondary-text);
}
.page {
	max-width: 1100px;
	margin: 0 auto;
	padding: 24px 16px;
}
#nav {
	position: sticky;
	top: 0;
	z-index: 10;
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: 14px 24px;
	background-color: var(--main-background);
	border-bottom: 1px solid var(--border-color);
}
#nav a, #footer a {
	margin-left: 20px;
}
#site-name {
	font-weight: bold;
	font-size: 1.2em;
}
#footer {
	display: flex;
	flex-wrap: wrap;
	justify-content: space-between;
	align-items: center;
	padding: 24px;
	border-top: 1px solid var(--border-color);
	background-color: var(--secondary-background);
}
"#;

pub static GRID_STYLE: &str = r"
#grid-controls {
	display: flex;
	flex-wrap: wrap;
	gap: 12px;
	justify-content: space-between;
	align-items: center;
	margin-bottom: 24px;
}
#article-search {
	max-width: 360px;
}
#facets {
	display: flex;
	flex-wrap: wrap;
	gap: 4px;
}
#articles {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
	gap: 24px;
}
.article-card {
	display: flex;
	flex-direction: column;
}
.article-card img {
	width: 100%;
	aspect-ratio: 16 / 9;
	object-fit: cover;
}
.article-card-body {
	padding: 12px 16px;
	flex-grow: 1;
}
.article-card-meta {
	display: flex;
	justify-content: space-between;
	font-size: 0.8em;
}
.article-card-footer {
	padding: 0 16px 16px 16px;
}
.article-card-footer a {
	display: block;
	text-align: center;
}
#no-results {
	text-align: center;
	padding: 48px 0;
}
";
