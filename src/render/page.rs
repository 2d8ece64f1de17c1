//! Dashboard renderer: assembles the full self-contained HTML document
//!
//! Cards and sidebar controls are pre-rendered server-side; the embedded
//! script only toggles classes. Output depends on nothing but the records
//! and the config, so the same input always produces the same bytes.

use super::card::render_card;
use super::script::{key_set_attributes, FILTER_SCRIPT};
use super::sidebar::render_sidebar;
use super::styles::STYLESHEET;
use crate::aggregate::Aggregates;
use crate::config::{Config, Profile};
use crate::filter::FilterKeySets;
use crate::markup::{self, el, Element, Node};
use crate::BugRecord;

/// Replaced in the profile background with the number of distinct games
pub const TITLES_PLACEHOLDER: &str = "{titles}";

/// Renders a bug list into a standalone dashboard page
pub struct DashboardRenderer<'a> {
    config: &'a Config,
}

impl<'a> DashboardRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generate the full HTML document
    pub fn render(&self, records: &[BugRecord]) -> String {
        let agg = Aggregates::from_records(records);
        let keys = FilterKeySets::from_aggregates(&agg);

        let body = el("body")
            .child(self.header())
            .child(self.stats_bar(&agg))
            .child(
                el("div")
                    .class("main")
                    .child(render_sidebar(&agg))
                    .child(self.content(records, &agg, &keys)),
            )
            .child(self.footer())
            .child(el("script").raw(FILTER_SCRIPT));

        let root = el("html")
            .attr("lang", "en")
            .child(self.head())
            .child(body);
        markup::document(&root)
    }

    fn profile(&self) -> &Profile {
        &self.config.profile
    }

    fn head(&self) -> Element {
        let font = (!self.config.font_stylesheet.is_empty()).then(|| {
            el("link")
                .attr("href", self.config.font_stylesheet.as_str())
                .attr("rel", "stylesheet")
        });
        el("head")
            .child(el("meta").attr("charset", "UTF-8"))
            .child(
                el("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1.0"),
            )
            .child(el("title").text(self.config.title.as_str()))
            .child(font)
            .child(el("style").raw(STYLESHEET))
    }

    fn header(&self) -> Element {
        let p = self.profile();
        let left = el("div")
            .class("header-left")
            .child(non_empty(&p.initials(), |s| el("div").class("logo-mark").text(s)))
            .child(non_empty(&p.name, |s| el("div").class("header-name").text(s)))
            .child(non_empty(&p.role, |s| el("div").class("header-role").text(s)));

        let right = el("div")
            .class("header-right")
            .child(non_empty(&p.email, |s| {
                contact_link(format!("mailto:{}", s), s)
            }))
            .child(non_empty(&p.phone, |s| contact_link(p.phone_href(), s)))
            .child(non_empty(&p.website, |s| {
                contact_link(s.to_string(), p.website_label())
                    .attr("target", "_blank")
                    .attr("rel", "noopener")
            }))
            .child(non_empty(&p.availability, |s| {
                el("div")
                    .class("header-status")
                    .child(el("span").class("status-dot"))
                    .text(s)
            }));

        el("header").child(left).child(right)
    }

    fn stats_bar(&self, agg: &Aggregates) -> Element {
        let p = self.profile();
        let computed = [
            stat(agg.total.to_string(), "Documented Bugs"),
            stat(agg.unique_games().to_string(), "Titles Tested"),
        ];
        let highlights = p
            .highlights
            .iter()
            .map(|h| stat(h.value.clone(), &h.label));

        el("div")
            .class("stats-bar")
            .children(computed)
            .children(highlights)
            .child(non_empty(&p.availability, |s| {
                el("div")
                    .class("open-to-work")
                    .child(el("span").class("status-dot"))
                    .text(s)
            }))
    }

    fn content(&self, records: &[BugRecord], agg: &Aggregates, keys: &FilterKeySets) -> Element {
        let total = agg.total.to_string();
        let header = el("div")
            .class("content-header")
            .child(el("div").class("content-title").text("// Bug Reports"))
            .child(
                el("div")
                    .class("result-count")
                    .text("Showing ")
                    .child(el("span").id("count").text(total.as_str()))
                    .text(format!(" of {} reports", total)),
            );

        let list = el("div")
            .class("bug-list")
            .id("bugList")
            .children(records.iter().map(render_card));
        let list = key_set_attributes(list, keys);
        let list = if records.is_empty() {
            list.child(el("div").class("empty").text("No bug reports yet."))
        } else {
            list
        };

        el("div")
            .class("content")
            .child(header)
            .child(list)
            .child(self.about_panel(agg))
    }

    fn about_panel(&self, agg: &Aggregates) -> Element {
        let p = self.profile();
        let background = non_empty(&p.background, |s| {
            let text = s.replace(TITLES_PLACEHOLDER, &agg.unique_games().to_string());
            about_col("Background").child(el("p").text(text))
        });
        let skills = (!p.skills.is_empty()).then(|| {
            about_col("QA Skills").child(skill_list(p.skills.iter().map(String::as_str)))
        });
        let titles = agg.titles_tested();
        let titles = about_col("Titles Tested").child(skill_list(titles.iter().map(String::as_str)));

        el("div")
            .class("about-panel")
            .child(el("div").class("about-header").text("// About This Portfolio"))
            .child(
                el("div")
                    .class("about-body")
                    .child(background)
                    .child(skills)
                    .child(titles),
            )
    }

    fn footer(&self) -> Element {
        let p = self.profile();
        let left = [p.name.as_str(), self.config.title.as_str(), p.tagline.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" // ");
        let right = [p.location.as_str(), p.email.as_str(), p.phone.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" · ");
        el("footer")
            .child(el("div").text(left))
            .child(el("div").text(right))
    }
}

/// Build `f(value)` only when `value` is non-empty
fn non_empty<F, N>(value: &str, f: F) -> Node
where
    F: FnOnce(&str) -> N,
    N: Into<Node>,
{
    if value.is_empty() {
        Node::Fragment(Vec::new())
    } else {
        f(value).into()
    }
}

fn contact_link(href: String, text: &str) -> Element {
    el("a").attr("href", href).class("header-contact").text(text)
}

fn stat(value: String, label: &str) -> Element {
    el("div")
        .class("stat-item")
        .child(el("div").class("stat-value").text(value))
        .child(el("div").class("stat-label").text(label))
}

fn about_col(title: &str) -> Element {
    el("div")
        .class("about-col")
        .child(el("div").class("about-col-title").text(title))
}

fn skill_list<'s>(items: impl Iterator<Item = &'s str>) -> Element {
    el("div")
        .class("skill-list")
        .children(items.map(|s| el("div").class("skill-item").text(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Highlight;

    fn record(id: &str, game: &str, severity: &str, bug_type: &str) -> BugRecord {
        let mut r = BugRecord::new(id);
        r.game = game.into();
        r.severity = severity.into();
        r.bug_type = bug_type.into();
        r
    }

    fn example() -> Vec<BugRecord> {
        vec![
            record("1", "ds3", "critical", "ai"),
            record("2", "cp77", "minor", "ai"),
        ]
    }

    #[test]
    fn test_report_contains_structure() {
        let config = Config::default();
        let html = DashboardRenderer::new(&config).render(&example());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\"><head>"));
        assert!(html.contains("<title>QA Portfolio</title>"));
        assert!(html.contains(r#"Showing <span id="count">2</span> of 2 reports"#));
        assert_eq!(html.matches("class=\"bug-card\"").count(), 2);
        assert!(html.contains(r#"data-game-keys="[&quot;ds3&quot;,&quot;cp77&quot;]""#));
        assert!(html.contains("function filterBugs"));
        assert!(html.contains("fonts.googleapis.com"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = Config::default();
        let renderer = DashboardRenderer::new(&config);
        assert_eq!(renderer.render(&example()), renderer.render(&example()));
    }

    #[test]
    fn test_stats_and_titles() {
        let mut config = Config::default();
        config.profile.highlights = vec![Highlight {
            value: "100+".into(),
            label: "Hrs User Testing".into(),
        }];
        let html = DashboardRenderer::new(&config).render(&example());
        assert!(html.contains(
            r#"<div class="stat-value">2</div><div class="stat-label">Documented Bugs</div>"#
        ));
        assert!(html.contains(
            r#"<div class="stat-value">2</div><div class="stat-label">Titles Tested</div>"#
        ));
        assert!(html.contains(
            r#"<div class="stat-value">100+</div><div class="stat-label">Hrs User Testing</div>"#
        ));
        assert!(html.contains(r#"<div class="skill-item">Dark Souls III</div><div class="skill-item">Cyberpunk 2077</div>"#));
    }

    #[test]
    fn test_profile_fields() {
        let mut config = Config::default();
        config.profile.name = "Ada Byron".into();
        config.profile.email = "ada@example.com".into();
        config.profile.availability = "Open to Work".into();
        let html = DashboardRenderer::new(&config).render(&example());
        assert!(html.contains(r#"<div class="logo-mark">AB</div>"#));
        assert!(html.contains(r#"href="mailto:ada@example.com""#));
        assert!(html.contains("Open to Work"));
        assert!(!html.contains("tel:"));
    }

    #[test]
    fn test_empty_profile_fields_are_omitted() {
        let mut config = Config::default();
        config.font_stylesheet = String::new();
        let html = DashboardRenderer::new(&config).render(&example());
        assert!(!html.contains(r#"class="header-contact""#));
        assert!(!html.contains(r#"class="open-to-work""#));
        assert!(!html.contains("<link"));
        assert!(!html.contains("Background"));
    }

    #[test]
    fn test_empty_records() {
        let config = Config::default();
        let html = DashboardRenderer::new(&config).render(&[]);
        assert!(html.contains(r#"Showing <span id="count">0</span> of 0 reports"#));
        assert!(html.contains("No bug reports yet."));
        assert!(html.contains(r#"data-game-keys="[]""#));
    }

    #[test]
    fn test_background_counts_titles() {
        let mut config = Config::default();
        config.profile.background = "Bugs documented across {titles} titles.".into();
        let html = DashboardRenderer::new(&config).render(&example());
        assert!(html.contains("<p>Bugs documented across 2 titles.</p>"));
        assert!(!html.contains("{titles}"));
    }

    #[test]
    fn test_title_is_escaped() {
        let mut config = Config::default();
        config.title = "</title><script>alert(1)</script>".into();
        let html = DashboardRenderer::new(&config).render(&example());
        assert!(!html.contains("<script>alert(1)"));
    }
}
