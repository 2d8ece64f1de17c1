//! Bug cards

use super::video::render_clip;
use crate::markup::{el, Element, Node};
use crate::BugRecord;

/// One card: header row always visible, detail shown when expanded.
/// Carries `data-game`, `data-severity` and `data-type` for the filter script.
pub fn render_card(record: &BugRecord) -> Element {
    let game = record.game();
    let severity = record.severity();

    let header = el("div")
        .class("bug-card-header")
        .child(el("div").class("bug-id").text(format!("#{}", record.id)))
        .child(
            el("div")
                .class(format!("game-tag {}", game.css_class()))
                .text(record.game_label()),
        )
        .child(el("div").class("bug-title-text").text(record.title.as_str()))
        .child(el("div").class("bug-type").text(record.type_display()))
        .child(
            el("div")
                .class(format!("severity-badge {}", severity.css_class()))
                .text(severity.label()),
        );

    let detail = el("div")
        .class("bug-detail")
        .child(
            el("div")
                .class("detail-grid")
                .child(
                    el("div")
                        .child(section_title("Description"))
                        .child(el("p").class("detail-text").text(record.description.as_str()))
                        .child(tag_chips(&record.tags)),
                )
                .child(
                    el("div")
                        .child(section_title("Reproduction Steps"))
                        .child(repro_steps(&record.reproduction_steps)),
                ),
        )
        .child(section_title("Clip"))
        .child(render_clip(record));

    el("div")
        .class("bug-card")
        .attr("data-id", record.id.as_str())
        .attr("data-game", record.game.as_str())
        .attr("data-severity", record.severity.as_str())
        .attr("data-type", record.bug_type.as_str())
        .attr("onclick", "toggleCard(this)")
        .attr("style", format!("animation-delay:{}", animation_delay(&record.id)))
        .child(header)
        .child(detail)
}

fn section_title(title: &str) -> Element {
    el("div").class("detail-section-title").text(title)
}

/// Two-digit, 1-based numbered steps
fn repro_steps(steps: &[String]) -> Element {
    el("ul").class("repro-steps").children(steps.iter().enumerate().map(|(i, step)| {
        el("li")
            .class("repro-step")
            .child(el("span").class("step-num").text(format!("{:02}", i + 1)))
            .child(el("span").text(step.as_str()))
    }))
}

fn tag_chips(tags: &[String]) -> Element {
    el("div")
        .class("detail-chips")
        .children(tags.iter().map(|t| Node::from(el("span").class("chip").text(t.as_str()))))
}

/// Staggered entrance: ((id mod 8) + 1) * 50ms with a floored modulo;
/// non-numeric ids count as 1
fn animation_delay(id: &str) -> String {
    let n: i64 = id.trim().parse().unwrap_or(1);
    let step = n.rem_euclid(8) + 1;
    format!("{:.2}s", step as f64 * 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BugRecord {
        let mut r = BugRecord::new("5");
        r.game = "ds3".into();
        r.severity = "critical".into();
        r.bug_type = "ai".into();
        r.title = "Boss walks off ledge".into();
        r.description = "The boss <pathing> fails".into();
        r.tags = vec!["boss".into(), "ai".into()];
        r.reproduction_steps = vec!["Enter arena".into(), "Stand on ledge".into()];
        r
    }

    #[test]
    fn test_card_data_attributes() {
        let card = render_card(&sample());
        assert_eq!(card.get_attr("data-game"), Some("ds3"));
        assert_eq!(card.get_attr("data-severity"), Some("critical"));
        assert_eq!(card.get_attr("data-type"), Some("ai"));
        assert_eq!(card.get_attr("data-id"), Some("5"));
    }

    #[test]
    fn test_card_contents() {
        let html = render_card(&sample()).render();
        assert!(html.contains(r##"<div class="bug-id">#5</div>"##));
        assert!(html.contains(r#"<div class="game-tag game-ds3">Dark Souls III</div>"#));
        assert!(html.contains(r#"<div class="severity-badge sev-critical">Critical</div>"#));
        assert!(html.contains(r#"<span class="step-num">01</span><span>Enter arena</span>"#));
        assert!(html.contains(r#"<span class="step-num">02</span>"#));
        assert!(html.contains(r#"<span class="chip">boss</span>"#));
        assert!(html.contains("The boss &lt;pathing&gt; fails"));
    }

    #[test]
    fn test_card_degrades_for_unknown_keys() {
        let mut r = BugRecord::new("abc");
        r.game = "hollowknight".into();
        r.severity = "cosmetic".into();
        r.bug_type = "audio".into();
        let html = render_card(&r).render();
        assert!(html.contains("game-tag game-default\">hollowknight<"));
        assert!(html.contains("severity-badge sev-minor\">Cosmetic<"));
        assert!(html.contains("<div class=\"bug-type\">Audio</div>"));
        assert!(html.contains("animation-delay:0.10s"));
    }

    #[test]
    fn test_animation_delay() {
        assert_eq!(animation_delay("1"), "0.10s");
        assert_eq!(animation_delay("7"), "0.40s");
        assert_eq!(animation_delay("8"), "0.05s");
        assert_eq!(animation_delay("x"), "0.10s");
        assert_eq!(animation_delay("-3"), "0.30s");
        assert_eq!(animation_delay("-8"), "0.05s");
    }

    #[test]
    fn test_injection_in_every_text_field() {
        let payload = "<img src=x onerror=alert(1)>";
        let mut r = BugRecord::new(payload);
        r.game = payload.into();
        r.game_name = Some(payload.into());
        r.title = payload.into();
        r.bug_type = payload.into();
        r.severity = payload.into();
        r.description = payload.into();
        r.tags = vec![payload.into()];
        r.reproduction_steps = vec![payload.into()];
        r.video_text = Some(payload.into());
        let html = render_card(&r).render();
        assert!(!html.contains("<img"));
    }
}
