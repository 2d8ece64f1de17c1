//! Sidebar filter controls

use crate::aggregate::{Aggregates, SidebarEntry};
use crate::catalog::Severity;
use crate::markup::{el, Element};
use crate::{Dimension, FilterKey};

/// Click handler shared by every filter button; the key comes from `data-filter`
const FILTER_ONCLICK: &str = "filterBugs(this.dataset.filter, this)";

/// Sidebar with an "All Bugs" control followed by one section per dimension
pub fn render_sidebar(agg: &Aggregates) -> Element {
    let all_button = el("button")
        .class("filter-btn active")
        .attr("data-filter", FilterKey::ALL)
        .attr("onclick", FILTER_ONCLICK)
        .text("All Bugs ")
        .child(count_badge(agg.total));

    el("aside")
        .class("sidebar")
        .child(
            section("Filter by Game")
                .child(all_button)
                .children(agg.entries(Dimension::Game).iter().map(game_button)),
        )
        .child(
            section("Filter by Severity")
                .children(agg.entries(Dimension::Severity).iter().map(severity_button)),
        )
        .child(
            section("Filter by Type")
                .children(agg.entries(Dimension::Type).iter().map(type_button)),
        )
}

fn section(label: &str) -> Element {
    el("div")
        .class("sidebar-section")
        .child(el("div").class("sidebar-label").text(label))
}

fn filter_button(entry: &SidebarEntry) -> Element {
    el("button")
        .class("filter-btn")
        .attr("data-filter", entry.key.as_str())
        .attr("onclick", FILTER_ONCLICK)
}

fn count_badge(count: usize) -> Element {
    el("span").class("filter-count").text(count.to_string())
}

fn game_button(entry: &SidebarEntry) -> Element {
    filter_button(entry)
        .child(el("span").text(entry.label.as_str()))
        .child(count_badge(entry.count))
}

fn severity_button(entry: &SidebarEntry) -> Element {
    let dot_var = Severity::from_key(&entry.key).dot_var();
    filter_button(entry)
        .child(
            el("span")
                .child(
                    el("span")
                        .class("severity-dot")
                        .attr("style", format!("background:var({})", dot_var)),
                )
                .text(entry.label.as_str()),
        )
        .child(count_badge(entry.count))
}

fn type_button(entry: &SidebarEntry) -> Element {
    filter_button(entry)
        .child(el("span").text(entry.label.as_str()))
        .child(count_badge(entry.count))
}
