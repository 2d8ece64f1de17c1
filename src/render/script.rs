//! Client-side filter engine embedded in the page
//!
//! The script is static. Filter key sets travel as JSON in data attributes
//! on `#bugList` (see [`key_set_attributes`]) and filter keys are read from
//! each button's `data-filter`, so no record content is ever spliced into
//! script text.

use crate::filter::FilterKeySets;
use crate::markup::Element;

/// Attach the three key sets to the card list element
pub fn key_set_attributes(list: Element, keys: &FilterKeySets) -> Element {
    list.attr("data-game-keys", json_list(&keys.games))
        .attr("data-severity-keys", json_list(&keys.severities))
        .attr("data-type-keys", json_list(&keys.types))
}

fn json_list(keys: &[String]) -> String {
    serde_json::to_string(keys).unwrap_or_else(|_| "[]".to_string())
}

pub const FILTER_SCRIPT: &str = r##"
(function(){
"use strict";

const list=document.getElementById('bugList');
const keysOf=name=>{try{return JSON.parse(list.dataset[name]||'[]')}catch(e){return []}};
const gameKeys=keysOf('gameKeys');
const severityKeys=keysOf('severityKeys');
const typeKeys=keysOf('typeKeys');

/* ── state: one active filter, at most one expanded card ── */
let activeFilter='all';
let expandedCard=null;

function dimensionOf(key){
  if(gameKeys.includes(key)) return 'game';
  if(severityKeys.includes(key)) return 'severity';
  if(typeKeys.includes(key)) return 'type';
  return null;
}

function toggleCard(card){
  expandedCard=(expandedCard===card)?null:card;
  document.querySelectorAll('.bug-card').forEach(c=>c.classList.toggle('expanded',c===expandedCard));
}

function filterBugs(filter,btn){
  activeFilter=filter;
  document.querySelectorAll('.filter-btn').forEach(b=>b.classList.toggle('active',b===btn));
  const dim=activeFilter==='all'?null:dimensionOf(activeFilter);
  let visible=0;
  document.querySelectorAll('.bug-card').forEach(card=>{
    const show=activeFilter==='all'||(dim!==null&&card.dataset[dim]===activeFilter);
    card.classList.toggle('hidden',!show);
    if(show) visible++;
  });
  document.getElementById('count').textContent=visible;
}

/* following a link in the detail must not collapse the card */
document.querySelectorAll('.bug-detail a').forEach(a=>a.addEventListener('click',e=>e.stopPropagation()));

window.toggleCard=toggleCard;
window.filterBugs=filterBugs;
})();
"##;
