// Host-side tests for the single-visible page-section state machine.

#![allow(dead_code)]
mod sections {
    include!("../src/core/sections.rs");
}

use sections::*;

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn starts_on_home() {
    let s = SectionSwitcher::new(ids(&["about", "home", "contact"]), "home");
    assert_eq!(s.current(), Some("home"));
    assert_eq!(s.current_index(), Some(1));
    assert!(s.is_shown("home"));
    assert!(!s.is_shown("about"));
}

#[test]
fn shows_nothing_without_home() {
    let mut s = SectionSwitcher::new(ids(&["about", "contact"]), "home");
    assert_eq!(s.current(), None);
    assert!(!s.is_shown("about"));
    assert!(!s.is_shown("contact"));
    // first navigation has no section to hide
    assert_eq!(s.select("contact"), Some(Transition { from: None, to: 1 }));
    assert!(s.is_shown("contact"));
}

#[test]
fn empty_page_has_no_current_section() {
    let mut s = SectionSwitcher::new(Vec::new(), "home");
    assert_eq!(s.current(), None);
    assert_eq!(s.select("home"), None);
}

#[test]
fn select_moves_to_known_section() {
    let mut s = SectionSwitcher::new(ids(&["home", "about", "contact"]), "home");
    assert_eq!(s.select("contact"), Some(Transition { from: Some(0), to: 2 }));
    assert_eq!(s.current(), Some("contact"));
    assert_eq!(s.select("about"), Some(Transition { from: Some(2), to: 1 }));
    assert!(s.is_shown("about"));
    assert!(!s.is_shown("contact"));
}

#[test]
fn unknown_target_keeps_current_section() {
    let mut s = SectionSwitcher::new(ids(&["home", "about"]), "home");
    assert_eq!(s.select("gallery"), None);
    assert_eq!(s.current(), Some("home"));
}

#[test]
fn reselecting_current_is_not_a_transition() {
    let mut s = SectionSwitcher::new(ids(&["home", "about"]), "home");
    assert_eq!(s.select("home"), None);
    assert_eq!(s.current(), Some("home"));
}

#[test]
fn duplicate_ids_resolve_to_first_section() {
    let mut s = SectionSwitcher::new(ids(&["home", "work", "work"]), "home");
    assert_eq!(s.select("work"), Some(Transition { from: Some(0), to: 1 }));
    assert_eq!(s.ids().len(), 3);
}
