// Host-side tests for scene name resolution.

mod common;

use common::diorama::stage::resolve_name;

#[test]
fn exact_match_wins() {
    let names = ["rideau", "rideau2"];
    assert_eq!(resolve_name(names.iter().copied(), "rideau"), Some(0));
}

#[test]
fn falls_back_to_case_insensitive() {
    let names = ["Rideau", "grasse1"];
    assert_eq!(resolve_name(names.iter().copied(), "rideau"), Some(0));
    assert_eq!(resolve_name(names.iter().copied(), "GRASSE1"), Some(1));
}

#[test]
fn falls_back_to_substring() {
    let names = ["spriteplane_student", "bones_plane"];
    assert_eq!(resolve_name(names.iter().copied(), "student"), Some(0));
    assert_eq!(resolve_name(names.iter().copied(), "BONES"), Some(1));
}

#[test]
fn exact_beats_an_earlier_substring() {
    let names = ["grasse12", "grasse1"];
    assert_eq!(resolve_name(names.iter().copied(), "grasse1"), Some(1));
}

#[test]
fn unknown_name_resolves_to_nothing() {
    let names = ["rideau", "grasse1"];
    assert_eq!(resolve_name(names.iter().copied(), "fontaine"), None);
}
