use std::time::Duration;

use editcore::{Document, Position, compute_diff};
use inlineview::{EditIdentity, ViewContext, ViewKind, ViewPolicies, ViewSelector};

struct Session {
    diff: Vec<editcore::LineRangeMapping>,
    original: Document,
    modified: Document,
}

fn session(original: &str, modified: &str) -> Session {
    let original = Document::from_str(original);
    let modified = Document::from_str(modified);
    let diff = compute_diff(&original, &modified);
    Session {
        diff,
        original,
        modified,
    }
}

fn context<'a>(session: &'a Session, identity: &str, editor_width: u32) -> ViewContext<'a> {
    ViewContext {
        identity: EditIdentity::new(identity),
        diff: &session.diff,
        original: &session.original,
        modified: &session.modified,
        cursor: Position::new(1, 1),
        display_location: None,
        editor_width,
        side_by_side_fits: true,
        policies: ViewPolicies::default(),
    }
}

fn rewritten_block() -> Session {
    session(
        "if a {\n    b();\n    c();\n}",
        "match a {\n    true => b(),\n    false => c(),\n    _ => d(),\n}",
    )
}

#[test]
fn repeated_renders_keep_the_same_view() {
    let session = rewritten_block();
    let mut selector = ViewSelector::default();

    let first = selector.select(&context(&session, "proposal-1", 120), false);
    for _ in 0..3 {
        let again = selector.select(&context(&session, "proposal-1", 120), false);
        assert_eq!(again, first);
    }
}

#[test]
fn narrowing_the_editor_reflows_a_side_by_side_view() {
    let session = rewritten_block();
    let mut selector = ViewSelector::default();

    let wide = selector.select(&context(&session, "proposal-1", 120), false);
    assert_eq!(wide, ViewKind::SideBySide);
    assert!(!selector.stale_after_resize(120).unwrap());
    assert!(selector.stale_after_resize(60).unwrap());

    // The editor no longer fits two columns at the new width.
    let mut narrow = context(&session, "proposal-1", 60);
    narrow.side_by_side_fits = false;
    assert_eq!(selector.select(&narrow, false), ViewKind::LineReplacement);
}

#[test]
fn width_changes_leave_word_highlights_alone() {
    let session = session("hello world", "hi world");
    let mut selector = ViewSelector::default();

    assert_eq!(
        selector.select(&context(&session, "proposal-1", 120), false),
        ViewKind::WordReplacements,
    );
    assert!(!selector.stale_after_resize(60).unwrap());
    assert_eq!(
        selector.select(&context(&session, "proposal-1", 60), false),
        ViewKind::WordReplacements,
    );
}

#[test]
fn a_new_proposal_is_classified_from_scratch() {
    let word_change = session("hello world", "hi world");
    let block_change = rewritten_block();
    let mut selector = ViewSelector::default();

    assert_eq!(
        selector.select(&context(&word_change, "proposal-1", 120), false),
        ViewKind::WordReplacements,
    );
    assert_eq!(
        selector.select(&context(&block_change, "proposal-2", 120), false),
        ViewKind::SideBySide,
    );
}

#[test]
fn collapsing_hides_the_view_without_forgetting_it() {
    let session = rewritten_block();
    let mut selector = ViewSelector::default();

    assert_eq!(
        selector.select(&context(&session, "proposal-1", 120), true),
        ViewKind::Collapsed,
    );
    assert_eq!(
        selector.select(&context(&session, "proposal-1", 120), false),
        ViewKind::SideBySide,
    );
}

#[test]
fn shown_since_survives_proposals_of_the_same_kind() {
    let first = session("hello world", "hi world");
    let second = session("goodbye world", "bye world");
    let mut selector = ViewSelector::default();

    selector.select(&context(&first, "proposal-1", 120), false);
    let shown = selector.shown_since().unwrap();

    std::thread::sleep(Duration::from_millis(2));
    assert_eq!(
        selector.select(&context(&second, "proposal-2", 120), false),
        ViewKind::WordReplacements,
    );
    assert_eq!(selector.shown_since().unwrap(), shown);
}

#[test]
fn shown_since_resets_when_the_kind_changes() {
    let word_change = session("hello world", "hi world");
    let block_change = rewritten_block();
    let mut selector = ViewSelector::default();

    selector.select(&context(&word_change, "proposal-1", 120), false);
    let shown = selector.shown_since().unwrap();

    std::thread::sleep(Duration::from_millis(2));
    selector.select(&context(&block_change, "proposal-2", 120), false);
    assert!(selector.shown_since().unwrap() > shown);
}

#[test]
fn staleness_needs_a_cached_view() {
    let session = rewritten_block();
    let mut selector = ViewSelector::default();
    assert!(selector.stale_after_resize(120).is_err());

    selector.select(&context(&session, "proposal-1", 120), false);
    assert!(selector.stale_after_resize(120).is_ok());

    selector.clear();
    assert!(selector.stale_after_resize(120).is_err());
}
