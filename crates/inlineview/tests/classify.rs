use editcore::{Document, Position, Range, compute_diff};
use inlineview::{
    DisplayLocation, EditIdentity, SideBySidePolicy, ViewContext, ViewKind, ViewPolicies, classify,
};

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

fn context(session: &Session) -> ViewContext<'_> {
    ViewContext {
        identity: EditIdentity::new("proposal-1"),
        diff: &session.diff,
        original: &session.original,
        modified: &session.modified,
        cursor: Position::new(1, 1),
        display_location: None,
        editor_width: 120,
        side_by_side_fits: true,
        policies: ViewPolicies::default(),
    }
}

#[test]
fn annotated_edit_renders_at_its_display_location() {
    let session = session("fn run() {}", "fn run() { log(); }");
    let mut ctx = context(&session);
    ctx.display_location = Some(DisplayLocation {
        range: Range::new(Position::new(1, 1), Position::new(1, 3)),
        label: "apply trace logging".into(),
    });
    assert_eq!(classify(&ctx), ViewKind::Custom);
}

#[test]
fn insertion_after_the_cursor_shows_inline_ghost_text() {
    let session = session(
        "fn a() {}\nfn b() {}\nlet v = ();",
        "fn a() {}\nfn b() {}\nlet v = (1);",
    );
    let mut ctx = context(&session);
    // The completion inserts at column 10, the cursor sits at column 5.
    ctx.cursor = Position::new(3, 5);
    assert_eq!(classify(&ctx), ViewKind::InsertionInline);
}

#[test]
fn insertion_before_the_cursor_replaces_the_line() {
    let session = session(
        "fn a() {}\nfn b() {}\nlet v = ();",
        "fn a() {}\nfn b() {}\nlet v = (1);",
    );
    let mut ctx = context(&session);
    ctx.cursor = Position::new(3, 12);
    assert_eq!(classify(&ctx), ViewKind::LineReplacement);
}

#[test]
fn removing_a_block_shows_the_deletion_view() {
    let session = session("foo\nbar", "");
    let ctx = context(&session);
    assert_eq!(classify(&ctx), ViewKind::Deletion);
}

#[test]
fn compact_word_change_shows_word_highlights() {
    let session = session("hello world", "hi world");
    let ctx = context(&session);
    assert_eq!(classify(&ctx), ViewKind::WordReplacements);
}

#[test]
fn appended_function_shows_a_multi_line_ghost() {
    let session = session(
        "fn main() {\n    run();\n}",
        "fn main() {\n    run();\n}\n\nfn run() {\n    todo!();\n}",
    );
    let ctx = context(&session);
    assert_eq!(classify(&ctx), ViewKind::InsertionMultiLine);
}

#[test]
fn rewritten_block_prefers_side_by_side_when_it_fits() {
    let session = session(
        "if a {\n    b();\n    c();\n}",
        "match a {\n    true => b(),\n    false => c(),\n    _ => d(),\n}",
    );
    let mut ctx = context(&session);
    assert_eq!(classify(&ctx), ViewKind::SideBySide);

    ctx.side_by_side_fits = false;
    assert_eq!(classify(&ctx), ViewKind::LineReplacement);

    let mut ctx = context(&session);
    ctx.policies.side_by_side = SideBySidePolicy::Never;
    assert_eq!(classify(&ctx), ViewKind::LineReplacement);
}
