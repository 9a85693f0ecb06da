use editcore::{Document, Position, compute_diff};
use inlineview::{
    EditIdentity, RenderState, ViewContext, ViewPolicies, ViewSelector, build_render_state,
};

fn main() {
    let scenarios = [
        (
            "typo fixed",
            "let planed = route();",
            "let planned = route();",
            Position::new(1, 1),
        ),
        (
            "completion past the cursor",
            "let total = price tax;",
            "let total = price + tax;",
            Position::new(1, 18),
        ),
        (
            "completion behind the cursor",
            "let total = price tax;",
            "let total = price + tax;",
            Position::new(1, 23),
        ),
        (
            "dead code removed",
            "fn used() {}\nfn unused() {}\nfn also_unused() {}",
            "fn used() {}",
            Position::new(1, 1),
        ),
        (
            "helper appended",
            "fn main() {\n    run();\n}",
            "fn main() {\n    run();\n}\n\nfn run() {\n    todo!();\n}",
            Position::new(2, 5),
        ),
        (
            "block restructured",
            "if a {\n    b();\n    c();\n}",
            "match a {\n    true => b(),\n    false => c(),\n    _ => d(),\n}",
            Position::new(1, 1),
        ),
    ];

    for (index, (name, original, modified, cursor)) in scenarios.iter().enumerate() {
        let original = Document::from_str(original);
        let modified = Document::from_str(modified);
        let diff = compute_diff(&original, &modified);

        let ctx = ViewContext {
            identity: EditIdentity::new(format!("proposal-{}", index + 1)),
            diff: &diff,
            original: &original,
            modified: &modified,
            cursor: *cursor,
            display_location: None,
            editor_width: 120,
            side_by_side_fits: true,
            policies: ViewPolicies::default(),
        };

        let mut selector = ViewSelector::default();
        let kind = selector.select(&ctx, false);

        println!("== {name} ==");
        println!("kind: {kind:?}");
        match build_render_state(kind, &ctx) {
            Ok(state) => println!("{}", to_json(&state)),
            Err(violation) => println!("render state unavailable: {violation}"),
        }
        println!();
    }

    resize_demo();
}

fn resize_demo() {
    let original = Document::from_str("if a {\n    b();\n    c();\n}");
    let modified =
        Document::from_str("match a {\n    true => b(),\n    false => c(),\n    _ => d(),\n}");
    let diff = compute_diff(&original, &modified);

    let mut ctx = ViewContext {
        identity: EditIdentity::new("proposal-resize"),
        diff: &diff,
        original: &original,
        modified: &modified,
        cursor: Position::new(1, 1),
        display_location: None,
        editor_width: 120,
        side_by_side_fits: true,
        policies: ViewPolicies::default(),
    };

    let mut selector = ViewSelector::default();
    println!("== editor resized ==");
    println!("at width 120: {:?}", selector.select(&ctx, false));
    println!(
        "stale at width 60: {}",
        selector.stale_after_resize(60).unwrap_or(true)
    );

    ctx.editor_width = 60;
    ctx.side_by_side_fits = false;
    println!("at width 60: {:?}", selector.select(&ctx, false));
}

fn to_json(state: &RenderState) -> String {
    serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
}
