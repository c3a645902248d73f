use booltree::interpreter::evaluator::core::{Context, DEFAULT_NAME};
use rstest::{fixture, rstest};

#[fixture]
fn ctx() -> Context {
    [("a", true), ("b", false), ("c", true)].into_iter().collect()
}

fn names(ctx: &Context) -> Vec<&str> {
    ctx.names().collect()
}

#[rstest]
#[case("a", true)]
#[case("b", false)]
fn rename_moves_the_value(mut ctx: Context, #[case] from: &str, #[case] value: bool) {
    assert_eq!(ctx.rename(from, "renamed"), Some(value));

    assert_eq!(ctx.get("renamed"), Some(value));
    assert!(!ctx.contains(from));
    assert_eq!(ctx.len(), 3);
}

#[rstest]
fn rename_places_the_new_name_last(mut ctx: Context) {
    ctx.rename("a", "z");
    assert_eq!(names(&ctx), ["b", "c", "z"]);
}

#[rstest]
fn rename_onto_existing_name_overwrites_it(mut ctx: Context) {
    assert_eq!(ctx.rename("b", "c"), Some(false));

    assert_eq!(ctx.get("c"), Some(false));
    assert!(!ctx.contains("b"));
    assert_eq!(names(&ctx), ["a", "c"]);
}

#[rstest]
fn rename_to_same_name_keeps_the_value(mut ctx: Context) {
    assert_eq!(ctx.rename("a", "a"), Some(true));
    assert_eq!(ctx.get("a"), Some(true));
    assert_eq!(ctx.len(), 3);
}

#[rstest]
fn rename_of_missing_name_changes_nothing(mut ctx: Context) {
    let before = ctx.clone();
    assert_eq!(ctx.rename("nope", "x"), None);
    assert_eq!(ctx, before);
    assert!(!ctx.contains("x"));
}

#[rstest]
fn remove_deletes_exactly_one_entry(mut ctx: Context) {
    assert_eq!(ctx.remove("b"), Some(false));

    assert!(!ctx.contains("b"));
    assert_eq!(ctx.get("a"), Some(true));
    assert_eq!(ctx.get("c"), Some(true));
    assert_eq!(names(&ctx), ["a", "c"]);
}

#[rstest]
fn remove_of_missing_name_changes_nothing(mut ctx: Context) {
    let before = ctx.clone();
    assert_eq!(ctx.remove("nope"), None);
    assert_eq!(ctx, before);
}

#[rstest]
fn flip_negates_in_place(mut ctx: Context) {
    assert_eq!(ctx.flip("a"), Some(false));
    assert_eq!(ctx.flip("b"), Some(true));
    assert_eq!(ctx.get("a"), Some(false));
    assert_eq!(ctx.get("b"), Some(true));
    assert_eq!(names(&ctx), ["a", "b", "c"]);

    assert_eq!(ctx.flip("nope"), None);
}

#[rstest]
fn set_keeps_position_of_existing_entries(mut ctx: Context) {
    assert_eq!(ctx.set("a", false), Some(true));
    assert_eq!(ctx.set("d", false), None);

    assert_eq!(names(&ctx), ["a", "b", "c", "d"]);
    assert_eq!(ctx.get("a"), Some(false));
}

#[test]
fn add_default_inserts_or_resets_new_arg() {
    let mut ctx = Context::new();
    assert!(ctx.is_empty());

    ctx.add_default();
    assert_eq!(ctx.get(DEFAULT_NAME), Some(true));

    ctx.flip(DEFAULT_NAME);
    ctx.add_default();
    assert_eq!(ctx.get(DEFAULT_NAME), Some(true));
    assert_eq!(ctx.len(), 1);
}

#[rstest]
fn first_name_follows_insertion_order(mut ctx: Context) {
    assert_eq!(ctx.first_name(), Some("a"));
    ctx.remove("a");
    assert_eq!(ctx.first_name(), Some("b"));
    assert_eq!(Context::new().first_name(), None);
}

#[rstest]
fn display_lists_entries_in_order(ctx: Context) {
    assert_eq!(ctx.to_string(), "{a = true, b = false, c = true}");
    assert_eq!(Context::new().to_string(), "{}");
}
