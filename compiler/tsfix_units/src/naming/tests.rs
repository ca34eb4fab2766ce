use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn flattens_path_separators() {
    assert_eq!(
        fixture_name("es6/classes/a.ts", "lib/b.ts"),
        "es6+classes+a.ts#lib+b.ts"
    );
    assert_eq!(fixture_name("a.ts", "a.ts"), "a.ts#a.ts");
}

#[test]
fn split_point_is_preserved() {
    assert_ne!(fixture_name("a/b", "c"), fixture_name("a", "b/c"));
}

#[test]
fn reserved_characters_are_escaped() {
    assert_eq!(fixture_name("a+b.ts", "c#d%.ts"), "a%2Bb.ts#c%23d%25.ts");
    assert_eq!(fixture_name("a.ts", "dir\\b.ts"), "a.ts#dir%5Cb.ts");
}

#[test]
fn parse_rejects_foreign_names() {
    assert_eq!(parse_fixture_name("no-separator.ts"), None);
    assert_eq!(parse_fixture_name("a#b#c"), None);
    assert_eq!(parse_fixture_name("a%zz#b"), None);
}

#[test]
fn parse_inverts_flattening() {
    assert_eq!(
        parse_fixture_name("es6+a%2B.ts#+abs.ts"),
        Some(("es6/a+.ts".to_string(), "/abs.ts".to_string()))
    );
}

proptest! {
    #[test]
    fn naming_is_injective(
        a in ("[a-z/+#%.\\\\]{0,8}", "[a-z/+#%.\\\\]{0,8}"),
        b in ("[a-z/+#%.\\\\]{0,8}", "[a-z/+#%.\\\\]{0,8}"),
    ) {
        let name_a = fixture_name(&a.0, &a.1);
        let name_b = fixture_name(&b.0, &b.1);
        prop_assert_eq!(name_a == name_b, a == b);
        prop_assert_eq!(parse_fixture_name(&name_a), Some(a));
    }
}
