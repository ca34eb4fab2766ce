use super::*;
use crate::document::TestCategory;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn doc(id: &str, text: &str) -> TestDocument {
    TestDocument::new(TestCategory::Compiler, id, text)
}

fn names(split: &SplitDocument) -> Vec<&str> {
    split.units.iter().map(|u| u.name.as_str()).collect()
}

fn contents(split: &SplitDocument) -> Vec<Option<&str>> {
    split.units.iter().map(|u| u.content.as_deref()).collect()
}

#[test]
fn single_file_document_is_one_unit() {
    let split = split_document(&doc("types/a.ts", "let x: number = 1;"));
    assert_eq!(names(&split), vec!["a.ts"]);
    assert_eq!(contents(&split), vec![Some("let x: number = 1;")]);
    assert_eq!(split.units[0].ordinal, 0);
    assert_eq!(split.units[0].parent_document_id, "types/a.ts");
    assert!(split.settings.is_empty());
}

#[test]
fn single_file_keeps_option_lines_and_records_them() {
    let text = "// @target: es5\n// @strict: true\nlet x = 1;\n";
    let split = split_document(&doc("a.ts", text));
    assert_eq!(contents(&split), vec![Some(text)]);
    assert_eq!(split.settings.get("target"), Some("es5"));
    assert_eq!(split.settings.get("STRICT"), Some("true"));
}

#[test]
fn later_option_overwrites_regardless_of_case() {
    let text = "// @Target: es5\n// @target: es2015\nlet x = 1;\n";
    let split = split_document(&doc("a.ts", text));
    assert_eq!(split.settings.get("target"), Some("es2015"));
    assert_eq!(split.settings.get("TARGET"), Some("es2015"));
    assert_eq!(split.settings.options.len(), 1);
}

#[test]
fn markers_split_in_source_order() {
    let text = "\
// @filename: a.ts
export const x = 1;
// @filename: b.ts
x.foo();
";
    let split = split_document(&doc("multi.ts", text));
    assert_eq!(names(&split), vec!["a.ts", "b.ts"]);
    assert_eq!(
        contents(&split),
        vec![Some("export const x = 1;\n"), Some("x.foo();\n")]
    );
    assert_eq!(
        split.units.iter().map(|u| u.ordinal).collect::<Vec<_>>(),
        vec![0, 1]
    );
}

#[test]
fn marker_name_is_case_insensitive_and_trimmed() {
    let text = "//   @FileName :   dir/a.tsx  \r\nconst a = <div/>;\r\n";
    let split = split_document(&doc("jsx.tsx", text));
    assert_eq!(names(&split), vec!["dir/a.tsx"]);
    assert_eq!(contents(&split), vec![Some("const a = <div/>;\r\n")]);
}

#[test]
fn options_before_first_marker_are_settings_not_content() {
    let text = "// @module: commonjs\n/* header */\n// @filename: a.ts\nlet a;\n";
    let split = split_document(&doc("m.ts", text));
    assert_eq!(contents(&split), vec![Some("let a;\n")]);
    assert_eq!(split.settings.get("module"), Some("commonjs"));
    assert_eq!(split.settings.get("filename"), None);
}

#[test]
fn code_before_first_marker_makes_first_unit_ambiguous() {
    let text = "let stray = 1;\n// @filename: a.ts\nlet a;\n// @filename: b.ts\nlet b;\n";
    let split = split_document(&doc("m.ts", text));
    assert_eq!(contents(&split), vec![None, Some("let b;\n")]);
}

#[test]
fn leading_shebang_does_not_make_first_unit_ambiguous() {
    let text = "#!/usr/bin/env node\n// @filename: a.ts\nlet a = 1;\n";
    let split = split_document(&doc("m.ts", text));
    assert_eq!(names(&split), vec!["a.ts"]);
    assert_eq!(contents(&split), vec![Some("let a = 1;\n")]);
}

#[test]
fn duplicate_file_names_are_ambiguous() {
    let text = "// @filename: a.ts\n1;\n// @filename: a.ts\n2;\n// @filename: c.ts\n3;\n";
    let split = split_document(&doc("dup.ts", text));
    assert_eq!(names(&split), vec!["a.ts", "a.ts", "c.ts"]);
    assert_eq!(contents(&split), vec![None, None, Some("3;\n")]);
}

#[test]
fn empty_marker_is_malformed() {
    let text = "// @filename:\nlet a;\n// @filename: b.ts\nlet b;\n";
    let split = split_document(&doc("m.ts", text));
    assert_eq!(names(&split), vec!["unnamed-0", "b.ts"]);
    assert_eq!(contents(&split), vec![None, Some("let b;\n")]);
}

#[test]
fn adjacent_markers_give_empty_content() {
    let text = "// @filename: a.ts\n// @filename: b.ts\nlet b;";
    let split = split_document(&doc("m.ts", text));
    assert_eq!(contents(&split), vec![Some(""), Some("let b;")]);
}

#[test]
fn link_directives_are_symlinks() {
    let text = "// @link: /packages/a -> /node_modules/a\n// @filename: x.ts\n1;\n";
    let split = split_document(&doc("l.ts", text));
    assert_eq!(
        split.settings.symlinks(),
        &[Symlink {
            target: "/packages/a".to_string(),
            link: "/node_modules/a".to_string(),
        }]
    );
    assert_eq!(split.settings.get("link"), None);
}

#[test]
fn directive_requires_leading_slashes_at_column_zero() {
    assert_eq!(parse_directive("// @target: es5"), Some(("target", "es5")));
    assert_eq!(parse_directive("//@jsx:preserve"), Some(("jsx", "preserve")));
    assert_eq!(parse_directive("  // @target: es5"), None);
    assert_eq!(parse_directive("// @: es5"), None);
    assert_eq!(parse_directive("// @target es5"), None);
    assert_eq!(parse_directive("/// <reference path=\"a.ts\" />"), None);
}

#[test]
fn trivia_detection() {
    assert!(is_trivia(""));
    assert!(is_trivia("  \n// comment\n/* block\n */\n"));
    assert!(is_trivia("/* unterminated"));
    assert!(!is_trivia("// ok\nlet x;"));
    assert!(is_trivia("#!/usr/bin/env node\r\n// comment\n"));
    assert!(!is_trivia("\n#!/usr/bin/env node\n"));
}

#[test]
fn lines_tile_the_document() {
    let text = "a\r\nb\nc\rd";
    let collected: Vec<_> = lines(text).map(|l| (l.text, l.start, l.end)).collect();
    assert_eq!(
        collected,
        vec![("a", 0, 3), ("b", 3, 5), ("c", 5, 7), ("d", 7, 8)]
    );
}

fn body() -> impl Strategy<Value = String> {
    // Bodies never contain directive lines.
    prop::collection::vec("[a-z ;=(){}.0-9]{0,12}", 0..4).prop_map(|lines| {
        lines
            .into_iter()
            .map(|mut l| {
                l.push('\n');
                l
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn marker_free_document_is_whole_content(text in "[^@]*") {
        let split = split_document(&doc("dir/case.ts", &text));
        prop_assert_eq!(split.units.len(), 1);
        prop_assert_eq!(split.units[0].content.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn n_markers_yield_n_units_in_order(bodies in prop::collection::vec(body(), 1..6)) {
        let mut text = String::new();
        for (i, body) in bodies.iter().enumerate() {
            text.push_str(&format!("// @filename: f{i}.ts\n"));
            text.push_str(body);
        }
        let split = split_document(&doc("case.ts", &text));
        prop_assert_eq!(split.units.len(), bodies.len());
        for (i, (unit, body)) in split.units.iter().zip(&bodies).enumerate() {
            prop_assert_eq!(&unit.name, &format!("f{i}.ts"));
            prop_assert_eq!(unit.ordinal, i);
            prop_assert_eq!(unit.content.as_deref(), Some(body.as_str()));
        }
    }
}
