use super::*;
use crate::document::TestCategory;

fn unit(name: &str, content: Option<&str>) -> TestUnit {
    TestUnit {
        name: name.to_string(),
        content: content.map(str::to_string),
        ordinal: 0,
        parent_document_id: "doc.ts".to_string(),
        parent_category: TestCategory::Conformance,
    }
}

#[test]
fn source_kinds() {
    assert_eq!(SourceKind::from_name("a.ts"), Some(SourceKind::TypeScript));
    assert_eq!(SourceKind::from_name("a.cts"), Some(SourceKind::TypeScript));
    assert_eq!(SourceKind::from_name("dir/a.tsx"), Some(SourceKind::TypeScriptJsx));
    assert_eq!(SourceKind::from_name("a.mjs"), Some(SourceKind::JavaScript));
    assert_eq!(SourceKind::from_name("a.jsx"), Some(SourceKind::JavaScriptJsx));
    assert_eq!(SourceKind::from_name("lib.d.ts"), Some(SourceKind::Declaration));
    assert_eq!(SourceKind::from_name("x.d.mts"), Some(SourceKind::Declaration));
    assert_eq!(SourceKind::from_name("a.js.map"), None);
    assert_eq!(SourceKind::from_name("package.json"), None);
    assert_eq!(SourceKind::from_name("Makefile"), None);
}

#[test]
fn jsx_follows_template_variants() {
    assert_eq!(SourceKind::TypeScriptJsx.jsx(), JsxSyntax::Enabled);
    assert_eq!(SourceKind::JavaScriptJsx.jsx(), JsxSyntax::Enabled);
    assert_eq!(SourceKind::TypeScript.jsx(), JsxSyntax::Disabled);
}

#[test]
fn eligible_units() {
    assert!(is_eligible(&unit("a.ts", Some("let x = 1;"))));
    assert!(is_eligible(&unit("nested/b.jsx", Some("<a/>"))));
    assert_eq!(eligible_content(&unit("a.ts", Some(" 1; "))), Some(" 1; "));
}

#[test]
fn ineligible_units() {
    assert!(!is_eligible(&unit("a.ts", None)));
    assert!(!is_eligible(&unit("a.ts", Some(" \n\t"))));
    assert!(!is_eligible(&unit("a.d.ts", Some("declare const x: number;"))));
    assert!(!is_eligible(&unit("tsconfig.json", Some("{}"))));
    assert!(!is_eligible(&unit("a.js.map", Some("{}"))));
}
