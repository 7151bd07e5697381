use super::*;

fn first_path<'a>(doc: &'a roxmltree::Document<'a>) -> roxmltree::Node<'a, 'a> {
    doc.descendants()
        .find(|n| n.has_tag_name("path"))
        .unwrap()
}

#[test]
fn own_attributes_win_over_inherited_ones() {
    let src = r##"<svg xmlns="http://www.w3.org/2000/svg" fill="blue">
  <g fill="#111111" stroke="none" stroke-width="2">
    <g fill="#000000">
      <path d="M0,0 L1,0 L1,1 Z" stroke="red"/>
    </g>
  </g>
</svg>"##;
    let doc = roxmltree::Document::parse(src).unwrap();
    let style = StyleAttributes::resolve(first_path(&doc), &WriterConfig::default());

    assert_eq!(style.get("fill"), Some("#000000"));
    assert_eq!(style.get("stroke"), Some("red"));
    assert_eq!(style.get("stroke-width"), Some("2"));
    assert_eq!(style.get("fill-rule"), None);
    assert_eq!(style.len(), 3);
}

#[test]
fn only_group_ancestors_are_inherited_from() {
    let src = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="blue"><path d="M0,0 L1,1"/></svg>"#;
    let doc = roxmltree::Document::parse(src).unwrap();
    let style = StyleAttributes::resolve(first_path(&doc), &WriterConfig::default());
    assert!(style.is_empty());
}

#[test]
fn groups_from_other_namespaces_are_ignored() {
    let src = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:other">
  <x:g fill="green"><path d="M0,0 L1,1"/></x:g>
</svg>"#;
    let doc = roxmltree::Document::parse(src).unwrap();
    let style = StyleAttributes::resolve(first_path(&doc), &WriterConfig::default());
    assert_eq!(style.get("fill"), None);
}

#[test]
fn set_accepts_only_recognized_names() {
    let mut style = StyleAttributes::new();
    assert!(style.set("fill", "#000"));
    assert!(!style.set("transform", "scale(2)"));
    assert_eq!(style.iter().collect::<Vec<_>>(), vec![("fill", "#000")]);
}

#[test]
fn even_odd_override_strips_css_fill_rule() {
    let mut style = StyleAttributes::new();
    style.set("fill-rule", "nonzero");
    style.set("style", "fill:#000; fill-rule: nonzero ;stroke:none");
    style.force_even_odd();

    assert_eq!(style.get("fill-rule"), Some("evenodd"));
    assert_eq!(style.get("style"), Some("fill:#000;stroke:none"));

    let mut only_rule = StyleAttributes::new();
    only_rule.set("style", "FILL-RULE:nonzero");
    only_rule.force_even_odd();
    assert_eq!(only_rule.get("style"), None);
    assert_eq!(only_rule.get("fill-rule"), Some("evenodd"));
}
