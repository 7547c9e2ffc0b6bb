use indexmap::IndexMap;
use tagtree::{AttrValue, AttributeSet, ErrorKind, Result};

fn stumpy() -> Result<AttributeSet> {
    AttributeSet::parse(r#"class="stumpy""#)
}

fn baby() -> Result<AttributeSet> {
    AttributeSet::parse([("src", "angry-baby.jpg"), ("class", "stumpy")])
}

#[test]
fn test_adds_string_attributes() -> Result<()> {
    let mut attrs = stumpy()?;
    attrs.add(r#"class="killer""#)?;
    assert_eq!(attrs.render(), r#"class="stumpy killer""#);
    Ok(())
}

#[test]
fn test_adds_map_with_string_values() -> Result<()> {
    let mut attrs = stumpy()?;
    attrs.add([("id", "killer")])?;
    assert_eq!(attrs.render(), r#"class="stumpy" id="killer""#);
    Ok(())
}

#[test]
fn test_adds_map_with_list_values() -> Result<()> {
    let mut attrs = stumpy()?;
    attrs.add([("class", vec!["killer"])])?;
    assert_eq!(attrs.render(), r#"class="stumpy killer""#);
    Ok(())
}

#[test]
fn test_list_values_are_not_split() -> Result<()> {
    let mut attrs = AttributeSet::new();
    attrs.add([("title", AttrValue::List(vec!["two words".to_string()]))])?;
    assert_eq!(attrs.get("title"), Some(&["two words".to_string()][..]));
    Ok(())
}

#[test]
fn test_absent_input_is_a_no_op() -> Result<()> {
    let mut attrs = stumpy()?;
    attrs.add(None::<&str>)?;
    attrs.add("")?;
    assert_eq!(attrs.render(), r#"class="stumpy""#);
    Ok(())
}

#[test]
fn test_value_and_set_accessors() -> Result<()> {
    let mut attrs = stumpy()?;
    attrs.add(r#"id="killer""#)?;
    assert_eq!(attrs.value("id").as_deref(), Some("killer"));

    attrs.set("id", "other");
    assert_eq!(attrs.value("id").as_deref(), Some("other"));
    Ok(())
}

#[test]
fn test_replace_with_map() -> Result<()> {
    let mut attrs = baby()?;
    attrs.replace([("class", "new hotness")])?;
    assert_eq!(attrs.render(), r#"src="angry-baby.jpg" class="new hotness""#);
    assert_eq!(
        attrs.get("class"),
        Some(&["new".to_string(), "hotness".to_string()][..])
    );
    Ok(())
}

#[test]
fn test_replace_with_string() -> Result<()> {
    let mut attrs = baby()?;
    attrs.replace(r#"class="new hotness""#)?;
    assert_eq!(attrs.render(), r#"src="angry-baby.jpg" class="new hotness""#);
    Ok(())
}

#[test]
fn test_duplicate_names_in_one_string() -> Result<()> {
    let mut attrs = baby()?;
    attrs.add(r#"class="new" class="hotness""#)?;
    assert_eq!(
        attrs.render(),
        r#"src="angry-baby.jpg" class="stumpy new hotness""#
    );
    Ok(())
}

#[test]
fn test_duplicate_values_are_kept() -> Result<()> {
    let attrs = AttributeSet::parse([("class", "a a")])?;
    assert_eq!(attrs.render(), r#"class="a a""#);
    Ok(())
}

#[test]
fn test_delete_single_name() -> Result<()> {
    let mut attrs = baby()?;
    attrs.delete("class");
    assert_eq!(attrs.render(), r#"src="angry-baby.jpg""#);
    Ok(())
}

#[test]
fn test_delete_name_list() -> Result<()> {
    let mut attrs = baby()?;
    attrs.delete(["class", "src"]);
    assert_eq!(attrs.render(), "");
    assert!(attrs.is_empty());
    Ok(())
}

#[test]
fn test_empty_values_are_skipped() -> Result<()> {
    let mut attrs = baby()?;
    attrs.add(r#"alt="""#)?;
    attrs.add([("title", "   ")])?;
    assert_eq!(attrs.get("alt"), None);
    assert_eq!(attrs.get("title"), None);
    assert_eq!(attrs.render(), r#"src="angry-baby.jpg" class="stumpy""#);

    attrs.add([("class", "")])?;
    assert_eq!(attrs.value("class").as_deref(), Some("stumpy"));

    attrs.add(r#"alt="alt text""#)?;
    assert_eq!(
        attrs.render(),
        r#"src="angry-baby.jpg" class="stumpy" alt="alt text""#
    );
    Ok(())
}

#[test]
fn test_empty_value_removes_on_set_and_replace() -> Result<()> {
    let mut attrs = baby()?;
    attrs.set("src", "   ");
    assert_eq!(attrs.get("src"), None);
    attrs.replace(r#"class="""#)?;
    assert_eq!(attrs.get("class"), None);
    assert!(attrs.is_empty());
    Ok(())
}

#[test]
fn test_reordered_sets_are_not_equal() -> Result<()> {
    let mut reordered = AttributeSet::parse([("class", "stumpy")])?;
    reordered.add([("src", "angry-baby.jpg")])?;
    assert_ne!(reordered, baby()?);
    assert_ne!(reordered.render(), baby()?.render());
    Ok(())
}

#[test]
fn test_round_trip_attribute_string() -> Result<()> {
    let attrs = AttributeSet::parse(r#"class="a b" id="c""#)?;
    assert_eq!(attrs.render(), r#"class="a b" id="c""#);
    assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["class", "id"]);
    Ok(())
}

#[test]
fn test_indexmap_input() -> Result<()> {
    let mut map = IndexMap::new();
    map.insert("data-x", "1");
    map.insert("class", "wide tall");
    let attrs = AttributeSet::parse(map)?;
    assert_eq!(attrs.render(), r#"data-x="1" class="wide tall""#);
    Ok(())
}

#[test]
fn test_unterminated_quote_is_a_format_error() -> Result<()> {
    let mut attrs = baby()?;
    let before = attrs.clone();

    let err = attrs.add(r#"id="open"#).err();
    assert!(err.as_ref().is_some_and(|e| e.is_format()));
    assert!(matches!(
        err.as_ref().map(|e| e.kind()),
        Some(ErrorKind::UnterminatedValue { .. })
    ));
    assert_eq!(attrs, before);
    assert_eq!(attrs.render(), before.render());

    assert!(attrs.replace(r#"class="x" src="y"#).is_err());
    assert_eq!(attrs.render(), before.render());
    Ok(())
}

#[test]
fn test_parse_failure_at_construction() {
    let err = AttributeSet::parse(r#"class="a"#).err();
    assert!(err.is_some_and(|e| e.is_format() && e.pos().is_some()));
}
