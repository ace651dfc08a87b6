use pretty_assertions::assert_eq;

use super::*;

#[test]
fn interface_methods_and_embeds() {
    let sigs = parse_and_extract(SAMPLE);
    assert_eq!(
        find_by_name(&sigs, "Store").text,
        "type Store interface { io.Closer; Get(key string) ([]byte, error); Put(key string, value []byte) (err error) }"
    );
}

#[test]
fn empty_interface() {
    let sigs = parse_and_extract(SAMPLE);
    assert_eq!(find_by_name(&sigs, "Empty").text, "type Empty interface{}");
}

#[test]
fn constraint_unions() {
    let sigs = parse_and_extract(SAMPLE);
    let text = &find_by_name(&sigs, "Number").text;
    assert!(text.starts_with("type Number interface { "), "{text}");
    assert!(text.contains("~int | ~int64 | ~float64"), "{text}");
}

#[test]
fn method_without_results() {
    let sigs = parse_and_extract(&go("type Closer interface {\n\tClose()\n}"));
    assert_eq!(texts(&sigs), vec!["type Closer interface { Close() }"]);
}
