use pretty_assertions::assert_eq;

use super::*;

#[test]
fn scenario_public_function() {
    let sigs = parse_and_extract(&go("func Public(a string) int { return 0 }"));
    assert_eq!(texts(&sigs), vec!["func Public(a string) int"]);
    assert_eq!(sigs[0].kind, SignatureKind::Function);
}

#[test]
fn zero_params_render_empty_parens() {
    let sigs = parse_and_extract(&go("func Run() {}"));
    assert_eq!(texts(&sigs), vec!["func Run()"]);
}

#[test]
fn multiple_results_are_parenthesized() {
    let sigs = parse_and_extract(SAMPLE);
    assert_eq!(
        find_by_name(&sigs, "NewServer").text,
        "func NewServer(cfg *Config, opts ...Option) (*Server, error)"
    );
}

#[test]
fn named_results_are_parenthesized() {
    let sigs = parse_and_extract(&go("func Split(s string) (head, tail string) { return }"));
    assert_eq!(
        texts(&sigs),
        vec!["func Split(s string) (head string, tail string)"]
    );
}

#[test]
fn grouped_params_are_expanded() {
    let sigs = parse_and_extract(&go("func Add(a, b int) int { return a + b }"));
    assert_eq!(texts(&sigs), vec!["func Add(a int, b int) int"]);
}

#[test]
fn parenthesized_pointer_result_is_normalized() {
    let sigs = parse_and_extract(&go("func Get() (*Thing) { return nil }"));
    assert_eq!(texts(&sigs), vec!["func Get() *Thing"]);
}

#[test]
fn method_receiver_is_dropped() {
    let sigs = parse_and_extract(SAMPLE);
    let start = find_by_name(&sigs, "Start");
    assert_eq!(start.kind, SignatureKind::Method);
    assert_eq!(
        start.text,
        "func Start(addr string, timeout time.Duration) error"
    );
}

#[test]
fn generic_type_parameters_are_stripped() {
    let sigs = parse_and_extract(SAMPLE);
    assert_eq!(
        find_by_name(&sigs, "Map").text,
        "func Map(xs []T, f func(T) U) []U"
    );
}

#[test]
fn channel_directions_in_signatures() {
    let sigs = parse_and_extract(SAMPLE);
    assert_eq!(
        find_by_name(&sigs, "Subscribe").text,
        "func Subscribe() <-chan string"
    );
    assert_eq!(
        find_by_name(&sigs, "Publish").text,
        "func Publish(out chan<- string, msg string)"
    );
}

#[test]
fn local_declarations_are_not_top_level() {
    let sigs = extract_with(SAMPLE, &all_config());
    assert!(sigs.iter().all(|s| s.name != "local"));
}

#[test]
fn indented_top_level_declarations_are_found() {
    let sigs = parse_and_extract("package p\n\n    func Indented() {}\n");
    assert_eq!(texts(&sigs), vec!["func Indented()"]);
}
