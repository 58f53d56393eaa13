use cas_attrs::ErrorKind;
use cas_error::Error;

#[derive(Debug, ErrorKind)]
#[error(message = "unexpected end of input", labels = ["add something here"])]
struct UnexpectedEnd;

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function", "applied here"],
    help = "check the spelling of the function name",
    note = "supported functions are listed with `help`",
)]
struct UnknownName {
    name: String,
}

/// Renders the error against the given source, without colors.
fn render(error: &Error, src: &str) -> String {
    let mut buf = Vec::new();
    error.write_report("input", src, &mut buf).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn unit_struct_report() {
    let src = "3 + ";
    let error = Error::new(vec![4..4], UnexpectedEnd);
    let out = render(&error, src);

    assert!(out.contains("unexpected end of input"), "{}", out);
    assert!(out.contains("add something here"), "{}", out);
}

#[test]
fn named_fields_report() {
    let src = "sinn(x)";
    let error = Error::new(vec![0..4, 4..7], UnknownName { name: "sinn".to_string() });
    let out = render(&error, src);

    assert!(out.contains("unknown function `sinn`"), "{}", out);
    assert!(out.contains("this function"), "{}", out);
    assert!(out.contains("applied here"), "{}", out);
    assert!(out.contains("check the spelling"), "{}", out);
    assert!(out.contains("supported functions"), "{}", out);
}

#[test]
fn more_spans_than_labels() {
    let src = "(1 + 2";
    let error = Error::new(vec![0..1, 6..6], UnexpectedEnd);
    let out = render(&error, src);

    assert!(out.contains("unexpected end of input"), "{}", out);
}
