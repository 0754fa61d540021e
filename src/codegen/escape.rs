/// Escapes text for a double-quoted C# string literal.
///
/// Backslashes go first so the escapes added for quotes and line breaks are
/// not doubled. Absent input renders as an empty string.
pub fn escape_literal<'a>(value: impl Into<Option<&'a str>>) -> String {
    let Some(value) = value.into() else {
        return String::new();
    };

    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
