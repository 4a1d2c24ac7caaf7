/// Path composition for vault navigation.
///
/// Paths are plain `/`-joined segment lists with no leading or trailing
/// separator. The vault root is the empty string. Segments are used as-is;
/// whoever produced the navigation context owns their validity.

/// Canonical path of the folder a navigation context points at.
pub fn folder_path(context: &[String]) -> String {
    context.join("/")
}

/// Canonical path of a named entry inside the current folder.
pub fn entry_path(context: &[String], name: &str) -> String {
    if context.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder_path(context), name)
    }
}
