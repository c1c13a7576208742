/// The file name a résumé owned by `owner` is saved as.
///
/// Every run of whitespace in the name becomes a single underscore, and
/// `_Resume.pdf` is appended. Path separators (`/`, `\`) and NUL characters
/// are replaced with an underscore each, so the result is always a plain file
/// name. Nothing else is changed.
pub fn export_file_name(owner: &str) -> String {
    let mut file_name = String::with_capacity(owner.len() + 11);
    let mut in_whitespace = false;

    for c in owner.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                file_name.push('_');
            }
            in_whitespace = true;
        } else if matches!(c, '/' | '\\' | '\0') {
            file_name.push('_');
            in_whitespace = false;
        } else {
            file_name.push(c);
            in_whitespace = false;
        }
    }

    file_name.push_str("_Resume.pdf");
    file_name
}
