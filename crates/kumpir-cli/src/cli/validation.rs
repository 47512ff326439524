/// Parse an item id argument.
///
/// Ids are trimmed and must be non-empty without inner whitespace. Whether
/// the id exists is checked later against the loaded catalog.
///
/// # Errors
///
/// Returns an error message if the id is empty or contains whitespace.
pub fn parse_item_id(s: &str) -> Result<String, String> {
    let id = s.trim();
    if id.is_empty() {
        return Err("Item id cannot be empty".to_string());
    }
    if id.chars().any(char::is_whitespace) {
        return Err(format!("Item id cannot contain whitespace: '{}'", id));
    }
    Ok(id.to_string())
}

/// Parse a category name argument. Names may contain spaces.
pub fn parse_category(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("Category name cannot be empty".to_string());
    }
    Ok(name.to_string())
}
