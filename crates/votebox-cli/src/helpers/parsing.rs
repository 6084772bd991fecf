//! Parsing helpers for command arguments.

use votebox_core::CategoryFilter;

use crate::errors::CliError;
use crate::ui::OutputFormat;

/// Parse an optional `--format` value.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid --format value: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse an optional `--category` value; absent means every category.
pub fn parse_category_filter(value: Option<&str>) -> anyhow::Result<CategoryFilter> {
    let Some(raw) = value else {
        return Ok(CategoryFilter::All);
    };
    raw.parse::<CategoryFilter>().map_err(|_| {
        CliError::invalid_input(format!(
            "Unknown category: {} (use all, project, feature, improvement, or other)",
            raw
        ))
        .into()
    })
}

/// Trim an item id argument and reject blanks.
pub fn parse_item_id(value: &str) -> anyhow::Result<&str> {
    let id = value.trim();
    if id.is_empty() {
        return Err(CliError::invalid_input("Item ID cannot be empty").into());
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use votebox_core::Category;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!(parse_category_filter(None).unwrap(), CategoryFilter::All);
        assert_eq!(
            parse_category_filter(Some("feature")).unwrap(),
            CategoryFilter::Only(Category::Feature)
        );
        assert_eq!(
            parse_category_filter(Some("prosjekt")).unwrap(),
            CategoryFilter::Only(Category::Project)
        );
    }

    #[test]
    fn test_unknown_category_is_invalid_input() {
        let err = parse_category_filter(Some("bugs")).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("bugs"));
    }

    #[test]
    fn test_parse_item_id_trims() {
        assert_eq!(parse_item_id(" 3 ").unwrap(), "3");
        assert!(parse_item_id("   ").is_err());
    }
}
