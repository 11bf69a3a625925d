/// Turns a submission label such as `"Garcia, Maria_12345_assignsubmission_file"`
/// into `"Maria_Garcia"`. Labels without an underscore, or whose first
/// underscore segment has no comma, are returned unchanged.
pub fn extract_name(raw_label: &str) -> String {
    if let Some((first_segment, _)) = raw_label.split_once('_') {
        if let Some((last, first)) = first_segment.split_once(',') {
            return format!("{}_{}", first.trim(), last.trim());
        }
    }

    raw_label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_last_first_and_drops_submission_metadata() {
        assert_eq!(
            extract_name("Garcia, Maria_12345_assignsubmission_file"),
            "Maria_Garcia"
        );
        assert_eq!(
            extract_name("Puig i Ferrer ,  Joan Carles _998_assignsubmission_file"),
            "Joan Carles_Puig i Ferrer"
        );
    }

    #[test]
    fn splits_on_first_comma_only() {
        assert_eq!(extract_name("Garcia, Maria, Jr_1"), "Maria, Jr_Garcia");
    }

    #[test]
    fn passes_through_labels_without_the_expected_shape() {
        assert_eq!(extract_name("foo_bar"), "foo_bar");
        assert_eq!(extract_name("Maria_Garcia"), "Maria_Garcia");
        assert_eq!(extract_name("Garcia, Maria"), "Garcia, Maria");
        assert_eq!(extract_name(""), "");
    }
}
