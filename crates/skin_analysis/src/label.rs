//! Narrows raw OCR text of a product label down to its ingredient section.

use std::sync::LazyLock;

use regex::Regex;

const SECTION_MARKERS: [&str; 4] = ["ingredients:", "ingredient:", "contains:", "composition:"];

const STOP_MARKERS: [&str; 19] = [
    "directions:",
    "direction:",
    "how to use:",
    "usage:",
    "use:",
    "warning:",
    "caution:",
    "keep out",
    "address:",
    "made in",
    "manufactured",
    "distributed",
    "net wt",
    "net weight",
    "storage:",
    "store",
    "expiry",
    "exp date",
    "best before",
];

const MIN_COMMAS_FOR_LIST: usize = 3;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s,()]").expect("static pattern"));

/// Ingredient text found in `ocr_text`, or an empty string when the label
/// shows nothing that looks like an ingredient list.
pub fn extract_ingredient_section(ocr_text: &str) -> String {
    let text = ocr_text.to_lowercase();
    let section = marked_section(&text)
        .or_else(|| comma_heavy_line(&text))
        .unwrap_or_default();

    let flattened = section.replace('\n', " ");
    DISALLOWED.replace_all(&flattened, "").trim().to_string()
}

fn marked_section(text: &str) -> Option<&str> {
    let (marker, start) = SECTION_MARKERS
        .iter()
        .find_map(|m| text.find(m).map(|idx| (m, idx)))?;
    let rest = &text[start + marker.len()..];
    let end = STOP_MARKERS
        .iter()
        .filter_map(|stop| rest.find(stop))
        .min()
        .unwrap_or(rest.len());
    let section = &rest[..end];
    (!section.is_empty()).then_some(section)
}

fn comma_heavy_line(text: &str) -> Option<&str> {
    text.lines()
        .find(|line| line.matches(',').count() >= MIN_COMMAS_FOR_LIST)
}

#[cfg(test)]
mod tests {
    use super::extract_ingredient_section;

    #[test]
    fn cuts_between_marker_and_stop_word() {
        let ocr = "GLOW SERUM 30ml\nIngredients: Aqua, Glycerin,\nNiacinamide, Parfum*.\n\
                   Directions: apply twice daily";
        assert_eq!(
            extract_ingredient_section(ocr),
            "aqua, glycerin, niacinamide, parfum"
        );
    }

    #[test]
    fn earliest_stop_marker_wins() {
        let ocr = "contains: water, aloe (leaf) made in korea. warning: external use";
        assert_eq!(extract_ingredient_section(ocr), "water, aloe (leaf)");
    }

    #[test]
    fn falls_back_to_comma_heavy_line() {
        let ocr = "Hydrating Cream\nwater, glycerin, squalane, ceramide np\n50 ml";
        assert_eq!(
            extract_ingredient_section(ocr),
            "water, glycerin, squalane, ceramide np"
        );
    }

    #[test]
    fn empty_marked_section_falls_back_to_comma_line() {
        let ocr = "Ingredients:Directions: rinse well
water, glycerin, squalane, ceramide np";
        assert_eq!(
            extract_ingredient_section(ocr),
            "water, glycerin, squalane, ceramide np"
        );
    }

    #[test]
    fn marker_followed_by_newline_yields_nothing() {
        let ocr = "Ingredients:\nDirections: rinse\nwater, glycerin, squalane, ceramide np";
        assert_eq!(extract_ingredient_section(ocr), "");
    }

    #[test]
    fn nothing_recognisable_is_empty() {
        assert_eq!(extract_ingredient_section("Hydrating Cream\n50 ml"), "");
    }
}
