use symptom_core::DiagnosisResult;

/// Placeholder shown while a query is in flight
pub const LOADING_HTML: &str = r#"<p class="loading">Searching...</p>"#;

macro_rules! error_message {
    () => {
        "An error occurred. Please try again later."
    };
}

/// The one message every failed query shows
pub const ERROR_MESSAGE: &str = error_message!();

pub const ERROR_HTML: &str = concat!("<p class=\"error\">", error_message!(), "</p>");

/// Turns a diagnosis into the two-block results fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRenderer {
    escape: bool,
}

impl Default for ResultRenderer {
    fn default() -> Self {
        Self::escaped()
    }
}

impl ResultRenderer {
    /// Server text is escaped before it reaches the markup.
    pub fn escaped() -> Self {
        Self { escape: true }
    }

    /// Server text is interpolated verbatim. Only safe against a trusted endpoint.
    pub fn raw() -> Self {
        Self { escape: false }
    }

    pub fn new(escape: bool) -> Self {
        Self { escape }
    }

    pub fn render(&self, result: &DiagnosisResult) -> String {
        let diagnosis = self.text(&result.diagnosis);
        let recommendation = self.text(&result.recommendation);

        format!(
            concat!(
                "<div class=\"result-block diagnosis\">",
                "<h3>Possible Condition</h3>",
                "<p><strong>{}</strong> <span class=\"confidence\">(Confidence: {}%)</span></p>",
                "</div>",
                "<div class=\"result-block recommendation\">",
                "<h3>Recommendation</h3>",
                "<p>{}</p>",
                "</div>"
            ),
            diagnosis,
            result.confidence_percent(),
            recommendation
        )
    }

    fn text(&self, value: &str) -> String {
        if self.escape {
            escape_html(value)
        } else {
            value.to_string()
        }
    }
}

/// Escapes text for an HTML text or quoted-attribute context.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(diagnosis: &str, confidence: f64, recommendation: &str) -> DiagnosisResult {
        DiagnosisResult {
            diagnosis: diagnosis.to_string(),
            confidence,
            recommendation: recommendation.to_string(),
        }
    }

    #[test]
    fn test_blocks_in_fixed_order() {
        let html = ResultRenderer::default().render(&result(
            "Tension Headache",
            0.85,
            "Rest and hydrate",
        ));

        let name = html.find("Tension Headache").unwrap();
        let percent = html.find("85%").unwrap();
        let advice = html.find("Rest and hydrate").unwrap();
        assert!(name < percent && percent < advice);

        let diagnosis_block = html.find("result-block diagnosis").unwrap();
        let recommendation_block = html.find("result-block recommendation").unwrap();
        assert!(diagnosis_block < recommendation_block);
        assert_eq!(html.matches("<div class=\"result-block").count(), 2);
    }

    #[test]
    fn test_percentage_rounding() {
        let renderer = ResultRenderer::default();
        assert!(renderer.render(&result("A", 0.854, "B")).contains("85%"));
        assert!(renderer.render(&result("A", 0.855, "B")).contains("86%"));
    }

    #[test]
    fn test_escaping_does_not_change_plain_text() {
        let plain = result("Tension Headache", 0.85, "Rest and hydrate");
        assert_eq!(
            ResultRenderer::escaped().render(&plain),
            ResultRenderer::raw().render(&plain)
        );
    }

    #[test]
    fn test_markup_in_fields_is_escaped() {
        let hostile = result("<img src=x onerror=alert(1)>", 0.5, "Tom & \"Jerry\"");

        let html = ResultRenderer::escaped().render(&hostile);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));

        let raw = ResultRenderer::raw().render(&hostile);
        assert!(raw.contains("<img src=x onerror=alert(1)>"));
    }

    #[test]
    fn test_error_markup_wraps_message() {
        assert_eq!(ERROR_HTML, format!("<p class=\"error\">{}</p>", ERROR_MESSAGE));
    }
}
