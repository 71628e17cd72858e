/// Body served by the repair bay when the session has no damaged system yet.
pub const REPAIR_BAY_REFERRAL: &str =
    "Please refer to our Status service to assess your requirements.";

/// Renders the repair bay page for a damaged system.
///
/// The page is intentionally bare: a title and a single `anchor-point`
/// element holding the repair code, which is what clients scrape.
pub fn render_repair_bay_html(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Repair</title>
</head>
<body>
<div class="anchor-point">{code}</div>
</body>
</html>"#
    )
}
