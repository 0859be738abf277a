//! Standalone HTML page embedding a diagram.

use crate::config::HtmlConfig;

/// Escape text for use inside HTML element content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for use inside a double-quoted HTML attribute.
fn escape_attribute(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Render a standalone page that draws `diagram` in the browser.
///
/// The page loads the diagram script from the configured URL and initializes
/// it with the configured theme. The diagram text is HTML-escaped; the script
/// reads it back as text content, so arrows such as `-->` survive intact.
pub fn render_page(diagram: &str, config: &HtmlConfig) -> String {
    let script_url = escape_attribute(config.script_url());
    // A JSON string literal is also a valid JavaScript string literal
    let theme = serde_json::to_string(config.theme())
        .unwrap_or_else(|_| "\"default\"".to_string())
        .replace("</", "<\\/");
    let height = config.height();
    let diagram = escape_text(diagram);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Diagram</title>
    <script src="{script_url}"></script>
    <script>
        mermaid.initialize({{
            startOnLoad: true,
            theme: {theme},
            securityLevel: 'loose',
            flowchart: {{ htmlLabels: true }}
        }});
    </script>
    <style>
        body {{
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 10px;
        }}
        .mermaid {{
            text-align: center;
            min-height: {height}px;
        }}
    </style>
</head>
<body>
    <div class="mermaid">
{diagram}
    </div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_escaped_diagram() {
        let page = render_page("flowchart TD\n    A[a & b] --> B", &HtmlConfig::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("flowchart TD\n    A[a &amp; b] --&gt; B"));
        assert!(!page.contains("-->"));
    }

    #[test]
    fn test_page_uses_config() {
        let config = HtmlConfig::new(720, "dark", "https://example.com/d.js?a=1&b=2");
        let page = render_page("sequenceDiagram\n    A->>B: hi", &config);
        assert!(page.contains(r#"<script src="https://example.com/d.js?a=1&amp;b=2"></script>"#));
        assert!(page.contains(r#"theme: "dark","#));
        assert!(page.contains("min-height: 720px;"));
    }

    #[test]
    fn test_theme_cannot_close_script() {
        let config = HtmlConfig::new(500, "x</script><script>alert(1)", "s.js");
        let page = render_page("classDiagram", &config);
        assert_eq!(page.matches("</script>").count(), 2);
    }

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_text("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape_attribute("\"&"), "&quot;&amp;");
    }
}
