//! Markdown to sanitized HTML for `inner_html`.

use pulldown_cmark::{html, Options, Parser};

/// Renders GitHub-flavoured markdown and strips anything unsafe
/// (scripts, event handlers, `javascript:` links).
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(source, options);
    let mut raw = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut raw, parser);

    sanitize_html(&raw)
}

/// Default ammonia whitelist plus the read-only checkboxes of task lists.
fn sanitize_html(html: &str) -> String {
    ammonia::Builder::default()
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .add_generic_attributes(&["class"])
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_lists() {
        let html = render_markdown("## 培养目标\n\n- 数学\n- 物理\n");
        assert!(html.contains("<h2>培养目标</h2>"));
        assert!(html.contains("<li>数学</li>"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = render_markdown("| 课程 | 学分 |\n|---|---|\n| 高数 | 6 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>高数</td>"));
    }

    #[test]
    fn test_strikethrough_enabled() {
        let html = render_markdown("~~old~~");
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_script_removed() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_event_handlers_removed() {
        let html = render_markdown("<img src=\"x.png\" onerror=\"alert(1)\">");
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_task_list_checkbox_kept() {
        let html = render_markdown("- [x] 已选课程\n");
        assert!(html.contains("<input"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
