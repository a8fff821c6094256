use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_message_html("**Top holdings**\n\n- AAPL\n- MSFT\n");
    assert!(html.contains("<strong>Top holdings</strong>"));
    assert!(html.contains("<li>AAPL</li>"));
}

#[test]
fn renders_tables() {
    let html = render_message_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
}

#[test]
fn strips_raw_html() {
    let html = render_message_html("hi <script>alert(1)</script>\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("hi"));
}
