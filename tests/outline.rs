use court_markdown::{convert, detect_marker};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn render(markdown: &str) -> String {
    convert(markdown).expect("non-blank input converts")
}

#[test]
fn marked_heading_nests_numbered_items() {
    let html = render("# 第1　請求の趣旨\n1　被告は、原告に対し金100万円を支払え。\n2　訴訟費用は被告の負担とする。");
    let expected = concat!(
        "<ol class=\"lvl1\">\n",
        "    <li>\n",
        "        <h2>請求の趣旨</h2>\n",
        "    <ol class=\"lvl2\">\n",
        "        <li>\n",
        "            <p>被告は、原告に対し金100万円を支払え。</p>\n",
        "        </li>\n",
        "        <li>\n",
        "            <p>訴訟費用は被告の負担とする。</p>\n",
        "    </li>\n",
        "    </ol>\n",
        "</li>\n",
        "</ol>\n",
    );
    assert_eq!(html, expected);
}

#[test]
fn continuation_lines_stay_in_the_current_item() {
    let html = render("第1　総論\n本文の続き");
    let expected = concat!(
        "<ol class=\"lvl1\">\n",
        "    <li>\n",
        "        <p>総論</p>\n",
        "        <p>本文の続き</p>\n",
        "</li>\n",
        "</ol>\n",
    );
    assert_eq!(html, expected);
}

#[test]
fn text_before_any_marker_is_top_level() {
    assert_eq!(render("前文です。"), "<p>前文です。</p>\n");
}

#[test]
fn unmarked_heading_closes_the_outline() {
    let html = render("第1　事実\n1　契約\n# 結論\n本件請求は理由がある。");
    assert!(html.ends_with("</ol>\n<h1>結論</h1>\n<p>本件請求は理由がある。</p>\n"));
}

#[test]
fn first_list_opens_directly_at_marker_depth() {
    let html = render("(1)　いきなり三段目");
    let expected = concat!(
        "        <ol class=\"lvl3\">\n",
        "            <li>\n",
        "                <p>いきなり三段目</p>\n",
        "        </li>\n",
        "        </ol>\n",
    );
    assert_eq!(html, expected);
}

#[test]
fn deeper_markers_open_every_intermediate_level() {
    let html = render("第1　総論\n(1)　詳細");
    assert!(html.contains("<ol class=\"lvl2\">"));
    assert!(html.contains("<ol class=\"lvl3\">"));
    assert_eq!(html.matches("<ol ").count(), 3);
    assert_eq!(html.matches("</ol>").count(), 3);
}

#[test]
fn jump_then_shallower_marker_stays_balanced() {
    let html = render("ア　四段目\n第1　一段目\na　六段目\n2　二段目");
    assert_eq!(html.matches("<ol ").count(), html.matches("</ol>").count());
    assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
}

#[rstest]
#[case("第12　主張", 1, "第12", "主張")]
#[case("3　理由", 2, "3", "理由")]
#[case("(4)　小項目", 3, "(4)", "小項目")]
#[case("イ　細目", 4, "イ", "細目")]
#[case("(ウ) 細々目", 5, "(ウ)", "細々目")]
#[case("b　英字", 6, "b", "英字")]
#[case("(c)　括弧英字", 7, "(c)", "括弧英字")]
#[case("## 第2　見出し", 1, "第2", "見出し")]
fn marker_grammar_levels(
    #[case] line: &str,
    #[case] level: u8,
    #[case] marker: &str,
    #[case] text: &str,
) {
    let marked = detect_marker(line).expect("marker detected");
    assert_eq!(marked.level, level);
    assert_eq!(marked.marker, marker);
    assert_eq!(marked.text, text);
}

#[rstest]
#[case("第1章")]
#[case("12月")]
#[case("(1)説明")]
#[case("アイウ")]
#[case("本文")]
fn markers_need_a_following_space(#[case] line: &str) {
    assert_eq!(detect_marker(line), None);
}

#[test]
fn marked_heading_becomes_h2_inside_the_list() {
    let html = render("## (1)　概要");
    assert!(html.contains("<ol class=\"lvl3\">"));
    assert!(html.contains("<h2>概要</h2>"));
    assert!(!html.contains("<h1>"));
}

#[test]
fn terminal_mark_closes_everything() {
    let html = render("第1　結論\n1　以上のとおり\n以上");
    assert!(html.ends_with("</ol>\n<div class=\"end-mark\">以上</div>\n"));
    assert_eq!(html.matches("<ol ").count(), html.matches("</ol>").count());
}

#[rstest]
#[case("令和5年1月1日")]
#[case("令和元年５月一日")]
#[case("平成 30 年 12 月 31 日")]
#[case("2023年12月31日")]
#[case("２０２４年４月１日")]
fn date_lines(#[case] line: &str) {
    assert_eq!(render(line), format!("<div class=\"date\">{line}</div>\n"));
}

#[test]
fn date_inside_list_keeps_list_indent() {
    let html = render("第1　日付\n令和6年3月1日");
    assert!(html.contains("        <div class=\"date\">令和6年3月1日</div>\n"));
}

#[rstest]
#[case("東京地方裁判所　御中")]
#[case("山田 太郎 様")]
fn destination_lines(#[case] line: &str) {
    assert_eq!(render(line), format!("<div class=\"dest\">{line}</div>\n"));
}

#[test]
fn destination_needs_separating_space() {
    assert_eq!(render("皆様"), "<p>皆様</p>\n");
}

#[rstest]
#[case("令和5年1月1日", "date")]
#[case("東京地方裁判所　御中", "dest")]
#[case("以上", "end-mark")]
fn classification_is_stable_on_reprocessed_text(#[case] line: &str, #[case] class: &str) {
    let first = render(line);
    let text = first
        .split('>')
        .nth(1)
        .and_then(|s| s.split('<').next())
        .expect("element text");
    let second = render(text);
    assert_eq!(first, second);
    assert!(second.contains(&format!("class=\"{class}\"")));
}

#[test]
fn text_is_html_escaped() {
    assert_eq!(render("A & B <c>"), "<p>A &amp; B &lt;c&gt;</p>\n");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n  \r\n\t")]
fn blank_input_is_not_converted(#[case] input: &str) {
    assert_eq!(convert(input), None);
}

#[test]
fn crlf_input_matches_lf_input() {
    assert_eq!(render("第1　総論\r\n本文"), render("第1　総論\n本文"));
}

#[test]
fn page_break_closes_the_outline() {
    let html = render("第1　総論\n### --改ページ--\n本文");
    assert_eq!(
        html,
        concat!(
            "<ol class=\"lvl1\">\n",
            "    <li>\n",
            "        <p>総論</p>\n",
            "</li>\n",
            "</ol>\n",
            "<div class=\"break\"></div>\n",
            "<p>本文</p>\n",
        )
    );
}

#[test]
fn page_break_flushes_an_open_table() {
    let html = render("|訴状|1|\n### ----\n1　次頁");
    assert!(html.contains("</table>\n<div class=\"break\"></div>\n    <ol class=\"lvl2\">"));
}

#[test]
fn page_break_keeps_alignment_block_open() {
    let html = render("### --右\n原告\n### --次頁--\n被告\n### --");
    assert_eq!(html.matches("<div class=\"right\">").count(), 1);
    assert!(html.contains("<div class=\"break\"></div>\n<p style="));
}
