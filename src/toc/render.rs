use crate::toc::layout::Grid;

/// Render the generated slide: a heading followed by the entry table.
///
/// Heading and entry texts are escaped; they are plain text, not markup.
/// `title_tag` is written as-is and must be a valid element name.
pub fn render_section(title_tag: &str, title: &str, grid: &Grid) -> String {
    let mut html = String::from("<section class=\"toc\">\n");
    html.push_str(&format!(
        "<{tag}>{}</{tag}>\n",
        html_escape::encode_text(title),
        tag = title_tag
    ));

    html.push_str("<table class=\"toc\">\n");
    for row in &grid.rows {
        html.push_str("<tr>");
        for cell in row {
            match cell.fragment_index {
                Some(index) => html.push_str(&format!(
                    "<td class=\"fragment\" data-fragment-index=\"{}\">",
                    index
                )),
                None => html.push_str("<td>"),
            }
            html.push_str(&html_escape::encode_text(&cell.text));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</section>");

    html
}
