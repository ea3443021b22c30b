use crate::config::default_title_tags;
use crate::deck::Slide;

/// Element names that may provide a slide's title, most important first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTagAllowList {
    tags: Vec<String>,
}

impl Default for TitleTagAllowList {
    fn default() -> Self {
        Self::from_tags(default_title_tags())
    }
}

impl TitleTagAllowList {
    /// Build from a comma-separated selector such as `"h1, h2"`
    pub fn from_selector(selector: &str) -> Self {
        Self::from_tags(selector.split(','))
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|allowed| *allowed == tag)
    }
}

/// Select the text of the most important heading among a slide's direct
/// children.
///
/// Candidates are allowed tags with non-empty text. The smallest tag name
/// wins (`h1` before `h2`); among equal tags the first one in document
/// order is used.
pub fn extract_title(slide: &Slide, allow_list: &TitleTagAllowList) -> Option<String> {
    slide
        .children
        .iter()
        .filter_map(|node| node.tag.as_deref().map(|tag| (tag, node)))
        .filter(|(tag, node)| allow_list.contains(tag) && !node.text.is_empty())
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, node)| node.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideNode;

    fn slide(children: Vec<SlideNode>) -> Slide {
        Slide::new(children, 0)
    }

    #[test]
    fn test_default_allow_list() {
        let allow_list = TitleTagAllowList::default();
        assert_eq!(allow_list.tags(), ["h1", "h2", "h3", "h4", "h5", "h6"]);
        assert!(allow_list.contains("H3"));
        assert!(!allow_list.contains("p"));
    }

    #[test]
    fn test_selector_is_split_and_trimmed() {
        let allow_list = TitleTagAllowList::from_selector(" h2 ,H3,  header");
        assert_eq!(allow_list.tags(), ["h2", "h3", "header"]);
    }

    #[test]
    fn test_most_important_heading_wins() {
        let slide = slide(vec![
            SlideNode::element("h3", "Detail"),
            SlideNode::text("\n"),
            SlideNode::element("h2", "Section"),
            SlideNode::element("p", "Body"),
        ]);
        assert_eq!(extract_title(&slide, &TitleTagAllowList::default()).as_deref(), Some("Section"));
    }

    #[test]
    fn test_first_of_equal_tags_wins() {
        let slide = slide(vec![
            SlideNode::element("h2", "First"),
            SlideNode::element("h2", "Second"),
        ]);
        assert_eq!(extract_title(&slide, &TitleTagAllowList::default()).as_deref(), Some("First"));
    }

    #[test]
    fn test_empty_headings_are_ignored() {
        let slide = slide(vec![
            SlideNode::element("h1", ""),
            SlideNode::element("h4", "Fallback"),
        ]);
        assert_eq!(extract_title(&slide, &TitleTagAllowList::default()).as_deref(), Some("Fallback"));
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let slide = slide(vec![SlideNode::element("p", "Just text"), SlideNode::text("h1")]);
        assert_eq!(extract_title(&slide, &TitleTagAllowList::default()), None);
        assert_eq!(extract_title(&Slide::default(), &TitleTagAllowList::default()), None);
    }

    #[test]
    fn test_custom_allow_list_restricts_candidates() {
        let slide = slide(vec![
            SlideNode::element("h1", "Deck title"),
            SlideNode::element("h2", "Chapter"),
        ]);
        let allow_list = TitleTagAllowList::from_selector("h2,h3");
        assert_eq!(extract_title(&slide, &allow_list).as_deref(), Some("Chapter"));
    }

    #[test]
    fn test_title_text_is_verbatim() {
        let slide = slide(vec![SlideNode::element("h1", "  Spaced  <out> ")]);
        assert_eq!(
            extract_title(&slide, &TitleTagAllowList::default()).as_deref(),
            Some("  Spaced  <out> ")
        );
    }
}
