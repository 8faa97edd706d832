//! Source rendering of a documentation tree

use crate::config::DocsmithConfig;
use docsmith_tree::{render_lines, DocTree};

/// First newline sequence in `text`, else `fallback`
#[must_use]
pub fn detect_newline<'a>(text: &str, fallback: &'a str) -> &'a str {
    let Some(position) = text.find(['\r', '\n']) else {
        return fallback;
    };
    match &text.as_bytes()[position..] {
        [b'\r', b'\n', ..] => "\r\n",
        [b'\r', ..] => "\r",
        _ => "\n",
    }
}

/// Render the root's children as prefixed source lines
///
/// Every physical line, including those produced by line breaks inside text,
/// starts with `indentation`, the configured marker and one space. The
/// synthetic root itself is never written.
#[must_use]
pub fn render_documentation(tree: &DocTree, indentation: &str, config: &DocsmithConfig) -> Vec<String> {
    let prefix = format!("{indentation}{} ", config.marker);

    render_lines(tree.nodes(), &config.indent_unit)
        .iter()
        .flat_map(|entry| physical_lines(entry))
        .map(|line| format!("{prefix}{line}"))
        .collect()
}

fn physical_lines(entry: &str) -> impl Iterator<Item = &str> {
    entry.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).flat_map(|line| line.split('\r'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn newline_detection() {
        assert_eq!(detect_newline("a\r\nb\nc", "\r\n"), "\r\n");
        assert_eq!(detect_newline("a\nb\r\n", "\r\n"), "\n");
        assert_eq!(detect_newline("a\rb", "\n"), "\r");
        assert_eq!(detect_newline("single line", "\r\n"), "\r\n");
        assert_eq!(detect_newline("", "\n"), "\n");
    }

    #[test]
    fn prefixes_each_line() {
        let tree = DocTree::parse(
            "<doc><summary>Gets the value.</summary><list type=\"bullet\"><item>One</item></list><param name=\"x\" /></doc>",
        )
        .unwrap();

        assert_eq!(
            render_documentation(&tree, "    ", &DocsmithConfig::new()),
            vec![
                "    /// <summary>Gets the value.</summary>",
                "    /// <list type=\"bullet\">",
                "    ///   <item>One</item>",
                "    /// </list>",
                "    /// <param name=\"x\" />",
            ]
        );
    }

    #[test]
    fn breaks_inside_text_get_their_own_prefix() {
        let mut tree = DocTree::empty();
        tree.root_mut().get_or_add_element("remarks").append("First.\r\nSecond.\nThird.");

        assert_eq!(
            render_documentation(&tree, "\t", &DocsmithConfig::new()),
            vec!["\t/// <remarks>First.", "\t/// Second.", "\t/// Third.</remarks>"]
        );
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert!(render_documentation(&DocTree::empty(), "", &DocsmithConfig::new()).is_empty());
    }
}
