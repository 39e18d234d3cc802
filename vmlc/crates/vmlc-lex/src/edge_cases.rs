//! Edge case tests for vmlc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, scan_str, Token, TokenKind};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(scan_str("").is_empty());
        assert!(scan(&[]).is_empty());
    }

    #[test]
    fn test_edge_single_stray_characters() {
        assert!(scan_str("!").is_empty());
        assert!(scan_str("/").is_empty());
        assert!(scan_str("-").is_empty());
        assert!(scan_str("?!#%&").is_empty());
    }

    #[test]
    fn test_edge_truncated_comment_opener() {
        // `<!-` is not a comment opener; `<` is scanned alone and the rest
        // matches no rule.
        assert_eq!(scan_str("<!-"), vec![Token::delimiter("<")]);
    }

    #[test]
    fn test_edge_unterminated_comment() {
        assert_eq!(
            scan_str("<!-- unterminated"),
            vec![Token::comment(" unterminated")]
        );
    }

    #[test]
    fn test_edge_unterminated_comment_with_partial_close() {
        assert_eq!(scan_str("<!-- x --"), vec![Token::comment(" x --")]);
    }

    #[test]
    fn test_edge_unterminated_string() {
        assert_eq!(
            scan_str(r#"<a b="open"#),
            vec![
                Token::delimiter("<"),
                Token::identifier("a"),
                Token::identifier("b"),
                Token::delimiter("="),
                Token::string_literal("open"),
            ]
        );
    }

    #[test]
    fn test_edge_unterminated_text() {
        let tokens = scan_str("<a>tail with no tag");
        assert_eq!(tokens.last(), Some(&Token::text("tail with no tag")));
    }

    #[test]
    fn test_edge_close_delimiter_alone() {
        assert_eq!(scan_str(">"), vec![Token::delimiter(">")]);
    }

    #[test]
    fn test_edge_close_delimiter_then_whitespace_only() {
        // The trailing run is captured, then filtered as blank text.
        assert_eq!(scan_str(">   \n  "), vec![Token::delimiter(">")]);
    }

    #[test]
    fn test_edge_adjacent_comments() {
        assert_eq!(
            scan_str("<!--a--><!--b-->"),
            vec![Token::comment("a"), Token::comment("b")]
        );
    }

    #[test]
    fn test_edge_empty_string_literal_survives_filter() {
        let tokens = scan_str(r#"<a b="">"#);
        assert!(tokens.contains(&Token::string_literal("")));
    }

    #[test]
    fn test_edge_self_closing_without_name() {
        assert_eq!(scan_str("</>"), vec![
            Token::delimiter("</"),
            Token::delimiter(">"),
        ]);
    }

    #[test]
    fn test_edge_equals_between_identifiers() {
        assert_eq!(
            scan_str("a=b"),
            vec![
                Token::identifier("a"),
                Token::delimiter("="),
                Token::identifier("b"),
            ]
        );
    }

    #[test]
    fn test_edge_unicode_outside_text_is_dropped() {
        // Non-ASCII letters are not name characters and match no rule.
        assert_eq!(scan_str("héllo"), vec![
            Token::identifier("h"),
            Token::identifier("llo"),
        ]);
    }

    #[test]
    fn test_edge_unicode_inside_text_is_kept() {
        let tokens = scan_str("<a>héllo ✨</a>");
        assert_eq!(tokens[3], Token::text("héllo ✨"));
    }

    #[test]
    fn test_edge_deeply_nested_document() {
        let depth = 500;
        let mut source = String::new();
        for _ in 0..depth {
            source.push_str("<v>");
        }
        source.push_str("x");
        for _ in 0..depth {
            source.push_str("</v>");
        }
        let tokens = scan_str(&source);
        // 3 tokens per open tag, 3 per close tag, 1 text node.
        assert_eq!(tokens.len(), depth * 6 + 1);
        assert_eq!(tokens[depth * 3], Token::text("x"));
    }

    #[test]
    fn test_edge_large_flat_document() {
        let source = r#"<item id="a">v</item>"#.repeat(1_000);
        let tokens = scan_str(&source);
        assert_eq!(tokens.len(), 10_000);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Text));
    }

    #[test]
    fn test_edge_every_position_consumed_once() {
        // Token values never overlap: re-assembling the non-delimiter
        // payloads of a simple document gives back its raw text content.
        let tokens = scan_str("<a>one</a><b>two</b>");
        let text: String = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Text)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(text, "onetwo");
    }
}
