// src/core/html.rs

/// ASCII-only lowercase. Non-ASCII chars are left alone so byte offsets
/// in the result line up with the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next `open ... close` block at or after `from`, case-insensitively.
/// `lc` must be `to_lower(s)`. Returns byte range of the whole block.
fn next_tag_block_lc(s: &str, lc: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let start = lc.get(from..)?.find(open)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(close)?;
    Some((start, open_end + end_rel + close.len()))
}

pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    next_tag_block_lc(s, &to_lower(s), &to_lower(open), &to_lower(close), from)
}

/// Text between the end of the opening tag and the start of the closing tag.
pub fn inner_after_open_tag(block: &str) -> &str {
    match (block.find('>'), block.rfind('<')) {
        (Some(oe), Some(cs)) if cs > oe => &block[oe + 1..cs],
        _ => "",
    }
}

/// Bodies of every `<script ...>...</script>` element, in document order.
/// Empty scripts (e.g. `<script src=...></script>`) are skipped.
pub fn script_bodies(doc: &str) -> Vec<&str> {
    let lc = to_lower(doc);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_lc(doc, &lc, "<script", "</script>", pos) {
        let inner = inner_after_open_tag(&doc[s..e]);
        if !inner.trim().is_empty() {
            out.push(inner);
        }
        pos = e;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_scripts_case_insensitively() {
        let doc = r#"
            <html><head>
              <SCRIPT type="text/javascript">var a = 1;</SCRIPT>
              <script src="/x.js"></script>
            </head><body><script>var b = 2;</script></body></html>
        "#;
        assert_eq!(script_bodies(doc), vec!["var a = 1;", "var b = 2;"]);
    }

    #[test]
    fn unterminated_script_is_ignored() {
        assert!(script_bodies("<script>var a = 1;").is_empty());
    }

    #[test]
    fn offsets_survive_non_ascii() {
        let doc = "<p>Café</p><script>ok</script>";
        assert_eq!(script_bodies(doc), vec!["ok"]);
        assert_eq!(next_tag_block_ci(doc, "<P", "</P>", 0), Some((0, 12)));
    }
}
