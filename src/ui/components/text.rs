//! Text measuring helpers

use ratatui::text::Line;

/// Rows `lines` take when word wrapped to `width`; overlong words are split
pub fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            let mut rows = 1;
            let mut used = 0;
            for word in text.split_whitespace() {
                let len = word.chars().count();
                let needed = if used == 0 { len } else { used + 1 + len };
                if needed <= width {
                    used = needed;
                    continue;
                }
                if used > 0 {
                    rows += 1;
                }
                let extra = (len - 1) / width;
                rows += extra;
                used = len - extra * width;
            }
            rows
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrapped_height_counts_wrapped_rows() {
        let lines = vec![
            Line::from("one two three"),
            Line::from(""),
            Line::from("abcdefghij"),
        ];
        // "one two" / "three", blank, "abcd" / "efgh" / "ij"
        assert_eq!(wrapped_height(&lines, 8), 2 + 1 + 2);
        assert_eq!(wrapped_height(&lines, 4), 3 + 1 + 3);
        assert_eq!(wrapped_height(&lines, 80), 3);
    }
}
