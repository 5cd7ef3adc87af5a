//! Field scanning for stored command strings.
//!
//! Each variant decodes its stored string against an exact expected shape:
//! the command name, then a fixed sequence of comma-separated fields. The
//! scanner is all-or-nothing — any missing or malformed field aborts the
//! whole scan and the caller substitutes the variant default. A field that
//! scans successfully is still subject to range clamping by the caller.
//!
//! Trailing text after the last expected field is ignored, matching the
//! behavior of the C scanner this wire format originated with.

use crate::fmt::unscale_pct;

/// Incremental scanner over one stored command string.
pub struct FieldScanner<'a> {
    rest: &'a str,
}

impl<'a> FieldScanner<'a> {
    /// Starts a scan, consuming the command name and the whitespace after
    /// it. Returns `None` when the string does not begin with `command`.
    pub fn new(input: &'a str, command: &str) -> Option<Self> {
        let rest = input.strip_prefix(command)?;
        let trimmed = rest.trim_start();
        // the name must be a whole token, not a prefix of a longer one
        if trimmed.len() == rest.len() && !trimmed.is_empty() && !trimmed.starts_with('"') {
            return None;
        }
        Some(Self { rest: trimmed })
    }

    /// Scans one float field.
    pub fn float(&mut self) -> Option<f32> {
        let token = self.numeric_token();
        token.parse().ok()
    }

    /// Scans one percent-scaled float field and returns it unscaled.
    pub fn pct(&mut self) -> Option<f32> {
        self.float().map(unscale_pct)
    }

    /// Scans one integer field.
    pub fn int(&mut self) -> Option<i32> {
        let rest = self.rest.trim_start();
        let digits_end = rest
            .char_indices()
            .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-')))
            .map(|(i, c)| i + c.len_utf8())
            .last()
            .unwrap_or(0);
        let (token, rest) = rest.split_at(digits_end);
        self.rest = rest;
        token.parse().ok()
    }

    /// Consumes one `,` separator.
    pub fn sep(&mut self) -> Option<()> {
        let rest = self.rest.trim_start();
        self.rest = rest.strip_prefix(',')?;
        Some(())
    }

    /// Scans a double-quoted field of at most `max` bytes. The quoted text
    /// must be non-empty and must not contain a quote character.
    pub fn quoted(&mut self, max: usize) -> Option<&'a str> {
        let rest = self.rest.trim_start().strip_prefix('"')?;
        let end = rest.find('"')?;
        if end == 0 || end > max {
            return None;
        }
        let (value, rest) = rest.split_at(end);
        self.rest = &rest[1..];
        Some(value)
    }

    fn numeric_token(&mut self) -> &'a str {
        let rest = self.rest.trim_start();
        let mut end = 0;
        for (i, c) in rest.char_indices() {
            let numeric = c.is_ascii_digit()
                || c == '.'
                || ((c == '+' || c == '-') && (i == 0 || matches!(rest[..i].chars().last(), Some('e' | 'E'))))
                || ((c == 'e' || c == 'E') && i > 0);
            if !numeric {
                break;
            }
            end = i + c.len_utf8();
        }
        let (token, rest) = rest.split_at(end);
        self.rest = rest;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_exact_shape() {
        let mut s = FieldScanner::new("demo_cmd 1.5,-2,3", "demo_cmd").expect("command matches");
        assert_eq!(s.float(), Some(1.5));
        s.sep().expect("separator");
        assert_eq!(s.float(), Some(-2.0));
        s.sep().expect("separator");
        assert_eq!(s.int(), Some(3));
    }

    #[test]
    fn rejects_wrong_command() {
        assert!(FieldScanner::new("other_cmd 1", "demo_cmd").is_none());
        assert!(FieldScanner::new("demo_cmd2 1", "demo_cmd").is_none());
    }

    #[test]
    fn missing_field_aborts() {
        let mut s = FieldScanner::new("demo_cmd 1.5,", "demo_cmd").expect("command matches");
        assert_eq!(s.float(), Some(1.5));
        s.sep().expect("separator");
        assert_eq!(s.float(), None);
    }

    #[test]
    fn key_value_garbage_does_not_scan() {
        let mut s = FieldScanner::new("demo_cmd amplitude=6", "demo_cmd").expect("command matches");
        assert_eq!(s.int(), None);
    }

    #[test]
    fn quoted_field() {
        let mut s =
            FieldScanner::new("demo_cmd \"agfa_apx_25\",0.5", "demo_cmd").expect("command matches");
        assert_eq!(s.quoted(127), Some("agfa_apx_25"));
        s.sep().expect("separator");
        assert_eq!(s.float(), Some(0.5));
    }

    #[test]
    fn quoted_field_respects_bound() {
        let long = format!("demo_cmd \"{}\"", "x".repeat(200));
        let mut s = FieldScanner::new(&long, "demo_cmd").expect("command matches");
        assert_eq!(s.quoted(127), None);
    }

    #[test]
    fn empty_quoted_field_rejected() {
        let mut s = FieldScanner::new("demo_cmd \"\",1", "demo_cmd").expect("command matches");
        assert_eq!(s.quoted(127), None);
    }

    #[test]
    fn pct_unscales() {
        let mut s = FieldScanner::new("demo_cmd 50,-30", "demo_cmd").expect("command matches");
        assert_eq!(s.pct(), Some(0.5));
        s.sep().expect("separator");
        assert_eq!(s.pct(), Some(-0.3));
    }

    #[test]
    fn scientific_notation_floats() {
        let mut s = FieldScanner::new("demo_cmd 1.5e-2", "demo_cmd").expect("command matches");
        assert_eq!(s.float(), Some(0.015));
    }
}
