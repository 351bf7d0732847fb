// Sort keys for table cells.
//
// Cell content is lower-cased once. A column compares numerically only when
// every one of its cells looks numeric and parses, otherwise the whole column
// compares as text.

#[derive(Clone, Debug, PartialEq)]
pub struct CellKey {
    text: String,
    number: Option<f64>,
}

impl CellKey {
    pub fn text(content: &str) -> Self {
        Self {
            text: content.to_lowercase(),
            number: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> Option<f64> {
        self.number
    }

    // numbers only when both sides parsed, text otherwise
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.number, other.number) {
            (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
            _ => self.text.cmp(&other.text),
        }
    }
}

/// Digits, `.` and `/` only, at least one character.
pub fn looks_numeric(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/')
}

/// Drops everything but digits, `.` and `-`, then reads the longest leading
/// decimal. `"1.2.3"` reads as `1.2`, `"12/5"` as `125`, `"."` not at all.
pub fn parse_number(value: &str) -> Option<f64> {
    let stripped: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let (negative, rest) = match stripped.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, stripped.as_str()),
    };

    let integer: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let fraction: String = rest[integer.len()..]
        .strip_prefix('.')
        .map(|after_dot| after_dot.chars().take_while(char::is_ascii_digit).collect())
        .unwrap_or_default();

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let literal = format!(
        "{sign}{integer}.{fraction}",
        sign = if negative { "-" } else { "" },
        integer = if integer.is_empty() { "0" } else { &integer },
        fraction = if fraction.is_empty() { "0" } else { &fraction },
    );
    literal.parse().ok()
}

pub fn column_keys<I>(contents: I) -> Vec<CellKey>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut keys: Vec<CellKey> = contents
        .into_iter()
        .map(|content| CellKey::text(content.as_ref()))
        .collect();

    let numbers: Option<Vec<f64>> = keys
        .iter()
        .map(|key| {
            if looks_numeric(&key.text) {
                parse_number(&key.text)
            } else {
                None
            }
        })
        .collect();

    if let Some(numbers) = numbers {
        for (key, number) in keys.iter_mut().zip(numbers) {
            key.number = Some(number);
        }
    }

    keys
}

use std::cmp::Ordering;

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_some_eq};

    #[test]
    fn numeric_looking_values() {
        assert!(looks_numeric("10"));
        assert!(looks_numeric("1.5"));
        assert!(looks_numeric("2024/01/02"));
        assert!(!looks_numeric(""));
        assert!(!looks_numeric("-1"));
        assert!(!looks_numeric("1 000"));
        assert!(!looks_numeric("v1.2"));
    }

    #[test]
    fn parse_reads_leading_decimal() {
        assert_some_eq!(parse_number("33"), 33.0);
        assert_some_eq!(parse_number("1.2.3"), 1.2);
        assert_some_eq!(parse_number("12/5"), 125.0);
        assert_some_eq!(parse_number(".5"), 0.5);
        assert_some_eq!(parse_number("5."), 5.0);
        assert_some_eq!(parse_number("0"), 0.0);
        assert_some_eq!(parse_number("-4.5"), -4.5);
    }

    #[test]
    fn parse_rejects_values_without_digits() {
        assert_none!(parse_number("."));
        assert_none!(parse_number("/"));
        assert_none!(parse_number(""));
        assert_none!(parse_number("-"));
    }

    #[test]
    fn fully_numeric_column_compares_as_numbers() {
        let keys = column_keys(["10", "2", "33"]);
        assert!(keys.iter().all(|key| key.number().is_some()));
        assert_eq!(keys[0].compare(&keys[1]), Ordering::Greater);
    }

    #[test]
    fn one_text_cell_turns_the_column_into_text() {
        let keys = column_keys(["10", "abc", "2"]);
        assert!(keys.iter().all(|key| key.number().is_none()));
        assert_eq!(keys[0].compare(&keys[2]), Ordering::Less);
    }

    #[test]
    fn unparsable_numeric_looking_cell_turns_the_column_into_text() {
        let keys = column_keys(["9", "/", "10"]);
        assert_none!(keys[0].number());
        assert_eq!(keys[0].compare(&keys[2]), Ordering::Greater);
    }

    #[test]
    fn content_is_lower_cased() {
        let keys = column_keys(["Banana", "apple"]);
        assert_eq!(keys[0].as_str(), "banana");
        assert_eq!(keys[0].compare(&keys[1]), Ordering::Greater);
    }

    #[test]
    fn markup_is_compared_as_is() {
        let keys = column_keys(["<b>B</b>", "a"]);
        assert_eq!(keys[0].as_str(), "<b>b</b>");
        assert_eq!(keys[0].compare(&keys[1]), Ordering::Less);
    }
}
