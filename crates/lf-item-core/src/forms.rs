/// A required field passes when its trimmed value is non-empty.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Per-field validity of the required values, in order.
pub fn check_required<I, S>(values: I) -> Vec<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(|v| is_filled(v.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_not_filled() {
        assert_eq!(check_required(["Wallet", "  ", "", "\tx "]), vec![true, false, false, true]);
    }
}
