pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_exact() {
        assert_eq!(
            "2025-03-14".split_exact::<3>("-"),
            [Some("2025"), Some("03"), Some("14")]
        );
        assert_eq!("2025-03".split_exact::<3>("-"), [Some("2025"), Some("03"), None]);
        assert_eq!("2025".split_exact::<2>("-"), [Some("2025"), None]);
    }
}
