use core::fmt::{Display, Error as FmtError, Formatter};

/// Displays a slice as `[ a, b, c ]`.
pub struct PrettySlice<'a, T>(pub &'a [T]);

impl<T: Display> Display for PrettySlice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str("[ ")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::prelude::*;

    #[rstest]
    #[case(vec![], "[  ]")]
    #[case(vec!["connection-0"], "[ connection-0 ]")]
    #[case(vec!["connection-0", "connection-1"], "[ connection-0, connection-1 ]")]
    fn pretty_slice_display(#[case] elements: Vec<&str>, #[case] expected: &str) {
        assert_eq!(PrettySlice(&elements).to_string(), expected);
    }
}
