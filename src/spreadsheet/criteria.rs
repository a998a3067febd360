use std::str::FromStr;

/// How header names are paired with the type-sample row when the two rows
/// have different lengths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderAlignment {
    /// Column count follows the type-sample row. Extra header cells are
    /// dropped and unnamed columns get a placeholder name.
    #[default]
    TypeSampleRow,
    /// Column count follows the longer of the two rows. Header cells without
    /// a type sample become object columns.
    Widest,
}

impl HeaderAlignment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HeaderAlignment::TypeSampleRow => "type-sample-row",
            HeaderAlignment::Widest => "widest",
        }
    }
}

impl FromStr for HeaderAlignment {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        [HeaderAlignment::TypeSampleRow, HeaderAlignment::Widest]
            .into_iter()
            .find(|alignment| alignment.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("Invalid header alignment '{}'", name))
    }
}

/// Criteria for converting a grid into a typed table.
#[derive(Clone, Debug)]
pub struct Criteria {
    /// Header / type-sample alignment policy
    pub header_alignment: HeaderAlignment,
    /// Prefix of positional column names, followed by the 1-based index
    pub placeholder_prefix: String,
}

impl Criteria {
    /// Positional name for the column at `index` (0-based).
    pub fn placeholder(&self, index: usize) -> String {
        format!("{}{}", self.placeholder_prefix, index + 1)
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            header_alignment: HeaderAlignment::default(),
            placeholder_prefix: "Column".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_alignment_from_str() {
        assert_eq!("widest".parse(), Ok(HeaderAlignment::Widest));
        assert_eq!("Type-Sample-Row".parse(), Ok(HeaderAlignment::TypeSampleRow));
        assert_eq!(
            "longest".parse::<HeaderAlignment>(),
            Err("Invalid header alignment 'longest'".to_owned())
        );
    }

    #[test]
    fn criteria_placeholder() {
        let criteria = Criteria::default();
        assert_eq!(criteria.header_alignment, HeaderAlignment::TypeSampleRow);
        assert_eq!(criteria.placeholder(0), "Column1");
    }
}
