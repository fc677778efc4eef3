use crate::breakpoints::Breakpoint;
use crate::errors::Error;
use crate::intensity_list::{IntensityList, UpdateMode};
use itertools::Itertools;
use num_traits::Zero;
use std::str::FromStr;

/// An update request, as read from a textual description like
/// `add 10 30 1` or `set:15:25:-2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation<P, V> {
    pub mode: UpdateMode,
    pub from: P,
    pub to: P,
    pub amount: V,
}

impl<P, V> Operation<P, V>
where
    P: PartialOrd + Clone,
    V: Zero + Copy + PartialEq,
{
    /// Apply the operation on the list
    pub fn apply<'a>(
        &self,
        list: &'a mut IntensityList<P, V>,
    ) -> Result<&'a [Breakpoint<P, V>], Error> {
        list.update(self.from.clone(), self.to.clone(), self.amount, self.mode)
    }
}

impl<P: FromStr, V: FromStr> FromStr for Operation<P, V> {
    type Err = Error;

    /// Fields are separated by colons or whitespaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidOperation(s.trim().to_string());
        let (mode, from, to, amount) = s
            .split(|c: char| c == ':' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect_tuple()
            .ok_or_else(invalid)?;
        Ok(Operation {
            mode: mode.parse()?,
            from: from.parse().map_err(|_| invalid())?,
            to: to.parse().map_err(|_| invalid())?,
            amount: amount.parse().map_err(|_| invalid())?,
        })
    }
}

impl<P: std::fmt::Display, V: std::fmt::Display> std::fmt::Display
    for Operation<P, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}:{}", self.mode, self.from, self.to, self.amount)
    }
}

#[cfg(test)]
mod test {
    use crate::errors::Error;
    use crate::intensity_list::{IntensityList, UpdateMode};
    use crate::operations::Operation;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse() {
        let op: Operation<i32, i32> = "add 10 30 1".parse().unwrap();
        assert_eq!(
            op,
            Operation {
                mode: UpdateMode::Add,
                from: 10,
                to: 30,
                amount: 1
            }
        );
        assert_eq!(op.to_string(), "add:10:30:1");

        let op: Operation<Decimal, Decimal> =
            "  Set:15:25.5:-2 ".parse().unwrap();
        assert_eq!(op.mode, UpdateMode::Set);
        assert_eq!(op.to, dec!(25.5));
        assert_eq!(op.amount, dec!(-2));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "mul 1 2 3".parse::<Operation<i32, i32>>(),
            Err(Error::InvalidMode("mul".to_string())),
        );
        assert_eq!(
            "add 1 2".parse::<Operation<i32, i32>>(),
            Err(Error::InvalidOperation("add 1 2".to_string())),
        );
        assert_eq!(
            "add 1 2 3 4".parse::<Operation<i32, i32>>(),
            Err(Error::InvalidOperation("add 1 2 3 4".to_string())),
        );
        assert_eq!(
            "add 1 two 3".parse::<Operation<i32, i32>>(),
            Err(Error::InvalidOperation("add 1 two 3".to_string())),
        );
    }

    #[test]
    fn test_apply() {
        let mut list = IntensityList::new();
        for text in ["add:10:20:1", "add:20:30:1", "set:15:25:1"] {
            let op: Operation<i32, i32> = text.parse().unwrap();
            op.apply(&mut list).unwrap();
        }
        assert_eq!(list.to_string(), "[[10,1],[30,0]]");

        let op: Operation<i32, i32> = "set 30 10 4".parse().unwrap();
        assert_eq!(op.apply(&mut list), Err(Error::InvalidRange));
        assert_eq!(list.to_string(), "[[10,1],[30,0]]");
    }
}
