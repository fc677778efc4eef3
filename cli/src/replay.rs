use crate::global_settings::SourcedOperation;
use anyhow::{bail, Result};
use intensity_lib::{IntensityList, Operation};
use log::{debug, warn};
use rust_decimal::Decimal;

pub type DecimalIntensity = IntensityList<Decimal, Decimal>;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub applied: usize,
    pub rejected: usize,
}

/// Apply each operation in turn.
/// Rejected operations (unparsable, or with an invalid range) leave the list
/// unchanged.  They are logged and skipped, unless `strict` is set in which
/// case they abort the replay.
pub fn replay<'a>(
    list: &mut DecimalIntensity,
    operations: impl IntoIterator<Item = &'a SourcedOperation>,
    strict: bool,
) -> Result<Summary> {
    let mut summary = Summary::default();
    for op in operations {
        let outcome = op
            .text
            .parse::<Operation<Decimal, Decimal>>()
            .and_then(|parsed| parsed.apply(list).map(|_| ()));
        match outcome {
            Ok(()) => {
                summary.applied += 1;
                debug!("{}: {} => {}", op.origin, op.text, list);
            }
            Err(e) if strict => {
                bail!("{}: {} ({})", op.origin, e, op.text);
            }
            Err(e) => {
                summary.rejected += 1;
                warn!("{}: {}, ignored ({})", op.origin, e, op.text);
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod test {
    use super::*;

    fn sourced(texts: &[&str]) -> Vec<SourcedOperation> {
        texts
            .iter()
            .enumerate()
            .map(|(idx, text)| SourcedOperation {
                origin: format!("test:{}", idx + 1),
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_replay() {
        let ops = sourced(&["add:10:30:1", "add 20 40 1", "add:10:40:-2"]);
        let mut list = DecimalIntensity::new();
        let summary = replay(&mut list, &ops, false).unwrap();
        assert_eq!(
            summary,
            Summary {
                applied: 3,
                rejected: 0
            }
        );
        assert_eq!(list.to_string(), "[[10,-1],[20,0],[30,-1],[40,0]]");
    }

    #[test]
    fn test_skip_rejected() {
        let ops = sourced(&[
            "add:10:30:1",
            "add:40:20:1",
            "mul:10:20:3",
            "set:10",
            "set:10:30:2",
        ]);
        let mut list = DecimalIntensity::new();
        let summary = replay(&mut list, &ops, false).unwrap();
        assert_eq!(
            summary,
            Summary {
                applied: 2,
                rejected: 3
            }
        );
        assert_eq!(list.to_string(), "[[10,2],[30,0]]");
    }

    #[test]
    fn test_strict() {
        let ops = sourced(&["add:10:30:1", "add:40:20:1", "add:50:60:1"]);
        let mut list = DecimalIntensity::new();
        let err = replay(&mut list, &ops, true).unwrap_err();
        assert!(err.to_string().starts_with("test:2: Invalid range"));
        assert_eq!(list.to_string(), "[[10,1],[30,0]]");
    }
}
