use crate::breakpoints::{Breakpoint, Segment};
use crate::errors::Error;
use bisection::bisect_right_by;
use itertools::Itertools;
use num_traits::Zero;
use std::cmp::Ordering;

/// How an update combines its amount with the current intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Add the amount to the current intensity
    Add,

    /// Replace the current intensity with the amount
    Set,
}

impl std::str::FromStr for UpdateMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("add") {
            Ok(UpdateMode::Add)
        } else if s.eq_ignore_ascii_case("set") {
            Ok(UpdateMode::Set)
        } else {
            Err(Error::InvalidMode(s.to_string()))
        }
    }
}

impl std::fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateMode::Add => write!(f, "add"),
            UpdateMode::Set => write!(f, "set"),
        }
    }
}

/// A piecewise-constant function, stored as a sorted list of breakpoints.
///
/// The list is always kept normalized:
///  * positions are strictly increasing
///  * the list is empty, or its last intensity is zero
///  * the first intensity is not zero
///  * no two consecutive breakpoints have the same intensity
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityList<P, V> {
    breakpoints: Vec<Breakpoint<P, V>>,
}

impl<P, V> Default for IntensityList<P, V> {
    fn default() -> Self {
        Self {
            breakpoints: Vec::new(),
        }
    }
}

impl<P, V> IntensityList<P, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all breakpoints: the intensity is zero everywhere
    pub fn clear(&mut self) {
        self.breakpoints.clear();
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint<P, V>] {
        &self.breakpoints
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint<P, V>> {
        self.breakpoints.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

impl<P, V> IntensityList<P, V>
where
    P: PartialOrd + Clone,
    V: Zero + Copy + PartialEq,
{
    /// Add `amount` to the intensity over `[from, to)`
    pub fn add(
        &mut self,
        from: P,
        to: P,
        amount: V,
    ) -> Result<&[Breakpoint<P, V>], Error> {
        self.update(from, to, amount, UpdateMode::Add)
    }

    /// Set the intensity to `amount` over `[from, to)`
    pub fn set(
        &mut self,
        from: P,
        to: P,
        amount: V,
    ) -> Result<&[Breakpoint<P, V>], Error> {
        self.update(from, to, amount, UpdateMode::Set)
    }

    /// Apply an update over the range `[from, to)` and return the new
    /// breakpoints.
    /// The list is left untouched when the range is invalid (`to < from`, or
    /// bounds that cannot be compared, like NaN), in which case an error is
    /// returned.  An empty range, or adding zero, is a successful no-op.
    pub fn update(
        &mut self,
        from: P,
        to: P,
        amount: V,
        mode: UpdateMode,
    ) -> Result<&[Breakpoint<P, V>], Error> {
        match from.partial_cmp(&to) {
            None | Some(Ordering::Greater) => return Err(Error::InvalidRange),
            Some(Ordering::Equal) => return Ok(&self.breakpoints),
            Some(Ordering::Less) => {}
        }
        if mode == UpdateMode::Add && amount.is_zero() {
            return Ok(&self.breakpoints);
        }

        // Inserting `to` never shifts `start`, since to > from
        let start = self.ensure_breakpoint(from);
        let end = self.ensure_breakpoint(to);

        match mode {
            UpdateMode::Add => {
                // [start, end): the segment starting at `to` is not covered
                for b in self.breakpoints.iter_mut().take(end).skip(start) {
                    b.intensity = b.intensity + amount;
                }
                if let Some(last) = self.breakpoints.last_mut() {
                    last.intensity = V::zero();
                }
            }
            UpdateMode::Set => {
                if let Some(b) = self.breakpoints.get_mut(start) {
                    b.intensity = amount;
                }
                self.breakpoints.drain(start + 1..end);
            }
        }

        self.normalize();
        debug_assert!(self.is_normalized());
        Ok(&self.breakpoints)
    }

    /// The intensity in effect at the given position
    #[must_use]
    pub fn value_at(&self, position: &P) -> V {
        let idx = self.upper_bound(position);
        idx.checked_sub(1)
            .and_then(|i| self.breakpoints.get(i))
            .map_or_else(V::zero, |b| b.intensity)
    }

    /// Iterate over the ranges between consecutive breakpoints.  The
    /// unbounded ranges before the first and after the last breakpoints are
    /// not returned, since their intensity is always zero.
    pub fn segments(&self) -> impl Iterator<Item = Segment<P, V>> + '_ {
        self.breakpoints
            .iter()
            .tuple_windows()
            .map(|(b, next)| Segment {
                lower: b.position.clone(),
                upper: next.position.clone(),
                intensity: b.intensity,
            })
    }

    /// Whether the list satisfies all its structural invariants
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let sorted = self.breakpoints.iter().tuple_windows().all(|(a, b)| {
            matches!(a.position.partial_cmp(&b.position), Some(Ordering::Less))
        });
        let no_duplicates = self
            .breakpoints
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.intensity != b.intensity);
        let zero_tail = self
            .breakpoints
            .last()
            .map_or(true, |b| b.intensity.is_zero());
        let no_zero_head = self
            .breakpoints
            .first()
            .map_or(true, |b| !b.intensity.is_zero());
        sorted && no_duplicates && zero_tail && no_zero_head
    }

    /// Number of breakpoints whose position is less than or equal to
    /// `position`.
    /// The closure compares the target with each breakpoint: bisection moves
    /// left when it returns Less, i.e. when the breakpoint is after `position`.
    fn upper_bound(&self, position: &P) -> usize {
        bisect_right_by(&self.breakpoints, |b| {
            position.partial_cmp(&b.position).unwrap_or(Ordering::Greater)
        })
    }

    /// Return the index of the breakpoint at `position`, inserting one if
    /// needed.  A new breakpoint inherits the intensity in effect at that
    /// position, so the function itself is unchanged.
    fn ensure_breakpoint(&mut self, position: P) -> usize {
        let idx = self.upper_bound(&position);
        let previous = idx.checked_sub(1).and_then(|i| self.breakpoints.get(i));
        let inherited = match previous {
            // Before the first breakpoint, or empty list
            None => V::zero(),
            Some(prev) if prev.position == position => return idx - 1,
            // After the last breakpoint
            Some(_) if idx == self.breakpoints.len() => V::zero(),
            Some(prev) => prev.intensity,
        };
        self.breakpoints
            .insert(idx, Breakpoint::new(position, inherited));
        idx
    }

    /// Restore the invariants after a raw update
    fn normalize(&mut self) {
        // A zero intensity is implicit before the first breakpoint
        let leading = self
            .breakpoints
            .iter()
            .take_while(|b| b.intensity.is_zero())
            .count();
        self.breakpoints.drain(..leading);

        // Only one zero breakpoint is needed at the end
        while self.breakpoints.len() > 1
            && self
                .breakpoints
                .iter()
                .rev()
                .take(2)
                .all(|b| b.intensity.is_zero())
        {
            self.breakpoints.pop();
        }

        self.breakpoints
            .dedup_by(|current, prev| current.intensity == prev.intensity);
    }
}

impl<P: std::fmt::Display, V: std::fmt::Display> std::fmt::Display
    for IntensityList<P, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.breakpoints.iter().join(","))
    }
}
