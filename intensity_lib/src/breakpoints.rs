/// One point where the intensity function changes value.
/// The intensity applies from `position` (included) up to the position of
/// the next breakpoint (excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint<P, V> {
    pub position: P,
    pub intensity: V,
}

impl<P, V> Breakpoint<P, V> {
    #[must_use]
    pub fn new(position: P, intensity: V) -> Self {
        Breakpoint {
            position,
            intensity,
        }
    }
}

impl<P: PartialEq, V: PartialEq> PartialEq<(P, V)> for Breakpoint<P, V> {
    fn eq(&self, other: &(P, V)) -> bool {
        self.position == other.0 && self.intensity == other.1
    }
}

impl<P, V> From<(P, V)> for Breakpoint<P, V> {
    fn from(value: (P, V)) -> Self {
        Breakpoint::new(value.0, value.1)
    }
}

impl<P: std::fmt::Display, V: std::fmt::Display> std::fmt::Display
    for Breakpoint<P, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.position, self.intensity)
    }
}

/// The left-closed, right-open range `[lower, upper)` between two
/// consecutive breakpoints, along with the intensity over that range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<P, V> {
    pub lower: P,
    pub upper: P,
    pub intensity: V,
}

impl<P: std::fmt::Display, V: std::fmt::Display> std::fmt::Display
    for Segment<P, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}): {}", self.lower, self.upper, self.intensity)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Breakpoint::new(10, -1).to_string(), "[10,-1]");
        assert_eq!(
            Segment {
                lower: 10,
                upper: 30,
                intensity: 2
            }
            .to_string(),
            "[10, 30): 2",
        );
    }

    #[test]
    fn test_compare_tuple() {
        let b = Breakpoint::from((20, 1));
        assert_eq!(b, (20, 1));
        assert!(b != (20, 0));
        assert!(b != (21, 1));
    }
}
