use std::{
    iter,
    num::NonZero,
    ops::{Range, RangeFrom, RangeFull, RangeTo},
};

use crate::{error::InvalidKeyType, value::Value, Part};

/// Contiguous range of positions with an optional step.
///
/// Negative bounds count from the end. Out-of-range bounds are clamped to the
/// sequence instead of failing, and a negative step walks the sequence
/// backwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<NonZero<isize>>,
}

impl Slice {
    pub const fn new(
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<NonZero<isize>>,
    ) -> Self {
        Self { start, stop, step }
    }

    pub const fn with_step(self, step: NonZero<isize>) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Positions selected out of a sequence of `length` elements, in
    /// selection order.
    pub(crate) fn positions(
        self,
        length: usize,
    ) -> impl Iterator<Item = usize> {
        let length = isize::try_from(length).unwrap_or(isize::MAX);

        let step = self.step.map_or(1, NonZero::get);

        let (lower, upper) = if step < 0 {
            (-1, length - 1)
        } else {
            (0, length)
        };

        let clamp = move |bound: isize| {
            if bound < 0 {
                bound.saturating_add(length).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);

        let stop = self
            .stop
            .map_or(if step < 0 { lower } else { upper }, clamp);

        iter::successors(Some(start), move |position| {
            position.checked_add(step)
        })
        .take_while(move |&position| {
            if step < 0 {
                position > stop
            } else {
                position < stop
            }
        })
        .filter_map(|position| usize::try_from(position).ok())
    }
}

impl From<RangeFull> for Slice {
    #[inline]
    fn from(RangeFull: RangeFull) -> Self {
        Self::default()
    }
}

impl From<Range<isize>> for Slice {
    #[inline]
    fn from(Range { start, end }: Range<isize>) -> Self {
        Self::new(Some(start), Some(end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    #[inline]
    fn from(RangeFrom { start }: RangeFrom<isize>) -> Self {
        Self::new(Some(start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    #[inline]
    fn from(RangeTo { end }: RangeTo<isize>) -> Self {
        Self::new(None, Some(end), None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Index(isize),
    Slice(Slice),
}

impl From<isize> for Key {
    #[inline]
    fn from(index: isize) -> Self {
        Self::Index(index)
    }
}

impl From<Slice> for Key {
    #[inline]
    fn from(slice: Slice) -> Self {
        Self::Slice(slice)
    }
}

macro_rules! impl_from_range {
    ($($range: ty),+ $(,)?) => {
        $(
            impl From<$range> for Key {
                #[inline]
                fn from(range: $range) -> Self {
                    Self::Slice(range.into())
                }
            }
        )+
    };
}

impl_from_range![RangeFull, Range<isize>, RangeFrom<isize>, RangeTo<isize>];

impl TryFrom<&Value> for Key {
    type Error = InvalidKeyType;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match *value {
            Value::Integer(index) => Ok(Self::Index(
                isize::try_from(index).unwrap_or(if index < 0 {
                    isize::MIN
                } else {
                    isize::MAX
                }),
            )),
            Value::Slice(slice) => Ok(Self::Slice(slice)),
            Value::Float(_) | Value::Text(_) | Value::Version(_) => {
                Err(InvalidKeyType {
                    found: value.kind(),
                })
            },
        }
    }
}

/// Result of looking a key up in a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Part(Part),
    Parts(Vec<Part>),
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::Slice;

    fn select(slice: Slice, length: usize) -> Vec<usize> {
        slice.positions(length).collect()
    }

    fn step(step: isize) -> NonZero<isize> {
        NonZero::new(step).unwrap()
    }

    #[test]
    fn test_forward() {
        assert_eq!(select(Slice::from(..), 6), [0, 1, 2, 3, 4, 5]);
        assert_eq!(select(Slice::from(-2..), 6), [4, 5]);
        assert_eq!(select(Slice::from(1..-1), 6), [1, 2, 3, 4]);
        assert_eq!(select(Slice::from(-100..100), 3), [0, 1, 2]);
        assert_eq!(select(Slice::from(5..1), 6), [] as [usize; 0]);
        assert_eq!(select(Slice::from(..).with_step(step(2)), 6), [0, 2, 4]);
        assert_eq!(select(Slice::from(1..).with_step(step(3)), 6), [1, 4]);
    }

    #[test]
    fn test_backward() {
        assert_eq!(
            select(Slice::from(..).with_step(step(-1)), 6),
            [5, 4, 3, 2, 1, 0],
        );
        assert_eq!(select(Slice::from(..).with_step(step(-2)), 6), [5, 3, 1]);
        assert_eq!(select(Slice::from(4..1).with_step(step(-1)), 6), [4, 3, 2]);
        assert_eq!(
            select(Slice::from(-1..-4).with_step(step(-1)), 6),
            [5, 4, 3],
        );
        assert_eq!(
            select(Slice::from(10..).with_step(step(-1)), 6),
            [5, 4, 3, 2, 1, 0],
        );
        assert_eq!(
            select(Slice::from(..-10).with_step(step(-1)), 6),
            [5, 4, 3, 2, 1, 0],
        );
        assert_eq!(
            select(Slice::from(1..4).with_step(step(-1)), 6),
            [] as [usize; 0],
        );
    }

    #[test]
    fn test_extreme_bounds() {
        assert_eq!(
            select(Slice::from(isize::MIN..isize::MAX), 2),
            [0, 1],
        );
        assert_eq!(
            select(Slice::from(..).with_step(step(isize::MAX)), 4),
            [0],
        );
        assert_eq!(
            select(Slice::from(..).with_step(step(isize::MIN)), 4),
            [3],
        );
        assert_eq!(select(Slice::from(..), 0), [] as [usize; 0]);
        assert_eq!(
            select(Slice::from(..).with_step(step(-1)), 0),
            [] as [usize; 0],
        );
    }
}
