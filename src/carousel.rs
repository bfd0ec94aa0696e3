use std::rc::Rc;

use yew::Reducible;

/// Cursor into a fixed-length slide list. Wraps at both ends; the index is
/// the only mutable state the testimonial slider carries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel needs at least one slide");
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Direct selection, e.g. via pagination dots. Out-of-range targets are
    /// ignored rather than wrapped.
    pub fn jump_to(self, i: usize) -> Self {
        if i < self.len {
            Self { index: i, ..self }
        } else {
            self
        }
    }
}

pub enum CarouselAction {
    Next,
    Previous,
    JumpTo(usize),
}

// Reducer form so timer callbacks always advance from the current cursor
// rather than a snapshot captured at mount.
impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Previous => self.previous(),
            CarouselAction::JumpTo(i) => self.jump_to(i),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_wraps_forward() {
        let mut c = Carousel::new(4);
        for expected in [1, 2, 3, 0] {
            c = c.next();
            assert_eq!(c.index(), expected);
        }
    }

    #[test]
    fn wraps_backward_from_zero() {
        let c = Carousel::new(4);
        assert_eq!(c.previous().index(), 3);
    }

    #[test]
    fn next_then_previous_round_trips() {
        for len in 1..6 {
            let mut c = Carousel::new(len);
            for _ in 0..len {
                assert_eq!(c.next().previous(), c);
                assert_eq!(c.previous().next(), c);
                c = c.next();
            }
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut c = Carousel::new(3);
        for step in 0..50 {
            c = if step % 3 == 0 { c.previous() } else { c.next() };
            assert!(c.index() < 3);
        }
    }

    #[test]
    fn jump_to_selects_directly() {
        let c = Carousel::new(4);
        assert_eq!(c.jump_to(2).index(), 2);
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let c = Carousel::new(4).jump_to(2);
        assert_eq!(c.jump_to(7), c);
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let mut c = Rc::new(Carousel::new(4));
        for action in [
            CarouselAction::Next,
            CarouselAction::Next,
            CarouselAction::Previous,
            CarouselAction::JumpTo(3),
        ] {
            c = c.reduce(action);
        }
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn single_slide_is_a_fixed_point() {
        let c = Carousel::new(1);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.previous().index(), 0);
    }
}
