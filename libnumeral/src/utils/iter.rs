use std::collections::VecDeque;
use std::vec::IntoIter;

/// A [`TakeWhile`]-like iterator that tests its predicate by peeking rather than consuming.
///
/// rustlib's [`TakeWhile`] consumes the first item that fails its predicate. Scanners that read
/// a run of digits and then need to look at the character that ended the run cannot afford that.
///
/// [`TakeWhile`]: core::iter::TakeWhile
struct PeekingTakeWhile<'a, T, P>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool,
{
    peeker: &'a mut PeekIter<T>,
    predicate: P,
}

impl<'a, T, P> Iterator for PeekingTakeWhile<'a, T, P>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(v) = self.peeker.peek() {
            if (self.predicate)(v) {
                return self.peeker.next();
            }
        }
        None
    }
}

/// An iterator that supports arbitrary-length peeking.
pub struct PeekIter<T>
where
    T: Clone,
{
    iter: IntoIter<T>,
    /// Items pulled from `iter` by a peek but not yet handed out.
    lookahead: VecDeque<Option<T>>,
}

impl<T> PeekIter<T>
where
    T: Clone,
{
    pub fn new(iter: IntoIter<T>) -> Self {
        Self {
            iter,
            lookahead: VecDeque::with_capacity(2),
        }
    }

    /// Returns a reference to the next value without consuming it, or `None` at the end.
    pub fn peek(&mut self) -> Option<&T> {
        self.peek_nth(0)
    }

    /// Returns a reference to the value `n` positions ahead without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&T> {
        while self.lookahead.len() <= n {
            let next = self.iter.next();
            self.lookahead.push_back(next);
        }
        self.lookahead[n].as_ref()
    }

    /// Consumes and collects items for as long as `predicate` holds. The first item failing the
    /// predicate stays in the iterator.
    pub fn collect_while<P, R>(&mut self, predicate: P) -> R
    where
        P: Fn(&T) -> bool,
        R: std::iter::FromIterator<T>,
    {
        PeekingTakeWhile {
            peeker: self,
            predicate,
        }
        .collect()
    }
}

impl<T> Iterator for PeekIter<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.lookahead
            .pop_front()
            // unwrap_or would evaluate `self.iter.next()` before the lookahead is checked.
            .unwrap_or_else(|| self.iter.next())
    }
}
