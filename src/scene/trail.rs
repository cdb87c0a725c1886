use {
    std::{num::NonZeroUsize, ops::Index},
    crate::r#type::Vector,
};

/// Position history of a body, oldest point first.
///
/// Without a limit the trail grows by one point every tick.
/// With a limit it behaves like a ring buffer and drops the oldest point.
pub struct Trail {
    inner: Vec<Vector>,
    start_index: usize,
    limit: Option<NonZeroUsize>,
}

impl Trail {
    pub fn new(limit: Option<NonZeroUsize>) -> Self {
        Self {
            inner: Vec::with_capacity(limit.map_or(0, NonZeroUsize::get)),
            start_index: 0,
            limit,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit.map(NonZeroUsize::get)
    }

    pub fn first(&self) -> Option<&Vector> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(0))
        }
    }

    pub fn last(&self) -> Option<&Vector> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(self.len() - 1))
        }
    }

    pub fn iter(&self) -> Iter {
        Iter {
            trail: self,
            index: 0,
        }
    }

    /// Add new point at the end
    /// Returns the dropped oldest point if the trail is full
    pub fn push(&mut self, point: Vector) -> Option<Vector> {
        match self.limit() {
            Some(limit) if self.inner.len() == limit => {
                let index = self.start_index;
                self.start_index = (self.start_index + 1) % limit;

                Some(std::mem::replace(&mut self.inner[index], point))
            }
            _ => {
                self.inner.push(point);
                None
            }
        }
    }

    pub fn get(&self, index: usize) -> &Vector {
        &self.inner[self.wrap_index(index)]
    }

    fn wrap_index(&self, index: usize) -> usize {
        assert!(index < self.len());

        (self.start_index + index) % self.len()
    }
}

impl Index<usize> for Trail {
    type Output = Vector;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

pub struct Iter<'t> {
    trail: &'t Trail,
    index: usize,
}

impl<'t> Iterator for Iter<'t> {
    type Item = &'t Vector;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.trail.len() {
            None
        } else {
            let index = self.index;
            self.index += 1;

            Some(self.trail.get(index))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.trail.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'t> ExactSizeIterator for Iter<'t> {}
