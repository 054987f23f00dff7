/// A last-in-first-out container with positional surgery.
///
/// The top of the stack is the last element of the backing vector. Every
/// operation that cannot be carried out (too few elements, index out of
/// range) leaves the stack untouched instead of failing: this is what lets
/// arbitrary generated programs run without guards at every call site.
///
/// Positional operations address elements by depth: `idx` maps to the
/// vector index `size - 1 - idx`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T: Clone> Stack<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Stack { elements }
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True if the stack holds `n` or more elements.
    pub fn has(&self, n: usize) -> bool {
        n <= self.size()
    }

    pub fn lacks(&self, n: usize) -> bool {
        !self.has(n)
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Pops the two topmost elements as `(second, top)`, or nothing at all.
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.lacks(2) {
            return None;
        }
        let top = self.elements.pop()?;
        let second = self.elements.pop()?;
        Some((second, top))
    }

    pub fn push(&mut self, e: T) {
        self.elements.push(e);
    }

    /// Exchanges the two topmost elements.
    pub fn swap(&mut self) {
        let n = self.size();
        if n < 2 {
            return;
        }
        self.elements.swap(n - 1, n - 2);
    }

    /// Pushes a copy of the top element.
    pub fn dup(&mut self) {
        if let Some(top) = self.peek().cloned() {
            self.push(top);
        }
    }

    /// The third element from the top moves to the top, the two above it
    /// shift down: `[a, b, c]` becomes `[b, c, a]`.
    pub fn rotate(&mut self) {
        let n = self.size();
        if n < 3 {
            return;
        }
        self.elements[n - 3..].rotate_left(1);
    }

    pub fn flush(&mut self) {
        self.elements.clear();
    }

    fn position(&self, idx: i64) -> Option<usize> {
        let pos = (self.size() as i64 - 1).checked_sub(idx)?;
        usize::try_from(pos).ok()
    }

    /// Moves the element at depth `idx` to the top.
    ///
    /// The top itself cannot be yanked: `idx` must be at least 1, so the
    /// valid range is positions `0 ..= size - 2`.
    pub fn yank(&mut self, idx: i64) {
        let Some(pos) = self.position(idx) else {
            return;
        };
        if pos + 2 > self.size() {
            return;
        }
        let e = self.elements.remove(pos);
        self.elements.push(e);
    }

    /// Copies the element at depth `idx` onto the top; `idx` 0 duplicates
    /// the top.
    pub fn yank_dup(&mut self, idx: i64) {
        let Some(pos) = self.position(idx) else {
            return;
        };
        if let Some(e) = self.elements.get(pos).cloned() {
            self.elements.push(e);
        }
    }

    /// Inserts `e` at depth `idx`. The new element lands below the current
    /// occupant of that slot, so `idx` 0 puts it just under the top.
    pub fn shove(&mut self, e: T, idx: i64) {
        let Some(pos) = self.position(idx) else {
            return;
        };
        if pos >= self.size() {
            return;
        }
        self.elements.insert(pos, e);
    }

    /// Whether `shove` at `idx` would succeed on this stack.
    pub fn can_shove(&self, idx: i64) -> bool {
        self.position(idx).is_some_and(|pos| pos < self.size())
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> From<Vec<T>> for Stack<T> {
    fn from(elements: Vec<T>) -> Self {
        Stack::new(elements)
    }
}
