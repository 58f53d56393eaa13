use super::Term;

/// An iterator that iteratively traverses the tree of terms in left-to-right post-order (i.e.
/// depth-first).
///
/// This iterator is created by [`Term::post_order_iter`].
pub struct TermIter<'a> {
    stack: Vec<&'a Term>,
    last_visited: Option<&'a Term>,
}

impl<'a> TermIter<'a> {
    /// Creates a new iterator that traverses the tree of terms in left-to-right post-order (i.e.
    /// depth-first).
    pub fn new(term: &'a Term) -> Self {
        Self {
            stack: vec![term],
            last_visited: None,
        }
    }

    /// Pops the current term in the stack and marks it as the last visited term.
    fn visit(&mut self) -> Option<&'a Term> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given term matches the last visited term.
    fn is_last_visited(&self, term: &'a Term) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, term),
            None => false,
        }
    }
}

impl<'a> Iterator for TermIter<'a> {
    type Item = &'a Term;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let term = *self.stack.last()?;
            match term {
                Term::Constant(_) | Term::Variable(_) => return self.visit(),
                Term::Power(argument, _) | Term::Function(_, argument) => {
                    if self.is_last_visited(argument) {
                        return self.visit();
                    }
                    self.stack.push(argument);
                },
                Term::Sum(lhs, rhs)
                    | Term::Difference(lhs, rhs)
                    | Term::Product(lhs, rhs)
                    | Term::Quotient(lhs, rhs) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
            }
        }
    }
}
