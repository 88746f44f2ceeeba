use crate::artifacts::fold::tree::LineKind;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn kind(&self) -> LineKind {
        match self {
            Edit::Delete { .. } => LineKind::Removed,
            Edit::Insert { .. } => LineKind::Added,
            Edit::Equal { .. } => LineKind::Context,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind().marker(), self.value())
    }
}

/// Myers' O(ND) shortest edit script between two sequences.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    pub fn diff(&self) -> Vec<Edit<T>> {
        let mut edits = self
            .backtrack()
            .into_iter()
            .filter_map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    // only y moved: the line comes from b
                    self.b.get(prev_y as usize).map(|value| Edit::Insert {
                        value: value.clone(),
                    })
                } else if y == prev_y {
                    self.a.get(prev_x as usize).map(|value| Edit::Delete {
                        value: value.clone(),
                    })
                } else {
                    self.a.get(prev_x as usize).map(|value| Edit::Equal {
                        value: value.clone(),
                    })
                }
            })
            .collect::<Vec<_>>();

        edits.reverse();
        edits
    }

    /// Furthest reaching x per diagonal, recorded before every round `d`.
    fn shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = n + m;

        // one spare slot so the k == -d lookup stays in bounds for empty inputs
        let mut v = vec![0isize; 2 * offset as usize + 2];
        let mut trace = Vec::new();

        for d in 0..=offset {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    v[idx + 1]
                } else {
                    v[idx - 1] + 1
                };
                let mut y = x - k;

                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = x + y;
        let mut path = Vec::new();

        for (d, v) in self.shortest_edit().iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let came_from_insert = k == -d
                || (k != d && v[(offset + k - 1) as usize] < v[(offset + k + 1) as usize]);
            let prev_k = if came_from_insert {
                k + 1
            } else {
                k - 1
            };

            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        path
    }
}
