use std::collections::HashSet;

/// Hands out names that are unique within one scope.
///
/// A name that is already taken gets the smallest numeric suffix (starting
/// at 2) that makes it unique.
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name`, returning the name actually assigned.
    pub fn claim(&mut self, name: &str) -> String {
        if self.taken.insert(name.to_string()) {
            return name.to_string();
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}{}", name, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.taken.contains(name)
    }
}
