use ahash::AHashMap;

/// Empty when the predecessor chain from `end` never reaches `start`.
pub fn reconstruct_path<'a>(
    prev: &AHashMap<&'a str, &'a str>,
    start: &'a str,
    end: &'a str,
) -> Vec<&'a str> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match prev.get(current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Vec::new(),
        }
        // a predecessor cycle can never reach start
        if path.len() > prev.len() + 1 {
            return Vec::new();
        }
    }
    path.reverse();
    path
}

#[derive(Debug, Default)]
pub(crate) struct BestRoute<'a> {
    best: Option<(Vec<&'a str>, f64)>,
}

impl<'a> BestRoute<'a> {
    pub(crate) fn offer(&mut self, route: &[&'a str], cost: f64) {
        let improves = match &self.best {
            Some((_, best_cost)) => cost < *best_cost,
            None => true,
        };
        if improves {
            self.best = Some((route.to_vec(), cost));
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<&'a str>, f64) {
        self.best.unwrap_or_default()
    }
}
