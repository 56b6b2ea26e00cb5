/// The set of actor types a world knows how to spawn.
pub struct BlueprintLibrary {
    type_ids: Vec<String>,
}

impl BlueprintLibrary {
    pub fn new(type_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            type_ids: type_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// The first blueprint matching `pattern`. Only `*` is treated specially.
    pub fn find(&self, pattern: &str) -> Option<&str> {
        self.type_ids
            .iter()
            .find(|id| wildcard_match(pattern, id))
            .map(String::as_str)
    }
}

impl Default for BlueprintLibrary {
    fn default() -> Self {
        Self::new(vec![
            "vehicle.audi.tt",
            "vehicle.lincoln.mkz2017",
            "vehicle.tesla.model3",
            "walker.pedestrian.0001",
            "walker.pedestrian.0002",
        ])
    }
}

fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or("");
    if !text.starts_with(first) {
        return false;
    }
    let mut rest = &text[first.len()..];

    let parts: Vec<&str> = parts.collect();
    let (last, middle) = match parts.split_last() {
        Some(x) => x,
        // No wildcard at all.
        None => return rest.is_empty(),
    };

    for part in middle {
        match rest.find(part) {
            Some(i) => rest = &rest[i + part.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}
