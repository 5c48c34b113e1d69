use uuid::Uuid;

/// Source of record identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `"<prefix>-1"`, `"<prefix>-2"`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<F: FnMut() -> String> IdGenerator for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_from_one() {
        let mut ids = SequentialIds::new("role");
        assert_eq!(ids.next_id(), "role-1");
        assert_eq!(ids.next_id(), "role-2");
    }

    #[test]
    fn uuid_ids_differ() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn closures_are_generators() {
        let mut n = 0;
        let mut ids = || {
            n += 10;
            n.to_string()
        };
        assert_eq!(IdGenerator::next_id(&mut ids), "10");
        assert_eq!(IdGenerator::next_id(&mut ids), "20");
    }
}
