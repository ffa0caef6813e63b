/// Unit labels in menu order. The label doubles as the directory name
/// under the course root.
const UNIT_LABELS: [&str; 2] = ["Unidad 1", "Unidad 2"];

/// One entry of the unit catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// The token the user types to select this unit.
    pub key: String,
    pub label: String,
}

/// Static mapping from menu key to unit label, built once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    pub fn course_units() -> Self {
        let units = UNIT_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| Unit {
                key: (i + 1).to_string(),
                label: (*label).to_string(),
            })
            .collect();
        Self { units }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn find(&self, key: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.key == key)
    }
}
