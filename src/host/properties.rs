use std::fmt;

/// Widget hint for a single property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    Bool,
    Int { min: i64, max: i64, step: i64 },
    Float { min: f64, max: f64, step: f64 },
}

/// A single entry of a property panel
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Settings key the property edits
    pub name: String,

    /// Label shown to the user
    pub description: String,

    pub kind: PropertyKind,
}

/// Ordered description of a source's configurable properties
#[derive(Debug, Clone, Default)]
pub struct Properties {
    items: Vec<Property>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bool(&mut self, name: &str, description: &str) {
        self.push(name, description, PropertyKind::Bool);
    }

    pub fn add_int(&mut self, name: &str, description: &str, min: i64, max: i64, step: i64) {
        self.push(name, description, PropertyKind::Int { min, max, step });
    }

    pub fn add_float(&mut self, name: &str, description: &str, min: f64, max: f64, step: f64) {
        self.push(name, description, PropertyKind::Float { min, max, step });
    }

    fn push(&mut self, name: &str, description: &str, kind: PropertyKind) {
        self.items.push(Property {
            name: name.to_string(),
            description: description.to_string(),
            kind,
        });
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.items.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PropertyKind::Bool => write!(
                f,
                "{:<28} bool                   {}",
                self.name, self.description
            ),
            PropertyKind::Int { min, max, step } => write!(
                f,
                "{:<28} int   [{}, {}] step {:<5} {}",
                self.name, min, max, step, self.description
            ),
            PropertyKind::Float { min, max, step } => write!(
                f,
                "{:<28} float [{}, {}] step {:<4} {}",
                self.name, min, max, step, self.description
            ),
        }
    }
}
