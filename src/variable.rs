//! Process-wide variable registry.
//!
//! A mutex-guarded process-wide cache hands out interned handles so that
//! equal names compare equal cheaply and share storage. A `Variable`
//! additionally carries a stable integer id (equality and ordering are by
//! id) and a type tag.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Type tag carried by a variable, determining what domain it ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableKind {
    Boolean,
    Integer,
    Real,
    /// Used for the reserved null variable and for synthesized temporaries
    /// whose domain is not yet known to the caller.
    Unspecified,
}

/// An opaque, process-wide unique variable handle.
///
/// Equality, ordering, and hashing are entirely determined by `id`: two
/// `Variable` values with the same id are always the same variable, even if
/// (through a bug in the caller) they were constructed with different
/// kinds — the registry's cached kind always wins.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    id: u32,
    kind: VariableKind,
    name: Option<Arc<str>>,
}

impl Variable {
    /// Reserved null variable (id 0). Never returned by `intern`/`fresh`.
    pub fn null() -> Self {
        NULL_VARIABLE.clone()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_null(&self) -> bool {
        self.id == 0
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Variable {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Variable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "_v{}", self.id),
        }
    }
}

struct RegistryInner {
    next_id: u32,
    by_name: HashMap<Arc<str>, Variable>,
}

/// Process-wide variable registry, guarded by a single mutex.
pub struct VariableRegistry {
    inner: Mutex<RegistryInner>,
}

static NULL_VARIABLE: Lazy<Variable> = Lazy::new(|| Variable {
    id: 0,
    kind: VariableKind::Unspecified,
    name: None,
});

static REGISTRY: Lazy<VariableRegistry> = Lazy::new(|| VariableRegistry {
    inner: Mutex::new(RegistryInner {
        next_id: 1, // id 0 is reserved for the null variable
        by_name: HashMap::new(),
    }),
});

impl VariableRegistry {
    pub fn global() -> &'static VariableRegistry {
        &REGISTRY
    }

    /// Returns the variable named `name`, creating it with `kind` on first
    /// use. Subsequent calls with the same name return the same `id`
    /// regardless of the `kind` passed — the first declaration wins.
    pub fn intern(&self, name: &str, kind: VariableKind) -> Variable {
        let mut inner = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(existing) = inner.by_name.get(name) {
            return existing.clone();
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let interned_name: Arc<str> = Arc::from(name);
        let var = Variable {
            id,
            kind,
            name: Some(interned_name.clone()),
        };
        inner.by_name.insert(interned_name, var.clone());
        var
    }

    /// Creates a brand-new, anonymous variable that is never returned by
    /// `intern` — used by algorithms that synthesize a temporary variable
    /// (e.g. introducing an auxiliary main variable for a resultant).
    pub fn fresh(&self, kind: VariableKind) -> Variable {
        let mut inner = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        Variable { id, kind, name: None }
    }
}

/// Convenience wrapper around `VariableRegistry::global().intern(..)`.
pub fn var(name: &str) -> Variable {
    VariableRegistry::global().intern(name, VariableKind::Real)
}

/// Convenience wrapper around `VariableRegistry::global().intern(..)` with
/// an explicit kind.
pub fn var_with_kind(name: &str, kind: VariableKind) -> Variable {
    VariableRegistry::global().intern(name, kind)
}
