//! Constants used throughout the library.

/// The constants that every evaluation context provides, unless a binding of the same name
/// overrides them.
pub const BUILTIN_CONSTANTS: [(&str, f64); 2] = [
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E),
];

/// The relative tolerance used when checking whether both sides of an equation are equal.
pub const EQUATION_TOLERANCE: f64 = 1e-9;

/// The default maximum number of terms the canonicalizer may produce when distributing a single
/// product.
pub const DEFAULT_MAX_TERMS: usize = 4096;
