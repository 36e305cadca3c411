/// External (serializable) representations of instances and solutions
pub mod ext_repr;

/// Conversion of external representations into validated internal ones
pub mod import;

/// Conversion of internal solutions into external representations
pub mod export;
