/// The composite capability set.
///
/// Declares the `Composite` trait: the operations an external structured value
/// must provide to take part in the same arithmetic as plain numbers.
pub mod composite;
/// Timestamped series.
///
/// Defines `TimeSeries`, a composite made of strictly ascending timestamps and
/// one magnitude per timestamp. Series combine element-wise with scalars and
/// with each other on shared timestamps.
pub mod series;

pub mod core;
