/// Hilbert curve in two or more dimensions.
pub mod hilbert;
/// Specialised 2D Hilbert mapping.
mod hilbert2;
/// Generic N-D Hilbert mapping.
mod hilbertn;
