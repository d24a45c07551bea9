// Static clinical reference data.
//
// Every collection here is an immutable in-memory snapshot standing in for a
// real backend. Modules expose `all()` plus pure lookup functions; nothing in
// this tree is ever mutated after first access.

pub mod appointments;
pub mod consultations;
pub mod medications;
pub mod messages;
pub mod patients;
pub mod products;
