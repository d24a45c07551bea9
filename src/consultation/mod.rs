// Consultation drafting workflow.
//
// `draft` is the pure data model and action reducer; `session` owns one
// draft's lifecycle against the persistent store (hydrate, edit, save,
// submit).

pub mod draft;
pub mod session;
