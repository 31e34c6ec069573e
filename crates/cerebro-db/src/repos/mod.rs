//! Repository methods on [`CerebroDb`](crate::CerebroDb).

pub mod items;
