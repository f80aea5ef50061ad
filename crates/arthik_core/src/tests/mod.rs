//! Scenario and property tests for the planning engines
//!
//! Leaf modules keep their own unit tests inline; these files cover the
//! cross-module scenarios and the invariants callers rely on.

mod debts;
