//! Reusable observers for the SQP solver.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! watching or steering [`sqp::solve`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasResidual`], [`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Printer`] — writes one diagnostic line per iteration and a summary
//!   block on convergence
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing solver behavior via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: sqp_core::Observer
//! [`sqp::solve`]: sqp_solvers::sqp::solve
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod printer;

pub use printer::Printer;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
