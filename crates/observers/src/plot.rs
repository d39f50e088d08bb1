//! Plotting observer for visualizing SQP runs.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use sqp_core::Observer;
use sqp_solvers::sqp;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("SQP").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    markers: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend, a linear y-axis and lines only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
            markers: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots y values as log₁₀. Non-positive values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Draws a marker at every recorded point in addition to the line.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely, or
/// `None` in a trace slot to skip only that trace.
///
/// [`sqp::Event`] implements `Plottable<2>`: the x value is the iteration
/// index and the traces are the residual norm and the objective. The final
/// `Converged` event repeats the last iterate and is skipped.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<2> for sqp::Event<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        match self {
            Self::Iterated { iter, .. } => Some(*iter as f64),
            Self::Converged { .. } => None,
        }
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.residual_norm()), Some(self.objective())]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Direct path**: pass `&mut PlotObserver<2>` (for example one built with
///   [`PlotObserver::convergence`]) straight to [`sqp::solve`].
/// - **Closure path**: wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] with whatever values you want, such as
///   the `(x, y)` path of the iterates.
///
/// Call [`show`][PlotObserver::show] to open the window once the solve is done.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::convergence();
/// sqp::solve(&problem, initial, &Config::default(), &mut obs)?;
/// obs.show(ShowConfig::new().title("SQP convergence").legend().log_y())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                    markers: config.markers,
                }))
            }),
        )
    }
}

impl PlotObserver<2> {
    /// Creates an observer with residual norm and objective traces, ready to
    /// receive [`sqp::Event`]s directly.
    #[must_use]
    pub fn convergence() -> Self {
        Self::new(["|grad L|", "Objective"])
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to the solver by value, so
/// [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
    markers: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("sqp_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let coords: Vec<[f64; 2]> = if self.log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.clone()
                    };
                    if self.markers {
                        plot_ui.points(
                            Points::new(PlotPoints::from(coords.clone()))
                                .radius(3.0)
                                .name(name),
                        );
                    }
                    plot_ui.line(Line::new(PlotPoints::from(coords)).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use sqp_solvers::sqp::{Action, Iterate};

    fn feed(obs: &mut PlotObserver<2>, event: &sqp::Event<'_>) {
        let action: Option<Action> = obs.observe(event);
        assert!(action.is_none());
    }

    #[test]
    fn iterated_events_record_both_traces() {
        let mut obs = PlotObserver::convergence();
        let iterate = Iterate::unconstrained((1.0, 2.0));

        feed(
            &mut obs,
            &sqp::Event::Iterated {
                iter: 3,
                iterate: &iterate,
                objective: 5.0,
                residual_norm: 0.25,
            },
        );

        assert_eq!(obs.data[0], [[3.0, 0.25]]);
        assert_eq!(obs.data[1], [[3.0, 5.0]]);
    }

    #[test]
    fn converged_event_is_skipped() {
        let mut obs = PlotObserver::convergence();
        let iterate = Iterate::unconstrained((0.0, 0.0));

        feed(
            &mut obs,
            &sqp::Event::Converged {
                iters: 4,
                iterate: &iterate,
                objective: 0.0,
                residual_norm: 0.0,
            },
        );

        assert!(obs.data.iter().all(Vec::is_empty));
    }

    #[test]
    fn record_skips_missing_slots() {
        let mut obs = PlotObserver::new(["path", "unused"]);
        obs.record(1.0, [Some(2.0), None]);
        obs.record(-0.5, [Some(0.75), None]);

        assert_eq!(obs.data[0].len(), 2);
        assert_relative_eq!(obs.data[0][1][0], -0.5);
        assert_relative_eq!(obs.data[0][1][1], 0.75);
        assert!(obs.data[1].is_empty());
    }
}
