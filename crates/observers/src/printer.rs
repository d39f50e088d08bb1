use std::io::{self, Write};

use sqp_core::Observer;
use sqp_solvers::sqp::{Action, Event};

/// An observer that writes human-readable solver diagnostics.
///
/// Every [`Event::Iterated`] produces one line with the iteration index, the
/// current point, the objective and the residual norm. [`Event::Converged`]
/// produces a short summary block. The format is meant for people, not for
/// parsing.
///
/// Write failures are ignored; diagnostics never abort a solve.
///
/// # Example
///
/// ```
/// use nalgebra::{DMatrix, DVector, Matrix2};
/// use sqp_core::Callables;
/// use sqp_observers::Printer;
/// use sqp_solvers::sqp::{self, Config, Iterate};
///
/// let problem = Callables::new(
///     0,
///     |x, y| x * x + y * y,
///     |_, _| Matrix2::identity() * 2.0,
///     |_, _| Vec::new(),
///     |_, _| DMatrix::zeros(0, 2),
///     |x, y, _: &DVector<f64>| DVector::from_vec(vec![2.0 * x, 2.0 * y]),
/// );
///
/// let mut printer = Printer::new(Vec::new());
/// sqp::solve(
///     &problem,
///     Iterate::unconstrained((1.0, 1.0)),
///     &Config::new(10, 1e-5, 1.0).unwrap(),
///     &mut printer,
/// )
/// .unwrap();
///
/// let output = String::from_utf8(printer.into_inner()).unwrap();
/// assert!(output.contains("converged after 1 iterations"));
/// ```
pub struct Printer<W> {
    writer: W,
}

impl Printer<io::Stdout> {
    /// Creates a printer that writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    /// Creates a printer that writes to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the printer and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print(&mut self, event: &Event<'_>) {
        match *event {
            Event::Iterated {
                iter,
                iterate,
                objective,
                residual_norm,
            } => {
                let _ = writeln!(
                    self.writer,
                    "[sqp] iter {iter:>6} | x {:>+13.6e} | y {:>+13.6e} | f {objective:>13.6e} | |grad L| {residual_norm:>13.6e}",
                    iterate.point.x, iterate.point.y,
                );
            }
            Event::Converged {
                iters,
                iterate,
                objective,
                residual_norm,
            } => {
                let _ = writeln!(self.writer, "[sqp] converged after {iters} iterations");
                let _ = writeln!(
                    self.writer,
                    "      point     ({:.3}, {:.3})",
                    iterate.point.x, iterate.point.y,
                );
                let _ = writeln!(self.writer, "      objective {objective:.6e}");
                let _ = writeln!(self.writer, "      |grad L|  {residual_norm:.6e}");
            }
        }
    }
}

impl<'a, W: Write> Observer<Event<'a>, Action> for Printer<W> {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        self.print(event);
        None
    }
}

/// Allows `&mut Printer` to be passed to the solver, so the writer can be
/// recovered after the solve completes.
impl<'a, W: Write> Observer<Event<'a>, Action> for &mut Printer<W> {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::DVector;
    use sqp_solvers::sqp::Iterate;

    fn render(events: &[Event<'_>]) -> String {
        let mut printer = Printer::new(Vec::new());
        for event in events {
            assert!(printer.observe(event).is_none());
        }
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn iterated_writes_one_line() {
        let iterate = Iterate::new([0.5, -1.25], DVector::zeros(1));
        let output = render(&[Event::Iterated {
            iter: 7,
            iterate: &iterate,
            objective: 2.0,
            residual_norm: 1e-3,
        }]);

        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("[sqp] iter      7"));
        assert!(output.contains("+5.000000e-1"));
        assert!(output.contains("-1.250000e0"));
        assert!(output.contains("2.000000e0"));
        assert!(output.trim_end().ends_with("1.000000e-3"));
    }

    #[test]
    fn converged_writes_summary_block() {
        let iterate = Iterate::new([-1.0, 0.12345], DVector::zeros(0));
        let output = render(&[Event::Converged {
            iters: 12,
            iterate: &iterate,
            objective: 0.5,
            residual_norm: 4e-6,
        }]);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "[sqp] converged after 12 iterations");
        assert!(lines[1].ends_with("(-1.000, 0.123)"));
        assert!(lines[2].contains("objective 5.000000e-1"));
    }

    #[test]
    fn lines_follow_event_order() {
        let first = Iterate::unconstrained((1.0, 1.0));
        let second = Iterate::unconstrained((0.0, 0.0));
        let output = render(&[
            Event::Iterated {
                iter: 0,
                iterate: &first,
                objective: 2.0,
                residual_norm: 2.0,
            },
            Event::Iterated {
                iter: 1,
                iterate: &second,
                objective: 0.0,
                residual_norm: 0.0,
            },
            Event::Converged {
                iters: 1,
                iterate: &second,
                objective: 0.0,
                residual_norm: 0.0,
            },
        ]);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("[sqp] iter      0"));
        assert!(lines[1].starts_with("[sqp] iter      1"));
        assert!(lines[2].starts_with("[sqp] converged"));
    }
}
