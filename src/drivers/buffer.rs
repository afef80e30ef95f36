use std::collections::VecDeque;
use crate::drivers::{Sample, ScopeError};
/// Fixed-length FIFO holding the most recent values of one channel.
#[derive(Clone, Debug)]
pub struct RollingWindow {
    values: VecDeque<f64>,
}
impl RollingWindow {
    /// Window of `len` values, all starting at zero.
    pub fn zeroed(len: usize) -> Self {
        Self {
            values: std::iter::repeat(0.0).take(len).collect(),
        }
    }
    /// Appends `value` and returns the value that fell out of the window.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        if self.values.is_empty() {
            return Some(value);
        }
        let oldest = self.values.pop_front();
        self.values.push_back(value);
        oldest
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
/// Evenly spaced x values shared by every rolling window.
#[derive(Clone, Debug)]
pub struct TimeAxis {
    points: Vec<f64>,
}
impl TimeAxis {
    pub fn new(len: usize, step: f64) -> Self {
        let points = (0..len).map(|i| i as f64 * step).collect();
        Self { points }
    }
    pub fn points(&self) -> &[f64] {
        &self.points
    }
}
/// One named line of the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}
/// Immutable snapshot handed to the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotFrame {
    pub series: Vec<Series>,
}
/// Everything the plot is drawn from.
#[derive(Clone, Debug)]
pub enum PlotState {
    /// One rolling window per channel, drawn against a static time axis.
    Rolling {
        axis: TimeAxis,
        windows: Vec<RollingWindow>,
    },
    /// First field is the x value, the rest are y values; grows without bound.
    Trace { xs: Vec<f64>, ys: Vec<Vec<f64>> },
}
impl PlotState {
    pub fn rolling(channels: usize, len: usize, step: f64) -> Self {
        PlotState::Rolling {
            axis: TimeAxis::new(len, step),
            windows: (0..channels).map(|_| RollingWindow::zeroed(len)).collect(),
        }
    }
    pub fn trace(arity: usize) -> Self {
        PlotState::Trace {
            xs: Vec::new(),
            ys: vec![Vec::new(); arity.saturating_sub(1)],
        }
    }
    pub fn expected_arity(&self) -> usize {
        match self {
            PlotState::Rolling { windows, .. } => windows.len(),
            PlotState::Trace { ys, .. } => ys.len() + 1,
        }
    }
    pub fn push(&mut self, sample: &Sample) -> Result<(), ScopeError> {
        if sample.arity() != self.expected_arity() {
            return Err(ScopeError::ChannelMismatch {
                expected: self.expected_arity(),
                actual: sample.arity(),
            });
        }
        match self {
            PlotState::Rolling { windows, .. } => {
                for (window, &value) in windows.iter_mut().zip(&sample.values) {
                    window.push(value);
                }
            }
            PlotState::Trace { xs, ys } => {
                xs.push(sample.values[0]);
                for (series, &value) in ys.iter_mut().zip(&sample.values[1..]) {
                    series.push(value);
                }
            }
        }
        Ok(())
    }
    pub fn frame(&self) -> PlotFrame {
        let series = match self {
            PlotState::Rolling { axis, windows } => windows
                .iter()
                .enumerate()
                .map(|(idx, window)| Series {
                    label: format!("Ch{idx}"),
                    points: axis
                        .points()
                        .iter()
                        .zip(window.iter())
                        .map(|(&t, v)| [t, v])
                        .collect(),
                })
                .collect(),
            PlotState::Trace { xs, ys } => ys
                .iter()
                .enumerate()
                .map(|(idx, values)| Series {
                    label: format!("Ch{}", idx + 1),
                    points: xs.iter().zip(values).map(|(&x, &y)| [x, y]).collect(),
                })
                .collect(),
        };
        PlotFrame { series }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn rolling_window_keeps_length_and_drops_oldest() {
        let mut window = RollingWindow::zeroed(100);
        for i in 0..250 {
            window.push(i as f64);
        }
        assert_eq!(window.len(), 100);
        let values: Vec<f64> = window.iter().collect();
        assert_eq!(values.first().copied(), Some(150.0));
        assert_eq!(values.last().copied(), Some(249.0));
    }
    #[test]
    fn rolling_window_starts_zeroed_and_returns_evicted_value() {
        let mut window = RollingWindow::zeroed(3);
        assert_eq!(window.push(7.0), Some(0.0));
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![0.0, 0.0, 7.0]);
    }
    #[test]
    fn time_axis_has_hundred_points_spaced_by_tenths() {
        let axis = TimeAxis::new(100, 0.1);
        let points = axis.points();
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], 0.0);
        for pair in points.windows(2) {
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-9);
        }
        assert!((points[99] - 9.9).abs() < 1e-9);
    }
    #[test]
    fn rolling_state_frame_pairs_axis_with_window() {
        let mut state = PlotState::rolling(3, 4, 0.1);
        state.push(&Sample::new(vec![1.0, 2.0, 3.0])).unwrap();
        let frame = state.frame();
        assert_eq!(frame.series.len(), 3);
        assert_eq!(frame.series[1].label, "Ch1");
        let last = frame.series[1].points.last().copied().unwrap();
        assert!((last[0] - 0.3).abs() < 1e-9);
        assert_eq!(last[1], 2.0);
    }
    #[test]
    fn trace_state_accumulates_every_sample() {
        let mut state = PlotState::trace(2);
        for i in 0..150 {
            state.push(&Sample::new(vec![i as f64, (i * 2) as f64])).unwrap();
        }
        let frame = state.frame();
        assert_eq!(frame.series.len(), 1);
        assert_eq!(frame.series[0].points.len(), 150);
        assert_eq!(frame.series[0].points[10], [10.0, 20.0]);
    }
    #[test]
    fn mismatched_sample_is_rejected() {
        let mut state = PlotState::rolling(3, 10, 0.1);
        let err = state.push(&Sample::new(vec![1.0, 2.0])).unwrap_err();
        assert!(matches!(
            err,
            ScopeError::ChannelMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }
}
